use yew::prelude::*;

use crate::hooks::use_current_role;
use crate::models::Role;

#[function_component(Home)]
pub fn home() -> Html {
    let role = use_current_role();
    let greeting = match role {
        Role::Unauthenticated => "Welcome. Sign in to continue.",
        Role::Professional => "Welcome back. Your patients and appointments are in the menu.",
        Role::Patient => "Welcome back. Record today's mood from the menu.",
    };
    html! {
        <section class="home">
            <h2>{"Home"}</h2>
            <p>{greeting}</p>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct PlaceholderProps {
    pub title: AttrValue,
}

/// Páginas CRUD fuera del contexto de sesión (gestión de pacientes, perfil)
#[function_component(Placeholder)]
pub fn placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <section class="placeholder">
            <h2>{props.title.clone()}</h2>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotAllowedProps {
    pub path: AttrValue,
}

#[function_component(NotAllowed)]
pub fn not_allowed(props: &NotAllowedProps) -> Html {
    html! {
        <section class="not-allowed">
            <h2>{"Not available"}</h2>
            <p>{format!("{} is not available for your role.", props.path)}</p>
        </section>
    }
}
