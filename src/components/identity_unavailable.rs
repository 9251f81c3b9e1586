use yew::prelude::*;

use crate::errors::ScopeError;
use crate::hooks::use_navigator;
use crate::navigation::AppRoute;

#[derive(Properties, PartialEq)]
pub struct IdentityUnavailableProps {
    pub reason: ScopeError,
}

/// Estado terminal de una vista con alcance de paciente: no se hizo ninguna petición
#[function_component(IdentityUnavailable)]
pub fn identity_unavailable(props: &IdentityUnavailableProps) -> Html {
    let navigator = use_navigator();
    let to_login = Callback::from(move |_e: MouseEvent| navigator.push(AppRoute::Login));

    html! {
        <section class="identity-unavailable">
            <h2>{"Patient identity unavailable"}</h2>
            <p>{props.reason.to_string()}</p>
            <button class="btn-login" onclick={to_login}>{"Go to login"}</button>
        </section>
    }
}
