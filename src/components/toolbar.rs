use yew::prelude::*;

use crate::hooks::{use_current_role, use_login, use_navigation_menu, use_navigator};
use crate::navigation::AppRoute;

#[function_component(Toolbar)]
pub fn toolbar() -> Html {
    let menu = use_navigation_menu();
    let role = use_current_role();
    let navigator = use_navigator();
    let login = use_login();

    let items = menu
        .into_iter()
        .map(|entry| {
            let active = entry.route == navigator.route;
            let onclick = {
                let navigator = navigator.clone();
                let route = entry.route.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    navigator.push(route.clone());
                })
            };
            html! {
                <a href={entry.path()} class={classes!("toolbar-link", active.then_some("active"))} {onclick}>
                    {entry.label}
                </a>
            }
        })
        .collect::<Html>();

    let sign_out = {
        let navigator = navigator.clone();
        let sign_out = login.sign_out.clone();
        Callback::from(move |_e: MouseEvent| {
            sign_out.emit(());
            navigator.push(AppRoute::Login);
        })
    };

    html! {
        <header class="app-toolbar">
            <span class="toolbar-title">{"Care Session"}</span>
            <nav class="toolbar-menu">{items}</nav>
            if role.is_authenticated() {
                <button class="btn-sign-out" onclick={sign_out}>{"sign-out"}</button>
            }
        </header>
    }
}
