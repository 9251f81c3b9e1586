// ============================================================================
// APP - Raíz de composición: store de sesión, ruta actual y navegación
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use crate::components::{
    AnalyticsDashboard, AnalyticsKind, AppointmentList, Home, LoginScreen, MoodForm, NotAllowed, Placeholder,
    PrescriptionView, Toolbar,
};
use crate::hooks::{use_current_patient_id, use_current_role, use_navigator, Navigator, SessionProvider};
use crate::navigation::AppRoute;
use crate::state::SessionStore;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history(path: &str) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
        log::warn!("⚠️ [ROUTER] No se pudo actualizar el historial: {:?}", e);
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // Único SessionStore del cliente; vive lo mismo que App
    let store = use_memo((), |_| SessionStore::new());
    let route = use_state(|| AppRoute::from_path(&current_path()));

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: AppRoute| {
            log::info!("🧭 [ROUTER] {}", next.to_path());
            push_history(&next.to_path());
            route.set(next);
        })
    };

    // Atrás / adelante del navegador
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                route.set(AppRoute::from_path(&current_path()));
            }) as Box<dyn FnMut(web_sys::Event)>);

            let window = web_sys::window();
            if let Some(win) = &window {
                if let Err(e) = win.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref()) {
                    log::warn!("⚠️ [ROUTER] popstate listener no registrado: {:?}", e);
                }
            }

            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref());
                }
            }
        });
    }

    let navigator = Navigator::new((*route).clone(), navigate);

    html! {
        <SessionProvider reader={store.reader()} dispatcher={store.dispatcher()}>
            <ContextProvider<Navigator> context={navigator}>
                <Toolbar />
                <main class="app-content">
                    <RouteView />
                </main>
            </ContextProvider<Navigator>>
        </SessionProvider>
    }
}

/// Vista de la ruta actual, filtrada por el rol vigente
#[function_component(RouteView)]
fn route_view() -> Html {
    let role = use_current_role();
    let session_patient = use_current_patient_id();
    let navigator = use_navigator();

    // Tras un login correcto se sale de la pantalla de login
    {
        let navigator = navigator.clone();
        use_effect_with((role, navigator.route.clone()), move |(role, route)| {
            if *route == AppRoute::Login && role.is_authenticated() {
                navigator.push(AppRoute::Home);
            }
            || ()
        });
    }

    let route = navigator.route.clone();
    if !route.is_reachable(role, session_patient) {
        if let AppRoute::NotFound(path) = &route {
            return html! { <NotAllowed path={path.clone()} /> };
        }
        if !role.is_authenticated() {
            return html! { <LoginScreen /> };
        }
        return html! { <NotAllowed path={route.to_path()} /> };
    }

    match route {
        AppRoute::Home => html! { <Home /> },
        AppRoute::Login => html! { <LoginScreen /> },
        AppRoute::PatientManagement => html! { <Placeholder title="Patient management" /> },
        AppRoute::AppointmentList => html! { <AppointmentList /> },
        AppRoute::Profile => html! { <Placeholder title="Profile" /> },
        AppRoute::MoodState { patient_id } => html! { <MoodForm route_param={patient_id} /> },
        AppRoute::BiologicalFunctions { patient_id } => html! {
            <AnalyticsDashboard kind={AnalyticsKind::Biological} route_param={patient_id} />
        },
        AppRoute::AnalyticsDashboard { patient_id } => html! {
            <AnalyticsDashboard kind={AnalyticsKind::Mood} route_param={patient_id} />
        },
        AppRoute::Prescription { patient_id } | AppRoute::MedicationManagement { patient_id } => html! {
            <PrescriptionView route_param={patient_id} />
        },
        AppRoute::NotFound(path) => html! { <NotAllowed {path} /> },
    }
}
