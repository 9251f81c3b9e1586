use yew::prelude::*;

use crate::hooks::{use_mounted, FetchState};
use crate::models::Session;
use crate::services::get_all_sessions;

/// Agenda del profesional: todas las citas con su hora de fin
#[function_component(AppointmentList)]
pub fn appointment_list() -> Html {
    let mounted = use_mounted();
    let sessions = use_state(|| FetchState::<Vec<Session>>::Idle);

    {
        let sessions = sessions.clone();
        use_effect_with((), move |_| {
            sessions.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                let result = get_all_sessions().await;
                if !mounted.get() {
                    return;
                }
                match result {
                    Ok(list) => sessions.set(FetchState::Loaded(list)),
                    Err(e) => {
                        log::error!("❌ [APPOINTMENTS] Error cargando citas: {}", e);
                        sessions.set(FetchState::Failed(e));
                    }
                }
            });
            || ()
        });
    }

    let body = match &*sessions {
        FetchState::Idle | FetchState::Loading => html! { <p class="loading">{"Loading..."}</p> },
        FetchState::Failed(e) => html! { <p class="error">{format!("Could not load appointments: {}", e)}</p> },
        FetchState::Loaded(list) if list.is_empty() => html! { <p class="empty">{"No appointments."}</p> },
        FetchState::Loaded(list) => html! {
            <table class="appointment-table">
                <thead>
                    <tr>
                        <th>{"Id"}</th>
                        <th>{"Professional"}</th>
                        <th>{"Patient"}</th>
                        <th>{"Date"}</th>
                        <th>{"Ends at"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for list.iter().map(|s| html! {
                        <tr key={s.id.to_string()}>
                            <td>{s.id.to_string()}</td>
                            <td>{s.id_professional.to_string()}</td>
                            <td>{s.patient_name.clone()}</td>
                            <td>{s.appointment_date.clone()}</td>
                            <td>{s.end_time_label().unwrap_or_else(|| "-".to_string())}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        },
    };

    html! {
        <section class="appointment-list">
            <h2>{"Appointments"}</h2>
            {body}
        </section>
    }
}
