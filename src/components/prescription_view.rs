use yew::prelude::*;

use crate::components::IdentityUnavailable;
use crate::hooks::{use_patient_fetch, use_patient_scope, FetchState};
use crate::scoping::PatientScope;
use crate::services::get_medications_by_patient_id;

#[derive(Properties, PartialEq)]
pub struct PrescriptionViewProps {
    #[prop_or_default]
    pub route_param: Option<String>,
}

#[function_component(PrescriptionView)]
pub fn prescription_view(props: &PrescriptionViewProps) -> Html {
    let scope = use_patient_scope(props.route_param.clone());
    let medications = use_patient_fetch(scope.patient_id(), (), |patient_id, ()| {
        get_medications_by_patient_id(patient_id)
    });

    let patient_id = match scope {
        PatientScope::Resolved(id) => id,
        PatientScope::Unavailable(reason) => return html! { <IdentityUnavailable {reason} /> },
    };

    let body = match &*medications {
        FetchState::Idle | FetchState::Loading => html! { <p class="loading">{"Loading..."}</p> },
        FetchState::Failed(e) => html! { <p class="error">{format!("Could not load prescription: {}", e)}</p> },
        FetchState::Loaded(list) if list.is_empty() => html! { <p class="empty">{"No medications prescribed."}</p> },
        FetchState::Loaded(list) => html! {
            <ul class="medication-list">
                { for list.iter().map(|m| html! {
                    <li class="medication">
                        <strong>{m.name.clone()}</strong>
                        if let Some(quantity) = m.quantity.clone() { <span>{quantity}</span> }
                        if let Some(interval) = m.interval.clone() { <span>{interval}</span> }
                        if let Some(description) = m.description.clone() { <p>{description}</p> }
                    </li>
                }) }
            </ul>
        },
    };

    html! {
        <section class="prescription-view">
            <h2>{format!("Prescription · patient {}", patient_id)}</h2>
            {body}
        </section>
    }
}
