use yew::prelude::*;

use crate::components::IdentityUnavailable;
use crate::hooks::{use_mounted, use_patient_scope};
use crate::models::{has_mood_for_day, MoodState, MOOD_SCALE};
use crate::scoping::PatientScope;
use crate::services::{create_mood_state, get_mood_states_by_patient_id};

#[derive(Properties, PartialEq)]
pub struct MoodFormProps {
    #[prop_or_default]
    pub route_param: Option<String>,
}

#[function_component(MoodForm)]
pub fn mood_form(props: &MoodFormProps) -> Html {
    let scope = use_patient_scope(props.route_param.clone());
    let mounted = use_mounted();
    let message = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let patient_id = match scope {
        PatientScope::Resolved(id) => id,
        PatientScope::Unavailable(reason) => return html! { <IdentityUnavailable {reason} /> },
    };

    let buttons = MOOD_SCALE
        .map(|mood| {
            let onclick = {
                let mounted = mounted.clone();
                let message = message.clone();
                let saving = saving.clone();
                Callback::from(move |_e: MouseEvent| {
                    saving.set(true);
                    let mounted = mounted.clone();
                    let message = message.clone();
                    let saving = saving.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let today = chrono::Local::now().date_naive();
                        let result = match get_mood_states_by_patient_id(patient_id).await {
                            Ok(moods) if has_mood_for_day(&moods, today) => {
                                Ok("You already have a mood recorded for today.".to_string())
                            }
                            Ok(_) => create_mood_state(MoodState::new(patient_id.get(), mood, today), patient_id)
                                .await
                                .map(|_| "Mood saved.".to_string()),
                            Err(e) => Err(e),
                        };
                        if !mounted.get() {
                            return;
                        }
                        saving.set(false);
                        match result {
                            Ok(text) => message.set(Some(text)),
                            Err(e) => {
                                log::error!("❌ [MOOD] Error registrando ánimo: {}", e);
                                message.set(Some(format!("Could not save mood: {}", e)));
                            }
                        }
                    });
                })
            };
            html! {
                <button class={classes!("mood-btn", format!("mood-{}", mood))} disabled={*saving} {onclick}>
                    {mood.to_string()}
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <section class="mood-form">
            <h2>{"How do you feel today?"}</h2>
            <div class="mood-scale">{buttons}</div>
            if let Some(text) = (*message).clone() {
                <p class="mood-message">{text}</p>
            }
        </section>
    }
}
