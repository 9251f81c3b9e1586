// ============================================================================
// USE SESSION HOOKS - Selectores de sesión como estado de Yew
// ============================================================================
// Cada hook se suscribe en un efecto y suelta la suscripción en el cleanup,
// así la vida de la suscripción es la del componente, no la del store.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session_reader;
use crate::models::{PatientId, Role};
use crate::navigation::{menu_for, NavEntry};
use crate::state::selectors::{self, Selector};

/// Valor de un selector, re-renderizando el componente cuando cambia
#[hook]
pub fn use_selector<T>(selector: Selector<T>) -> T
where
    T: PartialEq + Clone + 'static,
{
    let reader = use_session_reader();
    let value = use_state_eq(|| reader.select(selector));
    {
        let value = value.clone();
        use_effect_with(reader, move |reader| {
            // Puede haber habido commits entre el render y el efecto
            value.set(reader.select(selector));
            let subscription = reader.subscribe_select(selector, move |next| value.set(next));
            move || drop(subscription)
        });
    }
    (*value).clone()
}

#[hook]
pub fn use_current_role() -> Role {
    use_selector(selectors::current_role)
}

#[hook]
pub fn use_current_patient_id() -> Option<PatientId> {
    use_selector(selectors::current_patient_id)
}

/// Menú del toolbar; se recalcula en cada render con el rol y el id vigentes
#[hook]
pub fn use_navigation_menu() -> Vec<NavEntry> {
    let role = use_current_role();
    let patient_id = use_current_patient_id();
    menu_for(role, patient_id)
}
