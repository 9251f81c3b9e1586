// ============================================================================
// USE PATIENT SCOPE - Resolución del paciente + fetch protegido
// ============================================================================

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use crate::hooks::{use_current_patient_id, use_current_role};
use crate::models::PatientId;
use crate::scoping::PatientScope;

#[hook]
pub fn use_patient_scope(route_param: Option<String>) -> PatientScope {
    let role = use_current_role();
    let session_patient = use_current_patient_id();
    PatientScope::resolve(role, route_param.as_deref(), session_patient)
}

/// `false` en cuanto el componente se desmonta
#[hook]
pub fn use_mounted() -> Rc<Cell<bool>> {
    let mounted = use_memo((), |_| Cell::new(true));
    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            mounted.set(true);
            move || mounted.set(false)
        });
    }
    mounted
}

/// Una activación de fetch: sus resultados solo se aplican mientras siga vigente.
/// El cleanup del efecto (desmontaje o nueva activación) la cancela.
#[derive(Clone, Debug)]
pub struct Activation(Rc<Cell<bool>>);

impl Activation {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn cancel(&self) {
        self.0.set(false);
    }

    /// `Some(result)` si la activación sigue vigente; si no, el resultado se descarta
    pub fn accept<T>(&self, result: T) -> Option<T> {
        self.0.get().then_some(result)
    }
}

impl Default for Activation {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

/// Lanza `fetch` para el paciente resuelto cada vez que cambian `(paciente, deps)`.
///
/// Sin paciente no hay petición. Un resultado que llega después de desmontar
/// o de una activación más reciente se descarta.
#[hook]
pub fn use_patient_fetch<T, D, F, Fut>(
    patient_id: Option<PatientId>,
    deps: D,
    fetch: F,
) -> UseStateHandle<FetchState<T>>
where
    T: Clone + PartialEq + 'static,
    D: Clone + PartialEq + 'static,
    F: FnOnce(PatientId, D) -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = use_state(|| FetchState::Idle);
    {
        let state = state.clone();
        use_effect_with((patient_id, deps), move |(patient_id, deps)| {
            let activation = Activation::new();
            match *patient_id {
                Some(id) => {
                    state.set(FetchState::Loading);
                    let future = fetch(id, deps.clone());
                    let activation = activation.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let Some(result) = activation.accept(future.await) else {
                            log::debug!("🗑️ [SCOPE] Resultado tardío para paciente {} descartado", id);
                            return;
                        };
                        match result {
                            Ok(value) => state.set(FetchState::Loaded(value)),
                            Err(e) => {
                                log::error!("❌ [SCOPE] Error cargando datos del paciente {}: {}", id, e);
                                state.set(FetchState::Failed(e));
                            }
                        }
                    });
                }
                None => state.set(FetchState::Idle),
            }
            move || activation.cancel()
        });
    }
    state
}
