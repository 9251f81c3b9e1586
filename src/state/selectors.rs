// ============================================================================
// SESSION SELECTORS - Proyecciones de solo lectura del estado de sesión
// ============================================================================

use crate::models::{PatientId, Role};
use crate::state::SessionState;

/// Proyección pura sobre el estado; la forma interna nunca sale de aquí
pub type Selector<T> = fn(&SessionState) -> T;

pub fn current_role(state: &SessionState) -> Role {
    state.role
}

pub fn current_patient_id(state: &SessionState) -> Option<PatientId> {
    state.patient_id
}
