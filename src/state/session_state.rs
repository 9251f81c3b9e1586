// ============================================================================
// SESSION STATE - Rol y paciente de la sesión en curso
// ============================================================================

use crate::models::{PatientId, Role};

/// Registro autoritativo `{rol, paciente}` de la sesión.
///
/// Los campos son privados al crate: fuera de aquí solo se lee a través de
/// los selectores (`state::selectors`) y solo se modifica con acciones.
/// Invariante: `patient_id.is_some()` implica `role == Role::Patient`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub(crate) role: Role,
    pub(crate) patient_id: Option<PatientId>,
}

impl SessionState {
    /// Estado inicial: sin autenticar, sin paciente
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn holds_invariant(&self) -> bool {
        self.patient_id.is_none() || self.role == Role::Patient
    }
}
