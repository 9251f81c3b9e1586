// ============================================================================
// SESSION ACTIONS - Únicas intenciones que cambian el estado de sesión
// ============================================================================

use crate::models::Role;

/// Acción despachada por el flujo de login (o el toolbar para `SignOut`).
/// No valida nada: el reducer decide si se acepta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    SetRole(Role),
    SetPatientId(i64),
    SignOut,
}

impl SessionAction {
    pub fn name(&self) -> &'static str {
        match self {
            SessionAction::SetRole(_) => "SetRole",
            SessionAction::SetPatientId(_) => "SetPatientId",
            SessionAction::SignOut => "SignOut",
        }
    }
}
