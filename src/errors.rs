// ============================================================================
// ERRORS - Errores del contexto de sesión y de la resolución de paciente
// ============================================================================

use thiserror::Error;

use crate::models::Role;

/// Rechazos del reducer y de la decodificación del login.
/// Ninguno es fatal: el estado queda intacto y `login` sigue accesible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("role {0} cannot be set explicitly (use SignOut to leave the session)")]
    InvalidRole(Role),
    #[error("patient id {patient_id} rejected: current role is {role}, not Patient")]
    PatientIdWithoutPatientRole { role: Role, patient_id: i64 },
    #[error("patient id must be a positive integer, got {0}")]
    NonPositivePatientId(i64),
    #[error("unknown role code in login response: {0:?}")]
    UnknownRoleCode(String),
    #[error("patient account {account_id} has no patient id")]
    MissingPatientId { account_id: i64 },
}

/// Por qué una vista con alcance de paciente no puede resolver su identificador.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    #[error("identity unavailable: no patient id in route or session")]
    IdentityUnavailable,
    #[error("invalid patient id in route: {0:?}")]
    InvalidRouteParameter(String),
    #[error("patient accounts can only view their own data (route asked for {0:?})")]
    ForeignPatient(String),
}
