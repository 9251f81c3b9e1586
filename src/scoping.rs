// ============================================================================
// SCOPING - Qué paciente consulta una vista con alcance de paciente
// ============================================================================
// Precedencia fija, evaluada una vez por activación de la vista:
// 1. parámetro de ruta (profesional viendo a un paciente concreto)
// 2. paciente de la sesión (paciente viendo sus propios datos)
// Un paciente nunca consulta otro identificador que el suyo.
// ============================================================================

use crate::errors::ScopeError;
use crate::models::{PatientId, Role};

/// Estado con el que se renderiza una vista con alcance de paciente
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatientScope {
    Resolved(PatientId),
    Unavailable(ScopeError),
}

impl PatientScope {
    pub fn resolve(role: Role, route_param: Option<&str>, session_patient: Option<PatientId>) -> Self {
        match resolve_patient_id(role, route_param, session_patient) {
            Ok(id) => PatientScope::Resolved(id),
            Err(e) => PatientScope::Unavailable(e),
        }
    }

    pub fn patient_id(&self) -> Option<PatientId> {
        match self {
            PatientScope::Resolved(id) => Some(*id),
            PatientScope::Unavailable(_) => None,
        }
    }
}

/// Un parámetro de ruta mal formado es terminal: no se cae al paciente de la
/// sesión, porque la ruta pedía explícitamente otro paciente.
///
/// Con rol `Patient` el parámetro solo se acepta si coincide con el paciente
/// de la sesión; cualquier otro id es `ForeignPatient`.
pub fn resolve_patient_id(
    role: Role,
    route_param: Option<&str>,
    session_patient: Option<PatientId>,
) -> Result<PatientId, ScopeError> {
    let Some(raw) = route_param else {
        return session_patient.ok_or(ScopeError::IdentityUnavailable);
    };
    let requested = PatientId::parse(raw).ok_or_else(|| ScopeError::InvalidRouteParameter(raw.to_string()))?;
    if role == Role::Patient && Some(requested) != session_patient {
        log::warn!("🚫 [SCOPE] Paciente {:?} pidió datos del paciente {}", session_patient.map(|id| id.get()), requested);
        return Err(ScopeError::ForeignPatient(raw.to_string()));
    }
    Ok(requested)
}
