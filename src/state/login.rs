// ============================================================================
// LOGIN OUTCOME - Decodificación del login en el borde (AccountDto -> acciones)
// ============================================================================

use crate::errors::SessionError;
use crate::models::{AccountDto, PatientId, Role};
use crate::state::SessionAction;

/// Resultado de login ya validado: rol cerrado y, si es paciente, su id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    role: Role,
    patient_id: Option<PatientId>,
}

impl LoginOutcome {
    pub fn professional() -> Self {
        Self {
            role: Role::Professional,
            patient_id: None,
        }
    }

    pub fn patient(patient_id: PatientId) -> Self {
        Self {
            role: Role::Patient,
            patient_id: Some(patient_id),
        }
    }

    /// Los códigos de rol desconocidos y los pacientes sin id se rechazan aquí
    pub fn from_account(account: &AccountDto) -> Result<Self, SessionError> {
        match Role::from_code(&account.role.as_code())? {
            Role::Patient => {
                let raw = account.patient_id.ok_or(SessionError::MissingPatientId {
                    account_id: account.id,
                })?;
                Ok(Self::patient(PatientId::try_from(raw)?))
            }
            _ => {
                if account.patient_id.is_some() {
                    log::debug!(
                        "ℹ️ [LOGIN] Cuenta {} no es paciente, se ignora su patientId",
                        account.id
                    );
                }
                Ok(Self::professional())
            }
        }
    }

    /// Acciones a despachar, en orden: rol primero, luego identidad
    pub fn actions(&self) -> Vec<SessionAction> {
        let mut actions = vec![SessionAction::SetRole(self.role)];
        if let Some(id) = self.patient_id {
            actions.push(SessionAction::SetPatientId(id.get()));
        }
        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoleCode;

    fn account(role: RoleCode, patient_id: Option<i64>) -> AccountDto {
        AccountDto {
            id: 10,
            user_name: "user".to_string(),
            role,
            patient_id,
        }
    }

    #[test]
    fn patient_account_yields_role_then_id() {
        let outcome =
            LoginOutcome::from_account(&account(RoleCode::Text("2".into()), Some(42))).unwrap();
        assert_eq!(outcome.role, Role::Patient);
        assert_eq!(
            outcome.actions(),
            vec![SessionAction::SetRole(Role::Patient), SessionAction::SetPatientId(42)]
        );
    }

    #[test]
    fn professional_account_drops_patient_id() {
        let outcome = LoginOutcome::from_account(&account(RoleCode::Number(1), Some(42))).unwrap();
        assert_eq!(outcome, LoginOutcome::professional());
        assert_eq!(outcome.actions(), vec![SessionAction::SetRole(Role::Professional)]);
    }

    #[test]
    fn unknown_role_code_rejected_at_boundary() {
        let err = LoginOutcome::from_account(&account(RoleCode::Text("admin".into()), None)).unwrap_err();
        assert_eq!(err, SessionError::UnknownRoleCode("admin".to_string()));
    }

    #[test]
    fn patient_without_identity_rejected() {
        assert_eq!(
            LoginOutcome::from_account(&account(RoleCode::Number(2), None)),
            Err(SessionError::MissingPatientId { account_id: 10 })
        );
        assert_eq!(
            LoginOutcome::from_account(&account(RoleCode::Number(2), Some(0))),
            Err(SessionError::NonPositivePatientId(0))
        );
    }
}
