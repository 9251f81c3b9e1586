// ============================================================================
// SESSION REDUCER - Tabla de transiciones (state, action) -> state'
// ============================================================================

use crate::errors::SessionError;
use crate::models::{PatientId, Role};
use crate::state::{SessionAction, SessionState};

/// Aplica `action` sobre `state` sin efectos secundarios.
///
/// En caso de rechazo devuelve el error y el llamador conserva `state`.
pub fn reduce(state: &SessionState, action: &SessionAction) -> Result<SessionState, SessionError> {
    match *action {
        SessionAction::SetRole(Role::Unauthenticated) => {
            Err(SessionError::InvalidRole(Role::Unauthenticated))
        }
        SessionAction::SetRole(role) => Ok(SessionState {
            role,
            // Un paciente que vuelve a fijar su rol conserva su identidad;
            // cualquier otro rol la pierde.
            patient_id: if role == Role::Patient { state.patient_id } else { None },
        }),
        SessionAction::SetPatientId(raw) => {
            if state.role != Role::Patient {
                return Err(SessionError::PatientIdWithoutPatientRole {
                    role: state.role,
                    patient_id: raw,
                });
            }
            let patient_id = PatientId::try_from(raw)?;
            Ok(SessionState {
                role: Role::Patient,
                patient_id: Some(patient_id),
            })
        }
        SessionAction::SignOut => Ok(SessionState::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn apply_all(actions: &[SessionAction]) -> SessionState {
        actions.iter().fold(SessionState::new(), |state, action| {
            reduce(&state, action).unwrap_or(state)
        })
    }

    #[test]
    fn patient_login_sets_role_then_id() {
        let state = apply_all(&[
            SessionAction::SetRole(Role::Patient),
            SessionAction::SetPatientId(7),
        ]);
        assert_eq!(state.role, Role::Patient);
        assert_eq!(state.patient_id, PatientId::new(7));
    }

    #[test]
    fn patient_id_rejected_for_professional() {
        let professional =
            reduce(&SessionState::new(), &SessionAction::SetRole(Role::Professional)).unwrap();
        let result = reduce(&professional, &SessionAction::SetPatientId(7));
        assert_eq!(
            result,
            Err(SessionError::PatientIdWithoutPatientRole {
                role: Role::Professional,
                patient_id: 7,
            })
        );
        assert_eq!(professional.patient_id, None);
    }

    #[test]
    fn patient_id_rejected_when_unauthenticated() {
        let result = reduce(&SessionState::new(), &SessionAction::SetPatientId(3));
        assert!(matches!(
            result,
            Err(SessionError::PatientIdWithoutPatientRole { role: Role::Unauthenticated, .. })
        ));
    }

    #[test]
    fn non_positive_patient_id_rejected() {
        let patient = apply_all(&[SessionAction::SetRole(Role::Patient)]);
        assert_eq!(
            reduce(&patient, &SessionAction::SetPatientId(0)),
            Err(SessionError::NonPositivePatientId(0))
        );
        assert_eq!(
            reduce(&patient, &SessionAction::SetPatientId(-4)),
            Err(SessionError::NonPositivePatientId(-4))
        );
    }

    #[test]
    fn unauthenticated_cannot_be_set_explicitly() {
        let patient = apply_all(&[
            SessionAction::SetRole(Role::Patient),
            SessionAction::SetPatientId(5),
        ]);
        assert_eq!(
            reduce(&patient, &SessionAction::SetRole(Role::Unauthenticated)),
            Err(SessionError::InvalidRole(Role::Unauthenticated))
        );
    }

    #[test]
    fn switching_to_professional_clears_patient_id() {
        let state = apply_all(&[
            SessionAction::SetRole(Role::Patient),
            SessionAction::SetPatientId(42),
            SessionAction::SetRole(Role::Professional),
        ]);
        assert_eq!(state.role, Role::Professional);
        assert_eq!(state.patient_id, None);
    }

    #[test]
    fn set_role_is_idempotent() {
        let once = apply_all(&[SessionAction::SetRole(Role::Professional)]);
        let twice = apply_all(&[
            SessionAction::SetRole(Role::Professional),
            SessionAction::SetRole(Role::Professional),
        ]);
        assert_eq!(once, twice);
    }

    #[test]
    fn sign_out_resets_to_initial() {
        let state = apply_all(&[
            SessionAction::SetRole(Role::Patient),
            SessionAction::SetPatientId(42),
            SessionAction::SignOut,
        ]);
        assert_eq!(state, SessionState::new());
        assert_eq!(
            reduce(&SessionState::new(), &SessionAction::SignOut),
            Ok(SessionState::new())
        );
    }

    fn arb_action() -> impl Strategy<Value = SessionAction> {
        prop_oneof![
            Just(SessionAction::SetRole(Role::Unauthenticated)),
            Just(SessionAction::SetRole(Role::Professional)),
            Just(SessionAction::SetRole(Role::Patient)),
            (-5i64..50).prop_map(SessionAction::SetPatientId),
            Just(SessionAction::SignOut),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Ningún estado alcanzable tiene paciente sin rol de paciente.
        #[test]
        fn prop_reachable_states_hold_invariant(actions in prop::collection::vec(arb_action(), 0..40)) {
            let mut state = SessionState::new();
            for action in &actions {
                if let Ok(next) = reduce(&state, action) {
                    state = next;
                }
                prop_assert!(state.holds_invariant(), "invariant broken after {:?}: {:?}", action, state);
            }
        }

        /// Repetir un `SetRole` aceptado no cambia nada, desde cualquier estado alcanzable.
        #[test]
        fn prop_set_role_is_idempotent(actions in prop::collection::vec(arb_action(), 0..20), patient in any::<bool>()) {
            let role = if patient { Role::Patient } else { Role::Professional };
            let start = apply_all(&actions);
            let once = reduce(&start, &SessionAction::SetRole(role)).unwrap();
            let twice = reduce(&once, &SessionAction::SetRole(role)).unwrap();
            prop_assert_eq!(once, twice);
        }

        /// Desde cualquier estado alcanzable, un login de paciente deja `(Patient, Some(7))`.
        #[test]
        fn prop_patient_login_from_any_state(prefix in prop::collection::vec(arb_action(), 0..30)) {
            let start = apply_all(&prefix);
            let state = reduce(&start, &SessionAction::SetRole(Role::Patient))
                .and_then(|s| reduce(&s, &SessionAction::SetPatientId(7)))
                .unwrap();
            prop_assert_eq!(state.role, Role::Patient);
            prop_assert_eq!(state.patient_id, PatientId::new(7));
        }
    }
}
