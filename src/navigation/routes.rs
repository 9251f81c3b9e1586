// ============================================================================
// ROUTES - Rutas de la app y su parámetro de paciente
// ============================================================================

use crate::models::{PatientId, Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    PatientManagement,
    AppointmentList,
    Profile,
    MoodState { patient_id: Option<String> },
    BiologicalFunctions { patient_id: Option<String> },
    AnalyticsDashboard { patient_id: Option<String> },
    Prescription { patient_id: Option<String> },
    MedicationManagement { patient_id: Option<String> },
    NotFound(String),
}

impl AppRoute {
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let param = |s: &&str| Some(s.to_string());
        match segments.as_slice() {
            [] | ["home"] => AppRoute::Home,
            ["login"] => AppRoute::Login,
            ["patient-management"] => AppRoute::PatientManagement,
            ["appointment-list"] => AppRoute::AppointmentList,
            ["profile"] => AppRoute::Profile,
            ["mood-state"] => AppRoute::MoodState { patient_id: None },
            ["mood-state", id] => AppRoute::MoodState { patient_id: param(id) },
            ["biological-functions"] => AppRoute::BiologicalFunctions { patient_id: None },
            ["biological-functions", id] => AppRoute::BiologicalFunctions { patient_id: param(id) },
            ["dashboard-analytics"] => AppRoute::AnalyticsDashboard { patient_id: None },
            ["dashboard-analytics", id] => AppRoute::AnalyticsDashboard { patient_id: param(id) },
            ["patient", "prescription"] => AppRoute::Prescription { patient_id: None },
            ["patient", "prescription", id] => AppRoute::Prescription { patient_id: param(id) },
            ["medication-management"] => AppRoute::MedicationManagement { patient_id: None },
            ["medication-management", id] => AppRoute::MedicationManagement { patient_id: param(id) },
            _ => AppRoute::NotFound(path.to_string()),
        }
    }

    pub fn to_path(&self) -> String {
        let with_param = |base: &str, id: &Option<String>| match id {
            Some(id) => format!("{}/{}", base, id),
            None => base.to_string(),
        };
        match self {
            AppRoute::Home => "/home".to_string(),
            AppRoute::Login => "/login".to_string(),
            AppRoute::PatientManagement => "/patient-management".to_string(),
            AppRoute::AppointmentList => "/appointment-list".to_string(),
            AppRoute::Profile => "/profile".to_string(),
            AppRoute::MoodState { patient_id } => with_param("/mood-state", patient_id),
            AppRoute::BiologicalFunctions { patient_id } => with_param("/biological-functions", patient_id),
            AppRoute::AnalyticsDashboard { patient_id } => with_param("/dashboard-analytics", patient_id),
            AppRoute::Prescription { patient_id } => with_param("/patient/prescription", patient_id),
            AppRoute::MedicationManagement { patient_id } => with_param("/medication-management", patient_id),
            AppRoute::NotFound(path) => path.clone(),
        }
    }

    /// Parámetro de paciente tal como vino en la ruta (sin validar)
    pub fn patient_param(&self) -> Option<&str> {
        match self {
            AppRoute::MoodState { patient_id }
            | AppRoute::BiologicalFunctions { patient_id }
            | AppRoute::AnalyticsDashboard { patient_id }
            | AppRoute::Prescription { patient_id }
            | AppRoute::MedicationManagement { patient_id } => patient_id.as_deref(),
            _ => None,
        }
    }

    pub fn is_patient_scoped(&self) -> bool {
        matches!(
            self,
            AppRoute::MoodState { .. }
                | AppRoute::BiologicalFunctions { .. }
                | AppRoute::AnalyticsDashboard { .. }
                | AppRoute::Prescription { .. }
                | AppRoute::MedicationManagement { .. }
        )
    }

    /// `home` y `login` siempre son accesibles. Un profesional solo entra a
    /// vistas de paciente indicando el paciente en la ruta; un paciente solo
    /// sin parámetro o con su propio id.
    pub fn is_reachable(&self, role: Role, session_patient: Option<PatientId>) -> bool {
        match self {
            AppRoute::Home | AppRoute::Login => true,
            AppRoute::NotFound(_) => false,
            _ => match role {
                Role::Unauthenticated => false,
                Role::Professional => match self {
                    AppRoute::PatientManagement | AppRoute::AppointmentList | AppRoute::Profile => true,
                    _ => self.is_patient_scoped() && self.patient_param().is_some(),
                },
                Role::Patient => {
                    *self == AppRoute::Profile
                        || (self.is_patient_scoped()
                            && match self.patient_param() {
                                None => true,
                                Some(raw) => session_patient.is_some() && PatientId::parse(raw) == session_patient,
                            })
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        let routes = [
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::AppointmentList,
            AppRoute::MoodState { patient_id: None },
            AppRoute::MoodState { patient_id: Some("4".into()) },
            AppRoute::Prescription { patient_id: Some("42".into()) },
            AppRoute::MedicationManagement { patient_id: Some("9".into()) },
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn root_and_unknown_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
        assert_eq!(
            AppRoute::from_path("/admin/secret"),
            AppRoute::NotFound("/admin/secret".to_string())
        );
    }

    #[test]
    fn patient_param_is_raw() {
        let route = AppRoute::from_path("/dashboard-analytics/abc");
        assert_eq!(route.patient_param(), Some("abc"));
        assert!(route.is_patient_scoped());
        assert_eq!(AppRoute::Profile.patient_param(), None);
    }

    #[test]
    fn reachability_by_role() {
        let own_moods = AppRoute::MoodState { patient_id: None };
        let patient_moods = AppRoute::MoodState { patient_id: Some("9".into()) };
        let me = PatientId::new(42);

        assert!(AppRoute::Login.is_reachable(Role::Unauthenticated, None));
        assert!(!own_moods.is_reachable(Role::Unauthenticated, None));
        assert!(!AppRoute::Profile.is_reachable(Role::Unauthenticated, None));

        assert!(AppRoute::PatientManagement.is_reachable(Role::Professional, None));
        assert!(patient_moods.is_reachable(Role::Professional, None));
        assert!(!own_moods.is_reachable(Role::Professional, None));

        assert!(own_moods.is_reachable(Role::Patient, me));
        assert!(AppRoute::Profile.is_reachable(Role::Patient, me));
        assert!(!AppRoute::PatientManagement.is_reachable(Role::Patient, me));
        assert!(AppRoute::Login.is_reachable(Role::Patient, me));
    }

    #[test]
    fn patient_only_reaches_own_id() {
        let me = PatientId::new(42);
        let own = AppRoute::from_path("/patient/prescription/42");
        let foreign = AppRoute::from_path("/patient/prescription/99");

        assert!(own.is_reachable(Role::Patient, me));
        assert!(!foreign.is_reachable(Role::Patient, me));
        assert!(!foreign.is_reachable(Role::Patient, None));
        assert!(!AppRoute::from_path("/mood-state/abc").is_reachable(Role::Patient, None));
        assert!(foreign.is_reachable(Role::Professional, None));
    }
}
