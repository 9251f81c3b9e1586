// ============================================================================
// NAVIGATION MENU - Política rol -> entradas del toolbar
// ============================================================================

use crate::models::{PatientId, Role};
use crate::navigation::AppRoute;
use crate::state::{selectors, SessionState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub route: AppRoute,
    pub label: &'static str,
}

impl NavEntry {
    fn new(route: AppRoute, label: &'static str) -> Self {
        Self { route, label }
    }

    pub fn path(&self) -> String {
        self.route.to_path()
    }
}

/// Menú para el estado confirmado actual; se evalúa en cada cambio, sin caché.
///
/// En el estado transitorio `(Patient, None)` del login el menú de paciente
/// tiene 4 entradas: falta `prescription` hasta que se fija el id.
pub fn navigation_menu(state: &SessionState) -> Vec<NavEntry> {
    menu_for(
        selectors::current_role(state),
        selectors::current_patient_id(state),
    )
}

/// Función total: todo rol tiene al menos `home`.
///
/// La entrada de receta lleva el id del paciente; mientras el login del
/// paciente no lo haya fijado, la entrada se omite en vez de apuntar a una
/// ruta sin identidad.
pub fn menu_for(role: Role, patient_id: Option<PatientId>) -> Vec<NavEntry> {
    match role {
        Role::Professional => vec![
            NavEntry::new(AppRoute::Home, "home"),
            NavEntry::new(AppRoute::PatientManagement, "patient-management"),
            NavEntry::new(AppRoute::AppointmentList, "appointments"),
            NavEntry::new(AppRoute::Profile, "profile"),
        ],
        Role::Patient => {
            let mut entries = vec![
                NavEntry::new(AppRoute::Home, "home"),
                NavEntry::new(AppRoute::MoodState { patient_id: None }, "mood-state"),
                NavEntry::new(AppRoute::BiologicalFunctions { patient_id: None }, "biological-functions"),
            ];
            if let Some(id) = patient_id {
                entries.push(NavEntry::new(
                    AppRoute::Prescription {
                        patient_id: Some(id.to_string()),
                    },
                    "prescription",
                ));
            }
            entries.push(NavEntry::new(AppRoute::Profile, "profile"));
            entries
        }
        Role::Unauthenticated => vec![
            NavEntry::new(AppRoute::Home, "home"),
            NavEntry::new(AppRoute::Login, "login"),
        ],
    }
}
