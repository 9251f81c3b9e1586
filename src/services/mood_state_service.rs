use crate::models::{MoodState, PatientId};
use crate::services::ApiClient;

pub async fn get_mood_states_by_patient_id(patient_id: PatientId) -> Result<Vec<MoodState>, String> {
    log::info!("📋 [API] Estados de ánimo del paciente {}", patient_id);
    ApiClient::new()
        .get_json(&format!("/mood-states?patientId={}", patient_id))
        .await
}

/// Registra el ánimo forzando el paciente resuelto por la vista
pub async fn create_mood_state(mut mood: MoodState, patient_id: PatientId) -> Result<MoodState, String> {
    mood.patient_id = patient_id.get();
    log::info!("📝 [API] Registrando ánimo {} para paciente {}", mood.mood, patient_id);
    ApiClient::new().post_json("/mood-states", &mood).await
}
