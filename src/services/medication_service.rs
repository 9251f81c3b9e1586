use crate::models::{Medication, PatientId};
use crate::services::ApiClient;

pub async fn get_medications_by_patient_id(patient_id: PatientId) -> Result<Vec<Medication>, String> {
    log::info!("💊 [API] Medicaciones del paciente {}", patient_id);
    ApiClient::new()
        .get_json(&format!("/medications?patientId={}", patient_id))
        .await
}
