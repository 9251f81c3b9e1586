use serde::de::DeserializeOwned;

use crate::models::{AnalyticsFilter, BiologicalAnalytic, MoodAnalytic, PatientId};
use crate::services::ApiClient;

// El backend responde siempre un array para consultas con query string;
// solo interesa el primer elemento.
async fn find_first<T: DeserializeOwned>(
    endpoint: &str,
    filter: AnalyticsFilter,
    patient_id: PatientId,
) -> Result<Option<T>, String> {
    let path = format!("{}?idPatient={}&{}", endpoint, patient_id, filter.query());
    let items: Vec<T> = ApiClient::new().get_json(&path).await?;
    Ok(items.into_iter().next())
}

pub async fn find_mood_analytic(
    filter: AnalyticsFilter,
    patient_id: PatientId,
) -> Result<Option<MoodAnalytic>, String> {
    log::info!("📊 [API] Analítica de ánimo {}/{} paciente {}", filter.month, filter.year, patient_id);
    find_first("/patient-mood-analytic", filter, patient_id).await
}

pub async fn find_biological_analytic(
    filter: AnalyticsFilter,
    patient_id: PatientId,
) -> Result<Option<BiologicalAnalytic>, String> {
    log::info!("📊 [API] Analítica biológica {}/{} paciente {}", filter.month, filter.year, patient_id);
    find_first("/patient-biological-analytic", filter, patient_id).await
}
