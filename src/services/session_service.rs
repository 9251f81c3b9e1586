use crate::models::Session;
use crate::services::ApiClient;

/// Todas las citas registradas (vista de agenda del profesional)
pub async fn get_all_sessions() -> Result<Vec<Session>, String> {
    log::info!("📅 [API] Obteniendo citas");
    ApiClient::new().get_json("/sessions").await
}
