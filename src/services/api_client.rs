// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Sin lógica de negocio. Los GET se reintentan ante errores de red
// (`CONFIG.retry_attempts`); los errores HTTP no se reintentan.
// ============================================================================

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    retry_attempts: u32,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
            retry_attempts: CONFIG.retry_attempts,
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, String> {
        let url = self.url(endpoint);
        let mut attempt = 0;
        loop {
            match Request::get(&url).send().await {
                Ok(response) => {
                    if !response.ok() {
                        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
                    }
                    return response
                        .json::<T>()
                        .await
                        .map_err(|e| format!("Parse error: {}", e));
                }
                Err(e) if attempt < self.retry_attempts => {
                    attempt += 1;
                    log::warn!("🔁 [API] Reintento {}/{} GET {}: {}", attempt, self.retry_attempts, url, e);
                }
                Err(e) => return Err(format!("Network error: {}", e)),
            }
        }
    }

    pub async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T, String>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        let response = Request::post(&url)
            .json(body)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("HTTP error {}: {}", status, error_text));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slashes() {
        let client = ApiClient {
            base_url: "http://localhost:3000/api/v1/".to_string(),
            retry_attempts: 0,
        };
        assert_eq!(client.url("/accounts/login"), "http://localhost:3000/api/v1/accounts/login");
        assert_eq!(client.url("medications?patientId=4"), "http://localhost:3000/api/v1/medications?patientId=4");
    }
}
