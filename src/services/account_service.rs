use crate::models::{AccountDto, LoginRequest};
use crate::services::ApiClient;

/// Login con usuario y contraseña. El backend devuelve la cuenta con su
/// código de rol; la decodificación a `Role` se hace en `LoginOutcome`.
pub async fn log_in(user_name: &str, password: &str) -> Result<AccountDto, String> {
    log::info!("🔐 [LOGIN] Iniciando sesión para: {}", user_name);
    let request = LoginRequest {
        user_name: user_name.to_string(),
        password: password.to_string(),
    };
    ApiClient::new().post_json("/accounts/login", &request).await
}
