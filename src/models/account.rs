use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

/// Código de rol tal como llega del backend: a veces `"1"`, a veces `1`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(untagged)]
pub enum RoleCode {
    Text(String),
    Number(i64),
}

impl RoleCode {
    pub fn as_code(&self) -> String {
        match self {
            RoleCode::Text(code) => code.clone(),
            RoleCode::Number(code) => code.to_string(),
        }
    }
}

/// Cuenta devuelta por `POST /accounts/login`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: i64,
    pub user_name: String,
    pub role: RoleCode,
    #[serde(default)]
    pub patient_id: Option<i64>,
}
