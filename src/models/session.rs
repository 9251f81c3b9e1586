use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SessionError;

/// Categoría del actor autenticado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Unauthenticated,
    Professional,
    Patient,
}

impl Role {
    /// Decodifica el código de rol del backend (`"1"` profesional, `"2"` paciente).
    /// Cualquier otro código se rechaza aquí, nunca dentro del reducer.
    pub fn from_code(code: &str) -> Result<Self, SessionError> {
        match code.trim() {
            "1" => Ok(Role::Professional),
            "2" => Ok(Role::Patient),
            other => Err(SessionError::UnknownRoleCode(other.to_string())),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Role::Unauthenticated)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Unauthenticated => "Unauthenticated",
            Role::Professional => "Professional",
            Role::Patient => "Patient",
        };
        f.write_str(name)
    }
}

/// Identificador de paciente, siempre positivo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PatientId(i64);

impl PatientId {
    pub fn new(raw: i64) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    /// Parsea un parámetro de ruta (`"42"`)
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<i64>().ok().and_then(Self::new)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for PatientId {
    type Error = SessionError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or(SessionError::NonPositivePatientId(raw))
    }
}

impl From<PatientId> for i64 {
    fn from(id: PatientId) -> Self {
        id.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_codes() {
        assert_eq!(Role::from_code("1"), Ok(Role::Professional));
        assert_eq!(Role::from_code(" 2 "), Ok(Role::Patient));
        assert_eq!(
            Role::from_code("3"),
            Err(SessionError::UnknownRoleCode("3".to_string()))
        );
        assert!(Role::from_code("").is_err());
    }

    #[test]
    fn patient_id_must_be_positive() {
        assert_eq!(PatientId::new(7).map(|id| id.get()), Some(7));
        assert!(PatientId::new(0).is_none());
        assert!(PatientId::new(-3).is_none());
        assert_eq!(PatientId::parse("42"), PatientId::new(42));
        assert!(PatientId::parse("abc").is_none());
        assert!(PatientId::parse("undefined").is_none());
    }

    #[test]
    fn patient_id_rejects_non_positive_json() {
        let id: PatientId = serde_json::from_str("9").unwrap();
        assert_eq!(id.get(), 9);
        assert!(serde_json::from_str::<PatientId>("0").is_err());
        assert_eq!(serde_json::to_string(&id).unwrap(), "9");
    }
}
