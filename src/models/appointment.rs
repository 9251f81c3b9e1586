use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Cita de terapia (`GET /sessions`); `session_time` en horas
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: i64,
    pub id_professional: i64,
    pub patient_name: String,
    pub appointment_date: String,
    pub session_time: f64,
}

impl Session {
    /// Inicio de la cita; acepta RFC 3339 o fecha-hora local sin zona
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        let raw = self.appointment_date.trim();
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.naive_local())
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
            .ok()
    }

    /// Fin = inicio + `session_time` horas
    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        if !self.session_time.is_finite() || self.session_time < 0.0 {
            return None;
        }
        let minutes = (self.session_time * 60.0).round() as i64;
        self.starts_at()?.checked_add_signed(chrono::Duration::minutes(minutes))
    }

    /// Hora de fin en formato corto (`3:30 PM`)
    pub fn end_time_label(&self) -> Option<String> {
        self.ends_at().map(|end| end.format("%-I:%M %p").to_string())
    }
}
