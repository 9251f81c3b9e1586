use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Escala de ánimo registrada por el paciente (1 = muy mal, 5 = eufórico)
pub const MOOD_SCALE: std::ops::RangeInclusive<u8> = 1..=5;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MoodState {
    #[serde(default)]
    pub id: Option<i64>,
    pub patient_id: i64,
    pub mood: u8,
    pub created_at: NaiveDate,
}

impl MoodState {
    pub fn new(patient_id: i64, mood: u8, created_at: NaiveDate) -> Self {
        Self {
            id: None,
            patient_id,
            mood,
            created_at,
        }
    }
}

/// `true` si ya hay un ánimo registrado en `day`: solo se admite uno por día
pub fn has_mood_for_day(moods: &[MoodState], day: NaiveDate) -> bool {
    moods.iter().any(|m| m.created_at == day)
}
