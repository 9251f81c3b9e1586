use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Filtro `(mes, año)` de los dashboards de analítica
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsFilter {
    pub month: u32,
    pub year: i32,
}

impl AnalyticsFilter {
    pub fn new(month: u32, year: i32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { month, year })
    }

    /// Mes en curso (hora local del navegador)
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            month: today.month(),
            year: today.year(),
        }
    }

    pub fn query(&self) -> String {
        format!("month={}&year={}", self.month, self.year)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MoodAnalytic {
    pub id_patient: i64,
    pub month: String,
    pub year: String,
    pub upset_mood: u32,
    pub sad_mood: u32,
    pub normal_mood: u32,
    pub happy_mood: u32,
    pub euphoric_mood: u32,
}

impl MoodAnalytic {
    /// Pares `(etiqueta, cantidad)` en el orden de la escala de ánimo
    pub fn slices(&self) -> [(&'static str, u32); 5] {
        [
            ("upset", self.upset_mood),
            ("sad", self.sad_mood),
            ("normal", self.normal_mood),
            ("happy", self.happy_mood),
            ("euphoric", self.euphoric_mood),
        ]
    }

    pub fn total(&self) -> u32 {
        self.slices().iter().map(|(_, count)| count).sum()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BiologicalAnalytic {
    pub id_patient: i64,
    pub month: String,
    pub year: String,
    pub hunger: f64,
    pub hydration: f64,
    pub sleep: f64,
    pub energy: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_rejects_invalid_month() {
        assert!(AnalyticsFilter::new(0, 2024).is_none());
        assert!(AnalyticsFilter::new(13, 2024).is_none());
        let filter = AnalyticsFilter::new(3, 2024).unwrap();
        assert_eq!(filter.query(), "month=3&year=2024");
    }

    #[test]
    fn mood_analytic_tolerates_missing_fields() {
        let analytic: MoodAnalytic =
            serde_json::from_str(r#"{"idPatient":42,"month":"3","year":"2024","happyMood":4,"sadMood":1}"#)
                .unwrap();
        assert_eq!(analytic.total(), 5);
        assert_eq!(analytic.slices()[3], ("happy", 4));
    }
}
