use serde::Deserialize;

/// One city's forecast snapshot, as served by `/api/v1/weather/{id}`.
///
/// Every field is optional: the payload comes from an external service and is
/// taken as-is, with no defaulting or transformation. The whole value is
/// replaced on each successful fetch, never merged field-by-field.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct WeatherModel {
    pub id: Option<i64>,
    pub city: Option<String>,
    pub high: Option<i64>,
    pub low: Option<i64>,
    pub current: Option<i64>,
    pub icon: Option<String>,
}

impl WeatherModel {
    /// Snapshot shown before the first fetch completes.
    pub fn placeholder() -> Self {
        Self {
            id: Some(2),
            city: Some("Philadelphia".to_string()),
            high: Some(72),
            low: Some(53),
            current: Some(68),
            icon: Some("cloudy".to_string()),
        }
    }
}
