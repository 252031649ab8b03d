use serde::Serialize;

/// Canonical weather category a free-text description collapses into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Condition {
    Clear,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Rain,
    Snow,
}

const RAIN_KEYWORDS: &[&str] = &["rain", "drizzle", "shower", "storm", "thunder"];
const SNOW_KEYWORDS: &[&str] = &["snow", "sleet", "blizzard", "flurr"];
const CLOUD_KEYWORDS: &[&str] = &["cloud", "overcast", "fog", "mist", "haze"];

impl Condition {
    /// Classify a free-text weather description. Unrecognized input falls
    /// back to `Clear`; this is silent and never an error.
    pub fn normalize(raw: &str) -> Condition {
        let lower = raw.trim().to_lowercase();
        if RAIN_KEYWORDS.iter().any(|k| lower.contains(k)) {
            return Condition::Rain;
        }
        if SNOW_KEYWORDS.iter().any(|k| lower.contains(k)) {
            return Condition::Snow;
        }
        if CLOUD_KEYWORDS.iter().any(|k| lower.contains(k)) {
            return Condition::PartlyCloudy;
        }
        Condition::Clear
    }

    /// Wire label, matching the `condition` values stored on catalog rows.
    pub fn label(self) -> &'static str {
        match self {
            Condition::Clear => "Clear",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Rain => "Rain",
            Condition::Snow => "Snow",
        }
    }

    /// Weather that pushes the featured pick indoors.
    pub fn keeps_indoors(self) -> bool {
        matches!(self, Condition::Rain | Condition::Snow)
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
