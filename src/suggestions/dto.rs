use serde::Deserialize;

use super::repo::NewSuggestion;

fn default_submitter() -> String {
    "Anonymous".to_string()
}
fn default_any() -> String {
    "Any".to_string()
}
fn default_category() -> String {
    "Relaxation".to_string()
}
fn default_wildcard() -> String {
    "any".to_string()
}

/// Public submission body. There is deliberately no `status` field: a
/// client-supplied status is dropped during deserialization and every
/// public submission starts inactive.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSuggestionRequest {
    #[serde(default = "default_submitter", alias = "name")]
    pub submitter_name: String,
    #[serde(default)]
    pub activity: String,
    pub reason: Option<String>,
    pub duration: Option<String>,
    #[serde(default = "default_any")]
    pub energy_level: String,
    #[serde(default = "default_any")]
    pub time_of_day: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub indoor: bool,
    #[serde(default = "default_wildcard")]
    pub condition: String,
    #[serde(default = "default_wildcard")]
    pub temp_group: String,
}

impl CreateSuggestionRequest {
    /// Apply validation; the only hard requirement is a non-empty activity.
    pub fn into_new(self) -> Result<NewSuggestion, String> {
        let activity = self.activity.trim().to_string();
        if activity.is_empty() {
            return Err("activity is required".to_string());
        }
        Ok(NewSuggestion {
            submitter_name: self.submitter_name,
            activity,
            reason: self.reason,
            duration: self.duration,
            energy_level: self.energy_level,
            time_of_day: self.time_of_day,
            category: self.category,
            indoor: self.indoor,
            condition: self.condition,
            temp_group: self.temp_group,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Query parameters for the server-side matching endpoint.
#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    pub temp: f64,
    pub condition: String,
    #[serde(default)]
    pub wind: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_body_gets_all_defaults() {
        let req: CreateSuggestionRequest =
            serde_json::from_str(r#"{"activity":"Kayaking"}"#).unwrap();
        let new = req.into_new().unwrap();
        assert_eq!(new.submitter_name, "Anonymous");
        assert_eq!(new.activity, "Kayaking");
        assert_eq!(new.energy_level, "Any");
        assert_eq!(new.time_of_day, "Any");
        assert_eq!(new.category, "Relaxation");
        assert_eq!(new.condition, "any");
        assert_eq!(new.temp_group, "any");
        assert!(!new.indoor);
        assert!(new.reason.is_none());
        assert!(new.duration.is_none());
    }

    #[test]
    fn legacy_name_key_maps_to_submitter_name() {
        let req: CreateSuggestionRequest =
            serde_json::from_str(r#"{"name":"Ada","activity":"Hiking"}"#).unwrap();
        assert_eq!(req.submitter_name, "Ada");
    }

    #[test]
    fn client_supplied_status_is_dropped() {
        let req: CreateSuggestionRequest =
            serde_json::from_str(r#"{"activity":"Hiking","status":"active"}"#).unwrap();
        // no status field exists on the request; the insert hard-codes inactive
        assert_eq!(req.activity, "Hiking");
    }

    #[test]
    fn missing_or_blank_activity_is_rejected() {
        let req: CreateSuggestionRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(req.into_new().is_err());

        let req: CreateSuggestionRequest =
            serde_json::from_str(r#"{"activity":"   "}"#).unwrap();
        assert_eq!(
            req.into_new().unwrap_err(),
            "activity is required".to_string()
        );
    }

    #[test]
    fn populated_fields_survive_into_new() {
        let req: CreateSuggestionRequest = serde_json::from_str(
            r#"{
                "name": "Grace",
                "activity": "Board Game Night",
                "reason": "Social fun while staying dry",
                "duration": "2-4 hours",
                "energyLevel": "Medium",
                "timeOfDay": "Evening",
                "category": "Social",
                "indoor": true,
                "condition": "Rain",
                "tempGroup": "<15"
            }"#,
        )
        .unwrap();
        let new = req.into_new().unwrap();
        assert_eq!(new.submitter_name, "Grace");
        assert_eq!(new.reason.as_deref(), Some("Social fun while staying dry"));
        assert_eq!(new.duration.as_deref(), Some("2-4 hours"));
        assert_eq!(new.energy_level, "Medium");
        assert_eq!(new.time_of_day, "Evening");
        assert_eq!(new.category, "Social");
        assert!(new.indoor);
        assert_eq!(new.condition, "Rain");
        assert_eq!(new.temp_group, "<15");
    }
}
