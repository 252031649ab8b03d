//! The one canonical suggestion-matching implementation. Clients ask the
//! server for matches instead of re-deriving this logic themselves.

use serde::Serialize;

use super::condition::Condition;
use crate::suggestions::repo::Suggestion;

/// Wind speed above which outdoor activities stop being fun, in km/h.
pub const WINDY_KMH: f64 = 20.0;

/// Coarse temperature bucket used for catalog matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TempGroup {
    #[serde(rename = "<5")]
    Cold,
    #[serde(rename = "<15")]
    Cool,
    #[serde(rename = "<25")]
    Mild,
    #[serde(rename = ">=25")]
    Warm,
}

impl TempGroup {
    /// Buckets are half-open on the low end: 5.0 lands in `<15`.
    pub fn for_temp(celsius: f64) -> TempGroup {
        if celsius < 5.0 {
            TempGroup::Cold
        } else if celsius < 15.0 {
            TempGroup::Cool
        } else if celsius < 25.0 {
            TempGroup::Mild
        } else {
            TempGroup::Warm
        }
    }

    /// Wire token, matching the `tempGroup` values stored on catalog rows.
    pub fn as_str(self) -> &'static str {
        match self {
            TempGroup::Cold => "<5",
            TempGroup::Cool => "<15",
            TempGroup::Mild => "<25",
            TempGroup::Warm => ">=25",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedSuggestions {
    pub condition: Condition,
    pub temp_group: TempGroup,
    pub indoor: Vec<Suggestion>,
    pub outdoor: Vec<Suggestion>,
    pub featured: Option<Suggestion>,
}

fn field_matches(value: &str, wanted: &str) -> bool {
    let v = value.trim();
    v.eq_ignore_ascii_case("any") || v.eq_ignore_ascii_case(wanted)
}

/// Filter the active catalog down to rows matching the current weather,
/// split them indoor/outdoor, and pick one featured row. Catalog order is
/// preserved; callers pass rows sorted by creation time descending. An
/// empty result is a valid outcome, not an error.
pub fn match_suggestions(
    temp: f64,
    condition: Condition,
    wind_kmh: f64,
    catalog: &[Suggestion],
) -> MatchedSuggestions {
    let temp_group = TempGroup::for_temp(temp);

    let mut indoor = Vec::new();
    let mut outdoor = Vec::new();
    for row in catalog {
        if !field_matches(&row.condition, condition.label()) {
            continue;
        }
        if !field_matches(&row.temp_group, temp_group.as_str()) {
            continue;
        }
        if row.indoor {
            indoor.push(row.clone());
        } else {
            outdoor.push(row.clone());
        }
    }

    let prefer_indoor = condition.keeps_indoors() || wind_kmh > WINDY_KMH;
    let featured = if prefer_indoor {
        indoor.first().or_else(|| outdoor.first()).cloned()
    } else {
        outdoor.first().or_else(|| indoor.first()).cloned()
    };

    MatchedSuggestions {
        condition,
        temp_group,
        indoor,
        outdoor,
        featured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn row(activity: &str, condition: &str, temp_group: &str, indoor: bool) -> Suggestion {
        Suggestion {
            id: Uuid::new_v4(),
            submitter_name: "Anonymous".into(),
            activity: activity.into(),
            reason: None,
            duration: None,
            energy_level: "Any".into(),
            time_of_day: "Any".into(),
            category: "Relaxation".into(),
            indoor,
            condition: condition.into(),
            temp_group: temp_group.into(),
            status: "active".into(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn temp_group_boundaries_are_half_open() {
        assert_eq!(TempGroup::for_temp(4.9), TempGroup::Cold);
        assert_eq!(TempGroup::for_temp(5.0), TempGroup::Cool);
        assert_eq!(TempGroup::for_temp(14.9), TempGroup::Cool);
        assert_eq!(TempGroup::for_temp(15.0), TempGroup::Mild);
        assert_eq!(TempGroup::for_temp(24.9), TempGroup::Mild);
        assert_eq!(TempGroup::for_temp(25.0), TempGroup::Warm);
        assert_eq!(TempGroup::for_temp(-12.0), TempGroup::Cold);
        assert_eq!(TempGroup::for_temp(40.0), TempGroup::Warm);
    }

    #[test]
    fn rainy_weather_prefers_the_first_indoor_row() {
        let catalog = vec![
            row("A", "rain", "<15", true),
            row("B", "any", "any", false),
        ];
        let matched = match_suggestions(10.0, Condition::Rain, 5.0, &catalog);
        assert_eq!(matched.indoor.len(), 1);
        assert_eq!(matched.indoor[0].activity, "A");
        assert_eq!(matched.outdoor.len(), 1);
        assert_eq!(matched.outdoor[0].activity, "B");
        assert_eq!(matched.featured.as_ref().unwrap().activity, "A");
    }

    #[test]
    fn clear_weather_prefers_the_first_outdoor_row() {
        let catalog = vec![
            row("Museum", "any", "any", true),
            row("Cycling", "Clear", "<25", false),
        ];
        let matched = match_suggestions(20.0, Condition::Clear, 5.0, &catalog);
        assert_eq!(matched.featured.as_ref().unwrap().activity, "Cycling");
    }

    #[test]
    fn strong_wind_pushes_the_featured_pick_indoors() {
        let catalog = vec![
            row("Kite Flying", "Clear", "any", false),
            row("Climbing Gym", "any", "any", true),
        ];
        let matched = match_suggestions(20.0, Condition::Clear, 35.0, &catalog);
        assert_eq!(matched.featured.as_ref().unwrap().activity, "Climbing Gym");

        // at exactly the threshold outdoor still wins
        let matched = match_suggestions(20.0, Condition::Clear, WINDY_KMH, &catalog);
        assert_eq!(matched.featured.as_ref().unwrap().activity, "Kite Flying");
    }

    #[test]
    fn featured_falls_back_across_the_partition() {
        let catalog = vec![row("Reading", "any", "any", true)];
        let matched = match_suggestions(20.0, Condition::Clear, 0.0, &catalog);
        assert!(matched.outdoor.is_empty());
        assert_eq!(matched.featured.as_ref().unwrap().activity, "Reading");
    }

    #[test]
    fn non_matching_rows_are_filtered_out() {
        let catalog = vec![
            row("Ski", "snow", "<5", false),
            row("Beach", "Clear", ">=25", false),
        ];
        let matched = match_suggestions(30.0, Condition::Clear, 0.0, &catalog);
        assert_eq!(matched.outdoor.len(), 1);
        assert_eq!(matched.outdoor[0].activity, "Beach");
    }

    #[test]
    fn condition_and_temp_group_match_ignores_case_and_whitespace() {
        let catalog = vec![row("Walk", " CLEAR ", " ANY ", false)];
        let matched = match_suggestions(10.0, Condition::Clear, 0.0, &catalog);
        assert_eq!(matched.outdoor.len(), 1);
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let matched = match_suggestions(10.0, Condition::Rain, 30.0, &[]);
        assert!(matched.indoor.is_empty());
        assert!(matched.outdoor.is_empty());
        assert!(matched.featured.is_none());
    }

    #[test]
    fn catalog_order_is_preserved_within_partitions() {
        let catalog = vec![
            row("Newest", "any", "any", false),
            row("Older", "any", "any", false),
        ];
        let matched = match_suggestions(20.0, Condition::Clear, 0.0, &catalog);
        assert_eq!(matched.outdoor[0].activity, "Newest");
        assert_eq!(matched.outdoor[1].activity, "Older");
        assert_eq!(matched.featured.as_ref().unwrap().activity, "Newest");
    }
}
