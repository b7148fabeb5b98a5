use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A tracked habit. `completions` is a set of `YYYY-MM-DD` day keys, one per
/// calendar day the habit was marked done.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub color: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(deserialize_with = "completions_compat")]
    pub completions: BTreeSet<String>,
}

/// Older stored data holds `completions` either as an array of day keys or as
/// a map from day key to a done flag. Both parse to the canonical set; only
/// `true` map entries count. Serialization always emits the sorted array.
#[derive(Deserialize)]
#[serde(untagged)]
enum CompletionsRepr {
    List(Vec<String>),
    Map(BTreeMap<String, bool>),
}

fn completions_compat<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match CompletionsRepr::deserialize(deserializer)? {
        CompletionsRepr::List(days) => days.into_iter().collect(),
        CompletionsRepr::Map(days) => days
            .into_iter()
            .filter_map(|(day, done)| done.then_some(day))
            .collect(),
    })
}

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
    pub emoji: String,
    pub color: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub id: String,
    pub date: String,
    pub done: bool,
}

#[derive(Debug, Serialize)]
pub struct DayCell {
    pub date: String,
    pub label: String,
    pub done: bool,
}

#[derive(Debug, Serialize)]
pub struct HabitSummary {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub color: String,
    pub done_today: bool,
    pub streak: u32,
    pub rate: u8,
    pub week: Vec<DayCell>,
}

#[derive(Debug, Serialize)]
pub struct HabitsResponse {
    pub date: String,
    pub done_count: usize,
    pub total: usize,
    pub today_rate: u8,
    pub habits: Vec<HabitSummary>,
}

#[derive(Debug, Serialize)]
pub struct Overview {
    pub today_rate: u8,
    pub week_rate: u8,
    pub best_streak: u32,
    pub total_completions: u64,
}

#[derive(Debug, Serialize)]
pub struct HeatmapDay {
    pub date: String,
    pub ratio: f64,
    pub day_of_month: u32,
    pub weekday: u32,
}

#[derive(Debug, Serialize)]
pub struct TrendWeek {
    pub label: String,
    pub rate: u8,
}

#[derive(Debug, Serialize)]
pub struct HabitStatsRow {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub color: String,
    pub rate: u8,
    pub streak: u32,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub overview: Overview,
    pub heatmap: Vec<HeatmapDay>,
    pub weekly_trend: Vec<TrendWeek>,
    pub best_day: Option<usize>,
    pub habits: Vec<HabitStatsRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completions_parse_from_array() {
        let json = r##"{
            "id": "a", "name": "Read", "emoji": "📚", "color": "#8b5cf6",
            "createdAt": "2024-01-01",
            "completions": ["2024-01-03", "2024-01-02", "2024-01-03"]
        }"##;
        let habit: Habit = serde_json::from_str(json).unwrap();
        assert_eq!(habit.completions.len(), 2);
        assert!(habit.completions.contains("2024-01-02"));
    }

    #[test]
    fn completions_parse_from_legacy_map() {
        let json = r##"{
            "id": "a", "name": "Read", "emoji": "📚", "color": "#8b5cf6",
            "createdAt": "2024-01-01",
            "completions": { "2024-01-02": true, "2024-01-03": false }
        }"##;
        let habit: Habit = serde_json::from_str(json).unwrap();
        assert!(habit.completions.contains("2024-01-02"));
        assert!(!habit.completions.contains("2024-01-03"));
    }

    #[test]
    fn completions_serialize_as_sorted_array() {
        let mut habit = Habit {
            id: "a".into(),
            name: "Read".into(),
            emoji: "📚".into(),
            color: "#8b5cf6".into(),
            created_at: "2024-01-01".into(),
            completions: BTreeSet::new(),
        };
        habit.completions.insert("2024-01-03".into());
        habit.completions.insert("2024-01-01".into());

        let value = serde_json::to_value(&habit).unwrap();
        assert_eq!(
            value["completions"],
            serde_json::json!(["2024-01-01", "2024-01-03"])
        );
        assert_eq!(value["createdAt"], "2024-01-01");
    }

    #[test]
    fn legacy_map_round_trips_to_canonical_form() {
        let json = r##"{
            "id": "a", "name": "Read", "emoji": "📚", "color": "#8b5cf6",
            "createdAt": "2024-01-01",
            "completions": { "2024-01-02": true }
        }"##;
        let habit: Habit = serde_json::from_str(json).unwrap();
        let reparsed: Habit =
            serde_json::from_str(&serde_json::to_string(&habit).unwrap()).unwrap();
        assert_eq!(reparsed.completions, habit.completions);
    }
}
