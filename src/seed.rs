use crate::calendar::day_key;
use crate::models::Habit;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

const DEMO_HABITS: [(&str, &str, &str); 4] = [
    ("Exercise", "💪", "#ef4444"),
    ("Read", "📚", "#8b5cf6"),
    ("Meditate", "🧘", "#06b6d4"),
    ("Drink Water", "💧", "#3b82f6"),
];

/// Days of pre-populated history. History ends yesterday; today always
/// starts unmarked.
const HISTORY_DAYS: i64 = 14;

/// First-run collection: four demo habits with two weeks of history laid
/// down by a fixed per-habit skip pattern. Same input day, same output.
pub fn demo_habits(today: NaiveDate) -> Vec<Habit> {
    DEMO_HABITS
        .iter()
        .enumerate()
        .map(|(index, (name, emoji, color))| {
            let mut completions = BTreeSet::new();
            for offset in 1..=HISTORY_DAYS {
                if (offset + index as i64) % 3 != 0 {
                    completions.insert(day_key(today - Duration::days(offset)));
                }
            }
            Habit {
                id: format!("demo-{}", index + 1),
                name: (*name).to_string(),
                emoji: (*emoji).to_string(),
                color: (*color).to_string(),
                created_at: day_key(today - Duration::days(HISTORY_DAYS)),
                completions,
            }
        })
        .collect()
}
