use crate::calendar::day_key;
use crate::models::Habit;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use uuid::Uuid;

/// Append a new habit with a fresh id and empty history. Returns `None` and
/// leaves the collection untouched when the trimmed name is empty.
pub fn create(
    habits: &mut Vec<Habit>,
    name: &str,
    emoji: &str,
    color: &str,
    today: NaiveDate,
) -> Option<Habit> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let habit = Habit {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
        color: color.to_string(),
        created_at: day_key(today),
        completions: BTreeSet::new(),
    };
    habits.push(habit.clone());
    Some(habit)
}

/// Flip membership of `day` in the habit's completions. Returns the new
/// membership, or `None` without touching anything for an unknown id.
pub fn toggle_day(habits: &mut [Habit], habit_id: &str, day: &str) -> Option<bool> {
    let habit = habits.iter_mut().find(|h| h.id == habit_id)?;
    if habit.completions.remove(day) {
        Some(false)
    } else {
        habit.completions.insert(day.to_string());
        Some(true)
    }
}

/// Remove the habit with `habit_id`; `false` when no habit matched.
pub fn delete(habits: &mut Vec<Habit>, habit_id: &str) -> bool {
    let before = habits.len();
    habits.retain(|h| h.id != habit_id);
    habits.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn create_appends_with_fresh_id_and_empty_history() {
        let mut habits = Vec::new();
        let first = create(&mut habits, "Exercise", "💪", "#ef4444", jan(5)).unwrap();
        let second = create(&mut habits, "Read", "📚", "#8b5cf6", jan(5)).unwrap();

        assert_eq!(habits.len(), 2);
        assert_eq!(habits[0].name, "Exercise");
        assert_eq!(habits[1].name, "Read");
        assert_ne!(first.id, second.id);
        assert!(first.completions.is_empty());
        assert_eq!(first.created_at, "2024-01-05");
    }

    #[test]
    fn create_trims_name_and_rejects_blank() {
        let mut habits = Vec::new();
        assert!(create(&mut habits, "   ", "💪", "#ef4444", jan(5)).is_none());
        assert!(habits.is_empty());

        let habit = create(&mut habits, "  Stretch  ", "🧘", "#10b981", jan(5)).unwrap();
        assert_eq!(habit.name, "Stretch");
    }

    #[test]
    fn toggle_twice_restores_original_set() {
        let mut habits = Vec::new();
        let habit = create(&mut habits, "Read", "📚", "#8b5cf6", jan(5)).unwrap();

        assert_eq!(toggle_day(&mut habits, &habit.id, "2024-01-05"), Some(true));
        assert!(habits[0].completions.contains("2024-01-05"));
        assert_eq!(toggle_day(&mut habits, &habit.id, "2024-01-05"), Some(false));
        assert!(habits[0].completions.is_empty());
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let mut habits = Vec::new();
        create(&mut habits, "Read", "📚", "#8b5cf6", jan(5)).unwrap();

        assert_eq!(toggle_day(&mut habits, "missing", "2024-01-05"), None);
        assert!(habits[0].completions.is_empty());
    }

    #[test]
    fn delete_removes_only_the_matching_habit() {
        let mut habits = Vec::new();
        let first = create(&mut habits, "Exercise", "💪", "#ef4444", jan(5)).unwrap();
        create(&mut habits, "Read", "📚", "#8b5cf6", jan(5)).unwrap();

        assert!(delete(&mut habits, &first.id));
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].name, "Read");
        assert!(!delete(&mut habits, &first.id));
        assert_eq!(habits.len(), 1);
    }
}
