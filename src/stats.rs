use crate::calendar::{day_key, last_n_days};
use crate::models::{
    DashboardResponse, DayCell, Habit, HabitStatsRow, HabitSummary, HabitsResponse, HeatmapDay,
    Overview, TrendWeek,
};
use chrono::{Datelike, Duration, NaiveDate};

/// Days of history the streak walk will inspect at most.
const STREAK_SCAN_DAYS: i64 = 365;

pub const WEEK_WINDOW: i64 = 7;
const HEATMAP_DAYS: i64 = 28;
const TREND_WEEKS: usize = 4;

/// Consecutive completed days ending at `today`. An incomplete `today` does
/// not break a run that ends yesterday; it just contributes nothing.
pub fn streak(habit: &Habit, today: NaiveDate) -> u32 {
    let mut run = 0;
    for offset in 0..STREAK_SCAN_DAYS {
        if habit.completions.contains(&day_key(today - Duration::days(offset))) {
            run += 1;
        } else if offset > 0 {
            break;
        }
    }
    run
}

/// Percentage of the trailing `window_days` window (ending `today`,
/// inclusive) on which the habit was completed. `window_days` must be >= 1.
pub fn completion_rate(habit: &Habit, window_days: i64, today: NaiveDate) -> u8 {
    let done = last_n_days(today, window_days)
        .iter()
        .filter(|day| habit.completions.contains(*day))
        .count();
    percentage(done as u64, window_days as u64)
}

/// Percentage of habits completed on `day`; 0 for an empty collection.
pub fn daily_rate(habits: &[Habit], day: &str) -> u8 {
    percentage(completed_on(habits, day) as u64, habits.len() as u64)
}

/// Aggregate rate per week, oldest week first. Week `w` covers the 7 days
/// ending `today - 7w`, so the windows tile without overlap.
pub fn weekly_trend(habits: &[Habit], week_count: usize, today: NaiveDate) -> Vec<TrendWeek> {
    let mut weeks = Vec::with_capacity(week_count);
    for w in (0..week_count).rev() {
        let end = today - Duration::days(w as i64 * WEEK_WINDOW);
        let done: usize = last_n_days(end, WEEK_WINDOW)
            .iter()
            .map(|day| completed_on(habits, day))
            .sum();
        let label = if w == 0 {
            "This week".to_string()
        } else {
            format!("{w}w ago")
        };
        weeks.push(TrendWeek {
            label,
            rate: percentage(done as u64, habits.len() as u64 * WEEK_WINDOW as u64),
        });
    }
    weeks
}

/// Per-day completion ratios for the last `num_days`, oldest first. Ratios
/// stay unrounded; the presentation layer buckets them into intensity tiers.
pub fn heatmap(habits: &[Habit], num_days: i64, today: NaiveDate) -> Vec<HeatmapDay> {
    let mut days = Vec::with_capacity(num_days.max(0) as usize);
    for offset in (0..num_days.max(0)).rev() {
        let date = today - Duration::days(offset);
        let key = day_key(date);
        let done = completed_on(habits, &key);
        let ratio = if habits.is_empty() {
            0.0
        } else {
            done as f64 / habits.len() as f64
        };
        days.push(HeatmapDay {
            date: key,
            ratio,
            day_of_month: date.day(),
            weekday: date.weekday().num_days_from_sunday(),
        });
    }
    days
}

/// Index of the first maximum in `rates`; later ties never win.
pub fn best_day(rates: &[u8]) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for (index, &rate) in rates.iter().enumerate() {
        let beats = match best {
            Some((_, best_rate)) => rate > best_rate,
            None => true,
        };
        if beats {
            best = Some((index, rate));
        }
    }
    best.map(|(index, _)| index)
}

/// Count of (habit, day) completion pairs, optionally limited to the
/// trailing `within_days` window ending at `today`.
pub fn total_completions(habits: &[Habit], within_days: Option<i64>, today: NaiveDate) -> u64 {
    match within_days {
        None => habits.iter().map(|h| h.completions.len() as u64).sum(),
        Some(days) => {
            let window = last_n_days(today, days);
            habits
                .iter()
                .map(|h| window.iter().filter(|day| h.completions.contains(*day)).count() as u64)
                .sum()
        }
    }
}

/// The habit's last 7 days as weekday-labelled done flags, oldest first.
pub fn week_data(habit: &Habit, today: NaiveDate) -> Vec<DayCell> {
    (0..WEEK_WINDOW)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            let key = day_key(date);
            DayCell {
                label: date.format("%a").to_string(),
                done: habit.completions.contains(&key),
                date: key,
            }
        })
        .collect()
}

pub fn overview(habits: &[Habit], today: NaiveDate) -> Overview {
    if habits.is_empty() {
        return Overview {
            today_rate: 0,
            week_rate: 0,
            best_streak: 0,
            total_completions: 0,
        };
    }

    let rate_sum: u64 = habits
        .iter()
        .map(|h| completion_rate(h, WEEK_WINDOW, today) as u64)
        .sum();

    Overview {
        today_rate: daily_rate(habits, &day_key(today)),
        week_rate: (rate_sum as f64 / habits.len() as f64).round() as u8,
        best_streak: habits.iter().map(|h| streak(h, today)).max().unwrap_or(0),
        total_completions: total_completions(habits, None, today),
    }
}

pub fn build_habits(habits: &[Habit], today: NaiveDate) -> HabitsResponse {
    let date = day_key(today);
    let done_count = completed_on(habits, &date);
    HabitsResponse {
        today_rate: daily_rate(habits, &date),
        done_count,
        total: habits.len(),
        habits: habits
            .iter()
            .map(|habit| habit_summary(habit, today))
            .collect(),
        date,
    }
}

pub fn habit_summary(habit: &Habit, today: NaiveDate) -> HabitSummary {
    HabitSummary {
        id: habit.id.clone(),
        name: habit.name.clone(),
        emoji: habit.emoji.clone(),
        color: habit.color.clone(),
        done_today: habit.completions.contains(&day_key(today)),
        streak: streak(habit, today),
        rate: completion_rate(habit, WEEK_WINDOW, today),
        week: week_data(habit, today),
    }
}

pub fn build_dashboard(habits: &[Habit], today: NaiveDate) -> DashboardResponse {
    let heatmap_days = heatmap(habits, HEATMAP_DAYS, today);
    let daily_rates: Vec<u8> = heatmap_days
        .iter()
        .map(|day| (day.ratio * 100.0).round() as u8)
        .collect();

    DashboardResponse {
        overview: overview(habits, today),
        best_day: best_day(&daily_rates),
        weekly_trend: weekly_trend(habits, TREND_WEEKS, today),
        habits: habits
            .iter()
            .map(|habit| HabitStatsRow {
                id: habit.id.clone(),
                name: habit.name.clone(),
                emoji: habit.emoji.clone(),
                color: habit.color.clone(),
                rate: completion_rate(habit, WEEK_WINDOW, today),
                streak: streak(habit, today),
            })
            .collect(),
        heatmap: heatmap_days,
    }
}

fn completed_on(habits: &[Habit], day: &str) -> usize {
    habits.iter().filter(|h| h.completions.contains(day)).count()
}

fn percentage(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn habit_with(days: &[&str]) -> Habit {
        Habit {
            id: "h".into(),
            name: "Test".into(),
            emoji: "🎯".into(),
            color: "#3b82f6".into(),
            created_at: "2024-01-01".into(),
            completions: days.iter().map(|day| day.to_string()).collect(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn streak_counts_run_ending_today() {
        let habit = habit_with(&[
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-04",
            "2024-01-05",
        ]);
        assert_eq!(streak(&habit, date(2024, 1, 5)), 5);
    }

    #[test]
    fn streak_survives_incomplete_today() {
        let habit = habit_with(&[
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-04",
            "2024-01-05",
        ]);
        // Jan 6 itself is unmarked; the run ending Jan 5 still stands.
        assert_eq!(streak(&habit, date(2024, 1, 6)), 5);
    }

    #[test]
    fn streak_stops_at_first_gap_before_yesterday() {
        let habit = habit_with(&["2024-01-02", "2024-01-03", "2024-01-05"]);
        assert_eq!(streak(&habit, date(2024, 1, 5)), 1);
        assert_eq!(streak(&habit, date(2024, 1, 6)), 1);
        assert_eq!(streak(&habit, date(2024, 1, 7)), 0);
    }

    #[test]
    fn streak_zero_for_empty_habit() {
        let habit = habit_with(&[]);
        assert_eq!(streak(&habit, date(2024, 1, 5)), 0);
    }

    #[test]
    fn completion_rate_rounds_half_away_from_zero() {
        let habit = habit_with(&["2024-01-03", "2024-01-04", "2024-01-05"]);
        // 3 of 7 = 42.857 -> 43
        assert_eq!(completion_rate(&habit, 7, date(2024, 1, 5)), 43);
        // 1 of 8 = 12.5 -> 13
        assert_eq!(completion_rate(&habit_with(&["2024-01-05"]), 8, date(2024, 1, 5)), 13);
    }

    #[test]
    fn completion_rate_full_and_empty_windows() {
        let habit = habit_with(&["2024-01-04", "2024-01-05"]);
        assert_eq!(completion_rate(&habit, 2, date(2024, 1, 5)), 100);
        assert_eq!(completion_rate(&habit_with(&[]), 7, date(2024, 1, 5)), 0);
    }

    #[test]
    fn completion_rate_non_decreasing_in_completed_days() {
        let today = date(2024, 1, 10);
        let mut days: Vec<String> = Vec::new();
        let mut previous = 0;
        for offset in 0..7 {
            days.push(day_key(today - Duration::days(offset)));
            let keys: Vec<&str> = days.iter().map(String::as_str).collect();
            let rate = completion_rate(&habit_with(&keys), 7, today);
            assert!(rate >= previous);
            previous = rate;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn daily_rate_handles_empty_collection() {
        assert_eq!(daily_rate(&[], "2024-01-05"), 0);
    }

    #[test]
    fn daily_rate_half_done_is_fifty() {
        let habits = vec![habit_with(&["2024-01-05"]), habit_with(&[])];
        assert_eq!(daily_rate(&habits, "2024-01-05"), 50);
    }

    #[test]
    fn weekly_trend_labels_and_windows() {
        let today = date(2024, 1, 28);
        // Completed every day of the current 7-day window only.
        let current: Vec<String> = last_n_days(today, 7);
        let keys: Vec<&str> = current.iter().map(String::as_str).collect();
        let habits = vec![habit_with(&keys)];

        let trend = weekly_trend(&habits, 4, today);
        assert_eq!(trend.len(), 4);
        assert_eq!(trend[0].label, "3w ago");
        assert_eq!(trend[3].label, "This week");
        assert_eq!(trend[3].rate, 100);
        assert_eq!(trend[2].rate, 0);
    }

    #[test]
    fn weekly_trend_empty_collection_is_all_zero() {
        let trend = weekly_trend(&[], 4, date(2024, 1, 28));
        assert!(trend.iter().all(|week| week.rate == 0));
    }

    #[test]
    fn heatmap_is_oldest_first_with_unrounded_ratios() {
        let today = date(2024, 1, 28);
        let habits = vec![
            habit_with(&["2024-01-28"]),
            habit_with(&["2024-01-28"]),
            habit_with(&[]),
        ];
        let days = heatmap(&habits, 28, today);
        assert_eq!(days.len(), 28);
        assert_eq!(days.first().unwrap().date, "2024-01-01");
        assert_eq!(days.last().unwrap().date, "2024-01-28");
        let last = days.last().unwrap();
        assert!((last.ratio - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(last.weekday, 0); // 2024-01-28 is a Sunday
    }

    #[test]
    fn heatmap_without_habits_is_flat_zero() {
        let days = heatmap(&[], 7, date(2024, 1, 28));
        assert!(days.iter().all(|day| day.ratio == 0.0));
    }

    #[test]
    fn best_day_prefers_first_maximum() {
        assert_eq!(best_day(&[50, 80, 80, 30]), Some(1));
        assert_eq!(best_day(&[0, 0, 0]), Some(0));
        assert_eq!(best_day(&[]), None);
    }

    #[test]
    fn total_completions_with_and_without_window() {
        let today = date(2024, 1, 10);
        let habits = vec![
            habit_with(&["2023-06-01", "2024-01-09", "2024-01-10"]),
            habit_with(&["2024-01-08"]),
        ];
        assert_eq!(total_completions(&habits, None, today), 4);
        assert_eq!(total_completions(&habits, Some(3), today), 3);
        assert_eq!(total_completions(&habits, Some(1), today), 1);
    }

    #[test]
    fn week_data_covers_seven_labelled_days() {
        let habit = habit_with(&["2024-01-05"]);
        let week = week_data(&habit, date(2024, 1, 5));
        assert_eq!(week.len(), 7);
        assert_eq!(week.last().unwrap().date, "2024-01-05");
        assert!(week.last().unwrap().done);
        assert_eq!(week.last().unwrap().label, "Fri");
        assert!(!week.first().unwrap().done);
    }

    #[test]
    fn overview_of_empty_collection_is_zeroed() {
        let stats = overview(&[], date(2024, 1, 5));
        assert_eq!(stats.today_rate, 0);
        assert_eq!(stats.week_rate, 0);
        assert_eq!(stats.best_streak, 0);
        assert_eq!(stats.total_completions, 0);
    }

    #[test]
    fn overview_aggregates_across_habits() {
        let today = date(2024, 1, 5);
        let habits = vec![
            habit_with(&["2024-01-03", "2024-01-04", "2024-01-05"]),
            habit_with(&["2024-01-04"]),
        ];
        let stats = overview(&habits, today);
        assert_eq!(stats.today_rate, 50);
        // rates 43 and 14 -> mean 28.5 -> 29
        assert_eq!(stats.week_rate, 29);
        assert_eq!(stats.best_streak, 3);
        assert_eq!(stats.total_completions, 4);
    }

    #[test]
    fn dashboard_series_lengths() {
        let habits = vec![habit_with(&["2024-01-05"])];
        let dashboard = build_dashboard(&habits, date(2024, 1, 5));
        assert_eq!(dashboard.heatmap.len(), 28);
        assert_eq!(dashboard.weekly_trend.len(), 4);
        assert_eq!(dashboard.habits.len(), 1);
        assert!(dashboard.best_day.is_some());
    }

    #[test]
    fn build_habits_counts_today() {
        let today = date(2024, 1, 5);
        let habits = vec![habit_with(&["2024-01-05"]), habit_with(&[])];
        let view = build_habits(&habits, today);
        assert_eq!(view.date, "2024-01-05");
        assert_eq!(view.done_count, 1);
        assert_eq!(view.total, 2);
        assert_eq!(view.today_rate, 50);
        assert!(view.habits[0].done_today);
        assert!(!view.habits[1].done_today);
    }
}
