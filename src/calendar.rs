use chrono::{Duration, Local, NaiveDate};

/// Current local calendar day. The only wall-clock read in the crate;
/// everything downstream takes the date as a parameter.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The `n` most recent day keys ending at `today`, oldest first.
pub fn last_n_days(today: NaiveDate, n: i64) -> Vec<String> {
    if n <= 0 {
        return Vec::new();
    }
    (0..n)
        .rev()
        .map(|offset| day_key(today - Duration::days(offset)))
        .collect()
}
