//! Frequency tables and time aggregation over the cleaned records.

use chrono::{DateTime, Days, NaiveDate, Utc};
use std::collections::{BTreeMap, HashMap};

/// `(label, count)` rows, most frequent first.
pub type Counts = Vec<(String, usize)>;

/// Counts occurrences of each value, sorted by count descending then label
/// ascending, truncated to `top_n` rows.
pub fn value_counts<'a, I>(values: I, top_n: usize) -> Counts
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&'a str, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let mut rows: Counts = counts
        .into_iter()
        .map(|(label, n)| (label.to_string(), n))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows.truncate(top_n);
    rows
}

/// Earliest and latest instant, if any.
pub fn time_range<I>(instants: I) -> Option<(DateTime<Utc>, DateTime<Utc>)>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    instants.into_iter().fold(None, |acc, t| match acc {
        None => Some((t, t)),
        Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
    })
}

/// Per-day counts from the first to the last UTC day, zero-filled, keeping
/// only the trailing `tail_days` days.
pub fn daily_volume<I>(instants: I, tail_days: usize) -> Vec<(NaiveDate, usize)>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for t in instants {
        *per_day.entry(t.date_naive()).or_default() += 1;
    }
    let (first, last) = match (per_day.keys().next(), per_day.keys().next_back()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return Vec::new(),
    };

    let mut days = Vec::new();
    let mut day = first;
    while day <= last {
        days.push((day, per_day.get(&day).copied().unwrap_or(0)));
        match day.checked_add_days(Days::new(1)) {
            Some(next) => day = next,
            None => break,
        }
    }

    let skip = days.len().saturating_sub(tail_days);
    days.split_off(skip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn value_counts_sorts_and_truncates() {
        let values = ["b.com", "a.com", "c.com", "a.com", "b.com", "a.com", "d.com"];
        let rows = value_counts(values, 3);
        assert_eq!(
            rows,
            vec![
                ("a.com".to_string(), 3),
                ("b.com".to_string(), 2),
                ("c.com".to_string(), 1),
            ]
        );
    }

    #[test]
    fn value_counts_empty() {
        assert!(value_counts(Vec::<&str>::new(), 10).is_empty());
    }

    #[test]
    fn time_range_finds_bounds() {
        let r = time_range([at(2024, 3, 2, 0), at(2024, 3, 1, 5), at(2024, 3, 4, 1)]);
        assert_eq!(r, Some((at(2024, 3, 1, 5), at(2024, 3, 4, 1))));
        assert_eq!(time_range(Vec::<DateTime<Utc>>::new()), None);
    }

    #[test]
    fn daily_volume_fills_gaps_with_zero() {
        let rows = daily_volume(
            [at(2024, 3, 1, 1), at(2024, 3, 1, 23), at(2024, 3, 4, 12)],
            30,
        );
        assert_eq!(
            rows,
            vec![
                (day(2024, 3, 1), 2),
                (day(2024, 3, 2), 0),
                (day(2024, 3, 3), 0),
                (day(2024, 3, 4), 1),
            ]
        );
    }

    #[test]
    fn daily_volume_keeps_trailing_days() {
        let rows = daily_volume([at(2024, 1, 1, 0), at(2024, 1, 10, 0)], 3);
        assert_eq!(
            rows,
            vec![(day(2024, 1, 8), 0), (day(2024, 1, 9), 0), (day(2024, 1, 10), 1)]
        );
    }
}
