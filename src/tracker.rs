//! Tracker view-model: owns the chart series and applies confirmed entries.
//!
//! All chart mutation goes through [`TrackerState::record`]; handlers receive
//! the state explicitly instead of capturing it.

use clap::ValueEnum;
use thiserror::Error;

use crate::data::{seed_series, DataPoint, Day, Quantity, Series};

/// How a confirmed entry is applied to a series that may already hold a
/// point for the same weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EntryMode {
    /// Keep prior points; a repeated same-day entry shows as an extra bar.
    #[default]
    Append,
    /// Overwrite the existing point for the weekday, if any.
    Replace,
}

impl std::fmt::Display for EntryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryMode::Append => f.write_str("append"),
            EntryMode::Replace => f.write_str("replace"),
        }
    }
}

/// Rejected entry dialog input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("enter a number")]
    Empty,
    #[error("not a number: {0:?}")]
    InvalidNumber(String),
    #[error("value must be a finite number")]
    NonFinite,
}

/// Parse the text of an entry dialog into a value.
pub fn parse_entry(input: &str) -> Result<f64, EntryError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(EntryError::Empty);
    }
    let value: f64 = input
        .parse()
        .map_err(|_| EntryError::InvalidNumber(input.to_string()))?;
    if !value.is_finite() {
        return Err(EntryError::NonFinite);
    }
    Ok(value)
}

/// Owns the two chart series and the entry mode for the session.
#[derive(Debug)]
pub struct TrackerState {
    series: Vec<Series>,
    mode: EntryMode,
}

impl TrackerState {
    /// Create a tracker pre-populated with the demonstration data.
    pub fn new(mode: EntryMode) -> Self {
        TrackerState {
            series: seed_series(),
            mode,
        }
    }

    /// The series in fixed positional order (sleep first, water second).
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Entry mode selected for this session.
    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    /// Record a confirmed entry for `quantity` on `day`.
    pub fn record(&mut self, quantity: Quantity, day: Day, value: f64) {
        let series = &mut self.series[quantity.series_index()];
        match self.mode {
            EntryMode::Append => series.points.push(DataPoint { day, value }),
            EntryMode::Replace => match series.points.iter_mut().find(|p| p.day == day) {
                Some(point) => point.value = value,
                None => series.points.push(DataPoint { day, value }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_counts(state: &TrackerState) -> (usize, usize) {
        (state.series()[0].points.len(), state.series()[1].points.len())
    }

    #[test]
    fn test_new_state_holds_seed_data() {
        let state = TrackerState::new(EntryMode::Append);
        assert_eq!(state.series().len(), 2);
        assert_eq!(point_counts(&state), (7, 7));
        assert_eq!(state.series()[0].name, "Hours of sleep");
        assert_eq!(state.series()[1].name, "Liters of Water");
    }

    #[test]
    fn test_append_water_touches_only_water_series() {
        let mut state = TrackerState::new(EntryMode::Append);
        state.record(Quantity::Water, Day::Wednesday, 3.5);

        assert_eq!(point_counts(&state), (7, 8));
        let last = state.series()[1].points.last().unwrap();
        assert_eq!(last.day, Day::Wednesday);
        assert_eq!(last.value, 3.5);
    }

    #[test]
    fn test_append_sleep_touches_only_sleep_series() {
        let mut state = TrackerState::new(EntryMode::Append);
        state.record(Quantity::Sleep, Day::Friday, 6.0);

        assert_eq!(point_counts(&state), (8, 7));
        let last = state.series()[0].points.last().unwrap();
        assert_eq!(last.day, Day::Friday);
        assert_eq!(last.value, 6.0);
    }

    #[test]
    fn test_append_allows_duplicate_days() {
        let mut state = TrackerState::new(EntryMode::Append);
        state.record(Quantity::Water, Day::Monday, 1.0);
        state.record(Quantity::Water, Day::Monday, 2.0);

        assert_eq!(point_counts(&state), (7, 9));
        let monday_values: Vec<f64> = state.series()[1]
            .points
            .iter()
            .filter(|p| p.day == Day::Monday)
            .map(|p| p.value)
            .collect();
        assert_eq!(monday_values, [2.0, 1.0, 2.0]);
    }

    #[test]
    fn test_replace_overwrites_existing_day() {
        let mut state = TrackerState::new(EntryMode::Replace);
        state.record(Quantity::Sleep, Day::Tuesday, 9.0);

        // Point count is unchanged and the point keeps its axis position.
        assert_eq!(point_counts(&state), (7, 7));
        assert_eq!(state.series()[0].points[1].day, Day::Tuesday);
        assert_eq!(state.series()[0].points[1].value, 9.0);
    }

    #[test]
    fn test_replace_repeated_entries_keep_one_point_per_day() {
        let mut state = TrackerState::new(EntryMode::Replace);
        state.record(Quantity::Water, Day::Sunday, 0.5);
        state.record(Quantity::Water, Day::Sunday, 2.5);

        assert_eq!(point_counts(&state), (7, 7));
        let sunday: Vec<f64> = state.series()[1]
            .points
            .iter()
            .filter(|p| p.day == Day::Sunday)
            .map(|p| p.value)
            .collect();
        assert_eq!(sunday, [2.5]);
    }

    #[test]
    fn test_replace_inserts_when_day_is_missing() {
        let mut state = TrackerState::new(EntryMode::Replace);
        state.series[1].points.clear();
        state.record(Quantity::Water, Day::Thursday, 1.5);

        assert_eq!(state.series()[1].points.len(), 1);
        assert_eq!(state.series()[1].points[0].day, Day::Thursday);
    }

    #[test]
    fn test_parse_entry_accepts_numbers() {
        assert_eq!(parse_entry("3.5"), Ok(3.5));
        assert_eq!(parse_entry("6"), Ok(6.0));
        assert_eq!(parse_entry(" 2 "), Ok(2.0));
        // No validation beyond numeric parsing.
        assert_eq!(parse_entry("-1"), Ok(-1.0));
    }

    #[test]
    fn test_parse_entry_rejects_empty() {
        assert_eq!(parse_entry(""), Err(EntryError::Empty));
        assert_eq!(parse_entry("   "), Err(EntryError::Empty));
    }

    #[test]
    fn test_parse_entry_rejects_garbage() {
        assert_eq!(
            parse_entry("abc"),
            Err(EntryError::InvalidNumber("abc".to_string()))
        );
        assert_eq!(
            parse_entry("3,5"),
            Err(EntryError::InvalidNumber("3,5".to_string()))
        );
    }

    #[test]
    fn test_parse_entry_rejects_non_finite() {
        assert_eq!(parse_entry("NaN"), Err(EntryError::NonFinite));
        assert_eq!(parse_entry("inf"), Err(EntryError::NonFinite));
    }

    #[test]
    fn test_entry_mode_display_round_trips_through_cli_names() {
        assert_eq!(EntryMode::Append.to_string(), "append");
        assert_eq!(EntryMode::Replace.to_string(), "replace");
    }
}
