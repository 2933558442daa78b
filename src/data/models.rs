//! Domain models: weekday categories, data points, and the tracked series.

use serde::{Deserialize, Serialize};

/// A weekday category on the chart's x-axis.
///
/// The axis is fixed to the seven weekdays in Monday..Sunday order,
/// independent of how many points each category holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All weekdays in axis order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// The weekday of the current local date.
    pub fn today() -> Self {
        use chrono::Datelike;
        chrono::Local::now().weekday().into()
    }

    /// Full English weekday name.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl From<chrono::Weekday> for Day {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Day::Monday,
            chrono::Weekday::Tue => Day::Tuesday,
            chrono::Weekday::Wed => Day::Wednesday,
            chrono::Weekday::Thu => Day::Thursday,
            chrono::Weekday::Fri => Day::Friday,
            chrono::Weekday::Sat => Day::Saturday,
            chrono::Weekday::Sun => Day::Sunday,
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single recorded value for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub day: Day,
    pub value: f64,
}

/// A named, ordered collection of data points rendered as one color group
/// in the bar chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<DataPoint>,
}

impl Series {
    /// Build a series with one point per weekday, Monday first.
    fn seeded(name: &str, values: [f64; 7]) -> Self {
        Series {
            name: name.to_string(),
            points: Day::ALL
                .iter()
                .zip(values)
                .map(|(&day, value)| DataPoint { day, value })
                .collect(),
        }
    }
}

/// One of the two tracked quantities.
///
/// Entry dialogs address the series list positionally; this mapping is the
/// single place that ordering lives, together with the dialog copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Sleep,
    Water,
}

impl Quantity {
    /// Position of this quantity's series in the series list.
    pub const fn series_index(self) -> usize {
        match self {
            Quantity::Sleep => 0,
            Quantity::Water => 1,
        }
    }

    /// Entry dialog title.
    pub const fn title(self) -> &'static str {
        match self {
            Quantity::Sleep => "Sleep",
            Quantity::Water => "Water",
        }
    }

    /// Entry dialog header prompt.
    pub const fn prompt(self) -> &'static str {
        match self {
            Quantity::Sleep => "Enter the amount of hours you slept today",
            Quantity::Water => "Enter the amount of water you drank today",
        }
    }

    /// Unit suffix for confirmation messages.
    pub const fn unit(self) -> &'static str {
        match self {
            Quantity::Sleep => "h",
            Quantity::Water => "L",
        }
    }
}

/// Demonstration data the chart starts with: one point per weekday for both
/// series, sleep first.
pub fn seed_series() -> Vec<Series> {
    vec![
        Series::seeded("Hours of sleep", [8.0, 7.0, 6.0, 7.0, 7.5, 8.0, 4.0]),
        Series::seeded("Liters of Water", [2.0, 3.0, 2.0, 1.5, 2.0, 1.0, 4.0]),
    ]
}
