//! Date Scale Module
//! X-axis scales for calendar dates, plotted as day numbers.

use super::axis::{within, Axis, AxisScale, ResolvedAxis, ScaleError, Transform};
use super::breaks::{ordered, Limits};
use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt::{self, Write as _};
use std::str::FromStr;
use tracing::{trace, warn};

/// Abbreviated month and day, e.g. `Mar 04`.
pub const DEFAULT_DATE_LABELS: &str = "%b %d";
pub const DEFAULT_DATE_BREAKS: &str = "1 week";

/// Upper bound on generated date breaks, so a tiny step over a huge range
/// cannot run away.
const MAX_DATE_BREAKS: usize = 10_000;

/// Converts a date to the day number used as its plot coordinate.
pub fn date_to_num(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Converts a plot coordinate back to the date whose day contains it.
pub fn num_to_date(value: f64) -> Option<NaiveDate> {
    if !value.is_finite() || value.abs() > i32::MAX as f64 {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(value.floor() as i32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateUnit {
    Day,
    Week,
    Month,
    Year,
}

/// Spacing between date breaks, such as `1 week` or `3 months`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBreaks {
    pub count: u32,
    pub unit: DateUnit,
}

impl Default for DateBreaks {
    fn default() -> Self {
        Self {
            count: 1,
            unit: DateUnit::Week,
        }
    }
}

impl fmt::Display for DateBreaks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            DateUnit::Day => "day",
            DateUnit::Week => "week",
            DateUnit::Month => "month",
            DateUnit::Year => "year",
        };
        let plural = if self.count == 1 { "" } else { "s" };
        write!(f, "{} {}{}", self.count, unit, plural)
    }
}

impl FromStr for DateBreaks {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScaleError::InvalidDateBreaks(s.to_string());

        let mut parts = s.split_whitespace();
        let (count, unit) = match (parts.next(), parts.next(), parts.next()) {
            (Some(count), Some(unit), None) => (count.parse::<u32>().map_err(|_| invalid())?, unit),
            // A bare unit means one of it, e.g. "month".
            (Some(unit), None, None) => (1, unit),
            _ => return Err(invalid()),
        };
        if count == 0 {
            return Err(invalid());
        }

        let unit = unit.to_ascii_lowercase();
        let unit = match unit.strip_suffix('s').unwrap_or(unit.as_str()) {
            "day" => DateUnit::Day,
            "week" => DateUnit::Week,
            "month" => DateUnit::Month,
            "year" => DateUnit::Year,
            _ => return Err(invalid()),
        };

        Ok(Self { count, unit })
    }
}

impl DateBreaks {
    /// First break at or before `date`, aligned to the unit.
    fn align(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self.unit {
            DateUnit::Day => Some(date),
            DateUnit::Week => {
                date.checked_sub_days(Days::new(date.weekday().num_days_from_monday() as u64))
            }
            DateUnit::Month => date.with_day(1),
            DateUnit::Year => NaiveDate::from_ymd_opt(date.year(), 1, 1),
        }
    }

    fn step(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self.unit {
            DateUnit::Day => date.checked_add_days(Days::new(self.count as u64)),
            DateUnit::Week => date.checked_add_days(Days::new(7 * self.count as u64)),
            DateUnit::Month => date.checked_add_months(Months::new(self.count)),
            DateUnit::Year => {
                date.checked_add_months(Months::new(self.count.checked_mul(12)?))
            }
        }
    }

    /// Break dates covering `[first, last]`.
    pub fn dates(&self, first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut current = self.align(first);
        while let Some(date) = current {
            if date > last {
                break;
            }
            if dates.len() >= MAX_DATE_BREAKS {
                warn!(breaks = %self, "too many date breaks, truncating");
                break;
            }
            if date >= first {
                dates.push(date);
            }
            current = self.step(date);
        }
        dates
    }
}

/// Configuration for a date axis.
#[derive(Debug, Clone, PartialEq)]
pub struct DateScale {
    axis: Axis,
    breaks: DateBreaks,
    date_labels: String,
    limits: Option<(NaiveDate, NaiveDate)>,
    title: Option<String>,
}

impl DateScale {
    pub fn new(axis: Axis, breaks: DateBreaks) -> Self {
        Self {
            axis,
            breaks,
            date_labels: DEFAULT_DATE_LABELS.to_string(),
            limits: None,
            title: None,
        }
    }

    /// Replace the `strftime` label pattern.
    ///
    /// Patterns a calendar date cannot be formatted with, such as `%Q` or
    /// the time-of-day `%H`, are rejected here.
    pub fn with_date_labels(mut self, pattern: impl Into<String>) -> Result<Self, ScaleError> {
        let pattern = pattern.into();
        let mut sample = String::new();
        if write!(sample, "{}", NaiveDate::MIN.format(&pattern)).is_err() {
            return Err(ScaleError::InvalidDateLabels(pattern));
        }
        self.date_labels = pattern;
        Ok(self)
    }

    pub fn with_limits(mut self, first: NaiveDate, last: NaiveDate) -> Self {
        self.limits = Some((first.min(last), first.max(last)));
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn date_breaks(&self) -> DateBreaks {
        self.breaks
    }

    pub fn date_labels(&self) -> &str {
        &self.date_labels
    }
}

impl AxisScale for DateScale {
    fn axis(&self) -> Axis {
        self.axis
    }

    fn resolve(&self, data_limits: Limits) -> ResolvedAxis {
        let limits = match self.limits {
            Some((first, last)) => (date_to_num(first), date_to_num(last)),
            None => ordered(data_limits),
        };

        let dates = match (num_to_date(limits.0), num_to_date(limits.1)) {
            (Some(first), Some(last)) => self.breaks.dates(first, last),
            _ => {
                warn!(?limits, "date axis limits are not representable as dates");
                Vec::new()
            }
        };
        let major = within(dates.iter().map(|&d| date_to_num(d)).collect(), limits);
        let labels = dates
            .iter()
            .filter(|&&d| major.contains(&date_to_num(d)))
            .map(|d| d.format(&self.date_labels).to_string())
            .collect();
        trace!(breaks = %self.breaks, count = major.len(), "resolved date scale");

        ResolvedAxis {
            axis: self.axis,
            transform: Transform::Identity,
            limits,
            major,
            minor: Vec::new(),
            labels,
            title: self.title.clone(),
        }
    }
}

/// Concise x-axis scale for dates, with breaks every `date_breaks`
/// (e.g. `"1 week"`) labelled as abbreviated month and day.
pub fn x_date_fmt(date_breaks: &str) -> Result<DateScale, ScaleError> {
    Ok(DateScale::new(Axis::X, date_breaks.parse()?))
}

/// [`x_date_fmt`] with weekly breaks.
pub fn x_date_fmt_default() -> DateScale {
    DateScale::new(Axis::X, DateBreaks::default())
}
