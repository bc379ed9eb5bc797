// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Inclusive date ranges and the triage-day calendar.
//!
//! A triage session is named after the weekday it happens on and covers the
//! previous working day: "Tuesday triage" looks at Monday, while "Monday
//! triage" looks at the whole weekend (Friday through Sunday).

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc, Weekday};

use crate::error::{Error, Result};

/// Date format accepted on the command line and used in reports.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate(s.to_string()))
}

/// Parses a weekday name or its three-letter abbreviation.
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| Error::InvalidWeekday(s.to_string()))
}

/// An inclusive range of calendar days (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting an end before the start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::EndBeforeStart { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// A range covering exactly one day.
    pub fn single(day: NaiveDate) -> Self {
        DateRange {
            start: day,
            end: day,
        }
    }

    /// Parses a start date and optional end date. Without an end date the
    /// range is the start day alone.
    pub fn parse(start: &str, end: Option<&str>) -> Result<Self> {
        let start = parse_date(start)?;
        match end {
            Some(end) => DateRange::new(start, parse_date(end)?),
            None => Ok(DateRange::single(start)),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// First instant of the window: start day at 00:00:00.
    pub fn window_start(&self) -> DateTime<Utc> {
        self.start.and_time(NaiveTime::default()).and_utc()
    }

    /// Last instant of the window: end day at 23:59:59, including any
    /// sub-second part.
    pub fn window_end(&self) -> DateTime<Utc> {
        let last = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or_default();
        self.end.and_time(last).and_utc()
    }

    /// Returns true if `ts` falls inside the window, both ends inclusive.
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts >= self.window_start() && ts <= self.window_end()
    }

    /// Human description used in report headers.
    pub fn describe(&self) -> String {
        let pretty = |d: NaiveDate| d.format("%Y-%m-%d (%A)").to_string();
        if self.is_single_day() {
            format!("on {}", pretty(self.start))
        } else {
            format!(
                "between {} and {} inclusive",
                pretty(self.start),
                pretty(self.end)
            )
        }
    }

    /// Names the triage session this range corresponds to, if any.
    ///
    /// Friday through Sunday is "Monday triage"; a single Monday through
    /// Thursday is triaged the following day. Anything else has no name.
    pub fn triage_name(&self) -> Option<String> {
        let start = self.start.weekday();
        if start == Weekday::Fri && self.end.signed_duration_since(self.start).num_days() == 2 {
            return Some("Monday triage".to_string());
        }
        if !self.is_single_day() {
            return None;
        }
        match start {
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu => {
                Some(format!("{} triage", weekday_name(start.succ())))
            }
            _ => None,
        }
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Most recent day on or before `today` that falls on `weekday`.
fn last_occurrence(today: NaiveDate, weekday: Weekday) -> NaiveDate {
    let back = (7 + today.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    today - Days::new(u64::from(back))
}

/// Resolves a triage keyword such as "mon" or "tuesday" to the range that
/// session covers, relative to `today`.
///
/// The session is the most recent occurrence of the weekday (today counts).
/// Monday triage covers the preceding Friday through Sunday; every other
/// weekday covers the day before it. Weekend keywords have no session.
pub fn auto_date_range(keyword: &str, today: NaiveDate) -> Result<DateRange> {
    let weekday = parse_weekday(keyword)?;
    if matches!(weekday, Weekday::Sat | Weekday::Sun) {
        return Err(Error::WeekendTriage(weekday_name(weekday).to_string()));
    }

    let session = last_occurrence(today, weekday);
    if weekday == Weekday::Mon {
        let start = session - Days::new(3);
        let end = session - Days::new(1);
        DateRange::new(start, end)
    } else {
        Ok(DateRange::single(session - Days::new(1)))
    }
}

/// The range used when no dates are given: yesterday, or the whole weekend
/// when yesterday was a Sunday.
pub fn default_range(today: NaiveDate) -> DateRange {
    let yesterday = today - Days::new(1);
    if yesterday.weekday() == Weekday::Sun {
        DateRange {
            start: yesterday - Days::new(2),
            end: yesterday,
        }
    } else {
        DateRange::single(yesterday)
    }
}

#[cfg(test)]
#[path = "dates_tests.rs"]
mod tests;
