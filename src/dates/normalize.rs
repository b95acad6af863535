//! Date argument normalization for request handlers
//!
//! Views can be addressed by day in several ways: an explicit date, a
//! year/month/day triple, an ISO year/week/weekday triple, or nothing at all
//! (meaning today). [`DateArguments`] collects whatever the request carried
//! and [`DateArguments::normalize`] reduces it to one [`NaiveDate`].
//!
//! Exactly one shape may be used per request:
//!
//! | Given | Result |
//! |---|---|
//! | `start` | date part of `start` |
//! | `year`, `month` (, `day`) | calendar date, `day` defaults to 1 |
//! | `year`, `week` (, `weekday`) | ISO week date, `weekday` defaults to Monday |
//! | nothing | today, local time |
//!
//! Anything else is [`DateArgumentError::InvalidArgumentCombination`].
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use recordkit::{with_date_normalization, DateArguments};
//!
//! struct Request;
//!
//! let view = with_date_normalization(|_req: &Request, date: NaiveDate| date.to_string());
//! let page = view.call(&Request, &DateArguments::new().year(1993).month(2))?;
//! assert_eq!(page, "1993-02-01");
//! # Ok::<(), recordkit::DateArgumentError>(())
//! ```

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use tracing::debug;

use super::iso_week::iso_to_date;
use crate::errors::DateArgumentError;

/// An explicit starting point supplied by the caller
///
/// Time-of-day information is discarded during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartArgument {
    /// A plain calendar date
    Date(NaiveDate),
    /// A date with time of day
    DateTime(NaiveDateTime),
}

impl StartArgument {
    /// The calendar date, with any time of day stripped
    pub fn date(&self) -> NaiveDate {
        match self {
            StartArgument::Date(date) => *date,
            StartArgument::DateTime(dt) => dt.date(),
        }
    }
}

impl From<NaiveDate> for StartArgument {
    fn from(date: NaiveDate) -> Self {
        StartArgument::Date(date)
    }
}

impl From<NaiveDateTime> for StartArgument {
    fn from(dt: NaiveDateTime) -> Self {
        StartArgument::DateTime(dt)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for StartArgument {
    /// Keeps the wall-clock date in the value's own time zone
    fn from(dt: DateTime<Tz>) -> Self {
        StartArgument::DateTime(dt.naive_local())
    }
}

/// The date-related arguments of a single request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateArguments {
    /// An explicit date or date-time; excludes every other argument
    pub start: Option<StartArgument>,
    /// Calendar year, or ISO year when `week` is set
    pub year: Option<i32>,
    /// Month of `year`, 1 to 12
    pub month: Option<u32>,
    /// Day of `month`; needs `year` and `month`
    pub day: Option<u32>,
    /// ISO week of `year`, 1 to 53
    pub week: Option<u32>,
    /// ISO weekday within `week`, 1 (Monday) to 7 (Sunday); defaults to Monday
    pub weekday: Option<u32>,
}

impl DateArguments {
    /// Creates an empty argument set (which normalizes to today)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit start date or date-time
    pub fn start(mut self, start: impl Into<StartArgument>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Sets the year
    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the month
    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    /// Sets the day of the month
    pub fn day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    /// Sets the ISO week
    pub fn week(mut self, week: u32) -> Self {
        self.week = Some(week);
        self
    }

    /// Sets the ISO weekday
    pub fn weekday(mut self, weekday: u32) -> Self {
        self.weekday = Some(weekday);
        self
    }

    /// Builds arguments from named textual segments, as captured from a URL
    ///
    /// Recognised names are `year`, `month`, `day`, `week` and `weekday`.
    /// Empty values count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`DateArgumentError::InvalidArgument`] for an unknown name or a
    /// value that is not an integer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recordkit::DateArguments;
    ///
    /// let args = DateArguments::from_segments([("year", "2025"), ("week", "42")])?;
    /// assert_eq!(args, DateArguments::new().year(2025).week(42));
    /// # Ok::<(), recordkit::DateArgumentError>(())
    /// ```
    pub fn from_segments<'a, I>(segments: I) -> Result<Self, DateArgumentError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut args = Self::new();
        for (name, raw) in segments {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            match name {
                "year" => args.year = Some(parse_segment("year", raw)?),
                "month" => args.month = Some(parse_segment("month", raw)?),
                "day" => args.day = Some(parse_segment("day", raw)?),
                "week" => args.week = Some(parse_segment("week", raw)?),
                "weekday" => args.weekday = Some(parse_segment("weekday", raw)?),
                other => return Err(DateArgumentError::invalid_argument("name", other)),
            }
        }
        Ok(args)
    }

    /// Names of the arguments that are present, in declaration order
    pub fn given(&self) -> Vec<&'static str> {
        [
            ("start", self.start.is_some()),
            ("year", self.year.is_some()),
            ("month", self.month.is_some()),
            ("day", self.day.is_some()),
            ("week", self.week.is_some()),
            ("weekday", self.weekday.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }

    /// Reduces the arguments to a single date, using the local calendar for "today"
    pub fn normalize(&self) -> Result<NaiveDate, DateArgumentError> {
        self.normalize_on(Local::now().date_naive())
    }

    /// Reduces the arguments to a single date, with `today` supplied by the caller
    pub fn normalize_on(&self, today: NaiveDate) -> Result<NaiveDate, DateArgumentError> {
        let date = match *self {
            DateArguments {
                start: Some(start),
                year: None,
                month: None,
                day: None,
                week: None,
                weekday: None,
            } => start.date(),
            DateArguments {
                start: None,
                year: Some(year),
                month: Some(month),
                day,
                week: None,
                weekday: None,
            } => {
                let day = day.unwrap_or(1);
                NaiveDate::from_ymd_opt(year, month, day)
                    .ok_or_else(|| DateArgumentError::invalid_date(year, month, day))?
            }
            DateArguments {
                start: None,
                year: Some(year),
                month: None,
                day: None,
                week: Some(week),
                weekday,
            } => iso_to_date(year, week, weekday.unwrap_or(1))?,
            DateArguments {
                start: None,
                year: None,
                month: None,
                day: None,
                week: None,
                weekday: None,
            } => today,
            _ => return Err(DateArgumentError::invalid_combination(&self.given())),
        };

        debug!(date = %date, given = ?self.given(), "Normalized date arguments");
        Ok(date)
    }
}

fn parse_segment<T: std::str::FromStr>(
    name: &'static str,
    raw: &str,
) -> Result<T, DateArgumentError> {
    raw.parse()
        .map_err(|_| DateArgumentError::invalid_argument(name, raw))
}

/// A handler taking `(context, date)` wrapped to accept [`DateArguments`]
///
/// The handler runs once per successful call and not at all when the
/// arguments fail to normalize.
#[derive(Debug, Clone, Copy)]
pub struct DateNormalized<F> {
    handler: F,
}

impl<F> DateNormalized<F> {
    pub fn new(handler: F) -> Self {
        Self { handler }
    }

    /// Normalizes `args` and invokes the handler with the resulting date
    pub fn call<C, R>(&self, context: &C, args: &DateArguments) -> Result<R, DateArgumentError>
    where
        C: ?Sized,
        F: Fn(&C, NaiveDate) -> R,
    {
        let date = args.normalize()?;
        Ok((self.handler)(context, date))
    }

    /// Like [`call`](Self::call), with "today" supplied by the caller
    pub fn call_on<C, R>(
        &self,
        context: &C,
        args: &DateArguments,
        today: NaiveDate,
    ) -> Result<R, DateArgumentError>
    where
        C: ?Sized,
        F: Fn(&C, NaiveDate) -> R,
    {
        let date = args.normalize_on(today)?;
        Ok((self.handler)(context, date))
    }

    /// Unwraps the original handler
    pub fn into_inner(self) -> F {
        self.handler
    }
}

/// Wraps `handler` so that it receives one normalized date
pub fn with_date_normalization<F>(handler: F) -> DateNormalized<F> {
    DateNormalized::new(handler)
}
