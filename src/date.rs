/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use crate::error::{Error, ParseCause, Result};
use crate::text::{CivilText, LayoutScanner, DATE_LAYOUT};
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A day in the proleptic Gregorian calendar, with no time
/// zone attached.
///
/// Months and days are counted from 1 (e.g. January is 1, not 0).
/// Nothing stops you from building a `Date` with fields out of
/// range: they are only checked when the value is read from
/// text (see [`Date::is_valid`]).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Date {
    /// The year, from 0 to 9999 if it is to be written as text
    pub year: i32,

    /// Months of the year, from 1 to 12
    pub month: i32,

    /// Day of the month, from 1 to N
    pub day: i32,
}

impl From<NaiveDate> for Date {
    fn from(item: NaiveDate) -> Self {
        Self {
            year: item.year(),
            month: item.month() as i32,
            day: item.day() as i32,
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl CivilText for Date {
    const TYPE_NAME: &'static str = "Date";
    const LAYOUT: &'static str = DATE_LAYOUT;

    fn to_text(&self) -> Result<String> {
        if !(0..=9999).contains(&self.year) {
            return Err(Error::YearOutOfRange {
                type_name: Self::TYPE_NAME,
                year: self.year,
            });
        }
        Ok(self.to_string())
    }

    fn from_text(text: &str) -> Result<Self> {
        Self::parse_strict(text).map_err(|cause| {
            tracing::debug!(literal = text, %cause, "rejected civil date");
            Error::parse(Self::TYPE_NAME, text, DATE_LAYOUT, cause)
        })
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let text = self.to_text().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_str(crate::text::TextVisitor::new())
    }
}

/// Builds the day that is `day - 1` days after the first day of
/// the month `month0` months (counted from 0) after January of `year`.
///
/// This is how out-of-range months and days are folded back into
/// the calendar: day 0 is the last day of the previous month,
/// February 30th is March 1st or 2nd, month 13 is January of the
/// following year, and so on.
fn normalize(year: i32, month0: i64, day: i64) -> Option<NaiveDate> {
    let total = i64::from(year) * 12 + month0;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = total.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(Duration::days(day - 1))
}

impl Date {
    /// Creates a new `Date`. The fields are not checked.
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Parses text of the exact shape `YYYY-MM-DD`, with
    /// a real month and a day that exists in that month.
    fn parse_strict(text: &str) -> std::result::Result<Self, ParseCause> {
        let mut scanner = LayoutScanner::new(text);
        scanner.digits(4, 4, "2006")?;
        scanner.literal(b'-', "-")?;
        scanner.digits(2, 2, "01")?;
        scanner.literal(b'-', "-")?;
        scanner.digits(2, 2, "02")?;
        scanner.finish()?;

        let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")?;
        Ok(date.into())
    }

    /// Checks whether the `Date` names a day that exists
    /// (e.g., February 29th only on leap years).
    ///
    /// The year is not restricted to `0..=9999` here; that is a
    /// limit of the text form, not of the calendar.
    pub fn is_valid(&self) -> bool {
        self.to_naive_date().is_some()
    }

    /// Checks whether this is the zero `Date` (i.e., `0000-00-00`)
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Transforms a `Date` into a `chrono` `NaiveDate`. Returns
    /// `None` if the `Date` is not valid.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)
    }

    fn shifted(&self, months: i64, days: i64) -> Option<Self> {
        let month0 = i64::from(self.month) - 1 + months;
        let day = i64::from(self.day) + days;
        let ret: Self = normalize(self.year, month0, day)?.into();
        if days == 0 && ret.day != self.day {
            tracing::trace!(from = %self, to = %ret, "day rolled over into the next month");
        }
        Some(ret)
    }

    /// Adds a number of calendar months to the date.
    ///
    /// If the day does not exist in the target month, the date rolls
    /// over into the following month (i.e., adding one month to January
    /// 31st gives March 2nd or 3rd, not the end of February). Returns
    /// `None` if the result cannot be represented.
    ///
    /// ```
    /// use civil::Date;
    ///
    /// let leap = Date::new(2020, 2, 29);
    /// assert_eq!(leap.add_months(12), Some(Date::new(2021, 3, 1)));
    /// ```
    pub fn add_months(&self, months: i32) -> Option<Self> {
        self.shifted(i64::from(months), 0)
    }

    /// Adds a number of calendar years to the date, rolling over
    /// like [`Date::add_months`].
    pub fn add_years(&self, years: i32) -> Option<Self> {
        self.shifted(i64::from(years) * 12, 0)
    }

    /// Adds a number of days to the date (negative numbers go back in time)
    pub fn add_days(&self, days: i32) -> Option<Self> {
        self.shifted(0, i64::from(days))
    }

    /// Number of days from `other` to `self`; negative if `self` comes first.
    pub fn days_since(&self, other: Date) -> Option<i64> {
        let a = normalize(self.year, i64::from(self.month) - 1, i64::from(self.day))?;
        let b = normalize(other.year, i64::from(other.month) - 1, i64::from(other.day))?;
        Some((a - b).num_days())
    }
}
