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

use crate::date::Date;
use crate::error::{Error, ParseCause, Result};
use crate::text::{CivilText, DATETIME_LAYOUT};
use crate::time::Time;
use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A [`Date`] and a [`Time`] together. Still not an instant:
/// without a time zone it does not point to a unique moment.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct DateTime {
    /// The calendar day
    pub date: Date,

    /// The clock reading within that day
    pub time: Time,
}

impl From<NaiveDateTime> for DateTime {
    fn from(item: NaiveDateTime) -> Self {
        Self {
            date: item.date().into(),
            time: item.time().into(),
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl CivilText for DateTime {
    const TYPE_NAME: &'static str = "DateTime";
    const LAYOUT: &'static str = DATETIME_LAYOUT;

    fn to_text(&self) -> Result<String> {
        let date = self.date.to_text()?;
        let time = self.time.to_text()?;
        Ok(format!("{}T{}", date, time))
    }

    fn from_text(text: &str) -> Result<Self> {
        let (date, time) = text.split_once('T').ok_or_else(|| {
            tracing::debug!(literal = text, "civil date-time without separator");
            Error::parse(
                Self::TYPE_NAME,
                text,
                DATETIME_LAYOUT,
                ParseCause::MissingSeparator,
            )
        })?;
        Ok(Self {
            date: Date::from_text(date)?,
            time: Time::from_text(time)?,
        })
    }
}

impl FromStr for DateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let text = self.to_text().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_str(crate::text::TextVisitor::new())
    }
}

impl DateTime {
    /// Creates a new `DateTime`
    pub fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    /// Checks that both the date and the time are valid
    pub fn is_valid(&self) -> bool {
        self.date.is_valid() && self.time.is_valid()
    }

    /// Checks whether both parts are zero
    pub fn is_zero(&self) -> bool {
        self.date.is_zero() && self.time.is_zero()
    }

    /// Transforms a `DateTime` into a `chrono` `NaiveDateTime`.
    /// Returns `None` if it is not valid.
    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        Some(NaiveDateTime::new(
            self.date.to_naive_date()?,
            self.time.to_naive_time()?,
        ))
    }
}
