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
use crate::text::{CivilText, LayoutScanner, TIME_LAYOUT};
use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// A reading of a 24-hour clock, with no date or time zone attached.
///
/// Like [`crate::Date`], the fields are not checked on construction.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Time {
    /// Hour of the day, from 0 to 23
    pub hour: i32,

    /// Minute of the hour, from 0 to 59
    pub minute: i32,

    /// Second of the minute, from 0 to 59
    pub second: i32,

    /// Nanosecond of the second, from 0 to 999,999,999
    pub nanosecond: i32,
}

impl From<NaiveTime> for Time {
    fn from(item: NaiveTime) -> Self {
        Self {
            hour: item.hour() as i32,
            minute: item.minute() as i32,
            second: item.second() as i32,
            // below 2e9 even for leap seconds
            nanosecond: item.nanosecond() as i32,
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.nanosecond != 0 {
            write!(f, ".{:09}", self.nanosecond)?;
        }
        Ok(())
    }
}

impl CivilText for Time {
    const TYPE_NAME: &'static str = "Time";
    const LAYOUT: &'static str = TIME_LAYOUT;

    fn to_text(&self) -> Result<String> {
        Ok(self.to_string())
    }

    fn from_text(text: &str) -> Result<Self> {
        Self::parse_strict(text).map_err(|cause| {
            tracing::debug!(literal = text, %cause, "rejected civil time");
            Error::parse(Self::TYPE_NAME, text, TIME_LAYOUT, cause)
        })
    }
}

impl FromStr for Time {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let text = self.to_text().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_str(crate::text::TextVisitor::new())
    }
}

impl Time {
    /// Creates a new `Time`. The fields are not checked.
    pub fn new(hour: i32, minute: i32, second: i32, nanosecond: i32) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// Parses `H:MM:SS` or `HH:MM:SS`, optionally followed by a
    /// dot and up to nine fractional digits.
    fn parse_strict(text: &str) -> std::result::Result<Self, ParseCause> {
        let mut scanner = LayoutScanner::new(text);
        scanner.digits(1, 2, "15")?;
        scanner.literal(b':', ":")?;
        scanner.digits(2, 2, "04")?;
        scanner.literal(b':', ":")?;
        scanner.digits(2, 2, "05")?;
        if scanner.optional_literal(b'.') {
            match scanner.digit_run() {
                0 => scanner.digits(1, 9, ".999999999").map(|_| ())?,
                digits if digits > 9 => return Err(ParseCause::FractionTooLong { digits }),
                _ => {}
            }
        }
        scanner.finish()?;

        let time = NaiveTime::parse_from_str(text, "%H:%M:%S%.f")?;
        if time.nanosecond() >= NANOS_PER_SECOND as u32 {
            return Err(ParseCause::LeapSecond);
        }
        Ok(time.into())
    }

    /// Checks whether every field is within its range
    pub fn is_valid(&self) -> bool {
        (0..24).contains(&self.hour)
            && (0..60).contains(&self.minute)
            && (0..60).contains(&self.second)
            && (0..NANOS_PER_SECOND).contains(&self.nanosecond)
    }

    /// Checks whether this is midnight (i.e., the zero `Time`)
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Transforms a `Time` into a `chrono` `NaiveTime`. Returns
    /// `None` if the `Time` is not valid.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        if !self.is_valid() {
            return None;
        }
        NaiveTime::from_hms_nano_opt(
            self.hour as u32,
            self.minute as u32,
            self.second as u32,
            self.nanosecond as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text() -> Result<()> {
        assert_eq!(Time::new(3, 42, 31, 876).to_text()?, "03:42:31.000000876");
        assert_eq!(Time::new(0, 0, 0, 0).to_text()?, "00:00:00");
        assert_eq!(
            Time::new(23, 59, 59, 999_999_999).to_text()?,
            "23:59:59.999999999"
        );
        assert_eq!(Time::new(12, 0, 0, 500_000_000).to_text()?, "12:00:00.500000000");
        Ok(())
    }

    #[test]
    fn test_to_text_does_not_check() -> Result<()> {
        assert_eq!(Time::new(24, 0, 0, 0).to_text()?, "24:00:00");
        assert_eq!(Time::new(0, -1, 0, 0).to_text()?, "00:-1:00");
        assert_eq!(Time::new(1, 0, 75, 0).to_text()?, "01:00:75");
        assert_eq!(
            Time::new(12, 23, 34, 1_231_231_234).to_text()?,
            "12:23:34.1231231234"
        );
        Ok(())
    }

    #[test]
    fn test_from_text() -> Result<()> {
        assert_eq!(
            Time::from_text("03:42:31.000000876")?,
            Time::new(3, 42, 31, 876)
        );
        assert_eq!(Time::from_text("00:00:00")?, Time::default());
        assert_eq!(Time::from_text("3:42:31")?, Time::new(3, 42, 31, 0));
        assert_eq!(Time::from_text("12:00:00.5")?, Time::new(12, 0, 0, 500_000_000));
        assert_eq!(
            "23:59:59.999999999".parse::<Time>()?,
            Time::new(23, 59, 59, 999_999_999)
        );
        Ok(())
    }

    #[test]
    fn test_from_text_negative_hour() {
        let e = Time::from_text("-3:42:31.000000876").unwrap_err();
        assert_eq!(
            e.to_string(),
            r#"Time: parsing "-3:42:31.000000876" as "15:04:05.999999999": cannot parse "-3:42:31.000000876" as "15""#
        );
    }

    #[test]
    fn test_from_text_rejects() {
        for bad in [
            "24:00:00",
            "00:-1:00",
            "01:00:75",
            "00:60:00",
            "23:59:60",
            "12:23:34.1231231234",
            "12:23:34.",
            "12:23",
            "123:00:00",
            "12:3:00",
            "12:30:00Z",
            " 12:30:00",
            "",
        ] {
            assert!(Time::from_text(bad).is_err(), "'{}' should be rejected", bad);
        }
    }

    #[test]
    fn test_fraction_too_long() {
        match Time::from_text("12:23:34.1231231234").unwrap_err() {
            Error::Parse { cause, .. } => {
                assert_eq!(cause, ParseCause::FractionTooLong { digits: 10 })
            }
            e => panic!("unexpected error {:?}", e),
        }
    }

    #[test]
    fn test_leap_second() {
        match Time::from_text("23:59:60").unwrap_err() {
            Error::Parse { cause, .. } => assert_eq!(cause, ParseCause::LeapSecond),
            e => panic!("unexpected error {:?}", e),
        }
    }

    #[test]
    fn test_round_trip() -> Result<()> {
        for t in [
            Time::new(0, 0, 0, 0),
            Time::new(3, 42, 31, 876),
            Time::new(12, 23, 34, 45),
            Time::new(23, 59, 59, 999_999_999),
            Time::new(1, 2, 3, 100),
        ] {
            assert_eq!(Time::from_text(&t.to_text()?)?, t);
        }
        Ok(())
    }

    #[test]
    fn test_is_valid() {
        assert!(Time::default().is_valid());
        assert!(Time::new(23, 59, 59, 999_999_999).is_valid());
        assert!(!Time::new(24, 0, 0, 0).is_valid());
        assert!(!Time::new(0, 60, 0, 0).is_valid());
        assert!(!Time::new(0, 0, 60, 0).is_valid());
        assert!(!Time::new(0, 0, 0, 1_000_000_000).is_valid());
        assert!(!Time::new(0, 0, 0, -1).is_valid());
        assert!(Time::default().is_zero());
    }

    #[test]
    fn test_chrono() {
        let t = Time::new(3, 42, 31, 876);
        let naive = t.to_naive_time();
        assert_eq!(naive, NaiveTime::from_hms_nano_opt(3, 42, 31, 876));
        assert_eq!(naive.map(Time::from), Some(t));
        assert_eq!(Time::new(0, 0, 59, 1_500_000_000).to_naive_time(), None);
    }
}
