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

//! Conversion to and from the scalar values a storage backend works with.
//!
//! Civil values are stored as their text form. When reading back,
//! drivers may hand over either that text or a date-time they already
//! decoded; anything else is refused.
//!
//! ```
//! use civil::{Date, Scalar, ScanInput};
//!
//! let mut d = Date::default();
//! d.scan(ScanInput::Text("2020-02-29")).unwrap();
//! assert_eq!(d, Date::new(2020, 2, 29));
//! assert_eq!(d.value(), "2020-02-29");
//! ```

use crate::date::Date;
use crate::datetime::DateTime;
use crate::error::{Error, Result};
use crate::text::CivilText;
use crate::time::Time;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// What a storage driver can hand back for a column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScanInput<'a> {
    /// Text, expected in the civil text form
    Text(&'a str),
    /// A date-time the driver already decoded
    Instant(NaiveDateTime),
    /// An integer column
    Integer(i64),
    /// A floating point column
    Real(f64),
    /// Raw bytes
    Blob(&'a [u8]),
    /// SQL `NULL`
    Null,
}

impl<'a> ScanInput<'a> {
    /// The name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            ScanInput::Text(_) => "Text",
            ScanInput::Instant(_) => "Instant",
            ScanInput::Integer(_) => "Integer",
            ScanInput::Real(_) => "Real",
            ScanInput::Blob(_) => "Blob",
            ScanInput::Null => "Null",
        }
    }
}

impl<'a> From<&'a str> for ScanInput<'a> {
    fn from(v: &'a str) -> Self {
        ScanInput::Text(v)
    }
}

impl<'a> From<&'a String> for ScanInput<'a> {
    fn from(v: &'a String) -> Self {
        ScanInput::Text(v.as_str())
    }
}

impl From<NaiveDateTime> for ScanInput<'_> {
    fn from(v: NaiveDateTime) -> Self {
        ScanInput::Instant(v)
    }
}

impl From<NaiveDate> for ScanInput<'_> {
    fn from(v: NaiveDate) -> Self {
        ScanInput::Instant(NaiveDateTime::new(v, NaiveTime::MIN))
    }
}

/// Uses the wall-clock reading in the instant's own time zone
impl<Tz: TimeZone> From<chrono::DateTime<Tz>> for ScanInput<'_> {
    fn from(v: chrono::DateTime<Tz>) -> Self {
        ScanInput::Instant(v.naive_local())
    }
}

impl From<i64> for ScanInput<'_> {
    fn from(v: i64) -> Self {
        ScanInput::Integer(v)
    }
}

impl From<f64> for ScanInput<'_> {
    fn from(v: f64) -> Self {
        ScanInput::Real(v)
    }
}

impl<'a> From<&'a [u8]> for ScanInput<'a> {
    fn from(v: &'a [u8]) -> Self {
        ScanInput::Blob(v)
    }
}

impl<'a, T: Into<ScanInput<'a>>> From<Option<T>> for ScanInput<'a> {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => ScanInput::Null,
        }
    }
}

/// A value that can be stored as a scalar and read back.
pub trait Scalar: CivilText {
    /// The value to store. It is never rejected: out-of-range
    /// fields are written as they are.
    fn value(&self) -> String;

    /// Builds the value from a projection of a date-time
    fn from_instant(instant: NaiveDateTime) -> Self;

    /// Builds a value from what the driver returned
    fn from_scalar(input: ScanInput<'_>) -> Result<Self> {
        match input {
            ScanInput::Text(text) => Self::from_text(text),
            ScanInput::Instant(instant) => Ok(Self::from_instant(instant)),
            other => {
                tracing::debug!(
                    type_name = Self::TYPE_NAME,
                    input = other.kind(),
                    "refused scan input"
                );
                Err(Error::UnsupportedScan {
                    type_name: Self::TYPE_NAME,
                    input: other.kind(),
                })
            }
        }
    }

    /// Populates `self` from what the driver returned. On error,
    /// `self` is left untouched.
    fn scan<'a, I: Into<ScanInput<'a>>>(&mut self, input: I) -> Result<()> {
        *self = Self::from_scalar(input.into())?;
        Ok(())
    }
}

impl Scalar for Date {
    fn value(&self) -> String {
        self.to_string()
    }

    fn from_instant(instant: NaiveDateTime) -> Self {
        instant.date().into()
    }
}

impl Scalar for Time {
    fn value(&self) -> String {
        self.to_string()
    }

    fn from_instant(instant: NaiveDateTime) -> Self {
        instant.time().into()
    }
}

impl Scalar for DateTime {
    fn value(&self) -> String {
        self.to_string()
    }

    fn from_instant(instant: NaiveDateTime) -> Self {
        instant.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 2, 29)
            .and_then(|d| d.and_hms_nano_opt(3, 42, 31, 876))
            .unwrap()
    }

    #[test]
    fn test_value() {
        assert_eq!(Date::new(2020, 2, 29).value(), "2020-02-29");
        assert_eq!(Date::new(0, 0, 0).value(), "0000-00-00");
        assert_eq!(Time::new(3, 42, 31, 876).value(), "03:42:31.000000876");
        assert_eq!(
            DateTime::new(Date::new(2020, 2, 29), Time::new(3, 42, 31, 876)).value(),
            "2020-02-29T03:42:31.000000876"
        );
    }

    #[test]
    fn test_value_is_not_checked() {
        // unlike to_text
        assert_eq!(Date::new(-1, 1, 1).value(), "-001-01-01");
        assert!(Date::new(-1, 1, 1).to_text().is_err());
    }

    #[test]
    fn test_scan_date() -> Result<()> {
        let mut d = Date::default();
        d.scan("2020-02-29")?;
        assert_eq!(d, Date::new(2020, 2, 29));

        let mut d = Date::default();
        d.scan(instant())?;
        assert_eq!(d, Date::new(2020, 2, 29));

        let mut d = Date::default();
        d.scan(instant().date())?;
        assert_eq!(d, Date::new(2020, 2, 29));
        Ok(())
    }

    #[test]
    fn test_scan_time() -> Result<()> {
        let mut t = Time::default();
        t.scan("03:42:31.000000876")?;
        assert_eq!(t, Time::new(3, 42, 31, 876));

        let mut t = Time::default();
        t.scan(instant())?;
        assert_eq!(t, Time::new(3, 42, 31, 876));
        Ok(())
    }

    #[test]
    fn test_scan_datetime() -> Result<()> {
        let expected = DateTime::new(Date::new(2020, 2, 29), Time::new(3, 42, 31, 876));

        let mut dt = DateTime::default();
        dt.scan("2020-02-29T03:42:31.000000876")?;
        assert_eq!(dt, expected);

        let mut dt = DateTime::default();
        dt.scan(instant())?;
        assert_eq!(dt, expected);

        let mut dt = DateTime::default();
        dt.scan(instant().and_utc())?;
        assert_eq!(dt, expected);
        Ok(())
    }

    #[test]
    fn test_scan_unsupported() {
        let mut d = Date::new(2020, 2, 29);
        let e = d.scan(42i64).unwrap_err();
        assert_eq!(
            e,
            Error::UnsupportedScan {
                type_name: "Date",
                input: "Integer"
            }
        );
        assert_eq!(e.to_string(), "Date: cannot scan Integer into Date");
        assert!(d.scan(1.5f64).is_err());
        assert!(d.scan(&b"2020-02-29"[..]).is_err());
        assert!(d.scan(ScanInput::Null).is_err());
        assert!(d.scan(None::<&str>).is_err());
        assert_eq!(d, Date::new(2020, 2, 29));
    }

    #[test]
    fn test_failed_scan_keeps_value() {
        let mut t = Time::new(1, 2, 3, 4);
        assert!(t.scan("-3:42:31.000000876").is_err());
        assert_eq!(t, Time::new(1, 2, 3, 4));

        let mut dt = DateTime::new(Date::new(2019, 12, 25), Time::new(1, 2, 3, 4));
        assert!(dt.scan("2020-02-29T24:00:00").is_err());
        assert_eq!(
            dt,
            DateTime::new(Date::new(2019, 12, 25), Time::new(1, 2, 3, 4))
        );
    }

    #[test]
    fn test_scan_optional() -> Result<()> {
        let mut d = Date::default();
        d.scan(Some("2021-03-01"))?;
        assert_eq!(d, Date::new(2021, 3, 1));
        Ok(())
    }
}
