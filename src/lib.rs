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

#![deny(missing_docs)]

//! Civil dates and times: calendar and clock readings that are not
//! attached to any time zone. They follow the proleptic Gregorian calendar,
//! with days of exactly 24 hours, hours of 60 minutes and minutes of
//! 60 seconds. Because they have no location, they do **not** represent
//! instants; use `chrono::DateTime` for that.
//!
//! There are three types: [`Date`], [`Time`] and [`DateTime`] (which is
//! just the other two together). Their fields are public and are not
//! checked on construction. They are checked when the values are read
//! from text.
//!
//! # Text form
//!
//! | Type | Text |
//! |------|------|
//! | [`Date`] | `2020-02-29` |
//! | [`Time`] | `03:42:31` or `03:42:31.000000876` |
//! | [`DateTime`] | `2020-02-29T03:42:31.000000876` |
//!
//! ```
//! use civil::{CivilText, Date, DateTime, Time};
//!
//! let dt = DateTime::new(Date::new(2020, 2, 29), Time::new(3, 42, 31, 876));
//! assert_eq!(dt.to_text().unwrap(), "2020-02-29T03:42:31.000000876");
//!
//! let back = DateTime::from_text("2020-02-29T03:42:31.000000876").unwrap();
//! assert_eq!(back, dt);
//! ```
//!
//! # Interaction with Serde
//!
//! The `serde` feature (on by default) reads and writes the values as
//! JSON strings:
//!
//! ```ignore
//! use civil::Date;
//! use serde_json;
//!
//! let d: Date = serde_json::from_str(r#""2020-02-29""#).unwrap();
//! assert_eq!(d, Date::new(2020, 2, 29));
//! assert_eq!(serde_json::to_string(&d).unwrap(), r#""2020-02-29""#);
//! ```
//!
//! # Interaction with Chrono
//!
//! Values can be projected out of `chrono` types, and turned back into
//! them when they are valid:
//!
//! ```
//! use chrono::NaiveDate;
//! use civil::Date;
//!
//! let naive = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
//! let d: Date = naive.into();
//! assert_eq!(d.to_naive_date(), Some(naive));
//! ```

mod date;
pub use crate::date::Date;
mod time;
pub use crate::time::Time;
mod datetime;
pub use crate::datetime::DateTime;
mod error;
pub use crate::error::{Error, ParseCause, Result};
mod text;
pub use crate::text::{CivilText, DATETIME_LAYOUT, DATE_LAYOUT, TIME_LAYOUT};
mod scalar;
pub use crate::scalar::{Scalar, ScanInput};
