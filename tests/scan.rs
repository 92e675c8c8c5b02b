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

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use civil::{Date, DateTime, Error, Scalar, ScanInput, Time};

#[test]
fn scan_from_text_and_instant_agree() -> Result<(), Error> {
    let instant = Utc
        .with_ymd_and_hms(2020, 2, 29, 3, 42, 31)
        .single()
        .ok_or(Error::Overflow { type_name: "DateTime" })?;

    let mut from_text = DateTime::default();
    from_text.scan("2020-02-29T03:42:31")?;

    let mut from_instant = DateTime::default();
    from_instant.scan(instant)?;

    assert_eq!(from_text, from_instant);
    assert_eq!(from_instant.value(), "2020-02-29T03:42:31");
    Ok(())
}

#[test]
fn scan_uses_wall_clock_of_the_offset() -> Result<(), Error> {
    let tz = FixedOffset::east_opt(9 * 3600).ok_or(Error::Overflow { type_name: "Time" })?;
    let instant = tz
        .with_ymd_and_hms(2014, 11, 28, 21, 0, 9)
        .single()
        .ok_or(Error::Overflow { type_name: "Time" })?;

    let mut t = Time::default();
    t.scan(instant)?;
    assert_eq!(t, Time::new(21, 0, 9, 0));

    let mut d = Date::default();
    d.scan(instant)?;
    assert_eq!(d, Date::new(2014, 11, 28));
    Ok(())
}

#[test]
fn value_then_scan_round_trip() -> Result<(), Error> {
    let start = NaiveDate::from_ymd_opt(2019, 12, 30).ok_or(Error::Overflow { type_name: "Date" })?;
    for n in 0..800 {
        let d: Date = (start + chrono::Duration::days(n)).into();
        let stored = d.value();
        let back = Date::from_scalar(ScanInput::Text(&stored))?;
        assert_eq!(back, d);
    }
    Ok(())
}

#[test]
fn storage_drivers_returning_other_types() {
    for input in [
        ScanInput::Integer(20200229),
        ScanInput::Real(2020.0229),
        ScanInput::Blob(b"2020-02-29"),
        ScanInput::Null,
    ] {
        let kind = input.kind();
        assert_eq!(
            Date::from_scalar(input),
            Err(Error::UnsupportedScan {
                type_name: "Date",
                input: kind
            })
        );
        assert!(Time::from_scalar(input).is_err());
        assert!(DateTime::from_scalar(input).is_err());
    }
}
