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

//! The text form of civil values, shared by JSON and by storage scalars.

use crate::error::{ParseCause, Result};

/// Layout for dates, written as its reference date
pub const DATE_LAYOUT: &str = "2006-01-02";

/// Layout for times of day, written as its reference time
pub const TIME_LAYOUT: &str = "15:04:05.999999999";

/// Layout for date-times
pub const DATETIME_LAYOUT: &str = "2006-01-02T15:04:05.999999999";

/// A value that can be written to and read from its fixed text form.
///
/// Writing only refuses what cannot be written at all (e.g., a year
/// with more than four digits). Reading is strict: the text must match
/// the layout exactly and name a real calendar day or clock reading.
pub trait CivilText: Sized {
    /// The name used in error messages
    const TYPE_NAME: &'static str;

    /// The layout accepted by [`CivilText::from_text`]
    const LAYOUT: &'static str;

    /// Writes the value as text
    fn to_text(&self) -> Result<String>;

    /// Reads a value from text
    fn from_text(text: &str) -> Result<Self>;
}

/// Walks over a text checking that it follows a layout,
/// one element at a time.
pub(crate) struct LayoutScanner<'a> {
    source: &'a str,

    current_index: usize,
}

impl<'a> LayoutScanner<'a> {
    /// Creates a new [`LayoutScanner`]
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            current_index: 0,
        }
    }

    /// What is left to scan
    fn rest(&self) -> &'a str {
        &self.source[self.current_index..]
    }

    fn mismatch(&self, element: &'static str) -> ParseCause {
        ParseCause::Layout {
            rest: self.rest().to_string(),
            element,
        }
    }

    /// Gets the byte at the `current_index`, if any
    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.current_index).copied()
    }

    /// Consumes between `min` and `max` ASCII digits. Returns the digits.
    pub(crate) fn digits(
        &mut self,
        min: usize,
        max: usize,
        element: &'static str,
    ) -> std::result::Result<&'a str, ParseCause> {
        let start = self.current_index;
        let n = self.rest().bytes().take_while(u8::is_ascii_digit).count();
        if n < min || n > max {
            return Err(self.mismatch(element));
        }
        self.current_index += n;
        Ok(&self.source[start..self.current_index])
    }

    /// Consumes a single separator byte
    pub(crate) fn literal(
        &mut self,
        byte: u8,
        element: &'static str,
    ) -> std::result::Result<(), ParseCause> {
        if self.peek() != Some(byte) {
            return Err(self.mismatch(element));
        }
        self.current_index += 1;
        Ok(())
    }

    /// Consumes the separator byte if it is next. Returns whether it did.
    pub(crate) fn optional_literal(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Consumes a run of digits of any length. Returns how many there were.
    pub(crate) fn digit_run(&mut self) -> usize {
        let n = self.rest().bytes().take_while(u8::is_ascii_digit).count();
        self.current_index += n;
        n
    }

    /// Checks that nothing is left
    pub(crate) fn finish(&self) -> std::result::Result<(), ParseCause> {
        if self.current_index == self.source.len() {
            Ok(())
        } else {
            Err(ParseCause::ExtraText {
                rest: self.rest().to_string(),
            })
        }
    }
}

#[cfg(feature = "serde")]
pub(crate) use self::json::TextVisitor;

#[cfg(feature = "serde")]
mod json {
    use super::CivilText;
    use std::fmt;
    use std::marker::PhantomData;

    /// Deserializes any [`CivilText`] from a string
    pub(crate) struct TextVisitor<T>(PhantomData<T>);

    impl<T> TextVisitor<T> {
        pub(crate) fn new() -> Self {
            Self(PhantomData)
        }
    }

    impl<'de, T: CivilText> serde::de::Visitor<'de> for TextVisitor<T> {
        type Value = T;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a {} string formatted as {:?}", T::TYPE_NAME, T::LAYOUT)
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<T, E> {
            T::from_text(v).map_err(E::custom)
        }
    }
}
