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

//! Errors produced when encoding, decoding or scanning civil values.

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while moving a civil value
/// across a text or storage boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The year cannot be written with four digits
    #[error("{type_name}: year '{year}' outside of range [0,9999]")]
    YearOutOfRange {
        /// The type being encoded
        type_name: &'static str,
        /// The offending year
        year: i32,
    },

    /// A text value was rejected by the strict parser
    #[error("{type_name}: parsing {literal:?} as {layout:?}: {cause}")]
    Parse {
        /// The type being decoded
        type_name: &'static str,
        /// The rejected text
        literal: String,
        /// The layout the text was expected to follow
        layout: &'static str,
        /// Why it was rejected
        cause: ParseCause,
    },

    /// A storage driver handed back something that is neither text nor an instant
    #[error("{type_name}: cannot scan {input} into {type_name}")]
    UnsupportedScan {
        /// The type being populated
        type_name: &'static str,
        /// The kind of input that was received
        input: &'static str,
    },

    /// Calendar arithmetic left the representable range
    #[error("{type_name}: result of calendar arithmetic is out of range")]
    Overflow {
        /// The type the arithmetic was performed on
        type_name: &'static str,
    },
}

impl Error {
    /// Creates a [`Error::Parse`]
    pub(crate) fn parse<S: Into<String>>(
        type_name: &'static str,
        literal: S,
        layout: &'static str,
        cause: ParseCause,
    ) -> Self {
        Self::Parse {
            type_name,
            literal: literal.into(),
            layout,
            cause,
        }
    }
}

/// The reason behind an [`Error::Parse`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCause {
    /// The text does not have the shape of the layout
    #[error("cannot parse {rest:?} as {element:?}")]
    Layout {
        /// What was left of the text when the mismatch was found
        rest: String,
        /// The layout element that was expected
        element: &'static str,
    },

    /// The text matched the layout but kept going
    #[error("extra text: {rest:?}")]
    ExtraText {
        /// The trailing text
        rest: String,
    },

    /// More than nine fractional digits
    #[error("fractional second has {digits} digits, at most 9 are allowed")]
    FractionTooLong {
        /// Number of digits found
        digits: usize,
    },

    /// Seconds are counted from 0 to 59; there are no leap seconds
    #[error("second out of range")]
    LeapSecond,

    /// No `T` between the date and the time
    #[error("missing 'T' separator between date and time")]
    MissingSeparator,

    /// The fields are well formed but do not name a calendar day or clock reading
    #[error("{0}")]
    Chrono(#[from] chrono::ParseError),
}
