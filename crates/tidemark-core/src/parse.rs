// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Construction of calendar intervals from strings.
//!
//! The format language is the strftime specifier set accepted by
//! [`chrono::NaiveDateTime::parse_from_str`]. Failures are classified into
//! a small taxonomy so that callers can tell a format that does not match
//! the text apart from text that carries an unconsumed suffix, without
//! inspecting error messages.

use crate::interval::{InvalidIntervalError, TimeInterval};
use chrono::{NaiveDateTime, format::ParseErrorKind};

/// The error type for building a [`TimeInterval`] from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FromStringsError {
    /// The format string does not match the text.
    FormatMismatch(chrono::ParseError),
    /// The text has an unconsumed suffix after the format is satisfied.
    TrailingData(chrono::ParseError),
    /// Any other parse failure (e.g. an out-of-range field value).
    Parse(chrono::ParseError),
    /// The parsed endpoints violate `start <= end`.
    InvalidInterval(InvalidIntervalError<NaiveDateTime>),
}

impl std::fmt::Display for FromStringsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FormatMismatch(e) => write!(f, "Time format does not match input: {e}"),
            Self::TrailingData(e) => write!(f, "Unconverted data remains in input: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::InvalidInterval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for FromStringsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FormatMismatch(e) | Self::TrailingData(e) | Self::Parse(e) => Some(e),
            Self::InvalidInterval(e) => Some(e),
        }
    }
}

impl From<InvalidIntervalError<NaiveDateTime>> for FromStringsError {
    fn from(e: InvalidIntervalError<NaiveDateTime>) -> Self {
        Self::InvalidInterval(e)
    }
}

/// Classifies a chrono parse failure into the taxonomy above.
fn classify(e: chrono::ParseError) -> FromStringsError {
    match e.kind() {
        ParseErrorKind::TooLong => FromStringsError::TrailingData(e),
        ParseErrorKind::Invalid
        | ParseErrorKind::BadFormat
        | ParseErrorKind::NotEnough
        | ParseErrorKind::TooShort => FromStringsError::FormatMismatch(e),
        _ => FromStringsError::Parse(e),
    }
}

impl TimeInterval<NaiveDateTime> {
    /// Creates a time interval by parsing strings.
    ///
    /// Both endpoints are parsed with the same strftime-style
    /// `time_format` (see the 1989 C standard; the string is handed
    /// directly to [`NaiveDateTime::parse_from_str`]).
    ///
    /// # Errors
    ///
    /// Returns [`FromStringsError::FormatMismatch`] when the format does
    /// not match one of the inputs, [`FromStringsError::TrailingData`]
    /// when an input carries text past the end of the format, and
    /// [`FromStringsError::InvalidInterval`] when the parsed end precedes
    /// the parsed start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tidemark_core::interval::TimeInterval;
    ///
    /// let iv = TimeInterval::from_strings(
    ///     "2025-03-01 08:00:00",
    ///     "2025-03-01 09:30:00",
    ///     "%Y-%m-%d %H:%M:%S",
    /// )
    /// .unwrap();
    /// assert_eq!(iv.elapsed(), chrono::TimeDelta::minutes(90));
    /// ```
    pub fn from_strings(
        start_str: &str,
        end_str: &str,
        time_format: &str,
    ) -> Result<Self, FromStringsError> {
        let start = NaiveDateTime::parse_from_str(start_str, time_format).map_err(classify)?;
        let end = NaiveDateTime::parse_from_str(end_str, time_format).map_err(classify)?;
        Ok(Self::new(start, end)?)
    }
}
