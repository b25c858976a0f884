//! Calendar date utilities.

use std::str::FromStr;

use derive_more::{Display, Error, From, Into};
use time::{
    format_description::{well_known::Rfc3339, BorrowedFormatItem},
    macros::format_description,
    OffsetDateTime,
};

/// Format of a plain [ISO 8601] calendar date (`YYYY-MM-DD`).
///
/// [ISO 8601]: https://wikipedia.org/wiki/ISO_8601
const ISO_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Calendar date without a time component.
#[derive(
    Clone, Copy, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq,
    PartialOrd,
)]
pub struct Date(time::Date);

impl Date {
    /// Parses a [`Date`] from the provided string.
    ///
    /// Accepts both a plain `YYYY-MM-DD` calendar date and a full
    /// [RFC 3339] date and time (only the date part is kept).
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the string is neither of the two.
    ///
    /// [RFC 3339]: https://tools.ietf.org/html/rfc3339
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        time::Date::parse(input, ISO_DATE)
            .or_else(|e| {
                OffsetDateTime::parse(input, &Rfc3339)
                    .map(OffsetDateTime::date)
                    .map_err(|_| e)
            })
            .map(Self)
            .map_err(ParseError)
    }

    /// Creates a new [`Date`] from the provided calendar components.
    ///
    /// [`None`] is returned if the components don't form a valid date.
    #[must_use]
    pub fn from_calendar(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .map(Self)
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error of parsing a [`Date`] from a string.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("invalid calendar date: {_0}")]
pub struct ParseError(time::error::Parse);
