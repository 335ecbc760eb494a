//! Input struct for packing: a bundle of individually optional components.

use serde::{Deserialize, Serialize};

/// Date/time components to be packed
///
/// Every component is individually optional; absent components are encoded
/// as their empty sentinel (or omitted entirely, for sub-second units, via
/// the precision selector). Construct with [`Moment::new`] and the
/// builder-style setters, or fill the fields directly.
///
/// # Example
/// ```
/// use temporenc::{pack, Moment};
///
/// let bytes = pack(&Moment::new().date(1983, 1, 15)).unwrap();
/// assert_eq!(bytes, [0x8f, 0x7e, 0x0e]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moment {
    pub year: Option<u16>,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub second: Option<u8>,
    pub millisecond: Option<u16>,
    pub microsecond: Option<u32>,
    pub nanosecond: Option<u32>,
    /// UTC offset in minutes, a multiple of 15
    pub tz_offset: Option<i32>,
}

impl Moment {
    /// Create a moment with every component absent
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set year, month (1-12) and day (1-31)
    #[must_use]
    pub fn date(mut self, year: u16, month: u8, day: u8) -> Self {
        self.year = Some(year);
        self.month = Some(month);
        self.day = Some(day);
        self
    }

    /// Set hour, minute and second (0-60, leap second allowed)
    #[must_use]
    pub fn time(mut self, hour: u8, minute: u8, second: u8) -> Self {
        self.hour = Some(hour);
        self.minute = Some(minute);
        self.second = Some(second);
        self
    }

    #[must_use]
    pub fn year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    #[must_use]
    pub fn month(mut self, month: u8) -> Self {
        self.month = Some(month);
        self
    }

    #[must_use]
    pub fn day(mut self, day: u8) -> Self {
        self.day = Some(day);
        self
    }

    #[must_use]
    pub fn hour(mut self, hour: u8) -> Self {
        self.hour = Some(hour);
        self
    }

    #[must_use]
    pub fn minute(mut self, minute: u8) -> Self {
        self.minute = Some(minute);
        self
    }

    #[must_use]
    pub fn second(mut self, second: u8) -> Self {
        self.second = Some(second);
        self
    }

    #[must_use]
    pub fn millisecond(mut self, millisecond: u16) -> Self {
        self.millisecond = Some(millisecond);
        self
    }

    #[must_use]
    pub fn microsecond(mut self, microsecond: u32) -> Self {
        self.microsecond = Some(microsecond);
        self
    }

    #[must_use]
    pub fn nanosecond(mut self, nanosecond: u32) -> Self {
        self.nanosecond = Some(nanosecond);
        self
    }

    /// Set the UTC offset in minutes (must be a multiple of 15)
    #[must_use]
    pub fn tz_offset(mut self, minutes: i32) -> Self {
        self.tz_offset = Some(minutes);
        self
    }

    /// Any of year/month/day supplied
    pub(crate) fn has_date(&self) -> bool {
        self.year.is_some() || self.month.is_some() || self.day.is_some()
    }

    /// Any of hour/minute/second supplied
    pub(crate) fn has_time(&self) -> bool {
        self.hour.is_some() || self.minute.is_some() || self.second.is_some()
    }

    /// Any sub-second unit supplied
    pub(crate) fn has_subsecond(&self) -> bool {
        self.millisecond.is_some() || self.microsecond.is_some() || self.nanosecond.is_some()
    }
}
