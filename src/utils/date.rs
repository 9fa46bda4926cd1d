//! UTC datetime utilities without timezone dependencies.
//!
//! Provides a lightweight `DateTimeUtc` struct for date/time handling,
//! sized for what a release-note landing page needs: ordering raw release
//! dates, formatting them for display, and knowing which year it is.
//!
//! # Examples
//!
//! ```ignore
//! // Parse from ISO format
//! let dt = DateTimeUtc::parse("2021-06-01").unwrap();
//! let dt = DateTimeUtc::parse("2024-06-15T14:30:45Z").unwrap();
//!
//! // Format for display
//! assert_eq!(DateTimeUtc::from_ymd(2021, 6, 1).to_long_date(), "June 1, 2021");
//! ```

use std::time::SystemTime;

use anyhow::{Result, bail};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const SECS_PER_DAY: u64 = 86_400;

/// UTC datetime without timezone complexity
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Current time from the system clock.
    ///
    /// A clock set before 1970 reads as the epoch.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_unix_secs(secs)
    }

    /// Convert seconds since the Unix epoch to a calendar date.
    ///
    /// Uses the days-to-civil algorithm (proleptic Gregorian calendar).
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    #[allow(clippy::cast_sign_loss)] // All intermediate values are non-negative
    pub fn from_unix_secs(secs: u64) -> Self {
        let days = (secs / SECS_PER_DAY) as i64;
        let rem = secs % SECS_PER_DAY;

        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + i64::from(month <= 2);

        Self::new(
            year as u16,
            month as u8,
            day as u8,
            (rem / 3600) as u8,
            ((rem / 60) % 60) as u8,
            (rem % 60) as u8,
        )
    }

    /// Parse a raw release date: `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SSZ`.
    ///
    /// Anything else, including dates that do not exist, yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let (date, time) = match s.len() {
            10 => (s, "00:00:00"),
            20 => s.strip_suffix('Z')?.split_once('T')?,
            _ => return None,
        };

        let [year, month, day] = digit_fields(date, '-', [4, 2, 2])?;
        let [hour, minute, second] = digit_fields(time, ':', [2, 2, 2])?;
        let narrow = |n: u16| u8::try_from(n).ok();

        let dt = Self::new(
            year,
            narrow(month)?,
            narrow(day)?,
            narrow(hour)?,
            narrow(minute)?,
            narrow(second)?,
        );
        dt.validate().ok()?;
        Some(dt)
    }

    /// Check that every field names a real calendar instant.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            bail!("no month {} in {}", self.month, self.year);
        }
        let last_day = Self::days_in_month(self.year, self.month);
        if !(1..=last_day).contains(&self.day) {
            bail!("{} {} has no day {}", self.month_name(), self.year, self.day);
        }

        let clock = [
            ("hour", self.hour, 23),
            ("minute", self.minute, 59),
            ("second", self.second, 59),
        ];
        if let Some((unit, value, _)) = clock.into_iter().find(|&(_, value, max)| value > max) {
            bail!("{unit} out of range: {value}");
        }
        Ok(())
    }

    /// Gregorian leap year rule.
    const fn is_leap_year(year: u16) -> bool {
        year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
    }

    /// Days in `month` of `year`, zero for a month that does not exist.
    const fn days_in_month(year: u16, month: u8) -> u8 {
        const DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        match month {
            2 if Self::is_leap_year(year) => 29,
            1..=12 => DAYS[month as usize - 1],
            _ => 0,
        }
    }

    /// Full English month name.
    ///
    /// Only meaningful after [`validate`](Self::validate) succeeded.
    pub fn month_name(self) -> &'static str {
        MONTHS[usize::from(self.month.clamp(1, 12) - 1)]
    }

    /// Long display form, `MMMM D, YYYY` (e.g. `June 1, 2021`).
    pub fn to_long_date(self) -> String {
        format!("{} {}, {}", self.month_name(), self.day, self.year)
    }
}

/// Split `s` on `sep` into exactly `N` all-digit fields of the given widths.
fn digit_fields<const N: usize>(s: &str, sep: char, widths: [usize; N]) -> Option<[u16; N]> {
    let mut parts = s.split(sep);
    let mut fields = [0; N];
    for (field, width) in fields.iter_mut().zip(widths) {
        let part = parts.next()?;
        if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *field = part.parse().ok()?;
    }
    parts.next().is_none().then_some(fields)
}
