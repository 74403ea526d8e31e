//! Civil-date helpers for campaign deadlines.
//!
//! Deadlines are stored as `YYYY-MM-DD` strings, so all we need is the
//! proleptic-Gregorian day count in both directions plus "today" from the
//! system clock. `web_time` gives us the same clock on wasm32 and native.

use web_time::{SystemTime, UNIX_EPOCH};

pub const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;

/// Milliseconds since the Unix epoch. Campaign ids are derived from this.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn from_unix_ms(ms: u64) -> Self {
        civil_from_days((ms / MS_PER_DAY) as i64)
    }

    pub fn today() -> Self {
        Self::from_unix_ms(now_ms())
    }

    /// Parses a `YYYY-MM-DD` string. Returns `None` for anything else,
    /// including dates that do not exist on the calendar; callers treat
    /// unparseable deadlines as "not passed".
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.trim().splitn(3, '-');
        let year: i32 = parts.next()?.parse().ok()?;
        let month: u32 = parts.next()?.parse().ok()?;
        let day: u32 = parts.next()?.parse().ok()?;
        if !(1..=12).contains(&month) || !(1..=days_in_month(year, month)).contains(&day) {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn add_days(self, days: i64) -> Self {
        civil_from_days(days_from_civil(self) + days)
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
    }
}

/// Days since 1970-01-01 for a civil date (Howard Hinnant's algorithm).
fn days_from_civil(d: CivilDate) -> i64 {
    let y = i64::from(d.year) - i64::from(d.month <= 2);
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let m = i64::from(d.month);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(d.day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(z: i64) -> CivilDate {
    let z = z + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    CivilDate {
        year: (y + i64::from(m <= 2)) as i32,
        month: m as u32,
        day: d as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_1970_01_01() {
        assert_eq!(CivilDate::from_unix_ms(0), CivilDate::new(1970, 1, 1));
        assert_eq!(days_from_civil(CivilDate::new(1970, 1, 1)), 0);
    }

    #[test]
    fn display_and_parse_round_trip() {
        let d = CivilDate::new(2025, 3, 9);
        assert_eq!(d.to_string(), "2025-03-09");
        assert_eq!(CivilDate::parse("2025-03-09"), Some(d));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(CivilDate::parse(""), None);
        assert_eq!(CivilDate::parse("not-a-date"), None);
        assert_eq!(CivilDate::parse("2025-13-01"), None);
        assert_eq!(CivilDate::parse("2025-00-10"), None);
    }

    #[test]
    fn parse_rejects_nonexistent_calendar_days() {
        assert_eq!(CivilDate::parse("2025-02-31"), None);
        assert_eq!(CivilDate::parse("2025-04-31"), None);
        assert_eq!(CivilDate::parse("2023-02-29"), None);
        assert_eq!(CivilDate::parse("1900-02-29"), None);
        // Real leap days still parse.
        assert_eq!(
            CivilDate::parse("2024-02-29"),
            Some(CivilDate::new(2024, 2, 29))
        );
        assert_eq!(
            CivilDate::parse("2000-02-29"),
            Some(CivilDate::new(2000, 2, 29))
        );
    }

    #[test]
    fn add_days_crosses_month_and_year_boundaries() {
        let d = CivilDate::new(2024, 12, 15);
        assert_eq!(d.add_days(30), CivilDate::new(2025, 1, 14));
        // 2024 is a leap year.
        assert_eq!(CivilDate::new(2024, 2, 28).add_days(1), CivilDate::new(2024, 2, 29));
        assert_eq!(CivilDate::new(2023, 2, 28).add_days(1), CivilDate::new(2023, 3, 1));
    }

    #[test]
    fn ordering_follows_the_calendar() {
        assert!(CivilDate::new(2025, 1, 2) > CivilDate::new(2024, 12, 31));
        assert!(CivilDate::new(2025, 1, 2) < CivilDate::new(2025, 1, 3));
    }
}
