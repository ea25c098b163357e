//! Weekday, time-of-day and slot types.
//!
//! # Ordering
//! `TimeSlot` orders day-major, then by time ascending. `Weekday` orders
//! Monday first.
//!
//! # Labels
//! Availability tables arrive with loosely formatted labels: times like
//! `"8:30"` or `"08:30"`, days like `"Mon"`, `"monday"` or `"월"`.
//! `FromStr` accepts all of these; `Display` always writes the canonical
//! form (`"08:30"`, `"Mon"`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday.
    Mon,
    /// Tuesday.
    Tue,
    /// Wednesday.
    Wed,
    /// Thursday.
    Thu,
    /// Friday.
    Fri,
    /// Saturday.
    Sat,
    /// Sunday.
    Sun,
}

impl Weekday {
    /// Monday through Friday, in order.
    pub const WORK_WEEK: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Short English name.
    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    fn long_name(self) -> &'static str {
        match self {
            Weekday::Mon => "monday",
            Weekday::Tue => "tuesday",
            Weekday::Wed => "wednesday",
            Weekday::Thu => "thursday",
            Weekday::Fri => "friday",
            Weekday::Sat => "saturday",
            Weekday::Sun => "sunday",
        }
    }

    fn korean_label(self) -> &'static str {
        match self {
            Weekday::Mon => "월",
            Weekday::Tue => "화",
            Weekday::Wed => "수",
            Weekday::Thu => "목",
            Weekday::Fri => "금",
            Weekday::Sat => "토",
            Weekday::Sun => "일",
        }
    }

    fn all() -> [Weekday; 7] {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Weekday {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let lower = label.to_ascii_lowercase();
        Weekday::all()
            .into_iter()
            .find(|d| {
                lower == d.short_name().to_ascii_lowercase()
                    || lower == d.long_name()
                    || label == d.korean_label()
                    || label == format!("{}요일", d.korean_label())
            })
            .ok_or_else(|| GridError::InvalidDay(s.to_string()))
    }
}

/// A time of day at minute resolution.
///
/// Serialized as an `"HH:MM"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    const MINUTES_PER_DAY: u16 = 24 * 60;

    /// Creates a time from hour (0-23) and minute (0-59).
    ///
    /// Returns `None` if either component is out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self {
                minutes: u16::from(hour) * 60 + u16::from(minute),
            })
        } else {
            None
        }
    }

    /// Const constructor for known-valid literals.
    pub(crate) const fn at(hour: u16, minute: u16) -> Self {
        Self {
            minutes: hour * 60 + minute,
        }
    }

    /// Creates a time from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < Self::MINUTES_PER_DAY).then_some(Self { minutes })
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.minutes
    }

    /// Hour component.
    pub fn hour(self) -> u8 {
        (self.minutes / 60) as u8
    }

    /// Minute component.
    pub fn minute(self) -> u8 {
        (self.minutes % 60) as u8
    }

    /// This time shifted forward, or `None` past midnight.
    pub fn plus_minutes(self, minutes: u16) -> Option<Self> {
        self.minutes
            .checked_add(minutes)
            .and_then(Self::from_minutes)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidTime(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if h.is_empty() || h.len() > 2 || m.len() != 2 || !digits(h) || !digits(m) {
            return Err(invalid());
        }
        let hour: u8 = h.parse().map_err(|_| invalid())?;
        let minute: u8 = m.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// A single (day, time) unit of the weekly grid.
///
/// Field order gives the derived `Ord` its day-major ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day of the week.
    pub day: Weekday,
    /// Start time of the slot.
    pub time: TimeOfDay,
}

impl TimeSlot {
    /// Creates a slot.
    pub fn new(day: Weekday, time: TimeOfDay) -> Self {
        Self { day, time }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_time_parse_and_display() {
        assert_eq!(t("8:30").to_string(), "08:30");
        assert_eq!(t("08:30"), t("8:30"));
        assert_eq!(t(" 17:30 ").minutes(), 17 * 60 + 30);
        assert_eq!(t("12:00").hour(), 12);
        assert_eq!(t("12:30").minute(), 30);
    }

    #[test]
    fn test_time_parse_rejects_garbage() {
        for bad in [
            "", "830", "24:00", "8:60", "8:5", "a:30", "123:00", "8:300", "+8:30", "8:+3", "-1:30",
        ] {
            assert!(
                matches!(bad.parse::<TimeOfDay>(), Err(GridError::InvalidTime(_))),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn test_time_arithmetic() {
        assert_eq!(t("08:30").plus_minutes(30), Some(t("09:00")));
        assert_eq!(t("23:30").plus_minutes(30), None);
        assert_eq!(TimeOfDay::new(24, 0), None);
        assert_eq!(TimeOfDay::from_minutes(24 * 60), None);
    }

    #[test]
    fn test_weekday_labels() {
        assert_eq!("Mon".parse::<Weekday>().unwrap(), Weekday::Mon);
        assert_eq!("FRIDAY".parse::<Weekday>().unwrap(), Weekday::Fri);
        assert_eq!("월".parse::<Weekday>().unwrap(), Weekday::Mon);
        assert_eq!("수요일".parse::<Weekday>().unwrap(), Weekday::Wed);
        assert_eq!("금".parse::<Weekday>().unwrap(), Weekday::Fri);
        assert!(matches!(
            "Funday".parse::<Weekday>(),
            Err(GridError::InvalidDay(_))
        ));
        assert_eq!(Weekday::Thu.to_string(), "Thu");
    }

    #[test]
    fn test_slot_ordering_is_day_major() {
        let mon_late = TimeSlot::new(Weekday::Mon, t("17:30"));
        let tue_early = TimeSlot::new(Weekday::Tue, t("08:30"));
        let mon_early = TimeSlot::new(Weekday::Mon, t("08:30"));
        let mut slots = vec![tue_early, mon_late, mon_early];
        slots.sort();
        assert_eq!(slots, vec![mon_early, mon_late, tue_early]);
    }

    #[test]
    fn test_time_serde_as_string() {
        let json = serde_json::to_string(&t("9:00")).unwrap();
        assert_eq!(json, "\"09:00\"");
        let back: TimeOfDay = serde_json::from_str("\"12:30\"").unwrap();
        assert_eq!(back, t("12:30"));
        assert!(serde_json::from_str::<TimeOfDay>("\"25:00\"").is_err());
    }
}
