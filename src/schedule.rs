use std::fmt;

use chrono::{DateTime, Datelike, Local, Timelike};
use serde::Serialize;

/// Period identifier: a numbered slot or the lunch-break sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodId {
    Numbered(u8),
    LunchBreak,
}

impl fmt::Display for PeriodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodId::Numbered(n) => write!(f, "{n}"),
            PeriodId::LunchBreak => write!(f, "昼休み"),
        }
    }
}

impl PeriodId {
    /// Header label: "3限" for numbered periods, the sentinel as-is.
    pub fn label(&self) -> String {
        match self {
            PeriodId::Numbered(n) => format!("{n}限"),
            PeriodId::LunchBreak => "昼休み".to_string(),
        }
    }
}

struct PeriodSlot {
    id: PeriodId,
    start: u32,
    end: u32,
}

const fn at(h: u32, m: u32) -> u32 {
    h * 3600 + m * 60
}

/// Daily schedule, identical every weekday. Entries are non-overlapping
/// and sorted by start time.
const PERIOD_TIMES: &[PeriodSlot] = &[
    PeriodSlot { id: PeriodId::Numbered(1), start: at(9, 0), end: at(10, 30) },
    PeriodSlot { id: PeriodId::Numbered(2), start: at(10, 45), end: at(12, 15) },
    PeriodSlot { id: PeriodId::LunchBreak, start: at(12, 15), end: at(13, 5) },
    PeriodSlot { id: PeriodId::Numbered(3), start: at(13, 5), end: at(14, 35) },
    PeriodSlot { id: PeriodId::Numbered(4), start: at(14, 50), end: at(16, 20) },
    PeriodSlot { id: PeriodId::Numbered(5), start: at(16, 35), end: at(18, 5) },
    PeriodSlot { id: PeriodId::Numbered(6), start: at(18, 20), end: at(19, 50) },
];

/// Single-character weekday labels, indexed Sunday = 0.
pub const WEEKDAYS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPeriod {
    pub id: PeriodId,
    pub is_current: bool,
}

/// Maps seconds-since-midnight to the period containing that instant
/// (intervals are half-open `[start, end)`), else the next period to
/// start, else the day's last period once everything is over.
pub fn resolve_period(seconds: u32) -> ResolvedPeriod {
    let mut next: Option<&PeriodSlot> = None;

    for slot in PERIOD_TIMES {
        if seconds >= slot.start && seconds < slot.end {
            return ResolvedPeriod { id: slot.id, is_current: true };
        }
        if seconds < slot.start && next.is_none_or(|n| slot.start < n.start) {
            next = Some(slot);
        }
    }

    // All periods finished: fall back to the final slot, marked not
    // current. There is deliberately no "no class today" state.
    let slot = next.unwrap_or(&PERIOD_TIMES[PERIOD_TIMES.len() - 1]);
    ResolvedPeriod { id: slot.id, is_current: false }
}

/// Weekday + period for an instant, as shown in the client header
/// ("水曜 3限").
#[derive(Debug, Clone, Serialize)]
pub struct CurrentPeriod {
    pub day: String,
    #[serde(rename = "periodId")]
    pub period_id: String,
    #[serde(rename = "isCurrent")]
    pub is_current: bool,
    pub label: String,
}

pub fn current_period(now: DateTime<Local>) -> CurrentPeriod {
    let day = WEEKDAYS[now.weekday().num_days_from_sunday() as usize];
    let resolved = resolve_period(now.time().num_seconds_from_midnight());

    CurrentPeriod {
        day: day.to_string(),
        period_id: resolved.id.to_string(),
        is_current: resolved.is_current,
        label: format!("{}曜 {}", day, resolved.id.label()),
    }
}
