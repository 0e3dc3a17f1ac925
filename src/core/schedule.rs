//! Service window calculator
//!
//! Maps a wall-clock timestamp to whether the laundry counter is open. The
//! timestamp is evaluated in its own timezone, so callers pass
//! `Local::now()` (or a `DateTime<FixedOffset>` for the campus) rather than
//! UTC when they want local opening hours.

use chrono::{DateTime, Datelike, NaiveTime, TimeZone, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open time-of-day range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    /// Build a window from hour/minute pairs
    ///
    /// Returns `None` for out-of-range components.
    pub fn from_hm(start: (u32, u32), end: (u32, u32)) -> Option<Self> {
        Some(Self {
            start: NaiveTime::from_hms_opt(start.0, start.1, 0)?,
            end: NaiveTime::from_hms_opt(end.0, end.1, 0)?,
        })
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

/// Open or closed, as shown in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceLabel {
    Open,
    Closed,
}

impl ServiceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceLabel::Open => "Open",
            ServiceLabel::Closed => "Closed",
        }
    }
}

impl fmt::Display for ServiceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    pub is_open: bool,
    pub label: ServiceLabel,
}

impl ServiceStatus {
    pub fn from_open(is_open: bool) -> Self {
        Self {
            is_open,
            label: if is_open {
                ServiceLabel::Open
            } else {
                ServiceLabel::Closed
            },
        }
    }
}

impl From<ServiceLabel> for ServiceStatus {
    fn from(label: ServiceLabel) -> Self {
        Self::from_open(label == ServiceLabel::Open)
    }
}

/// Open days plus the time windows that apply on each of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSchedule {
    pub days: Vec<Weekday>,
    pub windows: Vec<TimeWindow>,
}

const MONDAY_TO_SATURDAY: [Weekday; 6] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

impl ServiceSchedule {
    /// Monday to Saturday, 08:30 until 18:00
    pub fn standard() -> Self {
        Self {
            days: MONDAY_TO_SATURDAY.to_vec(),
            windows: vec![TimeWindow {
                start: hm(8, 30),
                end: hm(18, 0),
            }],
        }
    }

    /// Monday to Saturday, 08:30–10:00 and 16:30–19:00
    pub fn split() -> Self {
        Self {
            days: MONDAY_TO_SATURDAY.to_vec(),
            windows: vec![
                TimeWindow {
                    start: hm(8, 30),
                    end: hm(10, 0),
                },
                TimeWindow {
                    start: hm(16, 30),
                    end: hm(19, 0),
                },
            ],
        }
    }

    /// Evaluate the schedule at `now`, in `now`'s own timezone
    pub fn status_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> ServiceStatus {
        let open_day = self.days.contains(&now.weekday());
        let time = now.time();
        let in_window = self.windows.iter().any(|window| window.contains(time));
        ServiceStatus::from_open(open_day && in_window)
    }

    /// A manual override from the service worker wins over the schedule
    pub fn resolve<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        manual: Option<ServiceLabel>,
    ) -> ServiceStatus {
        match manual {
            Some(label) => {
                tracing::info!(label = %label, "service status overridden");
                label.into()
            }
            None => self.status_at(now),
        }
    }
}

impl Default for ServiceSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Evaluate the standard schedule
pub fn compute_service_status<Tz: TimeZone>(now: &DateTime<Tz>) -> ServiceStatus {
    ServiceSchedule::standard().status_at(now)
}
