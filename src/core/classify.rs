//! Temporal classification of appointments
//!
//! An appointment is `upcoming` if it lies strictly after "now", `recent` if
//! it lies at most [`RecencyWindow`] before "now", and `past` otherwise.
//! Day-precision dates are compared against today's UTC calendar day, so an
//! appointment dated today is still upcoming.

use crate::domain::{Appointment, AppointmentDate, AppointmentKind};
use chrono::{DateTime, Duration, Utc};

/// Boundary between `recent` and `past`, in whole days (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecencyWindow {
    days: u32,
}

impl RecencyWindow {
    /// Window used when none is configured
    pub const DEFAULT_DAYS: u32 = 30;

    /// Creates a window spanning `days` days
    pub fn days(days: u32) -> Self {
        Self { days }
    }

    /// Window length in days
    pub fn as_days(&self) -> u32 {
        self.days
    }

    /// Window length as a duration
    pub fn duration(&self) -> Duration {
        Duration::days(i64::from(self.days))
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self::days(Self::DEFAULT_DAYS)
    }
}

/// Classifies a date relative to `now`
pub fn classify_date(
    date: AppointmentDate,
    now: DateTime<Utc>,
    window: RecencyWindow,
) -> AppointmentKind {
    match date {
        AppointmentDate::At(instant) => {
            if instant > now {
                AppointmentKind::Upcoming
            } else if now - instant <= window.duration() {
                AppointmentKind::Recent
            } else {
                AppointmentKind::Past
            }
        }
        AppointmentDate::Day(day) => {
            let today = now.date_naive();
            if day >= today {
                AppointmentKind::Upcoming
            } else if (today - day).num_days() <= i64::from(window.as_days()) {
                AppointmentKind::Recent
            } else {
                AppointmentKind::Past
            }
        }
    }
}

/// Classifies an appointment, or `None` if it has no usable date
pub fn classify(
    appointment: &Appointment,
    now: DateTime<Utc>,
    window: RecencyWindow,
) -> Option<AppointmentKind> {
    appointment
        .scheduled()
        .map(|date| classify_date(date, now, window))
}
