//! Appointment query results

use crate::domain::{Appointment, AppointmentKind};
use serde::Serialize;

/// A patient's appointments partitioned by classification
///
/// Every appointment lands in exactly one bucket. Appointments without a
/// usable date go to `unclassified`, which is omitted from output when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppointmentGroups<'a> {
    pub upcoming: Vec<&'a Appointment>,
    pub recent: Vec<&'a Appointment>,
    pub past: Vec<&'a Appointment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unclassified: Vec<&'a Appointment>,
}

impl<'a> AppointmentGroups<'a> {
    /// Adds an appointment to the bucket for `kind`
    pub(crate) fn push(&mut self, kind: Option<AppointmentKind>, appointment: &'a Appointment) {
        match kind {
            Some(AppointmentKind::Upcoming) => self.upcoming.push(appointment),
            Some(AppointmentKind::Recent) => self.recent.push(appointment),
            Some(AppointmentKind::Past) => self.past.push(appointment),
            None => self.unclassified.push(appointment),
        }
    }

    /// The bucket for a classification
    pub fn get(&self, kind: AppointmentKind) -> &[&'a Appointment] {
        match kind {
            AppointmentKind::Upcoming => &self.upcoming,
            AppointmentKind::Recent => &self.recent,
            AppointmentKind::Past => &self.past,
        }
    }

    /// Consumes the groups, keeping only the bucket for `kind`
    pub fn into_kind(self, kind: AppointmentKind) -> Vec<&'a Appointment> {
        match kind {
            AppointmentKind::Upcoming => self.upcoming,
            AppointmentKind::Recent => self.recent,
            AppointmentKind::Past => self.past,
        }
    }

    /// Total number of appointments across all buckets
    pub fn total(&self) -> usize {
        self.upcoming.len() + self.recent.len() + self.past.len() + self.unclassified.len()
    }
}

/// Result of an appointment query
#[derive(Debug, Clone, PartialEq)]
pub enum AppointmentSelection<'a> {
    /// No type requested: everything, grouped
    Grouped(AppointmentGroups<'a>),
    /// Only appointments of one classification
    Filtered {
        kind: AppointmentKind,
        appointments: Vec<&'a Appointment>,
    },
}

impl<'a> AppointmentSelection<'a> {
    /// Number of appointments in the selection
    pub fn len(&self) -> usize {
        match self {
            AppointmentSelection::Grouped(groups) => groups.total(),
            AppointmentSelection::Filtered { appointments, .. } => appointments.len(),
        }
    }

    /// Returns true if the selection holds no appointments
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The requested classification, if the selection is filtered
    pub fn kind(&self) -> Option<AppointmentKind> {
        match self {
            AppointmentSelection::Grouped(_) => None,
            AppointmentSelection::Filtered { kind, .. } => Some(*kind),
        }
    }
}
