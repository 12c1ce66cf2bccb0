//! Name search criteria

use crate::domain::Patient;

/// Case-insensitive substring criteria on first and last name
///
/// Blank criteria are treated as absent. A patient matches when every
/// supplied criterion matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameQuery {
    first_name: Option<String>,
    last_name: Option<String>,
}

impl NameQuery {
    /// Builds a query, normalizing both criteria to lowercase
    pub fn new(first_name: Option<&str>, last_name: Option<&str>) -> Self {
        Self {
            first_name: normalize(first_name),
            last_name: normalize(last_name),
        }
    }

    /// Returns true if no criterion is supplied
    pub fn is_unrestricted(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }

    /// Returns true if `patient` satisfies every supplied criterion
    pub fn matches(&self, patient: &Patient) -> bool {
        contains(self.first_name.as_deref(), patient.first_name())
            && contains(self.last_name.as_deref(), patient.last_name())
    }
}

fn normalize(criterion: Option<&str>) -> Option<String> {
    criterion
        .filter(|c| !c.trim().is_empty())
        .map(str::to_lowercase)
}

fn contains(needle: Option<&str>, haystack: &str) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(needle),
        None => true,
    }
}
