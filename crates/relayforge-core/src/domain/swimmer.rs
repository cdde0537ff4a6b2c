//! Swimmer identity.

use std::fmt;

/// Identity of a swimmer: name plus team.
///
/// Result sheets carry no registry ID, so two entries are the same swimmer
/// exactly when both name and team match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwimmerId {
    name: String,
    team: String,
}

impl SwimmerId {
    /// Creates an identity, trimming surrounding whitespace from both parts.
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        let name = name.into();
        let team = team.into();
        Self {
            name: name.trim().to_string(),
            team: team.trim().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team(&self) -> &str {
        &self.team
    }
}

impl fmt::Display for SwimmerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.team.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{} ({})", self.name, self.team)
        }
    }
}
