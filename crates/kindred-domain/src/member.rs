//! Member module - a person recorded in one family

use crate::{FamilyId, MemberId};

/// Gender of a member
///
/// Most kinship terms are gender-specific. `Unknown` selects the neutral
/// term where a locale has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    /// Male
    Male,

    /// Female
    Female,

    /// Not recorded
    #[default]
    Unknown,
}

impl Gender {
    /// Get the gender name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unknown => "unknown",
        }
    }

    /// Parse a gender from a string
    ///
    /// Accepts the full names and the single-letter forms `m` / `f`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            "unknown" | "" => Some(Gender::Unknown),
            _ => None,
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid gender: {}", s))
    }
}

/// A member of a family
///
/// Members carry no generation or lineage data; both are derived per request
/// from the relationship edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,

    /// Family this member belongs to
    pub family_id: FamilyId,

    /// Display name
    pub name: String,

    /// Gender
    pub gender: Gender,
}

impl Member {
    /// Create a new member
    pub fn new(id: MemberId, family_id: FamilyId, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id,
            family_id,
            name: name.into(),
            gender,
        }
    }
}
