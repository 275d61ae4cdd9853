//! Relationship module - the primary edges stored for a family
//!
//! Only primary edges are stored (parent-child and spousal). Every other
//! kinship relation is derived from them by the engine.

use crate::{FamilyId, MemberId};

/// Type of a stored relationship
///
/// Read as "source is target's <type>": `Father` with source P and target C
/// records that P is C's father.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipType {
    /// Source is the target's father
    Father,

    /// Source is the target's mother
    Mother,

    /// Source is the target's husband
    Husband,

    /// Source is the target's wife
    Wife,
}

impl RelationshipType {
    /// Get the relationship type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Father => "father",
            RelationshipType::Mother => "mother",
            RelationshipType::Husband => "husband",
            RelationshipType::Wife => "wife",
        }
    }

    /// Parse a relationship type from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "father" => Some(RelationshipType::Father),
            "mother" => Some(RelationshipType::Mother),
            "husband" => Some(RelationshipType::Husband),
            "wife" => Some(RelationshipType::Wife),
            _ => None,
        }
    }
}

impl std::str::FromStr for RelationshipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid relationship type: {}", s))
    }
}

/// A stored relationship edge between two members of one family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Source member
    pub source: MemberId,

    /// Target member
    pub target: MemberId,

    /// Type of relationship
    pub relationship_type: RelationshipType,

    /// Family the edge is recorded in
    pub family_id: FamilyId,

    /// Birth position of the target among the source's children
    ///
    /// Only meaningful for parent edges: 1 is the eldest, 0 means unrecorded.
    pub order: u32,
}

impl Relationship {
    /// Create a new relationship with no recorded order
    pub fn new(
        source: MemberId,
        target: MemberId,
        relationship_type: RelationshipType,
        family_id: FamilyId,
    ) -> Self {
        Self {
            source,
            target,
            relationship_type,
            family_id,
            order: 0,
        }
    }

    /// Set the birth order of the target
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }
}
