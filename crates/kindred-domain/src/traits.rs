//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{FamilyId, Member, Relationship};

/// Trait for loading the members and relationships of one family
///
/// Implemented by the infrastructure layer (kindred-store) and by
/// [`FamilySnapshot`](crate::FamilySnapshot). Both calls must be scoped to
/// the given family: detection never works on the whole dataset.
pub trait FamilyStore {
    /// Error type for store operations
    type Error;

    /// Get all members of a family
    fn get_members(&self, family_id: FamilyId) -> Result<Vec<Member>, Self::Error>;

    /// Get all relationships recorded in a family
    fn get_relationships(&self, family_id: FamilyId) -> Result<Vec<Relationship>, Self::Error>;
}
