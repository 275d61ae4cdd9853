//! Kindred Domain Layer
//!
//! This crate contains the domain model for Kindred's relationship detection.
//! It has no external dependencies beyond `uuid` and defines the value types
//! and store trait that the engine, storage and CLI layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Member**: A person in one family, with a gender
//! - **Relationship**: A stored primary edge (father, mother, husband, wife)
//! - **FamilyStore**: The read interface supplying one family's members and edges
//! - **FamilySnapshot**: An in-memory `FamilyStore` for fixtures and JSON imports
//!
//! Generation position is never stored. It is always derived from the
//! relationship graph by the engine.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ids;
pub mod member;
pub mod relationship;
pub mod snapshot;
pub mod traits;

// Re-exports for convenience
pub use ids::{FamilyId, MemberId};
pub use member::{Gender, Member};
pub use relationship::{Relationship, RelationshipType};
pub use snapshot::FamilySnapshot;
pub use traits::FamilyStore;
