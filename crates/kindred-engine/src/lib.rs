//! Kindred Engine
//!
//! Relationship detection for family trees: given two members of a family
//! and the stored primary edges, name the derived kinship in both
//! directions, even where no direct edge exists.
//!
//! The engine provides:
//! - [`RelationshipGraph`]: symmetric adjacency built per request, with a
//!   deterministic shortest-path search
//! - [`RelationshipRuleEngine`]: reduces a path to a [`Kinship`] shape and
//!   names it through a locale term table
//! - [`RelationshipDetectionService`]: loads one family from a
//!   [`FamilyStore`](kindred_domain::FamilyStore) and runs both directional searches
//!
//! # Examples
//!
//! ```
//! use kindred_domain::{
//!     FamilyId, FamilySnapshot, Gender, Member, MemberId, Relationship, RelationshipType,
//! };
//! use kindred_engine::{DetectionConfig, DetectionRequest, Locale, RelationshipDetectionService};
//!
//! let family = FamilyId::from_value(7);
//! let grandpa = MemberId::from_value(1);
//! let dad = MemberId::from_value(2);
//! let kid = MemberId::from_value(3);
//! let store = FamilySnapshot::new(
//!     vec![
//!         Member::new(grandpa, family, "Ong", Gender::Male),
//!         Member::new(dad, family, "Bo", Gender::Male),
//!         Member::new(kid, family, "Be", Gender::Female),
//!     ],
//!     vec![
//!         Relationship::new(grandpa, dad, RelationshipType::Father, family),
//!         Relationship::new(dad, kid, RelationshipType::Father, family),
//!     ],
//! );
//!
//! let config = DetectionConfig::default().with_locale(Locale::Vietnamese);
//! let service = RelationshipDetectionService::new(store, &config);
//! let result = service.detect(&DetectionRequest::new(family, grandpa, kid).unwrap()).unwrap();
//! assert_eq!(result.from_a_to_b, "ông nội");
//! assert_eq!(result.from_b_to_a, "cháu nội");
//! ```

#![warn(missing_docs)]

mod config;
mod detection;
mod error;
mod graph;
mod rules;
pub mod terms;

pub use config::{DetectionConfig, Locale};
pub use detection::{DetectionRequest, RelationshipDetection, RelationshipDetectionService};
pub use error::DetectionError;
pub use graph::{EdgeKind, PathEdge, PathResult, RelationshipGraph};
pub use rules::{
    Affinity, BloodShape, Kinship, Lineage, MemberLookup, RelationshipRuleEngine, Seniority,
    UNKNOWN_LABEL,
};
pub use terms::{EnglishTerms, KinshipTerms, VietnameseTerms};
