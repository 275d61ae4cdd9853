//! Relationship detection service

use kindred_domain::{FamilyId, FamilyStore, Member, MemberId, Relationship};
use serde::{Serialize, Serializer};

use crate::config::DetectionConfig;
use crate::error::DetectionError;
use crate::graph::{PathResult, RelationshipGraph};
use crate::rules::{Kinship, RelationshipRuleEngine};

/// A validated detection request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionRequest {
    /// Family both members are looked up in
    pub family_id: FamilyId,

    /// First member
    pub member_a: MemberId,

    /// Second member
    pub member_b: MemberId,
}

impl DetectionRequest {
    /// Create a request, rejecting nil identifiers
    pub fn new(
        family_id: FamilyId,
        member_a: MemberId,
        member_b: MemberId,
    ) -> Result<Self, DetectionError> {
        if family_id.is_nil() {
            return Err(DetectionError::InvalidInput("family id is required".to_string()));
        }
        if member_a.is_nil() || member_b.is_nil() {
            return Err(DetectionError::InvalidInput("both member ids are required".to_string()));
        }
        Ok(Self {
            family_id,
            member_a,
            member_b,
        })
    }
}

/// Result of one detection
///
/// `from_a_to_b` names A as seen from B ("A is B's ..."); `path` and `edges`
/// come from the A-to-B search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipDetection {
    /// What A is to B
    #[serde(rename = "fromAToB")]
    pub from_a_to_b: String,

    /// What B is to A
    #[serde(rename = "fromBToA")]
    pub from_b_to_a: String,

    /// Member ids of the A-to-B path
    #[serde(serialize_with = "serialize_ids")]
    pub path: Vec<MemberId>,

    /// Edge kinds of the A-to-B path
    pub edges: Vec<String>,
}

fn serialize_ids<S: Serializer>(ids: &[MemberId], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(ids.iter().map(|id| id.to_string()))
}

/// Orchestrates loading, graph construction, both searches and naming
///
/// Holds no per-request state: every call builds its own graph from the
/// family-scoped snapshot, so concurrent calls never share mutable data.
///
/// # Examples
///
/// ```
/// use kindred_domain::{
///     FamilyId, FamilySnapshot, Gender, Member, MemberId, Relationship, RelationshipType,
/// };
/// use kindred_engine::{DetectionConfig, DetectionRequest, RelationshipDetectionService};
///
/// let family = FamilyId::from_value(1);
/// let (p, c) = (MemberId::from_value(10), MemberId::from_value(11));
/// let store = FamilySnapshot::new(
///     vec![
///         Member::new(p, family, "Binh", Gender::Male),
///         Member::new(c, family, "Chi", Gender::Female),
///     ],
///     vec![Relationship::new(p, c, RelationshipType::Father, family)],
/// );
///
/// let service = RelationshipDetectionService::new(store, &DetectionConfig::default());
/// let result = service.detect(&DetectionRequest::new(family, p, c).unwrap()).unwrap();
/// assert_eq!(result.from_a_to_b, "father");
/// assert_eq!(result.from_b_to_a, "daughter");
/// ```
pub struct RelationshipDetectionService<S> {
    store: S,
    engine: RelationshipRuleEngine,
}

impl<S: FamilyStore> RelationshipDetectionService<S>
where
    S::Error: std::fmt::Display,
{
    /// Create a service over a store
    pub fn new(store: S, config: &DetectionConfig) -> Self {
        Self::with_engine(store, RelationshipRuleEngine::new(config))
    }

    /// Create a service with a prepared rule engine
    pub fn with_engine(store: S, engine: RelationshipRuleEngine) -> Self {
        Self { store, engine }
    }

    /// Load one family's members and relationships
    pub fn load_family(
        &self,
        family_id: FamilyId,
    ) -> Result<(Vec<Member>, Vec<Relationship>), DetectionError> {
        let members = self
            .store
            .get_members(family_id)
            .map_err(|e| DetectionError::Store(e.to_string()))?;
        let relationships = self
            .store
            .get_relationships(family_id)
            .map_err(|e| DetectionError::Store(e.to_string()))?;

        Ok((members, relationships))
    }

    /// Detect the relationship between two members in both directions
    ///
    /// # Errors
    /// Only store failures are errors; absent members and disconnected
    /// graphs produce "unknown" labels with an empty path.
    pub fn detect(
        &self,
        request: &DetectionRequest,
    ) -> Result<RelationshipDetection, DetectionError> {
        let (members, relationships) = self.load_family(request.family_id)?;
        Ok(self.detect_in(request, &members, &relationships))
    }

    /// Detect over a family that was already loaded with [`load_family`](Self::load_family)
    pub fn detect_in(
        &self,
        request: &DetectionRequest,
        members: &[Member],
        relationships: &[Relationship],
    ) -> RelationshipDetection {
        let graph = RelationshipGraph::build(members, relationships);

        // Two independent searches: tie-breaking may pick different routes
        let a_to_b = graph.find_shortest_path(request.member_a, request.member_b);
        let b_to_a = graph.find_shortest_path(request.member_b, request.member_a);

        let from_a_to_b = self.name(&a_to_b, &graph);
        let from_b_to_a = self.name(&b_to_a, &graph);

        tracing::debug!(
            family = %request.family_id,
            a = %request.member_a,
            b = %request.member_b,
            path_len = a_to_b.len(),
            from_a_to_b = %from_a_to_b,
            from_b_to_a = %from_b_to_a,
            "Detected relationship"
        );

        RelationshipDetection {
            from_a_to_b,
            from_b_to_a,
            edges: a_to_b.edge_names(),
            path: a_to_b.nodes,
        }
    }

    fn name(&self, path: &PathResult, graph: &RelationshipGraph) -> String {
        let kinship = self.engine.classify(path, graph);
        let label = self.engine.label(&kinship);

        if !path.is_empty() && (kinship == Kinship::Unknown || label == crate::UNKNOWN_LABEL) {
            tracing::warn!(
                edges = ?path.edge_names(),
                kinship = ?kinship,
                locale = self.engine.terms().locale().as_str(),
                "No kinship rule matches path"
            );
        }

        label
    }
}
