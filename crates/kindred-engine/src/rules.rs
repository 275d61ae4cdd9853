//! Kinship classification rules
//!
//! The engine reduces a path to a small shape (generations up and down,
//! lineage side, branch seniority, in-law position, gender) and names that
//! shape through a locale term table. It never matches individual path
//! literals, so the rule set can be enumerated and tested as data.

use kindred_domain::{Gender, MemberId};
use std::collections::HashMap;

use crate::config::DetectionConfig;
use crate::graph::{EdgeKind, PathEdge, PathResult};
use crate::terms::{self, KinshipTerms};

/// Label used whenever no term applies
pub const UNKNOWN_LABEL: &str = "unknown";

/// Read access to member genders during classification
pub trait MemberLookup {
    /// Gender of a member, `Unknown` when absent
    fn gender_of(&self, id: MemberId) -> Gender;
}

impl MemberLookup for HashMap<MemberId, Gender> {
    fn gender_of(&self, id: MemberId) -> Gender {
        self.get(&id).copied().unwrap_or_default()
    }
}

/// Which parent's side a lineage runs through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lineage {
    /// Through a father (or a son, for descendants)
    Paternal,

    /// Through a mother (or a daughter, for descendants)
    Maternal,

    /// Not determinable from the path
    Unspecified,
}

/// Birth seniority of the named member's branch at the shared ancestor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seniority {
    /// Named branch was born earlier
    Elder,

    /// Named branch was born later
    Younger,

    /// Orders missing or equal
    Unspecified,
}

impl Seniority {
    fn compare(named: u32, reference: u32) -> Self {
        if named == 0 || reference == 0 || named == reference {
            Seniority::Unspecified
        } else if named < reference {
            Seniority::Elder
        } else {
            Seniority::Younger
        }
    }
}

/// Shape of a pure parent/child chain between two members
///
/// `up` generations climbed from the reference member to the shared
/// ancestor, then `down` generations descended to the far end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BloodShape {
    /// Generations ascended from the reference
    pub up: u8,

    /// Generations descended to the far end
    pub down: u8,

    /// Side of the first ascending edge (or of the first child for pure descent)
    pub lineage: Lineage,

    /// Side of the reference's ancestor just below the shared ancestor
    ///
    /// Equals `lineage` for one or two generations up; for a great-uncle it
    /// tells which grandparent is the named member's sibling.
    pub branch: Lineage,

    /// Far end's branch compared with the reference's branch at the apex
    pub seniority: Seniority,

    /// Gender of the far end
    pub gender: Gender,
}

impl BloodShape {
    /// A shape with no lineage or seniority information
    pub fn new(up: u8, down: u8, gender: Gender) -> Self {
        Self {
            up,
            down,
            lineage: Lineage::Unspecified,
            branch: Lineage::Unspecified,
            seniority: Seniority::Unspecified,
            gender,
        }
    }

    /// Set both the lineage and the branch side
    pub fn with_lineage(mut self, lineage: Lineage) -> Self {
        self.lineage = lineage;
        self.branch = lineage;
        self
    }

    /// Set only the branch side
    pub fn with_branch(mut self, branch: Lineage) -> Self {
        self.branch = branch;
        self
    }

    /// Set the seniority
    pub fn with_seniority(mut self, seniority: Seniority) -> Self {
        self.seniority = seniority;
        self
    }

    /// Same shape with a different far-end gender
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }
}

/// Spousal edges wrapped around a blood core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Affinity {
    /// Leading spouse edge: the core starts at the reference's spouse of this gender
    pub through_spouse: Option<Gender>,

    /// Trailing spouse edge: the named member (of this gender) married the core's far end
    pub married_in: Option<Gender>,
}

/// Locale-independent classification of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kinship {
    /// No path, or a path outside the supported grammar
    Unknown,

    /// Zero-length path
    SelfMember,

    /// A single spouse edge; carries the named member's gender
    Spouse {
        /// Gender of the named spouse
        gender: Gender,
    },

    /// Parent/child edges only
    Blood(BloodShape),

    /// A blood core with at least one spouse edge at either end
    InLaw {
        /// Blood relation between the spouse-side endpoints
        core: BloodShape,
        /// Where the spouse edges sit
        affinity: Affinity,
    },
}

/// Stateless classifier turning paths into kinship labels
pub struct RelationshipRuleEngine {
    terms: Box<dyn KinshipTerms>,
    max_generation_span: u8,
}

impl RelationshipRuleEngine {
    /// Create an engine for the configured locale
    pub fn new(config: &DetectionConfig) -> Self {
        Self::with_terms(terms::for_locale(config.locale), config.max_generation_span)
    }

    /// Create an engine with a custom term table
    pub fn with_terms(terms: Box<dyn KinshipTerms>, max_generation_span: u8) -> Self {
        Self {
            terms,
            max_generation_span,
        }
    }

    /// The term table in use
    pub fn terms(&self) -> &dyn KinshipTerms {
        self.terms.as_ref()
    }

    /// Name what the path's first member is to its last member
    ///
    /// Never fails: unsupported shapes and missing terms give `"unknown"`.
    pub fn infer<L: MemberLookup + ?Sized>(&self, path: &PathResult, lookup: &L) -> String {
        self.label(&self.classify(path, lookup))
    }

    /// Name a classification
    pub fn label(&self, kinship: &Kinship) -> String {
        self.terms
            .term(kinship)
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
    }

    /// Reduce a path to its kinship shape
    ///
    /// The path runs from the named member to the reference member. It is
    /// read backwards, climbing from the reference, so "ascending" always
    /// means towards the reference's ancestors.
    pub fn classify<L: MemberLookup + ?Sized>(&self, path: &PathResult, lookup: &L) -> Kinship {
        if path.is_empty() || path.nodes.len() != path.edges.len() + 1 {
            return Kinship::Unknown;
        }
        if path.is_self() {
            return Kinship::SelfMember;
        }

        let walk = path.reversed();
        let steps = &walk.edges;
        let mut start = 0;
        let mut end = steps.len();

        let mut affinity = Affinity::default();
        if steps[0].kind.is_spouse() {
            if steps.len() == 1 {
                return Kinship::Spouse {
                    gender: spouse_gender(steps[0].kind),
                };
            }
            affinity.through_spouse = Some(spouse_gender(steps[0].kind));
            start = 1;
        }
        if end > start && steps[end - 1].kind.is_spouse() {
            affinity.married_in = Some(spouse_gender(steps[end - 1].kind));
            end -= 1;
        }

        let core = &steps[start..end];
        let Some(mut shape) = self.blood_shape(core) else {
            return Kinship::Unknown;
        };

        // Lineage of a pure descent follows the first child's gender
        if shape.up == 0 {
            let side = lineage_from_gender(lookup.gender_of(walk.nodes[start + 1]));
            shape = shape.with_lineage(side);
        }
        shape.gender = lookup.gender_of(walk.nodes[end]);

        if affinity == Affinity::default() {
            Kinship::Blood(shape)
        } else {
            Kinship::InLaw {
                core: shape,
                affinity,
            }
        }
    }

    /// Parse `up* down*`; anything else is unsupported
    fn blood_shape(&self, core: &[PathEdge]) -> Option<BloodShape> {
        if core.is_empty() {
            return None;
        }

        let up = core.iter().take_while(|e| e.kind.is_ascending()).count();
        let descent = &core[up..];
        if !descent.iter().all(|e| e.kind.is_descending()) {
            return None;
        }
        let down = descent.len();

        let span = usize::from(self.max_generation_span);
        if up > span || down > span {
            return None;
        }

        let mut shape = BloodShape::new(
            u8::try_from(up).ok()?,
            u8::try_from(down).ok()?,
            Gender::Unknown,
        );
        if up > 0 {
            shape = shape.with_lineage(lineage_from_edge(core[0].kind));
        }
        if up > 1 {
            shape = shape.with_branch(lineage_from_edge(core[up - 2].kind));
        }
        if up > 0 && down > 0 {
            shape = shape.with_seniority(Seniority::compare(core[up].order, core[up - 1].order));
        }

        Some(shape)
    }
}

impl Default for RelationshipRuleEngine {
    fn default() -> Self {
        Self::new(&DetectionConfig::default())
    }
}

fn spouse_gender(kind: EdgeKind) -> Gender {
    match kind {
        EdgeKind::Husband => Gender::Male,
        EdgeKind::Wife => Gender::Female,
        _ => Gender::Unknown,
    }
}

fn lineage_from_edge(kind: EdgeKind) -> Lineage {
    match kind {
        EdgeKind::Father => Lineage::Paternal,
        EdgeKind::Mother => Lineage::Maternal,
        _ => Lineage::Unspecified,
    }
}

fn lineage_from_gender(gender: Gender) -> Lineage {
    match gender {
        Gender::Male => Lineage::Paternal,
        Gender::Female => Lineage::Maternal,
        Gender::Unknown => Lineage::Unspecified,
    }
}
