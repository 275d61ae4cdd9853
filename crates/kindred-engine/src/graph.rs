//! In-memory kinship graph for one family
//!
//! Built fresh for every detection from a family-scoped snapshot. Each stored
//! relationship inserts its own edge and the semantic inverse, so the
//! adjacency is symmetric and searches never care which direction was
//! persisted.

use kindred_domain::{Gender, Member, MemberId, Relationship, RelationshipType};
use std::collections::{HashMap, VecDeque};

use crate::rules::MemberLookup;

/// Type of a traversal edge: what the neighbour is to the current member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Neighbour is the current member's father
    Father,

    /// Neighbour is the current member's mother
    Mother,

    /// Neighbour is a child of the current member, who is its father
    ChildOfFather,

    /// Neighbour is a child of the current member, who is its mother
    ChildOfMother,

    /// Neighbour is the current member's husband
    Husband,

    /// Neighbour is the current member's wife
    Wife,
}

impl EdgeKind {
    /// Edge kind describing the source of a stored relationship, seen from its target
    pub fn from_relationship(relationship_type: RelationshipType) -> Self {
        match relationship_type {
            RelationshipType::Father => EdgeKind::Father,
            RelationshipType::Mother => EdgeKind::Mother,
            RelationshipType::Husband => EdgeKind::Husband,
            RelationshipType::Wife => EdgeKind::Wife,
        }
    }

    /// The same edge read from the other end
    pub fn inverse(self) -> Self {
        match self {
            EdgeKind::Father => EdgeKind::ChildOfFather,
            EdgeKind::Mother => EdgeKind::ChildOfMother,
            EdgeKind::ChildOfFather => EdgeKind::Father,
            EdgeKind::ChildOfMother => EdgeKind::Mother,
            EdgeKind::Husband => EdgeKind::Wife,
            EdgeKind::Wife => EdgeKind::Husband,
        }
    }

    /// Get the edge kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Father => "father",
            EdgeKind::Mother => "mother",
            EdgeKind::ChildOfFather => "child_of_father",
            EdgeKind::ChildOfMother => "child_of_mother",
            EdgeKind::Husband => "husband",
            EdgeKind::Wife => "wife",
        }
    }

    /// Moves one generation up
    pub fn is_ascending(&self) -> bool {
        matches!(self, EdgeKind::Father | EdgeKind::Mother)
    }

    /// Moves one generation down
    pub fn is_descending(&self) -> bool {
        matches!(self, EdgeKind::ChildOfFather | EdgeKind::ChildOfMother)
    }

    /// Spousal edge
    pub fn is_spouse(&self) -> bool {
        matches!(self, EdgeKind::Husband | EdgeKind::Wife)
    }

    /// Tie-break rank: parent/child edges before spouse edges, father's side first
    fn rank(&self) -> u8 {
        match self {
            EdgeKind::Father => 0,
            EdgeKind::Mother => 1,
            EdgeKind::ChildOfFather => 2,
            EdgeKind::ChildOfMother => 3,
            EdgeKind::Husband => 4,
            EdgeKind::Wife => 5,
        }
    }
}

/// One traversed edge of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEdge {
    /// What the next member is to the previous one
    pub kind: EdgeKind,

    /// Birth order carried by the stored relationship (0 when unrecorded)
    pub order: u32,
}

/// Result of one directional search
///
/// `nodes` has one more entry than `edges`; `edges[i]` leads from `nodes[i]`
/// to `nodes[i + 1]`. A self path has one node and no edges, an unreachable
/// target gives both vectors empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathResult {
    /// Members visited, from the search origin to the target
    pub nodes: Vec<MemberId>,

    /// Edges traversed between consecutive nodes
    pub edges: Vec<PathEdge>,
}

impl PathResult {
    /// No path
    pub fn empty() -> Self {
        Self::default()
    }

    /// Zero-length path from a member to itself
    pub fn trivial(id: MemberId) -> Self {
        Self {
            nodes: vec![id],
            edges: Vec::new(),
        }
    }

    /// Whether no path was found
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether this is the zero-length self path
    pub fn is_self(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// First member of the path
    pub fn start(&self) -> Option<MemberId> {
        self.nodes.first().copied()
    }

    /// Last member of the path
    pub fn end(&self) -> Option<MemberId> {
        self.nodes.last().copied()
    }

    /// The same walk taken backwards, with every edge read from its other end
    pub fn reversed(&self) -> Self {
        Self {
            nodes: self.nodes.iter().rev().copied().collect(),
            edges: self
                .edges
                .iter()
                .rev()
                .map(|e| PathEdge {
                    kind: e.kind.inverse(),
                    order: e.order,
                })
                .collect(),
        }
    }

    /// Edge kind names in traversal order
    pub fn edge_names(&self) -> Vec<String> {
        self.edges.iter().map(|e| e.kind.as_str().to_string()).collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct GraphEdge {
    to: usize,
    kind: EdgeKind,
    order: u32,
}

/// Symmetric adjacency structure over one family's members
#[derive(Debug, Clone, Default)]
pub struct RelationshipGraph {
    genders: HashMap<MemberId, Gender>,
    index: HashMap<MemberId, usize>,
    nodes: Vec<MemberId>,
    adjacency: Vec<Vec<GraphEdge>>,
    skipped: usize,
}

impl RelationshipGraph {
    /// Build the graph for one family
    ///
    /// Relationships referencing a member outside `members`, crossing family
    /// boundaries, or pointing a member at itself are skipped and counted.
    /// The result depends only on the input sets, not on the order they are
    /// supplied in.
    pub fn build(members: &[Member], relationships: &[Relationship]) -> Self {
        let mut graph = Self {
            genders: members.iter().map(|m| (m.id, m.gender)).collect(),
            ..Default::default()
        };
        let families: HashMap<MemberId, _> = members.iter().map(|m| (m.id, m.family_id)).collect();

        for rel in relationships {
            let linked = match (families.get(&rel.source), families.get(&rel.target)) {
                (Some(source_family), Some(target_family)) => {
                    *source_family == rel.family_id && *target_family == rel.family_id
                }
                _ => false,
            };
            if !linked || rel.source == rel.target {
                tracing::debug!(
                    source = %rel.source,
                    target = %rel.target,
                    relationship_type = rel.relationship_type.as_str(),
                    "Skipping relationship with unknown or invalid endpoints"
                );
                graph.skipped += 1;
                continue;
            }

            let source = graph.node(rel.source);
            let target = graph.node(rel.target);
            let kind = EdgeKind::from_relationship(rel.relationship_type);

            graph.adjacency[target].push(GraphEdge {
                to: source,
                kind,
                order: rel.order,
            });
            graph.adjacency[source].push(GraphEdge {
                to: target,
                kind: kind.inverse(),
                order: rel.order,
            });
        }

        // Fix neighbour order once so every search breaks ties the same way
        let nodes = &graph.nodes;
        for edges in &mut graph.adjacency {
            edges.sort_by_key(|e| {
                (e.kind.is_spouse(), e.order == 0, e.kind.rank(), e.order, nodes[e.to])
            });
        }

        tracing::debug!(
            members = graph.genders.len(),
            nodes = graph.nodes.len(),
            skipped = graph.skipped,
            "Built relationship graph"
        );

        graph
    }

    /// Replace the graph contents with a fresh build
    pub fn rebuild(&mut self, members: &[Member], relationships: &[Relationship]) {
        *self = Self::build(members, relationships);
    }

    fn node(&mut self, id: MemberId) -> usize {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(id);
        self.adjacency.push(Vec::new());
        self.index.insert(id, idx);
        idx
    }

    /// Number of members that take part in at least one relationship
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges (twice the accepted relationships)
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Number of relationships dropped during the build
    pub fn skipped_relationships(&self) -> usize {
        self.skipped
    }

    /// Whether a member is part of the graph
    pub fn contains(&self, id: MemberId) -> bool {
        self.index.contains_key(&id)
    }

    /// Shortest path from `from` to `to`
    ///
    /// Among paths of equal length the one with the fewest spouse edges wins;
    /// remaining ties follow the adjacency order: parent/child before spouse,
    /// edges with a recorded birth order before unrecorded ones, father before
    /// mother, then lower birth order first. A sibling path therefore goes
    /// through the parent whose edges carry the birth order. The search does
    /// not mutate the graph and runs in O(V + E).
    pub fn find_shortest_path(&self, from: MemberId, to: MemberId) -> PathResult {
        if from == to {
            return if self.genders.contains_key(&from) {
                PathResult::trivial(from)
            } else {
                PathResult::empty()
            };
        }

        let (Some(&source), Some(&target)) = (self.index.get(&from), self.index.get(&to)) else {
            return PathResult::empty();
        };

        // Distances to the target; adjacency is symmetric so a plain BFS from it works
        let mut dist = vec![usize::MAX; self.nodes.len()];
        let mut visit_order = Vec::new();
        let mut queue = VecDeque::new();
        dist[target] = 0;
        queue.push_back(target);

        while let Some(v) = queue.pop_front() {
            visit_order.push(v);
            if v == source {
                break;
            }
            for edge in &self.adjacency[v] {
                if dist[edge.to] == usize::MAX {
                    dist[edge.to] = dist[v] + 1;
                    queue.push_back(edge.to);
                }
            }
        }

        if dist[source] == usize::MAX {
            return PathResult::empty();
        }

        // Fewest spouse edges from each node to the target along shortest paths.
        // Nodes are visited by non-decreasing distance, so successors are settled first.
        let mut spouses = vec![usize::MAX; self.nodes.len()];
        spouses[target] = 0;
        for &v in visit_order.iter().skip(1) {
            spouses[v] = self.adjacency[v]
                .iter()
                .filter(|e| dist[e.to] != usize::MAX && dist[e.to] + 1 == dist[v])
                .filter(|e| spouses[e.to] != usize::MAX)
                .map(|e| spouses[e.to] + usize::from(e.kind.is_spouse()))
                .min()
                .unwrap_or(usize::MAX);
        }

        let mut path = PathResult::trivial(from);
        let mut current = source;
        while current != target {
            let step = self.adjacency[current].iter().find(|e| {
                dist[e.to] != usize::MAX
                    && dist[e.to] + 1 == dist[current]
                    && spouses[e.to] != usize::MAX
                    && spouses[e.to] + usize::from(e.kind.is_spouse()) == spouses[current]
            });
            let Some(step) = step else {
                // Unreachable: every settled node has a successor on a shortest path
                return PathResult::empty();
            };
            path.nodes.push(self.nodes[step.to]);
            path.edges.push(PathEdge {
                kind: step.kind,
                order: step.order,
            });
            current = step.to;
        }

        path
    }
}

impl MemberLookup for RelationshipGraph {
    fn gender_of(&self, id: MemberId) -> Gender {
        self.genders.get(&id).copied().unwrap_or_default()
    }
}
