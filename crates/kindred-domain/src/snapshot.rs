//! In-memory family data

use crate::{FamilyId, FamilyStore, Member, Relationship};
use std::convert::Infallible;

/// An immutable in-memory set of members and relationships
///
/// May hold several families; queries filter by family id like any other
/// store. Used for fixtures and for JSON snapshots loaded by the CLI.
///
/// # Examples
///
/// ```
/// use kindred_domain::{FamilyId, FamilySnapshot, FamilyStore, Gender, Member, MemberId};
///
/// let family = FamilyId::from_value(1);
/// let snapshot = FamilySnapshot::new(
///     vec![Member::new(MemberId::from_value(10), family, "An", Gender::Male)],
///     vec![],
/// );
/// assert_eq!(snapshot.get_members(family).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FamilySnapshot {
    members: Vec<Member>,
    relationships: Vec<Relationship>,
}

impl FamilySnapshot {
    /// Create a snapshot from members and relationships
    pub fn new(members: Vec<Member>, relationships: Vec<Relationship>) -> Self {
        Self {
            members,
            relationships,
        }
    }

    /// Add a member
    pub fn push_member(&mut self, member: Member) {
        self.members.push(member);
    }

    /// Add a relationship
    pub fn push_relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }
}

impl FamilyStore for FamilySnapshot {
    type Error = Infallible;

    fn get_members(&self, family_id: FamilyId) -> Result<Vec<Member>, Self::Error> {
        Ok(self
            .members
            .iter()
            .filter(|m| m.family_id == family_id)
            .cloned()
            .collect())
    }

    fn get_relationships(&self, family_id: FamilyId) -> Result<Vec<Relationship>, Self::Error> {
        Ok(self
            .relationships
            .iter()
            .filter(|r| r.family_id == family_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Gender, MemberId, RelationshipType};

    #[test]
    fn test_family_scoping() {
        let f1 = FamilyId::from_value(1);
        let f2 = FamilyId::from_value(2);
        let a = MemberId::from_value(10);
        let b = MemberId::from_value(11);
        let c = MemberId::from_value(20);

        let mut snapshot = FamilySnapshot::default();
        snapshot.push_member(Member::new(a, f1, "A", Gender::Male));
        snapshot.push_member(Member::new(b, f1, "B", Gender::Female));
        snapshot.push_member(Member::new(c, f2, "C", Gender::Male));
        snapshot.push_relationship(Relationship::new(a, b, RelationshipType::Husband, f1));

        assert_eq!(snapshot.get_members(f1).unwrap().len(), 2);
        assert_eq!(snapshot.get_members(f2).unwrap().len(), 1);
        assert_eq!(snapshot.get_relationships(f1).unwrap().len(), 1);
        assert!(snapshot.get_relationships(f2).unwrap().is_empty());
    }
}
