//! JSON family snapshots.

use crate::error::{CliError, Result};
use kindred_domain::{
    FamilyId, FamilySnapshot, Gender, Member, MemberId, Relationship, RelationshipType,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk snapshot: members and relationships with UUID string ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotFile {
    /// Family members
    #[serde(default)]
    pub members: Vec<MemberRecord>,

    /// Primary relationships
    #[serde(default)]
    pub relationships: Vec<RelationshipRecord>,
}

/// A member entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRecord {
    /// Member ID
    pub id: String,
    /// Family ID
    pub family_id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// "male", "female" or empty
    #[serde(default)]
    pub gender: String,
}

/// A relationship entry: `source` is `target`'s `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipRecord {
    /// Source member ID
    pub source: String,
    /// Target member ID
    pub target: String,
    /// "father", "mother", "husband" or "wife"
    #[serde(rename = "type")]
    pub relationship_type: String,
    /// Family ID
    pub family_id: String,
    /// Birth order of the target among the source's children
    #[serde(default)]
    pub order: u32,
}

impl SnapshotFile {
    /// Read a snapshot from a JSON file.
    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a snapshot from JSON text.
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert to domain values, validating every id and enum.
    pub fn into_parts(self) -> Result<(Vec<Member>, Vec<Relationship>)> {
        let members = self
            .members
            .into_iter()
            .map(MemberRecord::into_member)
            .collect::<Result<Vec<_>>>()?;
        let relationships = self
            .relationships
            .into_iter()
            .map(RelationshipRecord::into_relationship)
            .collect::<Result<Vec<_>>>()?;
        Ok((members, relationships))
    }

    /// Convert to an in-memory store.
    pub fn into_snapshot(self) -> Result<FamilySnapshot> {
        let (members, relationships) = self.into_parts()?;
        Ok(FamilySnapshot::new(members, relationships))
    }
}

impl MemberRecord {
    fn into_member(self) -> Result<Member> {
        let gender = Gender::parse(&self.gender).ok_or_else(|| {
            CliError::InvalidInput(format!(
                "Invalid gender '{}' for member {}",
                self.gender, self.id
            ))
        })?;
        Ok(Member::new(
            parse_member_id(&self.id)?,
            parse_family_id(&self.family_id)?,
            self.name,
            gender,
        ))
    }
}

impl RelationshipRecord {
    fn into_relationship(self) -> Result<Relationship> {
        let relationship_type = RelationshipType::parse(&self.relationship_type).ok_or_else(|| {
            CliError::InvalidInput(format!(
                "Invalid relationship type '{}'",
                self.relationship_type
            ))
        })?;
        Ok(Relationship::new(
            parse_member_id(&self.source)?,
            parse_member_id(&self.target)?,
            relationship_type,
            parse_family_id(&self.family_id)?,
        )
        .with_order(self.order))
    }
}

/// Parse a member id argument.
pub fn parse_member_id(s: &str) -> Result<MemberId> {
    MemberId::from_string(s)
        .map_err(|e| CliError::InvalidInput(format!("member id '{}': {}", s, e)))
}

/// Parse a family id argument.
pub fn parse_family_id(s: &str) -> Result<FamilyId> {
    FamilyId::from_string(s)
        .map_err(|e| CliError::InvalidInput(format!("family id '{}': {}", s, e)))
}
