//! Kindred Storage Layer
//!
//! Implements the [`FamilyStore`] trait on SQLite. The store only answers
//! family-scoped reads for relationship detection; the insert methods exist
//! to seed a database from a snapshot.
//!
//! # Examples
//!
//! ```no_run
//! use kindred_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for member and relationship operations
//! ```

#![warn(missing_docs)]

use kindred_domain::{
    FamilyId, FamilyStore, Gender, Member, MemberId, Relationship, RelationshipType,
};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Member already exists
    #[error("Duplicate member: {0}")]
    Duplicate(MemberId),
}

/// SQLite-based implementation of FamilyStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Insert a member
    ///
    /// # Errors
    /// Returns [`StoreError::Duplicate`] if a member with the same id exists.
    pub fn insert_member(&mut self, member: &Member) -> Result<(), StoreError> {
        let id_bytes = id_to_bytes(member.id.value());

        let exists: bool = self
            .conn
            .query_row("SELECT 1 FROM members WHERE id = ?1", params![&id_bytes], |_| Ok(true))
            .optional()?
            .unwrap_or(false);

        if exists {
            return Err(StoreError::Duplicate(member.id));
        }

        self.conn.execute(
            "INSERT INTO members (id, family_id, name, gender) VALUES (?1, ?2, ?3, ?4)",
            params![
                &id_bytes,
                &id_to_bytes(member.family_id.value()),
                &member.name,
                member.gender.as_str(),
            ],
        )?;

        Ok(())
    }

    /// Insert a relationship, replacing the order of an identical edge in the same family
    pub fn insert_relationship(&mut self, relationship: &Relationship) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO relationships
             (source_id, target_id, relationship_type, family_id, birth_order)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(source_id, target_id, relationship_type, family_id) DO UPDATE SET
             birth_order = excluded.birth_order",
            params![
                &id_to_bytes(relationship.source.value()),
                &id_to_bytes(relationship.target.value()),
                relationship.relationship_type.as_str(),
                &id_to_bytes(relationship.family_id.value()),
                relationship.order,
            ],
        )?;

        Ok(())
    }

    /// Insert many members and relationships in a single transaction
    pub fn import(
        &mut self,
        members: &[Member],
        relationships: &[Relationship],
    ) -> Result<(), StoreError> {
        self.conn.execute_batch("BEGIN")?;

        match self.import_rows(members, relationships) {
            Ok(()) => {
                self.conn.execute_batch("COMMIT")?;
                Ok(())
            }
            Err(e) => {
                self.conn.execute_batch("ROLLBACK")?;
                Err(e)
            }
        }
    }

    fn import_rows(
        &mut self,
        members: &[Member],
        relationships: &[Relationship],
    ) -> Result<(), StoreError> {
        for member in members {
            self.insert_member(member)?;
        }
        for relationship in relationships {
            self.insert_relationship(relationship)?;
        }
        Ok(())
    }
}

/// Convert an identifier to bytes for storage
fn id_to_bytes(value: u128) -> Vec<u8> {
    value.to_be_bytes().to_vec()
}

/// Convert stored bytes back to an identifier value
fn bytes_to_id(bytes: &[u8]) -> Result<u128, StoreError> {
    if bytes.len() != 16 {
        return Err(StoreError::InvalidData(format!(
            "Expected 16 bytes for an id, got {}",
            bytes.len()
        )));
    }
    let mut arr = [0u8; 16];
    arr.copy_from_slice(bytes);
    Ok(u128::from_be_bytes(arr))
}

/// Read an id column, mapping conversion failures into rusqlite errors
fn id_column(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<u128> {
    let bytes: Vec<u8> = row.get(idx)?;
    bytes_to_id(&bytes).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Blob, Box::new(e))
    })
}

fn text_conversion_failure(idx: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        idx,
        rusqlite::types::Type::Text,
        Box::new(StoreError::InvalidData(message)),
    )
}

impl FamilyStore for SqliteStore {
    type Error = StoreError;

    fn get_members(&self, family_id: FamilyId) -> Result<Vec<Member>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, family_id, name, gender FROM members WHERE family_id = ?1 ORDER BY rowid",
        )?;

        let members = stmt
            .query_map(params![&id_to_bytes(family_id.value())], |row| {
                let gender: String = row.get(3)?;
                let gender = Gender::parse(&gender).ok_or_else(|| {
                    text_conversion_failure(3, format!("Unknown gender: {}", gender))
                })?;

                Ok(Member {
                    id: MemberId::from_value(id_column(row, 0)?),
                    family_id: FamilyId::from_value(id_column(row, 1)?),
                    name: row.get(2)?,
                    gender,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(members)
    }

    fn get_relationships(&self, family_id: FamilyId) -> Result<Vec<Relationship>, Self::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT source_id, target_id, relationship_type, family_id, birth_order
             FROM relationships WHERE family_id = ?1 ORDER BY rowid",
        )?;

        let relationships = stmt
            .query_map(params![&id_to_bytes(family_id.value())], |row| {
                let rel_type: String = row.get(2)?;
                let relationship_type = RelationshipType::parse(&rel_type).ok_or_else(|| {
                    text_conversion_failure(2, format!("Unknown relationship type: {}", rel_type))
                })?;

                Ok(Relationship {
                    source: MemberId::from_value(id_column(row, 0)?),
                    target: MemberId::from_value(id_column(row, 1)?),
                    relationship_type,
                    family_id: FamilyId::from_value(id_column(row, 3)?),
                    order: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(relationships)
    }
}
