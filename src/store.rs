//! Storage traits and the in-memory backend.
//!
//! The engine reads an investor's document snapshot from a store; it never
//! writes. The store layer owns input validation—foreign keys, the
//! at-most-one-direct-superseder rule, self-supersession—so that by the
//! time the resolver runs, the snapshot is already well-formed and the
//! resolver can stay a total function.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

use crate::document::{Document, DocumentId};
use crate::error::ValidationError;
use crate::investor::{Investor, InvestorId};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Investor not found.
    #[error("Investor not found: {0}")]
    InvestorNotFound(InvestorId),

    /// Document not found.
    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    /// Key already exists.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Input rejected before it reached storage.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Backend error.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Storage trait for investor records.
pub trait InvestorStore: Send + Sync {
    /// Insert a new investor. Returns error if the ID already exists.
    fn insert(&self, investor: Investor) -> Result<(), StorageError>;

    /// Get an investor by ID.
    fn get(&self, id: InvestorId) -> Result<Option<Investor>, StorageError>;

    /// Delete an investor and every document that belongs to them.
    fn delete(&self, id: InvestorId) -> Result<(), StorageError>;

    /// List all investors.
    fn list(&self) -> Result<Vec<Investor>, StorageError>;
}

/// Storage trait for document records (each owning its clauses).
pub trait DocumentStore: Send + Sync {
    /// Insert a new document after validating it. Returns error if the ID
    /// already exists, the investor is unknown, or the supersession link is
    /// invalid.
    fn insert(&self, document: Document) -> Result<(), StorageError>;

    /// Get a document by ID.
    fn get(&self, id: DocumentId) -> Result<Option<Document>, StorageError>;

    /// Replace an existing document. Same validation as insert.
    fn update(&self, document: Document) -> Result<(), StorageError>;

    /// Delete a document by ID.
    fn delete(&self, id: DocumentId) -> Result<(), StorageError>;

    /// All documents for one investor, in insertion order.
    fn find_by_investor(&self, investor_id: InvestorId) -> Result<Vec<Document>, StorageError>;
}

#[derive(Debug, Default)]
struct DocumentTable {
    rows: HashMap<DocumentId, (u64, Document)>,
    next_seq: u64,
}

/// In-memory store backing both traits.
///
/// Interior mutability via `RwLock` keeps the store shareable across
/// threads; reads during a resolution call see a consistent snapshot
/// because `find_by_investor` clones under the read lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    investors: RwLock<HashMap<InvestorId, Investor>>,
    documents: RwLock<DocumentTable>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a document against the current table contents. The
    /// document's own stored version never counts as a competing
    /// superseder, so updates re-validate cleanly.
    fn validate(&self, table: &DocumentTable, document: &Document) -> Result<(), StorageError> {
        if document.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }

        let investors = self.investors.read().map_err(poisoned)?;
        if !investors.contains_key(&document.investor_id) {
            return Err(StorageError::InvestorNotFound(document.investor_id));
        }
        drop(investors);

        if let Some(target_id) = document.supersedes_id {
            if target_id == document.id {
                return Err(ValidationError::SelfSupersession {
                    document_id: document.id,
                }
                .into());
            }

            let Some((_, target)) = table.rows.get(&target_id) else {
                return Err(ValidationError::UnknownSupersessionTarget { target_id }.into());
            };

            if target.investor_id != document.investor_id {
                return Err(ValidationError::CrossInvestorSupersession {
                    target_id,
                    target_investor_id: target.investor_id,
                    investor_id: document.investor_id,
                }
                .into());
            }

            // At most one document may directly supersede a given document.
            let existing = table.rows.values().find(|(_, other)| {
                other.supersedes_id == Some(target_id) && other.id != document.id
            });
            if let Some((_, superseding)) = existing {
                return Err(ValidationError::AlreadySuperseded {
                    target_id,
                    superseding_id: superseding.id,
                }
                .into());
            }
        }

        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> StorageError {
    StorageError::Backend("lock poisoned".to_string())
}

impl InvestorStore for MemoryStore {
    fn insert(&self, investor: Investor) -> Result<(), StorageError> {
        let mut investors = self.investors.write().map_err(poisoned)?;
        if investors.contains_key(&investor.id) {
            return Err(StorageError::DuplicateKey(investor.id.to_string()));
        }
        investors.insert(investor.id, investor);
        Ok(())
    }

    fn get(&self, id: InvestorId) -> Result<Option<Investor>, StorageError> {
        let investors = self.investors.read().map_err(poisoned)?;
        Ok(investors.get(&id).cloned())
    }

    fn delete(&self, id: InvestorId) -> Result<(), StorageError> {
        let mut investors = self.investors.write().map_err(poisoned)?;
        if investors.remove(&id).is_none() {
            return Err(StorageError::InvestorNotFound(id));
        }
        drop(investors);

        // Documents are owned by their investor and go with them.
        let mut table = self.documents.write().map_err(poisoned)?;
        table.rows.retain(|_, (_, doc)| doc.investor_id != id);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Investor>, StorageError> {
        let investors = self.investors.read().map_err(poisoned)?;
        let mut all: Vec<Investor> = investors.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }
}

impl DocumentStore for MemoryStore {
    fn insert(&self, document: Document) -> Result<(), StorageError> {
        let mut table = self.documents.write().map_err(poisoned)?;
        if table.rows.contains_key(&document.id) {
            return Err(StorageError::DuplicateKey(document.id.to_string()));
        }
        self.validate(&table, &document)?;

        let seq = table.next_seq;
        table.next_seq += 1;
        table.rows.insert(document.id, (seq, document));
        Ok(())
    }

    fn get(&self, id: DocumentId) -> Result<Option<Document>, StorageError> {
        let table = self.documents.read().map_err(poisoned)?;
        Ok(table.rows.get(&id).map(|(_, doc)| doc.clone()))
    }

    fn update(&self, document: Document) -> Result<(), StorageError> {
        let mut table = self.documents.write().map_err(poisoned)?;
        let Some(&(seq, _)) = table.rows.get(&document.id) else {
            return Err(StorageError::DocumentNotFound(document.id));
        };
        self.validate(&table, &document)?;
        table.rows.insert(document.id, (seq, document));
        Ok(())
    }

    fn delete(&self, id: DocumentId) -> Result<(), StorageError> {
        let mut table = self.documents.write().map_err(poisoned)?;
        if table.rows.remove(&id).is_none() {
            return Err(StorageError::DocumentNotFound(id));
        }
        // Dangling supersedes links would fail foreign-key validation on the
        // next write, so clear them now.
        for (_, doc) in table.rows.values_mut() {
            if doc.supersedes_id == Some(id) {
                doc.supersedes_id = None;
            }
        }
        Ok(())
    }

    fn find_by_investor(&self, investor_id: InvestorId) -> Result<Vec<Document>, StorageError> {
        let table = self.documents.read().map_err(poisoned)?;
        let mut matching: Vec<(u64, Document)> = table
            .rows
            .values()
            .filter(|(_, doc)| doc.investor_id == investor_id)
            .cloned()
            .collect();
        matching.sort_by_key(|(seq, _)| *seq);
        Ok(matching.into_iter().map(|(_, doc)| doc).collect())
    }
}
