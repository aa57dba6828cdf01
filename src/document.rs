//! Documents and their metadata.
//!
//! A document is one legal instrument—a PPM, a subscription agreement, a
//! side letter, an amendment—owning the clauses extracted from it. Its
//! authority rank is derived from the document type exactly once, at
//! construction, and stored; the resolution engine reads the stored value
//! and never recomputes it.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clause::Clause;
use crate::investor::InvestorId;
use crate::priority;

/// Globally unique document identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Creates a new random document ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a document ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for DocumentId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<DocumentId> for Uuid {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

/// Lifecycle status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Not yet executed.
    Draft,
    /// In force.
    Active,
    /// Replaced by a later document.
    Superseded,
}

impl Default for DocumentStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Active => write!(f, "active"),
            Self::Superseded => write!(f, "superseded"),
        }
    }
}

/// One legal document belonging to an investor, owning its clauses.
///
/// `doc_type` is free-form—the catalog of types is open-ended—and
/// `priority` is the rank [`priority::rank`] assigned to that type when the
/// document was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Globally unique identifier.
    pub id: DocumentId,

    /// Investor this document belongs to.
    pub investor_id: InvestorId,

    /// Display title, e.g. "Side Letter - Meridian FO".
    pub title: String,

    /// Free-form document type, e.g. "Side Letter", "Amendment".
    pub doc_type: String,

    /// Lifecycle status.
    #[serde(default)]
    pub status: DocumentStatus,

    /// Authority rank derived from `doc_type` at construction.
    pub priority: u8,

    /// Date the document takes effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,

    /// Document this one supersedes, if any. At most one document may
    /// directly supersede a given document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supersedes_id: Option<DocumentId>,

    /// Original file name, when the document came from an upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    /// Raw document text kept for display and highlighting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,

    /// Clauses extracted from this document.
    #[serde(default)]
    pub clauses: Vec<Clause>,
}

impl Document {
    /// Creates a new document, deriving its priority from `doc_type`.
    #[must_use]
    pub fn new(
        investor_id: InvestorId,
        title: impl Into<String>,
        doc_type: impl Into<String>,
    ) -> Self {
        let doc_type = doc_type.into();
        let priority = priority::rank(&doc_type);
        Self {
            id: DocumentId::new(),
            investor_id,
            title: title.into(),
            doc_type,
            status: DocumentStatus::Active,
            priority,
            effective_date: None,
            supersedes_id: None,
            file_name: None,
            source_text: None,
            clauses: Vec::new(),
        }
    }

    /// Sets the lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: DocumentStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the effective date.
    #[must_use]
    pub const fn with_effective_date(mut self, date: NaiveDate) -> Self {
        self.effective_date = Some(date);
        self
    }

    /// Marks this document as superseding another.
    #[must_use]
    pub const fn supersedes(mut self, target: DocumentId) -> Self {
        self.supersedes_id = Some(target);
        self
    }

    /// Sets the original file name.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Sets the raw source text.
    #[must_use]
    pub fn with_source_text(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    /// Adds one clause.
    #[must_use]
    pub fn with_clause(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Adds a batch of clauses.
    #[must_use]
    pub fn with_clauses(mut self, clauses: impl IntoIterator<Item = Clause>) -> Self {
        self.clauses.extend(clauses);
        self
    }

    /// Returns the number of clauses this document owns.
    #[must_use]
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clause::ClauseCategory;

    #[test]
    fn test_document_id_unique() {
        assert_ne!(DocumentId::new(), DocumentId::new());
    }

    #[test]
    fn test_priority_derived_from_type() {
        let investor = InvestorId::new();
        assert_eq!(Document::new(investor, "A", "Amendment").priority, 4);
        assert_eq!(Document::new(investor, "SL", "Side Letter").priority, 3);
        assert_eq!(Document::new(investor, "FS", "Fee Schedule").priority, 3);
        assert_eq!(
            Document::new(investor, "Sub", "Subscription Agreement").priority,
            2
        );
        assert_eq!(Document::new(investor, "PPM", "PPM").priority, 1);
        assert_eq!(Document::new(investor, "X", "Term Sheet").priority, 1);
    }

    #[test]
    fn test_document_builder() {
        let investor = InvestorId::new();
        let ppm = Document::new(investor, "Fund IV PPM", "PPM");
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        let doc = Document::new(investor, "Side Letter", "Side Letter")
            .with_effective_date(date)
            .supersedes(ppm.id)
            .with_clause(Clause::new(ClauseCategory::ManagementFee).with_rate(1.75));

        assert_eq!(doc.effective_date, Some(date));
        assert_eq!(doc.supersedes_id, Some(ppm.id));
        assert_eq!(doc.clause_count(), 1);
        assert_eq!(doc.status, DocumentStatus::Active);
    }

    #[test]
    fn test_document_serialization() {
        let investor = InvestorId::new();
        let doc = Document::new(investor, "Fund IV PPM", "PPM")
            .with_clause(Clause::new("Management Fee").with_rate(2.0));

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["docType"], "PPM");
        assert_eq!(json["priority"], 1);
        assert_eq!(json["status"], "active");
        assert_eq!(json["clauses"][0]["clauseType"], "Management Fee");
        assert!(json.get("supersedesId").is_none());

        let back: Document = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }
}
