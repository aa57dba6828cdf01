//! Supersession index.
//!
//! Supersession is an explicit document-to-document relation: an amendment
//! names the side letter it replaces. The forward direction lives on the
//! document (`supersedes_id`); this module derives the reverse index used
//! during resolution. The marking is one hop only: with C superseding B and
//! B superseding A, A is recorded as superseded by B, not by C. Chains are
//! deliberately not flattened.

use std::collections::HashMap;

use crate::document::{Document, DocumentId};

/// Reverse supersession index for one investor's document set.
///
/// Derived state, rebuilt from the documents on every resolution call.
/// Cycle freedom is an input invariant owned by the store layer; the index
/// itself just records what the documents say.
#[derive(Debug, Clone, Default)]
pub struct SupersessionIndex {
    superseded_by: HashMap<DocumentId, DocumentId>,
}

impl SupersessionIndex {
    /// Builds the index by scanning each document's `supersedes_id`.
    #[must_use]
    pub fn build(documents: &[Document]) -> Self {
        let mut superseded_by = HashMap::new();
        for doc in documents {
            if let Some(target) = doc.supersedes_id {
                superseded_by.insert(target, doc.id);
            }
        }
        Self { superseded_by }
    }

    /// Returns true if some other document directly supersedes `id`.
    #[must_use]
    pub fn is_superseded(&self, id: DocumentId) -> bool {
        self.superseded_by.contains_key(&id)
    }

    /// Returns the document that directly supersedes `id`, if any.
    #[must_use]
    pub fn superseded_by(&self, id: DocumentId) -> Option<DocumentId> {
        self.superseded_by.get(&id).copied()
    }

    /// Number of superseded documents in the set.
    #[must_use]
    pub fn superseded_count(&self) -> usize {
        self.superseded_by.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::investor::InvestorId;

    #[test]
    fn test_empty_set() {
        let index = SupersessionIndex::build(&[]);
        assert_eq!(index.superseded_count(), 0);
        assert!(!index.is_superseded(DocumentId::new()));
    }

    #[test]
    fn test_direct_supersession() {
        let investor = InvestorId::new();
        let old = Document::new(investor, "Side Letter v1", "Side Letter");
        let new = Document::new(investor, "Side Letter v2", "Side Letter").supersedes(old.id);

        let index = SupersessionIndex::build(&[old.clone(), new.clone()]);
        assert!(index.is_superseded(old.id));
        assert!(!index.is_superseded(new.id));
        assert_eq!(index.superseded_by(old.id), Some(new.id));
    }

    #[test]
    fn test_chain_is_one_hop_only() {
        let investor = InvestorId::new();
        let a = Document::new(investor, "A", "Side Letter");
        let b = Document::new(investor, "B", "Side Letter").supersedes(a.id);
        let c = Document::new(investor, "C", "Amendment").supersedes(b.id);

        let index = SupersessionIndex::build(&[a.clone(), b.clone(), c.clone()]);

        // A is marked superseded by B, never transitively by C.
        assert_eq!(index.superseded_by(a.id), Some(b.id));
        assert_eq!(index.superseded_by(b.id), Some(c.id));
        assert_eq!(index.superseded_by(c.id), None);
        assert_eq!(index.superseded_count(), 2);
    }

    #[test]
    fn test_document_order_irrelevant() {
        let investor = InvestorId::new();
        let old = Document::new(investor, "v1", "Fee Schedule");
        let new = Document::new(investor, "v2", "Fee Schedule").supersedes(old.id);

        let forward = SupersessionIndex::build(&[old.clone(), new.clone()]);
        let reverse = SupersessionIndex::build(&[new.clone(), old.clone()]);
        assert_eq!(forward.superseded_by(old.id), reverse.superseded_by(old.id));
    }
}
