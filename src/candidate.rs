//! Clause aggregation into resolution candidates.
//!
//! A candidate pairs a clause with the authority context of its owning
//! document: stored priority, document effective date, and whether the
//! document is currently superseded. Candidates are transient—they borrow
//! from the document snapshot, exist for the duration of one resolution
//! call, and are discarded afterward.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::clause::{Clause, ClauseCategory};
use crate::document::Document;
use crate::supersession::SupersessionIndex;

/// One clause viewed through its owning document's authority.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// The clause under consideration.
    pub clause: &'a Clause,
    /// The document that owns it.
    pub document: &'a Document,
    /// The document's stored authority rank.
    pub priority: u8,
    /// The document's effective date (not the clause's).
    pub effective_date: Option<NaiveDate>,
    /// True if another document directly supersedes the owner.
    pub is_superseded: bool,
}

impl<'a> Candidate<'a> {
    /// Builds a candidate for `clause` owned by `document`.
    #[must_use]
    pub fn new(clause: &'a Clause, document: &'a Document, index: &SupersessionIndex) -> Self {
        Self {
            clause,
            document,
            priority: document.priority,
            effective_date: document.effective_date,
            is_superseded: index.is_superseded(document.id),
        }
    }
}

/// Groups every clause across the documents by category.
///
/// First of the two resolution passes: build the category → candidate-list
/// map, then resolve each list independently. Categories with zero clauses
/// simply never get a key. The map is ordered so downstream output is
/// deterministic.
#[must_use]
pub fn group_by_category<'a>(
    documents: &'a [Document],
    index: &SupersessionIndex,
) -> BTreeMap<ClauseCategory, Vec<Candidate<'a>>> {
    let mut by_category: BTreeMap<ClauseCategory, Vec<Candidate<'a>>> = BTreeMap::new();
    for document in documents {
        for clause in &document.clauses {
            by_category
                .entry(clause.category.clone())
                .or_default()
                .push(Candidate::new(clause, document, index));
        }
    }
    by_category
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::investor::InvestorId;

    fn snapshot() -> Vec<Document> {
        let investor = InvestorId::new();
        let ppm = Document::new(investor, "PPM", "PPM")
            .with_clause(Clause::new("Management Fee").with_rate(2.0))
            .with_clause(Clause::new("Carry Terms").with_rate(20.0));
        let side_letter = Document::new(investor, "Side Letter", "Side Letter")
            .supersedes(ppm.id)
            .with_clause(Clause::new("Management Fee").with_rate(1.75));
        vec![ppm, side_letter]
    }

    #[test]
    fn test_grouping_by_category() {
        let documents = snapshot();
        let index = SupersessionIndex::build(&documents);
        let grouped = group_by_category(&documents, &index);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[&ClauseCategory::ManagementFee].len(), 2);
        assert_eq!(grouped[&ClauseCategory::CarryTerms].len(), 1);
    }

    #[test]
    fn test_empty_categories_absent() {
        let documents = snapshot();
        let index = SupersessionIndex::build(&documents);
        let grouped = group_by_category(&documents, &index);
        assert!(!grouped.contains_key(&ClauseCategory::PreferredReturn));
    }

    #[test]
    fn test_candidate_carries_document_context() {
        let documents = snapshot();
        let index = SupersessionIndex::build(&documents);
        let grouped = group_by_category(&documents, &index);

        let fees = &grouped[&ClauseCategory::ManagementFee];
        let from_ppm = fees.iter().find(|c| c.document.doc_type == "PPM").unwrap();
        let from_sl = fees
            .iter()
            .find(|c| c.document.doc_type == "Side Letter")
            .unwrap();

        assert_eq!(from_ppm.priority, 1);
        assert!(from_ppm.is_superseded);
        assert_eq!(from_sl.priority, 3);
        assert!(!from_sl.is_superseded);
    }

    #[test]
    fn test_no_documents_no_candidates() {
        let index = SupersessionIndex::build(&[]);
        assert!(group_by_category(&[], &index).is_empty());
    }
}
