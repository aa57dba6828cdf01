//! The structured response of a resolution call.
//!
//! A resolution returns more than the winning values: every category
//! carries the winner, the clauses it overrode with the reason each one
//! lost, and a display summary. Nothing is silently dropped—losing clauses
//! stay visible in the `overridden` map.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::clause::{ClauseCategory, ClauseId};
use crate::document::DocumentId;
use crate::summary::TermsSummary;

/// Attribution of a term to the document it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermSource {
    /// Winning (or losing) document's ID.
    pub document_id: DocumentId,
    /// Its display title.
    pub document_title: String,
    /// Its free-form type.
    pub document_type: String,
    /// Its stored authority rank.
    pub priority: u8,
    /// Its effective date, when stated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
}

impl TermSource {
    /// Builds the source record for a candidate's owning document.
    #[must_use]
    pub fn from_candidate(candidate: &Candidate<'_>) -> Self {
        Self {
            document_id: candidate.document.id,
            document_title: candidate.document.title.clone(),
            document_type: candidate.document.doc_type.clone(),
            priority: candidate.priority,
            effective_date: candidate.effective_date,
        }
    }
}

/// The clause currently governing one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveTerm {
    /// Winning clause's ID.
    pub clause_id: ClauseId,
    /// The category being governed.
    #[serde(rename = "clauseType")]
    pub category: ClauseCategory,
    /// Percentage rate, when the clause carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    /// Discount percentage, when the clause carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// Free-text threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<String>,
    /// Numeric threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_amount: Option<f64>,
    /// The clause's own effective date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    /// Original clause text.
    #[serde(rename = "clauseText", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Reviewer notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Section reference in the source document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_ref: Option<String>,
    /// The winning document.
    pub source: TermSource,
}

impl EffectiveTerm {
    /// Builds the winning-term record from the winning candidate.
    #[must_use]
    pub fn from_winner(winner: &Candidate<'_>) -> Self {
        let clause = winner.clause;
        Self {
            clause_id: clause.id,
            category: clause.category.clone(),
            rate: clause.rate,
            discount: clause.discount,
            threshold: clause.threshold.clone(),
            threshold_amount: clause.threshold_amount,
            effective_date: clause.effective_date,
            text: clause.text.clone(),
            notes: clause.notes.clone(),
            section_ref: clause.section_ref.clone(),
            source: TermSource::from_candidate(winner),
        }
    }
}

/// A clause that lost resolution, with the reason it lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverriddenTerm {
    /// Losing clause's ID.
    pub clause_id: ClauseId,
    /// Percentage rate, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    /// Discount percentage, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// Free-text threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<String>,
    /// Original clause text.
    #[serde(rename = "clauseText", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// The losing document.
    pub source: TermSource,
    /// Human-readable reason this clause was overridden.
    pub reason: String,
}

impl OverriddenTerm {
    /// Builds a loser record from a candidate and its reason.
    #[must_use]
    pub fn from_loser(loser: &Candidate<'_>, reason: String) -> Self {
        let clause = loser.clause;
        Self {
            clause_id: clause.id,
            rate: clause.rate,
            discount: clause.discount,
            threshold: clause.threshold.clone(),
            text: clause.text.clone(),
            source: TermSource::from_candidate(loser),
            reason,
        }
    }
}

/// The full result of resolving one investor's document set.
///
/// An investor with no documents resolves to all three fields empty; that
/// is a valid answer, not an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectiveTerms {
    /// Category → currently governing clause.
    pub terms: BTreeMap<ClauseCategory, EffectiveTerm>,

    /// Category → overridden clauses. Only categories that actually had
    /// losers get a key.
    pub overridden: BTreeMap<ClauseCategory, Vec<OverriddenTerm>>,

    /// Fixed display projection of the winners.
    pub summary: TermsSummary,
}

impl EffectiveTerms {
    /// Returns true if no category resolved to anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the winning term for a category, if one exists.
    #[must_use]
    pub fn term(&self, category: &ClauseCategory) -> Option<&EffectiveTerm> {
        self.terms.get(category)
    }

    /// Returns the overridden clauses for a category, if any lost.
    #[must_use]
    pub fn overridden_for(&self, category: &ClauseCategory) -> Option<&[OverriddenTerm]> {
        self.overridden.get(category).map(Vec::as_slice)
    }
}
