//! Conflict resolution across an investor's documents.
//!
//! For each clause category the resolver decides which clause currently
//! governs and why every other clause lost. The decision procedure:
//!
//! 1. Prefer candidates whose owning document is not superseded. If that
//!    removes every candidate, fall back to the full set—a term with only
//!    superseded sources still beats no term at all.
//! 2. Order by document priority descending, then document effective date
//!    descending. A missing date compares as the minimum representable
//!    date, so it never wins a tie against a dated document.
//! 3. The first candidate wins. Everything else, plus anything the
//!    supersession filter removed, becomes a loser with a reason string.
//!
//! The whole computation is a pure, synchronous pass over an immutable
//! snapshot: no I/O, no shared state, deterministic output.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::candidate::{group_by_category, Candidate};
use crate::document::Document;
use crate::supersession::SupersessionIndex;
use crate::summary::TermsSummary;
use crate::terms::{EffectiveTerm, EffectiveTerms, OverriddenTerm};

/// Resolves the effective terms for one investor's document snapshot.
///
/// An empty snapshot resolves to the empty result; this is not an error.
#[must_use]
pub fn resolve(documents: &[Document]) -> EffectiveTerms {
    if documents.is_empty() {
        return EffectiveTerms::default();
    }

    let index = SupersessionIndex::build(documents);
    let grouped = group_by_category(documents, &index);

    let mut terms = BTreeMap::new();
    let mut overridden = BTreeMap::new();

    for (category, candidates) in &grouped {
        let (winner, losers) = resolve_category(candidates);
        terms.insert(category.clone(), winner);
        if !losers.is_empty() {
            overridden.insert(category.clone(), losers);
        }
    }

    let summary = TermsSummary::build(&terms);

    EffectiveTerms {
        terms,
        overridden,
        summary,
    }
}

/// Resolves one category's candidate list into a winner and its losers.
///
/// Callers guarantee `candidates` is non-empty (empty categories never get
/// a key in the grouped map).
fn resolve_category<'a>(
    candidates: &[Candidate<'a>],
) -> (EffectiveTerm, Vec<OverriddenTerm>) {
    let active: Vec<&Candidate<'a>> = candidates.iter().filter(|c| !c.is_superseded).collect();
    let filter_applied = !active.is_empty();

    let mut ordered: Vec<&Candidate<'a>> = if filter_applied {
        active
    } else {
        candidates.iter().collect()
    };
    // Stable sort: exact ties keep document insertion order.
    ordered.sort_by(|a, b| authority_order(a, b));

    let winner = ordered[0];

    let mut losers: Vec<&Candidate<'a>> = ordered[1..].to_vec();
    if filter_applied {
        // Candidates the supersession filter excluded still surface as
        // losers. On the fallback path nothing was excluded, so each
        // superseded candidate appears exactly once via the ordered list.
        losers.extend(candidates.iter().filter(|c| c.is_superseded));
    }

    let overridden = losers
        .into_iter()
        .map(|loser| OverriddenTerm::from_loser(loser, override_reason(winner, loser)))
        .collect();

    (EffectiveTerm::from_winner(winner), overridden)
}

/// Authority ordering: priority descending, then effective date descending
/// with absent dates pinned to the minimum representable date.
fn authority_order(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.priority.cmp(&a.priority).then_with(|| {
        let a_date = a.effective_date.unwrap_or(NaiveDate::MIN);
        let b_date = b.effective_date.unwrap_or(NaiveDate::MIN);
        b_date.cmp(&a_date)
    })
}

/// Generates the human-readable reason a clause was overridden.
///
/// Checked in precedence order; the first match wins and exactly one
/// reason is produced per loser.
fn override_reason(winner: &Candidate<'_>, loser: &Candidate<'_>) -> String {
    if loser.is_superseded {
        return format!("Superseded by {}", winner.document.title);
    }

    if winner.priority > loser.priority {
        return format!(
            "Lower priority document type ({})",
            loser.document.doc_type
        );
    }

    if winner.priority == loser.priority {
        match (winner.effective_date, loser.effective_date) {
            (Some(winner_date), Some(loser_date)) if winner_date > loser_date => {
                return format!("Older effective date ({loser_date})");
            }
            (Some(_), None) => return "No effective date specified".to_string(),
            _ => {}
        }
    }

    "Lower priority".to_string()
}
