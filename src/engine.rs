//! The terms engine—the seam between storage and resolution.
//!
//! `TermsEngine` fetches one investor's document snapshot from a store and
//! runs the conflict resolver over it. This is the call an HTTP handler
//! (or any other outer surface) makes; everything below it is pure.

use tracing::debug;

use crate::error::TermsResult;
use crate::investor::InvestorId;
use crate::resolver;
use crate::store::DocumentStore;
use crate::terms::EffectiveTerms;

/// Computes effective terms for investors backed by a document store.
///
/// The engine holds no state of its own beyond the store handle. Calls for
/// different investors need no coordination; calls for the same investor
/// are safe as long as the snapshot read is consistent, which the store
/// guarantees by cloning under its read lock.
#[derive(Debug)]
pub struct TermsEngine<S> {
    store: S,
}

impl<S: DocumentStore> TermsEngine<S> {
    /// Creates an engine over a document store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Resolves the effective terms for one investor.
    ///
    /// An investor with no documents (or an ID the store has never seen)
    /// resolves to the empty result; only storage failures are errors.
    pub fn effective_terms(&self, investor_id: InvestorId) -> TermsResult<EffectiveTerms> {
        let documents = self.store.find_by_investor(investor_id)?;
        debug!(
            %investor_id,
            documents = documents.len(),
            "resolving effective terms"
        );

        let resolved = resolver::resolve(&documents);
        debug!(
            %investor_id,
            categories = resolved.terms.len(),
            contested = resolved.overridden.len(),
            "resolution complete"
        );
        Ok(resolved)
    }
}
