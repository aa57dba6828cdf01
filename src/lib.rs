//! # Termledger - effective terms across conflicting legal documents
//!
//! An investor's contractual terms—fees, carry, MFN rights, discounts—are
//! scattered across PPMs, subscription agreements, side letters, fee
//! schedules, and amendments, and those documents routinely contradict
//! each other. Termledger resolves the contradictions: given one
//! investor's document set, it decides per clause category which clause
//! currently governs, which clauses it overrides, and why.
//!
//! ## Core Concepts
//!
//! - **Document**: one legal instrument, with a type-derived authority
//!   rank, an optional effective date, and an optional link to a document
//!   it supersedes
//! - **Clause**: one extracted provision, owned by its document
//! - **Candidate**: a clause viewed through its document's authority,
//!   alive only during a resolution call
//! - **EffectiveTerms**: the structured answer—winners, overridden losers
//!   with reasons, and a display summary
//!
//! ## Usage
//!
//! ```rust
//! use termledger::{Clause, Document, Investor, MemoryStore, TermsEngine};
//! use termledger::store::{DocumentStore, InvestorStore};
//!
//! let store = MemoryStore::new();
//! let investor = Investor::new("Meridian Family Office");
//! let investor_id = investor.id;
//! InvestorStore::insert(&store, investor)?;
//!
//! let ppm = Document::new(investor_id, "Fund IV PPM", "PPM")
//!     .with_clause(Clause::new("Management Fee").with_rate(2.0));
//! let side_letter = Document::new(investor_id, "Side Letter", "Side Letter")
//!     .with_clause(Clause::new("Management Fee").with_rate(1.75));
//! DocumentStore::insert(&store, ppm)?;
//! DocumentStore::insert(&store, side_letter)?;
//!
//! let engine = TermsEngine::new(store);
//! let resolved = engine.effective_terms(investor_id)?;
//! assert_eq!(resolved.summary.management_fee.unwrap().value, "1.75%");
//! # Ok::<(), termledger::TermsError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod candidate;
pub mod clause;
pub mod document;
pub mod engine;
pub mod error;
pub mod investor;
pub mod priority;
pub mod resolver;
pub mod store;
pub mod summary;
pub mod supersession;
pub mod terms;

// Re-export primary types at crate root for convenience
pub use clause::{Clause, ClauseCategory, ClauseId};
pub use document::{Document, DocumentId, DocumentStatus};
pub use engine::TermsEngine;
pub use error::{TermsError, TermsResult, ValidationError};
pub use investor::{Investor, InvestorId};
pub use resolver::resolve;
pub use store::{DocumentStore, InvestorStore, MemoryStore, StorageError};
pub use summary::{SummaryEntry, TermsSummary};
pub use supersession::SupersessionIndex;
pub use terms::{EffectiveTerm, EffectiveTerms, OverriddenTerm, TermSource};
