//! Clauses and their categories.
//!
//! A clause is one extracted contractual provision—a management fee rate, a
//! step-down schedule, an MFN grant. Clauses belong to exactly one document
//! and live inside it; resolution happens per clause category across all of
//! an investor's documents.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Globally unique clause identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClauseId(Uuid);

impl ClauseId {
    /// Creates a new random clause ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a clause ID from an existing UUID.
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

impl Default for ClauseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClauseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of a contractual provision—the resolution granularity.
///
/// The known variants are the categories the summary builder knows how to
/// format. Anything else rides through resolution untouched as
/// [`ClauseCategory::Other`]: it still gets a winner and an overridden list,
/// it just never shows up in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClauseCategory {
    /// Annual management fee rate.
    ManagementFee,
    /// Fee reduction after a threshold (time or commitment based).
    FeeStepDown,
    /// Most-favored-nation election rights.
    MostFavoredNation,
    /// Carried interest terms.
    CarryTerms,
    /// Preferred return / hurdle rate.
    PreferredReturn,
    /// Fee waiver or discount.
    FeeWaiver,
    /// Co-investment rights.
    CoInvestment,
    /// Any category the catalog does not know.
    Other(String),
}

impl ClauseCategory {
    /// Returns the canonical category label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ManagementFee => "Management Fee",
            Self::FeeStepDown => "Fee Step-Down",
            Self::MostFavoredNation => "MFN (Most Favored Nation)",
            Self::CarryTerms => "Carry Terms",
            Self::PreferredReturn => "Preferred Return",
            Self::FeeWaiver => "Fee Waiver/Discount",
            Self::CoInvestment => "Co-investment Rights",
            Self::Other(label) => label,
        }
    }

    /// Returns true if this category is in the known catalog.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for ClauseCategory {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Management Fee" => Self::ManagementFee,
            "Fee Step-Down" => Self::FeeStepDown,
            "MFN (Most Favored Nation)" => Self::MostFavoredNation,
            "Carry Terms" => Self::CarryTerms,
            "Preferred Return" => Self::PreferredReturn,
            "Fee Waiver/Discount" => Self::FeeWaiver,
            "Co-investment Rights" => Self::CoInvestment,
            _ => Self::Other(label),
        }
    }
}

impl From<&str> for ClauseCategory {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<ClauseCategory> for String {
    fn from(category: ClauseCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for ClauseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One extracted contractual provision.
///
/// All term fields are optional: an MFN clause has no rate, a step-down has
/// no standalone rate, and extraction may simply not have found a value.
/// Absent fields are sentinels in the resolution tie-breaks, never errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clause {
    /// Globally unique identifier.
    pub id: ClauseId,

    /// Category this clause belongs to.
    #[serde(rename = "clauseType")]
    pub category: ClauseCategory,

    /// Percentage rate (management fee, carry, preferred return).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,

    /// Discount percentage (step-downs, waivers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,

    /// Free-text threshold, e.g. "Year 4" or "Commitment >= $250M".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<String>,

    /// Numeric threshold where one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_amount: Option<f64>,

    /// Date the clause takes effect, when stated in the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,

    /// Section reference within the source document, e.g. "§4.2(b)".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_ref: Option<String>,

    /// Original clause text from the document.
    #[serde(rename = "clauseText", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Reviewer notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Page the clause was found on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
}

impl Clause {
    /// Creates a new clause in the given category with a fresh ID.
    #[must_use]
    pub fn new(category: impl Into<ClauseCategory>) -> Self {
        Self {
            id: ClauseId::new(),
            category: category.into(),
            rate: None,
            discount: None,
            threshold: None,
            threshold_amount: None,
            effective_date: None,
            section_ref: None,
            text: None,
            notes: None,
            page_number: None,
        }
    }

    /// Sets the percentage rate.
    #[must_use]
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the discount percentage.
    #[must_use]
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Sets the free-text threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: impl Into<String>) -> Self {
        self.threshold = Some(threshold.into());
        self
    }

    /// Sets the numeric threshold amount.
    #[must_use]
    pub fn with_threshold_amount(mut self, amount: f64) -> Self {
        self.threshold_amount = Some(amount);
        self
    }

    /// Sets the clause effective date.
    #[must_use]
    pub const fn with_effective_date(mut self, date: NaiveDate) -> Self {
        self.effective_date = Some(date);
        self
    }

    /// Sets the section reference.
    #[must_use]
    pub fn with_section_ref(mut self, section_ref: impl Into<String>) -> Self {
        self.section_ref = Some(section_ref.into());
        self
    }

    /// Sets the original clause text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets reviewer notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the page number.
    #[must_use]
    pub const fn with_page_number(mut self, page: u32) -> Self {
        self.page_number = Some(page);
        self
    }
}
