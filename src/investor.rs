//! Investor identity and profile.
//!
//! The investor is the aggregation key for documents: one resolution call
//! always scopes to a single investor's document set. The engine reads
//! investors, it never mutates them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Globally unique, stable investor identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvestorId(Uuid);

impl InvestorId {
    /// Creates a new random investor ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an investor ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Creates a nil investor ID (for testing or sentinel values).
    #[must_use]
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for InvestorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvestorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for InvestorId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<InvestorId> for Uuid {
    fn from(id: InvestorId) -> Self {
        id.0
    }
}

/// An investor—LP, family office, institution.
///
/// Documents attach to investors via [`InvestorId`]. The descriptive fields
/// exist for display and bookkeeping; none of them participate in term
/// resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    /// Globally unique identifier.
    pub id: InvestorId,

    /// Legal or display name.
    pub name: String,

    /// Classification such as "LP", "Family Office", "Institutional".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investor_type: Option<String>,

    /// Committed capital, in `currency` units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitment_amount: Option<f64>,

    /// ISO currency code for the commitment.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Fund the commitment belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fund: Option<String>,

    /// Free-form relationship notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Investor {
    /// Creates a new investor with a fresh ID.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: InvestorId::new(),
            name: name.into(),
            investor_type: None,
            commitment_amount: None,
            currency: default_currency(),
            fund: None,
            notes: None,
        }
    }

    /// Sets the investor type.
    #[must_use]
    pub fn with_type(mut self, investor_type: impl Into<String>) -> Self {
        self.investor_type = Some(investor_type.into());
        self
    }

    /// Sets the commitment amount.
    #[must_use]
    pub fn with_commitment(mut self, amount: f64) -> Self {
        self.commitment_amount = Some(amount);
        self
    }

    /// Sets the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the fund.
    #[must_use]
    pub fn with_fund(mut self, fund: impl Into<String>) -> Self {
        self.fund = Some(fund.into());
        self
    }

    /// Sets relationship notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_investor_id_unique() {
        assert_ne!(InvestorId::new(), InvestorId::new());
    }

    #[test]
    fn test_investor_id_roundtrip() {
        let uuid = Uuid::new_v4();
        let id = InvestorId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
        assert_eq!(Uuid::from(id), uuid);
    }

    #[test]
    fn test_investor_builder() {
        let investor = Investor::new("Meridian Family Office")
            .with_type("Family Office")
            .with_commitment(250_000_000.0)
            .with_fund("Fund IV");

        assert_eq!(investor.name, "Meridian Family Office");
        assert_eq!(investor.investor_type.as_deref(), Some("Family Office"));
        assert_eq!(investor.currency, "USD");
        assert_eq!(investor.fund.as_deref(), Some("Fund IV"));
    }

    #[test]
    fn test_investor_serialization() {
        let investor = Investor::new("Apex Capital").with_type("LP");
        let json = serde_json::to_value(&investor).unwrap();
        assert_eq!(json["name"], "Apex Capital");
        assert_eq!(json["investorType"], "LP");
        // Absent optionals are omitted from the wire form.
        assert!(json.get("commitmentAmount").is_none());

        let back: Investor = serde_json::from_value(json).unwrap();
        assert_eq!(back, investor);
    }
}
