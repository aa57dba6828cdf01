//! Display summary of resolved terms.
//!
//! The overview screen shows a small fixed set of headline terms. Each
//! entry is only present when that exact category resolved to a winner;
//! unknown categories never appear here, they live only in the detailed
//! terms map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::clause::ClauseCategory;
use crate::terms::EffectiveTerm;

/// Placeholder shown when a term resolved but carries no displayable value.
const PLACEHOLDER: &str = "—";

/// One formatted summary entry with attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryEntry {
    /// Formatted display value, e.g. `"1.75%"` or `"Enabled"`.
    pub value: String,
    /// Title of the winning document.
    pub source: String,
    /// Type of the winning document.
    pub document_type: String,
}

impl SummaryEntry {
    fn new(value: String, term: &EffectiveTerm) -> Self {
        Self {
            value,
            source: term.source.document_title.clone(),
            document_type: term.source.document_type.clone(),
        }
    }
}

/// The fixed set of headline display entries.
///
/// Every field is optional; with no winners at all this serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsSummary {
    /// Management fee rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_fee: Option<SummaryEntry>,

    /// Fee step-down schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_step_down: Option<SummaryEntry>,

    /// MFN protection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfn_protection: Option<SummaryEntry>,

    /// Carried interest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carry_terms: Option<SummaryEntry>,

    /// Preferred return / hurdle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_return: Option<SummaryEntry>,

    /// Fee waiver or discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_waiver: Option<SummaryEntry>,

    /// Co-investment rights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co_investment: Option<SummaryEntry>,
}

impl TermsSummary {
    /// Projects the winners map into the fixed display entries.
    #[must_use]
    pub fn build(terms: &BTreeMap<ClauseCategory, EffectiveTerm>) -> Self {
        Self {
            management_fee: terms
                .get(&ClauseCategory::ManagementFee)
                .map(|t| SummaryEntry::new(format_rate(t.rate), t)),
            fee_step_down: terms
                .get(&ClauseCategory::FeeStepDown)
                .map(|t| SummaryEntry::new(format_step_down(t), t)),
            mfn_protection: terms
                .get(&ClauseCategory::MostFavoredNation)
                .map(|t| SummaryEntry::new("Enabled".to_string(), t)),
            carry_terms: terms
                .get(&ClauseCategory::CarryTerms)
                .map(|t| SummaryEntry::new(format_rate(t.rate), t)),
            preferred_return: terms
                .get(&ClauseCategory::PreferredReturn)
                .map(|t| SummaryEntry::new(format_rate(t.rate), t)),
            fee_waiver: terms
                .get(&ClauseCategory::FeeWaiver)
                .map(|t| SummaryEntry::new(format_waiver(t.discount), t)),
            co_investment: terms
                .get(&ClauseCategory::CoInvestment)
                .map(|t| SummaryEntry::new("Enabled".to_string(), t)),
        }
    }

    /// Returns true if no entry is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.management_fee.is_none()
            && self.fee_step_down.is_none()
            && self.mfn_protection.is_none()
            && self.carry_terms.is_none()
            && self.preferred_return.is_none()
            && self.fee_waiver.is_none()
            && self.co_investment.is_none()
    }
}

/// Renders a rate or discount the way the upstream extraction pipeline
/// displays floats: whole numbers keep one decimal place (`20.0`, not `20`),
/// everything else prints at its natural precision.
fn display_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// `"<rate>%"` when a rate is present, placeholder otherwise.
fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{}%", display_number(rate)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Step-down rendering: both fields, discount alone, threshold alone, or
/// the placeholder. The leading sign is a real minus (U+2212).
fn format_step_down(term: &EffectiveTerm) -> String {
    let threshold = term.threshold.as_deref().filter(|t| !t.is_empty());
    match (term.discount, threshold) {
        (Some(discount), Some(threshold)) => {
            format!("−{}% at {threshold}", display_number(discount))
        }
        (Some(discount), None) => format!("−{}%", display_number(discount)),
        (None, Some(threshold)) => threshold.to_string(),
        (None, None) => PLACEHOLDER.to_string(),
    }
}

/// `"<discount>% discount"` or the placeholder.
fn format_waiver(discount: Option<f64>) -> String {
    match discount {
        Some(discount) => format!("{}% discount", display_number(discount)),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;
    use crate::clause::Clause;
    use crate::document::Document;
    use crate::investor::InvestorId;
    use crate::supersession::SupersessionIndex;

    fn winners(clauses: Vec<Clause>) -> BTreeMap<ClauseCategory, EffectiveTerm> {
        let investor = InvestorId::new();
        let doc = Document::new(investor, "Side Letter - Test", "Side Letter")
            .with_clauses(clauses);
        let index = SupersessionIndex::build(std::slice::from_ref(&doc));
        doc.clauses
            .iter()
            .map(|clause| {
                let candidate = Candidate::new(clause, &doc, &index);
                (clause.category.clone(), EffectiveTerm::from_winner(&candidate))
            })
            .collect()
    }

    #[test]
    fn test_rate_categories() {
        let summary = TermsSummary::build(&winners(vec![
            Clause::new("Management Fee").with_rate(1.75),
            Clause::new("Carry Terms").with_rate(20.0),
            Clause::new("Preferred Return"),
        ]));

        assert_eq!(summary.management_fee.unwrap().value, "1.75%");
        assert_eq!(summary.carry_terms.unwrap().value, "20.0%");
        // Resolved but no rate extracted: placeholder, not an error.
        assert_eq!(summary.preferred_return.unwrap().value, "—");
    }

    #[test]
    fn test_whole_number_values_keep_decimal() {
        let summary = TermsSummary::build(&winners(vec![
            Clause::new("Carry Terms").with_rate(20.0),
            Clause::new("Preferred Return").with_rate(8.0),
            Clause::new("Fee Step-Down").with_discount(1.0).with_threshold("Year 5"),
            Clause::new("Fee Waiver/Discount").with_discount(10.0),
        ]));

        assert_eq!(summary.carry_terms.unwrap().value, "20.0%");
        assert_eq!(summary.preferred_return.unwrap().value, "8.0%");
        assert_eq!(summary.fee_step_down.unwrap().value, "−1.0% at Year 5");
        assert_eq!(summary.fee_waiver.unwrap().value, "10.0% discount");
    }

    #[test]
    fn test_step_down_variants() {
        let both = TermsSummary::build(&winners(vec![Clause::new("Fee Step-Down")
            .with_discount(0.25)
            .with_threshold("Year 4")]));
        assert_eq!(both.fee_step_down.unwrap().value, "−0.25% at Year 4");

        let discount_only = TermsSummary::build(&winners(vec![
            Clause::new("Fee Step-Down").with_discount(0.25)
        ]));
        assert_eq!(discount_only.fee_step_down.unwrap().value, "−0.25%");

        let threshold_only = TermsSummary::build(&winners(vec![
            Clause::new("Fee Step-Down").with_threshold("Year 4")
        ]));
        assert_eq!(threshold_only.fee_step_down.unwrap().value, "Year 4");

        let neither = TermsSummary::build(&winners(vec![Clause::new("Fee Step-Down")]));
        assert_eq!(neither.fee_step_down.unwrap().value, "—");
    }

    #[test]
    fn test_presence_only_categories() {
        let summary = TermsSummary::build(&winners(vec![
            Clause::new("MFN (Most Favored Nation)"),
            Clause::new("Co-investment Rights"),
        ]));
        assert_eq!(summary.mfn_protection.unwrap().value, "Enabled");
        assert_eq!(summary.co_investment.unwrap().value, "Enabled");
    }

    #[test]
    fn test_fee_waiver() {
        let summary =
            TermsSummary::build(&winners(vec![Clause::new("Fee Waiver/Discount")
                .with_discount(0.5)]));
        assert_eq!(summary.fee_waiver.unwrap().value, "0.5% discount");
    }

    #[test]
    fn test_unknown_category_excluded() {
        let summary =
            TermsSummary::build(&winners(vec![Clause::new("Key Person Provision")]));
        assert!(summary.is_empty());
    }

    #[test]
    fn test_attribution() {
        let summary = TermsSummary::build(&winners(vec![
            Clause::new("Management Fee").with_rate(1.5)
        ]));
        let entry = summary.management_fee.unwrap();
        assert_eq!(entry.source, "Side Letter - Test");
        assert_eq!(entry.document_type, "Side Letter");
    }

    #[test]
    fn test_empty_serializes_as_empty_object() {
        let summary = TermsSummary::default();
        assert!(summary.is_empty());
        assert_eq!(serde_json::to_value(&summary).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_wire_keys() {
        let summary = TermsSummary::build(&winners(vec![
            Clause::new("Management Fee").with_rate(1.75),
            Clause::new("MFN (Most Favored Nation)"),
        ]));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["managementFee"]["value"], "1.75%");
        assert_eq!(json["mfnProtection"]["value"], "Enabled");
        assert_eq!(json["managementFee"]["documentType"], "Side Letter");
        assert!(json.get("feeStepDown").is_none());
    }
}
