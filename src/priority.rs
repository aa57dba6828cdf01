//! Document authority ranking.
//!
//! Every document carries an integer priority derived from its type. The
//! rank decides which clause wins when documents conflict: an Amendment
//! beats a Side Letter, a Side Letter beats a Subscription Agreement, and
//! everything beats the PPM. The rank is computed once when a document is
//! created and stored on it; the engine never recomputes it.

/// Rank of an Amendment.
pub const RANK_AMENDMENT: u8 = 4;
/// Rank of a Side Letter or Fee Schedule.
pub const RANK_SIDE_LETTER: u8 = 3;
/// Rank of a Subscription Agreement.
pub const RANK_SUBSCRIPTION: u8 = 2;
/// Rank of a PPM and of any unrecognized document type.
pub const RANK_BASELINE: u8 = 1;

/// Returns the authority rank for a document type.
///
/// Total function: an unrecognized type is not an error, it simply lands at
/// the lowest rank.
///
/// # Examples
///
/// ```
/// use termledger::priority::rank;
///
/// assert_eq!(rank("Amendment"), 4);
/// assert_eq!(rank("Side Letter"), 3);
/// assert_eq!(rank("Cocktail Napkin"), 1);
/// ```
#[must_use]
pub fn rank(doc_type: &str) -> u8 {
    match doc_type {
        "Amendment" => RANK_AMENDMENT,
        "Side Letter" | "Fee Schedule" => RANK_SIDE_LETTER,
        "Subscription Agreement" => RANK_SUBSCRIPTION,
        _ => RANK_BASELINE,
    }
}
