//! Statistics and recommendation engine.
//!
//! Everything here is a pure function of a borrowed record slice: nothing is
//! mutated, nothing is persisted, and bad data degrades to partial results
//! instead of errors.

pub mod aggregator;
pub mod champion_stats;
pub mod filter;
pub mod matchups;
pub mod profile;
pub mod recommender;

/// `numerator / denominator` rounded half up. `denominator` must be non-zero.
pub(crate) fn round_div(numerator: u64, denominator: u64) -> u64 {
    (2 * numerator + denominator) / (2 * denominator)
}

/// Whole-number percentage, rounded half up; 0 for an empty sample.
pub(crate) fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        round_div(part as u64 * 100, whole as u64) as u32
    }
}
