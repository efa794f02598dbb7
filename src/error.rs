//! Errors surfaced by the trees in this crate.
//!
//! Missing keys are not errors: lookups report absence with `false` or `None`.

/// Failures that can't be expressed as a plain "not found".
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Order statistics are 1-based so `rank` must be in `1..=len`.
    #[error("rank {rank} is out of range for a tree holding {len} keys")]
    RankOutOfRange {
        /// The requested rank.
        rank: usize,
        /// How many keys the tree held when it was asked.
        len: usize,
    },
}
