//! Rank type and the size of the binomial root table.
//!
//! A binomial tree of rank `r` holds exactly `2ʳ` keys, so a heap of `n`
//! elements only has resident trees of rank below `log₂(n) + 1`. Since `n`
//! can never exceed `usize::MAX`, a table of [`RANK_SLOTS`] = `usize::BITS`
//! slots covers every representable heap size. The bound follows the
//! platform instead of being a hardcoded ceiling.
//!
//! `u8` is plenty for the rank itself and keeps tree nodes small.

/// Type alias for binomial tree rank.
pub type Rank = u8;

/// Number of rank slots in a binomial heap's root table.
pub const RANK_SLOTS: usize = usize::BITS as usize;

/// Increment a rank after linking two trees, panicking if it leaves the table.
///
/// # Panics
///
/// Panics if the result would not fit in a root table of [`RANK_SLOTS`]
/// slots. That requires more than `usize::MAX` elements, so it signals a
/// broken heap rather than a large one.
///
/// # Example
///
/// ```rust
/// use counting_heaps::rank::{checked_increment, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_increment(rank), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    let next = rank
        .checked_add(1)
        .filter(|&next| usize::from(next) < RANK_SLOTS);
    match next {
        Some(next) => next,
        None => panic!("rank overflow: rank {rank} has no slot in a {RANK_SLOTS}-slot root table"),
    }
}
