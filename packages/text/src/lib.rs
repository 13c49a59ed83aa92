//! Pure text processing for the readcoach backend.
//!
//! Everything in this crate is a synchronous function over strings:
//! Unicode/whitespace normalization, rule-based sentence and word
//! segmentation, and the pronunciation scorer. No I/O, no shared state,
//! safe to call concurrently from any number of request handlers.

pub mod normalize;
pub mod scorer;
pub mod segment;

pub use normalize::{normalize, tokenize};
pub use scorer::score_pronunciation;
pub use segment::segment;
