//! Static game data
//!
//! The vocabulary is embedded at build time from `data/words.txt`; the
//! snowman stages live in source.

mod embedded;
pub mod loader;
mod snowman;
mod vocabulary;

use crate::core::StageTable;

pub use embedded::{WORDS, WORDS_COUNT};
pub use snowman::SNOWMAN_STAGES;
pub use vocabulary::{Vocabulary, VocabularyError};

/// The snowman stage table
///
/// # Panics
/// Will not panic - `SNOWMAN_STAGES` is a constant with six stages.
#[must_use]
pub fn snowman_stages() -> StageTable {
    StageTable::new(SNOWMAN_STAGES.iter().copied()).expect("snowman has at least two stages")
}
