//! Meltdown stage table
//!
//! The stage table is the single source of truth for how many mistakes a
//! round allows: one image per mistake count, from zero up to the loss.

use thiserror::Error;

/// Ordered meltdown images, index = mistakes made so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTable {
    stages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageTableError {
    #[error("Stage table needs at least 2 stages, got {0}")]
    TooFewStages(usize),
}

impl StageTable {
    /// Create a stage table from an ordered list of images
    ///
    /// # Errors
    /// Returns `StageTableError::TooFewStages` unless there is a starting
    /// stage and at least one melted stage, so a fresh round is never
    /// already lost.
    pub fn new<I, S>(stages: I) -> Result<Self, StageTableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stages: Vec<String> = stages.into_iter().map(Into::into).collect();
        if stages.len() < 2 {
            return Err(StageTableError::TooFewStages(stages.len()));
        }
        Ok(Self { stages })
    }

    /// Number of stages
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always `false`; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Mistakes that end the round
    ///
    /// # Examples
    /// ```
    /// use snowman_meltdown::core::StageTable;
    ///
    /// let table = StageTable::new(["full", "half", "gone"]).unwrap();
    /// assert_eq!(table.max_mistakes(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn max_mistakes(&self) -> usize {
        self.stages.len() - 1
    }

    /// Image for the given mistake count, clamped to the final stage
    #[must_use]
    pub fn stage(&self, mistakes: usize) -> &str {
        &self.stages[mistakes.min(self.max_mistakes())]
    }

    /// The fully melted image shown on a loss
    #[must_use]
    pub fn final_stage(&self) -> &str {
        self.stage(self.max_mistakes())
    }
}
