//! Random word selection

use super::WordSource;
use crate::assets::Vocabulary;
use crate::core::SecretWord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Word source drawing uniformly at random from the vocabulary
pub struct RandomWordSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomWordSource<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomWordSource<StdRng> {
    /// Reproducible selection for a given seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeded from the operating system
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> WordSource for RandomWordSource<R> {
    fn choose<'v>(&mut self, vocabulary: &'v Vocabulary) -> &'v SecretWord {
        let words = vocabulary.words();
        &words[self.rng.random_range(0..words.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::loader::words_from_slice;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(words_from_slice(&[
            "python", "git", "github", "snowman", "meltdown",
        ]))
        .unwrap()
    }

    #[test]
    fn same_seed_same_words() {
        let vocabulary = vocabulary();
        let mut first = RandomWordSource::seeded(42);
        let mut second = RandomWordSource::seeded(42);

        for _ in 0..20 {
            assert_eq!(first.choose(&vocabulary), second.choose(&vocabulary));
        }
    }

    #[test]
    fn every_word_can_be_drawn() {
        let vocabulary = vocabulary();
        let mut source = RandomWordSource::seeded(7);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            seen.insert(source.choose(&vocabulary).text().to_string());
        }

        assert_eq!(seen.len(), vocabulary.len());
    }

    #[test]
    fn single_word_vocabulary() {
        let vocabulary = Vocabulary::new(words_from_slice(&["git"])).unwrap();
        let mut source = RandomWordSource::from_entropy();
        assert_eq!(source.choose(&vocabulary).text(), "git");
    }
}
