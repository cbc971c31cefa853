//! Embedded fallback quotes and random selection.
//!
//! Each variant carries a fixed table of `FALLBACK_LEN` quotes, built once on
//! first use and read-only afterwards. Selection goes through `RandomSource` so
//! callers can swap the thread RNG for a deterministic sequence.
use std::sync::LazyLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;

use crate::quote::{AuthorQuote, KuralQuote};

/// Number of entries in every fallback table.
pub const FALLBACK_LEN: usize = 5;

/// Source of indices for fallback selection.
pub trait RandomSource: Send + Sync {
    /// Return an index in `[0, len)`. `len` is never zero.
    fn next_index(&self, len: usize) -> usize;
}

/// Uniform selection backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Replays a fixed list of indices, wrapping around at the end.
///
/// Values larger than the table are reduced modulo its length.
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<usize>,
    cursor: AtomicUsize,
}

impl SequenceRandom {
    /// Create a source that yields `values` in order, forever.
    pub fn new(values: Vec<usize>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_index(&self, len: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let position = self.cursor.fetch_add(1, Ordering::Relaxed) % self.values.len();
        self.values[position] % len
    }
}

/// Fixed-size, ordered list of quotes.
#[derive(Debug)]
pub struct FallbackTable<Q> {
    entries: [Q; FALLBACK_LEN],
}

impl<Q> FallbackTable<Q> {
    /// Wrap a complete set of entries.
    pub const fn new(entries: [Q; FALLBACK_LEN]) -> Self {
        Self { entries }
    }

    /// All entries in table order.
    pub fn entries(&self) -> &[Q] {
        &self.entries
    }

    /// Pick one entry using `random`.
    pub fn pick(&self, random: &dyn RandomSource) -> &Q {
        let index = random.next_index(self.entries.len()) % self.entries.len();
        &self.entries[index]
    }
}

pub(crate) static KURAL_FALLBACK: LazyLock<FallbackTable<KuralQuote>> = LazyLock::new(|| {
    FallbackTable::new([
        kural(
            1,
            "அகர முதல எழுத்தெல்லாம் ஆதி\nபகவன் முதற்றே உலகு",
            "As the letter A is the first of all letters, so the eternal God is first in the world",
        ),
        kural(
            2,
            "கற்றதனால் ஆய பயனென்கொல் வாலறிவன்\nநற்றாள் தொழாஅர் எனின்",
            "What is the use of learning if one does not worship the feet of Him who is the source of all knowledge?",
        ),
        kural(
            3,
            "மலர்மிசை ஏகினான் மாணடி சேர்ந்தார்\nநிலமிசை நீடுவாழ் வார்",
            "Those who have reached the feet of Him who rides on the flower will live long on earth",
        ),
        kural(
            4,
            "வேண்டுதல் வேண்டாமை இலானடி சேர்ந்தார்க்கு\nயாண்டும் இடும்பை இல",
            "For those who have reached the feet of Him who is free from desire and aversion, there is no sorrow anywhere",
        ),
        kural(
            5,
            "இருள்சேர் இருவினையும் சேரா இறைவன்\nபொருள்சேர் புகழ்புரிந்தார் மாட்டு",
            "The two-fold deeds that dwell in darkness will not approach those who have attained the glory of the Lord",
        ),
    ])
});

pub(crate) static AUTHOR_FALLBACK: LazyLock<FallbackTable<AuthorQuote>> = LazyLock::new(|| {
    FallbackTable::new([
        author("Knowing yourself is the beginning of all wisdom.", "Aristotle"),
        author("The unexamined life is not worth living.", "Socrates"),
        author("Waste no more time arguing what a good man should be. Be one.", "Marcus Aurelius"),
        author("It does not matter how slowly you go as long as you do not stop.", "Confucius"),
        author("We suffer more often in imagination than in reality.", "Seneca"),
    ])
});

fn kural(number: u32, tamil: &str, explanation: &str) -> KuralQuote {
    KuralQuote {
        number,
        tamil: tamil.to_string(),
        explanation: explanation.to_string(),
    }
}

fn author(quote: &str, author: &str) -> AuthorQuote {
    AuthorQuote {
        quote: quote.to_string(),
        author: author.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::QuoteSchema;
    use std::collections::HashSet;

    #[test]
    fn tables_hold_valid_distinct_entries() {
        for (i, quote) in KuralQuote::fallback_table().entries().iter().enumerate() {
            assert_eq!(quote.number() as usize, i + 1);
            assert!(!quote.tamil().is_empty());
            assert!(!quote.explanation().is_empty());
        }
        let authors: HashSet<_> = AuthorQuote::fallback_table()
            .entries()
            .iter()
            .map(|q| q.author())
            .collect();
        assert_eq!(authors.len(), FALLBACK_LEN);
    }

    #[test]
    fn sequence_source_selects_exact_entries() {
        let random = SequenceRandom::new(vec![3, 0, 7]);
        let table = KuralQuote::fallback_table();
        assert_eq!(table.pick(&random).number(), 4);
        assert_eq!(table.pick(&random).number(), 1);
        // 7 % 5 == 2
        assert_eq!(table.pick(&random).number(), 3);
        assert_eq!(table.pick(&random).number(), 4);
    }

    #[test]
    fn thread_random_stays_in_range_and_covers_table() {
        let table = AuthorQuote::fallback_table();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let index = ThreadRandom.next_index(FALLBACK_LEN);
            assert!(index < FALLBACK_LEN);
            seen.insert(table.pick(&ThreadRandom).author().to_string());
        }
        assert_eq!(seen.len(), FALLBACK_LEN);
    }
}
