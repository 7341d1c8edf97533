//! Bounded Levenshtein distance for spelling correction.
//!
//! The candidate scan only needs to know whether a dictionary word lies within
//! the caller's threshold, so [`bounded_distance`] gives up as soon as the
//! distance provably exceeds it and reports the sentinel `max_dist + 1`.

use std::cmp::min;

/// Uncapped Levenshtein distance over a full matrix, used to check the bounded one.
#[cfg(test)]
pub(crate) fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let width = b.len() + 1;
    let mut matrix = vec![0; (a.len() + 1) * width];

    for i in 0..=a.len() {
        for j in 0..=b.len() {
            matrix[i * width + j] = match (i, j) {
                (0, j) => j,
                (i, 0) => i,
                (i, j) => {
                    let cost = usize::from(a[i - 1] != b[j - 1]);
                    (matrix[(i - 1) * width + j] + 1)
                        .min(matrix[i * width + j - 1] + 1)
                        .min(matrix[(i - 1) * width + j - 1] + cost)
                }
            };
        }
    }

    matrix[a.len() * width + b.len()]
}

/// Calculate the Levenshtein distance between `a` and `b`, capped at `max_dist`.
///
/// Returns the exact distance when it is `<= max_dist`. Anything further away
/// is reported as exactly `max_dist + 1`; callers must treat every value above
/// `max_dist` as "no match" rather than compare magnitudes. With
/// `max_dist == usize::MAX` nothing is ever too far and the exact distance is
/// returned.
///
/// ```
/// use fastspell::spelling::levenshtein::bounded_distance;
///
/// assert_eq!(bounded_distance("kitten", "sitting", 3), 3);
/// assert_eq!(bounded_distance("kitten", "sitting", 2), 3);
/// assert_eq!(bounded_distance("a", "abcd", 1), 2);
/// ```
pub fn bounded_distance(a: &str, b: &str, max_dist: usize) -> usize {
    if a.is_ascii() && b.is_ascii() {
        return bounded_distance_slices(a.as_bytes(), b.as_bytes(), max_dist);
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    bounded_distance_slices(&a_chars, &b_chars, max_dist)
}

/// [`bounded_distance`] over pre-decoded symbols (bytes of ASCII text, or chars).
pub fn bounded_distance_slices<T: PartialEq>(a: &[T], b: &[T], max_dist: usize) -> usize {
    let too_far = max_dist.saturating_add(1);

    if a.len().abs_diff(b.len()) > max_dist {
        return too_far;
    }

    // Two rolling rows over `b`; row i holds the cost of turning a[..i] into each prefix of b.
    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];

        for (j, cb) in b.iter().enumerate() {
            let insertion = curr_row[j] + 1;
            let deletion = prev_row[j + 1] + 1;
            let substitution = prev_row[j] + usize::from(ca != cb);

            curr_row[j + 1] = min(min(insertion, deletion), substitution);
            min_in_row = min(min_in_row, curr_row[j + 1]);
        }

        // Later rows are bounded below by this row's minimum.
        if min_in_row > max_dist {
            return too_far;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    min(prev_row[b.len()], too_far)
}

/// Scores many candidates against one query without re-decoding the query.
///
/// ASCII candidates against an ASCII query are compared byte by byte, so the
/// common case decodes nothing per candidate.
#[derive(Debug, Clone)]
pub struct LevenshteinMatcher {
    query: String,
    query_chars: Vec<char>,
    query_is_ascii: bool,
}

impl LevenshteinMatcher {
    /// Create a new matcher for the given query string.
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        let query_chars = query.chars().collect();
        let query_is_ascii = query.is_ascii();

        LevenshteinMatcher {
            query,
            query_chars,
            query_is_ascii,
        }
    }

    /// Get the original query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of characters in the query.
    pub fn query_len(&self) -> usize {
        self.query_chars.len()
    }

    /// Bounded distance to a candidate string, see [`bounded_distance`].
    pub fn distance(&self, candidate: &str, max_dist: usize) -> usize {
        if self.query_is_ascii && candidate.is_ascii() {
            return bounded_distance_slices(self.query.as_bytes(), candidate.as_bytes(), max_dist);
        }

        let candidate_chars: Vec<char> = candidate.chars().collect();
        bounded_distance_slices(&self.query_chars, &candidate_chars, max_dist)
    }

    /// Distance to a candidate if it lies within `max_dist`.
    pub fn distance_within(&self, candidate: &str, max_dist: usize) -> Option<usize> {
        let distance = self.distance(candidate, max_dist);
        (distance <= max_dist).then_some(distance)
    }

    /// Check if a candidate is within the given edit distance threshold.
    pub fn is_match(&self, candidate: &str, max_dist: usize) -> bool {
        self.distance_within(candidate, max_dist).is_some()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn random_word(rng: &mut StdRng, max_len: usize) -> String {
        let len = rng.random_range(0..=max_len);
        (0..len)
            .map(|_| (b'a' + rng.random_range(0..4u8)) as char)
            .collect()
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2); // no transpositions
    }

    #[test]
    fn test_bounded_distance() {
        assert_eq!(bounded_distance("kitten", "sitting", 3), 3);
        assert_eq!(bounded_distance("kitten", "sitting", 2), 3);
        assert_eq!(bounded_distance("search", "search", 0), 0);
        assert_eq!(bounded_distance("a", "abc", 1), 2);
        assert_eq!(bounded_distance("a", "ab", 1), 1);
        assert_eq!(bounded_distance("", "", 0), 0);
        assert_eq!(bounded_distance("", "ab", 2), 2);
        assert_eq!(bounded_distance("ct", "cat", 1), 1);
        assert_eq!(bounded_distance("ct", "ac", 1), 2);
    }

    #[test]
    fn test_bounded_distance_length_rejection() {
        // Fast path: the length gap alone rules the pair out.
        assert_eq!(bounded_distance("a", "abcdef", 2), 3);
        assert_eq!(bounded_distance("abcdef", "", 0), 1);
    }

    #[test]
    fn test_bounded_distance_clamps_final_row() {
        // Every row stays within the cap but the final cell does not.
        assert_eq!(levenshtein_distance("ab", "ba"), 2);
        assert_eq!(bounded_distance("ab", "ba", 1), 2);
        assert_eq!(bounded_distance("abcd", "dcba", 3), 4);
    }

    #[test]
    fn test_bounded_distance_counts_characters() {
        assert_eq!(bounded_distance("café", "cafe", 1), 1);
        assert_eq!(bounded_distance("naïve", "naive", 0), 1);
    }

    #[test]
    fn test_bounded_matches_uncapped() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..2000 {
            let a = random_word(&mut rng, 7);
            let b = random_word(&mut rng, 7);
            let max_dist = rng.random_range(0..4usize);
            let exact = levenshtein_distance(&a, &b);
            let bounded = bounded_distance(&a, &b, max_dist);

            if exact <= max_dist {
                assert_eq!(bounded, exact, "{a:?} vs {b:?} at {max_dist}");
            } else {
                assert_eq!(bounded, max_dist + 1, "{a:?} vs {b:?} at {max_dist}");
            }
            assert_eq!(bounded, bounded_distance(&b, &a, max_dist));
            assert_eq!(bounded_distance(&a, &a, max_dist), 0);
        }
    }

    #[test]
    fn test_unbounded_cap_does_not_overflow() {
        assert_eq!(bounded_distance("a", "b", usize::MAX), 1);
        assert_eq!(bounded_distance("kitten", "sitting", usize::MAX), 3);
        assert_eq!(bounded_distance("", "abc", usize::MAX), 3);
        assert_eq!(LevenshteinMatcher::new("a").distance_within("b", usize::MAX), Some(1));
    }

    #[test]
    fn test_ascii_and_char_paths_agree() {
        let matcher = LevenshteinMatcher::new("cafe");
        assert_eq!(matcher.distance("café", 2), 1);
        assert_eq!(matcher.distance("cafes", 2), 1);

        let matcher = LevenshteinMatcher::new("naïve");
        assert_eq!(matcher.distance("naive", 2), 1);
        assert_eq!(matcher.distance("naïve", 0), 0);

        let kitten: Vec<char> = "kitten".chars().collect();
        let sitting: Vec<char> = "sitting".chars().collect();
        assert_eq!(bounded_distance_slices(&kitten, &sitting, 3), 3);
        assert_eq!(bounded_distance_slices(b"kitten", b"sitting", 3), 3);
    }

    #[test]
    fn test_levenshtein_matcher() {
        let matcher = LevenshteinMatcher::new("search");

        assert_eq!(matcher.query(), "search");
        assert_eq!(matcher.query_len(), 6);
        assert_eq!(matcher.distance("search", 2), 0);
        assert_eq!(matcher.distance("serach", 2), 2);
        assert_eq!(matcher.distance("serach", 1), 2);
        assert_eq!(matcher.distance_within("serach", 1), None);
        assert_eq!(matcher.distance_within("serach", 2), Some(2));
        assert!(matcher.is_match("searches", 2));
        assert!(!matcher.is_match("completely_different", 2));
    }
}
