/// The most frequent English letter bigrams.
///
/// Human-chosen tokens tend to contain several of these; machine-generated
/// tokens tend to contain almost none.
pub const COMMON_BIGRAMS: [(char, char); 10] = [
    ('t', 'h'),
    ('h', 'e'),
    ('i', 'n'),
    ('e', 'r'),
    ('a', 'n'),
    ('r', 'e'),
    ('e', 'd'),
    ('n', 'd'),
    ('h', 'a'),
    ('t', 'o'),
];

/// Counts adjacent character pairs of a token that appear in
/// [`COMMON_BIGRAMS`]. Matching is case-sensitive; callers lowercase first.
pub fn common_bigram_count(token: &str) -> usize {
    let mut count = 0;
    let mut chars = token.chars();
    let Some(mut prev) = chars.next() else {
        return 0;
    };

    for ch in chars {
        if COMMON_BIGRAMS.contains(&(prev, ch)) {
            count += 1;
        }
        prev = ch;
    }

    count
}
