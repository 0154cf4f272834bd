// ============================================================
// Layer 4 — Character Encoder
// ============================================================
// Turns an occupation string into a fixed-length sequence of
// small integers the embedding layer can look up.
//
// Index layout:
//   0      → unknown character (anything not in ALPHABET)
//   1      → padding
//   2..=70 → ALPHABET[0..69], in the order listed below
//
// Encoding steps (applied in order):
//   1. Map each char to its index, or 0 if unknown
//   2. Keep at most max_len indices (the prefix survives)
//   3. Right-pad with 1 until the length is exactly max_len
//
// "hi" with max_len = 8 becomes [38, 39, 1, 1, 1, 1, 1, 1].
//
// No lowercasing, trimming or normalisation happens here:
// "Farmer" and "farmer" encode differently on purpose, the
// capital F is simply unknown.
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

use std::collections::HashMap;
use std::sync::LazyLock;

/// Index emitted for characters outside [`ALPHABET`].
pub const UNKNOWN_INDEX: u32 = 0;

/// Index used to right-pad short sequences.
pub const PAD_INDEX: u32 = 1;

/// Index assigned to `ALPHABET[0]`.
pub const FIRST_CHAR_INDEX: u32 = 2;

/// Sequence length used by the dataset.
pub const MAX_SEQ_LEN: usize = 32;

/// Every character the encoder recognises, in index order.
///
/// This is the character set observed in the occupation data,
/// including the mojibake fragments (`Â`, `Ã`, `â`, ...) left
/// behind by mis-decoded UTF-8 in the source files.
pub const ALPHABET: [char; 69] = [
    ' ', '"', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    ':', ';', '?', '@', '[', ']', '_', '`',
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    '{',
    '\u{a2}',   // ¢
    '\u{a3}',   // £
    '\u{a9}',   // ©
    '\u{ac}',   // ¬
    '\u{c2}',   // Â
    '\u{c3}',   // Ã
    '\u{e2}',   // â
    '\u{153}',  // œ
    '\u{161}',  // š
    '\u{17e}',  // ž
    '\u{201a}', // ‚ single low-9 quotation mark
    '\u{201e}', // „ double low-9 quotation mark
    '\u{20ac}', // €
];

// Built on first use, read-only afterwards.
static CHAR_TO_INDEX: LazyLock<HashMap<char, u32>> = LazyLock::new(|| {
    ALPHABET
        .iter()
        .zip(FIRST_CHAR_INDEX..)
        .map(|(&c, idx)| (c, idx))
        .collect()
});

/// Largest index the encoder can produce (70).
///
/// An embedding table must have more rows than this.
pub const fn max_index() -> u32 {
    FIRST_CHAR_INDEX + ALPHABET.len() as u32 - 1
}

/// Index of a single alphabet character, `None` if unknown.
pub fn char_index(c: char) -> Option<u32> {
    CHAR_TO_INDEX.get(&c).copied()
}

/// Encode `text` into exactly `max_len` indices.
///
/// Total over every input: unknown characters become
/// [`UNKNOWN_INDEX`], the empty string becomes all padding and
/// `max_len == 0` yields an empty vector.
pub fn encode(text: &str, max_len: usize) -> Vec<u32> {
    let mut encoded: Vec<u32> = text
        .chars()
        .take(max_len)
        .map(|c| char_index(c).unwrap_or(UNKNOWN_INDEX))
        .collect();

    encoded.resize(max_len, PAD_INDEX);
    encoded
}

/// Render an encoded sequence back into text.
///
/// Padding is dropped and unknown positions show up as
/// `U+FFFD`, so the result is only useful for logs and debugging.
pub fn decode(ids: &[u32]) -> String {
    ids.iter()
        .filter(|&&id| id != PAD_INDEX)
        .map(|&id| match id {
            UNKNOWN_INDEX => char::REPLACEMENT_CHARACTER,
            id => ALPHABET
                .get((id - FIRST_CHAR_INDEX) as usize)
                .copied()
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        })
        .collect()
}

// ─── CharEncoder ──────────────────────────────────────────────────────────────
/// [`encode`] with its sequence length fixed.
///
/// The dataset holds one of these as its tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharEncoder {
    max_len: usize,
}

impl CharEncoder {
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn encode(&self, text: &str) -> Vec<u32> {
        encode(text, self.max_len)
    }
}

impl Default for CharEncoder {
    fn default() -> Self {
        Self::new(MAX_SEQ_LEN)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn idx(c: char) -> u32 {
        char_index(c).expect("char should be in the alphabet")
    }

    #[test]
    fn test_known_indices() {
        assert_eq!(idx(' '), 2);
        assert_eq!(idx('a'), 31);
        assert_eq!(idx('h'), 38);
        assert_eq!(idx('i'), 39);
        assert_eq!(idx('\u{20ac}'), 70);
        assert_eq!(max_index(), 70);
    }

    #[test]
    fn test_hi_with_max_len_8() {
        assert_eq!(encode("hi", 8), vec![38, 39, 1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_empty_string_is_all_padding() {
        assert_eq!(encode("", MAX_SEQ_LEN), vec![PAD_INDEX; MAX_SEQ_LEN]);
    }

    #[test]
    fn test_zero_max_len() {
        assert!(encode("farmer", 0).is_empty());
    }

    #[test]
    fn test_length_is_always_max_len() {
        let long = "agricultural labourer and part-time blacksmith";
        for text in ["", "x", "farmer", long, "ÄÖÜ unknown ÿ"] {
            assert_eq!(encode(text, MAX_SEQ_LEN).len(), MAX_SEQ_LEN, "{text:?}");
        }
    }

    #[test]
    fn test_short_strings_are_lookup_then_padding() {
        let text    = "weaver's wife (2)";
        let encoded = encode(text, MAX_SEQ_LEN);
        let n       = text.chars().count();

        let expected: Vec<u32> = text.chars().map(idx).collect();
        assert_eq!(&encoded[..n], expected.as_slice());
        assert!(encoded[n..].iter().all(|&id| id == PAD_INDEX));
    }

    #[test]
    fn test_long_strings_keep_prefix() {
        let text:   String = "master carpenter and joiner, journeyman".into();
        let prefix: String = text.chars().take(MAX_SEQ_LEN).collect();
        assert!(text.chars().count() > MAX_SEQ_LEN);
        assert_eq!(encode(&text, MAX_SEQ_LEN), encode(&prefix, MAX_SEQ_LEN));
    }

    #[test]
    fn test_alphabet_indices_are_distinct_and_contiguous() {
        let indices: HashSet<u32> = ALPHABET.iter().map(|&c| idx(c)).collect();
        assert_eq!(indices.len(), ALPHABET.len());
        assert_eq!(indices.iter().min(), Some(&FIRST_CHAR_INDEX));
        assert_eq!(indices.iter().max(), Some(&max_index()));

        for &c in ALPHABET.iter() {
            assert_eq!(encode(&c.to_string(), MAX_SEQ_LEN)[0], idx(c));
        }
    }

    #[test]
    fn test_unknown_characters_map_to_zero() {
        for c in ['A', 'Z', 'é', '\t', '\n', '!', '🙂'] {
            assert_eq!(char_index(c), None);
            assert_eq!(encode(&c.to_string(), MAX_SEQ_LEN)[0], UNKNOWN_INDEX);
        }
    }

    #[test]
    fn test_multibyte_chars_count_as_one_position() {
        // "£5" is three bytes but two positions
        assert_eq!(encode("£5", 4), vec![idx('£'), idx('5'), 1, 1]);
    }

    #[test]
    fn test_decode_drops_padding() {
        assert_eq!(decode(&encode("miner", 10)), "miner");
        assert_eq!(decode(&encode("Miner", 10)), "\u{fffd}iner");
    }

    #[test]
    fn test_char_encoder_default_length() {
        let encoder = CharEncoder::default();
        assert_eq!(encoder.max_len(), MAX_SEQ_LEN);
        assert_eq!(encoder.encode("smith"), encode("smith", MAX_SEQ_LEN));
    }
}
