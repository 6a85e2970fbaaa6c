//! Run-length coding of amino-acid chains.
//!
//! An encoded chain is a sequence of tokens, each an optional decimal count
//! followed by one uppercase letter: `3A2BC` is `AAABBC`. Anything that is not
//! part of a token is ignored when decoding.

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref RLE_TOKEN: Regex = Regex::new(r"([0-9]*)([A-Z])").expect("valid RLE token regex");
}

/// Longest chain `decode` will materialise, in residues.
pub const MAX_DECODED_LEN: usize = 1 << 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Run length '{count}' for '{letter}' is too large")]
    CountOverflow { count: String, letter: char },
}

/// Parses a decimal run length of any textual width. Leading zeros are
/// insignificant, so only the significant digits have to fit into `usize`.
fn parse_count(digits: &str, letter: char) -> Result<usize, CodecError> {
    if digits.is_empty() {
        return Ok(1);
    }
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Ok(0);
    }
    significant
        .parse::<usize>()
        .map_err(|_| CodecError::CountOverflow {
            count: digits.to_string(),
            letter,
        })
}

pub fn decode(encoded: &str) -> Result<String, CodecError> {
    let mut runs = Vec::new();
    let mut total: usize = 0;
    for caps in RLE_TOKEN.captures_iter(encoded) {
        let letter = caps[2].chars().next().unwrap_or_default();
        let count = parse_count(&caps[1], letter)?;
        total = total
            .checked_add(count)
            .filter(|&total| total <= MAX_DECODED_LEN)
            .ok_or_else(|| CodecError::CountOverflow {
                count: caps[1].to_string(),
                letter,
            })?;
        runs.push((letter, count));
    }

    let mut decoded = String::with_capacity(total);
    for (letter, count) in runs {
        decoded.extend(std::iter::repeat_n(letter, count));
    }
    Ok(decoded)
}

/// Maximal runs of identical characters, in order.
pub fn runs(chain: &str) -> impl Iterator<Item = (char, usize)> + '_ {
    chain
        .chars()
        .dedup_with_count()
        .map(|(count, letter)| (letter, count))
}

pub fn encode(chain: &str) -> String {
    let mut encoded = String::new();
    for (letter, count) in runs(chain) {
        if count > 1 {
            encoded.push_str(&count.to_string());
        }
        encoded.push(letter);
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_counts_and_bare_letters() {
        assert_eq!(decode("3A2B C").unwrap(), "AAABBC");
        assert_eq!(decode("A12B").unwrap(), "ABBBBBBBBBBBB");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("").unwrap(), "");
        assert_eq!(decode("  \t42").unwrap(), "");
    }

    #[test]
    fn test_decode_ignores_non_token_characters() {
        // Lowercase letters never form a token, and digits cling to the next letter.
        assert_eq!(decode("2a-B").unwrap(), "B");
        assert_eq!(decode("2-3C").unwrap(), "CCC");
        assert_eq!(decode("x2Yz").unwrap(), "YY");
    }

    #[test]
    fn test_decode_zero_and_padded_counts() {
        assert_eq!(decode("0AB").unwrap(), "B");
        assert_eq!(decode("0003C").unwrap(), "CCC");
        assert_eq!(
            decode("00000000000000000000000000000002D").unwrap(),
            "DD"
        );
    }

    #[test]
    fn test_decode_rejects_unrepresentable_count() {
        let err = decode("A99999999999999999999999999999B").unwrap_err();
        assert!(matches!(err, CodecError::CountOverflow { letter: 'B', .. }));
    }

    #[test]
    fn test_decode_rejects_count_beyond_residue_limit() {
        let err = decode("9999999999999999999A").unwrap_err();
        assert!(matches!(err, CodecError::CountOverflow { letter: 'A', .. }));
        assert!(decode("2000000000W").is_err());
        assert!(decode(&format!("{}A", MAX_DECODED_LEN + 1)).is_err());
    }

    #[test]
    fn test_decode_limit_applies_to_whole_chain() {
        let half = MAX_DECODED_LEN / 2 + 1;
        let err = decode(&format!("{half}A{half}B")).unwrap_err();
        assert_eq!(
            err,
            CodecError::CountOverflow {
                count: half.to_string(),
                letter: 'B'
            }
        );
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode("AAABBC"), "3A2BC");
        assert_eq!(encode("ABC"), "ABC");
        assert_eq!(encode(&"W".repeat(120)), "120W");
        assert_eq!(encode(""), "");
    }

    #[test]
    fn test_runs() {
        let runs: Vec<_> = runs("MMKKKA").collect();
        assert_eq!(runs, vec![('M', 2), ('K', 3), ('A', 1)]);
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(chain in "[A-Z]{0,64}") {
            prop_assert_eq!(decode(&encode(&chain)).unwrap(), chain);
        }
    }
}
