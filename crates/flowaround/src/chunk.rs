//! Measurer-driven chunking of a paragraph into line fragments.
//!
//! Counts are in characters, matching the measurer contract. Slicing converts
//! them to byte offsets so multi-byte text never splits inside a code point.

use crate::layout::{Overflow, ELLIPSIS};
use crate::measure::{fitting_chars, TextMeasurer};

/// Byte offset of the character at `chars`, or the end of `text`
pub(crate) fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Move a fitted break point so it lands on a word boundary.
///
/// `fitted` is how many characters fit the line. The result is never 0 unless
/// `fitted` is 0, so a caller that consumes the result always makes progress.
pub fn word_safe_break(chars: &[char], fitted: usize) -> usize {
    let len = chars.len();
    if fitted == 0 || fitted >= len || chars[fitted - 1] == ' ' {
        return fitted;
    }

    // Absorb a space sitting right after the fitted prefix
    if chars[fitted] == ' ' {
        return fitted + 1;
    }

    // Index 0 is skipped: a break after a lone leading space makes an empty-looking line.
    (1..fitted - 1)
        .rev()
        .find(|&index| chars[index] == ' ')
        .map_or(fitted, |index| index + 1)
}

/// Characters of `text` to put on a non-final line of width `max_width`
pub fn chunk_size(measurer: &mut impl TextMeasurer, text: &str, max_width: f32) -> usize {
    let fitted = fitting_chars(measurer, text, max_width);
    let chars: Vec<char> = text.chars().collect();
    word_safe_break(&chars, fitted)
}

/// Final-line fragment of `text`.
///
/// Returns the fragment and whether anything was cut off.
pub fn last_chunk(
    measurer: &mut impl TextMeasurer,
    text: &str,
    max_width: f32,
    overflow: Overflow,
) -> (String, bool) {
    let len = text.chars().count();
    let fitted = fitting_chars(measurer, text, max_width);
    if fitted >= len {
        return (text.to_string(), false);
    }

    let fragment = match overflow {
        Overflow::Clip => text[..byte_offset(text, fitted)].to_string(),
        Overflow::Ellipsis => {
            // Too narrow for a base: the marker stands alone
            let base = fitted.saturating_sub(ELLIPSIS.chars().count());
            let mut fragment = text[..byte_offset(text, base)].to_string();
            fragment.push_str(ELLIPSIS);
            fragment
        }
    };
    (fragment, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::FixedAdvanceMeasurer;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_break_on_trailing_space() {
        // "abcde " fits exactly
        assert_eq!(word_safe_break(&chars("abcde fghij"), 6), 6);
    }

    #[test]
    fn test_break_absorbs_next_space() {
        // "abcde" fits, the following space joins this line
        assert_eq!(word_safe_break(&chars("abcde fghij"), 5), 6);
    }

    #[test]
    fn test_break_scans_back_to_space() {
        // "abcde fgh" fits, break after "abcde "
        assert_eq!(word_safe_break(&chars("abcde fghij"), 9), 6);
    }

    #[test]
    fn test_break_mid_word_without_space() {
        assert_eq!(word_safe_break(&chars("abcdefghij"), 4), 4);
        // A leading space alone is not a usable break
        assert_eq!(word_safe_break(&chars(" abcdefghij"), 4), 4);
    }

    #[test]
    fn test_break_boundaries() {
        assert_eq!(word_safe_break(&chars("abc"), 0), 0);
        assert_eq!(word_safe_break(&chars("abc"), 3), 3);
        assert_eq!(word_safe_break(&chars("a b"), 1), 2);
    }

    #[test]
    fn test_chunk_size_with_measurer() {
        let mut measurer = FixedAdvanceMeasurer::new(10.0);
        assert_eq!(chunk_size(&mut measurer, "abcde fghij", 60.0), 6);
        assert_eq!(chunk_size(&mut measurer, "abcde fghij", 80.0), 6);
        assert_eq!(chunk_size(&mut measurer, "abcde fghij", 200.0), 11);
        assert_eq!(chunk_size(&mut measurer, "abcde fghij", 0.0), 0);
    }

    #[test]
    fn test_last_chunk_fits() {
        let mut measurer = FixedAdvanceMeasurer::new(10.0);
        let (text, truncated) = last_chunk(&mut measurer, "fghij", 100.0, Overflow::Ellipsis);
        assert_eq!(text, "fghij");
        assert!(!truncated);
    }

    #[test]
    fn test_last_chunk_clip() {
        let mut measurer = FixedAdvanceMeasurer::new(10.0);
        let (text, truncated) = last_chunk(&mut measurer, "abcdefghij", 70.0, Overflow::Clip);
        assert_eq!(text, "abcdefg");
        assert!(truncated);
    }

    #[test]
    fn test_last_chunk_ellipsis() {
        let mut measurer = FixedAdvanceMeasurer::new(10.0);
        let (text, truncated) = last_chunk(&mut measurer, "abcdefghij", 70.0, Overflow::Ellipsis);
        assert_eq!(text, "abcd...");
        assert!(truncated);
    }

    #[test]
    fn test_last_chunk_ellipsis_too_narrow() {
        let mut measurer = FixedAdvanceMeasurer::new(10.0);
        let (text, _) = last_chunk(&mut measurer, "abcdefghij", 20.0, Overflow::Ellipsis);
        assert_eq!(text, "...");
        let (text, _) = last_chunk(&mut measurer, "abcdefghij", 0.0, Overflow::Clip);
        assert_eq!(text, "");
    }

    #[test]
    fn test_multibyte_slicing() {
        let mut measurer = FixedAdvanceMeasurer::new(10.0);
        let (text, _) = last_chunk(&mut measurer, "ééééééé", 50.0, Overflow::Clip);
        assert_eq!(text, "ééééé");
        assert_eq!(byte_offset("aé b", 2), 3);
        assert_eq!(byte_offset("ab", 5), 2);
    }
}
