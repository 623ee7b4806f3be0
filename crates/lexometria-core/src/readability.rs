//! Readability scoring using the Portuguese adaptation of Flesch Reading Ease.
//!
//! Formula: `248.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = easier text. The constants are the Brazilian Portuguese
//! recalibration of the English formula; scores above 100 and below 0 are
//! possible and are not clamped.

use crate::metrics::round2;
use crate::syllables;

/// Flesch Reading Ease from precomputed counts, rounded to two decimals.
///
/// Returns 0.0 when there are no sentences or no words.
pub fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> f64 {
    if words == 0 || sentences == 0 {
        return 0.0;
    }
    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    round2(248.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word)
}

/// Flesch Reading Ease over a list of words grouped into `sentences`.
///
/// Syllables come from [`syllables::count_total`].
pub fn score_words<'a, I>(words: I, sentences: usize) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    let words: Vec<&str> = words.into_iter().collect();
    flesch_reading_ease(words.len(), sentences, syllables::count_total(words.iter().copied()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_counts() {
        // 248.835 - 10.15 - 169.2 = 69.485
        assert_eq!(flesch_reading_ease(10, 1, 20), 69.49);
    }

    #[test]
    fn zero_guards() {
        assert_eq!(flesch_reading_ease(0, 1, 0), 0.0);
        assert_eq!(flesch_reading_ease(5, 0, 9), 0.0);
    }

    #[test]
    fn short_words_score_higher() {
        let easy = score_words(["o", "sol", "é", "bom"], 1);
        let hard = score_words(["internacionalização", "administrativa"], 1);
        assert!(easy > hard);
    }

    #[test]
    fn monosyllables_exceed_one_hundred() {
        // one word, one syllable: 248.835 - 1.015 - 84.6
        assert_eq!(score_words(["sol"], 1), 163.22);
    }

    #[test]
    fn very_dense_text_goes_negative() {
        let words = ["paralelepipedo"; 40];
        assert!(score_words(words, 1) < 0.0);
    }
}
