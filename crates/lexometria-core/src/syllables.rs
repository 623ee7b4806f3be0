//! Portuguese syllable estimation.
//!
//! Counts vowel nuclei with a diphthong correction. This is a heuristic, not a
//! syllabifier: aggregate readability scores tolerate an error of about one
//! syllable per word.

/// Vowels recognised as syllable nuclei, including accented forms.
const VOWELS: &str = "aeiouáéíóúàèìòùâêîôûãõ";

/// Falling diphthongs that merge two vowel groups into one syllable.
const DIPHTHONGS: &[&str] = &["ai", "au", "ei", "eu", "oi", "ou", "ui"];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

fn is_kept(c: char) -> bool {
    c.is_ascii_lowercase() || is_vowel(c)
}

/// Estimate the number of syllables in a single Portuguese word.
///
/// Returns 0 only for empty or whitespace-only input. Anything else counts as
/// at least one syllable, including tokens made entirely of digits or
/// punctuation.
pub fn count_syllables(word: &str) -> usize {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return 0;
    }

    let cleaned: String = word.chars().filter(|&c| is_kept(c)).collect();
    if cleaned.is_empty() {
        return 1;
    }

    let mut syllables: usize = 0;
    let mut previous_was_vowel = false;
    for c in cleaned.chars() {
        let vowel = is_vowel(c);
        if vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = vowel;
    }

    // Plain substring counts, the same bigram may be corrected twice.
    let merged: usize = DIPHTHONGS
        .iter()
        .map(|d| cleaned.matches(d).count())
        .sum();

    syllables.saturating_sub(merged).max(1)
}

/// Total syllables over a sequence of words.
pub fn count_total<'a, I>(words: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    words.into_iter().map(count_syllables).sum()
}
