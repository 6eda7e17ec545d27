//! Porter stemming algorithm implementation.
//!
//! This module implements the suffix-stripping algorithm described by
//! M.F. Porter (1980) for reducing English words to their stems.
//!
//! # Algorithm
//!
//! The Porter stemmer applies a series of rewrite rules in five steps:
//! 1. Plurals, -ed/-ing suffixes and terminal -y
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and reduce -ll
//!
//! In steps 2 to 4 only the longest matching suffix is considered; if its
//! condition fails the word is left alone for that step.
//!
//! This is the classic algorithm with no exception list, so "news" stems to
//! "new" and the two share a feature.
//!
//! # Examples
//!
//! ```
//! use newsvote::analysis::token_filter::stem::Stemmer;
//! use newsvote::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

const STEP2_SUFFIXES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3_SUFFIXES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm implementation.
///
/// Stateless; one instance can be shared by any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Check if the character at `pos` is a consonant.
    ///
    /// `y` counts as a consonant at the start of a word or after a vowel.
    fn is_consonant(word: &[char], pos: usize) -> bool {
        match word[pos] {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => pos == 0 || !Self::is_consonant(word, pos - 1),
            _ => true,
        }
    }

    /// Calculate the measure of a word (number of VC sequences).
    fn measure(word: &[char]) -> usize {
        let n = word.len();
        let mut m = 0;
        let mut i = 0;

        while i < n && Self::is_consonant(word, i) {
            i += 1;
        }

        loop {
            while i < n && !Self::is_consonant(word, i) {
                i += 1;
            }
            if i >= n {
                break;
            }
            while i < n && Self::is_consonant(word, i) {
                i += 1;
            }
            m += 1;
        }

        m
    }

    /// Check if word contains a vowel.
    fn contains_vowel(word: &[char]) -> bool {
        (0..word.len()).any(|i| !Self::is_consonant(word, i))
    }

    /// Check if word ends with a double consonant.
    fn ends_with_double_consonant(word: &[char]) -> bool {
        let n = word.len();
        n >= 2 && word[n - 1] == word[n - 2] && Self::is_consonant(word, n - 1)
    }

    /// Check if word ends consonant-vowel-consonant, the last not w, x or y.
    fn ends_cvc(word: &[char]) -> bool {
        let n = word.len();
        n >= 3
            && Self::is_consonant(word, n - 3)
            && !Self::is_consonant(word, n - 2)
            && Self::is_consonant(word, n - 1)
            && !matches!(word[n - 1], 'w' | 'x' | 'y')
    }

    /// Check if word ends with a specific suffix.
    fn ends_with(word: &[char], suffix: &str) -> bool {
        let len = suffix.chars().count();
        word.len() >= len && word[word.len() - len..].iter().copied().eq(suffix.chars())
    }

    /// The word with `suffix_len` trailing characters removed.
    fn stem_of(word: &[char], suffix_len: usize) -> &[char] {
        &word[..word.len() - suffix_len]
    }

    /// Replace the trailing `suffix_len` characters with `replacement`.
    fn replace_end(word: &mut Vec<char>, suffix_len: usize, replacement: &str) {
        word.truncate(word.len() - suffix_len);
        word.extend(replacement.chars());
    }

    /// Step 1a: plurals.
    fn step1a(word: &mut Vec<char>) {
        if Self::ends_with(word, "sses") {
            Self::replace_end(word, 4, "ss");
        } else if Self::ends_with(word, "ies") {
            Self::replace_end(word, 3, "i");
        } else if Self::ends_with(word, "s") && !Self::ends_with(word, "ss") {
            word.pop();
        }
    }

    /// Step 1b: -eed, -ed and -ing.
    fn step1b(word: &mut Vec<char>) {
        if Self::ends_with(word, "eed") {
            if Self::measure(Self::stem_of(word, 3)) > 0 {
                word.pop();
            }
            return;
        }

        let suffix_len = if Self::ends_with(word, "ed") {
            2
        } else if Self::ends_with(word, "ing") {
            3
        } else {
            return;
        };

        if !Self::contains_vowel(Self::stem_of(word, suffix_len)) {
            return;
        }
        word.truncate(word.len() - suffix_len);

        if Self::ends_with(word, "at") || Self::ends_with(word, "bl") || Self::ends_with(word, "iz")
        {
            word.push('e');
        } else if Self::ends_with_double_consonant(word)
            && !matches!(word.last(), Some('l') | Some('s') | Some('z'))
        {
            word.pop();
        } else if Self::measure(word) == 1 && Self::ends_cvc(word) {
            word.push('e');
        }
    }

    /// Step 1c: terminal y to i when the stem has a vowel.
    fn step1c(word: &mut [char]) {
        let n = word.len();
        if Self::ends_with(word, "y") && Self::contains_vowel(&word[..n - 1]) {
            word[n - 1] = 'i';
        }
    }

    /// Steps 2 and 3: longest listed suffix, replaced when the stem measure is positive.
    fn replace_longest(word: &mut Vec<char>, suffixes: &[(&str, &str)]) {
        if let Some((suffix, replacement)) = suffixes
            .iter()
            .filter(|(suffix, _)| Self::ends_with(&word[..], suffix))
            .max_by_key(|(suffix, _)| suffix.len())
        {
            let len = suffix.chars().count();
            if Self::measure(Self::stem_of(word, len)) > 0 {
                Self::replace_end(word, len, replacement);
            }
        }
    }

    /// Step 4: drop the longest listed suffix when the stem measure exceeds one.
    fn step4(word: &mut Vec<char>) {
        if let Some(suffix) = STEP4_SUFFIXES
            .iter()
            .filter(|suffix| Self::ends_with(&word[..], suffix))
            .max_by_key(|suffix| suffix.len())
        {
            let len = suffix.chars().count();
            let stem = Self::stem_of(word, len);
            let ion_ok = *suffix != "ion" || matches!(stem.last(), Some('s') | Some('t'));
            if Self::measure(stem) > 1 && ion_ok {
                word.truncate(word.len() - len);
            }
        }
    }

    /// Step 5: final -e and -ll.
    fn step5(word: &mut Vec<char>) {
        if Self::ends_with(word, "e") {
            let stem = Self::stem_of(word, 1);
            let m = Self::measure(stem);
            if m > 1 || (m == 1 && !Self::ends_cvc(stem)) {
                word.pop();
            }
        }

        if Self::ends_with(word, "ll") && Self::measure(word) > 1 {
            word.pop();
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let mut chars: Vec<char> = word.to_lowercase().chars().collect();
        if chars.len() <= 2 {
            return chars.into_iter().collect();
        }

        Self::step1a(&mut chars);
        Self::step1b(&mut chars);
        Self::step1c(&mut chars);
        Self::replace_longest(&mut chars, STEP2_SUFFIXES);
        Self::replace_longest(&mut chars, STEP3_SUFFIXES);
        Self::step4(&mut chars);
        Self::step5(&mut chars);

        chars.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
