// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The Porter stemming algorithm (M.F. Porter, 1980).
//!
//! Five rounds of suffix rewriting, each guarded by the *measure* of the
//! remaining stem: the number of vowel-consonant sequences it contains. The
//! guards are what stop "rate" from becoming "r". Rules within a step are
//! tried in order and the first suffix that matches ends the step, whether or
//! not its measure condition allowed the rewrite.
//!
//! Works on ASCII bytes. Callers pass lowercase tokens; anything non-ASCII or
//! shorter than three characters comes back untouched.

use std::borrow::Cow;

/// Step 2 rewrites, grouped the way the reference implementation switches on
/// the penultimate letter. Order matters: "ational" must be tried before "tional".
const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
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
    ("logi", "log"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Step 4 removes these when the remaining stem has measure > 1.
/// "ion" additionally needs the stem to end in 's' or 't'.
const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Reduce a lowercase word to its Porter stem.
pub fn stem(word: &str) -> Cow<'_, str> {
    if word.len() < 3 || !word.is_ascii() {
        return Cow::Borrowed(word);
    }

    let mut stemmer = Stemmer {
        b: word.as_bytes().to_vec(),
        stem_len: 0,
    };
    stemmer.step1ab();
    if stemmer.b.len() > 1 {
        stemmer.step1c();
        stemmer.step2();
        stemmer.step3();
        stemmer.step4();
        stemmer.step5();
    }

    if stemmer.b.len() == word.len() && stemmer.b == word.as_bytes() {
        return Cow::Borrowed(word);
    }
    // Only ASCII bytes are ever written, so this cannot fail.
    Cow::Owned(String::from_utf8(stemmer.b).unwrap_or_else(|_| word.to_string()))
}

/// Working buffer. `b` is the current word; `stem_len` is the length of the
/// stem left after the most recently matched suffix.
struct Stemmer {
    b: Vec<u8>,
    stem_len: usize,
}

impl Stemmer {
    fn is_consonant(&self, i: usize) -> bool {
        match self.b[i] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// Number of VC sequences in `b[..stem_len]`, i.e. m in `[C](VC)^m[V]`.
    fn measure(&self) -> usize {
        let end = self.stem_len;
        let mut i = 0;
        let mut n = 0;

        // Skip the optional leading consonants
        while i < end && self.is_consonant(i) {
            i += 1;
        }
        loop {
            while i < end && !self.is_consonant(i) {
                i += 1;
            }
            if i >= end {
                return n;
            }
            while i < end && self.is_consonant(i) {
                i += 1;
            }
            n += 1;
            if i >= end {
                return n;
            }
        }
    }

    fn vowel_in_stem(&self) -> bool {
        (0..self.stem_len).any(|i| !self.is_consonant(i))
    }

    /// `b[i-1..=i]` is a double consonant.
    fn double_consonant(&self, i: usize) -> bool {
        i >= 1 && self.b[i] == self.b[i - 1] && self.is_consonant(i)
    }

    /// `b[i-2..=i]` is consonant-vowel-consonant and the last consonant is not
    /// w, x or y. Used to restore an 'e' on short words: hop(e), fil(e).
    fn cvc(&self, i: usize) -> bool {
        if i < 2 || !self.is_consonant(i) || self.is_consonant(i - 1) || !self.is_consonant(i - 2)
        {
            return false;
        }
        !matches!(self.b[i], b'w' | b'x' | b'y')
    }

    fn ends_with(&mut self, suffix: &str) -> bool {
        let suffix = suffix.as_bytes();
        if suffix.len() > self.b.len() || !self.b.ends_with(suffix) {
            return false;
        }
        self.stem_len = self.b.len() - suffix.len();
        true
    }

    fn set_to(&mut self, replacement: &str) {
        self.b.truncate(self.stem_len);
        self.b.extend_from_slice(replacement.as_bytes());
    }

    fn replace_if_measured(&mut self, replacement: &str) {
        if self.measure() > 0 {
            self.set_to(replacement);
        }
    }

    fn last(&self) -> usize {
        self.b.len() - 1
    }

    /// Plurals and -ed/-ing: caresses → caress, ponies → poni, hopping → hop.
    fn step1ab(&mut self) {
        if self.b.last() == Some(&b's') {
            if self.ends_with("sses") {
                self.b.truncate(self.b.len() - 2);
            } else if self.ends_with("ies") {
                self.set_to("i");
            } else if self.b.len() >= 2 && self.b[self.b.len() - 2] != b's' {
                self.b.pop();
            }
        }

        if self.ends_with("eed") {
            if self.measure() > 0 {
                self.b.pop();
            }
        } else if (self.ends_with("ed") || self.ends_with("ing")) && self.vowel_in_stem() {
            self.b.truncate(self.stem_len);
            self.stem_len = self.b.len();

            if self.ends_with("at") {
                self.set_to("ate");
            } else if self.ends_with("bl") {
                self.set_to("ble");
            } else if self.ends_with("iz") {
                self.set_to("ize");
            } else if self.double_consonant(self.last()) {
                if !matches!(self.b[self.last()], b'l' | b's' | b'z') {
                    self.b.pop();
                }
            } else {
                self.stem_len = self.b.len();
                if self.measure() == 1 && self.cvc(self.last()) {
                    self.set_to("e");
                }
            }
        }
    }

    /// Terminal y → i when there is another vowel in the stem: happy → happi.
    fn step1c(&mut self) {
        if self.ends_with("y") && self.vowel_in_stem() {
            let last = self.last();
            self.b[last] = b'i';
        }
    }

    /// Double suffixes to single ones: relational → relate.
    fn step2(&mut self) {
        self.apply_rules(STEP2_RULES);
    }

    /// -ic-, -full, -ness and friends: hopeful → hope.
    fn step3(&mut self) {
        self.apply_rules(STEP3_RULES);
    }

    fn apply_rules(&mut self, rules: &[(&str, &str)]) {
        for (suffix, replacement) in rules {
            if self.ends_with(suffix) {
                self.replace_if_measured(replacement);
                return;
            }
        }
    }

    /// Strip -ant, -ence etc. from stems with measure > 1: adjustment → adjust.
    fn step4(&mut self) {
        for suffix in STEP4_SUFFIXES {
            if !self.ends_with(suffix) {
                continue;
            }
            if *suffix == "ion"
                && !(self.stem_len >= 1 && matches!(self.b[self.stem_len - 1], b's' | b't'))
            {
                continue;
            }
            if self.measure() > 1 {
                self.b.truncate(self.stem_len);
            }
            return;
        }
    }

    /// Tidy up: drop a final -e and reduce -ll when the measure allows.
    fn step5(&mut self) {
        self.stem_len = self.b.len();
        if self.b.last() == Some(&b'e') {
            let m = self.measure();
            if m > 1 || (m == 1 && !self.cvc(self.b.len().saturating_sub(2))) {
                self.b.pop();
            }
        }

        self.stem_len = self.b.len();
        if self.b.last() == Some(&b'l') && self.double_consonant(self.last()) && self.measure() > 1
        {
            self.b.pop();
        }
    }
}
