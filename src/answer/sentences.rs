// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sentence splitting for the prose fallback.
//!
//! A sentence is a maximal run of text ending in one or more of `.`, `!`, `?`.
//! Terminators stay attached, surrounding whitespace does not. Text after the
//! last terminator is a cut-off clause and is dropped; text with no terminator
//! at all comes back whole.

#[inline]
fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split `text` into trimmed sentences, in order. Blank text yields nothing.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }
        let mut end = i + c.len_utf8();
        // "Really?!" and "wait..." end once, after the last mark
        while let Some(&(j, next)) = chars.peek() {
            if !is_terminator(next) {
                break;
            }
            end = j + next.len_utf8();
            chars.next();
        }
        push_trimmed(&mut sentences, &text[start..end]);
        start = end;
    }
    if start == 0 {
        push_trimmed(&mut sentences, text);
    }
    sentences
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece);
    }
}
