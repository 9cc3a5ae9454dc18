//! Answer synthesis properties: tier priority, caps, page rules.

use pagewise::answer::{MAX_LIST_LINES, MAX_SENTENCES};
use pagewise::{synthesize, unique_pages, AnswerKind, Chunk, ScoredChunk};
use proptest::prelude::*;

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[A-Za-z ]{1,30}[.!?]?",
        1 => "[0-9]{1,2}\\. [a-z ]{1,20}",
        1 => "- [a-z ]{1,20}",
        1 => Just(String::new()),
    ]
}

fn chunk_strategy() -> impl Strategy<Value = (String, u32)> {
    (
        prop::collection::vec(line_strategy(), 1..6).prop_map(|lines| lines.join("\n")),
        1u32..6,
    )
}

fn chunks_strategy() -> impl Strategy<Value = Vec<Chunk>> {
    prop::collection::vec(chunk_strategy(), 1..6).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, (text, page))| Chunk::new(i, text, page))
            .collect()
    })
}

fn scored(chunks: &[Chunk]) -> Vec<ScoredChunk<'_>> {
    chunks.iter().map(|c| ScoredChunk::new(c, 1.0)).collect()
}

fn has_duplicates(pages: &[u32]) -> bool {
    pages.iter().enumerate().any(|(i, p)| pages[..i].contains(p))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: a numbered line anywhere beats bullets and prose.
    #[test]
    fn prop_steps_win_when_present(
        mut chunks in chunks_strategy(),
        target in any::<prop::sample::Index>(),
    ) {
        let i = target.index(chunks.len());
        let original = &chunks[i];
        chunks[i] = Chunk::new(
            i,
            format!("- a bullet\n{}\n7. a step", original.raw_text()),
            original.page_number(),
        );

        let answer = synthesize(&scored(&chunks), "q").unwrap();
        prop_assert_eq!(answer.kind, AnswerKind::Steps);
    }

    /// Property: line caps hold for every kind.
    #[test]
    fn prop_line_caps(chunks in chunks_strategy()) {
        let answer = synthesize(&scored(&chunks), "q").unwrap();
        match answer.kind {
            AnswerKind::Steps | AnswerKind::Bullets => {
                prop_assert!(!answer.lines.is_empty());
                prop_assert!(answer.lines.len() <= MAX_LIST_LINES);
            }
            AnswerKind::Text => prop_assert!(answer.lines.len() <= MAX_SENTENCES),
        }
    }

    /// Property: pages never repeat; lists cite every input chunk in order,
    /// prose cites only the first.
    #[test]
    fn prop_pages_unique_first_seen(chunks in chunks_strategy()) {
        let answer = synthesize(&scored(&chunks), "q").unwrap();
        prop_assert!(!has_duplicates(&answer.pages));

        let expected = match answer.kind {
            AnswerKind::Steps | AnswerKind::Bullets => {
                unique_pages(chunks.iter().map(Chunk::page_number))
            }
            AnswerKind::Text => vec![chunks[0].page_number()],
        };
        prop_assert_eq!(answer.pages, expected);
    }

    /// Property: prose lines are whole sentences. Only a chunk with no
    /// terminator at all comes back unpunctuated.
    #[test]
    fn prop_prose_lines_are_terminated(chunks in chunks_strategy()) {
        let answer = synthesize(&scored(&chunks), "q").unwrap();
        let first = chunks[0].raw_text();
        if answer.kind == AnswerKind::Text && first.contains(['.', '!', '?']) {
            for line in &answer.lines {
                prop_assert!(line.ends_with(['.', '!', '?']), "line {:?} is cut off", line);
            }
        }
    }

    /// Property: list lines are trimmed lines of the input, in input order.
    #[test]
    fn prop_list_lines_come_from_input(chunks in chunks_strategy()) {
        let answer = synthesize(&scored(&chunks), "q").unwrap();
        if answer.kind != AnswerKind::Text {
            let all_lines: Vec<&str> = chunks
                .iter()
                .flat_map(|c| c.raw_text().lines())
                .map(str::trim)
                .collect();
            let mut cursor = 0;
            for line in &answer.lines {
                let found = all_lines[cursor..].iter().position(|l| l == line);
                prop_assert!(found.is_some(), "line {:?} not found in order", line);
                cursor += found.unwrap_or(0) + 1;
            }
        }
    }
}
