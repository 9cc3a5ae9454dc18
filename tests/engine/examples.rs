//! The worked examples: a manual with steps and a bullet, a prose chunk, and a
//! query nothing in the corpus matches.

use super::common::{assert_close, make_corpus, make_processor, ranked_indices};
use pagewise::{rank, synthesize, AnswerKind, EngineError, ScoredChunk};

#[test]
fn test_manual_ranks_boosted_step_chunk() {
    let (chunks, index) = make_corpus(&[("1. Open the lid\n2. Press power", 3), ("- Safety note", 4)]);

    let ranked = rank("power", &chunks, &index, 3);
    assert_eq!(ranked_indices(&ranked), vec![0]);
    // tf 1 × idf (1 + ln(2/2)) + one substring boost
    assert_close(ranked[0].score, 1.5);
}

#[test]
fn test_manual_steps_cite_every_input_chunk() {
    let (chunks, _) = make_corpus(&[("1. Open the lid\n2. Press power", 3), ("- Safety note", 4)]);
    let scored = vec![ScoredChunk::new(&chunks[0], 1.5), ScoredChunk::new(&chunks[1], 0.0)];

    let answer = synthesize(&scored, "power").unwrap();
    assert_eq!(answer.kind, AnswerKind::Steps);
    assert_eq!(answer.lines, vec!["1. Open the lid", "2. Press power"]);
    assert_eq!(answer.pages, vec![3, 4]);
}

#[test]
fn test_prose_chunk_yields_sentences() {
    let (chunks, _) = make_corpus(&[("The device weighs 2kg. It is waterproof.", 1)]);
    let scored = vec![ScoredChunk::new(&chunks[0], 1.0)];

    let answer = synthesize(&scored, "weight").unwrap();
    assert_eq!(answer.kind, AnswerKind::Text);
    assert_eq!(answer.lines, vec!["The device weighs 2kg.", "It is waterproof."]);
    assert_eq!(answer.pages, vec![1]);
}

#[test]
fn test_prose_chunk_found_through_inflection() {
    // "weight" stems to itself and never meets "weigh"; "weighing" does
    let processor = make_processor(&[("The device weighs 2kg. It is waterproof.", 1)]);
    assert!(processor.find_relevant_chunks("weight", 3).is_empty());

    let answer = processor.answer("weighing", 3).unwrap();
    assert_eq!(answer.kind, AnswerKind::Text);
    assert_eq!(answer.pages, vec![1]);
}

#[test]
fn test_no_overlap_is_no_relevant_content() {
    let processor = make_processor(&[("1. Open the lid\n2. Press power", 3), ("- Safety note", 4)]);

    assert!(processor.find_relevant_chunks("bluetooth pairing", 3).is_empty());
    assert!(matches!(
        processor.answer("bluetooth pairing", 3),
        Err(EngineError::NoRelevantContent)
    ));
}
