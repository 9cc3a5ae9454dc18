//! Extracted text all the way to a cited answer.

use super::common::{ranked_indices, KETTLE_MANUAL};
use pagewise::{
    chunk_document, chunk_text, AnswerKind, ChunkerConfig, DirectoryStore, DocumentProcessor,
    EngineError, NO_RELEVANT_CONTENT_MESSAGE,
};
use tempfile::TempDir;

fn kettle_processor() -> DocumentProcessor {
    let document = chunk_document("kettle.pdf", KETTLE_MANUAL, &ChunkerConfig::default()).unwrap();
    DocumentProcessor::from_document("kettle", document)
}

#[test]
fn test_form_feeds_become_page_numbers() {
    let chunks = chunk_text(KETTLE_MANUAL, &ChunkerConfig::default()).unwrap();
    let pages: Vec<u32> = chunks.iter().map(|c| c.page_number).collect();
    assert_eq!(pages, vec![1, 2, 3]);
    assert!(chunks[1].text.starts_with("Filling the kettle"));
}

#[test]
fn test_steps_answer_with_ranked_page_citations() {
    let processor = kettle_processor();

    let ranked = processor.find_relevant_chunks("fill water", 3);
    // The steps page matches both terms; the other two tie on "water"
    assert_eq!(ranked_indices(&ranked), vec![1, 0, 2]);

    let answer = processor.answer("fill water", 3).unwrap();
    assert_eq!(answer.kind, AnswerKind::Steps);
    assert_eq!(
        answer.lines,
        vec![
            "1. Open the lid",
            "2. Fill with water up to the MAX line",
            "3. Close the lid firmly",
        ]
    );
    assert_eq!(answer.pages, vec![2, 1, 3]);
}

#[test]
fn test_bullets_answer_from_safety_page() {
    let processor = kettle_processor();
    let answer = processor.answer("children safety", 1).unwrap();
    assert_eq!(answer.kind, AnswerKind::Bullets);
    assert_eq!(
        answer.lines,
        vec!["- Never immerse the base in water", "- Keep away from children"]
    );
    assert_eq!(answer.pages, vec![3]);
}

#[test]
fn test_prose_answer_from_intro_page() {
    let processor = kettle_processor();
    let answer = processor.answer("guide", 3).unwrap();
    assert_eq!(answer.kind, AnswerKind::Text);
    assert_eq!(
        answer.lines,
        vec![
            "Welcome to the SmartKettle user guide.",
            "This kettle boils water quickly.",
        ]
    );
    assert_eq!(answer.pages, vec![1]);
}

#[test]
fn test_unrelated_question() {
    let processor = kettle_processor();
    assert!(matches!(
        processor.answer("descaling vinegar", 3),
        Err(EngineError::NoRelevantContent)
    ));
    assert_eq!(
        processor.respond("descaling vinegar", 3).unwrap().answer,
        NO_RELEVANT_CONTENT_MESSAGE
    );
}

#[test]
fn test_saved_document_answers_identically() {
    let dir = TempDir::new().unwrap();
    let store = DirectoryStore::new(dir.path());
    let document = chunk_document("kettle.pdf", KETTLE_MANUAL, &ChunkerConfig::default()).unwrap();
    store.save("kettle", &document).unwrap();

    let from_disk = DocumentProcessor::initialize(&store, "kettle").unwrap();
    let in_memory = kettle_processor();
    assert_eq!(from_disk.filename(), "kettle.pdf");
    assert_eq!(
        from_disk.answer("fill water", 3).unwrap(),
        in_memory.answer("fill water", 3).unwrap()
    );
}
