use anyhow::{Context, Result};
use passage_core::idf::compute_idf;
use passage_core::rank::{rank_documents, rank_sentences};
use passage_core::sentence::split_sentences;
use passage_core::tokenizer::tokenize;
use passage_core::{IdfTable, Token};

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// How many top-ranked documents feed sentence extraction.
pub const FILE_MATCHES: usize = 1;
/// How many top-ranked sentences are printed per query.
pub const SENTENCE_MATCHES: usize = 1;

/// Read every regular file directly inside `dir` into a filename -> contents map.
///
/// Files must be valid UTF-8; a read failure is fatal. Subdirectories are ignored.
pub fn load_files(dir: &Path) -> Result<HashMap<String, String>> {
    let mut files = HashMap::new();
    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading corpus directory {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading corpus file {}", path.display()))?;
        files.insert(entry.file_name().to_string_lossy().into_owned(), content);
    }
    tracing::info!(num_files = files.len(), "loaded corpus");
    Ok(files)
}

/// Run one query against an in-memory corpus and return the ranked answer sentences.
///
/// Pipeline: tokenize documents, compute document IDFs, rank documents by TF-IDF,
/// split the winning document(s) into sentences, compute sentence IDFs over that
/// working set, rank sentences by IDF sum with density tie-break. Both IDF tables
/// are built fresh here and never reused across collections.
pub fn answer(files: &HashMap<String, String>, query_text: &str) -> Vec<String> {
    let documents: HashMap<String, Vec<Token>> = files
        .iter()
        .map(|(name, text)| (name.clone(), tokenize(text)))
        .collect();
    let doc_idf: IdfTable = compute_idf(documents.values());
    tracing::info!(
        num_docs = documents.len(),
        num_terms = doc_idf.len(),
        "tokenized corpus"
    );

    let query: HashSet<Token> = tokenize(query_text).into_iter().collect();
    let top = rank_documents(&query, &documents, &doc_idf, FILE_MATCHES);
    tracing::debug!(top = ?top, "top documents");

    let mut sentences: HashMap<String, HashSet<Token>> = HashMap::new();
    for name in &top {
        let Some(text) = files.get(name) else { continue };
        for sentence in split_sentences(text) {
            let tokens: HashSet<Token> = tokenize(&sentence).into_iter().collect();
            // sentences with no surviving tokens can never match and have no density
            if tokens.is_empty() {
                continue;
            }
            sentences.insert(sentence, tokens);
        }
    }
    let sentence_idf: IdfTable = compute_idf(sentences.values());
    tracing::debug!(num_sentences = sentences.len(), "extracted candidate sentences");

    rank_sentences(&query, &sentences, &sentence_idf, SENTENCE_MATCHES)
}
