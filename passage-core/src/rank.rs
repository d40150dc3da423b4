use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::{IdfTable, Token};

/// Rank documents against `query` by summed TF-IDF, best first.
///
/// `score(d) = sum over query terms w present in d of tf(w, d) * idf(w)`, where tf is
/// the raw occurrence count (no length normalization). Query terms missing from the
/// IDF table contribute 0. Ties break on document name ascending, so the ordering is
/// deterministic for a fixed corpus. Returns at most `n` names; `n` larger than the
/// corpus returns every document, ranked.
pub fn rank_documents(
    query: &HashSet<Token>,
    documents: &HashMap<String, Vec<Token>>,
    idf: &IdfTable,
    n: usize,
) -> Vec<String> {
    let mut scored: Vec<(&str, f64)> = documents
        .iter()
        .map(|(name, tokens)| (name.as_str(), tfidf_score(query, tokens, idf)))
        .collect();
    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    tracing::debug!(candidates = scored.len(), "ranked documents");
    scored
        .into_iter()
        .take(n)
        .map(|(name, _)| name.to_string())
        .collect()
}

fn tfidf_score(query: &HashSet<Token>, tokens: &[Token], idf: &IdfTable) -> f64 {
    let mut tf: HashMap<&str, u32> = HashMap::new();
    for token in tokens {
        *tf.entry(token.as_str()).or_insert(0) += 1;
    }
    query
        .iter()
        .filter_map(|w| {
            let count = *tf.get(w.as_str())?;
            Some(f64::from(count) * idf.get(w).copied().unwrap_or(0.0))
        })
        .sum()
}

/// Rank sentences against `query` by matched-term IDF sum, best first.
///
/// Primary key: sum of IDF weights over the sentence's tokens that appear in the
/// query (missing table entries contribute 0). Ties break on query term density,
/// the fraction of the sentence's distinct tokens that match; residual ties break
/// on sentence text ascending. Sentences with an empty token set cannot be scored
/// (density would divide by zero) and are skipped here even if an upstream filter
/// let one through. Returned texts have their first character upper-cased, a
/// display convention only.
pub fn rank_sentences(
    query: &HashSet<Token>,
    sentences: &HashMap<String, HashSet<Token>>,
    idf: &IdfTable,
    n: usize,
) -> Vec<String> {
    struct Scored<'a> {
        text: &'a str,
        idf_sum: f64,
        density: f64,
    }

    let mut scored: Vec<Scored> = Vec::with_capacity(sentences.len());
    for (text, tokens) in sentences {
        if tokens.is_empty() {
            tracing::debug!(sentence = %text, "skipping sentence with no tokens");
            continue;
        }
        let mut idf_sum = 0.0;
        let mut matched = 0usize;
        for token in tokens.intersection(query) {
            idf_sum += idf.get(token).copied().unwrap_or(0.0);
            matched += 1;
        }
        let density = matched as f64 / tokens.len() as f64;
        scored.push(Scored { text, idf_sum, density });
    }
    scored.sort_by(|a, b| {
        b.idf_sum
            .partial_cmp(&a.idf_sum)
            .unwrap_or(Ordering::Equal)
            .then(b.density.partial_cmp(&a.density).unwrap_or(Ordering::Equal))
            .then_with(|| a.text.cmp(b.text))
    });
    scored
        .into_iter()
        .take(n)
        .map(|s| capitalize_first(s.text))
        .collect()
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
