use std::collections::{HashMap, HashSet};

use crate::IdfTable;

/// Compute inverse document frequencies over any collection of token bags.
///
/// `N` is the number of bags and `f(t)` the number of bags containing `t` at least
/// once (presence, not count); `IDF(t) = ln(N / f(t))`. The table has exactly one
/// entry per token appearing in at least one bag and none for tokens appearing in
/// no bag. Since `f(t) >= 1` for every key, all values are >= 0. An empty input
/// yields an empty table.
///
/// Pure and stateless; callers invoke it once per collection (documents, then
/// sentences) and must not reuse a table across collections.
pub fn compute_idf<'a, C, B>(collections: C) -> IdfTable
where
    C: IntoIterator<Item = B>,
    B: IntoIterator<Item = &'a String>,
{
    let mut df: HashMap<&str, u32> = HashMap::new();
    let mut n: u32 = 0;
    for bag in collections {
        n += 1;
        let distinct: HashSet<&str> = bag.into_iter().map(String::as_str).collect();
        for token in distinct {
            *df.entry(token).or_insert(0) += 1;
        }
    }
    df.into_iter()
        .map(|(token, f)| (token.to_string(), (f64::from(n) / f64::from(f)).ln()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bags(input: &[&[&str]]) -> Vec<Vec<String>> {
        input
            .iter()
            .map(|bag| bag.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    #[test]
    fn idf_is_ln_n_over_f() {
        let docs = bags(&[&["cat", "sat"], &["cat", "ran"], &["dog"]]);
        let idf = compute_idf(&docs);
        assert!((idf["cat"] - (3.0f64 / 2.0).ln()).abs() < 1e-12);
        assert!((idf["dog"] - 3.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn presence_not_count() {
        // "cat" twice in one doc still counts that doc once
        let docs = bags(&[&["cat", "cat", "cat"], &["dog"]]);
        let idf = compute_idf(&docs);
        assert!((idf["cat"] - 2.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn covers_exactly_the_token_union() {
        let docs = bags(&[&["a", "b"], &["b", "c"]]);
        let idf = compute_idf(&docs);
        let mut keys: Vec<&str> = idf.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn token_in_every_bag_gets_zero() {
        let docs = bags(&[&["cat"], &["cat"]]);
        let idf = compute_idf(&docs);
        assert_eq!(idf["cat"], 0.0);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let docs: Vec<Vec<String>> = Vec::new();
        assert!(compute_idf(&docs).is_empty());
    }
}
