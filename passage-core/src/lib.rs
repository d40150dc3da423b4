pub mod idf;
pub mod rank;
pub mod sentence;
pub mod tokenizer;

use std::collections::HashMap;

/// A normalized (lowercased) word unit. Equality is exact string match; no stemming.
pub type Token = String;

/// IDF weights keyed by token, valid only for the collection they were computed from.
pub type IdfTable = HashMap<Token, f64>;
