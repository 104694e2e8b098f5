//! List responses from the API.
//!
//! List endpoints answer either with a bare JSON array or, when paginated,
//! with an envelope `{"count": N, "results": [...]}`. Both shapes are decoded
//! into [`Listing`]; anything else is a decode error.

use serde::Deserialize;

use crate::record::Record;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Bare(Vec<T>),
    Envelope {
        results: Vec<T>,
        #[serde(default)]
        count: Option<u64>,
    },
}

/// Records endpoint response.
pub type RecordsPayload = Listing<Record>;

impl<T> Listing<T> {
    /// Split into the returned items and the total number of matches.
    ///
    /// Without an explicit `count`, the total is the number of items returned.
    pub fn into_parts(self) -> (Vec<T>, u64) {
        match self {
            Listing::Envelope { results, count } => {
                let total = count.unwrap_or(results.len() as u64);
                (results, total)
            }
            Listing::Bare(items) => {
                let total = items.len() as u64;
                (items, total)
            }
        }
    }
}
