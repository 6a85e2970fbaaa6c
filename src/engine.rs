//! Query operations over a [`RecordStore`].
//!
//! Every operation is a pure function of the store and its arguments and
//! returns the text block that goes into the report.

use crate::{record_store::RecordStore, rle};
use genesearch_protocol::{Capabilities, CommandSpec, PROTOCOL_VERSION};
use itertools::Itertools;
use log::warn;

pub const NOT_FOUND: &str = "NOT FOUND";
pub const DIFF_LABEL: &str = "amino-acids difference:";
pub const MODE_LABEL: &str = "amino-acid occurs:";
pub const MISSING_LABEL: &str = "MISSING:";

pub trait Engine {
    fn search(&self, encoded_query: &str) -> String;
    fn diff(&self, protein_a: &str, protein_b: &str) -> String;
    fn mode(&self, protein: &str) -> String;
}

#[derive(Debug, Clone, Copy)]
pub struct GeneEngine<'a> {
    store: &'a RecordStore,
}

impl<'a> GeneEngine<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    pub fn capabilities() -> Capabilities {
        let spec = |name: &str, arguments: &[&str], description: &str| CommandSpec {
            name: name.to_string(),
            arguments: arguments.iter().map(|a| a.to_string()).collect(),
            description: description.to_string(),
        };
        Capabilities {
            protocol_version: PROTOCOL_VERSION.to_string(),
            supported_commands: vec![
                spec(
                    "search",
                    &["ENCODED_QUERY"],
                    "list records whose chain contains the decoded query",
                ),
                spec(
                    "diff",
                    &["PROTEIN_A", "PROTEIN_B"],
                    "positional amino-acid difference between two proteins",
                ),
                spec(
                    "mode",
                    &["PROTEIN"],
                    "most frequent amino acid of a protein",
                ),
            ],
            deterministic_report: true,
        }
    }
}

/// Index-aligned mismatches plus the length gap. This is not an edit distance.
pub fn positional_difference(a: &[u8], b: &[u8]) -> usize {
    let mismatches = a.iter().zip(b).filter(|(x, y)| x != y).count();
    a.len().abs_diff(b.len()) + mismatches
}

/// Most frequent character, ties going to the smallest one.
pub fn most_frequent(chain: &str) -> Option<(char, usize)> {
    chain
        .chars()
        .counts()
        .into_iter()
        .min_by(|(ca, na), (cb, nb)| nb.cmp(na).then(ca.cmp(cb)))
}

impl Engine for GeneEngine<'_> {
    fn search(&self, encoded_query: &str) -> String {
        let query = match rle::decode(encoded_query) {
            Ok(query) => query,
            Err(e) => {
                warn!("Search query '{encoded_query}' can not match: {e}");
                return format!("{NOT_FOUND}\n");
            }
        };

        let hits: String = self
            .store
            .iter()
            .filter(|record| record.amino_acids().contains(query.as_str()))
            .map(|record| format!("{} {}\n", record.organism(), record.protein()))
            .collect();
        if hits.is_empty() {
            format!("{NOT_FOUND}\n")
        } else {
            hits
        }
    }

    fn diff(&self, protein_a: &str, protein_b: &str) -> String {
        let a = self.store.find_by_protein(protein_a);
        let b = self.store.find_by_protein(protein_b);
        match (a, b) {
            (Some(a), Some(b)) => {
                let differences =
                    positional_difference(a.amino_acids().as_bytes(), b.amino_acids().as_bytes());
                format!("{DIFF_LABEL} {differences}")
            }
            _ => {
                let missing = [(protein_a, a.is_none()), (protein_b, b.is_none())]
                    .into_iter()
                    .filter(|(_, is_missing)| *is_missing)
                    .map(|(name, _)| name)
                    .join(" ");
                format!("{DIFF_LABEL}\n{MISSING_LABEL} {missing}")
            }
        }
    }

    fn mode(&self, protein: &str) -> String {
        let Some(record) = self.store.find_by_protein(protein) else {
            return format!("{MODE_LABEL}\n{MISSING_LABEL} {protein}");
        };
        match most_frequent(record.amino_acids()) {
            Some((letter, count)) => format!("{MODE_LABEL} {letter} {count}"),
            None => format!("{MODE_LABEL} 0"),
        }
    }
}
