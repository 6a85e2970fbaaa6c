//! Serializable contracts shared by the GeneSearch library and its CLI.

use serde::{Deserialize, Serialize};

pub const PROTOCOL_VERSION: &str = "v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub organism: String,
    pub protein: String,
    /// Number of residues after decoding
    pub length: usize,
    /// Length of the run-length encoded chain
    pub encoded_length: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSummary {
    pub record_count: usize,
    pub total_residues: usize,
    pub records: Vec<RecordSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub name: String,
    pub arguments: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub protocol_version: String,
    pub supported_commands: Vec<CommandSpec>,
    pub deterministic_report: bool,
}

impl StoreSummary {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_summary_serializes_field_names() {
        let summary = StoreSummary {
            record_count: 1,
            total_residues: 6,
            records: vec![RecordSummary {
                organism: "H. sapiens".to_string(),
                protein: "ProtA".to_string(),
                length: 6,
                encoded_length: 6,
            }],
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["record_count"], 1);
        assert_eq!(value["records"][0]["protein"], "ProtA");
    }

    #[test]
    fn capabilities_round_trip_through_json() {
        let caps = Capabilities {
            protocol_version: PROTOCOL_VERSION.to_string(),
            supported_commands: vec![CommandSpec {
                name: "mode".to_string(),
                arguments: vec!["PROTEIN".to_string()],
                description: "most frequent amino acid".to_string(),
            }],
            deterministic_report: true,
        };
        let text = serde_json::to_string(&caps).unwrap();
        let back: Capabilities = serde_json::from_str(&text).unwrap();
        assert_eq!(back, caps);
    }
}
