use crate::rle::{self, CodecError};
use genesearch_protocol::RecordSummary;

/// One row of the sequences file with its chain already decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceRecord {
    organism: String,
    protein: String,
    amino_acids: String,
}

impl SequenceRecord {
    pub fn new(organism: &str, protein: &str, amino_acids: &str) -> Self {
        Self {
            organism: organism.to_string(),
            protein: protein.to_string(),
            amino_acids: amino_acids.to_string(),
        }
    }

    pub fn from_encoded(organism: &str, protein: &str, encoded: &str) -> Result<Self, CodecError> {
        Ok(Self::new(organism, protein, &rle::decode(encoded)?))
    }

    #[inline(always)]
    pub fn organism(&self) -> &str {
        &self.organism
    }

    #[inline(always)]
    pub fn protein(&self) -> &str {
        &self.protein
    }

    #[inline(always)]
    pub fn amino_acids(&self) -> &str {
        &self.amino_acids
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.amino_acids.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.amino_acids.is_empty()
    }

    pub fn encoded(&self) -> String {
        rle::encode(&self.amino_acids)
    }

    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            organism: self.organism.clone(),
            protein: self.protein.clone(),
            length: self.len(),
            encoded_length: self.encoded().len(),
        }
    }
}
