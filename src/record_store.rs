//! In-memory collection of decoded sequence records.

use crate::{error::GeneSearchError, sequence_record::SequenceRecord};
use genesearch_protocol::StoreSummary;
use log::{debug, info, warn};
use std::{fs, io::Write, path::Path};

const FIELD_DELIMITER: char = '\t';

#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Vec<SequenceRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<SequenceRecord>) -> Self {
        Self { records }
    }

    /// Builds a store from `organism\tprotein\tchain` lines. Lines that do not
    /// have exactly three fields, or whose chain cannot be decoded, are skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let records = lines
            .into_iter()
            .enumerate()
            .filter_map(|(num, line)| Self::parse_line(num + 1, line.as_ref()))
            .collect();
        Self { records }
    }

    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, GeneSearchError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| GeneSearchError::read(path, e))?;
        let store = Self::from_text(&text);
        info!(
            "Loaded {} sequence record(s) from '{}'",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    fn parse_line(line_number: usize, line: &str) -> Option<SequenceRecord> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        let [organism, protein, chain] = fields.as_slice() else {
            debug!(
                "Skipping sequence line {line_number}: expected 3 fields, found {}",
                fields.len()
            );
            return None;
        };
        match SequenceRecord::from_encoded(organism.trim(), protein.trim(), chain.trim()) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping sequence line {line_number}: {e}");
                None
            }
        }
    }

    /// First record, in store order, whose protein name equals `name` exactly.
    pub fn find_by_protein(&self, name: &str) -> Option<&SequenceRecord> {
        self.records.iter().find(|record| record.protein() == name)
    }

    pub fn records(&self) -> &[SequenceRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &SequenceRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summarize(&self) -> StoreSummary {
        let records: Vec<_> = self.records.iter().map(SequenceRecord::summary).collect();
        StoreSummary {
            record_count: records.len(),
            total_residues: records.iter().map(|r| r.length).sum(),
            records,
        }
    }

    /// Writes the store as tab-separated `organism, protein, chain` rows. With
    /// `encoded` set the chains are run-length encoded again, so the output
    /// can be loaded back as a sequences file.
    pub fn write_tsv<W: Write>(&self, writer: W, encoded: bool) -> Result<(), GeneSearchError> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(csv::QuoteStyle::Never)
            .has_headers(false)
            .from_writer(writer);
        for record in &self.records {
            let chain = if encoded {
                record.encoded()
            } else {
                record.amino_acids().to_string()
            };
            wtr.write_record([record.organism(), record.protein(), chain.as_str()])?;
        }
        wtr.flush()?;
        Ok(())
    }
}
