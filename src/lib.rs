pub mod about;
pub mod config;
pub mod engine;
pub mod engine_shell;
pub mod error;
pub mod record_store;
pub mod report;
pub mod rle;
pub mod sequence_record;

pub use engine::{Engine, GeneEngine};
pub use error::GeneSearchError;
pub use record_store::RecordStore;
pub use sequence_record::SequenceRecord;
