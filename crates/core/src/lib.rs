//! adnseq core
//!
//! Génération d'une séquence ADN synthétique portant un nom, export FASTA
//! et statistiques de composition.

pub mod error;
pub mod fasta;
pub mod logging;
pub mod pipeline;
pub mod sequence;
pub mod stats;

// Réexportations principales
pub use error::{Result, SeqError};
pub use fasta::{fasta_path, write_fasta, FastaRecord, LINE_WIDTH};
pub use logging::{init_logging, level_from_verbosity};
// La macro log_operation est automatiquement exportée à la racine du crate
pub use pipeline::{run_pipeline, run_pipeline_with_rng, PipelineConfig, PipelineInput, PipelineReport};
pub use sequence::{generate, splice_name, GeneratedSequence, Nucleotide};
pub use stats::{NucleotideCounts, SequenceStats};
