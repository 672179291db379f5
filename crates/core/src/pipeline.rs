//! Enchaînement génération -> export FASTA -> statistiques

use crate::error::Result;
use crate::fasta::{fasta_path, write_fasta};
use crate::log_operation;
use crate::sequence::{generate, GeneratedSequence};
use crate::stats::SequenceStats;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing::info;

/// Configuration d'une exécution
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Répertoire du fichier FASTA (vide: répertoire courant)
    pub output_dir: PathBuf,
    /// Seed pour reproductibilité (entropie système si absent)
    pub seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::new(),
            seed: None,
        }
    }
}

impl PipelineConfig {
    /// Crée le générateur aléatoire de l'exécution
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

/// Valeurs saisies par l'utilisateur
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineInput {
    pub length: usize,
    pub sequence_id: String,
    pub description: String,
    pub name: String,
}

/// Résultat d'une exécution
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub path: PathBuf,
    pub generated: GeneratedSequence,
    pub stats: SequenceStats,
}

/// Exécute le pipeline complet avec le générateur décrit par `config`
pub fn run_pipeline(input: &PipelineInput, config: &PipelineConfig) -> Result<PipelineReport> {
    let mut rng = config.rng();
    run_pipeline_with_rng(&mut rng, input, config)
}

/// Exécute le pipeline avec un générateur fourni par l'appelant.
///
/// Les statistiques ne sont calculées qu'une fois le fichier écrit: une
/// erreur IO interrompt l'exécution sans résultat partiel.
pub fn run_pipeline_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    input: &PipelineInput,
    config: &PipelineConfig,
) -> Result<PipelineReport> {
    log_operation!("pipeline", {
        let generated = generate(rng, input.length, &input.name)?;

        let path = fasta_path(&config.output_dir, &input.sequence_id);
        write_fasta(&path, &input.sequence_id, &input.description, &generated.annotated)?;
        info!(path = %path.display(), "séquence sauvegardée");

        let stats = SequenceStats::compute(&generated.raw)?;

        Ok(PipelineReport { path, generated, stats })
    })
}
