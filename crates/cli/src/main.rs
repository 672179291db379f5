//! CLI pour adnseq

use adnseq_core::{init_logging, level_from_verbosity, run_pipeline, PipelineConfig};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod display;
mod prompt;

use display::stats::{write_saved_path, write_stats, write_summary};
use prompt::Prompter;

#[derive(Parser)]
#[command(name = "adnseq")]
#[command(about = "Génère une séquence ADN aléatoire portant un nom et l'exporte en FASTA", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    /// Seed du générateur aléatoire (reproductibilité)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Répertoire du fichier FASTA (répertoire courant par défaut)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            output_dir: self.output_dir.clone().unwrap_or_default(),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(level_from_verbosity(cli.verbose));

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run_session(&mut prompter, &cli.pipeline_config(), cli.verbose > 0)
}

/// Saisie, génération, export puis affichage des statistiques
fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &PipelineConfig,
    verbose: bool,
) -> Result<()> {
    let input = prompter.read_input().context("Lecture des paramètres impossible")?;

    let report = run_pipeline(&input, config)
        .with_context(|| format!("Échec de la génération de la séquence '{}'", input.sequence_id))?;

    let out = prompter.output();
    write_saved_path(out, &report.path)?;
    write_stats(out, &report.stats)?;
    if verbose {
        write_summary(out, &report.stats)?;
    }
    out.flush()?;

    Ok(())
}
