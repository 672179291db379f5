//! Export au format FASTA

use crate::error::{Result, SeqError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Largeur de ligne standard FASTA
pub const LINE_WIDTH: usize = 60;

/// Chemin du fichier de sortie: `{dir}/{sequence_id}.fasta`.
/// L'identifiant n'est pas nettoyé.
pub fn fasta_path(dir: &Path, sequence_id: &str) -> PathBuf {
    dir.join(format!("{}.fasta", sequence_id))
}

/// Enregistrement FASTA unique
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord<'a> {
    pub id: &'a str,
    pub description: &'a str,
    pub sequence: &'a str,
}

impl<'a> FastaRecord<'a> {
    pub fn new(id: &'a str, description: &'a str, sequence: &'a str) -> Self {
        Self { id, description, sequence }
    }

    /// Écrit l'en-tête puis la séquence découpée en lignes de `LINE_WIDTH` caractères
    pub fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        writeln!(w, ">{} {}", self.id, self.description)?;
        for line in wrap(self.sequence, LINE_WIDTH) {
            writeln!(w, "{}", line)?;
        }
        Ok(())
    }

    /// Convertit au format FASTA en mémoire
    pub fn to_fasta_string(&self) -> String {
        let mut out = String::with_capacity(
            self.id.len() + self.description.len() + self.sequence.len() + self.sequence.len() / LINE_WIDTH + 4,
        );
        out.push('>');
        out.push_str(self.id);
        out.push(' ');
        out.push_str(self.description);
        out.push('\n');
        for line in wrap(self.sequence, LINE_WIDTH) {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Découpe `s` en morceaux d'au plus `width` caractères, sans couper un
/// caractère multi-octet.
fn wrap(s: &str, width: usize) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest
            .char_indices()
            .nth(width)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}

/// Écrit une séquence dans `path`, en écrasant un fichier existant.
///
/// Aucun nettoyage n'est fait si l'écriture échoue en cours de route.
pub fn write_fasta(path: &Path, sequence_id: &str, description: &str, sequence: &str) -> Result<()> {
    let io_err = |source| SeqError::Io { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    FastaRecord::new(sequence_id, description, sequence)
        .write_to(&mut writer)
        .map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    debug!(path = %path.display(), len = sequence.chars().count(), "fichier FASTA écrit");
    Ok(())
}
