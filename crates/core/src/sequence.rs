//! Génération de séquences ADN aléatoires et insertion du nom

use crate::error::{Result, SeqError};
use rand::Rng;
use tracing::debug;

/// Nucléotides standards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    A, // Adénine
    C, // Cytosine
    G, // Guanine
    T, // Thymine
}

impl Nucleotide {
    /// Alphabet complet, dans l'ordre de tirage
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// Convertit un nucléotide en caractère
    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    /// Tire un nucléotide uniformément
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Résultat d'une génération: séquence brute et séquence annotée
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSequence {
    /// Nucléotides seuls, utilisés pour les statistiques
    pub raw: String,
    /// Séquence avec le nom inséré, utilisée pour l'export FASTA
    pub annotated: String,
    /// Index (en caractères) du nucléotide devant lequel le nom est inséré
    pub offset: usize,
}

/// Génère une séquence aléatoire de `length` nucléotides et insère `name`
/// à une position tirée uniformément dans `[0, length - 1]`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, length: usize, name: &str) -> Result<GeneratedSequence> {
    if length == 0 {
        return Err(SeqError::InvalidLength(length));
    }

    let raw: String = (0..length).map(|_| Nucleotide::random(rng).as_char()).collect();
    let offset = rng.gen_range(0..length);
    let annotated = splice_name(&raw, name, offset)?;

    debug!(length, name_len = name.chars().count(), offset, "séquence générée");

    Ok(GeneratedSequence { raw, annotated, offset })
}

/// Insère `name` juste avant le nucléotide d'index `offset`.
///
/// `offset` est un index d'octet. Pour une séquence générée (ASCII) il
/// coïncide avec l'index de caractère. Un offset qui tombe au milieu d'un
/// caractère multi-octet est refusé.
pub fn splice_name(raw: &str, name: &str, offset: usize) -> Result<String> {
    if offset >= raw.len() || !raw.is_char_boundary(offset) {
        return Err(SeqError::OffsetOutOfRange { offset, len: raw.len() });
    }

    let mut annotated = String::with_capacity(raw.len() + name.len());
    annotated.push_str(&raw[..offset]);
    annotated.push_str(name);
    annotated.push_str(&raw[offset..]);
    Ok(annotated)
}
