//! Statistiques de composition nucléotidique

use crate::error::{Result, SeqError};

/// Occurrences de chaque nucléotide
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NucleotideCounts {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
}

impl NucleotideCounts {
    /// Compte les nucléotides d'une séquence. Les autres caractères, minuscules
    /// comprises, sont ignorés.
    pub fn count(sequence: &str) -> Self {
        let mut counts = Self::default();
        for c in sequence.chars() {
            match c {
                'A' => counts.a += 1,
                'C' => counts.c += 1,
                'G' => counts.g += 1,
                'T' => counts.t += 1,
                _ => {}
            }
        }
        counts
    }

    pub fn gc(&self) -> usize {
        self.c + self.g
    }

    pub fn at(&self) -> usize {
        self.a + self.t
    }
}

/// Pourcentages par base et ratio (C+G)/(A+T)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequenceStats {
    pub pct_a: f64,
    pub pct_c: f64,
    pub pct_g: f64,
    pub pct_t: f64,
    /// 100 * (C + G) / (A + T), 0 si la séquence ne contient ni A ni T
    pub gc_ratio: f64,
    counts: NucleotideCounts,
}

impl SequenceStats {
    /// Calcule les statistiques d'une séquence non vide
    pub fn compute(sequence: &str) -> Result<Self> {
        let length = sequence.chars().count();
        if length == 0 {
            return Err(SeqError::EmptySequence);
        }

        let counts = NucleotideCounts::count(sequence);
        let len = length as f64;
        let percent = |count: usize| 100.0 * count as f64 / len;

        let gc_ratio = if counts.at() > 0 {
            100.0 * counts.gc() as f64 / counts.at() as f64
        } else {
            0.0
        };

        Ok(Self {
            pct_a: percent(counts.a),
            pct_c: percent(counts.c),
            pct_g: percent(counts.g),
            pct_t: percent(counts.t),
            gc_ratio,
            counts,
        })
    }

    pub fn counts(&self) -> NucleotideCounts {
        self.counts
    }

    /// Contenu GC classique, en pourcentage de la longueur totale
    pub fn gc_content(&self) -> f64 {
        self.pct_c + self.pct_g
    }
}
