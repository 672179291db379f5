//! Types d'erreurs pour la génération de séquences

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeqError {
    #[error("Longueur de séquence invalide: {0} (doit être >= 1)")]
    InvalidLength(usize),

    #[error("Position d'insertion hors plage: {offset} pas dans [0, {len})")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("Séquence vide: impossible de calculer les statistiques")]
    EmptySequence,

    #[error("Erreur IO sur {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Entrée fermée avant la fin de la saisie")]
    InputClosed,

    #[error("Erreur de lecture/écriture console: {0}")]
    Read(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SeqError>;
