//! Affichage console

pub mod stats;
