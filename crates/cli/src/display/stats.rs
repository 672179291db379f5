//! Affichage des statistiques

use adnseq_core::SequenceStats;
use std::io::{self, Write};
use std::path::Path;

/// Confirme l'enregistrement du fichier
pub fn write_saved_path<W: Write>(w: &mut W, path: &Path) -> io::Result<()> {
    writeln!(w, "Sekwencja została zapisana do pliku {}", path.display())
}

/// Affiche les cinq statistiques, une décimale chacune
pub fn write_stats<W: Write>(w: &mut W, stats: &SequenceStats) -> io::Result<()> {
    writeln!(w, "Statystyki sekwencji:")?;
    writeln!(w, "A: {:.1}%", stats.pct_a)?;
    writeln!(w, "C: {:.1}%", stats.pct_c)?;
    writeln!(w, "G: {:.1}%", stats.pct_g)?;
    writeln!(w, "T: {:.1}%", stats.pct_t)?;
    writeln!(w, "%CG: {:.1}%", stats.gc_ratio)?;
    Ok(())
}

/// Résumé détaillé, affiché en mode verbeux
pub fn write_summary<W: Write>(w: &mut W, stats: &SequenceStats) -> io::Result<()> {
    let counts = stats.counts();
    writeln!(w, "\n┌────────────────────────────────────────────────┐")?;
    writeln!(w, "│ Comptages                                      │")?;
    writeln!(w, "├────────────────────────────────────────────────┤")?;
    writeln!(w, "│ A / C / G / T : {:>6} {:>6} {:>6} {:>6}    │", counts.a, counts.c, counts.g, counts.t)?;
    writeln!(w, "│ GC            : {:>8.1}%                      │", stats.gc_content())?;
    writeln!(w, "└────────────────────────────────────────────────┘")?;
    Ok(())
}
