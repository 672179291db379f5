//! Saisie interactive des paramètres

use adnseq_core::{PipelineInput, Result, SeqError};
use std::io::{BufRead, Write};
use tracing::debug;

pub const LENGTH_PROMPT: &str = "Podaj długość sekwencji: ";
pub const ID_PROMPT: &str = "Podaj ID sekwencji: ";
pub const DESCRIPTION_PROMPT: &str = "Podaj opis sekwencji: ";
pub const NAME_PROMPT: &str = "Podaj imię: ";

pub const NOT_AN_INTEGER: &str = "Proszę podać poprawną liczbę całkowitą.";
pub const NOT_POSITIVE: &str = "Długość sekwencji musi być większa od zera.";

/// Lit les réponses sur `input` et écrit les invites sur `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Affiche `prompt` et retourne la ligne saisie sans son retour à la ligne.
    /// Toute valeur est acceptée, y compris une chaîne vide.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SeqError::InputClosed);
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }

    /// Redemande la longueur jusqu'à obtenir un entier strictement positif
    pub fn read_length(&mut self) -> Result<usize> {
        loop {
            let answer = self.read_line(LENGTH_PROMPT)?;
            match parse_length(&answer) {
                Ok(length) => return Ok(length),
                Err(message) => {
                    debug!(answer = %answer, "longueur refusée");
                    writeln!(self.output, "{}", message)?;
                }
            }
        }
    }

    /// Saisit les quatre valeurs dans l'ordre: longueur, ID, description, nom
    pub fn read_input(&mut self) -> Result<PipelineInput> {
        let length = self.read_length()?;
        let sequence_id = self.read_line(ID_PROMPT)?;
        let description = self.read_line(DESCRIPTION_PROMPT)?;
        let name = self.read_line(NAME_PROMPT)?;

        Ok(PipelineInput {
            length,
            sequence_id,
            description,
            name,
        })
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

/// Valide une longueur saisie. L'erreur est le message à afficher.
fn parse_length(answer: &str) -> std::result::Result<usize, &'static str> {
    let digits = strip_digit_separators(answer.trim()).ok_or(NOT_AN_INTEGER)?;
    let value: i128 = digits.parse().map_err(|_| NOT_AN_INTEGER)?;
    if value <= 0 {
        return Err(NOT_POSITIVE);
    }
    usize::try_from(value).map_err(|_| NOT_AN_INTEGER)
}

/// Retire les séparateurs `_` placés entre deux chiffres (`1_000`).
/// Un `_` en tête, en fin ou doublé rend la saisie invalide.
fn strip_digit_separators(s: &str) -> Option<String> {
    let unsigned = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    if unsigned.starts_with('_') || unsigned.ends_with('_') || unsigned.contains("__") {
        return None;
    }
    Some(s.replace('_', ""))
}
