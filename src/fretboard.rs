//! Fretboard model: instrument tuning and the per-position note grid.

use serde::{Deserialize, Serialize};

use crate::theory::{get_note_at_fret, get_scale_notes, is_root, Note, ScaleType};

/// Mandolin tuning, low to high. Each course is a unison pair; one line
/// is drawn per course.
pub const MANDOLIN_TUNING: [Note; 4] = [Note::G, Note::D, Note::A, Note::E];

/// Typical mandolin fretboard.
pub const FRET_COUNT: u32 = 17;

/// A fretted instrument: open-string tuning plus number of frets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Open-string notes, lowest string first
    pub tuning: Vec<Note>,
    /// Highest fret (the open position is fret 0)
    pub fret_count: u32,
}

impl Default for Instrument {
    fn default() -> Self {
        Self::mandolin()
    }
}

impl Instrument {
    pub fn mandolin() -> Self {
        Self {
            tuning: MANDOLIN_TUNING.to_vec(),
            fret_count: FRET_COUNT,
        }
    }

    pub fn string_count(&self) -> usize {
        self.tuning.len()
    }

    /// Every (string, fret) position with its note and scale flags.
    /// Ordered by string, then fret ascending from the open position.
    pub fn fret_notes(&self, root: Note, scale: ScaleType) -> Vec<FretNote> {
        let scale_notes = get_scale_notes(root, scale);
        let mut notes = Vec::with_capacity(self.tuning.len() * (self.fret_count as usize + 1));

        for (string_index, &open_note) in self.tuning.iter().enumerate() {
            for fret in 0..=self.fret_count {
                let note = get_note_at_fret(open_note, fret);
                notes.push(FretNote {
                    string_index,
                    fret,
                    note,
                    is_in_scale: scale_notes.contains(&note),
                    is_root: is_root(note, root),
                });
            }
        }

        notes
    }
}

/// One position on the fretboard, derived fresh for each (root, scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FretNote {
    pub string_index: usize,
    pub fret: u32,
    pub note: Note,
    pub is_in_scale: bool,
    pub is_root: bool,
}

/// Fretboard notes for the standard mandolin.
pub fn generate_fretboard_notes(root: Note, scale: ScaleType) -> Vec<FretNote> {
    Instrument::mandolin().fret_notes(root, scale)
}
