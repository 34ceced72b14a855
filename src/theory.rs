//! Music theory primitives: chromatic notes, scale types and the
//! interval arithmetic that everything else is built on.
//!
//! All note arithmetic is modulo 12. A scale is a root plus a fixed list
//! of semitone offsets; membership is a containment test against the
//! notes derived from that list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScalarError;

/// One of the 12 chromatic pitch classes, spelled with sharps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Note {
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D#")]
    DSharp,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "G#")]
    GSharp,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A#")]
    ASharp,
    #[serde(rename = "B")]
    B,
}

/// All 12 chromatic notes in ascending order from C.
pub const NOTES: [Note; 12] = [
    Note::C,
    Note::CSharp,
    Note::D,
    Note::DSharp,
    Note::E,
    Note::F,
    Note::FSharp,
    Note::G,
    Note::GSharp,
    Note::A,
    Note::ASharp,
    Note::B,
];

/// Circle of fifths, clockwise from C.
pub const CIRCLE_OF_FIFTHS: [Note; 12] = [
    Note::C,
    Note::G,
    Note::D,
    Note::A,
    Note::E,
    Note::B,
    Note::FSharp,
    Note::CSharp,
    Note::GSharp,
    Note::DSharp,
    Note::ASharp,
    Note::F,
];

impl Note {
    /// Position in the chromatic scale (C = 0 .. B = 11).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Note for any chromatic index; values outside 0..12 wrap.
    pub fn from_index(index: i32) -> Note {
        NOTES[index.rem_euclid(12) as usize]
    }

    /// Note `semitones` above this one (negative values go down).
    pub fn transpose(self, semitones: i32) -> Note {
        Note::from_index(self.index() as i32 + semitones.rem_euclid(12))
    }

    /// ASCII name as used in settings files (`C#`).
    pub fn name(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::CSharp => "C#",
            Note::D => "D",
            Note::DSharp => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::FSharp => "F#",
            Note::G => "G",
            Note::GSharp => "G#",
            Note::A => "A",
            Note::ASharp => "A#",
            Note::B => "B",
        }
    }

    /// Display name with a proper sharp sign (`C♯`).
    pub fn display_name(self) -> &'static str {
        match self {
            Note::CSharp => "C♯",
            Note::DSharp => "D♯",
            Note::FSharp => "F♯",
            Note::GSharp => "G♯",
            Note::ASharp => "A♯",
            natural => natural.name(),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Note {
    type Err = ScalarError;

    /// Accepts `C#`, `C♯`, `Db`, `D♭` and lowercase letters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars
            .next()
            .ok_or_else(|| ScalarError::UnknownNote(s.to_string()))?;
        let natural = match letter.to_ascii_uppercase() {
            'C' => Note::C,
            'D' => Note::D,
            'E' => Note::E,
            'F' => Note::F,
            'G' => Note::G,
            'A' => Note::A,
            'B' => Note::B,
            _ => return Err(ScalarError::UnknownNote(s.to_string())),
        };
        let accidental: String = chars.collect();
        match accidental.as_str() {
            "" => Ok(natural),
            "#" | "♯" | "s" | "sharp" => Ok(natural.transpose(1)),
            "b" | "♭" | "flat" => Ok(natural.transpose(-1)),
            _ => Err(ScalarError::UnknownNote(s.to_string())),
        }
    }
}

/// A scale family, defined by its semitone offsets from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleType {
    #[default]
    Major,
    /// Natural minor.
    Minor,
    /// Major pentatonic.
    Pentatonic,
    Blues,
}

impl ScaleType {
    pub const ALL: [ScaleType; 4] = [
        ScaleType::Major,
        ScaleType::Minor,
        ScaleType::Pentatonic,
        ScaleType::Blues,
    ];

    /// Semitones from the root, ascending.
    pub fn intervals(self) -> &'static [i32] {
        match self {
            ScaleType::Major => &[0, 2, 4, 5, 7, 9, 11],  // W-W-H-W-W-W-H
            ScaleType::Minor => &[0, 2, 3, 5, 7, 8, 10],  // W-H-W-W-H-W-W
            ScaleType::Pentatonic => &[0, 2, 4, 7, 9],
            ScaleType::Blues => &[0, 3, 5, 6, 7, 10],
        }
    }

    /// Identifier used in settings (`major`).
    pub fn id(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Minor => "minor",
            ScaleType::Pentatonic => "pentatonic",
            ScaleType::Blues => "blues",
        }
    }

    /// Human-readable label (`Major`).
    pub fn label(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::Minor => "Minor",
            ScaleType::Pentatonic => "Pentatonic",
            ScaleType::Blues => "Blues",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScaleType {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        ScaleType::ALL
            .into_iter()
            .find(|scale| scale.id() == lowered)
            .ok_or_else(|| ScalarError::UnknownScale(s.to_string()))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Free functions
// ═══════════════════════════════════════════════════════════════════════

/// Index of a note in the chromatic scale.
pub fn get_note_index(note: Note) -> usize {
    note.index()
}

/// Note at a number of semitones from a root.
pub fn get_note_at_interval(root: Note, semitones: i32) -> Note {
    root.transpose(semitones)
}

/// Note sounded at `fret` on a string tuned to `open_note`.
pub fn get_note_at_fret(open_note: Note, fret: u32) -> Note {
    get_note_at_interval(open_note, (fret % 12) as i32)
}

/// All notes of a scale, in interval order starting at the root.
pub fn get_scale_notes(root: Note, scale: ScaleType) -> Vec<Note> {
    scale
        .intervals()
        .iter()
        .map(|&interval| get_note_at_interval(root, interval))
        .collect()
}

pub fn is_note_in_scale(note: Note, root: Note, scale: ScaleType) -> bool {
    get_scale_notes(root, scale).contains(&note)
}

pub fn is_root(note: Note, root: Note) -> bool {
    note == root
}

/// Display spelling with the `♯` sign.
pub fn enharmonic_display(note: Note) -> &'static str {
    note.display_name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_chromatic_order() {
        for (i, note) in NOTES.iter().enumerate() {
            assert_eq!(get_note_index(*note), i);
            assert_eq!(Note::from_index(i as i32), *note);
        }
    }

    #[test]
    fn interval_arithmetic_wraps() {
        assert_eq!(get_note_at_interval(Note::A, 3), Note::C);
        assert_eq!(get_note_at_interval(Note::B, 1), Note::C);
        assert_eq!(get_note_at_interval(Note::C, -1), Note::B);
        assert_eq!(get_note_at_interval(Note::E, 24), Note::E);
        assert_eq!(get_note_at_fret(Note::G, 17), Note::C);
    }

    #[test]
    fn extreme_offsets_reduce_modulo_12() {
        // i32::MAX = 12 * 178956970 + 7, i32::MIN = 12 * -178956971 + 4
        assert_eq!(get_note_at_interval(Note::B, i32::MAX), Note::FSharp);
        assert_eq!(get_note_at_interval(Note::C, i32::MIN), Note::E);
        assert_eq!(get_note_at_fret(Note::A, u32::MAX), Note::C);
    }

    #[test]
    fn scale_notes() {
        assert_eq!(
            get_scale_notes(Note::C, ScaleType::Major),
            vec![Note::C, Note::D, Note::E, Note::F, Note::G, Note::A, Note::B]
        );
        assert_eq!(
            get_scale_notes(Note::A, ScaleType::Minor),
            vec![Note::A, Note::B, Note::C, Note::D, Note::E, Note::F, Note::G]
        );
        assert_eq!(
            get_scale_notes(Note::G, ScaleType::Pentatonic),
            vec![Note::G, Note::A, Note::B, Note::D, Note::E]
        );
        assert_eq!(
            get_scale_notes(Note::E, ScaleType::Blues),
            vec![Note::E, Note::G, Note::A, Note::ASharp, Note::B, Note::D]
        );
    }

    #[test]
    fn membership_and_root() {
        assert!(is_note_in_scale(Note::FSharp, Note::D, ScaleType::Major));
        assert!(!is_note_in_scale(Note::F, Note::D, ScaleType::Major));
        assert!(is_root(Note::D, Note::D));
        assert!(!is_root(Note::A, Note::D));
    }

    #[test]
    fn parse_note_names() {
        assert_eq!("C#".parse::<Note>().unwrap(), Note::CSharp);
        assert_eq!("C♯".parse::<Note>().unwrap(), Note::CSharp);
        assert_eq!("Db".parse::<Note>().unwrap(), Note::CSharp);
        assert_eq!("cb".parse::<Note>().unwrap(), Note::B);
        assert_eq!(" a ".parse::<Note>().unwrap(), Note::A);
        assert!("H".parse::<Note>().is_err());
        assert!("".parse::<Note>().is_err());
        assert!("C##".parse::<Note>().is_err());
    }

    #[test]
    fn display_uses_sharp_sign() {
        assert_eq!(enharmonic_display(Note::FSharp), "F♯");
        assert_eq!(Note::E.to_string(), "E");
        assert_eq!(Note::ASharp.name(), "A#");
    }

    #[test]
    fn parse_scale_types() {
        assert_eq!("Blues".parse::<ScaleType>().unwrap(), ScaleType::Blues);
        assert!("dorian".parse::<ScaleType>().is_err());
    }
}
