use std::collections::HashMap;

use tracing::{debug, debug_span};

use crate::cell::Cell;

use super::table::{COLUMN_DOTS, VOWEL_DOTS};

/// Conversion failure: the token fits none of the recognized syllable
/// shapes. Malformed tokens are a legitimate outcome of upstream
/// segmentation, so this is a value, never a panic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("unrecognized syllable: {0:?}")]
    UnrecognizedSyllable(String),
}

/// Phonetic shape of a recognized token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// Bare vowel: A I U E O.
    Vowel(char),
    /// Consonant row + vowel: KA through RO.
    ConsonantVowel(char, char),
    /// Y/W row + restricted vowel, written with the vowel pattern
    /// shifted to the bottom rows: YA YU YO WA WO.
    Glide { row: char, vowel: char },
    /// Standalone ん, romanized as a single N.
    MoraicNasal,
}

/// Classify a token against the five syllable shapes, first match wins.
/// `None` means the token is not a recognized mora.
fn classify(token: &str) -> Option<Shape> {
    match token.as_bytes() {
        &[v] if is_vowel(v) => Some(Shape::Vowel(char::from(v))),
        &[c, v] if is_full_row(c) && is_vowel(v) => {
            Some(Shape::ConsonantVowel(char::from(c), char::from(v)))
        }
        &[b'Y', v @ (b'A' | b'U' | b'O')] => Some(Shape::Glide {
            row: 'Y',
            vowel: char::from(v),
        }),
        &[b'W', v @ (b'A' | b'O')] => Some(Shape::Glide {
            row: 'W',
            vowel: char::from(v),
        }),
        &[b'N'] => Some(Shape::MoraicNasal),
        _ => None,
    }
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'A' | b'I' | b'U' | b'E' | b'O')
}

/// Consonant rows that combine with all five vowels. Y and W take the
/// glide shapes instead.
fn is_full_row(b: u8) -> bool {
    matches!(b, b'K' | b'S' | b'T' | b'N' | b'H' | b'M' | b'R')
}

/// Shift a vowel pattern to the bottom of the cell: rotate the rows
/// down until the bottom row carries a dot, at most three rotations.
/// The empty cell is a fixed point and comes back unchanged.
pub(super) fn bottom_shift(cell: Cell) -> Cell {
    let mut shifted = cell;
    for _ in 0..Cell::ROWS {
        if !shifted.bottom_row_empty() {
            break;
        }
        shifted = shifted.rotate_down();
    }
    shifted
}

/// Maps one romanized kana syllable to its braille cell.
///
/// Owns the vowel and consonant-row tables, built once in [`new`] from
/// the const dot lists in `table.rs` and never mutated afterwards, so a
/// single instance can serve concurrent callers through `&self`.
///
/// [`new`]: SyllableMapper::new
#[derive(Debug)]
pub struct SyllableMapper {
    vowels: HashMap<char, Cell>,
    columns: HashMap<&'static str, Cell>,
}

impl SyllableMapper {
    pub fn new() -> Self {
        let vowels = VOWEL_DOTS
            .iter()
            .map(|&(vowel, dots)| (vowel, Cell::from_dots(dots)))
            .collect();
        let columns = COLUMN_DOTS
            .iter()
            .map(|&(key, dots)| (key, Cell::from_dots(dots)))
            .collect();
        Self { vowels, columns }
    }

    /// Convert one uppercase romanized mora into its braille cell.
    ///
    /// Returns [`ConvertError::UnrecognizedSyllable`] for anything that
    /// is not a single recognized mora: wrong case, wrong length,
    /// letters outside the syllabary, or the glide vowels that do not
    /// exist (YI, YE, WI, WU, WE).
    pub fn convert(&self, token: &str) -> Result<Cell, ConvertError> {
        let span = debug_span!("convert", token);
        let _guard = span.enter();

        let Some(shape) = classify(token) else {
            debug!("no syllable shape matched");
            return Err(ConvertError::UnrecognizedSyllable(token.to_string()));
        };
        debug!(?shape, "classified");

        let cell = match shape {
            Shape::Vowel(v) => self.vowel(v),
            Shape::ConsonantVowel(c, v) => self.column(c) | self.vowel(v),
            Shape::Glide { row, vowel } => self.column(row) | bottom_shift(self.vowel(vowel)),
            Shape::MoraicNasal => self.columns["NN"],
        };
        Ok(cell)
    }

    /// Cell for a bare vowel letter, if it is one of A I U E O.
    pub fn vowel_cell(&self, vowel: char) -> Option<Cell> {
        self.vowels.get(&vowel).copied()
    }

    /// Row-marker cell for a consonant-row key ("K" through "W", or
    /// "NN" for the moraic nasal). The "W" row legitimately maps to the
    /// empty cell.
    pub fn column_cell(&self, key: &str) -> Option<Cell> {
        self.columns.get(key).copied()
    }

    fn vowel(&self, vowel: char) -> Cell {
        // classify only produces vowels present in the table
        self.vowels[&vowel]
    }

    fn column(&self, row: char) -> Cell {
        // classify only produces rows present in the table
        let mut buf = [0u8; 4];
        let key: &str = row.encode_utf8(&mut buf);
        self.columns[key]
    }
}

impl Default for SyllableMapper {
    fn default() -> Self {
        Self::new()
    }
}
