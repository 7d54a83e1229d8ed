//! Fixed dot-position tables for the kana syllabary.
//!
//! Single source of truth, consumed once by `SyllableMapper::new`.

/// Vowel letter → raised dot positions.
pub(super) const VOWEL_DOTS: &[(char, &[u8])] = &[
    ('A', &[1]),
    ('I', &[1, 2]),
    ('U', &[1, 4]),
    ('E', &[1, 2, 4]),
    ('O', &[2, 4]),
];

/// Consonant-row key → raised dot positions of the row marker.
///
/// "W" carries no dots of its own. "NN" is the moraic nasal ん, a
/// complete cell by itself; its pattern coincides with the M row
/// marker, as both are dots 3,5,6 in six-dot kana braille.
pub(super) const COLUMN_DOTS: &[(&str, &[u8])] = &[
    ("K", &[6]),
    ("S", &[5, 6]),
    ("T", &[3, 5]),
    ("N", &[3]),
    ("H", &[3, 6]),
    ("M", &[3, 5, 6]),
    ("Y", &[4]),
    ("R", &[5]),
    ("W", &[]),
    ("NN", &[3, 5, 6]),
];
