//! Byte ↔ word translation for pairing codes.
//!
//! Word positions alternate between the two tables, starting with the odd
//! one, so every byte of the shared secret is speakable as one word and a
//! listener can tell from position alone which table to reverse-look it
//! up in.

mod tables;

use std::collections::HashMap;
use std::sync::OnceLock;

use tables::{EVEN_WORDS, ODD_WORDS};

/// Which of the two word tables a token draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    /// Table for the word at `index` within a code (0-based; the first
    /// word is odd-parity).
    pub fn of_word_index(index: usize) -> Parity {
        if index % 2 == 0 {
            Parity::Odd
        } else {
            Parity::Even
        }
    }

    /// Table for the fragment under completion, given the token count of
    /// the partial code (channel id included). Two tokens means the first
    /// word is in progress, so an even count selects the odd table.
    pub fn of_token_count(count: usize) -> Parity {
        if count % 2 == 0 {
            Parity::Odd
        } else {
            Parity::Even
        }
    }

    fn table(self) -> &'static [&'static str; 256] {
        match self {
            Parity::Odd => &ODD_WORDS,
            Parity::Even => &EVEN_WORDS,
        }
    }
}

/// Word for `byte` in the table of the given parity, source capitalization.
pub fn word_for_byte(parity: Parity, byte: u8) -> &'static str {
    parity.table()[byte as usize]
}

/// Case-insensitive reverse lookup of a word within one table.
pub fn byte_for_word(parity: Parity, word: &str) -> Option<u8> {
    index(parity).by_word.get(&word.to_ascii_lowercase()).copied()
}

/// All 256 words of one table, lowercased, in byte order. Built once on
/// first use; this is the view prefix search runs against.
pub fn lowercase_words(parity: Parity) -> &'static [String] {
    &index(parity).lowercase
}

struct Index {
    lowercase: Vec<String>,
    by_word: HashMap<String, u8>,
}

impl Index {
    fn build(table: &[&'static str; 256]) -> Self {
        let lowercase: Vec<String> = table.iter().map(|w| w.to_ascii_lowercase()).collect();
        let by_word = lowercase
            .iter()
            .enumerate()
            .map(|(byte, w)| (w.clone(), byte as u8))
            .collect();
        Self { lowercase, by_word }
    }
}

fn index(parity: Parity) -> &'static Index {
    static ODD: OnceLock<Index> = OnceLock::new();
    static EVEN: OnceLock<Index> = OnceLock::new();
    match parity {
        Parity::Odd => ODD.get_or_init(|| Index::build(&ODD_WORDS)),
        Parity::Even => EVEN.get_or_init(|| Index::build(&EVEN_WORDS)),
    }
}
