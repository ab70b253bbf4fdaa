// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

// Tiles are plain uppercase ASCII letters; 0 means "no tile".

pub struct Tile {
    label: u8,
    freq: u8,
    score: i8,
}

pub struct StaticAlphabet<'a> {
    tiles: &'a [Tile],
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.tiles.len() as u8,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    fn get(&self, idx: u8) -> &'a Tile {
        match self {
            Alphabet::Static(x) => &x.tiles[idx as usize],
        }
    }

    // index of a letter within the alphabet, if it is one
    #[inline(always)]
    pub fn tile_index(&self, letter: u8) -> Option<u8> {
        let idx = letter.wrapping_sub(b'A');
        if idx < self.len() && self.get(idx).label == letter {
            Some(idx)
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn label(&self, idx: u8) -> u8 {
        self.get(idx).label
    }

    // face value, 0 for anything that is not a tile
    #[inline(always)]
    pub fn score(&self, letter: u8) -> i16 {
        self.tile_index(letter)
            .map_or(0, |idx| self.get(idx).score as i16)
    }

    #[inline(always)]
    pub fn freq(&self, letter: u8) -> u8 {
        self.tile_index(letter).map_or(0, |idx| self.get(idx).freq)
    }

    pub fn num_tiles(&self) -> usize {
        (0..self.len()).map(|idx| self.get(idx).freq as usize).sum()
    }

    pub fn parse_rack(&self, s: &str, rack_size: usize) -> error::Returns<Vec<u8>> {
        let mut rack = Vec::with_capacity(rack_size);
        for c in s.chars() {
            let letter = c.to_ascii_uppercase();
            if !letter.is_ascii() || self.tile_index(letter as u8).is_none() {
                return_error!(format!("invalid tile {:?} in rack {:?}", c, s));
            }
            rack.push(letter as u8);
        }
        if rack.len() > rack_size {
            return_error!(format!(
                "rack {:?} has {} tiles, limit is {}",
                s,
                rack.len(),
                rack_size
            ));
        }
        Ok(rack)
    }

    pub fn fmt_rack(&self, rack: &[u8]) -> String {
        rack.iter().map(|&tile| tile as char).collect()
    }
}

pub static ENGLISH_ALPHABET: Alphabet = Alphabet::Static(StaticAlphabet {
    tiles: &[
        Tile { label: b'A', freq: 9, score: 1 },
        Tile { label: b'B', freq: 2, score: 3 },
        Tile { label: b'C', freq: 2, score: 3 },
        Tile { label: b'D', freq: 4, score: 2 },
        Tile { label: b'E', freq: 12, score: 1 },
        Tile { label: b'F', freq: 2, score: 4 },
        Tile { label: b'G', freq: 3, score: 2 },
        Tile { label: b'H', freq: 2, score: 4 },
        Tile { label: b'I', freq: 9, score: 1 },
        Tile { label: b'J', freq: 1, score: 8 },
        Tile { label: b'K', freq: 1, score: 5 },
        Tile { label: b'L', freq: 4, score: 1 },
        Tile { label: b'M', freq: 2, score: 3 },
        Tile { label: b'N', freq: 6, score: 1 },
        Tile { label: b'O', freq: 8, score: 1 },
        Tile { label: b'P', freq: 2, score: 3 },
        Tile { label: b'Q', freq: 1, score: 10 },
        Tile { label: b'R', freq: 6, score: 1 },
        Tile { label: b'S', freq: 4, score: 1 },
        Tile { label: b'T', freq: 6, score: 1 },
        Tile { label: b'U', freq: 4, score: 1 },
        Tile { label: b'V', freq: 2, score: 4 },
        Tile { label: b'W', freq: 2, score: 4 },
        Tile { label: b'X', freq: 1, score: 8 },
        Tile { label: b'Y', freq: 2, score: 4 },
        Tile { label: b'Z', freq: 1, score: 10 },
    ],
});
