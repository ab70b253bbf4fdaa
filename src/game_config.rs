// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout};

pub struct StaticGameConfig<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
    board_layout: &'a board_layout::BoardLayout<'a>,
    rack_size: i8,
    num_players: u8,
    bingo_bonus: i16,
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &'a alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &'a board_layout::BoardLayout<'a> {
        match self {
            GameConfig::Static(x) => x.board_layout,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    #[inline(always)]
    pub fn num_players(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_players,
        }
    }

    // only a play using exactly a full rack earns the bonus
    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: usize) -> i16 {
        match self {
            GameConfig::Static(x) => {
                if num_played == x.rack_size as usize {
                    x.bingo_bonus
                } else {
                    0
                }
            }
        }
    }
}

pub fn make_common_english_game_config() -> GameConfig<'static> {
    GameConfig::Static(StaticGameConfig {
        alphabet: &alphabet::ENGLISH_ALPHABET,
        board_layout: &board_layout::COMMON_BOARD_LAYOUT,
        rack_size: 7,
        num_players: 2,
        bingo_bonus: 50,
    })
}

// Worker threads for the move generator. There is never any use for more
// workers than there are board lines.
pub fn default_num_threads(game_config: &GameConfig) -> usize {
    let num_lines = game_config.board_layout().dim().rows as usize;
    num_cpus::get().clamp(1, num_lines)
}
