// Copyright (C) 2020-2026 Andy Kurnia.

use super::{bag, board, error, game_config, movegen};
use rand::prelude::*;

pub fn use_tiles<II: IntoIterator<Item = u8>>(
    rack: &mut Vec<u8>,
    tiles_iter: II,
) -> error::Returns<()> {
    for tile in tiles_iter {
        let pos = rack
            .iter()
            .rposition(|&t| t == tile)
            .ok_or_else(|| format!("rack has no {}", tile as char))?;
        rack.swap_remove(pos);
    }
    Ok(())
}

// Write the newly placed letters of a play into the empty squares of its
// line, starting at its anchor.
pub fn place_tiles(board: &mut board::Board, play: &movegen::Play) -> error::Returns<()> {
    let anchor = play.position.anchor();
    let dim = board.dim();
    let strider = dim.lane(anchor.down, anchor.lane);
    let mut idx = anchor.idx;
    for &letter in play.placed.as_bytes() {
        while idx < strider.len() && board.tiles()[strider.at(idx)] != 0 {
            idx += 1;
        }
        if idx >= strider.len() {
            return_error!(format!("{} does not fit on the board", play.placed));
        }
        let (row, col) = board::Anchor { idx, ..anchor }.grid_row_col();
        board.set(row, col, letter);
        idx += 1;
    }
    Ok(())
}

#[derive(Clone)]
pub struct GamePlayer {
    pub score: i16,
    pub rack: Vec<u8>,
}

// The mutable side of a game. Searches only ever see a borrowed board.
#[derive(Clone)]
pub struct GameState<'a> {
    pub game_config: &'a game_config::GameConfig<'a>,
    pub players: Box<[GamePlayer]>,
    pub board: board::Board,
    pub bag: bag::Bag,
    pub turn: u8,
}

impl<'a> GameState<'a> {
    pub fn new(game_config: &'a game_config::GameConfig) -> Self {
        let rack_size = game_config.rack_size() as usize;
        Self {
            game_config,
            players: (0..game_config.num_players())
                .map(|_| GamePlayer {
                    score: 0,
                    rack: Vec::with_capacity(rack_size),
                })
                .collect(),
            board: board::Board::new(game_config.board_layout().dim()),
            bag: bag::Bag::new(game_config.alphabet()),
            turn: 0,
        }
    }

    pub fn reset_and_draw_tiles(&mut self, rng: &mut dyn RngCore) {
        *self = Self::new(self.game_config);
        self.bag.shuffle(rng);
        let rack_size = self.game_config.rack_size() as usize;
        for player in self.players.iter_mut() {
            self.bag.replenish(&mut player.rack, rack_size);
        }
    }

    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.turn as usize]
    }

    // Nothing changes unless both the rack and the board accept the play.
    pub fn play(&mut self, play: &movegen::Play) -> error::Returns<()> {
        let rack_size = self.game_config.rack_size() as usize;
        let current_player = &mut self.players[self.turn as usize];
        let mut rack = current_player.rack.clone();
        use_tiles(&mut rack, play.placed.bytes())?;
        let mut board = self.board.clone();
        place_tiles(&mut board, play)?;
        self.board = board;
        current_player.rack = rack;
        current_player.score += play.score;
        self.bag.replenish(&mut current_player.rack, rack_size);
        Ok(())
    }

    pub fn next_turn(&mut self) {
        let num_players = self.players.len() as u8;
        self.turn += 1;
        if self.turn >= num_players {
            self.turn = 0;
        }
    }

    // someone went out with the bag empty
    pub fn is_played_out(&self) -> bool {
        self.bag.is_empty() && self.players.iter().any(|player| player.rack.is_empty())
    }
}
