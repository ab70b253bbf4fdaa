// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, matrix};

pub const BOARD_SIZE: i8 = 15;

// Positions are presented with row 0 at the bottom, the grid keeps row 0 at
// the top. This is the only place the two meet.
#[inline(always)]
pub fn flip_row(row: i8) -> i8 {
    BOARD_SIZE - 1 - row
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum Direction {
    Across,
    Down,
}

// Where a placement starts scanning, in presented coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Position {
    pub direction: Direction,
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub fn new(direction: Direction, row: i8, col: i8) -> Self {
        Self {
            direction,
            row,
            col,
        }
    }

    pub fn anchor(&self) -> Anchor {
        let row = flip_row(self.row);
        match self.direction {
            Direction::Across => Anchor {
                down: false,
                lane: row,
                idx: self.col,
            },
            Direction::Down => Anchor {
                down: true,
                lane: self.col,
                idx: row,
            },
        }
    }
}

// The same start cell in grid coordinates: lane is the grid row for across
// plays and the column for down plays, idx runs along the lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub down: bool,
    pub lane: i8,
    pub idx: i8,
}

impl Anchor {
    #[inline(always)]
    pub fn grid_row_col(&self) -> (i8, i8) {
        if self.down {
            (self.idx, self.lane)
        } else {
            (self.lane, self.idx)
        }
    }

    pub fn position(&self) -> Position {
        let (row, col) = self.grid_row_col();
        Position {
            direction: if self.down {
                Direction::Down
            } else {
                Direction::Across
            },
            row: flip_row(row),
            col,
        }
    }
}

// A board snapshot. Empty squares hold 0, others an uppercase letter.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    dim: matrix::Dim,
    tiles: Box<[u8]>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(matrix::Dim {
            rows: BOARD_SIZE,
            cols: BOARD_SIZE,
        })
    }
}

impl Board {
    pub fn new(dim: matrix::Dim) -> Self {
        Self {
            dim,
            tiles: vec![0u8; dim.area()].into_boxed_slice(),
        }
    }

    // rows are listed top to bottom, '.' marks an empty square
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> error::Returns<Self> {
        let mut board = Self::default();
        let dim = board.dim;
        if rows.len() != dim.rows as usize {
            return_error!(format!(
                "board: need {} rows, found {} rows",
                dim.rows,
                rows.len()
            ));
        }
        for (row_num, row) in (0i8..).zip(rows.iter()) {
            let row = row.as_ref().as_bytes();
            if row.len() != dim.cols as usize {
                return_error!(format!(
                    "board row {} (0-based): need {} cols, found {} cols",
                    row_num,
                    dim.cols,
                    row.len()
                ));
            }
            for (col_num, &b) in (0i8..).zip(row.iter()) {
                match b {
                    b'.' => {}
                    b'A'..=b'Z' => board.tiles[dim.at_row_col(row_num, col_num)] = b,
                    b'a'..=b'z' => {
                        board.tiles[dim.at_row_col(row_num, col_num)] = b.to_ascii_uppercase()
                    }
                    _ => {
                        return_error!(format!(
                            "board row {} col {} (0-based): invalid tile {:?}",
                            row_num, col_num, b as char
                        ));
                    }
                }
            }
        }
        Ok(board)
    }

    pub fn to_rows(&self) -> Vec<String> {
        (0..self.dim.rows)
            .map(|row| {
                (0..self.dim.cols)
                    .map(|col| match self.at(row, col) {
                        0 => '.',
                        b => b as char,
                    })
                    .collect()
            })
            .collect()
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    // grid coordinates
    #[inline(always)]
    pub fn at(&self, row: i8, col: i8) -> u8 {
        self.tiles[self.dim.at_row_col(row, col)]
    }

    #[inline(always)]
    pub fn is_filled(&self, row: i8, col: i8) -> bool {
        self.at(row, col) != 0
    }

    pub fn set(&mut self, row: i8, col: i8, letter: u8) {
        let idx = self.dim.at_row_col(row, col);
        self.tiles[idx] = letter;
    }

    pub fn is_first_move(&self) -> bool {
        self.tiles.iter().all(|&tile| tile == 0)
    }

    pub fn num_tiles(&self) -> usize {
        self.tiles.iter().filter(|&&tile| tile != 0).count()
    }
}
