// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, board_layout, error, movegen};

#[inline(always)]
pub fn empty_label(board_layout: &board_layout::BoardLayout, row: i8, col: i8) -> &'static str {
    if row == board_layout.star_row() && col == board_layout.star_col() {
        return "*";
    }
    match board_layout.premium_at(row, col) {
        board_layout::Premium::TripleWord => "=",
        board_layout::Premium::DoubleWord => "-",
        board_layout::Premium::TripleLetter => "\"",
        board_layout::Premium::DoubleLetter => "\'",
        board_layout::Premium::Normal => " ",
    }
}

#[inline(always)]
pub fn column(col: i8) -> char {
    ((col as u8) + b'a') as char
}

// Grid rows are printed top to bottom, labelled with presented rows from 1.
pub fn print_board(board_layout: &board_layout::BoardLayout, board: &board::Board) {
    let dim = board.dim();
    print!("  ");
    for c in 0..dim.cols {
        print!(" {}", column(c));
    }
    println!();
    print!("  +");
    for _ in 1..dim.cols {
        print!("--");
    }
    println!("-+");
    for r in 0..dim.rows {
        let label = board::flip_row(r) + 1;
        print!("{:2}|", label);
        for c in 0..dim.cols {
            if c > 0 {
                print!(" ")
            }
            match board.at(r, c) {
                0 => print!("{}", empty_label(board_layout, r, c)),
                tile => print!("{}", tile as char),
            }
        }
        println!("|{}", label);
    }
    print!("  +");
    for _ in 1..dim.cols {
        print!("--");
    }
    println!("-+");
    print!("  ");
    for c in 0..dim.cols {
        print!(" {}", column(c));
    }
    println!();
}

// "8h" is across from presented row 7, column h. "h8" is down.
pub fn fmt_position(position: &board::Position) -> String {
    match position.direction {
        board::Direction::Across => format!("{}{}", position.row + 1, column(position.col)),
        board::Direction::Down => format!("{}{}", column(position.col), position.row + 1),
    }
}

pub fn parse_position(s: &str) -> error::Returns<board::Position> {
    let s = s.trim().to_ascii_lowercase();
    let split_at = s
        .find(|c: char| !c.is_ascii_digit())
        .filter(|&i| i > 0)
        .or_else(|| s.find(|c: char| c.is_ascii_digit()));
    let (first, second) = match split_at {
        Some(i) => s.split_at(i),
        None => {
            return_error!(format!("invalid position {:?}", s));
        }
    };
    let (direction, row_str, col_str) = if first.starts_with(|c: char| c.is_ascii_digit()) {
        (board::Direction::Across, first, second)
    } else {
        (board::Direction::Down, second, first)
    };
    let row = match row_str.parse::<i8>() {
        Ok(row) if (1..=board::BOARD_SIZE).contains(&row) => row - 1,
        _ => {
            return_error!(format!("invalid row in position {:?}", s));
        }
    };
    let col = match col_str.as_bytes() {
        &[c @ b'a'..=b'z'] if ((c - b'a') as i8) < board::BOARD_SIZE => (c - b'a') as i8,
        _ => {
            return_error!(format!("invalid column in position {:?}", s));
        }
    };
    Ok(board::Position::new(direction, row, col))
}

pub fn fmt_play(play: &movegen::Play) -> String {
    format!(
        "{} {} {} (placed {})",
        fmt_position(&play.position),
        play.word,
        play.score,
        play.placed
    )
}
