// Copyright (C) 2020-2026 Andy Kurnia.

use hookstar::{alphabet, board, dictionary, error, game_config, movegen};
use std::io::Read;

// dictionary: path to the word list (with optional definitions).
// rack: letters, e.g. "RETAINS". no blanks.
// board: 15 strings, top row first, '.' for empty.
// count: maximum number of plays returned, best first.
#[derive(serde::Deserialize)]
struct Question {
    dictionary: String,
    rack: String,
    board: Vec<String>,
    #[serde(rename = "count")]
    max_gen: usize,
}

// Every tile on the board and in the rack has to come out of the same bag.
fn check_tile_availability(
    alphabet: &alphabet::Alphabet,
    board: &board::Board,
    rack: &[u8],
) -> error::Returns<()> {
    let mut available_tally = (0..alphabet.len())
        .map(|idx| alphabet.freq(alphabet.label(idx)))
        .collect::<Box<_>>();
    for &tile in board.tiles().iter().filter(|&&t| t != 0).chain(rack.iter()) {
        let idx = match alphabet.tile_index(tile) {
            Some(idx) => idx as usize,
            None => {
                hookstar::return_error!(format!("invalid tile {:?}", tile as char));
            }
        };
        if available_tally[idx] > 0 {
            available_tally[idx] -= 1;
        } else {
            hookstar::return_error!(format!(
                "too many tile {} (bag contains only {})",
                tile as char,
                alphabet.freq(tile),
            ));
        }
    }
    Ok(())
}

pub fn main() -> error::Returns<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().collect::<Vec<_>>();
    let data = match args.get(1) {
        Some(filename) => std::fs::read_to_string(filename)?,
        None => {
            let mut data = String::new();
            std::io::stdin().read_to_string(&mut data)?;
            data
        }
    };
    let question = serde_json::from_str::<Question>(&data)?;

    let game_config = game_config::make_common_english_game_config();
    let alphabet = game_config.alphabet();
    let rack = alphabet.parse_rack(&question.rack, game_config.rack_size() as usize)?;
    let board = board::Board::from_rows(&question.board)?;
    check_tile_availability(alphabet, &board, &rack)?;
    let lexicon = dictionary::Lexicon::from_file(&question.dictionary)?;

    let board_snapshot = lexicon.snapshot(&board, &game_config);
    let plays = movegen::generate_all_plays(&board_snapshot, &rack);
    tracing::info!(found = plays.len(), count = question.max_gen, "answering");
    let result = plays
        .iter()
        .rev()
        .take(question.max_gen)
        .collect::<Vec<_>>();
    let ret = serde_json::to_value(result)?;
    println!("{}", serde_json::to_string_pretty(&ret)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_availability() {
        let alphabet = &alphabet::ENGLISH_ALPHABET;
        let mut board = board::Board::default();
        board.set(7, 7, b'Z');
        assert!(check_tile_availability(alphabet, &board, b"AEIOU").is_ok());
        assert!(check_tile_availability(alphabet, &board, b"Z").is_err());
        assert!(check_tile_availability(alphabet, &board::Board::default(), b"QQ").is_err());
    }

    #[test]
    fn parse_question() {
        let question = serde_json::from_str::<Question>(
            r#"{"dictionary": "words.txt", "rack": "cat", "board": [], "count": 3}"#,
        )
        .unwrap();
        assert_eq!(question.dictionary, "words.txt");
        assert_eq!(question.rack, "cat");
        assert!(question.board.is_empty());
        assert_eq!(question.max_gen, 3);
    }
}
