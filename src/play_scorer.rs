// Copyright (C) 2020-2026 Andy Kurnia.

use super::board::{Anchor, Position};
use super::error::PlacementError;
use super::{matrix, movegen};

// Collect the run of tiles touching idx on one side, not including idx.
// Tiles already on the board count at face value.
pub(crate) fn extension_tiles(
    board_snapshot: &movegen::BoardSnapshot,
    strider: matrix::Strider,
    idx: i8,
    forward: bool,
) -> (String, i16) {
    let alphabet = board_snapshot.game_config.alphabet();
    let board_tiles = board_snapshot.board.tiles();
    let mut tiles = Vec::new();
    let mut score = 0i16;
    let mut j = idx;
    loop {
        j += if forward { 1 } else { -1 };
        if j < 0 || j >= strider.len() {
            break;
        }
        let b = board_tiles[strider.at(j)];
        if b == 0 {
            break;
        }
        tiles.push(b);
        score += alphabet.score(b);
    }
    if !forward {
        tiles.reverse();
    }
    (String::from_utf8_lossy(&tiles).into_owned(), score)
}

fn require_prefix(
    board_snapshot: &movegen::BoardSnapshot,
    word: &str,
) -> Result<(), PlacementError> {
    if board_snapshot.prefixes.contains(word) {
        Ok(())
    } else {
        Err(PlacementError::InvalidPrefix(word.to_string()))
    }
}

// Validate and score letters placed from position, weaving through tiles
// already on the board. Only the top-level call enforces connectivity and
// scores perpendicular words.
pub fn score_placement(
    board_snapshot: &movegen::BoardSnapshot,
    letters: &str,
    position: &Position,
    is_top_level: bool,
) -> Result<movegen::Play, PlacementError> {
    let (score, word) = score_at(
        board_snapshot,
        letters.as_bytes(),
        position.anchor(),
        is_top_level,
    )?;
    Ok(movegen::Play {
        score,
        word,
        position: *position,
        placed: letters.to_string(),
    })
}

pub(crate) fn score_at(
    board_snapshot: &movegen::BoardSnapshot,
    letters: &[u8],
    anchor: Anchor,
    is_top_level: bool,
) -> Result<(i16, String), PlacementError> {
    let game_config = board_snapshot.game_config;
    let alphabet = game_config.alphabet();
    let board_layout = game_config.board_layout();
    let premiums = board_layout.premiums();
    let board_tiles = board_snapshot.board.tiles();
    let dim = board_snapshot.board.dim();
    let strider = dim.lane(anchor.down, anchor.lane);
    let num_lanes = dim.num_lanes(anchor.down);

    if letters.is_empty() {
        return Err(PlacementError::NoTiles);
    }
    if board_tiles[strider.at(anchor.idx)] != 0 {
        return Err(PlacementError::OccupiedAnchor);
    }
    let room = (anchor.idx..strider.len())
        .filter(|&i| board_tiles[strider.at(i)] == 0)
        .count();
    if room < letters.len() {
        return Err(PlacementError::OutOfBounds);
    }

    let (mut word, mut score) = extension_tiles(board_snapshot, strider, anchor.idx, false);
    let has_prefix = !word.is_empty();
    let mut crosses = has_prefix;
    let mut word_multiplier = 1i16;
    let mut one_letter_score = 0i16;
    let mut covers_star = false;
    // (idx, letter) of new tiles that form a perpendicular word
    let mut hooks = Vec::new();

    let mut idx = anchor.idx;
    for &letter in letters {
        require_prefix(board_snapshot, &word)?;
        // room guarantees an empty square before the edge
        loop {
            let b = board_tiles[strider.at(idx)];
            if b == 0 {
                break;
            }
            require_prefix(board_snapshot, &word)?;
            word.push(b as char);
            score += alphabet.score(b);
            idx += 1;
            crosses = true;
        }
        require_prefix(board_snapshot, &word)?;

        let premium = premiums[strider.at(idx)];
        let tile_value = alphabet.score(letter) * premium.letter_multiplier();
        word.push(letter as char);
        score += tile_value;
        if letters.len() == 1 {
            one_letter_score = tile_value;
        }
        word_multiplier *= premium.word_multiplier();

        let perpendicular_strider = dim.lane(!anchor.down, idx);
        if (anchor.lane > 0 && board_tiles[perpendicular_strider.at(anchor.lane - 1)] != 0)
            || (anchor.lane + 1 < num_lanes
                && board_tiles[perpendicular_strider.at(anchor.lane + 1)] != 0)
        {
            hooks.push((idx, letter));
        }

        let (row, col) = Anchor { idx, ..anchor }.grid_row_col();
        if row == board_layout.star_row() && col == board_layout.star_col() {
            covers_star = true;
        }
        idx += 1;
    }

    let (suffix, suffix_score) = extension_tiles(board_snapshot, strider, idx - 1, true);
    let has_suffix = !suffix.is_empty();
    word.push_str(&suffix);
    score += suffix_score;

    // a lone tile is worth nothing along this line; its perpendicular word
    // carries the score
    if !has_prefix && !has_suffix && letters.len() == 1 {
        score -= one_letter_score;
    }

    score *= word_multiplier;
    score += game_config.num_played_bonus(letters.len());

    if is_top_level && !crosses && !has_suffix && hooks.is_empty() {
        if board_snapshot.board.is_first_move() {
            if !covers_star {
                return Err(PlacementError::FirstMoveMustCoverCenter);
            }
        } else {
            return Err(PlacementError::NoConnection);
        }
    }

    if is_top_level {
        for &(idx, letter) in &hooks {
            let (cross_score, cross_word) = score_at(
                board_snapshot,
                &[letter],
                Anchor {
                    down: !anchor.down,
                    lane: idx,
                    idx: anchor.lane,
                },
                false,
            )?;
            score += cross_score;
            if word.len() == 1 {
                word = cross_word;
            }
        }
    }

    if !board_snapshot.dictionary.contains(&word) && !(word.len() == 1 && !hooks.is_empty()) {
        return Err(PlacementError::WordNotFound(word));
    }

    Ok((score, word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Direction};
    use crate::dictionary::Lexicon;
    use crate::game_config;

    fn board_with_cat() -> Board {
        // CAT across presented row 7, columns 7 to 9
        let mut board = Board::default();
        board.set(7, 7, b'C');
        board.set(7, 8, b'A');
        board.set(7, 9, b'T');
        board
    }

    fn lexicon() -> Lexicon {
        Lexicon::from_words([
            "CAT", "CATS", "TA", "BAD", "AT", "RETAIN", "RETAINS", "ACT",
        ])
    }

    #[test]
    fn opening_move_must_cover_center() {
        let game_config = game_config::make_common_english_game_config();
        let lexicon = lexicon();
        let board = Board::default();
        let board_snapshot = lexicon.snapshot(&board, &game_config);

        // C A T on columns 5 6 7, the T on the double word star
        let play = score_placement(
            &board_snapshot,
            "CAT",
            &Position::new(Direction::Across, 7, 5),
            true,
        )
        .unwrap();
        assert_eq!(play.score, 10);
        assert_eq!(play.word, "CAT");
        assert_eq!(play.position, Position::new(Direction::Across, 7, 5));

        // middle letter on the star
        let play = score_placement(
            &board_snapshot,
            "CAT",
            &Position::new(Direction::Across, 7, 6),
            true,
        )
        .unwrap();
        assert_eq!(play.score, 10);

        assert_eq!(
            score_placement(
                &board_snapshot,
                "CAT",
                &Position::new(Direction::Across, 7, 0),
                true,
            ),
            Err(PlacementError::FirstMoveMustCoverCenter)
        );
        assert_eq!(
            score_placement(
                &board_snapshot,
                "CAT",
                &Position::new(Direction::Across, 3, 6),
                true,
            ),
            Err(PlacementError::FirstMoveMustCoverCenter)
        );

        // down through the star works when validated directly
        let play = score_placement(
            &board_snapshot,
            "CAT",
            &Position::new(Direction::Down, 9, 7),
            true,
        )
        .unwrap();
        assert_eq!(play.score, 10);
    }

    #[test]
    fn scoring_is_deterministic() {
        let game_config = game_config::make_common_english_game_config();
        let lexicon = lexicon();
        let board = board_with_cat();
        let board_snapshot = lexicon.snapshot(&board, &game_config);
        let position = Position::new(Direction::Down, 8, 8);
        let first = score_placement(&board_snapshot, "BD", &position, true);
        let second = score_placement(&board_snapshot, "BD", &position, true);
        assert!(first.is_ok());
        assert_eq!(first, second);
    }

    #[test]
    fn weave_through_existing_tile() {
        let game_config = game_config::make_common_english_game_config();
        let lexicon = lexicon();
        let board = board_with_cat();
        let board_snapshot = lexicon.snapshot(&board, &game_config);
        // B on a double letter, A already there, D on a double letter
        let play = score_placement(
            &board_snapshot,
            "BD",
            &Position::new(Direction::Down, 8, 8),
            true,
        )
        .unwrap();
        assert_eq!(play.word, "BAD");
        assert_eq!(play.score, 11);
        assert_eq!(play.placed, "BD");
    }

    #[test]
    fn hook_onto_the_end() {
        let game_config = game_config::make_common_english_game_config();
        let lexicon = lexicon();
        let board = board_with_cat();
        let board_snapshot = lexicon.snapshot(&board, &game_config);
        let play = score_placement(
            &board_snapshot,
            "S",
            &Position::new(Direction::Across, 7, 10),
            true,
        )
        .unwrap();
        assert_eq!((play.score, play.word.as_str()), (6, "CATS"));

        // same square the other way: the lone S scores only through CATS
        let play = score_placement(
            &board_snapshot,
            "S",
            &Position::new(Direction::Down, 7, 10),
            true,
        )
        .unwrap();
        assert_eq!((play.score, play.word.as_str()), (6, "CATS"));
    }

    #[test]
    fn single_tile_takes_the_perpendicular_word() {
        let game_config = game_config::make_common_english_game_config();
        let lexicon = lexicon();
        let board = board_with_cat();
        let board_snapshot = lexicon.snapshot(&board, &game_config);
        // A under the T, across on its own is just "A"
        let play = score_placement(
            &board_snapshot,
            "A",
            &Position::new(Direction::Across, 6, 9),
            true,
        )
        .unwrap();
        assert_eq!(play.word, "TA");
        assert_eq!(play.score, 2);

        let play = score_placement(
            &board_snapshot,
            "A",
            &Position::new(Direction::Down, 6, 9),
            true,
        )
        .unwrap();
        assert_eq!(play.word, "TA");
        assert_eq!(play.score, 2);
    }

    #[test]
    fn perpendicular_failure_aborts_placement() {
        let game_config = game_config::make_common_english_game_config();
        // TA is a prefix of TAX but not a word
        let lexicon = Lexicon::from_words(["CAT", "TAX"]);
        let board = board_with_cat();
        let board_snapshot = lexicon.snapshot(&board, &game_config);
        assert_eq!(
            score_placement(
                &board_snapshot,
                "A",
                &Position::new(Direction::Across, 6, 9),
                true,
            ),
            Err(PlacementError::WordNotFound("TA".into()))
        );
    }

    #[test]
    fn rejections() {
        let game_config = game_config::make_common_english_game_config();
        let lexicon = lexicon();
        let board = board_with_cat();
        let board_snapshot = lexicon.snapshot(&board, &game_config);
        assert_eq!(
            score_placement(
                &board_snapshot,
                "AT",
                &Position::new(Direction::Across, 0, 0),
                true,
            ),
            Err(PlacementError::NoConnection)
        );
        assert_eq!(
            score_placement(
                &board_snapshot,
                "S",
                &Position::new(Direction::Across, 7, 8),
                true,
            ),
            Err(PlacementError::OccupiedAnchor)
        );
        assert_eq!(
            score_placement(
                &board_snapshot,
                "CAT",
                &Position::new(Direction::Across, 7, 13),
                true,
            ),
            Err(PlacementError::OutOfBounds)
        );
        assert_eq!(
            score_placement(
                &board_snapshot,
                "",
                &Position::new(Direction::Across, 7, 10),
                true,
            ),
            Err(PlacementError::NoTiles)
        );
        // nothing in the dictionary starts with X
        assert_eq!(
            score_placement(
                &board_snapshot,
                "XA",
                &Position::new(Direction::Across, 8, 8),
                true,
            ),
            Err(PlacementError::InvalidPrefix("X".into()))
        );
    }

    #[test]
    fn cross_words_add_up_unmultiplied() {
        let game_config = game_config::make_common_english_game_config();
        let lexicon = Lexicon::from_words(["CAT", "AT", "AA", "TT"]);
        let board = board_with_cat();
        let board_snapshot = lexicon.snapshot(&board, &game_config);
        // A' under the A, T under the T: AT 3, AA 3, TT 2
        let play = score_placement(
            &board_snapshot,
            "AT",
            &Position::new(Direction::Across, 6, 8),
            true,
        )
        .unwrap();
        assert_eq!(play.word, "AT");
        assert_eq!(play.score, 8);
    }

    #[test]
    fn room_skips_existing_tiles() {
        let game_config = game_config::make_common_english_game_config();
        let lexicon = Lexicon::from_words(["CAT", "SCATS"]);
        let board = board_with_cat();
        let board_snapshot = lexicon.snapshot(&board, &game_config);
        // only column 6 and columns 10 to 14 are free
        assert_eq!(
            score_placement(
                &board_snapshot,
                "SSSSSSS",
                &Position::new(Direction::Across, 7, 6),
                true,
            ),
            Err(PlacementError::OutOfBounds)
        );
        let play = score_placement(
            &board_snapshot,
            "SS",
            &Position::new(Direction::Across, 7, 6),
            true,
        )
        .unwrap();
        assert_eq!((play.score, play.word.as_str()), (7, "SCATS"));
    }

    #[test]
    fn unknown_word() {
        let game_config = game_config::make_common_english_game_config();
        let lexicon = lexicon();
        let board = Board::default();
        let board_snapshot = lexicon.snapshot(&board, &game_config);
        assert_eq!(
            score_placement(
                &board_snapshot,
                "CA",
                &Position::new(Direction::Across, 7, 6),
                true,
            ),
            Err(PlacementError::WordNotFound("CA".into()))
        );
    }

    #[test]
    fn full_rack_earns_fifty() {
        let game_config = game_config::make_common_english_game_config();
        let lexicon = lexicon();
        let board = Board::default();
        let board_snapshot = lexicon.snapshot(&board, &game_config);
        // R E T' A I N S*: 8 doubled
        let play = score_placement(
            &board_snapshot,
            "RETAINS",
            &Position::new(Direction::Across, 7, 1),
            true,
        )
        .unwrap();
        assert_eq!(play.score, 16 + 50);
        // R E' T A I N*: 7 doubled, no bonus
        let play = score_placement(
            &board_snapshot,
            "RETAIN",
            &Position::new(Direction::Across, 7, 2),
            true,
        )
        .unwrap();
        assert_eq!(play.score, 14);
    }
}
