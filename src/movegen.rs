// Copyright (C) 2020-2026 Andy Kurnia.

use super::board::{Anchor, Board, Direction, Position};
use super::{dictionary, game_config, play_scorer};

// Everything a search reads. None of it changes while a search runs.
pub struct BoardSnapshot<'a> {
    pub board: &'a Board,
    pub game_config: &'a game_config::GameConfig<'a>,
    pub dictionary: &'a dictionary::Dictionary,
    pub prefixes: &'a dictionary::PrefixSet,
}

// Ordered by score, then word, then position. placed is determined by the
// other three and only breaks ties nominally.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Play {
    pub score: i16,
    pub word: String,
    pub position: Position,
    pub placed: String,
}

// No connecting play fits within a rack's length from this anchor.
pub const NO_PLAY_LENGTH: i8 = 10;

// How far ahead min_play_length looks, one full rack.
const MAX_PLAY_SCAN: i8 = 7;

// All distinct arrangements of 1 to max_len tiles from the rack. Duplicate
// tiles are walked once per distinct letter, so no arrangement repeats.
pub fn generate_candidates(rack: &[u8], max_len: usize) -> Vec<String> {
    let mut rack_tally = [0u8; 26];
    for &tile in rack {
        if tile.is_ascii_uppercase() {
            rack_tally[(tile - b'A') as usize] += 1;
        }
    }

    struct Env {
        rack_tally: [u8; 26],
        word_buffer: Vec<u8>,
        max_len: usize,
        candidates: Vec<String>,
    }

    fn arrange(env: &mut Env) {
        if !env.word_buffer.is_empty() {
            env.candidates
                .push(env.word_buffer.iter().map(|&b| b as char).collect());
        }
        if env.word_buffer.len() >= env.max_len {
            return;
        }
        for tile in 0..env.rack_tally.len() {
            if env.rack_tally[tile] > 0 {
                env.rack_tally[tile] -= 1;
                env.word_buffer.push(b'A' + tile as u8);
                arrange(env);
                env.word_buffer.pop();
                env.rack_tally[tile] += 1;
            }
        }
    }

    let mut env = Env {
        rack_tally,
        word_buffer: Vec::with_capacity(max_len),
        max_len,
        candidates: Vec::new(),
    };
    arrange(&mut env);
    env.candidates
}

// Shortest number of new tiles from this anchor that could possibly touch
// something already on the board.
pub fn min_play_length(board: &Board, position: &Position) -> i8 {
    min_play_length_at(board, position.anchor())
}

fn min_play_length_at(board: &Board, anchor: Anchor) -> i8 {
    if board.is_first_move() {
        return 1;
    }
    let dim = board.dim();
    let board_tiles = board.tiles();
    let strider = dim.lane(anchor.down, anchor.lane);
    let len = strider.len();
    let num_lanes = dim.num_lanes(anchor.down);
    if anchor.idx > 0 && board_tiles[strider.at(anchor.idx - 1)] != 0 {
        return 1;
    }
    for i in 0..MAX_PLAY_SCAN {
        let j = anchor.idx + i;
        if j >= len {
            break;
        }
        if (anchor.lane > 0 && board_tiles[dim.lane(anchor.down, anchor.lane - 1).at(j)] != 0)
            || (anchor.lane + 1 < num_lanes
                && board_tiles[dim.lane(anchor.down, anchor.lane + 1).at(j)] != 0)
            || (j + 1 < len && board_tiles[strider.at(j + 1)] != 0)
        {
            return i + 1;
        }
    }
    NO_PLAY_LENGTH
}

// All plays anchored on one presented row, both across plays along it and
// down plays starting from it.
pub fn gen_plays_for_row(
    board_snapshot: &BoardSnapshot,
    row: i8,
    candidates: &[String],
) -> Vec<Play> {
    let board = board_snapshot.board;
    let board_layout = board_snapshot.game_config.board_layout();
    let mut plays = Vec::new();
    let is_first_move = board.is_first_move();
    if is_first_move
        && Position::new(Direction::Across, row, board_layout.star_col())
            .anchor()
            .lane
            != board_layout.star_row()
    {
        return plays;
    }
    for col in 0..board.dim().cols {
        let across = Position::new(Direction::Across, row, col);
        let (grid_row, grid_col) = across.anchor().grid_row_col();
        if board.is_filled(grid_row, grid_col) {
            continue;
        }
        let directions: &[Direction] = if is_first_move {
            &[Direction::Across]
        } else {
            &[Direction::Down, Direction::Across]
        };
        for &direction in directions {
            let position = Position::new(direction, row, col);
            let min_len = min_play_length(board, &position) as usize;
            for candidate in candidates.iter().filter(|c| c.len() >= min_len) {
                if let Ok(play) =
                    play_scorer::score_placement(board_snapshot, candidate, &position, true)
                {
                    plays.push(play);
                }
            }
        }
    }
    plays
}

// Letters that can go on an empty square at the end of a line of tiles,
// where nothing touches the square from the sides. The position's direction
// is the line being extended. With a rack, only letters on it are listed.
pub fn hook_letters(
    board_snapshot: &BoardSnapshot,
    rack: Option<&[u8]>,
) -> Vec<(Position, Vec<u8>)> {
    let alphabet = board_snapshot.game_config.alphabet();
    let board_tiles = board_snapshot.board.tiles();
    let dim = board_snapshot.board.dim();
    let mut hooks = Vec::new();
    let mut word = String::new();
    for down in [false, true] {
        let num_lanes = dim.num_lanes(down);
        for lane in 0..num_lanes {
            let strider = dim.lane(down, lane);
            for idx in 0..strider.len() {
                if board_tiles[strider.at(idx)] != 0 {
                    continue;
                }
                let perpendicular_strider = dim.lane(!down, idx);
                if (lane > 0 && board_tiles[perpendicular_strider.at(lane - 1)] != 0)
                    || (lane + 1 < num_lanes
                        && board_tiles[perpendicular_strider.at(lane + 1)] != 0)
                {
                    continue;
                }
                let (prefix, _) =
                    play_scorer::extension_tiles(board_snapshot, strider, idx, false);
                let (suffix, _) =
                    play_scorer::extension_tiles(board_snapshot, strider, idx, true);
                if prefix.is_empty() && suffix.is_empty() {
                    continue;
                }
                let letters = (0..alphabet.len())
                    .map(|i| alphabet.label(i))
                    .filter(|letter| rack.is_none_or(|rack| rack.contains(letter)))
                    .filter(|&letter| {
                        word.clear();
                        word.push_str(&prefix);
                        word.push(letter as char);
                        word.push_str(&suffix);
                        board_snapshot.dictionary.contains(&word)
                    })
                    .collect::<Vec<_>>();
                if !letters.is_empty() {
                    hooks.push((Anchor { down, lane, idx }.position(), letters));
                }
            }
        }
    }
    hooks
}

pub fn generate_all_plays(board_snapshot: &BoardSnapshot, rack: &[u8]) -> Vec<Play> {
    generate_all_plays_with_threads(
        board_snapshot,
        rack,
        game_config::default_num_threads(board_snapshot.game_config),
    )
}

// Rows are handed out to workers one at a time. The final sort makes the
// result independent of how rows were scheduled.
pub fn generate_all_plays_with_threads(
    board_snapshot: &BoardSnapshot,
    rack: &[u8],
    num_threads: usize,
) -> Vec<Play> {
    let t0 = std::time::Instant::now();
    let candidates = generate_candidates(rack, board_snapshot.game_config.rack_size() as usize);
    let num_rows = board_snapshot.board.dim().rows as usize;
    let next_row = std::sync::atomic::AtomicUsize::new(0);
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::scope(|s| {
        for _ in 0..num_threads.clamp(1, num_rows) {
            let tx = tx.clone();
            let next_row = &next_row;
            let candidates = &candidates;
            s.spawn(move || {
                loop {
                    let row = next_row.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                    if row >= num_rows {
                        break;
                    }
                    let plays = gen_plays_for_row(board_snapshot, row as i8, candidates);
                    if tx.send(plays).is_err() {
                        break;
                    }
                }
            });
        }
    });
    drop(tx);

    let mut plays = rx.into_iter().flatten().collect::<Vec<_>>();
    plays.sort_unstable();
    tracing::debug!(
        candidates = candidates.len(),
        plays = plays.len(),
        num_threads,
        elapsed = ?t0.elapsed(),
        "generated plays"
    );
    plays
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Lexicon;

    fn board_with_cat() -> Board {
        let mut board = Board::default();
        board.set(7, 7, b'C');
        board.set(7, 8, b'A');
        board.set(7, 9, b'T');
        board
    }

    #[test]
    fn candidates_are_distinct() {
        let candidates = generate_candidates(b"ABCDEFG", 7);
        assert_eq!(candidates.len(), 7 + 42 + 210 + 840 + 2520 + 5040 + 5040);
        let distinct = candidates
            .iter()
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(distinct.len(), candidates.len());

        let mut candidates = generate_candidates(b"ABA", 7);
        candidates.sort();
        assert_eq!(
            candidates,
            ["A", "AA", "AAB", "AB", "ABA", "B", "BA", "BAA"]
        );
        assert!(generate_candidates(b"", 7).is_empty());
        assert_eq!(generate_candidates(b"QQQQQQQQ", 7).len(), 7);
    }

    #[test]
    fn min_play_length_scans() {
        assert_eq!(
            min_play_length(&Board::default(), &Position::new(Direction::Down, 0, 0)),
            1
        );
        let board = board_with_cat();
        // right after the T
        assert_eq!(
            min_play_length(&board, &Position::new(Direction::Across, 7, 10)),
            1
        );
        // four tiles from column 3 reach the C
        assert_eq!(
            min_play_length(&board, &Position::new(Direction::Across, 7, 3)),
            4
        );
        // directly above the A
        assert_eq!(
            min_play_length(&board, &Position::new(Direction::Down, 8, 8)),
            1
        );
        // two rows above the A
        assert_eq!(
            min_play_length(&board, &Position::new(Direction::Down, 9, 8)),
            2
        );
        // row above, running alongside the C
        assert_eq!(
            min_play_length(&board, &Position::new(Direction::Across, 8, 5)),
            3
        );
        assert_eq!(
            min_play_length(&board, &Position::new(Direction::Across, 0, 0)),
            NO_PLAY_LENGTH
        );
    }

    #[test]
    fn hook_plays_found_both_ways() {
        let game_config = game_config::make_common_english_game_config();
        let lexicon = Lexicon::from_words(["CAT", "CATS"]);
        let board = board_with_cat();
        let board_snapshot = lexicon.snapshot(&board, &game_config);
        let plays = generate_all_plays_with_threads(&board_snapshot, b"S", 3);
        assert_eq!(
            plays,
            [
                Play {
                    score: 6,
                    word: "CATS".into(),
                    position: Position::new(Direction::Across, 7, 10),
                    placed: "S".into(),
                },
                Play {
                    score: 6,
                    word: "CATS".into(),
                    position: Position::new(Direction::Down, 7, 10),
                    placed: "S".into(),
                },
            ]
        );
    }

    #[test]
    fn hooks_on_both_ends_and_both_ways() {
        let game_config = game_config::make_common_english_game_config();
        let lexicon = Lexicon::from_words(["CAT", "CATS", "SCAT", "TA", "AT"]);
        let board = board_with_cat();
        let board_snapshot = lexicon.snapshot(&board, &game_config);
        assert_eq!(
            hook_letters(&board_snapshot, None),
            [
                (Position::new(Direction::Across, 7, 6), b"S".to_vec()),
                (Position::new(Direction::Across, 7, 10), b"S".to_vec()),
                (Position::new(Direction::Down, 8, 8), b"T".to_vec()),
                (Position::new(Direction::Down, 6, 8), b"T".to_vec()),
                (Position::new(Direction::Down, 8, 9), b"A".to_vec()),
                (Position::new(Direction::Down, 6, 9), b"A".to_vec()),
            ]
        );
        assert_eq!(
            hook_letters(&board_snapshot, Some(&b"AS"[..])),
            [
                (Position::new(Direction::Across, 7, 6), b"S".to_vec()),
                (Position::new(Direction::Across, 7, 10), b"S".to_vec()),
                (Position::new(Direction::Down, 8, 9), b"A".to_vec()),
                (Position::new(Direction::Down, 6, 9), b"A".to_vec()),
            ]
        );
        assert!(hook_letters(&board_snapshot, Some(&b"QZ"[..])).is_empty());
        let empty = Board::default();
        assert!(hook_letters(&lexicon.snapshot(&empty, &game_config), None).is_empty());
    }

    #[test]
    fn thread_count_does_not_matter() {
        let game_config = game_config::make_common_english_game_config();
        let lexicon = Lexicon::from_words([
            "CAT", "CATS", "SCAT", "AT", "TA", "AS", "ACT", "ACTS", "TACT", "TACTS", "SAT",
        ]);
        let board = board_with_cat();
        let board_snapshot = lexicon.snapshot(&board, &game_config);
        let one = generate_all_plays_with_threads(&board_snapshot, b"STACT", 1);
        let many = generate_all_plays_with_threads(&board_snapshot, b"STACT", 8);
        assert!(!one.is_empty());
        assert_eq!(one, many);
        assert_eq!(one, generate_all_plays(&board_snapshot, b"STACT"));
    }
}
