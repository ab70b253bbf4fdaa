// Copyright (C) 2020-2026 Andy Kurnia.

use hookstar::{dictionary, display, error, game_config, game_state, movegen};
use rand::prelude::*;

// The k-th best play, or the best one when there are fewer than k.
fn pick_play(plays: &[movegen::Play], rank: usize) -> Option<&movegen::Play> {
    plays
        .len()
        .checked_sub(rank.max(1))
        .and_then(|idx| plays.get(idx))
        .or_else(|| plays.last())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

pub fn main() -> error::Returns<()> {
    init_tracing();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 {
        println!(
            "args:
  auto dictionary.txt [seed] [rank]
    play one self-play game, logging every move.
    rank 1 always takes the best play, the default 3 the third best."
        );
        return Ok(());
    }
    let seed = match args.get(2) {
        Some(s) => s.parse::<u64>()?,
        None => rand::rng().random::<u64>(),
    };
    let rank = match args.get(3) {
        Some(s) => s.parse::<usize>()?,
        None => 3,
    };

    let lexicon = dictionary::Lexicon::from_file(&args[1])?;
    let game_config = &game_config::make_common_english_game_config();
    let mut game_state = game_state::GameState::new(game_config);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed);
    game_state.reset_and_draw_tiles(&mut rng);
    tracing::info!(seed, rank, "playing self");

    let log_name = format!("log-{:016x}.csv", seed);
    println!("logging to {}", log_name);
    let mut csv_log = csv::Writer::from_path(&log_name)?;
    csv_log.serialize((
        "seed",
        "turn",
        "player",
        "rack",
        "position",
        "word",
        "placed",
        "score",
        "totalscore",
        "tilesremaining",
    ))?;

    let mut zero_turns = 0;
    let mut num_turns = 0u32;
    loop {
        display::print_board(game_config.board_layout(), &game_state.board);
        for (i, player) in (1..).zip(game_state.players.iter()) {
            print!("player {}: {}, ", i, player.score);
        }
        println!("turn: player {}", game_state.turn + 1);
        println!(
            "pool {:2}, rack: {}",
            game_state.bag.len(),
            game_config
                .alphabet()
                .fmt_rack(&game_state.current_player().rack)
        );

        let board_snapshot = lexicon.snapshot(&game_state.board, game_config);
        let plays =
            movegen::generate_all_plays(&board_snapshot, &game_state.current_player().rack);
        println!("found {} moves", plays.len());
        for play in plays.iter().rev().take(5) {
            println!("  {}", display::fmt_play(play));
        }

        num_turns += 1;
        match pick_play(&plays, rank) {
            Some(play) => {
                let play = play.clone();
                let rack = game_config
                    .alphabet()
                    .fmt_rack(&game_state.current_player().rack);
                println!("making move: {}", display::fmt_play(&play));
                if let Some(definition) = lexicon.definitions.resolve_definition(&play.word, 1) {
                    println!("{}: {}", play.word, definition);
                }
                game_state.play(&play)?;
                zero_turns = 0;
                csv_log.serialize((
                    seed,
                    num_turns,
                    game_state.turn + 1,
                    rack,
                    display::fmt_position(&play.position),
                    &play.word,
                    &play.placed,
                    play.score,
                    game_state.current_player().score,
                    game_state.bag.len(),
                ))?;
            }
            None => {
                println!("no valid play, passing");
                zero_turns += 1;
            }
        }

        if game_state.is_played_out() || zero_turns >= game_state.players.len() * 2 {
            break;
        }
        game_state.next_turn();
    }
    csv_log.flush()?;

    display::print_board(game_config.board_layout(), &game_state.board);
    for (i, player) in (1..).zip(game_state.players.iter()) {
        println!(
            "player {}: {} with {} left",
            i,
            player.score,
            game_config.alphabet().fmt_rack(&player.rack)
        );
    }
    tracing::info!(seed, num_turns, "game over");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookstar::board::{Direction, Position};

    fn play_scoring(score: i16) -> movegen::Play {
        movegen::Play {
            score,
            word: "CAT".into(),
            position: Position::new(Direction::Across, 7, 5),
            placed: "CAT".into(),
        }
    }

    #[test]
    fn pick_kth_best() {
        let plays = (1..=5).map(play_scoring).collect::<Vec<_>>();
        assert_eq!(pick_play(&plays, 1).unwrap().score, 5);
        assert_eq!(pick_play(&plays, 3).unwrap().score, 3);
        assert_eq!(pick_play(&plays, 9).unwrap().score, 5);
        assert!(pick_play(&[], 3).is_none());
    }
}
