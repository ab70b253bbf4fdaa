// Copyright (C) 2020-2026 Andy Kurnia.

use hookstar::{board, dictionary, display, error, game_config, game_state, movegen, play_scorer};

static HELP: &str = "commands:
  lex file.txt        load a dictionary (word per line, optional definition)
  board               show the board
  clear               empty the board
  rack LETTERS        set the rack used by moves
  check POS LETTERS   score placing LETTERS at POS (8h across, h8 down)
  play POS LETTERS    check, then put the letters on the board
  undo                take back the last play
  moves [N]           list the N best plays for the rack (default 10)
  hooks [rack]        letters that extend a word at either end (rack: only those on the rack)
  define WORD         show the definition, following redirects
  source file         run commands from a file
  exit";

struct Shell<'a> {
    game_config: &'a game_config::GameConfig<'a>,
    lexicon: Option<dictionary::Lexicon>,
    board: board::Board,
    rack: Vec<u8>,
    history: Vec<board::Board>,
}

impl Shell<'_> {
    fn lexicon(&self) -> error::Returns<&dictionary::Lexicon> {
        match &self.lexicon {
            Some(lexicon) => Ok(lexicon),
            None => Err(error::new("no dictionary, try lex first".into()).into()),
        }
    }

    fn check(&self, args: &[String]) -> error::Returns<movegen::Play> {
        if args.len() < 3 {
            hookstar::return_error!("need position and letters".into());
        }
        let position = display::parse_position(&args[1])?;
        let letters = args[2].to_ascii_uppercase();
        let lexicon = self.lexicon()?;
        let board_snapshot = lexicon.snapshot(&self.board, self.game_config);
        Ok(play_scorer::score_placement(
            &board_snapshot,
            &letters,
            &position,
            true,
        )?)
    }

    fn handle(&mut self, args: &[String]) -> error::Returns<()> {
        match args[0].as_str() {
            "help" => {
                println!("{}", HELP);
            }
            "lex" => {
                if args.len() < 2 {
                    hookstar::return_error!("need another arg".into());
                }
                let lexicon = dictionary::Lexicon::from_file(&args[1])?;
                println!(
                    "{} words, {} definitions",
                    lexicon.dictionary.len(),
                    lexicon.definitions.len()
                );
                self.lexicon = Some(lexicon);
            }
            "board" => {
                display::print_board(self.game_config.board_layout(), &self.board);
                println!(
                    "rack: {}",
                    self.game_config.alphabet().fmt_rack(&self.rack)
                );
            }
            "clear" => {
                self.history.push(self.board.clone());
                self.board = board::Board::new(self.game_config.board_layout().dim());
            }
            "rack" => {
                self.rack = self.game_config.alphabet().parse_rack(
                    args.get(1).map_or("", String::as_str),
                    self.game_config.rack_size() as usize,
                )?;
            }
            "check" => {
                println!("{}", display::fmt_play(&self.check(args)?));
            }
            "play" => {
                let play = self.check(args)?;
                let mut board = self.board.clone();
                game_state::place_tiles(&mut board, &play)?;
                self.history.push(std::mem::replace(&mut self.board, board));
                println!("{}", display::fmt_play(&play));
                if let Some(definition) = self
                    .lexicon()?
                    .definitions
                    .resolve_definition(&play.word, 1)
                {
                    println!("{}: {}", play.word, definition);
                }
            }
            "undo" => match self.history.pop() {
                Some(board) => self.board = board,
                None => println!("nothing to undo"),
            },
            "moves" => {
                let count = match args.get(1) {
                    Some(s) => s.parse::<usize>()?,
                    None => 10,
                };
                let lexicon = self.lexicon()?;
                let board_snapshot = lexicon.snapshot(&self.board, self.game_config);
                let plays = movegen::generate_all_plays(&board_snapshot, &self.rack);
                println!("found {} moves", plays.len());
                for play in plays.iter().rev().take(count) {
                    println!("  {}", display::fmt_play(play));
                }
            }
            "hooks" => {
                let rack = match args.get(1).map(String::as_str) {
                    None => None,
                    Some("rack") => Some(self.rack.as_slice()),
                    Some(_) => {
                        hookstar::return_error!("hooks takes no arg or rack".into());
                    }
                };
                let lexicon = self.lexicon()?;
                let board_snapshot = lexicon.snapshot(&self.board, self.game_config);
                for (position, letters) in movegen::hook_letters(&board_snapshot, rack) {
                    println!(
                        "{:>4} {}",
                        display::fmt_position(&position),
                        self.game_config.alphabet().fmt_rack(&letters)
                    );
                }
            }
            "define" => {
                if args.len() < 2 {
                    hookstar::return_error!("need another arg".into());
                }
                match self
                    .lexicon()?
                    .definitions
                    .resolve_definition(&args[1], 1)
                {
                    Some(definition) => println!("{}", definition),
                    None => println!("no definition for {}", args[1]),
                }
            }
            _ => {
                println!("invalid input, help for help");
            }
        }
        Ok(())
    }
}

pub fn main() -> error::Returns<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let game_config = &game_config::make_common_english_game_config();
    let mut shell = Shell {
        game_config,
        lexicon: None,
        board: board::Board::new(game_config.board_layout().dim()),
        rack: Vec::new(),
        history: Vec::new(),
    };
    let args = std::env::args().collect::<Vec<_>>();
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    if let Some(filename) = args.get(1) {
        cmd_stack.push((format!("lex {}", shell_words::quote(filename)), None));
    }

    let mut rl = rustyline::DefaultEditor::new()?;
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if strings.is_empty() {
                        continue;
                    }
                    match strings[0].as_str() {
                        "exit" => {
                            break;
                        }
                        "source" => {
                            if strings.len() > 1 {
                                match std::fs::read_to_string(&strings[1]) {
                                    Ok(whole_file) => {
                                        let v = cmd_stack.len();
                                        for (line_num, line) in whole_file.lines().enumerate() {
                                            cmd_stack.push((
                                                line.to_string(),
                                                Some((strings[1].clone(), line_num + 1)),
                                            ));
                                        }
                                        cmd_stack[v..].reverse();
                                    }
                                    Err(err) => {
                                        println!("cannot open file: {:?}", err);
                                    }
                                }
                            } else {
                                println!("need another arg");
                            }
                        }
                        _ => {
                            if let Err(err) = shell.handle(&strings) {
                                println!("error: {}", err);
                            }
                        }
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
