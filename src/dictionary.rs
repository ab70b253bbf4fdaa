// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, definition, error, fash, game_config, movegen};

#[derive(Default)]
pub struct Dictionary {
    words: fash::WordSet,
}

impl Dictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    #[inline(always)]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

// Every prefix of every word, including the empty string. Being in here is
// necessary but not sufficient for a word under construction to end valid.
#[derive(Default)]
pub struct PrefixSet {
    prefixes: fash::WordSet,
}

impl PrefixSet {
    #[inline(always)]
    pub fn contains(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

pub fn build_prefix_set(dictionary: &Dictionary) -> PrefixSet {
    let mut prefixes = fash::WordSet::default();
    prefixes.insert(String::new());
    for word in dictionary.iter() {
        // words are ASCII, so every byte offset is a char boundary
        for len in 1..=word.len() {
            let prefix = &word[..len];
            if !prefixes.contains(prefix) {
                prefixes.insert(prefix.to_string());
            }
        }
    }
    PrefixSet { prefixes }
}

pub struct Lexicon {
    pub dictionary: Dictionary,
    pub prefixes: PrefixSet,
    pub definitions: definition::DefinitionMap,
}

impl Lexicon {
    pub fn new(dictionary: Dictionary, definitions: definition::DefinitionMap) -> Self {
        let prefixes = build_prefix_set(&dictionary);
        Self {
            dictionary,
            prefixes,
            definitions,
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            Dictionary::from_words(words),
            definition::DefinitionMap::default(),
        )
    }

    // Each line is a word, optionally followed by its definition.
    pub fn from_text(giant_string: &str) -> error::Returns<Self> {
        let mut words = fash::WordSet::default();
        let mut definitions = fash::WordMap::default();
        for (line_num, line) in (1..).zip(giant_string.lines()) {
            let mut tokens = line.split_whitespace();
            let word = match tokens.next() {
                Some(word) => word,
                None => continue,
            };
            if !word.bytes().all(|b| b.is_ascii_uppercase()) {
                return_error!(format!("line {}: invalid word {:?}", line_num, word));
            }
            definitions.insert(word.to_string(), tokens.collect::<Vec<_>>().join(" "));
            words.insert(word.to_string());
        }
        Ok(Self::new(
            Dictionary { words },
            definition::DefinitionMap::new(definitions),
        ))
    }

    pub fn from_file(filename: &str) -> error::Returns<Self> {
        let t0 = std::time::Instant::now();
        let giant_string = std::fs::read_to_string(filename)?;
        let lexicon = Self::from_text(&giant_string)?;
        tracing::info!(
            filename,
            words = lexicon.dictionary.len(),
            prefixes = lexicon.prefixes.len(),
            elapsed = ?t0.elapsed(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    pub fn snapshot<'a>(
        &'a self,
        board: &'a board::Board,
        game_config: &'a game_config::GameConfig<'a>,
    ) -> movegen::BoardSnapshot<'a> {
        movegen::BoardSnapshot {
            board,
            game_config,
            dictionary: &self.dictionary,
            prefixes: &self.prefixes,
        }
    }
}
