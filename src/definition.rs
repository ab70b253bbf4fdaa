// Copyright (C) 2020-2026 Andy Kurnia.

use super::fash;

// Redirect chains are cut off after this many hops. This is a cap, not a
// cycle detector: a cyclic chain just gets truncated.
pub const MAX_REDIRECT_DEPTH: u32 = 10;

pub const REDIRECT_SEPARATOR: &str = " || ";

#[derive(Default)]
pub struct DefinitionMap {
    definitions: fash::WordMap<String>,
}

impl DefinitionMap {
    pub fn new(definitions: fash::WordMap<String>) -> Self {
        Self { definitions }
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.definitions.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    // "<CAT=n> plural" and "{CAT=v}" both redirect to CAT.
    fn redirect_target(definition: &str) -> Option<String> {
        let rest = definition
            .strip_prefix('<')
            .or_else(|| definition.strip_prefix('{'))?;
        let target = rest.split('=').next().unwrap_or(rest);
        Some(target.to_ascii_uppercase())
    }

    // depth starts at 1 for the word being looked up.
    pub fn resolve_definition(&self, word: &str, depth: u32) -> Option<String> {
        let definition = self.get(&word.to_ascii_uppercase())?;
        let target = match Self::redirect_target(definition) {
            Some(target) => target,
            None => return Some(definition.to_string()),
        };
        if depth > MAX_REDIRECT_DEPTH {
            return Some(definition.to_string());
        }
        Some(match self.resolve_definition(&target, depth + 1) {
            Some(resolved) => format!("{}{}{}", definition, REDIRECT_SEPARATOR, resolved),
            None => definition.to_string(),
        })
    }
}
