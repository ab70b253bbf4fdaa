// Copyright (C) 2020-2026 Andy Kurnia.

// Fast insecure non-cryptographic hash (FNV-1a) for short uppercase words.

pub struct WordHasher(u64);

impl std::hash::Hasher for WordHasher {
    fn finish(&self) -> u64 {
        self.0
    }
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0 ^ (b as u64)).wrapping_mul(0x100000001b3);
        }
    }
}

impl Default for WordHasher {
    fn default() -> WordHasher {
        WordHasher(0xcbf29ce484222325)
    }
}

pub type WordHasherDefault = std::hash::BuildHasherDefault<WordHasher>;
pub type WordMap<V> = std::collections::HashMap<String, V, WordHasherDefault>;
pub type WordSet = std::collections::HashSet<String, WordHasherDefault>;
