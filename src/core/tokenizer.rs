//! Token counting - word frequency over a byte stream
//!
//! Tokens are whitespace-delimited and lower-cased before counting, so
//! `Processor` and `processor` land on the same key. The stream is read to
//! EOF in one pass, one line at a time: newline is whitespace, so a token
//! never spans two lines and memory stays bounded by the longest line plus
//! the number of distinct tokens.

use std::collections::HashMap;
use std::io::{self, BufRead, BufReader, Read};

/// Frequency table of lower-cased tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    counts: HashMap<String, usize>,
}

impl TokenTable {
    /// Count of a token, 0 when absent. The lookup key is case-folded too.
    pub fn get(&self, token: &str) -> usize {
        self.counts
            .get(&token.to_lowercase())
            .copied()
            .unwrap_or(0)
    }

    /// Number of tokens seen, equal to the whitespace token count of the input
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct tokens
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    fn add_line(&mut self, line: &str) {
        for word in line.split_whitespace() {
            *self.counts.entry(word.to_lowercase()).or_insert(0) += 1;
        }
    }
}

/// Count every token of `reader` until EOF
pub fn count_tokens<R: Read>(reader: R) -> io::Result<TokenTable> {
    let mut reader = BufReader::new(reader);
    let mut table = TokenTable::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        table.add_line(&String::from_utf8_lossy(&buf));
    }

    Ok(table)
}
