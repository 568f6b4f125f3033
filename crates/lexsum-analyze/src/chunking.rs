//! Fixed-width text chunking for length-limited summarization models.
//!
//! Chunks are contiguous character windows: together they cover the text
//! in order with no gaps or overlap, and only the last may be shorter than
//! the window. Lengths are counted in `char`s so a chunk never splits a
//! code point.

use lexsum_core::config::DEFAULT_CHUNK_CHARS;

/// A chunk borrowed from the source text, with character positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChunk<'a> {
    pub text: &'a str,
    pub chunk_index: usize,
    pub start_char: usize,
    pub end_char: usize,
}

impl TextChunk<'_> {
    pub fn char_len(&self) -> usize {
        self.end_char - self.start_char
    }

    /// Whether the chunk carries enough content to be worth summarizing.
    pub fn is_substantive(&self, min_chars: usize) -> bool {
        self.text.trim().chars().count() >= min_chars
    }
}

/// Splits text into windows of at most `max_chars` characters.
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    max_chars: usize,
}

impl Chunker {
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars: max_chars.max(1),
        }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Lazily iterate over the chunks of `text`. Each call starts over.
    pub fn chunks<'a>(&self, text: &'a str) -> Chunks<'a> {
        Chunks {
            text,
            byte_pos: 0,
            char_pos: 0,
            index: 0,
            max_chars: self.max_chars,
        }
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_CHARS)
    }
}

/// Iterator returned by [`Chunker::chunks`].
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    text: &'a str,
    byte_pos: usize,
    char_pos: usize,
    index: usize,
    max_chars: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = TextChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.byte_pos >= self.text.len() {
            return None;
        }

        let rest = &self.text[self.byte_pos..];
        let (end, len) = match rest.char_indices().nth(self.max_chars) {
            Some((byte_end, _)) => (byte_end, self.max_chars),
            None => (rest.len(), rest.chars().count()),
        };

        let chunk = TextChunk {
            text: &rest[..end],
            chunk_index: self.index,
            start_char: self.char_pos,
            end_char: self.char_pos + len,
        };

        self.byte_pos += end;
        self.char_pos += len;
        self.index += 1;
        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexsum_core::config::MIN_SUBSTANTIVE_CHARS;

    #[test]
    fn test_chunk_lengths_cover_text() {
        let text = "a".repeat(2500);
        let chunker = Chunker::new(1024);
        let lengths: Vec<usize> = chunker.chunks(&text).map(|c| c.char_len()).collect();
        assert_eq!(lengths, vec![1024, 1024, 452]);

        let rebuilt: String = chunker.chunks(&text).map(|c| c.text).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_chunks_are_restartable() {
        let text = "The quick brown fox. ".repeat(20);
        let chunker = Chunker::new(64);
        let first: Vec<_> = chunker.chunks(&text).collect();
        let second: Vec<_> = chunker.chunks(&text).collect();
        assert_eq!(first, second);

        let iter = chunker.chunks(&text);
        assert_eq!(iter.clone().count(), iter.count());
    }

    #[test]
    fn test_multibyte_boundaries() {
        let text = "§é".repeat(5);
        let chunks: Vec<_> = Chunker::new(3).chunks(&text).collect();
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0].text, "§é§");
        assert_eq!(chunks[3].text, "é");
        assert_eq!(chunks[3].start_char, 9);
        assert_eq!(chunks[3].end_char, 10);
    }

    #[test]
    fn test_empty_text_has_no_chunks() {
        assert_eq!(Chunker::default().chunks("").count(), 0);
    }

    #[test]
    fn test_substantive_threshold() {
        let text = format!("{}{}", "x".repeat(1024), "   short tail   ");
        let chunker = Chunker::default();
        let all: Vec<_> = chunker.chunks(&text).collect();
        assert_eq!(all.len(), 2);
        assert!(all[0].is_substantive(100));
        assert!(!all[1].is_substantive(100));
        let substantive = chunker
            .chunks(&text)
            .filter(|c| c.is_substantive(MIN_SUBSTANTIVE_CHARS))
            .count();
        assert_eq!(substantive, 1);

        let exactly = "y".repeat(100);
        assert!(Chunker::default().chunks(&exactly).all(|c| c.is_substantive(100)));
    }
}
