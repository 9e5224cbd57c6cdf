// Character-offset bookkeeping and context windows around matches

/// Characters kept on each side of a match
pub const CONTEXT_RADIUS: usize = 50;

/// Maps between byte offsets and character offsets of one page of text
///
/// Regex matches come back as byte ranges; records and context windows are
/// expressed in characters so multi-byte text does not skew positions.
pub struct CharMap<'a> {
    text: &'a str,
    /// Byte offset of every character, plus `text.len()` as a sentinel
    offsets: Vec<usize>,
}

impl<'a> CharMap<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        offsets.push(text.len());
        Self { text, offsets }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Length of the text in characters
    pub fn char_len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Character offset of a byte offset that lies on a char boundary
    pub fn char_offset(&self, byte_offset: usize) -> usize {
        self.offsets
            .binary_search(&byte_offset)
            .unwrap_or_else(|insert_at| insert_at)
    }

    /// Byte offset of a character offset, clamped to the end of the text
    pub fn byte_offset(&self, char_offset: usize) -> usize {
        self.offsets[char_offset.min(self.char_len())]
    }

    /// Text from `CONTEXT_RADIUS` characters before `start` to the same
    /// distance after `end`, clamped to the text bounds
    pub fn context(&self, start: usize, end: usize) -> &'a str {
        let from = start.saturating_sub(CONTEXT_RADIUS);
        let to = end.saturating_add(CONTEXT_RADIUS).min(self.char_len());
        &self.text[self.byte_offset(from)..self.byte_offset(to)]
    }
}
