//! A cursor over the code points of one source unit.

/// Non-consuming lookahead of any length, single-step consumption.
#[derive(Debug, Clone)]
pub struct CharStream {
    text: Vec<char>,
    pos: usize,
}

impl CharStream {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            pos: 0,
        }
    }

    /// Look at the character at the cursor without advancing.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    /// Look at the character at cursor + offset.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    /// Up to `n` upcoming characters. Shorter near the end of input.
    pub fn lookahead(&self, n: usize) -> &[char] {
        let start = self.pos.min(self.text.len());
        let end = (start + n).min(self.text.len());
        &self.text[start..end]
    }

    /// Consume one character.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    #[inline]
    pub fn eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Code-point offset of the cursor.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }
}
