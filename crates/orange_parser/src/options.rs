//! Parser configuration.

/// Default bound on expression nesting.
pub const DEFAULT_MAX_DEPTH: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// How deeply expressions may nest (parentheses, call arguments, unary
    /// chains, right-hand sides) before the parse fails.
    pub max_depth: u32,
}

impl ParserOptions {
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
