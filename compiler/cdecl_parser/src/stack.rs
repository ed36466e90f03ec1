use cdecl_lexer::Token;

/// Number of tokens a parser token stack holds by default
pub const STACK_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackOverflow;

/// Bounded LIFO buffer of tokens read before the declared identifier
#[derive(Debug, Clone)]
pub struct TokenStack {
    tokens: Vec<Token>,
    capacity: usize,
}

impl TokenStack {
    pub fn new() -> Self {
        Self::with_capacity(STACK_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, token: Token) -> Result<(), StackOverflow> {
        if self.is_full() {
            return Err(StackOverflow);
        }

        self.tokens.push(token);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    /// Most recently pushed token
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.tokens.len() >= self.capacity
    }
}

impl Default for TokenStack {
    fn default() -> Self {
        Self::new()
    }
}
