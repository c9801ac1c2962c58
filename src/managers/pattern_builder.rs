//! Pattern builder for the options UI.
//!
//! Maintains the ordered, mutable sequence of placeholder tokens the user
//! assembles by drag-and-drop. The operations are plain index-based
//! insert/remove/move over an ordered list, so the reorder logic is testable
//! without any DOM or pointer events.

use crate::types::errors::BuilderError;
use crate::types::pattern::{tokenize, PatternSpec, Placeholder, Segment, Separator};

/// Trait defining the pattern builder interface.
pub trait PatternBuilderTrait {
    fn insert_token(&mut self, token: Placeholder, index: usize) -> Result<(), BuilderError>;
    fn remove_token(&mut self, index: usize) -> Result<Placeholder, BuilderError>;
    fn move_token(&mut self, from: usize, to: usize) -> Result<(), BuilderError>;
    fn tokens(&self) -> &[Placeholder];
    fn to_pattern(&self, separator: Separator) -> PatternSpec;
    fn load_from(&mut self, spec: &PatternSpec);
}

/// In-memory ordered token list backing the drag-and-drop builder.
pub struct PatternBuilder {
    tokens: Vec<Placeholder>,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }
}

impl Default for PatternBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternBuilderTrait for PatternBuilder {
    /// Inserts a token at the given position (`index == len` appends).
    ///
    /// `{ext}` is rejected: it is appended by the builder on save and is never
    /// part of the user-visible sequence.
    fn insert_token(&mut self, token: Placeholder, index: usize) -> Result<(), BuilderError> {
        if token == Placeholder::Ext {
            return Err(BuilderError::ReservedToken(token.token()));
        }
        if index > self.tokens.len() {
            return Err(BuilderError::InvalidIndex(index));
        }
        self.tokens.insert(index, token);
        Ok(())
    }

    /// Removes and returns the token at the given position.
    fn remove_token(&mut self, index: usize) -> Result<Placeholder, BuilderError> {
        if index >= self.tokens.len() {
            return Err(BuilderError::InvalidIndex(index));
        }
        Ok(self.tokens.remove(index))
    }

    /// Moves a token from one position to another (drag-and-drop reorder).
    fn move_token(&mut self, from: usize, to: usize) -> Result<(), BuilderError> {
        if from >= self.tokens.len() {
            return Err(BuilderError::InvalidIndex(from));
        }
        if to >= self.tokens.len() {
            return Err(BuilderError::InvalidIndex(to));
        }
        let token = self.tokens.remove(from);
        self.tokens.insert(to, token);
        Ok(())
    }

    /// The current user-visible token sequence, in order.
    fn tokens(&self) -> &[Placeholder] {
        &self.tokens
    }

    /// Serializes the sequence into builder-mode form: the ordered tokens with
    /// `{ext}` appended as the final token, plus the chosen separator.
    fn to_pattern(&self, separator: Separator) -> PatternSpec {
        let mut tokens = self.tokens.clone();
        tokens.push(Placeholder::Ext);
        PatternSpec::Ordered { tokens, separator }
    }

    /// Rebuilds the sequence from a stored pattern: recognized placeholder
    /// tokens in order, minus `{ext}` (which the builder appends itself).
    /// Literal text in free-text templates does not survive the round-trip.
    fn load_from(&mut self, spec: &PatternSpec) {
        self.tokens = match spec {
            PatternSpec::Ordered { tokens, .. } => tokens
                .iter()
                .copied()
                .filter(|token| *token != Placeholder::Ext)
                .collect(),
            PatternSpec::Literal { text } => tokenize(text)
                .into_iter()
                .filter_map(|segment| match segment {
                    Segment::Token(token) if token != Placeholder::Ext => Some(token),
                    _ => None,
                })
                .collect(),
        };
    }
}
