//! The token factory seam between the matching engine and its consumers.
//!
//! The engine decides *what* a span is (a [`Scope`]); the factory decides
//! what object to hand back for it. Editors map scopes to styled tokens,
//! tests substitute a recording factory, and the default factory simply
//! returns the scope itself.

use crate::scope::Scope;
use sasslight_core::TextSpan;

/// Maps a classification to whatever token object the caller wants back
/// from [`Scanner::next_token`](crate::Scanner::next_token).
pub trait TokenFactory {
    type Token;

    /// Create the token object for a classified span. Called once per
    /// returned token, in emission order, including whitespace and EOF.
    fn create(&mut self, scope: Scope) -> Self::Token;
}

/// The default factory: tokens are the scopes themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScopeFactory;

impl TokenFactory for ScopeFactory {
    type Token = Scope;

    #[inline]
    fn create(&mut self, scope: Scope) -> Scope {
        scope
    }
}

/// A scope paired with the span it covers. Convenience shape for consumers
/// that collect whole token streams (the CLI dump, tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedToken {
    pub scope: Scope,
    pub span: TextSpan,
}

impl ScannedToken {
    pub fn new(scope: Scope, span: TextSpan) -> Self {
        Self { scope, span }
    }

    /// The character offset where this token starts.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.span.start
    }

    /// The number of characters this token covers.
    #[inline]
    pub fn len(&self) -> u32 {
        self.span.length
    }

    /// Whether this is the zero-length EOF token.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.length == 0
    }
}
