//! The Sass code scanner.
//!
//! Converts a bound window of source text into an ordered, gapless stream of
//! classified tokens. The engine walks the rule table at each cursor
//! position; a minimal statement context (selector vs. property vs. value)
//! disambiguates the rules that share a lexeme shape, such as `#333` the
//! color against `#data` the id selector.

use crate::chars::{is_digit, is_hex_digit, is_horizontal_space, is_line_break, is_name_part, is_name_start, is_space};
use crate::rules::{
    at_rule_scope, at_rule_takes_function_name, is_font_name, is_unit, is_w3c_color, sass_rules,
    ContextMask, Rule, RuleKind,
};
use crate::scope::Scope;
use crate::token::{ScannedToken, ScopeFactory, TokenFactory};
use sasslight_core::TextSpan;
use thiserror::Error;

/// Errors from binding the scanner to an input window. Scanning itself never
/// fails: malformed input degrades to unclassified tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("scan window {start}+{length} exceeds buffer length {buffer_len}")]
    InvalidRange {
        start: usize,
        length: usize,
        buffer_len: usize,
    },
}

/// Where in a statement the cursor currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    /// Start of a statement: the next word is a selector or property name.
    Statement,
    /// After the first selector token, before the statement ends.
    Selector,
    /// After `:` or a standalone `=`.
    Value,
    /// Immediately after `@mixin` / `@include`.
    FunctionName,
}

impl Context {
    fn mask(self) -> ContextMask {
        match self {
            Context::Statement => ContextMask::STATEMENT,
            Context::Selector => ContextMask::SELECTOR,
            Context::Value => ContextMask::VALUE,
            Context::FunctionName => ContextMask::FUNCTION_NAME,
        }
    }
}

/// A successful rule match at the cursor.
struct RuleMatch {
    len: usize,
    scope: Scope,
    /// A second token already recognized right behind this one (the unit
    /// suffix fused to a number), returned by the next `next_token` call.
    pending: Option<(Scope, usize)>,
}

/// The Sass token scanner.
///
/// Configure once with a factory, bind to an input window with
/// [`set_range`](Scanner::set_range), then pull tokens with
/// [`next_token`](Scanner::next_token) until the EOF token comes back.
/// Rebinding resets all position state.
pub struct Scanner<F: TokenFactory = ScopeFactory> {
    /// The full source text being scanned.
    text: Vec<char>,
    /// Exclusive end of the bound window.
    end: usize,
    /// Current cursor position.
    pos: usize,
    /// Offset of the most recently returned token.
    token_start: usize,
    /// Length of the most recently returned token.
    token_length: usize,
    /// Statement context at the cursor.
    context: Context,
    /// One-slot pushback for a token recognized but not yet returned.
    pending: Option<(Scope, usize)>,
    /// The rule table, evaluated in order.
    rules: Vec<Rule>,
    factory: F,
}

impl Scanner<ScopeFactory> {
    /// Create a scanner whose tokens are the scopes themselves.
    pub fn new() -> Self {
        Self::with_factory(ScopeFactory)
    }

    /// Scan a whole window in one call and collect scope+span tokens,
    /// excluding the terminal EOF token.
    pub fn scan_all(
        text: &str,
        start: usize,
        length: usize,
    ) -> Result<Vec<ScannedToken>, ScanError> {
        let mut scanner = Scanner::new();
        scanner.set_range(text, start, length)?;
        let mut tokens = Vec::new();
        loop {
            let scope = scanner.next_token();
            if scope.is_eof() {
                break;
            }
            tokens.push(ScannedToken::new(scope, scanner.token_span()));
        }
        Ok(tokens)
    }
}

impl Default for Scanner<ScopeFactory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: TokenFactory> Scanner<F> {
    /// Create a scanner with an injected token factory.
    pub fn with_factory(factory: F) -> Self {
        Self {
            text: Vec::new(),
            end: 0,
            pos: 0,
            token_start: 0,
            token_length: 0,
            context: Context::Statement,
            pending: None,
            rules: sass_rules(),
            factory,
        }
    }

    /// Bind the scanner to the window `[start, start + length)` of `text`,
    /// measured in characters. Resets the cursor and all per-scan state;
    /// nothing leaks across a rebind.
    pub fn set_range(&mut self, text: &str, start: usize, length: usize) -> Result<(), ScanError> {
        let chars: Vec<char> = text.chars().collect();
        let end = match start.checked_add(length) {
            Some(end) if end <= chars.len() => end,
            _ => {
                return Err(ScanError::InvalidRange {
                    start,
                    length,
                    buffer_len: chars.len(),
                })
            }
        };
        self.text = chars;
        self.pos = start;
        self.end = end;
        self.token_start = start;
        self.token_length = 0;
        self.context = Context::Statement;
        self.pending = None;
        Ok(())
    }

    /// Access the factory, e.g. to read back what a recording factory saw.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Offset of the most recently returned token.
    pub fn token_offset(&self) -> usize {
        self.token_start
    }

    /// Length of the most recently returned token.
    pub fn token_length(&self) -> usize {
        self.token_length
    }

    /// Span of the most recently returned token.
    pub fn token_span(&self) -> TextSpan {
        TextSpan::new(self.token_start as u32, self.token_length as u32)
    }

    /// Advance past the next lexical unit and return its token. At the end
    /// of the bound window this returns a zero-length EOF token, and keeps
    /// returning it on every subsequent call.
    pub fn next_token(&mut self) -> F::Token {
        if let Some((scope, len)) = self.pending.take() {
            return self.emit(scope, len);
        }

        if self.pos >= self.end {
            self.token_start = self.pos;
            self.token_length = 0;
            return self.factory.create(Scope::Eof);
        }

        let mask = self.context.mask();
        let mut best: Option<RuleMatch> = None;
        for i in 0..self.rules.len() {
            let rule = self.rules[i];
            if !rule.applies.intersects(mask) {
                continue;
            }
            if let Some(m) = self.try_match(rule.kind) {
                // Longest match wins; the earlier rule wins ties.
                let better = match &best {
                    None => true,
                    Some(b) => m.len > b.len,
                };
                if better {
                    best = Some(m);
                }
            }
        }

        let m = best.unwrap_or(RuleMatch {
            len: 1,
            scope: Scope::Unclassified,
            pending: None,
        });
        self.pending = m.pending;
        self.emit(m.scope, m.len)
    }

    fn emit(&mut self, scope: Scope, len: usize) -> F::Token {
        self.token_start = self.pos;
        self.token_length = len;
        self.pos += len;
        self.after_token(scope);
        self.factory.create(scope)
    }

    /// Update the statement context after a token has been consumed.
    fn after_token(&mut self, scope: Scope) {
        match scope {
            Scope::Whitespace => {
                let run = &self.text[self.token_start..self.pos];
                if run.iter().copied().any(is_line_break) {
                    self.context = Context::Statement;
                }
            }
            Scope::PropertyListSection | Scope::RuleTerminator => {
                self.context = Context::Statement;
            }
            Scope::KeyValueSeparator | Scope::EntityDefinition => {
                self.context = Context::Value;
            }
            Scope::AtRuleMixin
            | Scope::AtRuleInclude
            | Scope::AtRuleImport
            | Scope::AtRuleMedia
            | Scope::AtRuleCharset
            | Scope::AtRulePage
            | Scope::AtRuleFontFace => {
                self.context = if at_rule_takes_function_name(scope) {
                    Context::FunctionName
                } else {
                    Context::Value
                };
            }
            Scope::FunctionName => {
                self.context = Context::Selector;
            }
            Scope::NameTag | Scope::ClassSelector | Scope::IdSelector | Scope::Variable
                if self.context == Context::Statement =>
            {
                self.context = Context::Selector;
            }
            _ => {}
        }
    }

    // ========================================================================
    // Rule matching
    // ========================================================================

    /// Look at the character at `pos + offset`, bounded by the window end.
    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        let i = self.pos + offset;
        if i < self.end {
            Some(self.text[i])
        } else {
            None
        }
    }

    /// Length of the name run starting at `pos + offset`, or 0 if the first
    /// character cannot start a name.
    fn name_run(&self, offset: usize) -> usize {
        match self.char_at(offset) {
            Some(ch) if is_name_start(ch) => {}
            _ => return 0,
        }
        let mut len = 1;
        while let Some(ch) = self.char_at(offset + len) {
            if !is_name_part(ch) {
                break;
            }
            len += 1;
        }
        len
    }

    fn word_at(&self, offset: usize, len: usize) -> String {
        self.text[self.pos + offset..self.pos + offset + len]
            .iter()
            .collect()
    }

    fn try_match(&self, kind: RuleKind) -> Option<RuleMatch> {
        match kind {
            RuleKind::Whitespace => self.match_whitespace(),
            RuleKind::Punct(ch, scope) => self.match_punct(ch, scope),
            RuleKind::SigilName(sigil) => self.match_sigil_name(sigil),
            RuleKind::AtKeyword => self.match_at_keyword(),
            RuleKind::HexColor => self.match_hex_color(),
            RuleKind::IdSelector => self.match_sel('#', Scope::IdSelector),
            RuleKind::ClassSelector => self.match_sel('.', Scope::ClassSelector),
            RuleKind::Number => self.match_number(),
            RuleKind::Word => self.match_word(),
        }
    }

    fn match_whitespace(&self) -> Option<RuleMatch> {
        let mut len = 0;
        while let Some(ch) = self.char_at(len) {
            if !is_space(ch) {
                break;
            }
            len += 1;
        }
        (len > 0).then_some(RuleMatch {
            len,
            scope: Scope::Whitespace,
            pending: None,
        })
    }

    fn match_punct(&self, ch: char, scope: Scope) -> Option<RuleMatch> {
        (self.char_at(0) == Some(ch)).then_some(RuleMatch {
            len: 1,
            scope,
            pending: None,
        })
    }

    fn match_sigil_name(&self, sigil: char) -> Option<RuleMatch> {
        if self.char_at(0) != Some(sigil) {
            return None;
        }
        let run = self.name_run(1);
        (run > 0).then_some(RuleMatch {
            len: 1 + run,
            scope: Scope::Variable,
            pending: None,
        })
    }

    fn match_at_keyword(&self) -> Option<RuleMatch> {
        if self.char_at(0) != Some('@') {
            return None;
        }
        let run = self.name_run(1);
        if run == 0 {
            return None;
        }
        let scope = at_rule_scope(&self.word_at(1, run))?;
        Some(RuleMatch {
            len: 1 + run,
            scope,
            pending: None,
        })
    }

    fn match_hex_color(&self) -> Option<RuleMatch> {
        if self.char_at(0) != Some('#') {
            return None;
        }
        let mut digits = 0;
        while let Some(ch) = self.char_at(1 + digits) {
            if !is_hex_digit(ch) {
                break;
            }
            digits += 1;
        }
        if digits != 3 && digits != 6 {
            return None;
        }
        // Whole-word: `#3bbfcez` is not a color.
        if self.char_at(1 + digits).is_some_and(is_name_part) {
            return None;
        }
        Some(RuleMatch {
            len: 1 + digits,
            scope: Scope::RgbValue,
            pending: None,
        })
    }

    fn match_sel(&self, sigil: char, scope: Scope) -> Option<RuleMatch> {
        if self.char_at(0) != Some(sigil) {
            return None;
        }
        let run = self.name_run(1);
        (run > 0).then_some(RuleMatch {
            len: 1 + run,
            scope,
            pending: None,
        })
    }

    fn match_number(&self) -> Option<RuleMatch> {
        let mut len = 0;
        while self.char_at(len).is_some_and(is_digit) {
            len += 1;
        }
        if self.char_at(len) == Some('.') && self.char_at(len + 1).is_some_and(is_digit) {
            len += 1;
            while self.char_at(len).is_some_and(is_digit) {
                len += 1;
            }
        }
        if len == 0 {
            return None;
        }
        // Unit sub-rule: a unit keyword fuses only at zero-width adjacency.
        let pending = {
            let run = self.name_run(len);
            if run > 0 && is_unit(&self.word_at(len, run)) {
                Some((Scope::Unit, run))
            } else if run == 0 && self.char_at(len) == Some('%') {
                Some((Scope::Unit, 1))
            } else {
                None
            }
        };
        Some(RuleMatch {
            len,
            scope: Scope::Numeric,
            pending,
        })
    }

    fn match_word(&self) -> Option<RuleMatch> {
        let run = self.name_run(0);
        if run == 0 {
            return None;
        }
        let scope = match self.context {
            Context::FunctionName => Scope::FunctionName,
            Context::Selector => Scope::NameTag,
            Context::Value => {
                let word = self.word_at(0, run);
                if self.char_at(run) == Some('(') {
                    Scope::MiscFunction
                } else if is_w3c_color(&word) {
                    Scope::W3cColorName
                } else if is_font_name(&word) {
                    Scope::FontName
                } else {
                    Scope::PropertyValue
                }
            }
            Context::Statement => {
                // A word at statement position is a property name when a `:`
                // or `=` follows (across horizontal whitespace for the
                // legacy `prop = value` form), a tag selector otherwise.
                let mut j = run;
                while self.char_at(j).is_some_and(is_horizontal_space) {
                    j += 1;
                }
                match self.char_at(j) {
                    Some(':') | Some('=') => Scope::PropertyName,
                    _ => Scope::NameTag,
                }
            }
        };
        Some(RuleMatch {
            len: run,
            scope,
            pending: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound(src: &str) -> Scanner {
        let mut scanner = Scanner::new();
        scanner.set_range(src, 0, src.chars().count()).unwrap();
        scanner
    }

    #[test]
    fn test_empty_range_is_eof() {
        let mut scanner = bound("");
        assert_eq!(scanner.next_token(), Scope::Eof);
        assert_eq!(scanner.token_length(), 0);
        // Terminal state is idempotent.
        assert_eq!(scanner.next_token(), Scope::Eof);
        assert_eq!(scanner.next_token(), Scope::Eof);
    }

    #[test]
    fn test_invalid_range_rejected() {
        let mut scanner = Scanner::new();
        let err = scanner.set_range("abc", 1, 5).unwrap_err();
        assert_eq!(
            err,
            ScanError::InvalidRange {
                start: 1,
                length: 5,
                buffer_len: 3
            }
        );
        assert!(scanner.set_range("abc", usize::MAX, 2).is_err());
        assert!(scanner.set_range("abc", 0, 3).is_ok());
    }

    #[test]
    fn test_punctuation_tokens() {
        let mut scanner = bound("{};:,()");
        assert_eq!(scanner.next_token(), Scope::PropertyListSection);
        assert_eq!(scanner.next_token(), Scope::PropertyListSection);
        assert_eq!(scanner.next_token(), Scope::RuleTerminator);
        assert_eq!(scanner.next_token(), Scope::KeyValueSeparator);
        assert_eq!(scanner.next_token(), Scope::Separator);
        assert_eq!(scanner.next_token(), Scope::FunctionSection);
        assert_eq!(scanner.next_token(), Scope::FunctionSection);
        assert_eq!(scanner.next_token(), Scope::Eof);
    }

    #[test]
    fn test_unrecognized_input_degrades() {
        let mut scanner = bound("~~");
        assert_eq!(scanner.next_token(), Scope::Unclassified);
        assert_eq!(scanner.token_length(), 1);
        assert_eq!(scanner.next_token(), Scope::Unclassified);
        assert_eq!(scanner.token_offset(), 1);
        assert_eq!(scanner.next_token(), Scope::Eof);
    }

    #[test]
    fn test_unit_pushback() {
        let mut scanner = bound("margin: 5px");
        assert_eq!(scanner.next_token(), Scope::PropertyName);
        assert_eq!(scanner.next_token(), Scope::KeyValueSeparator);
        assert_eq!(scanner.next_token(), Scope::Whitespace);
        assert_eq!(scanner.next_token(), Scope::Numeric);
        assert_eq!(scanner.token_span(), TextSpan::new(8, 1));
        assert_eq!(scanner.next_token(), Scope::Unit);
        assert_eq!(scanner.token_span(), TextSpan::new(9, 2));
    }

    #[test]
    fn test_percent_unit() {
        let tokens = Scanner::scan_all("width: 50%", 0, 10).unwrap();
        let scopes: Vec<Scope> = tokens.iter().map(|t| t.scope).collect();
        assert_eq!(
            scopes,
            vec![
                Scope::PropertyName,
                Scope::KeyValueSeparator,
                Scope::Whitespace,
                Scope::Numeric,
                Scope::Unit,
            ]
        );
    }

    #[test]
    fn test_rebind_resets_state() {
        let mut scanner = bound("color: 1px");
        while scanner.next_token() != Scope::Eof {}
        scanner.set_range("html", 0, 4).unwrap();
        assert_eq!(scanner.next_token(), Scope::NameTag);
        assert_eq!(scanner.token_offset(), 0);
        assert_eq!(scanner.token_length(), 4);
    }

    #[test]
    fn test_sub_window_offsets_are_absolute() {
        // Bind to "color: red" inside a larger document.
        let src = "a { color: red }";
        let mut scanner = Scanner::new();
        scanner.set_range(src, 4, 10).unwrap();
        assert_eq!(scanner.next_token(), Scope::PropertyName);
        assert_eq!(scanner.token_offset(), 4);
        assert_eq!(scanner.token_length(), 5);
    }

    #[test]
    fn test_unknown_at_rule_degrades() {
        let mut scanner = bound("@nonsense x");
        assert_eq!(scanner.next_token(), Scope::Unclassified);
        assert_eq!(scanner.token_length(), 1);
        // The word after the bare `@` scans by the normal word rules.
        assert_eq!(scanner.next_token(), Scope::NameTag);
    }

    #[test]
    fn test_hex_color_requires_word_boundary() {
        let tokens = Scanner::scan_all("color: #1234", 0, 12).unwrap();
        // Four hex digits is neither a 3- nor 6-digit color.
        assert!(tokens.iter().all(|t| t.scope != Scope::RgbValue));
    }
}
