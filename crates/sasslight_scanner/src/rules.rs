//! The rule table: tagged-variant rules plus the keyword vocabularies.
//!
//! Every lexical shape the scanner recognizes is a [`Rule`] record with a
//! matcher kind and a context mask saying where it applies. The engine in
//! `scanner.rs` evaluates the table in order at each cursor position,
//! longest match winning, earlier rule winning ties.

use crate::scope::Scope;
use bitflags::bitflags;
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

bitflags! {
    /// The statement positions a rule applies in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ContextMask: u8 {
        /// Start of a statement: selector or property position.
        const STATEMENT = 1 << 0;
        /// Mid-selector, after the first selector token.
        const SELECTOR = 1 << 1;
        /// After `:` or a standalone `=`, until the statement ends.
        const VALUE = 1 << 2;
        /// Immediately after `@mixin` / `@include`.
        const FUNCTION_NAME = 1 << 3;
    }
}

impl ContextMask {
    pub const ANY: ContextMask = ContextMask::all();
}

/// How a rule matches text at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// A maximal run of whitespace characters.
    Whitespace,
    /// A single fixed character with a fixed scope.
    Punct(char, Scope),
    /// A sigil character followed immediately by a name run; the token
    /// includes the sigil.
    SigilName(char),
    /// `@` followed by a word from the at-rule vocabulary.
    AtKeyword,
    /// `#` followed by exactly 3 or 6 hex digits up to a name boundary.
    HexColor,
    /// `#` followed by a name run: id selector.
    IdSelector,
    /// `.` followed by a name run: class selector.
    ClassSelector,
    /// A numeric literal; carries a unit sub-rule for a fused suffix.
    Number,
    /// A name run classified by context and the word vocabularies.
    Word,
}

/// One entry in the scanner's rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: RuleKind,
    pub applies: ContextMask,
}

impl Rule {
    const fn new(kind: RuleKind, applies: ContextMask) -> Self {
        Self { kind, applies }
    }
}

/// The default Sass rule table, in priority order.
pub fn sass_rules() -> Vec<Rule> {
    vec![
        Rule::new(RuleKind::Whitespace, ContextMask::ANY),
        Rule::new(
            RuleKind::Punct('{', Scope::PropertyListSection),
            ContextMask::ANY,
        ),
        Rule::new(
            RuleKind::Punct('}', Scope::PropertyListSection),
            ContextMask::ANY,
        ),
        Rule::new(RuleKind::Punct(';', Scope::RuleTerminator), ContextMask::ANY),
        Rule::new(
            RuleKind::Punct(':', Scope::KeyValueSeparator),
            ContextMask::ANY,
        ),
        Rule::new(RuleKind::Punct(',', Scope::Separator), ContextMask::ANY),
        Rule::new(
            RuleKind::Punct('(', Scope::FunctionSection),
            ContextMask::ANY,
        ),
        Rule::new(
            RuleKind::Punct(')', Scope::FunctionSection),
            ContextMask::ANY,
        ),
        Rule::new(
            RuleKind::Punct('=', Scope::EntityDefinition),
            ContextMask::ANY,
        ),
        // Sigil identifiers. `!name` is a variable anywhere; the legacy
        // `+name` mixin reference and `=name` mixin definition only read as
        // such at statement position.
        Rule::new(RuleKind::SigilName('!'), ContextMask::ANY),
        Rule::new(RuleKind::SigilName('+'), ContextMask::STATEMENT),
        Rule::new(RuleKind::SigilName('='), ContextMask::STATEMENT),
        Rule::new(RuleKind::AtKeyword, ContextMask::STATEMENT),
        // Hex color before the id selector so that `#333` in value position
        // reads as a color; at selector position the hex rule is masked off
        // and `#333` stays an id.
        Rule::new(RuleKind::HexColor, ContextMask::VALUE),
        Rule::new(
            RuleKind::IdSelector,
            ContextMask::STATEMENT
                .union(ContextMask::SELECTOR)
                .union(ContextMask::VALUE),
        ),
        Rule::new(
            RuleKind::ClassSelector,
            ContextMask::STATEMENT.union(ContextMask::SELECTOR),
        ),
        Rule::new(RuleKind::Number, ContextMask::VALUE),
        Rule::new(RuleKind::Word, ContextMask::ANY),
    ]
}

/// At-rule keywords and their scopes. `@mixin` and `@include` introduce a
/// mixin name; the rest come from the CSS ancestry of the scanner.
pub fn at_rule_scope(word: &str) -> Option<Scope> {
    match word {
        "mixin" => Some(Scope::AtRuleMixin),
        "include" => Some(Scope::AtRuleInclude),
        "import" => Some(Scope::AtRuleImport),
        "media" => Some(Scope::AtRuleMedia),
        "charset" => Some(Scope::AtRuleCharset),
        "page" => Some(Scope::AtRulePage),
        "font-face" => Some(Scope::AtRuleFontFace),
        _ => None,
    }
}

/// Whether an at-rule keyword is followed by a mixin name.
pub fn at_rule_takes_function_name(scope: Scope) -> bool {
    matches!(scope, Scope::AtRuleMixin | Scope::AtRuleInclude)
}

/// The 17 W3C standard color names.
pub fn is_w3c_color(word: &str) -> bool {
    matches!(
        word,
        "aqua"
            | "black"
            | "blue"
            | "fuchsia"
            | "gray"
            | "green"
            | "lime"
            | "maroon"
            | "navy"
            | "olive"
            | "orange"
            | "purple"
            | "red"
            | "silver"
            | "teal"
            | "white"
            | "yellow"
    )
}

/// Unit keywords that fuse to an immediately preceding number.
pub fn is_unit(word: &str) -> bool {
    matches!(
        word,
        "ch" | "cm"
            | "deg"
            | "em"
            | "ex"
            | "grad"
            | "hz"
            | "in"
            | "khz"
            | "mm"
            | "ms"
            | "pc"
            | "pt"
            | "px"
            | "rad"
            | "rem"
            | "s"
            | "vh"
            | "vmax"
            | "vmin"
            | "vw"
    )
}

/// Font family names recognized in value position. Matching is
/// case-sensitive: family names are conventionally capitalized, generic
/// families lowercase.
static FONT_NAMES: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        // Generic families
        "serif",
        "sans-serif",
        "monospace",
        "cursive",
        "fantasy",
        // Common families
        "Arial",
        "Baskerville",
        "Bookman",
        "Consolas",
        "Courier",
        "Didot",
        "Futura",
        "Garamond",
        "Geneva",
        "Georgia",
        "Helvetica",
        "Impact",
        "Lucida",
        "Monaco",
        "Optima",
        "Palatino",
        "Rockwell",
        "Tahoma",
        "Times",
        "Verdana",
    ]
    .into_iter()
    .collect()
});

pub fn is_font_name(word: &str) -> bool {
    FONT_NAMES.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_rule_vocabulary() {
        assert_eq!(at_rule_scope("mixin"), Some(Scope::AtRuleMixin));
        assert_eq!(at_rule_scope("include"), Some(Scope::AtRuleInclude));
        assert_eq!(at_rule_scope("font-face"), Some(Scope::AtRuleFontFace));
        assert_eq!(at_rule_scope("nonsense"), None);
        assert!(at_rule_takes_function_name(Scope::AtRuleMixin));
        assert!(!at_rule_takes_function_name(Scope::AtRuleImport));
    }

    #[test]
    fn test_word_vocabularies() {
        assert!(is_w3c_color("red"));
        assert!(is_w3c_color("fuchsia"));
        assert!(!is_w3c_color("dotted"));
        assert!(is_unit("px"));
        assert!(is_unit("khz"));
        assert!(!is_unit("pxx"));
        assert!(is_font_name("Verdana"));
        assert!(is_font_name("sans-serif"));
        assert!(!is_font_name("small-caps"));
        // Case matters for family names.
        assert!(!is_font_name("verdana"));
    }

    #[test]
    fn test_rule_table_order() {
        let rules = sass_rules();
        let hex = rules
            .iter()
            .position(|r| r.kind == RuleKind::HexColor)
            .unwrap();
        let id = rules
            .iter()
            .position(|r| r.kind == RuleKind::IdSelector)
            .unwrap();
        // Equal-length matches resolve to the earlier rule; the hex color
        // must outrank the id selector in value position.
        assert!(hex < id);
    }
}
