//! Token classification scopes.
//!
//! Each classified token carries a TextMate-style dotted scope string that a
//! highlighting theme engine keys off. The strings here must round-trip
//! byte-for-byte; downstream themes match on them literally.

use std::fmt;

/// The classification of a scanned token.
///
/// `Whitespace` and `Eof` are distinguished markers rather than theme scopes;
/// `Unclassified` is the degradation bucket for input no rule recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// A run of whitespace characters.
    Whitespace,
    /// The zero-length end-of-range token.
    Eof,
    /// A character no rule matched.
    Unclassified,

    /// `entity.name.tag.sass` — element selector.
    NameTag,
    /// `entity.other.attribute-name.class.sass` — `.class` selector.
    ClassSelector,
    /// `entity.other.attribute-name.id.sass` — `#id` selector.
    IdSelector,
    /// `support.type.property-name.sass`.
    PropertyName,
    /// `support.constant.property-value.sass` — generic value word.
    PropertyValue,
    /// `support.constant.color.w3c-standard-color-name.sass`.
    W3cColorName,
    /// `constant.other.color.rgb-value.sass` — `#rgb` / `#rrggbb` literal.
    RgbValue,
    /// `constant.numeric.sass`.
    Numeric,
    /// `keyword.other.unit.sass` — unit suffix fused to a number.
    Unit,
    /// `support.constant.font-name.sass`.
    FontName,
    /// `variable.other.sass` — `!var`, `+mixin-ref`, `=mixin-def`.
    Variable,
    /// `entity.name.function.sass` — mixin name after `@mixin`/`@include`.
    FunctionName,
    /// `support.function.misc.sass` — value function word such as `url`.
    MiscFunction,

    /// `keyword.control.at-rule.mixin.sass`.
    AtRuleMixin,
    /// `keyword.control.at-rule.include.sass`.
    AtRuleInclude,
    /// `keyword.control.at-rule.import.sass`.
    AtRuleImport,
    /// `keyword.control.at-rule.media.sass`.
    AtRuleMedia,
    /// `keyword.control.at-rule.charset.sass`.
    AtRuleCharset,
    /// `keyword.control.at-rule.page.sass`.
    AtRulePage,
    /// `keyword.control.at-rule.font-face.sass`.
    AtRuleFontFace,

    /// `punctuation.section.property-list.sass` — `{` and `}`.
    PropertyListSection,
    /// `punctuation.terminator.rule.sass` — `;`.
    RuleTerminator,
    /// `punctuation.separator.key-value.sass` — `:`.
    KeyValueSeparator,
    /// `punctuation.separator.sass` — `,`.
    Separator,
    /// `punctuation.definition.entity.sass` — standalone `=`.
    EntityDefinition,
    /// `punctuation.section.function.sass` — `(` and `)`.
    FunctionSection,
}

impl Scope {
    /// The dotted scope string for classified tokens. `Whitespace`, `Eof`
    /// and `Unclassified` carry no scope datum.
    pub fn scope(&self) -> Option<&'static str> {
        match self {
            Scope::Whitespace | Scope::Eof | Scope::Unclassified => None,
            Scope::NameTag => Some("entity.name.tag.sass"),
            Scope::ClassSelector => Some("entity.other.attribute-name.class.sass"),
            Scope::IdSelector => Some("entity.other.attribute-name.id.sass"),
            Scope::PropertyName => Some("support.type.property-name.sass"),
            Scope::PropertyValue => Some("support.constant.property-value.sass"),
            Scope::W3cColorName => {
                Some("support.constant.color.w3c-standard-color-name.sass")
            }
            Scope::RgbValue => Some("constant.other.color.rgb-value.sass"),
            Scope::Numeric => Some("constant.numeric.sass"),
            Scope::Unit => Some("keyword.other.unit.sass"),
            Scope::FontName => Some("support.constant.font-name.sass"),
            Scope::Variable => Some("variable.other.sass"),
            Scope::FunctionName => Some("entity.name.function.sass"),
            Scope::MiscFunction => Some("support.function.misc.sass"),
            Scope::AtRuleMixin => Some("keyword.control.at-rule.mixin.sass"),
            Scope::AtRuleInclude => Some("keyword.control.at-rule.include.sass"),
            Scope::AtRuleImport => Some("keyword.control.at-rule.import.sass"),
            Scope::AtRuleMedia => Some("keyword.control.at-rule.media.sass"),
            Scope::AtRuleCharset => Some("keyword.control.at-rule.charset.sass"),
            Scope::AtRulePage => Some("keyword.control.at-rule.page.sass"),
            Scope::AtRuleFontFace => Some("keyword.control.at-rule.font-face.sass"),
            Scope::PropertyListSection => {
                Some("punctuation.section.property-list.sass")
            }
            Scope::RuleTerminator => Some("punctuation.terminator.rule.sass"),
            Scope::KeyValueSeparator => Some("punctuation.separator.key-value.sass"),
            Scope::Separator => Some("punctuation.separator.sass"),
            Scope::EntityDefinition => Some("punctuation.definition.entity.sass"),
            Scope::FunctionSection => Some("punctuation.section.function.sass"),
        }
    }

    /// Whether this is the end-of-range token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, Scope::Eof)
    }

    /// Whether this is the whitespace marker.
    #[inline]
    pub fn is_whitespace(&self) -> bool {
        matches!(self, Scope::Whitespace)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scope() {
            Some(s) => f.write_str(s),
            None => match self {
                Scope::Whitespace => f.write_str("whitespace"),
                Scope::Eof => f.write_str("eof"),
                _ => f.write_str("unclassified"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_strings() {
        assert_eq!(Scope::NameTag.scope(), Some("entity.name.tag.sass"));
        assert_eq!(
            Scope::PropertyName.scope(),
            Some("support.type.property-name.sass")
        );
        assert_eq!(
            Scope::W3cColorName.scope(),
            Some("support.constant.color.w3c-standard-color-name.sass")
        );
        assert_eq!(Scope::Whitespace.scope(), None);
        assert_eq!(Scope::Eof.scope(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Scope::Whitespace.to_string(), "whitespace");
        assert_eq!(Scope::RgbValue.to_string(), "constant.other.color.rgb-value.sass");
    }
}
