//! Character classification helpers used by the scanner.

/// Check if a character is a line terminator.
#[inline]
pub fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Check if a character is horizontal whitespace (not a line break).
#[inline]
pub fn is_horizontal_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\u{000B}' | '\u{000C}' | '\u{00A0}' | '\u{FEFF}')
}

/// Check if a character is any whitespace, line breaks included.
#[inline]
pub fn is_space(ch: char) -> bool {
    is_horizontal_space(ch) || is_line_break(ch)
}

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Check if a character is a hex digit.
#[inline]
pub fn is_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

/// Check if a character can start a CSS-style name.
#[inline]
pub fn is_name_start(ch: char) -> bool {
    ch == '_'
        || ch.is_ascii_alphabetic()
        || (ch as u32 > 0x7F && unicode_xid::UnicodeXID::is_xid_start(ch))
}

/// Check if a character can continue a CSS-style name. Hyphens are part of
/// the name, which is what makes `border-radius` one token.
#[inline]
pub fn is_name_part(ch: char) -> bool {
    ch == '_'
        || ch == '-'
        || ch.is_ascii_alphanumeric()
        || (ch as u32 > 0x7F && unicode_xid::UnicodeXID::is_xid_continue(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_parts() {
        assert!(is_name_start('b'));
        assert!(is_name_start('_'));
        assert!(!is_name_start('-'));
        assert!(!is_name_start('1'));
        assert!(is_name_part('-'));
        assert!(is_name_part('1'));
        assert!(!is_name_part(':'));
    }

    #[test]
    fn test_space_classes() {
        assert!(is_horizontal_space('\t'));
        assert!(!is_horizontal_space('\n'));
        assert!(is_line_break('\n'));
        assert!(is_space('\n'));
        assert!(is_space(' '));
    }
}
