//! Character classes the scanner dispatches on. ASCII only, no locale.

#[inline]
#[must_use]
pub const fn is_line_end(c: u8) -> bool {
    matches!(c, b'\n' | b'\r')
}

/// Horizontal spacing: space, tab, vertical tab, form feed. Line ends are
/// not spacing.
#[inline]
#[must_use]
pub const fn is_spacing(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\x0b' | b'\x0c')
}

#[inline]
#[must_use]
pub const fn is_whitespace(c: u8) -> bool {
    is_spacing(c) || is_line_end(c)
}

#[inline]
#[must_use]
pub const fn is_digit(c: u8) -> bool {
    matches!(c, b'0'..=b'9')
}

#[inline]
#[must_use]
pub const fn is_alpha(c: u8) -> bool {
    matches!(c, b'a'..=b'z' | b'A'..=b'Z')
}
