//! Named definitions for the common ASCII and Unicode quote and bracket
//! pairs.
//!
//! These are plain data: every entry can be handed to
//! [`Splitter::new`](crate::Splitter::new) as-is, or used as the base for a
//! further [`escapable`](Enclosure::escapable) derivation.

use crate::enclosure::Enclosure;

// ASCII quotes

pub const DOUBLE_QUOTES: Enclosure = Enclosure::quote('"', '"');
/// Double quotes with a backslash-escaped end character.
pub const DOUBLE_QUOTES_BACKSLASH_ESCAPED: Enclosure = Enclosure::quote_escaped('"', '"', '\\');
/// Double quotes where a doubled `"` stands for one literal `"` (CSV-style).
pub const DOUBLE_QUOTES_DOUBLE_ESCAPED: Enclosure = Enclosure::quote_escaped('"', '"', '"');
pub const SINGLE_QUOTES: Enclosure = Enclosure::quote('\'', '\'');
pub const SINGLE_QUOTES_BACKSLASH_ESCAPED: Enclosure = Enclosure::quote_escaped('\'', '\'', '\\');
pub const SINGLE_QUOTES_DOUBLE_ESCAPED: Enclosure = Enclosure::quote_escaped('\'', '\'', '\'');
/// Backtick quotes.
pub const SINGLE_INVERTED_QUOTES: Enclosure = Enclosure::quote('`', '`');
pub const SINGLE_INVERTED_QUOTES_BACKSLASH_ESCAPED: Enclosure =
    Enclosure::quote_escaped('`', '`', '\\');
pub const SINGLE_INVERTED_QUOTES_DOUBLE_ESCAPED: Enclosure =
    Enclosure::quote_escaped('`', '`', '`');

// Unicode quotes

pub const SINGLE_POINTING_ANGLE_QUOTES: Enclosure = Enclosure::quote('\u{2039}', '\u{203A}');
pub const SINGLE_POINTING_ANGLE_QUOTES_BACKSLASH_ESCAPED: Enclosure =
    Enclosure::quote_escaped('\u{2039}', '\u{203A}', '\\');
/// Guillemets.
pub const DOUBLE_POINTING_ANGLE_QUOTES: Enclosure = Enclosure::quote('\u{00AB}', '\u{00BB}');
pub const LEFT_RIGHT_DOUBLE_DOUBLE_QUOTES: Enclosure = Enclosure::quote('\u{201C}', '\u{201D}');
pub const LEFT_RIGHT_DOUBLE_SINGLE_QUOTES: Enclosure = Enclosure::quote('\u{2018}', '\u{2019}');
pub const LEFT_RIGHT_DOUBLE_PRIME_QUOTES: Enclosure = Enclosure::quote('\u{301D}', '\u{301E}');
pub const SINGLE_LOW_HIGH_9_QUOTES: Enclosure = Enclosure::quote('\u{201A}', '\u{201B}');
pub const DOUBLE_LOW_HIGH_9_QUOTES: Enclosure = Enclosure::quote('\u{201E}', '\u{201F}');
pub const HEAVY_ORNAMENTAL_POINTING_ANGLE_QUOTES: Enclosure =
    Enclosure::quote('\u{276E}', '\u{276F}');

// ASCII brackets

pub const PARENTHESIS: Enclosure = Enclosure::bracket('(', ')');
pub const CURLY_BRACKETS: Enclosure = Enclosure::bracket('{', '}');
pub const SQUARE_BRACKETS: Enclosure = Enclosure::bracket('[', ']');
pub const LT_GT_ANGLE_BRACKETS: Enclosure = Enclosure::bracket('<', '>');

// Unicode brackets

pub const LEFT_RIGHT_POINTING_ANGLE_BRACKETS: Enclosure =
    Enclosure::bracket('\u{2329}', '\u{232A}');
pub const SUBSCRIPT_PARENTHESIS: Enclosure = Enclosure::bracket('\u{208D}', '\u{208E}');
pub const SUPERSCRIPT_PARENTHESIS: Enclosure = Enclosure::bracket('\u{207D}', '\u{207E}');
pub const SMALL_PARENTHESIS: Enclosure = Enclosure::bracket('\u{FE59}', '\u{FE5A}');
pub const SMALL_CURLY_BRACKETS: Enclosure = Enclosure::bracket('\u{FE5B}', '\u{FE5C}');
pub const DOUBLE_PARENTHESIS: Enclosure = Enclosure::bracket('\u{2E28}', '\u{2E29}');
pub const MATH_WHITE_SQUARE_BRACKETS: Enclosure = Enclosure::bracket('\u{27E6}', '\u{27E7}');
pub const MATH_ANGLE_BRACKETS: Enclosure = Enclosure::bracket('\u{27E8}', '\u{27E9}');
pub const MATH_DOUBLE_ANGLE_BRACKETS: Enclosure = Enclosure::bracket('\u{27EA}', '\u{27EB}');
pub const MATH_WHITE_TORTOISE_SHELL_BRACKETS: Enclosure =
    Enclosure::bracket('\u{27EC}', '\u{27ED}');
pub const MATH_FLATTENED_PARENTHESIS: Enclosure = Enclosure::bracket('\u{27EE}', '\u{27EF}');
pub const ORNATE_PARENTHESIS: Enclosure = Enclosure::bracket('\u{FD3E}', '\u{FD3F}');
pub const ANGLE_BRACKETS: Enclosure = Enclosure::bracket('\u{3008}', '\u{3009}');
pub const DOUBLE_ANGLE_BRACKETS: Enclosure = Enclosure::bracket('\u{300A}', '\u{300B}');
pub const FULL_WIDTH_PARENTHESIS: Enclosure = Enclosure::bracket('\u{FF08}', '\u{FF09}');
pub const FULL_WIDTH_SQUARE_BRACKETS: Enclosure = Enclosure::bracket('\u{FF3B}', '\u{FF3D}');
pub const FULL_WIDTH_CURLY_BRACKETS: Enclosure = Enclosure::bracket('\u{FF5B}', '\u{FF5D}');
pub const FULL_WIDTH_WHITE_PARENTHESIS: Enclosure = Enclosure::bracket('\u{FF5F}', '\u{FF60}');
pub const SQUARE_WITH_QUILL_BRACKETS: Enclosure = Enclosure::bracket('\u{2045}', '\u{2046}');
pub const WHITE_PARENTHESIS: Enclosure = Enclosure::bracket('\u{2985}', '\u{2986}');
pub const WHITE_CURLY_BRACKETS: Enclosure = Enclosure::bracket('\u{2983}', '\u{2984}');
pub const WHITE_SQUARE_BRACKETS: Enclosure = Enclosure::bracket('\u{301A}', '\u{301B}');
pub const WHITE_LENTICULAR_BRACKETS: Enclosure = Enclosure::bracket('\u{3016}', '\u{3017}');
pub const WHITE_TORTOISE_SHELL_BRACKETS: Enclosure = Enclosure::bracket('\u{3018}', '\u{3019}');
pub const BLACK_TORTOISE_SHELL_BRACKETS: Enclosure = Enclosure::bracket('\u{2997}', '\u{2998}');
pub const BLACK_LENTICULAR_BRACKETS: Enclosure = Enclosure::bracket('\u{3010}', '\u{3011}');
pub const POINTING_CURVED_ANGLE_BRACKETS: Enclosure = Enclosure::bracket('\u{29FC}', '\u{29FD}');
pub const TORTOISE_SHELL_BRACKETS: Enclosure = Enclosure::bracket('\u{3014}', '\u{3015}');
pub const SMALL_TORTOISE_SHELL_BRACKETS: Enclosure = Enclosure::bracket('\u{FE5D}', '\u{FE5E}');
pub const Z_NOTATION_IMAGE_BRACKETS: Enclosure = Enclosure::bracket('\u{2987}', '\u{2988}');
pub const Z_NOTATION_BINDING_BRACKETS: Enclosure = Enclosure::bracket('\u{2989}', '\u{298A}');
pub const MEDIUM_ORNAMENTAL_PARENTHESIS: Enclosure = Enclosure::bracket('\u{2768}', '\u{2769}');
pub const MEDIUM_ORNAMENTAL_FLATTENED_PARENTHESIS: Enclosure =
    Enclosure::bracket('\u{276A}', '\u{276B}');
pub const MEDIUM_ORNAMENTAL_POINTING_ANGLE_BRACKETS: Enclosure =
    Enclosure::bracket('\u{276C}', '\u{276D}');
pub const MEDIUM_ORNAMENTAL_CURLY_BRACKETS: Enclosure = Enclosure::bracket('\u{2774}', '\u{2775}');
pub const LIGHT_ORNAMENTAL_TORTOISE_SHELL_BRACKETS: Enclosure =
    Enclosure::bracket('\u{2772}', '\u{2773}');
pub const HEAVY_ORNAMENTAL_POINTING_ANGLE_BRACKETS: Enclosure =
    Enclosure::bracket('\u{2770}', '\u{2771}');

// Editorial marks, in both bracket and quote interpretations

pub const SUBSTITUTION_BRACKETS: Enclosure = Enclosure::bracket('\u{2E02}', '\u{2E03}');
pub const SUBSTITUTION_QUOTES: Enclosure = Enclosure::quote('\u{2E02}', '\u{2E03}');
pub const DOTTED_SUBSTITUTION_BRACKETS: Enclosure = Enclosure::bracket('\u{2E04}', '\u{2E05}');
pub const DOTTED_SUBSTITUTION_QUOTES: Enclosure = Enclosure::quote('\u{2E04}', '\u{2E05}');
pub const TRANSPOSITION_BRACKETS: Enclosure = Enclosure::bracket('\u{2E09}', '\u{2E0A}');
pub const TRANSPOSITION_QUOTES: Enclosure = Enclosure::quote('\u{2E09}', '\u{2E0A}');
pub const RAISED_OMISSION_BRACKETS: Enclosure = Enclosure::bracket('\u{2E0C}', '\u{2E0D}');
pub const RAISED_OMISSION_QUOTES: Enclosure = Enclosure::quote('\u{2E0C}', '\u{2E0D}');
pub const LOW_PARAPHRASE_BRACKETS: Enclosure = Enclosure::bracket('\u{2E1C}', '\u{2E1D}');
pub const LOW_PARAPHRASE_QUOTES: Enclosure = Enclosure::quote('\u{2E1C}', '\u{2E1D}');
