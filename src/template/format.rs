//! Conversions and format specs applied to substituted values

use crate::error::PoyoError;

/// Alignment inside a padded field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Align {
    Left,
    Right,
    Center,
}

impl Align {
    const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '<' => Some(Self::Left),
            '>' => Some(Self::Right),
            '^' => Some(Self::Center),
            _ => None,
        }
    }
}

/// String format spec: `[[fill]align][0][width][.precision][s]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct FormatSpec {
    pub fill: char,
    pub align: Option<Align>,
    pub width: Option<usize>,
    pub precision: Option<usize>,
}

impl Default for FormatSpec {
    #[inline]
    fn default() -> Self {
        Self {
            fill: ' ',
            align: None,
            width: None,
            precision: None,
        }
    }
}

impl FormatSpec {
    /// Parse the text after `:` in a field
    ///
    /// # Errors
    ///
    /// Returns `MalformedTemplate` for anything outside the string spec grammar
    /// (signs, `#`, grouping, `=` alignment, numeric types).
    #[inline]
    pub fn parse(spec: &str) -> Result<Self, PoyoError> {
        let invalid = || PoyoError::malformed(format!("invalid format spec ':{spec}'"));

        let chars: Vec<char> = spec.chars().collect();
        let mut result = Self::default();
        let mut fill_specified = false;
        let mut rest = chars.as_slice();

        if let [fill, align, tail @ ..] = rest
            && let Some(align) = Align::from_char(*align)
        {
            result.fill = *fill;
            result.align = Some(align);
            fill_specified = true;
            rest = tail;
        } else if let [align, tail @ ..] = rest
            && let Some(align) = Align::from_char(*align)
        {
            result.align = Some(align);
            rest = tail;
        }

        if let ['0', tail @ ..] = rest {
            if !fill_specified {
                result.fill = '0';
            }
            rest = tail;
        }

        let (width, tail) = take_number(rest).map_err(|()| invalid())?;
        result.width = width;
        rest = tail;

        if let ['.', tail @ ..] = rest {
            let (precision, tail) = take_number(tail).map_err(|()| invalid())?;
            if precision.is_none() {
                return Err(PoyoError::malformed(format!(
                    "format spec ':{spec}' is missing a precision after '.'"
                )));
            }
            result.precision = precision;
            rest = tail;
        }

        match rest {
            [] | ['s'] => Ok(result),
            _ => Err(invalid()),
        }
    }

    /// Truncate to the precision, then pad to the width
    #[must_use]
    #[inline]
    pub fn apply(&self, value: &str) -> String {
        let truncated: String = match self.precision {
            Some(precision) => value.chars().take(precision).collect(),
            None => value.to_owned(),
        };

        let length = truncated.chars().count();
        let Some(width) = self.width.filter(|&width| width > length) else {
            return truncated;
        };

        let padding = width - length;
        let (left, right) = match self.align.unwrap_or(Align::Left) {
            Align::Left => (0, padding),
            Align::Right => (padding, 0),
            Align::Center => (padding / 2, padding - padding / 2),
        };

        let mut out = String::with_capacity(truncated.len() + padding * self.fill.len_utf8());
        out.extend(std::iter::repeat_n(self.fill, left));
        out.push_str(&truncated);
        out.extend(std::iter::repeat_n(self.fill, right));
        out
    }
}

/// Read a run of ASCII digits; an empty run yields `None`
fn take_number(chars: &[char]) -> Result<(Option<usize>, &[char]), ()> {
    let digits = chars.iter().take_while(|ch| ch.is_ascii_digit()).count();
    if digits == 0 {
        return Ok((None, chars));
    }

    let (number, tail) = chars.split_at(digits);
    let number: String = number.iter().collect();
    let value = number.parse::<usize>().map_err(|_| ())?;
    Ok((Some(value), tail))
}

/// Conversion applied before formatting (`!s`, `!r`, `!a`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Conversion {
    /// Value unchanged
    Str,
    /// Quoted with control characters escaped
    Repr,
    /// Like `Repr`, with every non-ASCII character escaped as well
    Ascii,
}

impl Conversion {
    /// Parse the text after `!` in a field
    ///
    /// # Errors
    ///
    /// Returns `MalformedTemplate` unless the text is exactly `s`, `r` or `a`.
    #[inline]
    pub fn parse(conversion: &str) -> Result<Self, PoyoError> {
        match conversion {
            "s" => Ok(Self::Str),
            "r" => Ok(Self::Repr),
            "a" => Ok(Self::Ascii),
            other => Err(PoyoError::malformed(format!(
                "invalid conversion '!{other}', expected one of !s, !r, !a"
            ))),
        }
    }

    #[must_use]
    #[inline]
    pub fn apply(self, value: &str) -> String {
        match self {
            Self::Str => value.to_owned(),
            Self::Repr => quote(value, false),
            Self::Ascii => quote(value, true),
        }
    }
}

/// Single-quote a value unless it holds a `'` and no `"`
fn quote(value: &str, ascii_only: bool) -> String {
    let delimiter = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(delimiter);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ if ch == delimiter => {
                out.push('\\');
                out.push(ch);
            }
            _ if !is_printable(ch) || (ascii_only && !ch.is_ascii()) => {
                let code = u32::from(ch);
                if code <= 0xff {
                    out.push_str(&format!("\\x{code:02x}"));
                } else if code <= 0xffff {
                    out.push_str(&format!("\\u{code:04x}"));
                } else {
                    out.push_str(&format!("\\U{code:08x}"));
                }
            }
            _ => out.push(ch),
        }
    }
    out.push(delimiter);
    out
}

/// Whether `ch` may appear unescaped inside a quoted value
///
/// Control, format, private-use and noncharacter code points are escaped, as
/// is every separator except the ASCII space.
fn is_printable(ch: char) -> bool {
    !matches!(
        ch,
        '\0'..='\x1f'
            | '\x7f'..='\u{a0}'
            | '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{1680}'
            | '\u{180e}'
            | '\u{2000}'..='\u{200f}'
            | '\u{2028}'..='\u{202f}'
            | '\u{205f}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{3000}'
            | '\u{e000}'..='\u{f8ff}'
            | '\u{fdd0}'..='\u{fdef}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{fffe}'..='\u{ffff}'
            | '\u{f0000}'..='\u{10ffff}'
    )
}
