//! Placeholder parser

use crate::error::PoyoError;
use crate::template::format::{Conversion, FormatSpec};

/// A single substitution point inside a template
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Field {
    /// Placeholder name
    pub name: String,

    /// Optional `!s`, `!r` or `!a` conversion
    pub conversion: Option<Conversion>,

    /// Format spec after `:` (default when absent)
    pub spec: FormatSpec,
}

/// Piece of a parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Segment {
    /// Text copied as-is, with escaped braces already collapsed
    Literal(String),

    /// Substitution point
    Field(Field),
}

/// A template split into literal and field segments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template string
    ///
    /// # Errors
    ///
    /// Returns `MalformedTemplate` if:
    /// - A `{` is never closed, or a `}` appears on its own
    /// - A field name is empty or not a plain identifier
    /// - A conversion or format spec is invalid
    #[inline]
    pub fn parse(source: &str) -> Result<Self, PoyoError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            match ch {
                '{' => {
                    if chars.next_if(|&(_, next)| next == '{').is_some() {
                        literal.push('{');
                        continue;
                    }

                    let mut body = String::new();
                    let mut closed = false;
                    for (_, inner) in chars.by_ref() {
                        match inner {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => {
                                return Err(PoyoError::malformed(format!(
                                    "nested '{{' inside the field opened at offset {offset}"
                                )));
                            }
                            _ => body.push(inner),
                        }
                    }

                    if !closed {
                        return Err(PoyoError::malformed(format!(
                            "'{{' at offset {offset} is never closed"
                        )));
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(parse_field(&body)?));
                }
                '}' => {
                    if chars.next_if(|&(_, next)| next == '}').is_some() {
                        literal.push('}');
                        continue;
                    }
                    return Err(PoyoError::malformed(format!(
                        "single '}}' at offset {offset} (use '}}}}' for a literal brace)"
                    )));
                }
                _ => literal.push(ch),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Segments in template order
    #[must_use]
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterate over every field, repeats included
    #[inline]
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(field) => Some(field),
            Segment::Literal(_) => None,
        })
    }

    /// Distinct placeholder names in first-occurrence order
    #[must_use]
    #[inline]
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for field in self.fields() {
            if !names.contains(&field.name.as_str()) {
                names.push(&field.name);
            }
        }
        names
    }
}

/// Extract the distinct placeholder names a template references
///
/// # Errors
///
/// Returns `MalformedTemplate` under the same conditions as [`Template::parse`].
#[inline]
pub fn extract(template: &str) -> Result<Vec<String>, PoyoError> {
    let parsed = Template::parse(template)?;
    Ok(parsed.placeholders().into_iter().map(str::to_owned).collect())
}

/// Split `name[!conversion][:spec]` into a field
fn parse_field(body: &str) -> Result<Field, PoyoError> {
    let (head, spec) = match body.split_once(':') {
        Some((head, spec)) => (head, FormatSpec::parse(spec)?),
        None => (body, FormatSpec::default()),
    };

    let (name, conversion) = match head.split_once('!') {
        Some((name, conversion)) => (name, Some(Conversion::parse(conversion)?)),
        None => (head, None),
    };

    validate_name(name)?;

    Ok(Field {
        name: name.to_owned(),
        conversion,
        spec,
    })
}

fn validate_name(name: &str) -> Result<(), PoyoError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(PoyoError::malformed(
            "positional placeholder '{}' is not supported, give it a name",
        ));
    };

    let valid = (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_');

    if !valid {
        return Err(PoyoError::malformed(format!(
            "invalid placeholder name '{name}', only simple names like {{user_name}} are supported"
        )));
    }

    Ok(())
}
