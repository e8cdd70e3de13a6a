//! Template expansion

use crate::error::PoyoError;
use crate::template::parser::{Segment, Template};
use crate::template::resolve::ResolvedValues;

impl Template {
    /// Substitute every field with its resolved value
    ///
    /// Values are inserted verbatim, with no shell escaping.
    ///
    /// # Errors
    ///
    /// Returns `MissingPlaceholder` naming the first field without a value.
    #[inline]
    pub fn render(&self, values: &ResolvedValues) -> Result<String, PoyoError> {
        if let Some(missing) = self
            .placeholders()
            .into_iter()
            .find(|name| !values.contains(name))
        {
            return Err(PoyoError::missing_placeholder(missing));
        }

        let mut out = String::new();
        for segment in self.segments() {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => {
                    let raw = values.get(&field.name).unwrap_or_default();
                    let converted = match field.conversion {
                        Some(conversion) => conversion.apply(raw),
                        None => raw.to_owned(),
                    };
                    out.push_str(&field.spec.apply(&converted));
                }
            }
        }

        Ok(out)
    }
}

/// Expand a template string into the final command
///
/// # Errors
///
/// Returns an error if:
/// - The template is malformed (`MalformedTemplate`, checked first)
/// - A placeholder has no value (`MissingPlaceholder`)
#[inline]
pub fn expand(template: &str, values: &ResolvedValues) -> Result<String, PoyoError> {
    Template::parse(template)?.render(values)
}
