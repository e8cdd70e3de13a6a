//! Placeholder templating for stored commands
//!
//! A template is a shell command with named fields such as `{name}` or
//! `{path!r:>20}`. Doubled braces (`{{`, `}}`) render literally. Only flat
//! identifiers are accepted as field names; positional, attribute and index
//! fields are rejected as malformed.
//!
//! The run path is parse, [`resolve`], then [`expand`]:
//!
//! ```
//! use std::collections::HashMap;
//! use poyo::template::{expand, extract, resolve};
//!
//! let names = extract("echo hello {name}").unwrap();
//! let explicit = HashMap::from([("name".to_owned(), "World".to_owned())]);
//! let mut never = |_: &str| -> std::io::Result<String> { unreachable!() };
//! let values = resolve(&names, &explicit, &mut never).unwrap();
//! assert_eq!(expand("echo hello {name}", &values).unwrap(), "echo hello World");
//! ```

pub mod expand;
pub mod format;
pub mod parser;
pub mod resolve;

pub use expand::expand;
pub use format::{Align, Conversion, FormatSpec};
pub use parser::{Field, Segment, Template, extract};
pub use resolve::{Prompter, ResolvedValues, parse_assignments, resolve};
