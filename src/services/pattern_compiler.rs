//! Pattern compilation: turns a tagged pattern and a resolved placeholder map
//! into the output filename.

use crate::services::placeholder_resolver::PlaceholderValues;
use crate::types::pattern::{tokenize, PatternSpec, Placeholder, Segment};

/// Compiles a pattern against resolved placeholder values.
///
/// Total: every pattern compiles to some string, and an empty template
/// compiles to the empty string.
///
/// Literal templates get a single left-to-right substitution pass; tokens
/// outside the placeholder vocabulary stay verbatim, substituted values are
/// never re-scanned, and the configured separator is ignored even between
/// adjacent placeholder tokens (long-standing behavior, kept deliberately).
///
/// Ordered templates join token values with the separator, except a trailing
/// `{ext}` whose value is appended unseparated.
///
/// The compiler does not force `{originalFilename}` or `{ext}` into the
/// output; the builder is responsible for appending `{ext}` on save.
pub fn compile(spec: &PatternSpec, values: &PlaceholderValues) -> String {
    match spec {
        PatternSpec::Literal { text } => compile_literal(text, values),
        PatternSpec::Ordered { tokens, separator } => {
            compile_ordered(tokens, separator.as_str(), values)
        }
    }
}

fn compile_literal(text: &str, values: &PlaceholderValues) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in tokenize(text) {
        match segment {
            Segment::Token(placeholder) => out.push_str(values.get(placeholder)),
            Segment::Literal(literal) => out.push_str(&literal),
        }
    }
    out
}

fn compile_ordered(tokens: &[Placeholder], separator: &str, values: &PlaceholderValues) -> String {
    let (body, trailing_ext) = match tokens.split_last() {
        Some((Placeholder::Ext, rest)) => (rest, true),
        _ => (tokens, false),
    };

    let mut out = body
        .iter()
        .map(|token| values.get(*token))
        .collect::<Vec<_>>()
        .join(separator);

    if trailing_ext {
        out.push_str(&values.ext);
    }
    out
}
