use serde::{Deserialize, Serialize};

/// A named token in a pattern, substituted with a computed value at rename time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Placeholder {
    Date,
    Time,
    Timestamp,
    Domain,
    OriginalFilename,
    Ext,
}

impl Placeholder {
    /// The full placeholder vocabulary, in the order the builder UI lists it.
    pub const ALL: [Placeholder; 6] = [
        Placeholder::Date,
        Placeholder::Time,
        Placeholder::Timestamp,
        Placeholder::Domain,
        Placeholder::OriginalFilename,
        Placeholder::Ext,
    ];

    /// The bare name used inside braces, e.g. `date` for `{date}`.
    pub fn name(&self) -> &'static str {
        match self {
            Placeholder::Date => "date",
            Placeholder::Time => "time",
            Placeholder::Timestamp => "timestamp",
            Placeholder::Domain => "domain",
            Placeholder::OriginalFilename => "originalFilename",
            Placeholder::Ext => "ext",
        }
    }

    /// The brace-wrapped token form, e.g. `{date}`.
    pub fn token(&self) -> String {
        format!("{{{}}}", self.name())
    }

    /// Parses a bare placeholder name. Returns `None` for anything outside the
    /// fixed vocabulary — unknown names stay literal text in templates.
    pub fn from_name(name: &str) -> Option<Placeholder> {
        match name {
            "date" => Some(Placeholder::Date),
            "time" => Some(Placeholder::Time),
            "timestamp" => Some(Placeholder::Timestamp),
            "domain" => Some(Placeholder::Domain),
            "originalFilename" => Some(Placeholder::OriginalFilename),
            "ext" => Some(Placeholder::Ext),
            _ => None,
        }
    }
}

/// Separator inserted between placeholder values in builder-mode patterns.
/// The set is fixed; the empty separator joins values directly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    None,
    Underscore,
    Hyphen,
    Dot,
    Space,
}

impl Separator {
    /// The literal string inserted between values, as stored in settings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::None => "",
            Separator::Underscore => "_",
            Separator::Hyphen => "-",
            Separator::Dot => ".",
            Separator::Space => " ",
        }
    }

    /// Parses a stored separator string. Returns `None` for anything outside
    /// the fixed set.
    pub fn parse(s: &str) -> Option<Separator> {
        match s {
            "" => Some(Separator::None),
            "_" => Some(Separator::Underscore),
            "-" => Some(Separator::Hyphen),
            "." => Some(Separator::Dot),
            " " => Some(Separator::Space),
            _ => None,
        }
    }
}

/// One piece of a tokenized template: a recognized placeholder or literal text.
/// Unrecognized `{name}` tokens and unclosed braces land in `Literal` segments
/// so they pass through compilation verbatim.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Segment {
    Token(Placeholder),
    Literal(String),
}

/// Splits a template string into placeholder and literal segments in a single
/// left-to-right pass. Adjacent literal characters are collected into one
/// segment.
pub(crate) fn tokenize(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (before, from_brace) = rest.split_at(open);
        literal.push_str(before);

        match from_brace.find('}') {
            Some(close) => {
                let name = &from_brace[1..close];
                match Placeholder::from_name(name) {
                    Some(placeholder) => {
                        if !literal.is_empty() {
                            segments.push(Segment::Literal(std::mem::take(&mut literal)));
                        }
                        segments.push(Segment::Token(placeholder));
                    }
                    None => {
                        // Unknown token stays verbatim, braces included.
                        literal.push_str(&from_brace[..=close]);
                    }
                }
                rest = &from_brace[close + 1..];
            }
            None => {
                // Unclosed brace: the remainder is literal text.
                literal.push_str(from_brace);
                rest = "";
            }
        }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

/// Tagged pattern representation.
///
/// The two historical template formats — free-text templates with inline
/// `{name}` replacement, and builder-constructed ordered token lists joined by
/// a separator — are classified once by [`PatternSpec::parse`] instead of
/// being sniffed at compile time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PatternSpec {
    /// Free-text template; literal text passes through, recognized tokens are
    /// substituted in place.
    Literal { text: String },
    /// Ordered placeholder list; resolved values are joined by the separator.
    Ordered {
        tokens: Vec<Placeholder>,
        separator: Separator,
    },
}

impl PatternSpec {
    /// Classifies a stored template string against a separator.
    ///
    /// A non-empty template consisting solely of recognized placeholder tokens
    /// is builder-constructed and becomes `Ordered`; any literal text (or any
    /// unrecognized token, which counts as literal text) makes it `Literal`.
    pub fn parse(template: &str, separator: Separator) -> PatternSpec {
        let segments = tokenize(template);
        if segments.is_empty() {
            return PatternSpec::Literal {
                text: String::new(),
            };
        }

        let mut tokens = Vec::with_capacity(segments.len());
        for segment in &segments {
            match segment {
                Segment::Token(placeholder) => tokens.push(*placeholder),
                Segment::Literal(_) => {
                    return PatternSpec::Literal {
                        text: template.to_string(),
                    }
                }
            }
        }

        PatternSpec::Ordered { tokens, separator }
    }

    /// Serializes back to the template string form stored in settings.
    /// The separator is stored under its own key, never inside the template.
    pub fn template(&self) -> String {
        match self {
            PatternSpec::Literal { text } => text.clone(),
            PatternSpec::Ordered { tokens, .. } => {
                tokens.iter().map(Placeholder::token).collect()
            }
        }
    }
}
