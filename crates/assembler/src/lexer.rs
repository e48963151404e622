//! Line classification for GLEAM bytecode text.

/// The shape of a single source line, after comment stripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RawLine<'a> {
    /// Nothing left once the comment and whitespace are removed.
    Blank,
    /// `name:`
    Label(&'a str),
    /// `<name>`
    Placeholder(&'a str),
    /// Anything else, split on whitespace.
    Words(Vec<&'a str>),
}

/// Remove a trailing `#` comment.
pub(crate) fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Classify one line of source text.
pub(crate) fn classify(line: &str) -> RawLine<'_> {
    let line = strip_comment(line).trim();
    if line.is_empty() {
        return RawLine::Blank;
    }

    if let Some(name) = line.strip_suffix(':') {
        if is_identifier(name) {
            return RawLine::Label(name);
        }
    }

    if let Some(name) = placeholder_name(line) {
        return RawLine::Placeholder(name);
    }

    RawLine::Words(line.split_whitespace().collect())
}

/// The name inside a `<name>` line, if the trimmed line is exactly that.
fn placeholder_name(line: &str) -> Option<&str> {
    let name = line.strip_prefix('<')?.strip_suffix('>')?;
    if name.is_empty() || name.contains(|c: char| c.is_whitespace() || c == '<' || c == '>') {
        return None;
    }
    Some(name)
}
