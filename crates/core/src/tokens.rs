use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static XMX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-Xmx\S+$").expect("hardcoded regex must compile"));

static MAX_METASPACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-XX:MaxMetaspaceSize=\S+$").expect("hardcoded regex must compile")
});

/// Split a JVM args value into whitespace-delimited tokens.
///
/// A byte order mark (U+FEFF) also separates tokens. An absent value yields no tokens.
/// Empty pieces are discarded and order is preserved.
#[must_use]
pub fn tokenize(value: Option<&str>) -> Vec<String> {
    value
        .map(|value| {
            value
                .split(is_separator)
                .filter(|token| !token.is_empty())
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Keep the first occurrence of each token, preserving relative order.
#[must_use]
pub fn dedupe(tokens: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

/// Whether the token is one of the two flags owned by the merger
/// (`-Xmx<value>` or `-XX:MaxMetaspaceSize=<value>`).
#[must_use]
pub fn is_managed_token(token: &str) -> bool {
    XMX_PATTERN.is_match(token) || MAX_METASPACE_PATTERN.is_match(token)
}
