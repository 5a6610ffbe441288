/// One line of a `gradle.properties` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertiesEntry {
    Property { key: String, value: String },
    Comment(String),
    Empty,
}

impl PropertiesEntry {
    #[must_use]
    pub fn property(key: &str, value: &str) -> Self {
        Self::Property {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Parse `gradle.properties` content into a flat list of entries.
///
/// Lines are trimmed. `#` starts a comment, everything else is split on the first `=`.
/// Continuations and escapes are not interpreted.
#[must_use]
pub fn parse_properties(content: &str) -> Vec<PropertiesEntry> {
    content
        .lines()
        .map(|line| {
            let line = line.trim();
            if line.is_empty() {
                PropertiesEntry::Empty
            } else if let Some(comment) = line.strip_prefix('#') {
                PropertiesEntry::Comment(comment.to_string())
            } else {
                match line.split_once('=') {
                    Some((key, value)) => PropertiesEntry::property(key.trim(), value.trim()),
                    None => PropertiesEntry::property(line, ""),
                }
            }
        })
        .collect()
}

/// Line ending used by `content`: `\r\n` when the first line break is CRLF, `\n` otherwise.
#[must_use]
pub fn line_ending(content: &str) -> &'static str {
    match content.find('\n') {
        Some(index) if content[..index].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// Render entries back to file content, one line each terminated by `line_ending`.
#[must_use]
pub fn format_properties(entries: &[PropertiesEntry], line_ending: &str) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let mut content = entries
        .iter()
        .map(|entry| match entry {
            PropertiesEntry::Property { key, value } => format!("{key}={value}"),
            PropertiesEntry::Comment(comment) => format!("#{comment}"),
            PropertiesEntry::Empty => String::new(),
        })
        .collect::<Vec<_>>()
        .join(line_ending);
    content.push_str(line_ending);
    content
}
