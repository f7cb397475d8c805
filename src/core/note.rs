use serde::Serialize;

/// Scheme prefix of every note resource URI
pub const URI_PREFIX: &str = "notes://";

/// MIME type declared for note resources and their contents
pub const MIME_TEXT_PLAIN: &str = "text/plain";

/// A named text record. `name` is unique within the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub name: String,
    pub description: String,
}

impl Note {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn uri(&self) -> String {
        format!("{}{}", URI_PREFIX, self.name)
    }
}

/// Extract the note name from a `notes://<name>[/...]` URI.
///
/// Returns `None` when the scheme prefix is missing.
pub fn name_from_uri(uri: &str) -> Option<&str> {
    let rest = uri.strip_prefix(URI_PREFIX)?;
    Some(rest.split('/').next().unwrap_or(""))
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri() {
        let note = Note::new("todo", "buy milk");
        assert_eq!(note.uri(), "notes://todo");
    }

    #[test]
    fn test_name_from_uri() {
        assert_eq!(name_from_uri("notes://todo"), Some("todo"));
        assert_eq!(name_from_uri("notes://todo/extra/parts"), Some("todo"));
        assert_eq!(name_from_uri("notes://"), Some(""));
        assert_eq!(name_from_uri("file:///etc/passwd"), None);
        assert_eq!(name_from_uri("todo"), None);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t\n"));
        assert!(!is_blank(" x "));
    }
}
