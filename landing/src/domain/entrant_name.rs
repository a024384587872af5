use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone)]
pub struct EntrantName(String);

impl EntrantName {
    pub fn parse(s: String) -> Result<EntrantName, String> {
        let is_empty_or_whitespace = s.trim().is_empty();

        let is_too_long = s.graphemes(true).count() > 256;

        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let contains_forbidden_characters = s.chars().any(|g| forbidden_characters.contains(&g));

        if is_empty_or_whitespace || is_too_long || contains_forbidden_characters {
            Err(format!("{} is not a valid entrant name", s))
        } else {
            Ok(Self(s))
        }
    }

    /// Exposing the inner value without consuming the struct itself.
    pub fn inner(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for EntrantName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
