use validator::validate_email;

#[derive(Debug, Clone)]
pub struct EntrantEmail(String);

impl EntrantEmail {
    pub fn parse(s: String) -> Result<EntrantEmail, String> {
        if validate_email(&s) {
            Ok(Self(s))
        } else {
            Err(format!("{} is not a valid email address", s))
        }
    }
}

impl AsRef<str> for EntrantEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntrantEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
