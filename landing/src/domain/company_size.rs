use serde::{Deserialize, Serialize};

/// The company-size tier picked in the signup select widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Solo,
    Small,
    Medium,
    Large,
    Super,
}

impl CompanySize {
    pub const ALL: [CompanySize; 5] = [
        CompanySize::Solo,
        CompanySize::Small,
        CompanySize::Medium,
        CompanySize::Large,
        CompanySize::Super,
    ];

    pub fn parse(s: &str) -> Result<CompanySize, String> {
        match s {
            "solo" => Ok(CompanySize::Solo),
            "small" => Ok(CompanySize::Small),
            "medium" => Ok(CompanySize::Medium),
            "large" => Ok(CompanySize::Large),
            "super" => Ok(CompanySize::Super),
            other => Err(format!("{} is not a valid company size", other)),
        }
    }

    /// Value persisted in the `company_size` column of the waitlist record.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Solo => "solo",
            CompanySize::Small => "small",
            CompanySize::Medium => "medium",
            CompanySize::Large => "large",
            CompanySize::Super => "super",
        }
    }

    /// Label shown in the select widget.
    pub fn label(&self) -> &'static str {
        match self {
            CompanySize::Solo => "Solo",
            CompanySize::Small => "Small team (2-5)",
            CompanySize::Medium => "Medium team (5-20)",
            CompanySize::Large => "Large team (20-50)",
            CompanySize::Super => "Super large team (50-100)",
        }
    }
}
