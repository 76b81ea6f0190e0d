use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// School subject a doubt is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Subject {
    #[default]
    Math,
    Science,
    English,
    #[serde(rename = "Social Studies", alias = "social_studies")]
    SocialStudies,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Math,
        Subject::Science,
        Subject::English,
        Subject::SocialStudies,
    ];

    /// Name as shown to students and embedded in prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Science => "Science",
            Subject::English => "English",
            Subject::SocialStudies => "Social Studies",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "math" | "maths" => Ok(Subject::Math),
            "science" => Ok(Subject::Science),
            "english" => Ok(Subject::English),
            "socialstudies" => Ok(Subject::SocialStudies),
            _ => Err(crate::Error::invalid_request(format!(
                "Unknown subject: '{}'",
                s.trim()
            ))),
        }
    }
}
