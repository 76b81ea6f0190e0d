mod conversation;
mod prompt;
mod relay;
mod subject;

pub use conversation::{Conversation, Sender, Turn};
pub use prompt::build_prompt;
pub use relay::DoubtRelay;
pub use subject::Subject;

/// A student's question, alive for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doubt {
    pub text: String,
    pub subject: Subject,
}

impl Doubt {
    pub fn new(text: impl Into<String>, subject: Subject) -> Self {
        Self {
            text: text.into(),
            subject,
        }
    }
}
