use super::Subject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Student,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// In-memory, insertion-ordered chat between a student and the tutor.
///
/// The subject is fixed by the first doubt and reused for follow-ups.
#[derive(Debug, Clone)]
pub struct Conversation {
    subject: Subject,
    turns: Vec<Turn>,
    next_id: u64,
}

impl Conversation {
    pub fn new(subject: Subject) -> Self {
        Self {
            subject,
            turns: Vec::new(),
            next_id: 1,
        }
    }

    pub fn subject(&self) -> Subject {
        self.subject
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn push_student(&mut self, text: impl Into<String>) -> &Turn {
        self.push(Sender::Student, text.into())
    }

    pub fn push_ai(&mut self, text: impl Into<String>) -> &Turn {
        self.push(Sender::Ai, text.into())
    }

    fn push(&mut self, sender: Sender, text: String) -> &Turn {
        let turn = Turn {
            id: self.next_id,
            text,
            sender,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_turns_keep_insertion_order() {
        let mut conversation = Conversation::new(Subject::Math);
        conversation.push_student("What is 2+3?");
        conversation.push_ai("5");
        conversation.push_student("And 3+4?");

        let senders: Vec<Sender> = conversation.turns().iter().map(|t| t.sender).collect();
        assert_eq!(senders, vec![Sender::Student, Sender::Ai, Sender::Student]);
        assert_eq!(conversation.turns()[2].text, "And 3+4?");
        assert_eq!(conversation.subject(), Subject::Math);
    }

    #[test]
    fn test_turn_ids_strictly_increase() {
        let mut conversation = Conversation::new(Subject::English);
        for i in 0..5 {
            conversation.push_student(format!("q{}", i));
        }

        let ids: Vec<u64> = conversation.turns().iter().map(|t| t.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(conversation.len(), 5);
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::Ai).unwrap(), "\"ai\"");
        assert_eq!(
            serde_json::to_string(&Sender::Student).unwrap(),
            "\"student\""
        );
    }
}
