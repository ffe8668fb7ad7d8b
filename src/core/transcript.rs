//! Append-only conversation transcript.
//!
//! The transcript is seeded with a fixed assistant greeting and enforces
//! strict role alternation from there: a user turn never follows another user
//! turn, and an assistant turn never follows another assistant turn. Existing
//! turns are never mutated or removed.

use std::error::Error;
use std::fmt;

use crate::core::constants::GREETING;
use crate::core::message::{Role, Turn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptError {
    /// Appending this turn would break strict role alternation.
    AlternationViolated { attempted: Role },
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptError::AlternationViolated { attempted } => write!(
                f,
                "cannot append a {} turn after another {} turn",
                attempted.as_str(),
                attempted.as_str()
            ),
        }
    }
}

impl Error for TranscriptError {}

#[derive(Debug, Clone)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// A new transcript containing exactly the seeded greeting.
    pub fn new() -> Self {
        Self {
            turns: vec![Turn::assistant(GREETING)],
        }
    }

    /// Append a turn, rejecting it if the latest turn has the same role.
    /// The seeded greeting is an assistant turn, so the first append must be
    /// a user turn.
    pub fn append(&mut self, turn: Turn) -> Result<(), TranscriptError> {
        match self.latest() {
            Some(latest) if latest.role == turn.role => Err(
                TranscriptError::AlternationViolated {
                    attempted: turn.role,
                },
            ),
            _ => {
                self.turns.push(turn);
                Ok(())
            }
        }
    }

    pub fn latest(&self) -> Option<&Turn> {
        self.turns.last()
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
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_transcript_contains_only_the_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.len(), 1);
        let greeting = transcript.latest().expect("seeded");
        assert!(greeting.is_assistant());
        assert_eq!(greeting.content, GREETING);
    }

    #[test]
    fn user_then_assistant_alternation_is_accepted() {
        let mut transcript = Transcript::new();
        transcript.append(Turn::user("q1")).expect("user after greeting");
        transcript.append(Turn::assistant("a1")).expect("assistant reply");
        transcript.append(Turn::user("q2")).expect("next user turn");

        let roles: Vec<Role> = transcript.turns().iter().map(|t| t.role).collect();
        assert_eq!(
            roles,
            [Role::Assistant, Role::User, Role::Assistant, Role::User]
        );
    }

    #[test]
    fn user_after_user_is_rejected_without_mutation() {
        let mut transcript = Transcript::new();
        transcript.append(Turn::user("q1")).expect("first user turn");

        let err = transcript.append(Turn::user("q2")).unwrap_err();
        assert_eq!(
            err,
            TranscriptError::AlternationViolated {
                attempted: Role::User
            }
        );
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.latest().expect("kept").content, "q1");
    }

    #[test]
    fn assistant_directly_after_the_greeting_is_rejected() {
        let mut transcript = Transcript::new();
        let err = transcript.append(Turn::assistant("unprompted")).unwrap_err();
        assert_eq!(
            err,
            TranscriptError::AlternationViolated {
                attempted: Role::Assistant
            }
        );
        assert_eq!(transcript.len(), 1);
    }
}
