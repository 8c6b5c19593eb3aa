//! Audit event actors.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Actor id recorded when the caller did not name one.
pub const ANONYMOUS_ACTOR: &str = "anonymous";

/// Kind of entity that initiated an audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActorType {
    /// A named subject, typically a signed-in user.
    User,
    /// No subject was supplied; the application acted on its own.
    System,
}

impl ActorType {
    /// Classify the actor from the id the caller supplied.
    ///
    /// Must be given the id as it appeared on the request, before any
    /// defaulting, since the anonymous fallback would otherwise always read
    /// as present.
    pub fn for_actor(actor_id: Option<&str>) -> Self {
        match actor_id {
            Some(_) => Self::User,
            None => Self::System,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_actor() {
        assert_eq!(ActorType::for_actor(Some("u1")), ActorType::User);
        assert_eq!(ActorType::for_actor(None), ActorType::System);
    }

    #[test]
    fn test_anonymous_literal_still_counts_as_user() {
        // Presence is what matters, not the value.
        assert_eq!(ActorType::for_actor(Some(ANONYMOUS_ACTOR)), ActorType::User);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&ActorType::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&ActorType::System).unwrap(), "\"system\"");
    }
}
