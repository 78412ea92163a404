//! Input events accepted by the state machine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Discrete input token dispatched to the machine.
///
/// Events carry no payload. They are constructed at the call site and
/// consumed by exactly one dispatch.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Event {
    Create,
    Connect,
    Disconnect,
    Destroy,
}

impl Event {
    /// Every event, in declaration order.
    pub const ALL: [Event; 4] = [
        Event::Create,
        Event::Connect,
        Event::Disconnect,
        Event::Destroy,
    ];

    /// Get the event's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Connect => "Connect",
            Self::Disconnect => "Disconnect",
            Self::Destroy => "Destroy",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name an [`Event`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown event '{0}', expected one of: create, connect, disconnect, destroy")]
pub struct ParseEventError(pub String);

impl FromStr for Event {
    type Err = ParseEventError;

    /// Parse an event name, ignoring ASCII case and surrounding whitespace.
    ///
    /// # Example
    ///
    /// ```rust
    /// use state_pattern::Event;
    ///
    /// assert_eq!("connect".parse::<Event>(), Ok(Event::Connect));
    /// assert_eq!(" Destroy ".parse::<Event>(), Ok(Event::Destroy));
    /// assert!("reboot".parse::<Event>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Event::ALL
            .into_iter()
            .find(|event| event.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseEventError(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_name_returns_correct_value() {
        assert_eq!(Event::Create.name(), "Create");
        assert_eq!(Event::Connect.name(), "Connect");
        assert_eq!(Event::Disconnect.name(), "Disconnect");
        assert_eq!(Event::Destroy.name(), "Destroy");
    }

    #[test]
    fn display_matches_name() {
        for event in Event::ALL {
            assert_eq!(event.to_string(), event.name());
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("CREATE".parse::<Event>(), Ok(Event::Create));
        assert_eq!("disConnect".parse::<Event>(), Ok(Event::Disconnect));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "connected".parse::<Event>().unwrap_err();
        assert_eq!(err, ParseEventError("connected".to_string()));
        assert!(err.to_string().contains("connected"));
    }

    #[test]
    fn event_serializes_correctly() {
        let event = Event::Disconnect;
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, "\"Disconnect\"");
        let deserialized: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
