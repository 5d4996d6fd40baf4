/// Event name used as the dispatch key
///
/// Names have the form `<Source>.<Action>` (e.g. `Todo.Created`).
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The only event name this service subscribes to
pub const TODO_CREATED: &str = "Todo.Created";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EventNameError {
    #[error("event name must not be empty")]
    Empty,

    #[error("event name must have the form <Source>.<Action>: {0}")]
    InvalidFormat(String),
}

/// Validated event name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventName(String);

impl EventName {
    /// Parse and validate a dotted name
    pub fn parse(value: &str) -> Result<Self, EventNameError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(EventNameError::Empty);
        }

        match value.split_once('.') {
            Some((source, action))
                if !source.is_empty() && !action.is_empty() && !action.contains('.') =>
            {
                Ok(Self(value.to_string()))
            }
            _ => Err(EventNameError::InvalidFormat(value.to_string())),
        }
    }

    /// Build a name from an EventBridge `source` and `detail-type`
    pub fn from_parts(source: &str, action: &str) -> Result<Self, EventNameError> {
        Self::parse(&format!("{}.{}", source.trim(), action.trim()))
    }

    /// `Todo.Created`
    pub fn todo_created() -> Self {
        Self(TODO_CREATED.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EventName {
    type Err = EventNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_name() {
        let name = EventName::parse("Todo.Created").unwrap();
        assert_eq!(name.as_str(), "Todo.Created");
        assert_eq!(name, EventName::todo_created());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(EventName::parse(" Todo.Created ").unwrap(), EventName::todo_created());
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(EventName::parse(""), Err(EventNameError::Empty));
        assert_eq!(EventName::parse("   "), Err(EventNameError::Empty));
    }

    #[test]
    fn test_parse_rejects_bad_format() {
        for bad in ["Created", ".Created", "Todo.", "Todo.Created.Again", "."] {
            assert!(
                matches!(EventName::parse(bad), Err(EventNameError::InvalidFormat(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(
            EventName::from_parts("Todo", "Created").unwrap(),
            EventName::todo_created()
        );
        assert!(EventName::from_parts("", "Created").is_err());
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_ne!(EventName::parse("todo.created").unwrap(), EventName::todo_created());
    }

    #[test]
    fn test_display_and_from_str() {
        let name: EventName = "Todo.Deleted".parse().unwrap();
        assert_eq!(name.to_string(), "Todo.Deleted");
    }
}
