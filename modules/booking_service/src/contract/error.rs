//! Contract error types for the booking service
//!
//! These errors are transport-agnostic. Store failures are never surfaced
//! with their cause; callers only see which operation failed.

use super::model::EntityKind;

/// Booking service domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// No row with the given id
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Kind of the missing entity
        resource: EntityKind,
        /// Requested identity
        id: i32,
    },

    /// A required field is missing or malformed
    #[error("Validation error: {message}")]
    Validation {
        /// Validation error message
        message: String,
    },

    /// Creating an entity failed in the store and was rolled back
    #[error("{}", listing_failure(.entity, .name))]
    CreateFailed {
        /// Kind of the entity being created
        entity: EntityKind,
        /// Name of the entity being created, when it has one
        name: Option<String>,
    },

    /// Any other store failure
    #[error("Internal error")]
    Internal,
}

impl BookingError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

fn listing_failure(entity: &EntityKind, name: &Option<String>) -> String {
    match name {
        Some(name) => format!("An error occurred. {entity} {name} could not be listed."),
        None => format!("An error occurred. {entity} could not be listed."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_failed_names_entity_and_type() {
        let err = BookingError::CreateFailed {
            entity: EntityKind::Artist,
            name: Some("Guns N Petals".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "An error occurred. Artist Guns N Petals could not be listed."
        );
    }

    #[test]
    fn create_failed_without_name() {
        let err = BookingError::CreateFailed {
            entity: EntityKind::Show,
            name: None,
        };
        assert_eq!(err.to_string(), "An error occurred. Show could not be listed.");
    }

    #[test]
    fn not_found_message() {
        let err = BookingError::NotFound {
            resource: EntityKind::Venue,
            id: 7,
        };
        assert_eq!(err.to_string(), "Venue not found: 7");
    }
}
