use thiserror::Error;

/// Errors returned when evaluating a [`Chain`](crate::Chain).
///
/// Failures raised by the transforms themselves are never wrapped in this
/// type. They reach the caller exactly as the transform produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ChainError {
    /// The chain already handed out its result.
    #[error("chain already consumed")]
    AlreadyConsumed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_message() {
        assert_eq!(
            ChainError::AlreadyConsumed.to_string(),
            "chain already consumed"
        );
    }

    #[test]
    fn boxes_as_std_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = ChainError::AlreadyConsumed.into();
        assert!(boxed.source().is_none());
        assert!(boxed.downcast_ref::<ChainError>().is_some());
    }
}
