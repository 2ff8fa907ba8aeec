use crate::Node;

pub type AlgoscopeResult<T> = Result<T, AlgoscopeError>;

#[derive(thiserror::Error, Debug)]
pub enum AlgoscopeError {
    /// Text that could not be turned into an input array
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Input violates what an algorithm requires, e.g. unsorted data for binary search
    #[error("precondition violated: {0}")]
    Precondition(String),

    #[error("invalid node: {node} is not in 0..{n}")]
    InvalidNode { node: Node, n: Node },

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AlgoscopeError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    pub fn invalid_node(node: Node, n: Node) -> Self {
        Self::InvalidNode { node, n }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for AlgoscopeError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            AlgoscopeError::invalid_input("x")
                .to_string()
                .contains("invalid input:")
        );
        assert!(
            AlgoscopeError::precondition("x")
                .to_string()
                .contains("precondition violated:")
        );
        assert!(
            AlgoscopeError::config("x")
                .to_string()
                .contains("config error:")
        );
        assert!(
            AlgoscopeError::serde("x")
                .to_string()
                .contains("serialization error:")
        );
        assert_eq!(
            AlgoscopeError::invalid_node(9, 8).to_string(),
            "invalid node: 9 is not in 0..8"
        );
    }

    #[test]
    fn io_preserves_source() {
        let err: AlgoscopeError = std::io::Error::other("boom").into();
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn serde_json_errors_convert() {
        let err: AlgoscopeError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, AlgoscopeError::Serde(_)));
    }
}
