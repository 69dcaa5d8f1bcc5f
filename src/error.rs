//! Error type shared by every stage of a port lookup.

/// Errors that abort a lookup. A lookup that ran fine but matched nothing is
/// not an error; see [`crate::model::Lookup::NotFound`].
#[derive(Debug, thiserror::Error)]
pub enum PortCheckError {
    /// The port argument was missing, not a number, or outside 1..=65535.
    #[error("{0}")]
    InvalidArgument(String),

    /// The host platform has no known listing command.
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// The listing tool could not be started or exited abnormally.
    #[error("{message}")]
    CommandExecution {
        command: String,
        status: Option<i32>,
        message: String,
    },

    /// Writing an exported report failed.
    #[error("export failed: {0}")]
    Export(#[source] std::io::Error),

    /// Encoding the report into a structured format failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl PortCheckError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PortCheckError::InvalidArgument(_) => 1,
            PortCheckError::UnsupportedPlatform(_) => 1,
            PortCheckError::CommandExecution { .. } => 1,
            PortCheckError::Export(_) | PortCheckError::Serialization(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PortCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_exits_non_zero() {
        let errors = [
            PortCheckError::InvalidArgument("bad".into()),
            PortCheckError::UnsupportedPlatform("aix".into()),
            PortCheckError::CommandExecution {
                command: "lsof -i tcp:80".into(),
                status: Some(2),
                message: "boom".into(),
            },
            PortCheckError::Export(std::io::Error::other("disk full")),
            PortCheckError::Serialization("bad yaml".into()),
        ];
        for err in &errors {
            assert_ne!(err.exit_code(), 0, "{err:?}");
        }
    }

    #[test]
    fn unsupported_platform_names_the_identifier() {
        let err = PortCheckError::UnsupportedPlatform("freebsd".into());
        assert_eq!(err.to_string(), "Unsupported platform: freebsd");
    }
}
