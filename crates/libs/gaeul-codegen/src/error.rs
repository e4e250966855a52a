use std::path::PathBuf;

/// Errors returned while preparing or launching the code generator.
///
/// A generator that runs and exits non-zero is not an error here; its exit
/// status is handed back to the caller unchanged.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodegenError {
    #[error("expected {expected} arguments, found {found}")]
    ArgumentCount { expected: usize, found: usize },

    #[error("argument {position} ({name}) must not be empty")]
    EmptyArgument { position: usize, name: &'static str },

    #[error("{tool} not found in PATH")]
    ToolNotFound { tool: String },

    #[error("failed to run {tool}")]
    Process {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl CodegenError {
    /// Returns `true` when the generator could not be started at all.
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, Self::ToolNotFound { .. } | Self::Process { .. })
    }

    pub(crate) fn from_spawn(tool: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::ToolNotFound {
                tool: tool.to_string(),
            }
        } else {
            Self::Process {
                tool: tool.to_string(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_not_found_maps_to_tool_not_found() {
        let err = CodegenError::from_spawn(
            "gdbus-codegen",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, CodegenError::ToolNotFound { ref tool } if tool == "gdbus-codegen"));
        assert!(err.is_launch_failure());
    }

    #[test]
    fn spawn_permission_denied_maps_to_process() {
        let err = CodegenError::from_spawn(
            "gdbus-codegen",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, CodegenError::Process { .. }));
        assert!(err.is_launch_failure());
    }

    #[test]
    fn argument_errors_are_not_launch_failures() {
        let err = CodegenError::ArgumentCount {
            expected: 4,
            found: 2,
        };
        assert!(!err.is_launch_failure());
        assert_eq!(err.to_string(), "expected 4 arguments, found 2");
    }
}
