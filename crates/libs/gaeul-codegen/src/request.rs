use crate::error::CodegenError;
use crate::naming::InterfaceName;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

const ARGUMENT_NAMES: [&str; 4] = [
    "interface_name",
    "output_basename",
    "output_dir",
    "definition_file_path",
];

/// The four positional inputs of one generator run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodegenRequest {
    interface: InterfaceName,
    output_basename: OsString,
    output_dir: PathBuf,
    definition: PathBuf,
}

impl CodegenRequest {
    pub fn new(
        interface: impl Into<String>,
        output_basename: impl Into<OsString>,
        output_dir: impl Into<PathBuf>,
        definition: impl Into<PathBuf>,
    ) -> Result<Self, CodegenError> {
        let interface = InterfaceName::new(interface).ok_or_else(|| empty(1))?;
        let output_basename = output_basename.into();
        if output_basename.is_empty() {
            return Err(empty(2));
        }
        let output_dir = output_dir.into();
        if output_dir.as_os_str().is_empty() {
            return Err(empty(3));
        }
        let definition = definition.into();
        if definition.as_os_str().is_empty() {
            return Err(empty(4));
        }
        Ok(Self {
            interface,
            output_basename,
            output_dir,
            definition,
        })
    }

    /// Takes the first four items in positional order. Extra items are
    /// ignored.
    pub fn from_args<I, S>(args: I) -> Result<Self, CodegenError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> =
            args.into_iter().take(ARGUMENT_NAMES.len()).map(Into::into).collect();
        match <[String; 4]>::try_from(args) {
            Ok([interface, basename, dir, definition]) => {
                Self::new(interface, basename, dir, definition)
            }
            Err(args) => Err(CodegenError::ArgumentCount {
                expected: ARGUMENT_NAMES.len(),
                found: args.len(),
            }),
        }
    }

    pub fn interface(&self) -> &InterfaceName {
        &self.interface
    }

    pub fn output_basename(&self) -> &OsStr {
        &self.output_basename
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn definition(&self) -> &Path {
        &self.definition
    }

    /// `output_dir` joined with `output_basename`.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_basename)
    }
}

fn empty(position: usize) -> CodegenError {
    CodegenError::EmptyArgument {
        position,
        name: ARGUMENT_NAMES[position - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_args_requires_four() {
        let err = CodegenRequest::from_args(["Encoder", "gen", "build"]).expect_err("err");
        assert!(matches!(
            err,
            CodegenError::ArgumentCount {
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn from_args_ignores_trailing_items() {
        let request =
            CodegenRequest::from_args(["Encoder", "gen", "build", "encoder.xml", "extra"])
                .expect("request");
        assert_eq!(request.definition(), Path::new("encoder.xml"));
    }

    #[test]
    fn empty_argument_reports_position() {
        let err = CodegenRequest::new("Encoder", "", "build", "encoder.xml").expect_err("err");
        assert!(matches!(
            err,
            CodegenError::EmptyArgument {
                position: 2,
                name: "output_basename"
            }
        ));

        let err = CodegenRequest::new("", "gen", "build", "encoder.xml").expect_err("err");
        assert!(matches!(err, CodegenError::EmptyArgument { position: 1, .. }));
    }

    #[cfg(unix)]
    #[test]
    fn keeps_non_utf8_basename() {
        use std::os::unix::ffi::OsStrExt;
        let basename = OsStr::from_bytes(b"gaeul-\xff-generated");
        let request =
            CodegenRequest::new("Encoder", basename, "build", "encoder.xml").expect("request");
        assert_eq!(request.output_basename(), basename);
        assert_eq!(request.output_path(), Path::new("build").join(basename));
    }

    #[test]
    fn output_path_joins_dir_and_basename() {
        let request =
            CodegenRequest::new("Encoder", "gaeul-encoder-generated", "build/gen", "x.xml")
                .expect("request");
        assert_eq!(request.output_path(), Path::new("build/gen").join("gaeul-encoder-generated"));
    }
}
