use crate::config::CodegenConfig;
use crate::error::CodegenError;
use crate::request::CodegenRequest;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// A fully assembled generator command line.
///
/// Argument order is fixed: interface prefix, output path, C namespace, the
/// four-token name annotation, then the definition file last.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<OsString>,
}

impl Invocation {
    pub fn new(config: &CodegenConfig, request: &CodegenRequest) -> Self {
        let name = request.interface();
        let prefix = name.qualified_prefix(&config.interface_root);

        let mut output_flag = OsString::from("--generate-c-code=");
        output_flag.push(request.output_path());

        let args = vec![
            OsString::from(format!("--interface-prefix={prefix}.")),
            output_flag,
            OsString::from(format!("--c-namespace={}", config.c_namespace)),
            OsString::from("--annotate"),
            OsString::from(prefix),
            OsString::from(&config.name_annotation),
            OsString::from(name.as_str()),
            request.definition().as_os_str().to_os_string(),
        ];

        Self {
            program: config.tool.clone(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// POSIX-shell rendering for logs and dry runs. Any argument containing
    /// characters outside a conservative safe set is single-quoted.
    pub fn command_line(&self) -> String {
        std::iter::once(OsStr::new(&self.program))
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(quote)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Looks the generator up on `PATH`. Absolute and relative paths are
    /// checked for an executable file instead.
    pub fn resolve_program(&self) -> Result<PathBuf, CodegenError> {
        which::which(&self.program).map_err(|err| {
            log::debug!("lookup of {} failed: {err}", self.program);
            CodegenError::ToolNotFound {
                tool: self.program.clone(),
            }
        })
    }

    /// Runs the generator with inherited stdio and waits for it. A non-zero
    /// exit is returned as-is, not as an error.
    pub fn run(&self) -> Result<ExitStatus, CodegenError> {
        let program = match self.resolve_program() {
            Ok(resolved) => {
                log::debug!("resolved {} to {}", self.program, resolved.display());
                resolved
            }
            // Present but not runnable: the spawn reports the real OS error.
            Err(_) if Path::new(&self.program).is_file() => PathBuf::from(&self.program),
            Err(err) => return Err(err),
        };
        log::debug!("running {}", self.command_line());

        let status = Command::new(&program)
            .args(&self.args)
            .status()
            .map_err(|err| CodegenError::from_spawn(&self.program, err))?;

        log::debug!("{} exited with {status}", self.program);
        Ok(status)
    }
}

/// Exit code to report for a finished generator. A child killed by a signal
/// maps to `128 + signal` on Unix.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

fn quote(arg: &OsStr) -> String {
    let arg = arg.to_string_lossy();
    if !arg.is_empty() && arg.chars().all(is_shell_safe) {
        return arg.into_owned();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '/' | '=' | ':' | '-' | ',' | '+' | '@')
}
