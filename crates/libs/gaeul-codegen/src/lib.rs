//! Runs `gdbus-codegen` with Gaeul naming conventions.
//!
//! Given a short interface name such as `Encoder`, the generator is invoked
//! with:
//!
//! ```text
//! gdbus-codegen
//!   --interface-prefix=org.hwangsaeul.Gaeul.Encoder.
//!   --generate-c-code=<output_dir>/<output_basename>
//!   --c-namespace=GaeulDBus
//!   --annotate org.hwangsaeul.Gaeul.Encoder org.gtk.GDBus.C.Name Encoder
//!   <definition_file_path>
//! ```
//!
//! The definition file and the generated output are never inspected here.
//!
//! ```no_run
//! use gaeul_codegen::{exit_code, CodegenConfig, CodegenRequest, Invocation};
//!
//! let request = CodegenRequest::new("Encoder", "gaeul-encoder-generated", "build", "encoder.xml")?;
//! let status = Invocation::new(&CodegenConfig::default(), &request).run()?;
//! std::process::exit(exit_code(status));
//! # Ok::<(), gaeul_codegen::CodegenError>(())
//! ```

pub mod config;
pub mod error;
pub mod invocation;
pub mod naming;
pub mod request;

pub use config::CodegenConfig;
pub use error::CodegenError;
pub use invocation::{exit_code, Invocation};
pub use naming::InterfaceName;
pub use request::CodegenRequest;
