use anyhow::{Context, Result};
use clap::Parser;
use gaeul_codegen::{exit_code, CodegenConfig, CodegenRequest, Invocation};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "gaeul-dbus-codegen",
    about = "Generate GDBus C bindings for a Gaeul D-Bus interface",
    version
)]
struct Cli {
    /// Short interface name, qualified as org.hwangsaeul.Gaeul.<NAME>
    #[arg(value_name = "NAME")]
    interface_name: String,

    /// Base name of the generated .c/.h files
    #[arg(value_name = "OUTPUT_BASENAME")]
    output_basename: OsString,

    /// Directory the generated files are written to
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: PathBuf,

    /// D-Bus introspection XML to generate from
    #[arg(value_name = "DEFINITION")]
    definition: PathBuf,

    /// TOML file overriding the tool path or naming constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the generator command line, shell-quoted, instead of running it
    #[arg(long)]
    dry_run: bool,

    /// Log a non-zero generator exit as an error
    #[arg(long)]
    strict: bool,
}

fn main() {
    let cli = Cli::parse();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("gaeul-dbus-codegen: {err:#}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = match &cli.config {
        Some(path) => CodegenConfig::from_path(path)?,
        None => CodegenConfig::default(),
    };
    let request = CodegenRequest::new(
        cli.interface_name,
        cli.output_basename,
        cli.output_dir,
        cli.definition,
    )?;
    let invocation = Invocation::new(&config, &request);

    if cli.dry_run {
        println!("{}", invocation.command_line());
        return Ok(0);
    }

    let status = invocation
        .run()
        .with_context(|| format!("generating bindings for {}", request.interface()))?;
    if cli.strict && !status.success() {
        log::error!("{} exited with {status}", invocation.program());
    }
    Ok(exit_code(status))
}
