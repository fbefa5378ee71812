use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use droidbuild_lib::build::BuildError;

mod cmd;
mod output;

use output::{OutputFormat, print_error};

/// droidbuild - Build an Android project with ant or gradle and stage its apks
#[derive(Parser)]
#[command(name = "droidbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Project directory (default: current directory)
  #[arg(short = 'C', long, global = true, default_value = ".")]
  project: PathBuf,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t)]
  output: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build the project and copy the apks into out/
  Build {
    /// Build options: [--debug | --release] [--ant | --gradle] [--nobuild]
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    options: Vec<String>,
  },

  /// Clean build products and remove out/
  Clean {
    /// Build options selecting the backend to clean
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    options: Vec<String>,
  },

  /// Print the CPU architecture (x86 or arm) of an attached device
  Arch {
    /// adb serial of the device (default: the only attached device)
    target: Option<String>,
  },

  /// Print the path of the staged apk to deploy
  Apk {
    /// Prefer the release apk
    #[arg(long)]
    release: bool,

    /// Only consider apks whose name contains this architecture
    #[arg(long)]
    arch: Option<String>,
  },

  /// Describe the build options and environment variables
  Usage,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      print_error(&format!("{:#}", err));
      ExitCode::from(exit_code(&err))
    }
  }
}

fn run(cli: Cli) -> Result<()> {
  let format = cli.output;
  match cli.command {
    Commands::Build { options } => cmd::cmd_build(&cli.project, &options, format),
    Commands::Clean { options } => cmd::cmd_clean(&cli.project, &options, format),
    Commands::Arch { target } => cmd::cmd_arch(&cli.project, target.as_deref(), format),
    Commands::Apk { release, arch } => cmd::cmd_apk(&cli.project, release, arch.as_deref(), format),
    Commands::Usage => {
      cmd::cmd_usage();
      Ok(())
    }
  }
}

/// Missing artifacts end the process with status 2, everything else with 1.
fn exit_code(err: &anyhow::Error) -> u8 {
  err
    .downcast_ref::<BuildError>()
    .map(|e| e.exit_code())
    .and_then(|code| u8::try_from(code).ok())
    .unwrap_or(1)
}
