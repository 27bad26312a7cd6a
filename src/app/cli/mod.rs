//! CLI Adapter.

use std::ffi::OsString;

use clap::Parser;

use crate::app::commands::generate::GenerateOptions;
use crate::app::logging;
use crate::domain::AppError;

#[derive(Parser, Debug)]
#[command(name = "studiogen")]
#[command(version)]
#[command(about = "Generate an Android Studio project skeleton", long_about = None)]
struct Cli {
    /// Base directory for the project (defaults to the current directory)
    base: Option<String>,
    /// Package name written into AndroidManifest.xml
    #[arg(
        short = 'p',
        long = "package",
        value_name = "PKG",
        default_value = "",
        allow_hyphen_values = true
    )]
    package: String,
    /// Mark the project as an application (default is a library)
    #[arg(long)]
    app: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    logging::init();

    if let Err(e) = run_generate(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(cli: Cli) -> Result<(), AppError> {
    let options =
        GenerateOptions { base: cli.base.unwrap_or_default(), package: cli.package, is_app: cli.app };
    let report = crate::generate(options)?;

    let failed = report.failures().count();
    if failed == 0 {
        println!("✅ Generated Android Studio skeleton at {}", report.root);
    } else {
        println!(
            "⚠️ Generated Android Studio skeleton at {} with {} failed step(s)",
            report.root, failed
        );
    }
    Ok(())
}

/// Accept the single-dash long form `-app` alongside `--app`.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;
    let mut expects_value = false;
    for arg in args {
        // The value of `-p` is taken verbatim, even when it reads `-app`.
        if passthrough || std::mem::take(&mut expects_value) {
            normalized.push(arg);
            continue;
        }
        match arg.to_str() {
            Some("-p") | Some("--package") => {
                expects_value = true;
                normalized.push(arg);
            }
            Some("--") => {
                passthrough = true;
                normalized.push(arg);
            }
            Some("-app") | Some("-app=true") => normalized.push("--app".into()),
            Some("-app=false") => {}
            _ => normalized.push(arg),
        }
    }
    normalized
}
