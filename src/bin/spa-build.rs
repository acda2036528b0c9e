use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use spa_bridge::build::{build_all, collect_static, select_targets, BuildError, BuildTool};
use spa_bridge::config::load_config;
use spa_bridge::observability::logging;
use spa_bridge::registry::Registry;

#[derive(Parser)]
#[command(name = "spa-build")]
#[command(about = "Build front-end apps and post-process their index.html", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "spa-bridge.toml")]
    config: PathBuf,

    /// Names of app(s) to build (default: all)
    #[arg(value_name = "APP")]
    apps: Vec<String>,

    /// Use yarn instead of npm
    #[arg(long = "yarn")]
    use_yarn: bool,

    /// Collect static files after building
    #[arg(long)]
    collectstatic: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = load_config(&cli.config)?;
    logging::init(&config.observability);

    let registry = Registry::from_config(&config)?;
    let tool = BuildTool::locate(cli.use_yarn).await?;
    let targets = select_targets(&registry, &cli.apps)?;

    for target in &targets {
        println!("Building app at {}", target.dir.display());
    }

    let report = build_all(&tool, targets).await;

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(()) => println!("Finished building {}", outcome.app),
            Err(e) => print_failure(e),
        }
    }

    if !report.succeeded() {
        return Ok(ExitCode::from(report.exit_code() as u8));
    }

    if cli.collectstatic {
        let count = collect_static(&registry.static_search_path(), registry.static_root())?;
        println!(
            "{} static files copied to {}",
            count,
            registry.static_root().display()
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn print_failure(error: &BuildError) {
    match error {
        BuildError::ToolFailed {
            dir,
            stdout,
            stderr,
            ..
        } => {
            eprintln!(">>> ERROR while building app {}", dir.display());
            eprintln!("{}", stdout);
            eprintln!("{}", stderr);
            eprintln!();
        }
        other => eprintln!("{}", other),
    }
}
