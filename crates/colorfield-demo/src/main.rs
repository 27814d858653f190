mod cli;
mod commands;

use std::process::ExitCode;

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use cli::Command;
use colorfield_config::LoadedConfig;

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "colorfield=info".parse().unwrap()),
            ),
        )
        .init();
}

fn print<T: Serialize + std::fmt::Display>(json: bool, report: &T) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(s) => println!("{s}"),
            Err(e) => tracing::error!("failed to serialize output: {e}"),
        }
    } else {
        println!("{report}");
    }
}

fn run(args: cli::Args, loaded: Option<LoadedConfig>) -> colorfield_common::Result<ExitCode> {
    let config = loaded.as_ref().map(|l| l.config.clone()).unwrap_or_default();
    match args.command {
        Command::Convert { value, from, to } => {
            let to = to.unwrap_or(config.field.notation);
            let conversion = commands::convert(&value, from, to)?;
            print(args.json, &conversion);
        }
        Command::Check { value, notation } => {
            let report = commands::check(&value, notation);
            print(args.json, &report);
            if !report.valid {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Show { value, empty } => {
            let color = commands::show_value(&config.field, value.as_deref(), empty)?;
            let default_color = commands::default_color(&config.field)?;
            print(args.json, &commands::show(color, default_color));
        }
        Command::InitConfig {
            force,
            notation,
            initial_color,
            default_color,
        } => {
            let path = match args.config {
                Some(path) => path,
                None => colorfield_config::default_config_path()?,
            };
            let overrides = commands::FieldOverrides {
                notation,
                initial_color,
                default_color,
            };
            commands::init_config(&path, force, overrides)?;
            println!("wrote {}", path.display());
        }
        Command::Config => {
            print(args.json, &commands::config_report(loaded.as_ref()));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Writing a config must not depend on loading it
    let loaded = match args.command {
        Command::InitConfig { .. } => Ok(None),
        _ => colorfield_config::load_config(args.config.as_deref()).map(Some),
    };

    // The config picks the log level, so its outcome is reported only once
    // the subscriber is installed
    let directive = match (&args.log_level, &loaded) {
        (Some(directive), _) => directive.clone(),
        (None, Ok(Some(loaded))) => loaded.config.logging.level.directive(),
        (None, _) => "colorfield=info".to_string(),
    };
    init_logging(&directive);

    tracing::debug!("colorfield v{} starting", env!("CARGO_PKG_VERSION"));

    let loaded = match loaded {
        Ok(loaded) => {
            if let Some(loaded) = &loaded {
                loaded.log();
                tracing::debug!(notation = %loaded.config.field.notation, "config ready");
            }
            loaded
        }
        Err(e) => {
            tracing::warn!("config load failed, using defaults: {e}");
            None
        }
    };

    match run(args, loaded) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
