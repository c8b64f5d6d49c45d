use anyhow::Result;
use quaylint::cli::{Cli, Commands};
use quaylint::config::Config;
use quaylint::engine;
use quaylint::Dockerfile;

use clap::Parser;
use std::path::Path;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            dockerfile,
            format,
            config,
            ignore_file,
            fail_on,
        } => {
            let project_root = dockerfile
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
                .to_path_buf();
            let cfg = Config::load(config.as_deref(), &project_root)?;

            let ignore = ignore_file.or_else(|| cfg.ignore_file.clone());
            let parsed = match ignore {
                Some(ignore) => Dockerfile::from_path_with_ignore(&dockerfile, ignore)?,
                None => Dockerfile::from_path(&dockerfile)?,
            };

            let report = engine::run(&parsed, &cfg);
            let output_format = format.unwrap_or(cfg.format);
            quaylint::cli::output::render(&report, output_format);

            if report.has_severity_at_least(fail_on) {
                std::process::exit(1);
            }
        }
        Commands::Init => {
            let path = std::env::current_dir()?.join(".quaylintrc.toml");
            if path.exists() {
                eprintln!(".quaylintrc.toml already exists");
                std::process::exit(1);
            }
            std::fs::write(&path, Config::default_toml())?;
            println!("Created .quaylintrc.toml");
        }
        Commands::Explain { rule: None } => {
            println!("{}", quaylint::cli::explain::list_rules());
        }
        Commands::Explain { rule: Some(rule) } => {
            use quaylint::cli::explain::{explain, list_rules, UNKNOWN_RULE};
            match explain(&rule) {
                Some(text) => println!("{text}"),
                None => {
                    eprintln!("{UNKNOWN_RULE}: {rule}\n");
                    eprintln!("{}", list_rules());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
