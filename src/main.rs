// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context};
use serde_json::json;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use backend_switchboard::backends::{BackendFactory, HostBindings};
use backend_switchboard::config::{load_and_validate_settings, Settings};
use backend_switchboard::context::{PageLocation, BACKEND_TYPE_PARAM};
use backend_switchboard::launch::{compose_launch_url, launch_backend_type, FrontendLocator};
use backend_switchboard::observability::init_logging;

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    command: Option<String>,
    positional: Vec<String>,
    config: Option<PathBuf>,
    url: Option<String>,
    json: bool,
}

fn parse_args(args: &[String]) -> anyhow::Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a file path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "--url" => {
                let url = iter.next().context("--url needs a URL")?;
                parsed.url = Some(url.clone());
            }
            "--json" => parsed.json = true,
            flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
            value if parsed.command.is_none() => parsed.command = Some(value.to_string()),
            value => parsed.positional.push(value.to_string()),
        }
    }

    Ok(parsed)
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [options]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  kinds                 List recognized backend types");
    eprintln!("  url                   Print the URL the host window would open, serving");
    eprintln!("                        built frontend files until Ctrl-C");
    eprintln!("  greet <name>          Create a backend and call greet + greet_async");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <file>       Settings file (.yaml, .yml or .toml)");
    eprintln!("  --url <url>           Page URL to select the backend from (greet only)");
    eprintln!("  --json                Print greet results as JSON");
    eprintln!();
    eprintln!("Example: {} greet Ada --url \"http://localhost:5173/#backend_type=qt\"", program);
}

async fn run_url(settings: &Settings) -> anyhow::Result<()> {
    let frontend = FrontendLocator::new(settings.frontend.clone()).launch().await?;
    println!(
        "{}",
        compose_launch_url(frontend.url(), launch_backend_type(settings))
    );

    if frontend.server().is_some() {
        eprintln!("Serving the frontend; press Ctrl-C to stop");
        tokio::signal::ctrl_c()
            .await
            .context("Failed to listen for Ctrl-C")?;
        frontend.shutdown().await;
    }
    Ok(())
}

async fn run_greet(cli: &CliArgs, settings: Settings) -> anyhow::Result<()> {
    let name = cli
        .positional
        .first()
        .context("greet needs a name, e.g. `greet Ada`")?;

    let location = Arc::new(PageLocation::blank());
    match &cli.url {
        Some(url) => location
            .navigate(url)
            .with_context(|| format!("Invalid page URL '{}'", url))?,
        None => location.set_hash(&format!(
            "#{}={}",
            BACKEND_TYPE_PARAM,
            launch_backend_type(&settings)
        )),
    }

    // No host window here, so no bridge objects get injected
    let factory = BackendFactory::new(location, Arc::new(HostBindings::empty()))
        .with_settings(settings)?;
    let handle = factory.create()?;

    let started = Instant::now();
    let greeting = handle.greet(name).await?;
    let greet_elapsed = started.elapsed();

    let started = Instant::now();
    let greeting_async = handle.greet_async(name).await?;
    let greet_async_elapsed = started.elapsed();

    if cli.json {
        let report = json!({
            "context": handle.context(),
            "backend": handle.name(),
            "greet": { "reply": greeting, "elapsed_ms": greet_elapsed.as_millis() as u64 },
            "greet_async": { "reply": greeting_async, "elapsed_ms": greet_async_elapsed.as_millis() as u64 },
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Backend: {} (context: {})", handle.name(), handle.context());
        println!("greet:       {}  [{:?}]", greeting, greet_elapsed);
        println!("greet_async: {}  [{:?}]", greeting_async, greet_async_elapsed);
    }

    Ok(())
}

async fn run(args: &[String]) -> anyhow::Result<()> {
    let program = args.first().map(String::as_str).unwrap_or("switchboard");
    let cli = parse_args(args)?;
    let settings = load_and_validate_settings(cli.config.as_deref())?;

    match cli.command.as_deref() {
        Some("kinds") => {
            for token in BackendFactory::list_available_backends() {
                println!("{}", token);
            }
        }
        Some("url") => run_url(&settings).await?,
        Some("greet") => run_greet(&cli, settings).await?,
        Some(other) => {
            print_usage(program);
            bail!("Unknown command: {}", other);
        }
        None => {
            print_usage(program);
            std::process::exit(1);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    if let Err(e) = run(&args).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
