//! envfile - Main entry point.
//!
//! Usage:
//!   envfile read <ENV_NAME> [--optional]
//!   envfile load <ENV_NAME>=<property>...

use std::io::Write;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use envfile::{system_properties, EnvFileReader};

const USAGE: &str = "Usage: envfile <command>\n\nCommands:\n  read <ENV_NAME> [--optional]\n  load <ENV_NAME>=<property>...";

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the process environment is used as-is.
    let _ = dotenvy::dotenv();

    // Initialize logging. stdout is reserved for file content.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "envfile=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let reader = EnvFileReader::system();

    match args.next().as_deref() {
        Some("read") => read(&reader, args.collect()),
        Some("load") => load(&reader, args.collect()),
        Some(cmd) => anyhow::bail!("Unknown command: {cmd}\n\n{USAGE}"),
        None => anyhow::bail!(USAGE),
    }
}

fn read(reader: &EnvFileReader, args: Vec<String>) -> anyhow::Result<()> {
    let mut env_name = None;
    let mut required = true;

    for arg in args {
        match arg.as_str() {
            "--optional" => required = false,
            _ if env_name.is_none() => env_name = Some(arg),
            _ => anyhow::bail!("Unexpected argument: {arg}\n\n{USAGE}"),
        }
    }

    let env_name = env_name.with_context(|| format!("read needs an ENV_NAME\n\n{USAGE}"))?;
    let content = reader.read_with(&env_name, required)?;

    // stdout carries exactly the file content, no trailing newline.
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn load(reader: &EnvFileReader, args: Vec<String>) -> anyhow::Result<()> {
    if args.is_empty() {
        anyhow::bail!("load needs at least one <ENV_NAME>=<property> pair\n\n{USAGE}");
    }

    let mapping = args
        .iter()
        .map(|arg| {
            arg.split_once('=')
                .filter(|(env_name, property)| !env_name.is_empty() && !property.is_empty())
                .with_context(|| format!("Expected <ENV_NAME>=<property>, got '{arg}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    reader
        .read_and_set(mapping.iter().copied())
        .context("Failed to load env-files into properties")?;

    let loaded = system_properties().snapshot();
    for (_, property) in &mapping {
        let bytes = loaded.get(*property).map_or(0, String::len);
        tracing::info!(property = %property, bytes, "Property loaded");
    }

    Ok(())
}
