use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use std::collections::BTreeMap;

use people_generator::{commands::Args, generator::Generator, output};

fn progress_bar(count: usize) -> Result<ProgressBar> {
    let progress = ProgressBar::new(count as u64);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len} records")
            .context("Invalid progress bar template")?,
    );
    Ok(progress)
}

async fn generate_people(args: &Args) -> Result<()> {
    let count = args.record_count()?;

    tracing::info!(
        "Generating {} person records into {}",
        count,
        args.output.display()
    );
    if let Some(seed) = args.seed {
        tracing::info!("Using seed {}", seed);
    }

    let start = std::time::Instant::now();

    let mut generator = Generator::new(args.seed);
    let mut per_locale: BTreeMap<&'static str, usize> = BTreeMap::new();
    let people = generator.people(count).inspect(|person| {
        *per_locale.entry(person.settings.locale.tag()).or_default() += 1;
    });

    let progress = progress_bar(count)?;
    let written = output::write_stream(people, &args.output, &progress)
        .await
        .with_context(|| format!("Could not write people to {}", args.output.display()))?;
    progress.finish_and_clear();

    for (locale, count) in &per_locale {
        tracing::info!("{}: {} records", locale, count);
    }
    tracing::info!(
        "{} records written to {} in {:?}",
        written,
        args.output.display(),
        start.elapsed()
    );

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let env_file = match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(e) if e.not_found() => None,
        Err(e) => return Err(e).context("Failed to load .env file"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Some(path) = env_file {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let args = Args::parse();
    generate_people(&args).await?;

    Ok(())
}
