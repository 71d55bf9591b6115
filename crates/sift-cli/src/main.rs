mod console;
mod notify;
mod output;

use std::time::Duration;

use chrono::NaiveDate;
use clap::Parser;
use sift_bird::{BirdCli, BirdPostSource, BirdProfileSource};
use sift_core::{AppConfig, RunMetadata, SearchQuery};
use sift_pipeline::{run_pipeline, EnrichPolicy};
use tracing_subscriber::EnvFilter;

use crate::console::ConsoleOperator;
use crate::output::CsvSink;

#[derive(Debug, Parser)]
#[command(name = "sift")]
#[command(about = "Collect posts, review them by hand, and save an enriched CSV table")]
#[command(
    long_about = "Searches for posts matching the given keywords and hashtags, asks you \
    to discard the ones that are off-topic, looks up each remaining author's profile, \
    and saves the result as <SINCE>---<UNTIL>.csv.\n\n\
    Example: sift -c \"Marinas, Gabriel Kenneth\" -s 2016-01-01 -u 2016-03-01 \
    -k fakevp \"leni mandaraya\" -H FakeVP ImpeachLeni"
)]
struct Cli {
    /// Your name, e.g. "Marinas, Gabriel Kenneth"
    #[arg(short = 'c', long, value_name = "COLLECTOR_NAME")]
    collector: String,

    /// Start date of the search (YYYY-MM-DD)
    #[arg(short = 's', long, value_name = "DATE")]
    since: NaiveDate,

    /// End date of the search (YYYY-MM-DD)
    #[arg(short = 'u', long, value_name = "DATE")]
    until: NaiveDate,

    /// Keywords to search for; quote multi-word phrases
    #[arg(short = 'k', long, num_args = 1.., required = true, value_name = "KEYWORD")]
    keywords: Vec<String>,

    /// Hashtags to search for, with or without the leading '#'
    #[arg(short = 'H', long, num_args = 1.., required = true, value_name = "HASHTAG")]
    hashtags: Vec<String>,
}

impl Cli {
    /// The search window and terms, rejecting a window that ends before it
    /// starts. A single-day window (`since == until`) is allowed.
    fn search_query(&self) -> anyhow::Result<SearchQuery> {
        if self.since > self.until {
            anyhow::bail!(
                "--since {} is after --until {}; nothing to search",
                self.since,
                self.until
            );
        }
        Ok(SearchQuery {
            keywords: self.keywords.clone(),
            hashtags: self.hashtags.clone(),
            since: self.since,
            until: self.until,
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = sift_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    run(cli, &config).await
}

async fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let query = cli.search_query()?;
    let metadata = RunMetadata {
        topic: config.topic.clone(),
        collector: cli.collector,
        keywords: cli.keywords,
    };
    let policy = EnrichPolicy {
        max_attempts: config.max_profile_attempts,
    };

    let bird = BirdCli::from_config(config);
    let posts = BirdPostSource::new(bird.clone(), config.search_limit);
    let profiles = BirdProfileSource::new(bird);

    let intro = format!(
        "After collecting all posts matching {:?} from {} up to {}, you will now \
         discard every post that does not spread mis/disinformation about the topic \"{}\".",
        metadata.keywords, query.since, query.until, metadata.topic.topic
    );
    let mut operator = ConsoleOperator::new(std::io::stdin().lock(), std::io::stdout())
        .with_intro(intro)
        .with_bell(config.notify);
    let mut sink = CsvSink::new(&config.output_dir);

    tracing::info!(?config, "starting run");

    let report = run_pipeline(
        &query,
        &metadata,
        &posts,
        &profiles,
        &mut operator,
        &mut sink,
        &policy,
    )
    .await?;

    if !report.enrichment.unresolved.is_empty() {
        println!(
            "Could not fetch profiles for {} account(s), fill these in by hand: {}",
            report.enrichment.unresolved.len(),
            report.enrichment.unresolved.join(", ")
        );
    }
    println!(
        "Saved {} rows to {}",
        report.records.len(),
        sink.path_for(&query).display()
    );

    if config.notify {
        notify::ring(&mut std::io::stderr(), 3, Duration::from_millis(400))?;
    }

    Ok(())
}
