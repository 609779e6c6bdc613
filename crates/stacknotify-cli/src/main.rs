mod console;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stacknotify_api::StackExchangeClient;
use stacknotify_core::{
    sources::StackExchangeSource, Config, QuestionSource, QuestionTracker, TagFilter, Watcher,
};

#[derive(Parser)]
#[command(name = "stacknotify")]
#[command(
    version,
    about = "Notifies once per newly posted Stack Overflow question matching tracked tags",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Watch for new questions; no subcommand does the same
    Watch {
        /// Tag to track; repeatable, none means notify about everything
        #[arg(long = "track", value_name = "TAG")]
        tags: Vec<String>,

        /// How many surfaced questions to keep in the recent list
        #[arg(long)]
        limit: Option<usize>,

        /// Seconds between polls
        #[arg(long)]
        interval: Option<u64>,
    },
    /// Print recent questions matching a tag and exit
    Latest {
        /// Tag to match
        tag: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stacknotify=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("failed to load configuration")?;

    match Cli::parse().command {
        Some(Commands::Latest { tag }) => latest(&config, &tag).await,
        Some(Commands::Watch {
            tags,
            limit,
            interval,
        }) => {
            let mut config = config;
            if !tags.is_empty() {
                config.tracked_tags = tags;
            }
            if let Some(limit) = limit {
                config.limit = limit;
            }
            if let Some(secs) = interval {
                config.poll_interval_secs = secs;
            }
            watch(config).await
        }
        None => watch(config).await,
    }
}

/// Run the notifier until Ctrl-C.
async fn watch(config: Config) -> anyhow::Result<()> {
    if config.tracked_tags.is_empty() {
        tracing::info!("watching all new questions (no tags tracked)");
    } else {
        tracing::info!("watching for tags: {}", config.tracked_tags.join(", "));
    }

    let client = StackExchangeClient::with_base_url(config.api.base_url.clone());
    let source = StackExchangeSource::new(client, config.api.page_size);
    let tracker = QuestionTracker::new(TagFilter::new(config.tracked_tags.clone()), config.limit);

    let mut watcher = Watcher::new(
        Box::new(source),
        tracker,
        Box::new(console::ConsoleNotifier),
        Box::new(console::ConsoleMenu::new()),
        config.poll_interval(),
    );

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    watcher.run(shutdown_rx).await;
    Ok(())
}

/// One-shot listing of recent questions carrying the given tag.
async fn latest(config: &Config, tag: &str) -> anyhow::Result<()> {
    let client = StackExchangeClient::with_base_url(config.api.base_url.clone());
    let source = StackExchangeSource::new(client, config.api.page_size);
    let filter = TagFilter::new([tag]);

    let questions = source
        .recent_questions()
        .await
        .context("failed to fetch recent questions")?;

    let matching: Vec<_> = questions.iter().filter(|q| filter.matches(q)).collect();

    if matching.is_empty() {
        println!("no recent questions with that tag found");
        return Ok(());
    }

    for question in matching {
        println!("{}", console::latest_line(question));
    }
    Ok(())
}
