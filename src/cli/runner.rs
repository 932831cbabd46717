//! CLI command execution

use super::commands::{Cli, Commands, OutputFormat};
use crate::api::TimelineApi;
use crate::config::AppConfig;
use crate::error::Result;
use crate::notify::{Level, Notification, Notifier};
use crate::suggest::{OpenAiGenerator, Suggester};
use crate::timeline::{Collector, CollectorConfig};
use crate::types::{Account, Timeline};

/// Executes parsed CLI commands
pub struct Runner {
    cli: Cli,
    config: AppConfig,
    notifier: Notifier,
}

impl Runner {
    /// Create a runner for the given CLI invocation
    ///
    /// Transient messages go to stderr so they never mix with JSON output.
    pub fn new(cli: Cli) -> Self {
        let notifier = Notifier::new();
        notifier.subscribe(|n: &Notification| {
            let prefix = match n.level {
                Level::Info => "note",
                Level::Warning => "warning",
                Level::Error => "error",
            };
            eprintln!("{prefix}: {}", n.message);
        });

        Self {
            cli,
            config: AppConfig::from_env(),
            notifier,
        }
    }

    /// Create a runner with explicit config (used by tests)
    pub fn with_config(cli: Cli, config: AppConfig) -> Self {
        Self {
            cli,
            config,
            notifier: Notifier::new(),
        }
    }

    /// Run the parsed command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Timeline { handle, max_pages } => {
                self.run_timeline(handle, *max_pages).await
            }
            Commands::Suggest {
                handle,
                count,
                max_pages,
            } => self.run_suggest(handle, *count, *max_pages).await,
        }
    }

    async fn run_timeline(&self, handle: &str, max_pages: u32) -> Result<()> {
        let Some((account, timeline)) = self.collect_for(handle, max_pages).await? else {
            return Ok(());
        };

        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&timeline)?);
            }
            OutputFormat::Pretty => {
                print_account(&account);
                for post in timeline.iter() {
                    println!("[{}] {}", post.created_at, post.text);
                    if let Some(metrics) = &post.public_metrics {
                        println!(
                            "    {} likes, {} reposts, {} replies, {} quotes",
                            metrics.like_count,
                            metrics.retweet_count,
                            metrics.reply_count,
                            metrics.quote_count
                        );
                    }
                }
                println!(
                    "\n{} posts across {} pages",
                    timeline.len(),
                    timeline.pages_fetched
                );
            }
        }
        Ok(())
    }

    async fn run_suggest(&self, handle: &str, count: usize, max_pages: u32) -> Result<()> {
        let Some((_, timeline)) = self.collect_for(handle, max_pages).await? else {
            return Ok(());
        };

        let generator = match OpenAiGenerator::new(&self.config) {
            Ok(generator) => generator,
            Err(e) => {
                self.notifier.publish(&Notification::error(e.to_string()));
                return Ok(());
            }
        };

        let suggester = Suggester::new(generator);
        let suggestions = suggester.suggest(&timeline.posts, handle, count).await;

        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            }
            OutputFormat::Pretty => {
                for (i, suggestion) in suggestions.iter().enumerate() {
                    println!("{}. {}", i + 1, suggestion);
                }
            }
        }
        Ok(())
    }

    /// Look up the account and collect its timeline
    ///
    /// A missing account is an outcome, not an error: it publishes a
    /// notification and yields `None`.
    async fn collect_for(
        &self,
        handle: &str,
        max_pages: u32,
    ) -> Result<Option<(Account, Timeline)>> {
        let api = TimelineApi::new(&self.config)?;

        let Some(account) = api.account_by_handle(handle).await? else {
            self.notifier
                .publish(&Notification::warning(format!("No account found for @{handle}")));
            return Ok(None);
        };

        let collector = Collector::with_config(api, CollectorConfig::with_max_pages(max_pages));
        let timeline = collector.collect_all(&account.id).await;

        if timeline.is_empty() {
            self.notifier
                .publish(&Notification::info(format!("@{handle} has no visible posts")));
        }

        Ok(Some((account, timeline)))
    }
}

fn print_account(account: &Account) {
    println!("@{} ({})", account.username, account.name);
    if let Some(bio) = &account.description {
        println!("{bio}");
    }
    if let Some(metrics) = &account.public_metrics {
        println!(
            "{} followers, {} following, {} posts",
            metrics.followers_count, metrics.following_count, metrics.tweet_count
        );
    }
    println!();
}
