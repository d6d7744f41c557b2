use std::io;

use anyhow::{anyhow, bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cz_emoji::analyzer::{classify, VersionAnalyzer};
use cz_emoji::config::{self, Config};
use cz_emoji::git::{latest_version_tag, Git2Repository, Repository};
use cz_emoji::questions::questions;
use cz_emoji::{message, ui};

#[derive(Parser)]
#[command(
    name = "cz-emoji",
    version,
    about = "Compose emoji conventional commits and compute version bumps from them"
)]
struct Cli {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask for the commit details and print the composed message
    Commit {
        #[arg(long, help = "Create the commit from the staged changes instead of printing")]
        create: bool,
    },
    /// Print the version bump each commit message causes
    Classify {
        #[arg(required = true, help = "Commit messages to classify")]
        messages: Vec<String>,
    },
    /// Compute the next release version from the commits since the last tag
    Bump {
        #[arg(long, help = "Tag to start from instead of the latest release tag")]
        from: Option<String>,
    },
    /// Print an example commit message
    Example,
    /// Print the commit message schema
    Schema,
    /// Describe the commit convention
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::load_config(cli.config.as_deref()).context("failed to load configuration")?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Commit { create } => run_commit(create),
        Command::Classify { messages } => {
            for message in &messages {
                let subject = message.lines().next().unwrap_or("");
                println!("{}", ui::format_classification(subject, classify(message)));
            }
            Ok(())
        }
        Command::Bump { from } => run_bump(&config, from),
        Command::Example => {
            println!("{}", message::example());
            Ok(())
        }
        Command::Schema => {
            println!("{}", message::schema());
            Ok(())
        }
        Command::Info => {
            println!("{}", message::info());
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("CZ_EMOJI_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_commit(create: bool) -> Result<()> {
    let schema = questions();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    // Prompts go to stderr so the message alone can be piped from stdout
    let mut prompts = io::stderr();

    let answers = ui::ask_all(&schema, &mut input, &mut prompts)?;
    let message = cz_emoji::render(&answers);

    if !create {
        println!("{}", message);
        return Ok(());
    }

    let repo = Git2Repository::open(".").context("not in a git repository")?;
    let oid = repo.create_commit(&message)?;
    ui::display_success(&format!("Created commit {}", oid));
    Ok(())
}

fn run_bump(config: &Config, from: Option<String>) -> Result<()> {
    let repo = Git2Repository::open(".").context("not in a git repository")?;
    let pattern = config.tag_pattern()?;

    let (since_tag, current) = match from {
        Some(tag) => {
            let Some(version) = pattern.extract_version(&tag) else {
                bail!(
                    "Tag '{}' does not follow the tag format '{}'",
                    tag,
                    pattern.as_str()
                );
            };
            (Some(tag), Some(version))
        }
        None => match latest_version_tag(&repo, &pattern)? {
            Some((tag, version)) => (Some(tag), Some(version)),
            None => (None, None),
        },
    };

    let from_oid = match &since_tag {
        Some(tag) => Some(
            repo.find_tag_oid(tag)?
                .ok_or_else(|| anyhow!("Tag '{}' not found", tag))?,
        ),
        None => None,
    };
    let head = repo.head_oid()?;

    let analyzer = VersionAnalyzer::new(config.bump.clone());
    let commits = analyzer.classify_repository_range(&repo, from_oid, head)?;
    ui::display_commit_analysis(&commits, since_tag.as_deref());

    let bump = analyzer.analyze_classified(&commits);
    match analyzer.next_version(current.as_ref(), bump)? {
        Some(next) => {
            let new_tag = pattern.format(&next);
            ui::display_proposed_version(current.as_ref(), &next, &new_tag);
            println!("{}", new_tag);
        }
        None => ui::display_status("No version bump required."),
    }
    Ok(())
}
