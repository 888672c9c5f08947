//! comai - CLI entry point.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};
use dialoguer::Confirm;
use tracing_subscriber::EnvFilter;

use comai::commit::{ApplyMode, GenerateOptions, Outcome, generate, pick_explanation};
use comai::config::{Config, DEFAULT_MODEL};
use comai::git::{GitCli, TemplateStore, VersionControl, check_git_installed};
use comai::llm::OpenAiClient;

/// Generate git commit messages from staged changes using a chat-completion API.
#[derive(Parser, Debug)]
#[command(name = "comai")]
#[command(about = "Generate git commit messages using GPT-4")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    generate: GenerateArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Perform a git reset based on the number of steps back
    Back {
        /// Number of commits to move HEAD back
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        steps: u32,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Create a commit message template for the repository
    CreateTemplate {
        /// Template content
        template: String,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// High level explanation of the commit (takes precedence over --explanation)
    explanation: Option<String>,

    /// Add a high level explanation of the commit
    #[arg(short = 'e', long = "explanation")]
    explanation_flag: Option<String>,

    /// Commit the changes with the generated message
    #[arg(short, long)]
    commit: bool,

    /// Specify a commit message template
    #[arg(short, long)]
    template: Option<String>,

    /// Stage all changes before generating the commit message
    #[arg(short, long)]
    add: bool,

    /// Set the engine model to be used [default: gpt-4]
    #[arg(short, long)]
    model: Option<String>,

    /// Print the generated message without committing
    #[arg(long, conflicts_with = "commit")]
    dry_run: bool,
}

impl GenerateArgs {
    /// True when no generation flag or argument was given.
    fn is_unset(&self) -> bool {
        self.explanation.is_none()
            && self.explanation_flag.is_none()
            && !self.commit
            && self.template.is_none()
            && !self.add
            && self.model.is_none()
            && !self.dry_run
    }

    fn mode(&self) -> ApplyMode {
        if self.dry_run {
            ApplyMode::Print
        } else if self.commit {
            ApplyMode::Commit
        } else {
            ApplyMode::Edit
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.command.is_some() && !cli.generate.is_unset() {
        Cli::command()
            .error(
                ErrorKind::ArgumentConflict,
                "generation arguments cannot be used with a subcommand",
            )
            .exit();
    }
    init_tracing(cli.verbose);

    check_git_installed()?;

    let workdir = std::env::current_dir().context("Failed to read current directory")?;
    let config = Config::from_env(&workdir);

    match cli.command {
        Some(Command::Back { steps, yes }) => run_back(&config, steps, yes),
        Some(Command::CreateTemplate { template }) => run_create_template(&config, &template),
        None => run_generate(&config, cli.generate).await,
    }
}

/// Install the stderr subscriber. `--verbose` forces debug output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run_generate(config: &Config, args: GenerateArgs) -> Result<()> {
    let api_key = config.api_key()?.to_string();

    let vcs = GitCli::new(&config.workdir);
    let templates = TemplateStore::discover(&config.workdir)
        .context("Run comai from within a git repository")?;
    let client = OpenAiClient::new(&config.api_url, api_key);

    let options = GenerateOptions {
        mode: args.mode(),
        model: args.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        stage_all: args.add,
        template: args.template,
        explanation: pick_explanation(args.explanation, args.explanation_flag),
    };

    let outcome = generate(config, &options, &vcs, &templates, &client)
        .await
        .context("Failed to generate commit message")?;

    match outcome {
        Outcome::NoChanges => println!("Warning: No staged changes found. Exiting."),
        Outcome::Printed(message) => println!("Generated commit message:\n\n{message}"),
        Outcome::Committed(message) => println!("Committed message:\n\n{message}"),
        Outcome::Edited(_) => {}
    }

    Ok(())
}

fn run_back(config: &Config, steps: u32, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Reset HEAD~{steps}? Commits will be undone, changes kept."))
            .default(false)
            .interact()
            .context("Confirmation requires a terminal; pass --yes to skip it")?;

        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    GitCli::new(&config.workdir)
        .reset_back(steps)
        .context("Failed to perform git reset")?;

    println!("Successfully performed git reset HEAD~{steps}.");
    Ok(())
}

fn run_create_template(config: &Config, template: &str) -> Result<()> {
    TemplateStore::discover(&config.workdir)
        .context("Run comai from within a git repository")?
        .save(template)
        .context("Failed to save template")?;

    println!("Template saved successfully.");
    Ok(())
}
