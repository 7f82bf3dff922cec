use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dotagents::AgentError;
use dotagents::cli::commands::ux::UxAction;

#[derive(Parser)]
#[command(name = "dotagents")]
#[command(
    version,
    about = "Advisor agents for project voting decisions and a compliance linter for agent packages"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, global = true, help = "Debug logging and per-check details")]
    verbose: bool,

    #[arg(long, short, global = true, help = "Only log errors")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a project and recommend a TAC vote
    #[command(name = "tac-advisor")]
    TacAdvisor {
        #[arg(help = "Name of the project to analyze")]
        project_name: String,
        #[arg(help = "GitHub repository URL")]
        repository_url: String,
        #[arg(long, short, help = "Project description")]
        description: Option<String>,
        #[arg(long, short, help = "Additional context for the vote")]
        context: Option<String>,
        #[arg(long, short, help = "Output directory for the saved analysis")]
        output: Option<PathBuf>,
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, help = "GitHub API token")]
        github_token: Option<String>,
        #[arg(long, help = "Print the recommendation without saving it")]
        no_save: bool,
    },

    /// Lint agent packages for compliance
    Lint {
        #[arg(long, short, help = "Lint a specific agent only")]
        agent: Option<String>,
        #[arg(long, short, help = "Fix formatting in place before linting")]
        fix: bool,
        #[arg(long, help = "Directory holding agent packages")]
        agents_dir: Option<PathBuf>,
    },

    /// UX design guidance
    Ux {
        #[arg(value_enum)]
        action: UxAction,
        #[arg(help = "Design request to analyze")]
        request: Option<String>,
        #[arg(long, short, help = "Additional context")]
        context: Option<String>,
        #[arg(long, short, help = "Feature name for wireframe guidance")]
        feature: Option<String>,
    },

    /// Scaffold a new agent package
    NewAgent {
        #[arg(help = "Kebab-case agent name")]
        name: String,
        #[arg(long, short, help = "One-line agent description")]
        description: Option<String>,
        #[arg(long, help = "Directory holding agent packages")]
        agents_dir: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            help = "Output format: toml, json, yaml"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mdotagents encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }

        eprintln!("\n\x1b[33mPlease report this issue at:\x1b[0m");
        eprintln!("  https://github.com/dotagents/dotagents/issues");
        eprintln!();

        // Backtrace when RUST_BACKTRACE=1
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let interrupted = e
                .downcast_ref::<AgentError>()
                .is_some_and(AgentError::is_interrupt);
            if interrupted {
                eprintln!("\n\x1b[33mAnalysis interrupted by user\x1b[0m");
            } else {
                eprintln!("\x1b[31mError:\x1b[0m {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::TacAdvisor {
            project_name,
            repository_url,
            description,
            context,
            output,
            github_token,
            no_save,
        } => {
            use dotagents::cli::commands::advise::{AdviseOptions, run};

            let rt = Runtime::new()?;
            rt.block_on(run(AdviseOptions {
                project_name,
                repository_url,
                description,
                context,
                output,
                github_token,
                save: !no_save,
            }))?;
        }
        Commands::Lint {
            agent,
            fix,
            agents_dir,
        } => {
            let rt = Runtime::new()?;
            rt.block_on(dotagents::cli::commands::lint::run(
                agent,
                fix,
                agents_dir,
                cli.verbose,
            ))?;
        }
        Commands::Ux {
            action,
            request,
            context,
            feature,
        } => {
            dotagents::cli::commands::ux::run(
                action,
                request.as_deref(),
                context.as_deref(),
                feature.as_deref(),
            )?;
        }
        Commands::NewAgent {
            name,
            description,
            agents_dir,
        } => {
            dotagents::cli::commands::new_agent::run(&name, description.as_deref(), agents_dir)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                dotagents::cli::commands::config::show(&format)?;
            }
            ConfigAction::Path => {
                dotagents::cli::commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                if global {
                    dotagents::cli::commands::config::init_global(force)?;
                } else {
                    dotagents::cli::commands::config::init_project(force)?;
                }
            }
        },
    }

    Ok(())
}
