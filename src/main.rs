use clap::{Parser, Subcommand};
use clap_complete::Shell;
use colored::*;

use rulens_lib::exit_codes::exit;

mod commands;

use commands::ToolOptions;
use commands::check::CheckStatus;

const DEFAULT_OUTPUT: &str = "docs/lint-rules.md";

#[derive(Parser)]
#[command(
    name = "rulens",
    author,
    version,
    about = "Extract and format linting rules into Markdown",
    long_about = None
)]
pub struct Cli {
    /// Show detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Markdown documentation from linting configurations
    Generate {
        /// Output file path
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: String,

        /// Additional arguments to pass to `biome rage`
        #[arg(long, default_value = "")]
        biome_args: String,

        /// Additional arguments to pass to `eslint`
        #[arg(long, default_value = "")]
        eslint_args: String,

        /// Path to the ESLint config file (default: eslint.config.js)
        #[arg(long)]
        eslint_config: Option<String>,
    },

    /// Check that the committed documentation matches the current linting
    /// configuration
    #[command(alias = "lint")]
    Check {
        /// Output file path to compare against
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: String,

        /// Additional arguments to pass to `biome rage`
        #[arg(long, default_value = "")]
        biome_args: String,

        /// Additional arguments to pass to `eslint`
        #[arg(long, default_value = "")]
        eslint_args: String,

        /// Path to the ESLint config file (default: eslint.config.js)
        #[arg(long)]
        eslint_config: Option<String>,

        /// Rewrite the documentation when it is out of date
        #[arg(long)]
        update: bool,
    },

    /// Print version information
    Version,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (detected from $SHELL when
        /// omitted)
        shell: Option<Shell>,
    },
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Generate {
            output,
            biome_args,
            eslint_args,
            eslint_config,
        } => {
            let options = ToolOptions {
                biome_args,
                eslint_args,
                eslint_config,
            };
            match commands::generate::handle_generate(&output, &options) {
                Ok(()) => exit::success(),
                Err(error) => {
                    eprintln!("{}: {error:#}", "Error".red().bold());
                    exit::tool_error();
                }
            }
        }
        Commands::Check {
            output,
            biome_args,
            eslint_args,
            eslint_config,
            update,
        } => {
            let options = ToolOptions {
                biome_args,
                eslint_args,
                eslint_config,
            };
            match commands::check::handle_check(&output, &options, update) {
                Ok(CheckStatus::UpToDate | CheckStatus::Updated) => exit::success(),
                Ok(CheckStatus::OutOfDate) => exit::out_of_date(),
                Err(error) => {
                    eprintln!("{}: {error:#}", "Error".red().bold());
                    exit::tool_error();
                }
            }
        }
        Commands::Version => commands::version::handle_version(),
        Commands::Completions { shell } => commands::completions::handle_completions(shell),
    }
}
