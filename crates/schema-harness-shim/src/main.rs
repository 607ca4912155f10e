//! Schema Harness Shim: entry point.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use schema_harness::{CaseRunner, ImplementationMetadata, JsonSchemaEngine};
use schema_harness_shim::config::{load_known_issues, resolve_skips_path};
use schema_harness_shim::protocol::Dispatcher;
use schema_harness_shim::transport::StdioTransport;
use schema_harness_shim::types::PROTOCOL_VERSION;

#[derive(Parser)]
#[command(
    name = "schema-harness-shim",
    about = "Conformance harness shim: drives a JSON Schema engine over line-delimited stdio",
    version
)]
struct Cli {
    /// Path to a JSON file of known issues to report as skipped.
    #[arg(long, global = true)]
    skips: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Speak the harness protocol over stdio (default).
    Serve,

    /// Print the handshake metadata as JSON.
    Info,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   schema-harness-shim completions bash > ~/.local/share/bash-completion/completions/schema-harness-shim
    ///   schema-harness-shim completions zsh > ~/.zfunc/_schema-harness-shim
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    std::panic::set_hook(Box::new(|info| {
        tracing::error!("{info}");
    }));

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let skips_path = resolve_skips_path(cli.skips.as_deref());
            let known_issues = load_known_issues(skips_path.as_deref())?;
            let runner = CaseRunner::new(JsonSchemaEngine::new()).with_known_issues(known_issues);
            let mut transport = StdioTransport::new(Dispatcher::new(runner));

            if let Err(e) = transport.run().await {
                tracing::error!("Harness stopped: {e}");
                std::process::exit(e.exit_code());
            }
        }

        Commands::Info => {
            let info = serde_json::json!({
                "version": PROTOCOL_VERSION,
                "implementation": ImplementationMetadata::describe(&JsonSchemaEngine::new()),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(
                shell,
                &mut cmd,
                "schema-harness-shim",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}
