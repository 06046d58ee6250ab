mod config;
mod generate_cmd;
mod serve_cmd;
#[cfg(test)]
mod test_util;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use config::ServeConfig;
use generate_cmd::OutputFormat;

#[derive(Parser)]
#[command(name = "gtm", about = "Deterministic go-to-market plan synthesizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a gtm config file
    Init {
        /// Address to bind the HTTP server to
        #[arg(long, default_value = ServeConfig::DEFAULT_BIND)]
        bind: String,
        /// Port for the HTTP server
        #[arg(long, default_value_t = ServeConfig::DEFAULT_PORT)]
        port: u16,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Serve the plan generation API and web form
    Serve {
        /// Address to bind (overrides GTM_BIND env var and config file)
        #[arg(long)]
        bind: Option<String>,
        /// Port to listen on (overrides GTM_PORT env var and config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Generate a plan from a JSON or TOML product brief
    Generate {
        /// Path to the brief (.json or .toml)
        file: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Output file path (defaults to stdout)
        #[arg(long)]
        output: Option<String>,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Execute the `gtm init` command: write config file.
fn cmd_init(bind: &str, port: u16, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        server: config::ServerSection {
            bind: bind.to_string(),
            port,
        },
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  server.bind = {bind}");
    println!("  server.port = {port}");
    println!();
    println!("Next: run `gtm serve` to start the API.");

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { bind, port, force } => {
            cmd_init(&bind, port, force)?;
        }
        Commands::Serve { bind, port } => {
            let resolved = ServeConfig::resolve(bind.as_deref(), port)?;
            serve_cmd::run_serve(&resolved).await?;
        }
        Commands::Generate {
            file,
            format,
            output,
        } => {
            generate_cmd::run_generate(&file, format, output.as_deref())?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "gtm", &mut std::io::stdout());
        }
    }

    Ok(())
}
