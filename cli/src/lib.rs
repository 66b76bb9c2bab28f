use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mindmap_client::{MindmapClient, StatusPolicy};
use mindmap_common::{LoadedConfig, MindmapConfig, MindmapRequest};
use mindmap_core::{Form, OutcomeSink, SubmissionHandler};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub mod console;
pub mod interactive;
pub mod logging;

pub use console::ConsoleSink;

#[derive(Parser, Debug)]
#[command(name = "mindmap")]
#[command(about = "Request course mindmaps from a mindmap generation server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Read configuration from this file instead of the default locations
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Server base URL (e.g., http://127.0.0.1:8000)
    #[arg(long)]
    pub server: Option<String>,

    /// Treat non-2xx responses as failures even when the body is JSON
    #[arg(long)]
    pub strict_status: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enter course fields on stdin and submit each entry
    Interactive,
    /// Submit one course description
    Generate {
        /// Course title
        #[arg(short, long, default_value = "")]
        title: String,
        /// Course description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Teaching objectives
        #[arg(short, long, default_value = "")]
        objectives: String,
        /// Number of submissions to fire without waiting in between
        #[arg(short, long, default_value_t = 1)]
        repeat: usize,
    },
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let loaded = resolve_config(&cli)?;
    logging::init_tracing(cli.debug, loaded.config.log_filter.as_deref());
    loaded.log();
    let config = loaded.config;
    tracing::debug!(?config, "resolved configuration");

    let form = Arc::new(Form::course());
    let handler = build_handler(&config, form.clone(), Arc::new(ConsoleSink))?;

    match cli.command {
        Some(Commands::Generate {
            title,
            description,
            objectives,
            repeat,
        }) => {
            form.fill(&MindmapRequest::new(title, description, objectives));
            generate(&handler, repeat).await?;
        }
        Some(Commands::Interactive) | None => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            interactive::run(stdin, &handler, &form).await?;
        }
    }

    Ok(())
}

/// Defaults, then file, then environment, then flags.
pub fn resolve_config(cli: &Cli) -> Result<LoadedConfig> {
    let mut loaded = match &cli.config {
        Some(path) => {
            let config = MindmapConfig::load_from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?;
            LoadedConfig::from_file(config, path)
        }
        None => MindmapConfig::load_with_fallback(),
    };
    loaded.config.apply_env();

    if let Some(server) = &cli.server {
        loaded.config.server_url = server.clone();
    }
    if cli.strict_status {
        loaded.config.strict_status = true;
    }

    Ok(loaded)
}

pub fn build_handler(
    config: &MindmapConfig,
    form: Arc<Form>,
    sink: Arc<dyn OutcomeSink>,
) -> Result<SubmissionHandler> {
    let client = MindmapClient::with_endpoint(
        &config.server_url,
        &config.endpoint,
        StatusPolicy::from_strict(config.strict_status),
    )?;
    let handler = SubmissionHandler::bind(form, Arc::new(client), sink)?;
    Ok(handler)
}

async fn generate(handler: &SubmissionHandler, repeat: usize) -> Result<()> {
    let mut pending = Vec::with_capacity(repeat);
    for _ in 0..repeat {
        pending.push(handler.trigger()?);
    }
    wait_all(pending).await;
    Ok(())
}

/// Wait for every submission to reach its sink.
pub async fn wait_all(pending: Vec<JoinHandle<()>>) {
    for result in futures::future::join_all(pending).await {
        if let Err(e) = result {
            tracing::error!("submission task failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "mindmap",
            "--server",
            "http://localhost:9000",
            "generate",
            "--title",
            "Intro",
            "-r",
            "3",
        ])
        .unwrap();

        assert_eq!(cli.server.as_deref(), Some("http://localhost:9000"));
        match cli.command {
            Some(Commands::Generate {
                title,
                description,
                objectives,
                repeat,
            }) => {
                assert_eq!(title, "Intro");
                assert_eq!(description, "");
                assert_eq!(objectives, "");
                assert_eq!(repeat, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["mindmap", "--strict-status"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.strict_status);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server_url = \"http://from-file:1\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "mindmap".to_string(),
            "--config".to_string(),
            path.display().to_string(),
            "--server".to_string(),
            "http://from-flag:2".to_string(),
            "--strict-status".to_string(),
        ])
        .unwrap();
        let loaded = resolve_config(&cli).unwrap();

        assert_eq!(loaded.config.server_url, "http://from-flag:2");
        assert!(loaded.config.strict_status);
        assert_eq!(loaded.source, Some(path));
    }

    #[test]
    fn test_bad_server_url_is_rejected() {
        let config = MindmapConfig {
            server_url: "::not a url::".to_string(),
            ..MindmapConfig::default()
        };
        let result = build_handler(&config, Arc::new(Form::course()), Arc::new(ConsoleSink));
        assert!(result.is_err());
    }
}
