//! CLI entrypoint for multi-agent-codegen
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use codegen_application::{AgentRunner, GenerateCodeUseCase, LlmGateway};
use codegen_domain::{ConfigIssue, OutputFormat, Severity};
use codegen_infrastructure::{ConfigLoader, FileConfig, OllamaGateway};
use codegen_presentation::{
    AppState, Cli, Command, ConsoleFormatter, OutputFormatter, ProgressReporter,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stderr keeps `run -o code > file.py` clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("Failed to load configuration")?
    };
    let command = cli.command();
    apply_cli_overrides(&mut config, &cli, &command);
    check_config(&config.validate())?;

    ConsoleFormatter::set_color(config.output.color);
    info!("Starting multi-agent-codegen (model: {})", config.model.id);

    // === Dependency Injection ===
    let pipeline_config = config.to_pipeline_config();

    let model = config.to_model_settings();

    match command {
        Command::Agents => {
            print!("{}", ConsoleFormatter::format_agents(&pipeline_config.roster));
            Ok(ExitCode::SUCCESS)
        }
        Command::Models => {
            let gateway = build_gateway(&config)?;
            let models = gateway
                .available_models()
                .await
                .with_context(|| format!("Failed to list models at {}", gateway.base_url()))?;
            print!("{}", ConsoleFormatter::format_models(&models, &model.model));
            Ok(ExitCode::SUCCESS)
        }
        Command::Run { task, output } => {
            let runner = AgentRunner::new(build_gateway(&config)?, model);
            let use_case = GenerateCodeUseCase::new(runner, pipeline_config);
            let format = output
                .map(OutputFormat::from)
                .or(config.output.format)
                .unwrap_or_default();
            let show_progress = config.output.show_progress && !cli.quiet;

            let report = run_once(&use_case, &task.join(" "), format, show_progress).await;
            Ok(if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Serve { .. } => {
            let runner = AgentRunner::new(build_gateway(&config)?, model);
            let use_case = GenerateCodeUseCase::new(runner, pipeline_config);
            let addr = config.server.bind_addr();
            if !cli.quiet {
                eprintln!("🤖 Multi-Agent Python Generator on http://{}", addr);
            }
            codegen_presentation::serve(AppState::new(use_case), &addr).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn build_gateway(config: &FileConfig) -> Result<Arc<OllamaGateway>> {
    let gateway = OllamaGateway::new(&config.model.base_url, config.model.timeout())
        .context("Failed to create Ollama client")?;
    Ok(Arc::new(gateway))
}

/// Run the pipeline once and print it in `format`
async fn run_once(
    use_case: &GenerateCodeUseCase,
    task: &str,
    format: OutputFormat,
    show_progress: bool,
) -> codegen_domain::PipelineReport {
    match (format, show_progress) {
        // Blocks are printed live as each stage finishes
        (OutputFormat::Full, true) => {
            print!("{}", ConsoleFormatter::format_preamble(task));
            let progress = ProgressReporter::new();
            let report = use_case.execute_with_progress(task, &progress).await;
            print!("{}", ConsoleFormatter::format_footer());
            report
        }
        (_, true) => {
            let progress = ProgressReporter::spinners_only();
            let report = use_case.execute_with_progress(task, &progress).await;
            print!("{}", ConsoleFormatter.format_as(&report, format));
            report
        }
        (_, false) => {
            let report = use_case.execute(task).await;
            print!("{}", ConsoleFormatter.format_as(&report, format));
            report
        }
    }
}

/// CLI flags take precedence over every config source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli, command: &Command) {
    if let Some(model) = &cli.model {
        config.model.id = model.clone();
    }
    if let Some(temperature) = cli.temperature {
        config.model.temperature = temperature;
    }
    if let Some(url) = &cli.ollama_url {
        config.model.base_url = url.clone();
    }
    if let Command::Serve { host, port } = command {
        if let Some(host) = host {
            config.server.host = host.clone();
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
    }
}

/// Print warnings, fail on errors
fn check_config(issues: &[ConfigIssue]) -> Result<()> {
    for issue in issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => eprintln!("{}", issue),
        }
    }
    if ConfigIssue::has_errors(issues) {
        bail!("Invalid configuration");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_config() {
        let cli = Cli::parse_from([
            "multi-agent-codegen",
            "--model",
            "codellama",
            "--temperature",
            "0.7",
            "serve",
            "--port",
            "9001",
        ]);
        let mut config = FileConfig::default();
        apply_cli_overrides(&mut config, &cli, &cli.command());

        assert_eq!(config.model.id, "codellama");
        assert_eq!(config.model.temperature, 0.7);
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.model.base_url, "http://localhost:11434");
    }

    #[test]
    fn test_out_of_range_flag_is_rejected() {
        let cli = Cli::parse_from(["multi-agent-codegen", "-t", "5", "agents"]);
        let mut config = FileConfig::default();
        apply_cli_overrides(&mut config, &cli, &cli.command());
        assert!(check_config(&config.validate()).is_err());
    }
}
