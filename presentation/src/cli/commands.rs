//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Console output format for `run`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every section, in page order
    Full,
    /// Only the final code
    Code,
    /// The run report as JSON
    Json,
}

impl From<OutputFormat> for codegen_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Code => Self::Code,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for multi-agent-codegen
#[derive(Parser, Debug)]
#[command(name = "multi-agent-codegen")]
#[command(author, version, about = "Five local-LLM agents explain, write, debug, review and demo Python code")]
#[command(long_about = r#"
multi-agent-codegen turns a problem description into Python code by running
five agents against a local Ollama model, one after the other:

1. Explainer  restates the problem in plain bullets
2. Developer  writes a first draft
3. Debugger   fixes the draft and returns the full program
4. Reviewer   replies with a status line
5. UseCase    gives three example inputs and outputs

Configuration files are loaded from (in priority order):
1. CODEGEN_* environment variables (e.g. CODEGEN_MODEL__ID=codellama)
2. --config <path>     Explicit config file
3. ./codegen.toml      Project-level config
4. ~/.config/multi-agent-codegen/config.toml   Global config

Example:
  multi-agent-codegen serve --port 8501
  multi-agent-codegen run "reverse the words in a sentence"
  multi-agent-codegen --model qwen2.5-coder run -o code "fizzbuzz up to n" > fizz.py
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Ollama model tag shared by every agent
    #[arg(short, long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature (0.0 - 2.0)
    #[arg(short, long, global = true, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// Ollama server URL
    #[arg(long, global = true, value_name = "URL")]
    pub ollama_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Serve the web page (default)
    Serve {
        /// Address to bind
        #[arg(long, value_name = "HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, value_name = "PORT")]
        port: Option<u16>,
    },

    /// Run the pipeline once and print the result
    Run {
        /// Problem description
        #[arg(required = true, num_args = 1.., value_name = "TASK")]
        task: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// List the agents and their instructions
    Agents,

    /// List models available on the Ollama server
    Models,
}

impl Cli {
    /// The command to run; `serve` when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            host: None,
            port: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::parse_from(["multi-agent-codegen"]);
        assert_eq!(
            cli.command(),
            Command::Serve {
                host: None,
                port: None
            }
        );
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_run_joins_words_and_accepts_global_flags() {
        let cli = Cli::parse_from([
            "multi-agent-codegen",
            "run",
            "-o",
            "json",
            "reverse",
            "a string",
            "--model",
            "codellama",
            "-vv",
        ]);
        assert_eq!(cli.model.as_deref(), Some("codellama"));
        assert_eq!(cli.verbose, 2);
        match cli.command() {
            Command::Run { task, output } => {
                assert_eq!(task.join(" "), "reverse a string");
                assert_eq!(output, Some(OutputFormat::Json));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_serve_port() {
        let cli = Cli::parse_from(["multi-agent-codegen", "serve", "--port", "9000"]);
        assert_eq!(
            cli.command(),
            Command::Serve {
                host: None,
                port: Some(9000)
            }
        );
    }

    #[test]
    fn test_run_requires_task() {
        assert!(Cli::try_parse_from(["multi-agent-codegen", "run"]).is_err());
    }
}
