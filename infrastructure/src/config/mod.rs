//! Configuration file loading for multi-agent-codegen
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables `CODEGEN_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./codegen.toml` or `./.codegen.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/multi-agent-codegen/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_HOST, DEFAULT_PORT, FileAgentsConfig, FileConfig, FileModelConfig, FileOutputConfig,
    FilePipelineConfig, FileServerConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
