use crate::config::toml_config::TomlConfig;
use crate::config::ServiceConfig;
use crate::core::patch::PatchSemantics;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "professores-api")]
#[command(about = "In-memory teacher directory served over HTTP/JSON")]
pub struct CliArgs {
    /// Address to bind
    #[arg(long, env = "PROFESSORES_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How PUT decides whether a field overwrites the stored value
    #[arg(long, value_enum)]
    pub patch_semantics: Option<PatchSemantics>,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    /// 預設值 < TOML 檔 < 命令列 / 環境變數
    pub fn resolve(&self) -> Result<ServiceConfig> {
        let mut config = ServiceConfig::default();

        if let Some(path) = &self.config {
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(patch_semantics) = self.patch_semantics {
            config.patch_semantics = patch_semantics;
        }
        if let Some(log_format) = self.log_format {
            config.log_format = log_format;
        }
        if self.verbose {
            config.verbose = true;
        }

        Ok(config)
    }
}
