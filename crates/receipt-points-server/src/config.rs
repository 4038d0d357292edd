use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use receipt_points::ProcessorConfig;

const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable output (development)
    #[default]
    Pretty,
    /// JSON structured logging (production)
    Json,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub log_format: LogFormat,
    pub processor: ProcessorConfig,
}

impl ServerConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let CliArgs {
            bind,
            log_format,
            skip_validation,
        } = args;

        let bind_address = match bind {
            Some(addr) => addr,
            None => DEFAULT_BIND
                .parse()
                .with_context(|| format!("invalid default bind address {DEFAULT_BIND}"))?,
        };

        Ok(Self {
            bind_address,
            log_format: log_format.unwrap_or_default(),
            processor: ProcessorConfig {
                validate_on_process: !skip_validation,
            },
        })
    }
}

#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "receipt-points-server",
    about = "Accepts purchase receipts and reports their loyalty points",
    version
)]
pub struct CliArgs {
    #[arg(
        long,
        env = "RECEIPT_POINTS_BIND",
        value_name = "ADDR",
        help = "Socket address to listen on [default: 127.0.0.1:8080]"
    )]
    pub bind: Option<SocketAddr>,

    #[arg(
        long,
        env = "RECEIPT_POINTS_LOG_FORMAT",
        value_enum,
        value_name = "FORMAT",
        help = "Log output format (pretty or json)"
    )]
    pub log_format: Option<LogFormat>,

    #[arg(
        long,
        env = "RECEIPT_POINTS_SKIP_VALIDATION",
        help = "Store receipts without validating them"
    )]
    pub skip_validation: bool,
}
