//! NetBIOS node status query CLI

use clap::Parser;
use nbstat::client::{ClientConfig, NodeStatusClient};
use nbstat::report::{render, ReportFormat};
use nbstat::{describe, Error};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "nbstat")]
#[command(about = "Query the NetBIOS name table and MAC address of a host", long_about = None)]
struct Args {
    /// Numeric IPv4 address of the target
    target: String,

    /// Destination UDP port
    #[arg(short = 'p', long, default_value = "137")]
    port: u16,

    /// Response timeout in milliseconds (1-10000, otherwise 3000)
    #[arg(short = 't', long, default_value = "3000", allow_negative_numbers = true)]
    timeout: i64,

    /// Log level
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: String,

    /// Output format: nbtstat or nmblookup
    #[arg(short = 'f', long, default_value = "nbtstat")]
    format: ReportFormat,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::default()
        .with_port(args.port)
        .with_timeout_ms(args.timeout);
    tracing::debug!("config: {:?}", config);

    let mut client = NodeStatusClient::with_config(config);
    match client.query(&args.target).await {
        Ok(status) => {
            print!("{}", render(&status, args.format));
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn report_error(e: &Error) {
    let progname = std::env::args()
        .next()
        .unwrap_or_else(|| "nbstat".to_string());
    let code = e.code();
    eprintln!("{}: error! {} (0x{:04X})", progname, describe(code), code);
    tracing::debug!("{}", e);
}
