//! rconkit CLI Client
//!
//! Runs a single command on an RCON server and prints the response.

use clap::Parser;
use rconkit::{client, Config};
use tracing_subscriber::{fmt, EnvFilter};

/// rconkit CLI
#[derive(Parser, Debug)]
#[command(name = "rconkit-cli")]
#[command(about = "Execute a command on a remote RCON server")]
#[command(version)]
struct Args {
    /// Server address (host:port)
    #[arg(short = 'H', long)]
    host: String,

    /// RCON password
    #[arg(short, long)]
    password: String,

    /// Command to execute
    #[arg(short, long)]
    command: String,

    /// TCP connect timeout in milliseconds
    #[arg(long, default_value = "5000")]
    timeout_ms: u64,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,rconkit=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .address(&args.host)
        .password(&args.password)
        .command(&args.command)
        .connect_timeout_ms(args.timeout_ms)
        .build();

    match client::run(&config) {
        Ok(body) => println!("Response: {}", body),
        Err(e) if e.is_auth_failure() => {
            tracing::error!("Authentication failed for {}: check the password", args.host);
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}
