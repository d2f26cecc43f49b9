mod api;
mod core;
#[cfg(test)]
mod test_support;
mod tui;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "hrchat", about = "Terminal chat client for the HR assistant")]
struct Args {
    /// Base URL of the HR assistant server
    #[arg(short, long)]
    server: Option<String>,

    /// Email identifying you to the server
    #[arg(short, long)]
    email: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to hrchat.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("hrchat.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = match crate::core::config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            log::warn!("Config load failed ({e}), falling back to defaults");
            crate::core::config::HrChatConfig::default()
        }
    };
    let resolved =
        crate::core::config::resolve(&config, args.server.as_deref(), args.email.as_deref());

    log::info!(
        "hrchat starting up: server={}, user_email={}",
        resolved.base_url,
        resolved.user_email
    );

    tui::run(resolved)
}
