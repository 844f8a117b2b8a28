use anyhow::Result;
use clap::Parser;
use log::{debug, info, LevelFilter};
use std::sync::Arc;
use user_api::{start_server, MockUserStore, ServerConfig, API_BASE_PATH};

#[derive(Parser)]
#[command(about = "Mock users REST API with generated OpenAPI documentation")]
struct Args {
    /// Address to bind
    #[arg(short = 'e', long, default_value = "0.0.0.0")]
    host: String,

    /// Port
    #[arg(short = 'p', long, default_value = "3000")]
    port: u16,

    /// Log level
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = parse_log_level(&args.log_level);
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    debug!("Log level: {log_level}");

    let user_store = Arc::new(MockUserStore::new());
    info!(
        "Serving {} mock users under {API_BASE_PATH}",
        user_store.get_users().len()
    );

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };
    start_server(config, user_store).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["user-api"]);
        assert_eq!(args.host, "0.0.0.0");
        assert_eq!(args.port, 3000);
        assert_eq!(parse_log_level(&args.log_level), LevelFilter::Info);
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        assert_eq!(parse_log_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_log_level("verbose"), LevelFilter::Info);
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["user-api", "-e", "127.0.0.1", "-p", "8080", "-l", "trace"]);
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 8080);
        assert_eq!(parse_log_level(&args.log_level), LevelFilter::Trace);
    }
}
