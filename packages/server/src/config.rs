//! Server configuration (command-line flags).

use std::time::Duration;

use clap::Parser;

/// iine notification server
#[derive(Debug, Clone, Parser)]
#[command(name = "iine-server", version, about = "Post/like server with live like notifications")]
pub struct Config {
    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Interval between keep-alive comments on notification streams (seconds)
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u64).range(1..))]
    pub keep_alive_secs: u64,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// `host:port` to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn keep_alive(&self) -> Duration {
        Duration::from_secs(self.keep_alive_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        // テスト項目: 引数なしの場合はデフォルト値が使われる
        // when (操作):
        let config = Config::try_parse_from(["iine-server"]).unwrap();

        // then (期待する結果):
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.keep_alive(), Duration::from_secs(15));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_config_overrides() {
        // テスト項目: 引数で値を上書きできる
        // when (操作):
        let config = Config::try_parse_from([
            "iine-server",
            "--host",
            "0.0.0.0",
            "-p",
            "3000",
            "--keep-alive-secs",
            "5",
        ])
        .unwrap();

        // then (期待する結果):
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.keep_alive(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_rejects_zero_keep_alive() {
        // テスト項目: keep-alive 間隔 0 秒は受け付けない
        // when (操作):
        let result = Config::try_parse_from(["iine-server", "--keep-alive-secs", "0"]);

        // then (期待する結果):
        assert!(result.is_err());
    }
}
