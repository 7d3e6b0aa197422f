//! Command-line arguments for the server binary.

use clap::Parser;

/// Minimal in-memory URL shortener.
///
/// Flags take precedence over the matching environment variables.
#[derive(Debug, Default, Parser)]
#[command(name = "shortener")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Address to listen on, e.g. `0.0.0.0:8080` (overrides `LISTEN`)
    #[arg(short, long)]
    pub listen: Option<String>,

    /// Log output format: `text` or `json` (overrides `LOG_FORMAT`)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["shortener"]).unwrap();
        assert!(cli.listen.is_none());
        assert!(cli.log_format.is_none());
    }

    #[test]
    fn test_all_arguments() {
        let cli = Cli::try_parse_from([
            "shortener",
            "--listen",
            "127.0.0.1:9000",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.listen.as_deref(), Some("127.0.0.1:9000"));
        assert_eq!(cli.log_format.as_deref(), Some("json"));
    }

    #[test]
    fn test_short_listen_flag() {
        let cli = Cli::try_parse_from(["shortener", "-l", "[::1]:8080"]).unwrap();
        assert_eq!(cli.listen.as_deref(), Some("[::1]:8080"));
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(Cli::try_parse_from(["shortener", "--database-url", "x"]).is_err());
    }
}
