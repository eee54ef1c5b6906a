//! CLI argument definitions
//!
//! The target year plus optional overrides, and config merging logic.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "aocfetch")]
#[command(about = "Download Advent of Code puzzle inputs for a year", version)]
pub(crate) struct Cli {
    /// Event year to download inputs for (e.g. 2019)
    #[arg(value_name = "YEAR")]
    pub(crate) year: i32,

    /// File whose first line is the session cookie
    #[arg(long, value_name = "PATH", conflicts_with = "account")]
    pub(crate) session_file: Option<PathBuf>,

    /// Use a named session cookie from the [accounts] table of the config file
    #[arg(long, value_name = "LABEL")]
    pub(crate) account: Option<String>,

    /// Directory to write input_DD files into (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub(crate) output_dir: Option<PathBuf>,

    /// Timezone used to decide which days are released ("local", "UTC", "America/New_York")
    #[arg(long, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Event host to download from
    #[arg(long, value_name = "URL")]
    pub(crate) base_url: Option<String>,

    /// Value of the User-Agent header
    #[arg(long, value_name = "UA")]
    pub(crate) user_agent: Option<String>,

    /// Retry a day this many times on network or server errors
    #[arg(long, value_name = "N")]
    pub(crate) retries: Option<usize>,

    /// Enable debug output on stderr
    #[arg(short, long)]
    pub(crate) verbose: bool,

    /// Do not print progress lines
    #[arg(short, long)]
    pub(crate) quiet: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.verbose && config.verbose {
            self.verbose = true;
        }

        // A credential chosen on the command line overrides both config keys
        if self.session_file.is_none() && self.account.is_none() {
            self.account = config.account.clone();
            if self.account.is_none() {
                self.session_file = config.session_file.clone();
            }
        }

        if self.output_dir.is_none() {
            self.output_dir = config.output_dir.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.base_url.is_none() {
            self.base_url = config.base_url.clone();
        }
        if self.user_agent.is_none() {
            self.user_agent = config.user_agent.clone();
        }
        if self.retries.is_none() {
            self.retries = config.retries;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("aocfetch").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn year_is_required() {
        assert!(Cli::try_parse_from(["aocfetch"]).is_err());
    }

    #[test]
    fn year_must_be_integer() {
        assert!(Cli::try_parse_from(["aocfetch", "twenty"]).is_err());
    }

    #[test]
    fn bare_year() {
        let cli = parse(&["2019"]);
        assert_eq!(cli.year, 2019);
        assert!(cli.session_file.is_none());
        assert!(cli.output_dir.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn session_file_and_account_conflict() {
        let result = Cli::try_parse_from([
            "aocfetch",
            "2019",
            "--session-file",
            "cookie",
            "--account",
            "main",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn config_fills_unset_values() {
        let config = Config {
            output_dir: Some(PathBuf::from("inputs")),
            timezone: Some("UTC".to_string()),
            retries: Some(3),
            verbose: true,
            session_file: Some(PathBuf::from("/etc/cookie")),
            ..Config::default()
        };
        let cli = parse(&["2019", "-o", "here"]).with_config(&config);
        assert_eq!(cli.output_dir, Some(PathBuf::from("here")));
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert_eq!(cli.retries, Some(3));
        assert!(cli.verbose);
        assert_eq!(cli.session_file, Some(PathBuf::from("/etc/cookie")));
    }

    #[test]
    fn config_account_beats_config_session_file() {
        let config = Config {
            account: Some("alt".to_string()),
            session_file: Some(PathBuf::from("/etc/cookie")),
            ..Config::default()
        };
        let cli = parse(&["2019"]).with_config(&config);
        assert_eq!(cli.account.as_deref(), Some("alt"));
        assert!(cli.session_file.is_none());
    }

    #[test]
    fn cli_session_file_beats_config_account() {
        let config = Config {
            account: Some("alt".to_string()),
            ..Config::default()
        };
        let cli = parse(&["2019", "--session-file", "cookie"]).with_config(&config);
        assert!(cli.account.is_none());
        assert_eq!(cli.session_file, Some(PathBuf::from("cookie")));
    }
}
