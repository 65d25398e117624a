mod config;
mod output;

use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use credcheck::Validator;
use tracing::{debug, info};

use crate::config::{Config, OutputFormat};
use crate::output::Verdict;

/// Sample pair checked by `credcheck demo`
const DEMO_EMAIL: &str = "test@example.com";
const DEMO_PASSWORD: &str = "StrongPass1!";

#[derive(Parser)]
#[command(name = "credcheck")]
#[command(version, about = "Check email format and password strength", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "credcheck.toml")]
    config: PathBuf,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that an email address is well-formed
    Email {
        /// Email address to check
        candidate: String,
    },

    /// Check that a password satisfies every strength rule
    Password {
        /// Password to check (prefer --stdin to keep it out of shell history)
        #[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
        candidate: Option<String>,

        /// Read the password from the first line of standard input
        #[arg(long)]
        stdin: bool,
    },

    /// Check a built-in sample email and password
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = &result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
    }

    ExitCode::from(exit_status(&result))
}

/// 0 when every candidate is valid, 1 when any is invalid, 2 on error
fn exit_status(result: &Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

/// Returns whether every checked candidate was valid
fn run(cli: Cli) -> Result<bool> {
    let config = Config::load(&cli.config)?;

    // A subscriber may already be installed when run() is called more than once
    let _ = tracing_subscriber::fmt()
        .with_max_level(config.logging.max_level()?)
        .with_writer(std::io::stderr)
        .try_init();

    debug!(config = ?cli.config, "configuration loaded");

    let format = cli.format.unwrap_or(config.output.format);
    let color = config.output.color && !cli.no_color;
    if !color {
        colored::control::set_override(false);
    }

    let validator = Validator::new();
    let verdicts = match cli.command {
        Commands::Email { candidate } => vec![Verdict::email(validator.validate_email(&candidate))],
        Commands::Password { candidate, stdin } => {
            let password = match candidate {
                Some(password) => password,
                None if stdin => read_password_line(std::io::stdin().lock())?,
                None => bail!("no password given"),
            };
            vec![Verdict::password(validator.check_password(&password))]
        }
        Commands::Demo => {
            info!("running demo checks");
            vec![
                Verdict::email(validator.validate_email(DEMO_EMAIL)),
                Verdict::password(validator.check_password(DEMO_PASSWORD)),
            ]
        }
    };

    print!("{}", output::render(&verdicts, format, color)?);

    Ok(verdicts.iter().all(|v| v.valid))
}

/// Reads one line, without its line terminator
fn read_password_line(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_read_password_line_strips_terminator() {
        assert_eq!(read_password_line("StrongPass1!\n".as_bytes()).unwrap(), "StrongPass1!");
        assert_eq!(read_password_line("StrongPass1!\r\n".as_bytes()).unwrap(), "StrongPass1!");
        assert_eq!(read_password_line("no newline".as_bytes()).unwrap(), "no newline");
        assert_eq!(read_password_line("".as_bytes()).unwrap(), "");
    }

    #[test]
    fn test_read_password_line_keeps_inner_whitespace() {
        assert_eq!(read_password_line(" Pass word1 \nsecond\n".as_bytes()).unwrap(), " Pass word1 ");
    }

    #[test]
    fn test_parse_password_stdin() {
        let cli = Cli::try_parse_from(["credcheck", "password", "--stdin"]).unwrap();
        assert!(matches!(cli.command, Commands::Password { candidate: None, stdin: true }));
    }

    #[test]
    fn test_password_requires_candidate_or_stdin() {
        assert!(Cli::try_parse_from(["credcheck", "password"]).is_err());
        assert!(Cli::try_parse_from(["credcheck", "password", "x", "--stdin"]).is_err());
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["credcheck", "email", "a@b.co", "--format", "json", "--no-color"])
            .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.no_color);
        assert_eq!(cli.config, PathBuf::from("credcheck.toml"));
    }

    fn parse_with_config(config: &std::path::Path, args: &[&str]) -> Cli {
        let mut argv = vec!["credcheck", "--no-color", "--config"];
        argv.push(config.to_str().unwrap());
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_run_demo_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let cli = parse_with_config(&dir.path().join("credcheck.toml"), &["demo"]);
        let result = run(cli);
        assert!(matches!(result, Ok(true)));
        assert_eq!(exit_status(&result), 0);
    }

    #[test]
    fn test_run_invalid_email_fails_check() {
        let dir = tempfile::tempdir().unwrap();
        let cli = parse_with_config(&dir.path().join("credcheck.toml"), &["email", "1x@a.com"]);
        let result = run(cli);
        assert!(matches!(result, Ok(false)));
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn test_run_weak_password_fails_check() {
        let dir = tempfile::tempdir().unwrap();
        let cli = parse_with_config(
            &dir.path().join("credcheck.toml"),
            &["--format", "json", "password", "weakpass"],
        );
        assert!(matches!(run(cli), Ok(false)));
    }

    #[test]
    fn test_run_bad_config_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"loud\"").unwrap();
        let cli = parse_with_config(file.path(), &["demo"]);
        let result = run(cli);
        assert!(result.is_err());
        assert_eq!(exit_status(&result), 2);
    }

    #[test]
    fn test_run_config_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = parse_with_config(dir.path(), &["demo"]);
        assert_eq!(exit_status(&run(cli)), 2);
    }

    #[test]
    fn test_exit_status_mapping() {
        assert_eq!(exit_status(&Ok(true)), 0);
        assert_eq!(exit_status(&Ok(false)), 1);
        assert_eq!(exit_status(&Err(anyhow::anyhow!("boom"))), 2);
    }

    #[test]
    fn test_demo_pair_is_valid() {
        let validator = Validator::new();
        assert!(validator.validate_email(DEMO_EMAIL));
        assert!(validator.validate_password(DEMO_PASSWORD));
    }
}
