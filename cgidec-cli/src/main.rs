//! cgidec CLI tool
//!
//! Decodes hex-encoded 4G and 5G CGI strings into their decimal components.
//! With `--lte`/`--nr` it runs a one-shot decode; otherwise it starts an
//! interactive session.

mod command;
mod export;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;

use cgidec_common::{init_logging, load_config, CgidecConfig, LogLevel};

use command::{parse_command, CmdResponse, Command, DecoderSession};
use export::write_report;

#[derive(Parser, Debug)]
#[command(name = "cgidec")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 4G CGI hex string to decode (one-shot mode)
    #[arg(long = "lte", value_name = "HEX")]
    pub lte: Option<String>,

    /// 5G CGI hex string to decode (one-shot mode)
    #[arg(long = "nr", value_name = "HEX")]
    pub nr: Option<String>,

    /// Export the breakdown to FILE after a one-shot decode
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// Path to the configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<String>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config_file {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {path}"))?,
        None => CgidecConfig::default(),
    };

    init_logging(args.log_level.unwrap_or(config.log_level));

    if args.lte.is_some() || args.nr.is_some() {
        one_shot(&args)
    } else {
        interactive_mode(&config)
    }
}

/// Decodes the CGIs given on the command line, prints the breakdowns, and
/// optionally exports them.
fn one_shot(args: &Args) -> Result<()> {
    let mut session = DecoderSession::new();

    if let Some(hex) = &args.lte {
        let response = session.decode_4g(hex);
        if response.is_error {
            bail!("{}", response.content);
        }
        println!("{}", response.content);
    }

    if let Some(hex) = &args.nr {
        let response = session.decode_5g(hex);
        if response.is_error {
            bail!("{}", response.content);
        }
        println!("{}", response.content);
    }

    if let Some(path) = &args.output {
        write_report(path, &session.report())?;
        println!("Exported to {path}");
    }

    Ok(())
}

fn interactive_mode(config: &CgidecConfig) -> Result<()> {
    println!("CGI Decoder HEX to DEC");
    println!("Type 'help' for available commands, 'exit' to quit.");
    println!("{}", "-".repeat(60));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = DecoderSession::new();

    loop {
        print!("\x1b[1mcgi> \x1b[0m");
        stdout.flush()?;

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                match parse_command(input) {
                    Ok(Command::Exit) => break,
                    Ok(Command::Help) => print_help(),
                    Ok(cmd) => dispatch(&mut session, cmd, config),
                    Err(e) => eprintln!("ERROR: {}", e),
                }
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Runs one parsed command against the session.
fn dispatch(session: &mut DecoderSession, cmd: Command, config: &CgidecConfig) {
    let response = match cmd {
        Command::Decode4g { hex } => session.decode_4g(&hex),
        Command::Decode5g { hex } => session.decode_5g(&hex),
        Command::DecodeBoth { hex_4g, hex_5g } => session.decode_both(&hex_4g, &hex_5g),
        Command::Show => session.show(),
        Command::Clear => {
            session.clear();
            CmdResponse::success("Cleared.")
        }
        Command::Export { path } => export_session(session, path, config),
        // Handled by the caller
        Command::Help | Command::Exit => return,
    };

    if response.is_error {
        eprintln!("ERROR: {}", response.content);
    } else if !response.content.is_empty() {
        println!("{}", response.content);
    }
}

/// Exports the session report, falling back to the configured default path.
fn export_session(
    session: &DecoderSession,
    path: Option<String>,
    config: &CgidecConfig,
) -> CmdResponse {
    if session.is_empty() {
        return CmdResponse::error("Nothing to export; run a decode first.");
    }

    let path = match path.or_else(|| config.default_export.clone()) {
        Some(path) => path,
        None => {
            return CmdResponse::error(
                "export requires a file path (no default_export configured)",
            )
        }
    };

    match write_report(&path, &session.report()) {
        Ok(()) => CmdResponse::success(format!("Exported to {path}")),
        Err(e) => CmdResponse::error(format!("{e:#}")),
    }
}

fn print_help() {
    println!("Available commands:");
    println!("  4g <hex>              decode a 4G CGI");
    println!("  5g <hex>              decode a 5G CGI");
    println!("  decode <4g> <5g>      decode both at once");
    println!("  show                  reprint the stored breakdowns");
    println!("  clear                 clear the stored breakdowns");
    println!("  export [path]         write the breakdowns to a file");
    println!("  help, exit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parsing() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_lte_flag() {
        let args = Args::parse_from(["cgidec", "--lte", "310150ABC0134F201"]);
        assert_eq!(args.lte, Some("310150ABC0134F201".to_string()));
        assert!(args.nr.is_none());
    }

    #[test]
    fn test_nr_and_output_flags() {
        let args = Args::parse_from(["cgidec", "--nr", "310150ABCDE123456789", "-o", "out.txt"]);
        assert_eq!(args.nr, Some("310150ABCDE123456789".to_string()));
        assert_eq!(args.output, Some("out.txt".to_string()));
    }

    #[test]
    fn test_config_flag() {
        let args = Args::parse_from(["cgidec", "-c", "cgidec.yaml"]);
        assert_eq!(args.config_file, Some("cgidec.yaml".to_string()));
    }

    #[test]
    fn test_log_level_flag() {
        let args = Args::parse_from(["cgidec", "--log-level", "debug"]);
        assert_eq!(args.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn test_one_shot_decode_and_export() {
        let path = std::env::temp_dir().join("cgidec-test-oneshot.txt");
        let args = Args::parse_from([
            "cgidec",
            "--lte",
            "310150ABC0134F201",
            "--nr",
            "310150ABCDE123456789",
            "-o",
            path.to_str().unwrap(),
        ]);
        one_shot(&args).unwrap();

        let report = std::fs::read_to_string(&path).unwrap();
        assert!(report.contains("4G CGI (Dec): 3101502748020247041 (Digits: 19)"));
        assert!(report.contains("5G CGI (Dec): 3103101570371004886718345 (Digits: 25)"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_one_shot_invalid_hex_fails() {
        let args = Args::parse_from(["cgidec", "--lte", "31015XYZT12345678"]);
        let result = one_shot(&args);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid hex digit"));
    }

    #[test]
    fn test_export_session_empty() {
        let session = DecoderSession::new();
        let config = CgidecConfig::default();
        let response = export_session(&session, Some("out.txt".to_string()), &config);
        assert!(response.is_error);
        assert!(response.content.contains("Nothing to export"));
    }

    #[test]
    fn test_export_session_no_path_no_default() {
        let mut session = DecoderSession::new();
        session.decode_4g("310150ABC0134F201");
        let config = CgidecConfig::default();
        let response = export_session(&session, None, &config);
        assert!(response.is_error);
        assert!(response.content.contains("requires a file path"));
    }

    #[test]
    fn test_export_session_default_path_fallback() {
        let path = std::env::temp_dir().join("cgidec-test-default-export.txt");
        let mut session = DecoderSession::new();
        session.decode_4g("310150ABC0134F201");
        let config = CgidecConfig {
            default_export: Some(path.to_str().unwrap().to_string()),
            ..Default::default()
        };

        let response = export_session(&session, None, &config);
        assert!(!response.is_error);
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("4G CGI Breakdown:"));

        std::fs::remove_file(&path).ok();
    }
}
