// src/cli/handlers.rs
use std::time::Duration;

use anyhow::{bail, Result};
use console::style;

use crate::cli::CliCommand;
use crate::clipboard;
use crate::core::config::Config;
use crate::generators::{password, strength};
use crate::models::{GenerationOptions, StrengthLabel};

// Handlers for one-shot CLI commands
pub fn run_command(command: CliCommand, config: &Config) -> Result<()> {
    match command {
        CliCommand::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_digits,
            no_symbols,
            count,
            copy,
        } => {
            if length < config.min_password_length || length > config.max_password_length {
                bail!(
                    "Password length must be between {} and {} characters",
                    config.min_password_length,
                    config.max_password_length
                );
            }

            let options = GenerationOptions {
                length,
                include_uppercase: !no_uppercase,
                include_lowercase: !no_lowercase,
                include_digits: !no_digits,
                include_symbols: !no_symbols,
            };

            let mut last = String::new();
            for _ in 0..count.max(1) {
                last = password::generate_password(&options)?;
                let report = strength::score_password(&last);
                println!(
                    "{}  {}",
                    style(&last).bold(),
                    style(format!("[{}/7 {}]", report.score, report.label)).dim()
                );
            }

            if copy {
                let clear_after = config.clipboard_clear_secs.map(Duration::from_secs);
                match clipboard::copy_to_clipboard(&last, clear_after) {
                    Ok(()) => println!("{}", style("Password copied to clipboard").green()),
                    Err(e) => eprintln!("{}", style(format!("Clipboard error: {}", e)).red()),
                }
            }

            Ok(())
        }

        CliCommand::Score { password } => {
            print_strength(&password);
            Ok(())
        }
    }
}

/// Print the score, label and checklist for a password.
pub fn print_strength(password: &str) {
    let report = strength::score_password(password);

    if report.label == StrengthLabel::None {
        println!("Score: 0/7 (empty password)");
        return;
    }

    println!(
        "Password Strength: {}  (Score: {}/7)",
        match report.label {
            StrengthLabel::Weak => style(report.label.to_string()).red(),
            StrengthLabel::Fair => style(report.label.to_string()).yellow(),
            StrengthLabel::Good => style(report.label.to_string()).blue(),
            _ => style(report.label.to_string()).green(),
        },
        report.score
    );

    let checks = strength::run_checks(password);
    let mark = |passed: bool| if passed { style("✓").green() } else { style("✗").dim() };
    println!("  {} 8+ characters", mark(checks.min_length));
    println!("  {} Lowercase", mark(checks.lowercase));
    println!("  {} Uppercase", mark(checks.uppercase));
    println!("  {} Digits", mark(checks.digits));
    println!("  {} Symbols", mark(checks.symbols));
    println!("  {} 12+ characters", mark(checks.length_12));
    println!("  {} 16+ characters", mark(checks.length_16));
}
