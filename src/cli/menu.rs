// src/cli/menu.rs
use inquire::{Confirm, Password, Select, Text};
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::cli::handlers::print_strength;
use crate::clipboard;
use crate::core::auth::{AuthProvider, StubAuthProvider};
use crate::core::config::Config;
use crate::generators::password;
use crate::models::GenerationOptions;

pub fn run_cli_menu(config: &Config, should_exit: Arc<AtomicBool>) -> Result<(), Box<dyn Error>> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║          🔐 PASSGEN MANAGER          ║");
    println!("╚══════════════════════════════════════╝");

    let auth_provider = StubAuthProvider::new();
    auth_provider.on_auth_state_changed(&mut |user| match user {
        Some(user) => println!("👤 Signed in as {}", user.email),
        None => println!("👤 Not signed in (password generation works without an account)"),
    });

    loop {
        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        let choice = Select::new(
            "What would you like to do?",
            vec![
                "Generate a password",
                "Check password strength",
                "Sign in",
                "Exit",
            ],
        )
        .prompt()?;

        match choice {
            "Generate a password" => generate_flow(config)?,
            "Check password strength" => score_flow()?,
            "Sign in" => sign_in_flow(&auth_provider)?,
            _ => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn generate_flow(config: &Config) -> Result<(), Box<dyn Error>> {
    let length: usize = Text::new(&format!(
        "Password length ({}-{}):",
        config.min_password_length, config.max_password_length
    ))
    .with_default(&config.default_password_length.to_string())
    .prompt()?
    .parse()
    .map_err(|_| inquire::InquireError::Custom("Invalid number".into()))?;

    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(true)
        .prompt()?;

    let include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(true)
        .prompt()?;

    let include_digits = Confirm::new("Include digits?")
        .with_default(true)
        .prompt()?;

    let include_symbols = Confirm::new("Include symbols?")
        .with_default(true)
        .prompt()?;

    let options = GenerationOptions {
        length: config.clamp_length(length),
        include_uppercase,
        include_lowercase,
        include_digits,
        include_symbols,
    };

    match password::generate_password(&options) {
        Ok(generated) => {
            println!("\nGenerated Password: {}", generated);
            print_strength(&generated);

            let copy = Confirm::new("Copy to clipboard?")
                .with_default(false)
                .prompt()?;

            if copy {
                let clear_after = config.clipboard_clear_secs.map(Duration::from_secs);
                match clipboard::copy_to_clipboard(&generated, clear_after) {
                    Ok(()) => println!("✅ Password copied to clipboard"),
                    Err(e) => println!("❌ {}", e),
                }
            }
        }
        Err(e) => {
            // Recoverable: prompt again with at least one class enabled
            println!("❌ {}", e);
        }
    }

    Ok(())
}

fn score_flow() -> Result<(), Box<dyn Error>> {
    let password = Text::new("Password to check:").prompt()?;
    print_strength(&password);
    Ok(())
}

fn sign_in_flow(provider: &impl AuthProvider) -> Result<(), Box<dyn Error>> {
    let email = Text::new("Email address:").prompt()?;
    let password = Password::new("Password:")
        .with_display_mode(inquire::PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()?;

    match provider.sign_in(&email, &password) {
        Ok(user) => println!("✅ Signed in as {}", user.email),
        Err(e) => {
            println!("❌ Sign-in failed: {}", e);
            println!("Password generation remains fully available without an account.");
        }
    }

    Ok(())
}
