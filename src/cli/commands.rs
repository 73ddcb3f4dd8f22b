// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate {
        /// Password length
        #[arg(long, short, default_value_t = 16)]
        length: usize,

        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Exclude digits
        #[arg(long)]
        no_digits: bool,

        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,

        /// Number of passwords to generate
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,

        /// Copy the (last) generated password to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Score a password and show the strength checklist
    Score {
        /// Password to score
        #[arg(required = true)]
        password: String,
    },
}
