// src/cli/commands.rs
use clap::Subcommand;

use crate::cli::handlers::parse_charset;
use crate::generators::CharSetRule;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate {
        /// Required password length (defaults to DEFAULT_PASSWORD_LENGTH or 16)
        #[arg(long, short)]
        length: Option<usize>,

        /// Character set rule as MIN:MAX:CHARS; CHARS may be lower, upper, digits or symbols
        #[arg(long = "charset", value_parser = parse_charset)]
        charsets: Vec<CharSetRule>,
    },

    /// Check a password against character set rules
    Validate {
        /// Password to check
        #[arg(required = true)]
        password: String,

        /// Character set rule as MIN:MAX:CHARS
        #[arg(long = "charset", value_parser = parse_charset)]
        charsets: Vec<CharSetRule>,
    },

    /// Check whether a string is an identifier
    Identifier {
        #[arg(required = true)]
        value: String,
    },

    /// Check whether a string is snake_case
    Snake {
        #[arg(required = true)]
        value: String,
    },

    /// Print the SHA-1 password hash of the given values
    Hash {
        /// Append PASSWORD_SALT to the values
        #[arg(long)]
        salted: bool,

        /// Values hashed in order
        values: Vec<String>,
    },
}
