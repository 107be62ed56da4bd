// src/cli/handlers.rs
use serde_json::{json, Value};
use thiserror::Error;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::crypto;
use crate::generators::{
    CharSetRule, PasswordGenerator, CHARS_DIGITS, CHARS_LOWER, CHARS_SYMBOLS, CHARS_UPPER,
};
use crate::utils;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid charset '{0}': expected MIN:MAX:CHARS")]
    CharsetFormat(String),

    #[error("Invalid charset bound '{0}': {1}")]
    CharsetBound(String, std::num::ParseIntError),
}

/// Result of one command, rendered as text or JSON by the caller.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub passed: bool,
    pub text: String,
    pub json: Value,
}

/// Parse `MIN:MAX:CHARS`; CHARS may name a preset class.
pub fn parse_charset(spec: &str) -> Result<CharSetRule, CliError> {
    let mut parts = spec.splitn(3, ':');
    let (min, max, chars) = match (parts.next(), parts.next(), parts.next()) {
        (Some(min), Some(max), Some(chars)) => (min, max, chars),
        _ => return Err(CliError::CharsetFormat(spec.to_string())),
    };

    let min = min
        .trim()
        .parse()
        .map_err(|e| CliError::CharsetBound(min.to_string(), e))?;
    let max = max
        .trim()
        .parse()
        .map_err(|e| CliError::CharsetBound(max.to_string(), e))?;

    let chars = match chars {
        "lower" => CHARS_LOWER,
        "upper" => CHARS_UPPER,
        "digits" => CHARS_DIGITS,
        "symbols" => CHARS_SYMBOLS,
        literal => literal,
    };

    Ok(CharSetRule::new(min, max, chars))
}

pub fn run(args: &Args, config: &Config) -> Outcome {
    log::debug!("Dispatching command (json output: {})", args.json);
    match &args.command {
        CliCommand::Generate { length, charsets } => {
            handle_generate(length.unwrap_or(config.default_password_length), charsets)
        }
        CliCommand::Validate { password, charsets } => handle_validate(password, charsets),
        CliCommand::Identifier { value } => handle_identifier(value),
        CliCommand::Snake { value } => handle_snake(value),
        CliCommand::Hash { salted, values } => handle_hash(values, *salted, config),
    }
}

pub fn handle_generate(length: usize, charsets: &[CharSetRule]) -> Outcome {
    let generator = PasswordGenerator::new(charsets.to_vec());
    let password = generator.generate(length);
    let actual = password.chars().count();

    Outcome {
        passed: true,
        text: password.clone(),
        json: json!({
            "success": true,
            "password": password,
            "requested_length": length,
            "length": actual,
        }),
    }
}

pub fn handle_validate(password: &str, charsets: &[CharSetRule]) -> Outcome {
    let generator = PasswordGenerator::new(charsets.to_vec());
    match generator.validate(password) {
        Ok(()) => Outcome {
            passed: true,
            text: "✅ Password satisfies all character set rules".to_string(),
            json: json!({ "success": true, "valid": true }),
        },
        Err(e) => Outcome {
            passed: false,
            text: format!("❌ {}", e),
            json: json!({ "success": true, "valid": false, "error": e.to_string() }),
        },
    }
}

pub fn handle_identifier(value: &str) -> Outcome {
    predicate_outcome(value, "an identifier", utils::is_identifier(value))
}

pub fn handle_snake(value: &str) -> Outcome {
    predicate_outcome(value, "snake_case", utils::is_snake(value))
}

fn predicate_outcome(value: &str, what: &str, matched: bool) -> Outcome {
    let text = if matched {
        format!("✅ '{}' is {}", value, what)
    } else {
        format!("❌ '{}' is not {}", value, what)
    };

    Outcome {
        passed: matched,
        text,
        json: json!({ "success": true, "value": value, "valid": matched }),
    }
}

pub fn handle_hash(values: &[String], salted: bool, config: &Config) -> Outcome {
    let hash = if salted {
        crypto::password_hash(values.iter().chain(std::iter::once(&config.password_salt)))
    } else {
        crypto::password_hash(values)
    };

    Outcome {
        passed: true,
        text: hash.clone(),
        json: json!({ "success": true, "hash": hash, "salted": salted }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_presets_and_literals() {
        let rule = parse_charset("1:4:digits").unwrap();
        assert_eq!((rule.min(), rule.max()), (1, 4));
        assert_eq!(rule.charset(), CHARS_DIGITS);

        // colons after the second separator belong to the set
        let rule = parse_charset("0:0:a:b").unwrap();
        assert_eq!(rule.charset(), "a:b");
    }

    #[test]
    fn rejects_bad_specs() {
        assert!(matches!(parse_charset("1:2"), Err(CliError::CharsetFormat(_))));
        assert!(matches!(parse_charset("one:2:abc"), Err(CliError::CharsetBound(_, _))));
        assert!(matches!(parse_charset("1:-2:abc"), Err(CliError::CharsetBound(_, _))));
    }

    #[test]
    fn generate_reports_shortfall_in_json() {
        let rules = vec![CharSetRule::new(0, 3, "ab")];
        let outcome = handle_generate(10, &rules);
        assert!(outcome.passed);
        assert_eq!(outcome.json["requested_length"], 10);
        assert_eq!(outcome.json["length"], 3);
        assert_eq!(outcome.text.chars().count(), 3);
    }

    #[test]
    fn validate_outcomes() {
        let rules = vec![parse_charset("2:0:digits").unwrap()];
        assert!(handle_validate("a12", &rules).passed);

        let failed = handle_validate("a1", &rules);
        assert!(!failed.passed);
        assert_eq!(failed.json["valid"], false);
        assert_eq!(failed.json["error"], "too few of 0123456789 (min 2, you have 1)");
    }

    #[test]
    fn predicates() {
        assert!(handle_identifier("a1_b2").passed);
        assert!(!handle_identifier("_abc").passed);
        assert!(handle_snake("foo_bar1").passed);
        assert_eq!(handle_snake("Foo").json["valid"], false);
    }

    #[test]
    fn salt_is_only_used_when_asked() {
        let config = Config {
            password_salt: "pepper".to_string(),
            ..Config::default()
        };
        let values = vec!["hunter2".to_string()];

        assert_eq!(handle_hash(&values, false, &config).text, crypto::password_hash(["hunter2"]));
        assert_eq!(
            handle_hash(&values, true, &config).text,
            "68B2B23D7A7B0908DF8C018352779B6A0844B6EE"
        );
    }
}
