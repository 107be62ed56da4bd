// src/lib.rs
//! String helpers: a quota-driven password generator, identifier and
//! snake-case format checks, and a SHA-1 password hash.

pub mod cli;
pub mod core;
pub mod crypto;
pub mod generators;
pub mod utils;

pub use crate::core::config::Config;
pub use crate::crypto::password_hash;
pub use crate::generators::{CharSetRule, PasswordGenerator, PasswordGeneratorBuilder, PolicyError};
pub use crate::utils::{is_identifier, is_snake};
