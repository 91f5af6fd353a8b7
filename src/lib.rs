//! Pref AI Library
//!
//! 47都道府県の伝統文化・ローカルフード相談CLIのコアロジック

pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod interactive;
pub mod persona;
pub mod prefecture;
pub mod prompts;

pub use error::{PrefAiError, Result};
pub use persona::Persona;
pub use prefecture::{canonical, is_valid, normalize, PREFECTURES};
