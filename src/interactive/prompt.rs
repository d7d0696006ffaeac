//
//  hub-cli
//  interactive/prompt.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive Prompts Module
//!
//! Wraps the `dialoguer` crate for the few questions the CLI asks: a
//! username, a masked password, a two-factor code, and optional free text.
//!
//! # Example
//!
//! ```no_run
//! use hub_cli::interactive::prompt::{prompt_input, prompt_password};
//!
//! let username = prompt_input("github.com username").unwrap();
//! let password = prompt_password("github.com password for octocat (never stored)").unwrap();
//! ```

use anyhow::Result;
use dialoguer::{Input, Password};

/// Questions asked while obtaining a token for a host.
pub trait Prompter {
    /// Asks for the login to use on `host`.
    fn username(&self, host: &str) -> Result<String>;

    /// Asks for `user`'s password on `host`. The answer is never stored.
    fn password(&self, host: &str, user: &str) -> Result<String>;

    /// Asks for a two-factor authentication code.
    fn two_factor_code(&self) -> Result<String>;
}

/// Prompts on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn username(&self, host: &str) -> Result<String> {
        prompt_input(&format!("{host} username"))
    }

    fn password(&self, host: &str, user: &str) -> Result<String> {
        prompt_password(&format!("{host} password for {user} (never stored)"))
    }

    fn two_factor_code(&self) -> Result<String> {
        prompt_input("two-factor authentication code")
    }
}

/// Prompts for a single line of text.
pub fn prompt_input(message: &str) -> Result<String> {
    let input: String = Input::new().with_prompt(message).interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompts for masked input.
pub fn prompt_password(message: &str) -> Result<String> {
    let password = Password::new().with_prompt(message).interact()?;
    Ok(password)
}
