//
//  hub-cli
//  interactive/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive terminal input.
//!
//! [`Prompter`] is the seam the credential store asks for usernames,
//! passwords and two-factor codes through. [`TerminalPrompter`] answers from
//! the terminal; tests substitute scripted answers.

pub mod prompt;

pub use prompt::{Prompter, TerminalPrompter};
