//
//  hub-cli
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands.
//!
//! `hub auth login` trades a username and password (plus a two-factor code
//! when the account requires one) for an OAuth token and saves it. Other
//! commands run the same flow on demand when no token is saved.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::GlobalOptions;
use crate::api::host::DEFAULT_PROTOCOL;
use crate::output::{create_table, OutputFormat};

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in and save an OAuth token for the host
    Login,

    /// Remove the saved token for the host
    Logout,

    /// Show saved hosts
    Status,
}

impl AuthCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login => self.login(global),
            AuthSubcommand::Logout => self.logout(global),
            AuthSubcommand::Status => self.status(global),
        }
    }

    fn login(&self, global: &GlobalOptions) -> Result<()> {
        let store = global.store()?;
        let protocol = global
            .protocol
            .clone()
            .or_else(|| store.config().identity(&global.host()).map(|i| i.protocol))
            .unwrap_or_else(|| DEFAULT_PROTOCOL.to_string());

        let identity = store.login(&global.host(), &protocol)?;
        global.output().write_success(&format!(
            "Logged in to {} as {}",
            identity.host, identity.user
        ));
        Ok(())
    }

    fn logout(&self, global: &GlobalOptions) -> Result<()> {
        let host = global.host();
        let output = global.output();
        if global.store()?.logout(&host)? {
            output.write_success(&format!("Logged out of {host}"));
        } else {
            output.write_info(&format!("Not logged in to {host}"));
        }
        Ok(())
    }

    fn status(&self, global: &GlobalOptions) -> Result<()> {
        let store = global.store()?;
        let config = store.config();

        if global.output().format() == OutputFormat::Json {
            let hosts: Vec<_> = config
                .hosts
                .iter()
                .map(|(host, entry)| {
                    serde_json::json!({
                        "host": host,
                        "user": entry.user,
                        "logged_in": !entry.oauth_token.is_empty(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&hosts)?);
            return Ok(());
        }

        if config.hosts.is_empty() {
            println!("Not logged in to any host. Run 'hub auth login'.");
            return Ok(());
        }

        let mut table = create_table(["Host", "User", "Token"]);
        for (host, entry) in &config.hosts {
            let token = if entry.oauth_token.is_empty() {
                "missing"
            } else {
                "saved"
            };
            table.add_row(vec![host.as_str(), entry.user.as_str(), token]);
        }
        println!("{table}");
        println!("Config: {}", store.path().display());
        Ok(())
    }
}
