//
//  hub-cli
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Args;

use super::GlobalOptions;
use crate::api::resources::User;
use crate::output::{print_field, TableOutput};

/// Show the authenticated user
#[derive(Args, Debug)]
pub struct UserCommand;

impl TableOutput for User {
    fn print_table(&self, color: bool) {
        print_field("Login", &self.login, color);
        if let Some(name) = &self.name {
            print_field("Name", name, color);
        }
        if let Some(email) = &self.email {
            print_field("Email", email, color);
        }
        if let Some(url) = &self.html_url {
            print_field("URL", url, color);
        }
    }
}

impl UserCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        let user = global.client()?.current_user()?;
        global.output().write(&user)
    }
}
