//
//  hub-cli
//  cli/version.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Args;

use super::GlobalOptions;
use crate::api::{Client, HostIdentity};

/// Print version information
#[derive(Args, Debug)]
pub struct VersionCommand {
    /// Also look up the newest released version
    #[arg(long)]
    pub check: bool,
}

impl VersionCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        println!("hub version {}", crate::VERSION);

        if self.check {
            let mut identity = HostIdentity::new(global.host());
            if let Some(protocol) = &global.protocol {
                identity.protocol = protocol.clone();
            }
            let latest = Client::with_host(identity).latest_tag_name()?;
            let latest_version = latest.trim_start_matches('v');
            if latest_version == crate::VERSION {
                println!("hub is up to date");
            } else {
                println!("latest release: {latest}");
            }
        }
        Ok(())
    }
}
