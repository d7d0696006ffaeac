//
//  hub-cli
//  cli/release.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Release commands.
//!
//! `hub release create --attach FILE` creates the release first and then
//! uploads each file to the release's upload URL.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use super::GlobalOptions;
use crate::api::resources::{Release, ReleaseParams};
use crate::output::{create_table, print_field, print_header, TableOutput};

/// Manage releases
#[derive(Args, Debug)]
pub struct ReleaseCommand {
    #[command(subcommand)]
    pub command: ReleaseSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ReleaseSubcommand {
    /// List releases
    #[command(visible_alias = "ls")]
    List,

    /// Create a release
    Create(CreateArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Tag to create the release for
    pub tag: String,

    /// Release title
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Release notes
    #[arg(long, short = 'm')]
    pub message: Option<String>,

    /// Commit-ish the tag is created from when it does not exist
    #[arg(long, short = 't')]
    pub target: Option<String>,

    /// Save as a draft
    #[arg(long, short = 'd')]
    pub draft: bool,

    /// Mark as a prerelease
    #[arg(long, short = 'p')]
    pub prerelease: bool,

    /// Files to upload as release assets
    #[arg(long, short = 'a')]
    pub attach: Vec<PathBuf>,
}

impl TableOutput for Release {
    fn print_table(&self, color: bool) {
        print_header(self.name.as_deref().unwrap_or(&self.tag_name));
        print_field("Tag", &self.tag_name, color);
        if self.draft {
            print_field("Draft", "yes", color);
        }
        if self.prerelease {
            print_field("Prerelease", "yes", color);
        }
        for asset in &self.assets {
            print_field("Asset", &format!("{} ({} bytes)", asset.name, asset.size), color);
        }
        print_field("URL", &self.html_url, color);
    }
}

impl TableOutput for [Release] {
    fn print_table(&self, _color: bool) {
        if self.is_empty() {
            println!("No releases");
            return;
        }

        let mut table = create_table(["Tag", "Name", "Type", "Published"]);
        for release in self {
            let kind = if release.draft {
                "draft"
            } else if release.prerelease {
                "prerelease"
            } else {
                ""
            };
            let published = release
                .published_at
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            table.add_row(vec![
                release.tag_name.clone(),
                release.name.clone().unwrap_or_default(),
                kind.to_string(),
                published,
            ]);
        }
        println!("{table}");
    }
}

/// Content type sent for an asset, from its file extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_lowercase();

    if name.ends_with(".tar.gz") || name.ends_with(".tgz") || name.ends_with(".gz") {
        return "application/gzip";
    }
    match path.extension().and_then(|e| e.to_str()).map(str::to_lowercase).as_deref() {
        Some("zip") => "application/zip",
        Some("tar") => "application/x-tar",
        Some("bz2") => "application/x-bzip2",
        Some("xz") => "application/x-xz",
        Some("json") => "application/json",
        Some("txt") | Some("md") => "text/plain",
        Some("deb") => "application/vnd.debian.binary-package",
        Some("rpm") => "application/x-rpm",
        _ => "application/octet-stream",
    }
}

impl ReleaseCommand {
    pub fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ReleaseSubcommand::List => self.list(global),
            ReleaseSubcommand::Create(args) => self.create(args, global),
        }
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let project = global.project()?;
        let releases = global.client()?.releases(&project)?;
        global.output().write(releases.as_slice())
    }

    fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let project = global.project()?;
        let mut client = global.client()?;

        let files = args
            .attach
            .iter()
            .map(|path| {
                File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))
                    .map(|file| (path, file))
            })
            .collect::<Result<Vec<_>>>()?;

        let params = ReleaseParams {
            tag_name: args.tag.clone(),
            target_commitish: args.target.clone(),
            name: args.name.clone(),
            body: args.message.clone(),
            draft: args.draft,
            prerelease: args.prerelease,
        };
        let mut release = client.create_release(&project, &params)?;
        let output = global.output();
        output.write_success(&format!("Created release {}", release.tag_name));

        for (path, file) in &files {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .with_context(|| format!("Invalid asset file name {}", path.display()))?;
            let url = release.upload_url_for(name, None)?;
            let asset = client.upload_release_asset(&url, file, content_type_for(path))?;
            output.write_success(&format!("Uploaded {}", asset.name));
            release.assets.push(asset);
        }

        output.write(&release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for(Path::new("hub-linux.tar.gz")), "application/gzip");
        assert_eq!(content_type_for(Path::new("dist/hub.ZIP")), "application/zip");
        assert_eq!(content_type_for(Path::new("NOTES.md")), "text/plain");
        assert_eq!(content_type_for(Path::new("hub")), "application/octet-stream");
    }
}
