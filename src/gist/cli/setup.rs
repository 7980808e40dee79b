use clap::{Args, Parser, Subcommand};
use gist::config::GistConfig;
use gist::model::{OverrideNames, Visibility};

#[derive(Parser, Debug)]
#[command(name = "gist", bin_name = "gist", version)]
#[command(about = "unofficial toolkit for file uploads to GitHub gist", long_about = None)]
#[command(after_help = "Examples:\n  gist p hello1.txt hello2.txt\n  gist s bad1.txt bad2.txt good3.txt -n good1.txt,good2.txt\n  cat network.log | gist p -d \"daily log\"\n  gist p -c")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload one or more public files
    #[command(alias = "p")]
    Public(UploadArgs),

    /// Upload one or more secret files (shh! it's a secret)
    #[command(alias = "s")]
    Secret(UploadArgs),

    /// Show licensing information
    #[command(alias = "l")]
    License,
}

#[derive(Args, Debug)]
pub struct UploadArgs {
    /// GitHub Gist access token
    #[arg(short, long, env = "GIST_KEY", hide_env_values = true, default_value = "")]
    pub token: String,

    /// Read from clipboard
    #[arg(short, long)]
    pub clipboard: bool,

    /// Comma separated file name overrides for the gist
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Gist description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Files to upload (reads stdin when none are given)
    pub files: Vec<String>,
}

impl UploadArgs {
    pub fn into_config(self, visibility: Visibility) -> GistConfig {
        GistConfig::new(visibility)
            .with_token(self.token)
            .with_description(self.description)
            .with_names(OverrideNames::parse(&self.name))
            .with_clipboard(self.clipboard)
            .with_paths(self.files)
    }
}
