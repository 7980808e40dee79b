//! # API Facade
//!
//! Single entry point for creating a gist, whatever the UI. It chains the
//! command layer in order and returns a structured [`CmdResult`]:
//!
//! ```text
//! mode::resolve → assemble::run → encode::run → upload::run
//! ```
//!
//! `GistApi<S: InputSource>` is generic over where input comes from:
//! - Production: `GistApi<SystemInput>`
//! - Testing: `GistApi<MemoryInput>`
//!
//! Nothing here prints; the first failing step's error is returned as is.

use crate::client::GistClient;
use crate::commands::{self, mode::InputMode, CmdResult};
use crate::config::GistConfig;
use crate::error::Result;
use crate::input::InputSource;
use crate::model::NamedContent;

pub struct GistApi<S: InputSource> {
    input: S,
    client: GistClient,
}

impl<S: InputSource> GistApi<S> {
    pub fn new(input: S, client: GistClient) -> Self {
        Self { input, client }
    }

    pub fn resolve_mode(&self, config: &GistConfig) -> InputMode {
        commands::mode::resolve(&config.paths, config.clipboard, &self.input)
    }

    /// Reads and names the files without uploading them.
    pub fn assemble(&mut self, config: &GistConfig) -> Result<CmdResult> {
        let mode = self.resolve_mode(config);
        tracing::debug!(?mode, paths = config.paths.len(), "resolved input mode");
        commands::assemble::run(
            &mut self.input,
            mode,
            &config.paths,
            &config.names,
            &config.token,
        )
    }

    /// Encodes already assembled files and uploads them as one gist.
    pub fn upload(&self, config: &GistConfig, files: &[NamedContent]) -> Result<CmdResult> {
        let body = commands::encode::run(&config.description, config.visibility, files)?;
        commands::upload::run(&self.client, body, &config.token)
    }

    pub fn create_gist(&mut self, config: &GistConfig) -> Result<CmdResult> {
        let assembled = self.assemble(config)?;
        let uploaded = self.upload(config, &assembled.files)?;
        Ok(assembled.merge(uploaded))
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};
pub use crate::model::{OverrideNames, Visibility};
