//! Builds the JSON request body for the gist creation endpoint:
//!
//! ```text
//! { "description": "...", "public": true, "files": { "<name>": { "content": "..." } } }
//! ```

use crate::error::Result;
use crate::model::{NamedContent, Visibility};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct GistPayload<'a> {
    pub description: &'a str,
    pub public: bool,
    pub files: BTreeMap<&'a str, FileBody<'a>>,
}

#[derive(Debug, Serialize)]
pub struct FileBody<'a> {
    pub content: &'a str,
}

impl<'a> GistPayload<'a> {
    /// Files are keyed by name; a later file replaces an earlier one with
    /// the same name.
    pub fn new(description: &'a str, visibility: Visibility, files: &'a [NamedContent]) -> Self {
        let files = files
            .iter()
            .map(|file| {
                (
                    file.name.as_str(),
                    FileBody {
                        content: &file.content,
                    },
                )
            })
            .collect();

        Self {
            description,
            public: visibility.is_public(),
            files,
        }
    }
}

pub fn run(description: &str, visibility: Visibility, files: &[NamedContent]) -> Result<Vec<u8>> {
    let payload = GistPayload::new(description, visibility, files);
    Ok(serde_json::to_vec(&payload)?)
}
