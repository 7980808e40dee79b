use super::{CmdMessage, CmdResult};
use crate::client::GistClient;
use crate::error::Result;

pub fn run(client: &GistClient, body: Vec<u8>, token: &str) -> Result<CmdResult> {
    let url = client.upload(body, token)?;
    tracing::info!(url = %url, "gist created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Gist created"));
    Ok(result.with_url(url))
}
