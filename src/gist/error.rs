use thiserror::Error;

#[derive(Error, Debug)]
pub enum GistError {
    #[error("no input data has been specified")]
    NoInputData,

    #[error("more override file names ({names}) than inputs ({inputs}) have been provided")]
    TooManyOverrideNames { names: usize, inputs: usize },

    #[error("cannot read file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read data from stdin: {0}")]
    StdinRead(#[source] std::io::Error),

    #[error("cannot read data from clipboard: {0}")]
    ClipboardRead(String),

    #[error("the clipboard is populated with the API token")]
    TokenInClipboard,

    #[error("missing API token (pass --token or set GIST_KEY)")]
    MissingToken,

    #[error("cannot send request to GitHub: {0}")]
    Network(#[source] reqwest::Error),

    #[error("cannot read reply from GitHub")]
    BadResponseBody,

    #[error("invalid API token")]
    InvalidAuth,

    #[error("GitHub rejected the upload: {0}")]
    Upstream(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GistError>;
