use crate::model::NamedContent;

pub mod assemble;
pub mod encode;
pub mod mode;
pub mod upload;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub files: Vec<NamedContent>,
    pub url: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_files(mut self, files: Vec<NamedContent>) -> Self {
        self.files = files;
        self
    }

    pub fn with_url(mut self, url: String) -> Self {
        self.url = Some(url);
        self
    }

    /// Appends the outcome of a later pipeline step to this one.
    pub fn merge(mut self, later: CmdResult) -> Self {
        if !later.files.is_empty() {
            self.files = later.files;
        }
        if later.url.is_some() {
            self.url = later.url;
        }
        self.messages.extend(later.messages);
        self
    }
}
