/// File name used for stdin and clipboard uploads when no override is given.
pub const DEFAULT_FILE_NAME: &str = "gistfile1.txt";

/// One file of a gist: the name it is uploaded under and its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedContent {
    pub name: String,
    pub content: String,
}

impl NamedContent {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Replacement file names, applied by position to the assembled inputs.
///
/// Parsed from a single comma separated flag value. An empty segment
/// (`-n ,b.txt`) leaves the item at that position with its default name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideNames(Vec<String>);

impl OverrideNames {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        Self(raw.split(',').map(str::to_string).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The override for the item at `position`, if one was given.
    pub fn get(&self, position: usize) -> Option<&str> {
        self.0
            .get(position)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

/// Gist visibility. Secret gists are unlisted, not access controlled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Secret,
}

impl Visibility {
    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}
