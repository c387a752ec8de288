use serde::{Deserialize, Serialize};

/// One atom of renderer output.
///
/// `Code` marks an inline unit the front end may style on its own terms
/// (a monospace span, an ANSI color); `Text` is plain connective tissue.
/// A rendered step is an ordered sequence of these, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Fragment {
    Text(String),
    Code(String),
}

impl Fragment {
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text(text.into())
    }

    pub fn code(text: impl Into<String>) -> Self {
        Fragment::Code(text.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Fragment::Text(s) | Fragment::Code(s) => s,
        }
    }
}

/// Plain-concatenation fallback for front ends without inline markup.
pub fn concat_plain(fragments: &[Fragment]) -> String {
    fragments.iter().map(Fragment::as_str).collect()
}
