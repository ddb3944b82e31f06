//! Completion results and response-shape navigation.

use std::fmt::Write;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::Error;

/// The outcome of one successful completion call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Completion {
    pub prompt: String,
    /// Text of the first candidate the backend returned.
    pub completion_text: String,
    /// The backend's JSON response, untouched.
    pub raw_response: Value,
    /// The body that was sent.
    pub request_params: Map<String, Value>,
}

/// One step into a JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    Key(&'static str),
    Index(usize),
}

/// Render `segments` as `choices[0].text`.
pub fn render_path(segments: &[PathSegment]) -> String {
    let mut rendered = String::new();
    for segment in segments {
        match segment {
            PathSegment::Key(key) => {
                if !rendered.is_empty() {
                    rendered.push('.');
                }
                rendered.push_str(key);
            }
            PathSegment::Index(index) => {
                let _ = write!(rendered, "[{index}]");
            }
        }
    }
    rendered
}

/// Follow `path` through `raw` to a string.
///
/// On failure the error carries the shortest prefix of `path` that could not be resolved.
pub fn extract_text(provider: &str, raw: &Value, path: &[PathSegment]) -> Result<String, Error> {
    let mut current = raw;
    for (depth, segment) in path.iter().enumerate() {
        let next = match segment {
            PathSegment::Key(key) => current.get(*key),
            PathSegment::Index(index) => current.get(*index),
        };
        current = next.ok_or_else(|| Error::malformed(provider, render_path(&path[..=depth])))?;
    }

    current
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::malformed(provider, render_path(path)))
}
