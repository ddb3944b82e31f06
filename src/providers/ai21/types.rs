use crate::response::PathSegment;
use crate::types::{ParamDefault, ParamSpec, ParamTable, Selection};

pub const AI21_BASE_URL: &str = "https://api.ai21.com/studio/v1";

pub const AI21_ENGINES: &[&str] = &["j1-jumbo", "j1-grande", "j1-large"];

/// Canonical name -> (wire name, default).
pub static AI21_PARAMS: [ParamSpec; 7] = [
    ParamSpec::new("engine", "engine", ParamDefault::Str("j1-large")),
    ParamSpec::new("temperature", "temperature", ParamDefault::Float(1.0)),
    ParamSpec::new("max_tokens", "maxTokens", ParamDefault::Int(10)),
    ParamSpec::new("top_k_return", "topKReturn", ParamDefault::Int(0)),
    ParamSpec::new("n", "numResults", ParamDefault::Int(1)),
    ParamSpec::new("top_p", "topP", ParamDefault::Float(1.0)),
    ParamSpec::new("stop_sequences", "stopSequences", ParamDefault::EmptyList),
];

pub static AI21_TABLE: ParamTable = ParamTable {
    provider: "AI21",
    entries: &AI21_PARAMS,
    selection: Selection {
        param: "engine",
        allowed: AI21_ENGINES,
    },
};

/// `completions[0].data.text`
pub const COMPLETION_TEXT_PATH: [PathSegment; 4] = [
    PathSegment::Key("completions"),
    PathSegment::Index(0),
    PathSegment::Key("data"),
    PathSegment::Key("text"),
];
