use crate::response::PathSegment;
use crate::types::{ParamDefault, ParamSpec, ParamTable, Selection};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

pub const OPENAI_MODELS: &[&str] = &[
    "text-davinci-002",
    "text-davinci-001",
    "davinci",
    "text-curie-001",
    "text-babbage-001",
    "text-ada-001",
    "code-davinci-002",
    "code-cushman-001",
];

/// Canonical name -> (wire name, default).
pub static OPENAI_PARAMS: [ParamSpec; 10] = [
    ParamSpec::new("model", "model", ParamDefault::Str("text-davinci-002")),
    ParamSpec::new("temperature", "temperature", ParamDefault::Float(1.0)),
    ParamSpec::new("max_tokens", "max_tokens", ParamDefault::Int(10)),
    ParamSpec::new("n", "n", ParamDefault::Int(1)),
    ParamSpec::new("top_p", "top_p", ParamDefault::Float(1.0)),
    ParamSpec::new("logprobs", "logprobs", ParamDefault::Null),
    ParamSpec::new("top_k_return", "best_of", ParamDefault::Int(1)),
    ParamSpec::new("stop_sequence", "stop", ParamDefault::Null),
    ParamSpec::new("presence_penalty", "presence_penalty", ParamDefault::Float(0.0)),
    ParamSpec::new("frequency_penalty", "frequency_penalty", ParamDefault::Float(0.0)),
];

pub static OPENAI_TABLE: ParamTable = ParamTable {
    provider: "OpenAI",
    entries: &OPENAI_PARAMS,
    selection: Selection {
        param: "model",
        allowed: OPENAI_MODELS,
    },
};

/// `choices[0].text`
pub const COMPLETION_TEXT_PATH: [PathSegment; 3] = [
    PathSegment::Key("choices"),
    PathSegment::Index(0),
    PathSegment::Key("text"),
];
