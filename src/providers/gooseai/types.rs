use crate::response::PathSegment;
use crate::types::{ParamDefault, ParamSpec, ParamTable, Selection};

pub const GOOSEAI_BASE_URL: &str = "https://api.goose.ai/v1";

pub const GOOSEAI_MODELS: &[&str] = &["fairseq-13b", "gpt-neo-20b", "gpt-j-6b"];

pub static GOOSEAI_PARAMS: [ParamSpec; 18] = [
    ParamSpec::new("model", "model", ParamDefault::Str("gpt-neo-20b")),
    ParamSpec::new("max_tokens", "max_tokens", ParamDefault::Int(16)),
    ParamSpec::new("min_tokens", "min_tokens", ParamDefault::Int(1)),
    ParamSpec::new("temperature", "temperature", ParamDefault::Float(1.0)),
    ParamSpec::new("n", "n", ParamDefault::Int(1)),
    ParamSpec::new("top_p", "top_p", ParamDefault::Float(1.0)),
    ParamSpec::new("top_k", "top_k", ParamDefault::Int(0)),
    ParamSpec::new("tfs", "tfs", ParamDefault::Float(1.0)),
    ParamSpec::new("top_a", "top_a", ParamDefault::Float(1.0)),
    ParamSpec::new("typical_p", "typical_p", ParamDefault::Float(1.0)),
    ParamSpec::new("stop", "stop", ParamDefault::Null),
    ParamSpec::new("logit_bias", "logit_bias", ParamDefault::Null),
    ParamSpec::new("logprobs", "logprobs", ParamDefault::Null),
    ParamSpec::new("presence_penalty", "presence_penalty", ParamDefault::Float(0.0)),
    ParamSpec::new("frequency_penalty", "frequency_penalty", ParamDefault::Float(0.0)),
    ParamSpec::new("repetition_penalty", "repetition_penalty", ParamDefault::Float(1.0)),
    ParamSpec::new("repetition_penalty_slope", "repetition_penalty_slope", ParamDefault::Int(0)),
    ParamSpec::new("repetition_penalty_range", "repetition_penalty_range", ParamDefault::Int(0)),
];

pub static GOOSEAI_TABLE: ParamTable = ParamTable {
    provider: "GooseAI",
    entries: &GOOSEAI_PARAMS,
    selection: Selection {
        param: "model",
        allowed: GOOSEAI_MODELS,
    },
};

/// `choices[0].text`
pub const COMPLETION_TEXT_PATH: [PathSegment; 3] = [
    PathSegment::Key("choices"),
    PathSegment::Index(0),
    PathSegment::Key("text"),
];
