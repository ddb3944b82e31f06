use crate::response::PathSegment;
use crate::types::{ParamDefault, ParamSpec, ParamTable, Selection};

pub const COHERE_BASE_URL: &str = "https://api.cohere.ai";

/// Pinned API version sent with every request.
pub const COHERE_VERSION: &str = "2021-11-08";

pub const COHERE_MODELS: &[&str] = &["small", "medium", "large", "xlarge"];

// Params are defined in https://docs.cohere.ai/generate-reference
pub static COHERE_PARAMS: [ParamSpec; 11] = [
    ParamSpec::new("model", "model", ParamDefault::Str("xlarge")),
    ParamSpec::new("max_tokens", "max_tokens", ParamDefault::Int(20)),
    ParamSpec::new("temperature", "temperature", ParamDefault::Float(0.75)),
    ParamSpec::new("num_generations", "num_generations", ParamDefault::Int(1)),
    ParamSpec::new("k", "k", ParamDefault::Int(0)),
    ParamSpec::new("p", "p", ParamDefault::Float(0.75)),
    ParamSpec::new("frequency_penalty", "frequency_penalty", ParamDefault::Float(0.0)),
    ParamSpec::new("presence_penalty", "presence_penalty", ParamDefault::Float(0.0)),
    ParamSpec::new("stop_sequences", "stop_sequences", ParamDefault::EmptyList),
    ParamSpec::new("return_likelihoods", "return_likelihoods", ParamDefault::Str("")),
    ParamSpec::new("logit_bias", "logit_bias", ParamDefault::EmptyMap),
];

pub static COHERE_TABLE: ParamTable = ParamTable {
    provider: "Cohere",
    entries: &COHERE_PARAMS,
    selection: Selection {
        param: "model",
        allowed: COHERE_MODELS,
    },
};

/// `generations[0].text`
pub const COMPLETION_TEXT_PATH: [PathSegment; 3] = [
    PathSegment::Key("generations"),
    PathSegment::Index(0),
    PathSegment::Key("text"),
];
