//! Parameter tables and the effective values a provider resolves from them.

use serde_json::{Map, Value};

use super::overrides::Overrides;
use crate::Error;

/// Default value of a parameter, usable in `static` tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamDefault {
    Null,
    Int(i64),
    Float(f64),
    Str(&'static str),
    EmptyList,
    EmptyMap,
}

impl ParamDefault {
    /// Materialize a fresh JSON value for this default.
    pub fn to_value(&self) -> Value {
        match *self {
            ParamDefault::Null => Value::Null,
            ParamDefault::Int(value) => Value::from(value),
            ParamDefault::Float(value) => Value::from(value),
            ParamDefault::Str(value) => Value::from(value),
            ParamDefault::EmptyList => Value::Array(Vec::new()),
            ParamDefault::EmptyMap => Value::Object(Map::new()),
        }
    }
}

/// One row of a provider's parameter table.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Canonical name callers use.
    pub name: &'static str,
    /// Field name in the backend's request body.
    pub wire: &'static str,
    pub default: ParamDefault,
}

impl ParamSpec {
    pub const fn new(name: &'static str, wire: &'static str, default: ParamDefault) -> Self {
        Self {
            name,
            wire,
            default,
        }
    }
}

/// The parameter whose value must come from a fixed set (model or engine).
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    pub param: &'static str,
    pub allowed: &'static [&'static str],
}

impl Selection {
    fn validate(&self, provider: &str, value: &Value) -> Result<String, Error> {
        match value.as_str() {
            Some(name) if self.allowed.iter().any(|allowed| *allowed == name) => {
                Ok(name.to_string())
            }
            Some(name) => Err(Error::invalid_selection(provider, self.param, name, self.allowed)),
            None => Err(Error::invalid_selection(
                provider,
                self.param,
                value.to_string(),
                self.allowed,
            )),
        }
    }
}

/// A provider's full parameter table.
///
/// Canonical names within one table are unique and `selection.param` is one of them.
#[derive(Debug)]
pub struct ParamTable {
    pub provider: &'static str,
    pub entries: &'static [ParamSpec],
    pub selection: Selection,
}

impl ParamTable {
    /// Canonical names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|spec| spec.name)
    }

    pub fn get(&self, name: &str) -> Option<&'static ParamSpec> {
        self.entries.iter().find(|spec| spec.name == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|spec| spec.name == name)
    }
}

/// Values stored on a provider at construction: defaults overlaid with the
/// caller's construction-time overrides. Never mutated afterwards.
#[derive(Debug, Clone)]
pub struct EffectiveParams {
    table: &'static ParamTable,
    values: Vec<Value>,
    selection: String,
}

impl EffectiveParams {
    /// Seed every entry of `table` and validate the selection field.
    pub fn connect(table: &'static ParamTable, overrides: &Overrides) -> Result<Self, Error> {
        for key in overrides.keys() {
            if table.get(key).is_none() {
                tracing::debug!(provider = table.provider, key = %key, "ignoring unrecognized parameter");
            }
        }

        let values: Vec<Value> = table
            .entries
            .iter()
            .map(|spec| {
                overrides
                    .get(spec.name)
                    .cloned()
                    .unwrap_or_else(|| spec.default.to_value())
            })
            .collect();

        let selection = Self::selection_in(table, &values)?;

        Ok(Self {
            table,
            values,
            selection,
        })
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.table.position(name).map(|index| &self.values[index])
    }

    /// The validated model or engine name.
    pub fn selection(&self) -> &str {
        &self.selection
    }

    /// Overlay call-scoped overrides on the stored values.
    ///
    /// Keys missing from the table are never consulted. A selection override
    /// is held to the same allowed set as at construction.
    pub fn resolve(&self, overrides: &Overrides) -> Result<ResolvedParams, Error> {
        let values: Vec<Value> = self
            .table
            .entries
            .iter()
            .zip(&self.values)
            .map(|(spec, stored)| overrides.get(spec.name).unwrap_or(stored).clone())
            .collect();

        let selection = Self::selection_in(self.table, &values)?;

        Ok(ResolvedParams {
            table: self.table,
            values,
            selection,
        })
    }

    fn selection_in(table: &ParamTable, values: &[Value]) -> Result<String, Error> {
        let index = table.position(table.selection.param).ok_or_else(|| {
            Error::config(format!(
                "{} parameter table has no `{}` entry",
                table.provider, table.selection.param
            ))
        })?;
        table.selection.validate(table.provider, &values[index])
    }
}

/// Parameter values for a single request.
#[derive(Debug, Clone)]
pub struct ResolvedParams {
    table: &'static ParamTable,
    values: Vec<Value>,
    selection: String,
}

impl ResolvedParams {
    pub fn selection(&self) -> &str {
        &self.selection
    }

    /// Build the request body: the prompt first, then each entry under its wire name.
    pub fn into_body(self, prompt: &str) -> Map<String, Value> {
        let mut body = Map::with_capacity(self.values.len() + 1);
        body.insert("prompt".to_string(), Value::from(prompt));
        for (spec, value) in self.table.entries.iter().zip(self.values) {
            body.insert(spec.wire.to_string(), value);
        }
        body
    }
}
