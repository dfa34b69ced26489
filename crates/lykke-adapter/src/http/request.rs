/*
[INPUT]:  HTTP verb, path and optional flat parameter mapping
[OUTPUT]: Request descriptors plus query/body encoding of parameters
[POS]:    HTTP layer - plain-data request shapes shared by both clients
[UPDATE]: When adding parameter value kinds or changing encoding rules
*/

use reqwest::Method;
use serde::ser::{Serialize, SerializeMap, Serializer};
use url::Url;

/// Primitive value accepted in a parameter mapping
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    List(Vec<String>),
}

impl ParamValue {
    /// Values as they appear in a query string; lists repeat the key
    fn query_values(&self) -> Vec<String> {
        match self {
            ParamValue::Str(value) => vec![value.clone()],
            ParamValue::Int(value) => vec![value.to_string()],
            ParamValue::Float(value) => vec![value.to_string()],
            ParamValue::List(values) => values.clone(),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Str(value) => serializer.serialize_str(value),
            ParamValue::Int(value) => serializer.serialize_i64(*value),
            ParamValue::Float(value) => serializer.serialize_f64(*value),
            ParamValue::List(values) => serializer.collect_seq(values),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(values: &[&str]) -> Self {
        ParamValue::List(values.iter().map(|value| value.to_string()).collect())
    }
}

/// Ordered, flat mapping of parameter names to primitive values.
///
/// Serializes as a JSON object (POST bodies) and appends to a URL as
/// form-encoded query pairs (GET).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing an earlier one with the same name
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Add a parameter only when a value is present
    pub fn with_opt<V: Into<ParamValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Append every parameter to the URL query string
    pub fn append_to_query(&self, url: &mut Url) {
        if self.entries.is_empty() {
            return;
        }
        let mut pairs = url.query_pairs_mut();
        for (name, value) in &self.entries {
            for item in value.query_values() {
                pairs.append_pair(name, &item);
            }
        }
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Plain-data description of one API call
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub params: Option<Params>,
}

impl Request {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            params: None,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            params: None,
        }
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// Full URL for this request: base URL and path concatenated, plus the
    /// query string for GET requests that carry parameters
    pub fn url(&self, base_url: &Url) -> Result<Url, url::ParseError> {
        let base = base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{}{}", base, self.path))?;
        if self.method == Method::GET {
            if let Some(params) = &self.params {
                params.append_to_query(&mut url);
            }
        }
        Ok(url)
    }

    /// Parameters sent as the JSON body (non-GET requests only)
    pub fn body(&self) -> Option<&Params> {
        if self.method == Method::GET {
            None
        } else {
            self.params.as_ref()
        }
    }
}

/// Collection path, or the item path when a non-empty identifier is given
pub(crate) fn path_with_segment(path: &str, segment: Option<&str>) -> String {
    match segment.filter(|segment| !segment.is_empty()) {
        Some(segment) => format!("{}/{}", path, segment),
        None => path.to_string(),
    }
}
