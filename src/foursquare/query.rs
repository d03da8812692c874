//! Canonical query strings.
//!
//! Keys and values are rfc 3986 encoded, parameters are sorted by key (byte order) and list values are sorted in
//! natural order, so a given set of parameters always gives the same query string whatever the insertion order.
use std::{cmp::Ordering, collections::BTreeMap};

use serde::Serialize;
use serde_json::Value;

use super::{Error, FoursquareResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterValue {
    Scalar(String),
    List(Vec<String>),
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_owned())
    }
}

impl From<String> for ParameterValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl<T> From<Vec<T>> for ParameterValue
where
    T: Into<String>,
{
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    parameters: BTreeMap<String, ParameterValue>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens a serializable struct into parameters.
    ///
    /// `None` fields are omitted, numbers and booleans are sent as strings and sequences become list values.
    pub fn from_serializable<S>(options: &S) -> FoursquareResult<Self>
    where
        S: Serialize + ?Sized,
    {
        let fields = match serde_json::to_value(options).map_err(Error::invalid_parameters)? {
            Value::Null => return Ok(Self::new()),
            Value::Object(fields) => fields,
            value => {
                return Err(Error::invalid_parameters(format!(
                    "expected a struct of parameters but got {}",
                    value
                )))
            }
        };

        let mut parameters = Self::new();
        for (key, value) in fields {
            match value {
                Value::Null => {}
                Value::Array(values) => {
                    let values = values
                        .into_iter()
                        .map(|v| scalar(&key, v))
                        .collect::<FoursquareResult<Vec<_>>>()?;
                    parameters.insert(key, values);
                }
                value => {
                    let value = scalar(&key, value)?;
                    parameters.insert(key, value);
                }
            }
        }
        Ok(parameters)
    }

    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<ParameterValue>
    where
        K: Into<String>,
        V: Into<ParameterValue>,
    {
        self.parameters.insert(key.into(), value.into())
    }

    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ParameterValue>,
    {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        self.parameters.get(key)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        let mut chunks = self
            .parameters
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    ParameterValue::Scalar(value) => encode(value),
                    ParameterValue::List(values) => {
                        let mut values = values.iter().map(|v| encode(v)).collect::<Vec<_>>();
                        values.sort_by(|a, b| natural_cmp(a, b));
                        values.join(",")
                    }
                };
                (encode(key), value)
            })
            .collect::<Vec<_>>();

        chunks.sort_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));

        chunks
            .iter()
            .map(|(key, value)| format!("{}={}", key, value.replace("%25", "%")))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<ParameterValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut parameters = Self::new();
        for (key, value) in iter {
            parameters.insert(key, value);
        }
        parameters
    }
}

fn scalar(key: &str, value: Value) -> FoursquareResult<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        value => Err(Error::invalid_parameters(format!(
            "parameter {} expects a scalar value but got {}",
            key, value
        ))),
    }
}

/// Rfc 3986 encoding: only `A-Za-z0-9-._~` are left as is, space is `%20`.
pub fn encode(input: &str) -> String {
    urlencoding::encode(input).replace("%7E", "~")
}

/// Natural order comparison: digit runs are compared by their numeric value so that "2" < "10".
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (a_bytes, b_bytes) = (a.as_bytes(), b.as_bytes());
    let (mut i, mut j) = (0, 0);

    while i < a_bytes.len() && j < b_bytes.len() {
        if a_bytes[i].is_ascii_digit() && b_bytes[j].is_ascii_digit() {
            let a_end = digits_end(a_bytes, i);
            let b_end = digits_end(b_bytes, j);
            let ordering = numeric_cmp(&a[i..a_end], &b[j..b_end]);
            if ordering != Ordering::Equal {
                return ordering;
            }
            i = a_end;
            j = b_end;
        } else {
            let ordering = a_bytes[i].cmp(&b_bytes[j]);
            if ordering != Ordering::Equal {
                return ordering;
            }
            i += 1;
            j += 1;
        }
    }

    (a_bytes.len() - i)
        .cmp(&(b_bytes.len() - j))
        .then_with(|| a.cmp(b))
}

fn digits_end(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map(|p| start + p)
        .unwrap_or(bytes.len())
}

fn numeric_cmp(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');
    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
        .then_with(|| a.len().cmp(&b.len()))
}
