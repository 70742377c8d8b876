use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::{is_reserved_key, DATA_KEY, POSITIONAL_KEY};
use crate::{Error, Result};

/// The map produced by parsing a command line.
///
/// Option names are stored exactly as typed. Positional arguments live
/// under `_` and trailing raw data under `__`; both keys are absent when
/// there is nothing to hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ParsedArguments {
    map: Map<String, Value>,
}

impl ParsedArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a value under `name`, turning repeats into an array.
    ///
    /// An array value is concatenated rather than nested, so repeating an
    /// option never produces arrays of arrays on its own.
    ///
    /// # Examples
    /// ```
    /// use argline::ParsedArguments;
    /// use serde_json::json;
    ///
    /// let mut args = ParsedArguments::new();
    /// args.accumulate("flag", json!("on"));
    /// args.accumulate("flag", json!(["off", "auto"]));
    /// assert_eq!(args.get("flag"), Some(&json!(["on", "off", "auto"])));
    /// ```
    pub fn accumulate(&mut self, name: &str, value: Value) {
        let Some(existing) = self.map.get_mut(name) else {
            self.map.insert(name.to_string(), value);
            return;
        };

        match existing {
            Value::Array(items) => match value {
                Value::Array(more) => items.extend(more),
                single => items.push(single),
            },
            previous => {
                let old = previous.take();
                let mut items = vec![old];
                match value {
                    Value::Array(more) => items.extend(more),
                    single => items.push(single),
                }
                *previous = Value::Array(items);
            }
        }
    }

    pub(crate) fn set_positional(&mut self, positional: Vec<String>) {
        if positional.is_empty() {
            return;
        }
        let items = positional.into_iter().map(Value::String).collect();
        self.map.insert(POSITIONAL_KEY.to_string(), Value::Array(items));
    }

    pub(crate) fn set_data(&mut self, data: &str) {
        self.map
            .insert(DATA_KEY.to_string(), Value::String(data.to_string()));
    }

    /// Positional arguments in encounter order.
    pub fn positional(&self) -> impl Iterator<Item = &str> + '_ {
        let items: &[Value] = match self.map.get(POSITIONAL_KEY) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        };
        items.iter().filter_map(Value::as_str)
    }

    pub fn positional_at(&self, index: usize) -> Option<&str> {
        self.positional().nth(index)
    }

    /// Raw text captured after the trailing-data delimiter.
    pub fn data(&self) -> Option<&str> {
        self.map.get(DATA_KEY).and_then(Value::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// True when the option is present with any value other than `false`.
    pub fn is_set(&self, name: &str) -> bool {
        !matches!(self.map.get(name), None | Some(Value::Bool(false)))
    }

    /// Read one option into a typed value.
    ///
    /// Returns `Ok(None)` when the option is absent.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        match self.map.get(name) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|err| Error::argument(name, err)),
        }
    }

    /// Read the whole map into a typed value.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(self.map.clone()))?)
    }

    /// Option names, skipping the positional and trailing-data keys.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.map
            .keys()
            .map(String::as_str)
            .filter(|name| !is_reserved_key(name))
    }

    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.map.iter()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.map
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.map
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.map)
    }
}

impl From<ParsedArguments> for Value {
    fn from(args: ParsedArguments) -> Self {
        args.into_value()
    }
}

impl From<ParsedArguments> for Map<String, Value> {
    fn from(args: ParsedArguments) -> Self {
        args.map
    }
}

impl IntoIterator for ParsedArguments {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParsedArguments {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl fmt::Display for ParsedArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&self.map).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
