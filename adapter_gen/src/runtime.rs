/* Streaming-style JSON object reader/writer used by generated
 * adapters. This file is embedded verbatim next to the generated code,
 * so it must stay self-contained: serde_json (with the preserve-order
 * feature) and thiserror only.
 */

use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Failures surfaced by generated adapters at decode time. Malformed
/// values are reported, never coerced or defaulted.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input text is not valid JSON.
    #[error("malformed JSON input: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The input parsed, but its root is not an object.
    #[error("input is not a JSON object")]
    NotAnObject,

    /// A field value had the wrong JSON kind for its classification.
    #[error("field '{field}': expected {expected}, found {found}")]
    UnexpectedValue {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A numeric field value does not fit the declared width.
    #[error("field '{field}': number does not fit in {expected}")]
    NumberOutOfRange {
        field: String,
        expected: &'static str,
    },

    /// A name or value was requested past the last entry.
    #[error("object read past its last entry")]
    ExhaustedObject,

    /// The object was closed while entries remained unread.
    #[error("object closed with {remaining} unread entries")]
    UnreadEntries { remaining: usize },

    /// A value was requested before its name.
    #[error("value read before its name")]
    ValueBeforeName,
}

/* ============================================================================
   Writer
   ============================================================================ */

/// Object writer with a begin_object / name / value / end_object
/// discipline. Fields appear in the output in emission order.
#[derive(Debug, Default)]
pub struct JsonObjectWriter {
    entries: Map<String, Value>,
    pending_name: Option<String>,
}

impl JsonObjectWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /* Start a fresh object, discarding any previous state */
    pub fn begin_object(&mut self) -> &mut Self {
        self.entries.clear();
        self.pending_name = None;
        self
    }

    /* Stage the name of the next value */
    pub fn name(&mut self, name: &str) -> &mut Self {
        self.pending_name = Some(name.to_string());
        self
    }

    pub fn value_i32(&mut self, value: i32) -> &mut Self {
        self.push(Value::from(value))
    }

    pub fn value_i64(&mut self, value: i64) -> &mut Self {
        self.push(Value::from(value))
    }

    pub fn value_f64(&mut self, value: f64) -> &mut Self {
        let number = Number::from_f64(value).expect("JSON numbers must be finite");
        self.push(Value::Number(number))
    }

    pub fn value_bool(&mut self, value: bool) -> &mut Self {
        self.push(Value::from(value))
    }

    pub fn value_str(&mut self, value: impl AsRef<str>) -> &mut Self {
        self.push(Value::from(value.as_ref()))
    }

    pub fn end_object(&mut self) -> &mut Self {
        /* A dangling name is a writer-discipline bug in the caller */
        assert!(self.pending_name.is_none(), "name written without a value");
        self
    }

    /* Render the finished object */
    pub fn into_string(self) -> String {
        serde_json::to_string(&Value::Object(self.entries))
            .expect("JSON object serialization cannot fail")
    }

    fn push(&mut self, value: Value) -> &mut Self {
        let name = self
            .pending_name
            .take()
            .expect("value written without a preceding name");
        self.entries.insert(name, value);
        self
    }
}

/* ============================================================================
   Reader
   ============================================================================ */

/// Object reader with a begin_object / has_next / next_name /
/// typed-read-or-skip / end_object discipline. Entries come back in
/// the input's own order, and the reader remembers the current name so
/// decode errors can point at the offending field.
#[derive(Debug)]
pub struct JsonObjectReader {
    entries: Vec<(String, Value)>,
    pos: usize,
    current_field: Option<String>,
}

impl JsonObjectReader {
    /* Parse the input text; the root must be an object */
    pub fn new(text: &str) -> Result<Self, CodecError> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Object(map) = value else {
            return Err(CodecError::NotAnObject);
        };
        Ok(Self {
            entries: map.into_iter().collect(),
            pos: 0,
            current_field: None,
        })
    }

    pub fn begin_object(&mut self) -> Result<(), CodecError> {
        self.pos = 0;
        self.current_field = None;
        Ok(())
    }

    pub fn has_next(&self) -> bool {
        self.pos < self.entries.len()
    }

    /* Read the next entry's name without consuming its value */
    pub fn next_name(&mut self) -> Result<String, CodecError> {
        let (name, _) = self.entries.get(self.pos).ok_or(CodecError::ExhaustedObject)?;
        self.current_field = Some(name.clone());
        Ok(name.clone())
    }

    pub fn next_i32(&mut self) -> Result<i32, CodecError> {
        let (field, value) = self.next_entry()?;
        match value {
            Value::Number(n) => n
                .as_i64()
                .and_then(|wide| i32::try_from(wide).ok())
                .ok_or(CodecError::NumberOutOfRange { field, expected: "i32" }),
            other => Err(unexpected(field, "i32 number", &other)),
        }
    }

    pub fn next_i64(&mut self) -> Result<i64, CodecError> {
        let (field, value) = self.next_entry()?;
        match value {
            Value::Number(n) => n
                .as_i64()
                .ok_or(CodecError::NumberOutOfRange { field, expected: "i64" }),
            other => Err(unexpected(field, "i64 number", &other)),
        }
    }

    pub fn next_f64(&mut self) -> Result<f64, CodecError> {
        let (field, value) = self.next_entry()?;
        match value {
            Value::Number(n) => n
                .as_f64()
                .ok_or(CodecError::NumberOutOfRange { field, expected: "f64" }),
            other => Err(unexpected(field, "f64 number", &other)),
        }
    }

    pub fn next_bool(&mut self) -> Result<bool, CodecError> {
        let (field, value) = self.next_entry()?;
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(unexpected(field, "bool", &other)),
        }
    }

    pub fn next_string(&mut self) -> Result<String, CodecError> {
        let (field, value) = self.next_entry()?;
        match value {
            Value::String(s) => Ok(s),
            other => Err(unexpected(field, "string", &other)),
        }
    }

    /* Step over the current entry's value without interpreting it, so
       an unrecognized key cannot desynchronize the reads that follow */
    pub fn skip_value(&mut self) -> Result<(), CodecError> {
        if self.pos >= self.entries.len() {
            return Err(CodecError::ExhaustedObject);
        }
        self.current_field = None;
        self.pos += 1;
        Ok(())
    }

    pub fn end_object(&mut self) -> Result<(), CodecError> {
        let remaining = self.entries.len() - self.pos;
        if remaining > 0 {
            return Err(CodecError::UnreadEntries { remaining });
        }
        Ok(())
    }

    fn next_entry(&mut self) -> Result<(String, Value), CodecError> {
        let field = self.current_field.take().ok_or(CodecError::ValueBeforeName)?;
        let (_, value) = self.entries.get(self.pos).ok_or(CodecError::ExhaustedObject)?;
        let value = value.clone();
        self.pos += 1;
        Ok((field, value))
    }
}

fn unexpected(field: String, expected: &'static str, found: &Value) -> CodecError {
    CodecError::UnexpectedValue {
        field,
        expected,
        found: json_kind(found),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
