//! Dynamic subject values and the two equality relations defined over them.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Shared handle to an object instance.
///
/// Cloning the handle does not copy the object: clones are the *same*
/// instance for identity comparison, while two separately constructed
/// instances with equal properties are only loosely equal.
#[derive(Clone)]
pub struct Instance {
    inner: Arc<InstanceData>,
}

struct InstanceData {
    type_name: String,
    properties: BTreeMap<String, Value>,
}

impl Instance {
    /// Creates an instance of the named type without properties.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self::with_properties(type_name, Vec::<(String, Value)>::new())
    }

    /// Creates an instance of the named type carrying the given properties.
    pub fn with_properties<I, K, V>(type_name: impl Into<String>, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let properties = properties
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            inner: Arc::new(InstanceData {
                type_name: type_name.into(),
                properties,
            }),
        }
    }

    /// Returns the name of the instance's concrete type.
    pub fn type_name(&self) -> &str {
        &self.inner.type_name
    }

    /// Returns a single property value.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.inner.properties.get(name)
    }

    /// Returns all properties in name order.
    pub fn properties(&self) -> &BTreeMap<String, Value> {
        &self.inner.properties
    }

    /// Returns whether both handles point at the same instance.
    pub fn same_instance(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type_name", &self.inner.type_name)
            .field("properties", &self.inner.properties)
            .finish()
    }
}

/// A subject or reference value handed to a check.
#[derive(Debug, Clone)]
pub enum Value {
    /// The null/absent sentinel.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A double precision float.
    Float(f64),
    /// A text string.
    Str(String),
    /// An ordered list of values.
    Array(Vec<Value>),
    /// A reference to an object instance.
    Object(Instance),
}

impl Value {
    /// Returns the kind name used in failure messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "double",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Returns whether the value is the null sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean payload, if the value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the instance, if the value is an object.
    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Value::Object(instance) => Some(instance),
            _ => None,
        }
    }

    /// Boolean conversion used by loose comparison.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Int(value) => *value != 0,
            Value::Float(value) => *value != 0.0,
            Value::Str(text) => !(text.is_empty() || text == "0"),
            Value::Array(items) => !items.is_empty(),
            Value::Object(_) => true,
        }
    }

    /// Strict identity: same kind and same value, objects by instance.
    pub fn identical(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.identical(y))
            }
            (Value::Object(a), Value::Object(b)) => a.same_instance(b),
            _ => false,
        }
    }

    /// Loose equality with value coercion.
    ///
    /// Booleans compare against the other side's truthiness, null equals the
    /// empty string and every falsy value, numbers and numeric strings compare
    /// numerically, and non-numeric strings compare against the textual form
    /// of a number. Arrays compare element-wise and objects compare by type
    /// and properties. Objects are never loosely equal to scalars other than
    /// booleans.
    pub fn loosely_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(flag), other) | (other, Value::Bool(flag)) => *flag == other.is_truthy(),
            (Value::Null, Value::Str(text)) | (Value::Str(text), Value::Null) => text.is_empty(),
            (Value::Null, other) | (other, Value::Null) => !other.is_truthy(),
            (Value::Str(a), Value::Str(b)) => match (parse_numeric(a), parse_numeric(b)) {
                (Some(x), Some(y)) => x.equals(y),
                _ => a == b,
            },
            (Value::Str(text), number) | (number, Value::Str(text)) => match Number::of(number) {
                Some(number) => match parse_numeric(text) {
                    Some(parsed) => number.equals(parsed),
                    None => number.render() == *text,
                },
                None => false,
            },
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loosely_equals(y))
            }
            (Value::Object(a), Value::Object(b)) => {
                a.same_instance(b)
                    || (a.type_name() == b.type_name()
                        && a.properties().len() == b.properties().len()
                        && a.properties().iter().all(|(key, value)| {
                            b.property(key)
                                .is_some_and(|theirs| value.loosely_equals(theirs))
                        }))
            }
            (left, right) => match (Number::of(left), Number::of(right)) {
                (Some(x), Some(y)) => x.equals(y),
                _ => false,
            },
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Int(value) => Some(Number::Int(*value)),
            Value::Float(value) => Some(Number::Float(*value)),
            _ => None,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Int(value) => value as f64,
            Number::Float(value) => value,
        }
    }

    fn equals(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }

    fn render(self) -> String {
        match self {
            Number::Int(value) => value.to_string(),
            Number::Float(value) if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 => {
                (value as i64).to_string()
            }
            Number::Float(value) => value.to_string(),
        }
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

/// Parses a numeric string: optional surrounding whitespace, optional sign,
/// digits with an optional fraction, and an optional exponent.
fn parse_numeric(text: &str) -> Option<Number> {
    let trimmed =
        text.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'));
    let bytes = trimmed.as_bytes();
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }
    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;
    let mut frac_digits = 0;
    let mut is_float = false;
    if bytes.get(pos) == Some(&b'.') {
        is_float = true;
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits == 0 {
            return None;
        }
        is_float = true;
        pos = exp + exp_digits;
    }
    if pos != bytes.len() {
        return None;
    }
    if !is_float {
        if let Ok(value) = trimmed.parse::<i64>() {
            return Some(Number::Int(value));
        }
    }
    trimmed.parse::<f64>().ok().map(Number::Float)
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Instance> for Value {
    fn from(value: Instance) -> Self {
        Value::Object(value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_strings_follow_the_grammar() {
        assert!(matches!(parse_numeric("42"), Some(Number::Int(42))));
        assert!(matches!(parse_numeric(" -7 "), Some(Number::Int(-7))));
        assert!(matches!(parse_numeric("1e3"), Some(Number::Float(v)) if v == 1000.0));
        assert!(matches!(parse_numeric(".5"), Some(Number::Float(v)) if v == 0.5));
        assert!(parse_numeric("").is_none());
        assert!(parse_numeric("abc").is_none());
        assert!(parse_numeric("1e").is_none());
        assert!(parse_numeric("12abc").is_none());
        assert!(parse_numeric("inf").is_none());
        assert!(parse_numeric(".").is_none());
    }

    #[test]
    fn whole_floats_render_without_fraction() {
        assert_eq!(Number::Float(3.0).render(), "3");
        assert_eq!(Number::Float(1.5).render(), "1.5");
        assert_eq!(Number::Int(-2).render(), "-2");
    }
}
