use std::fmt;
use std::sync::Arc;

/// A runtime value read from a bound object.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Arc<Vec<u8>>),
    Sequence(Vec<DataValue>),
    Record(Record),
}

impl DataValue {
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        DataValue::Bytes(Arc::new(data.into()))
    }

    /// The registry key this value is formatted under.
    pub fn type_key(&self) -> TypeKey {
        match self {
            DataValue::Null => TypeKey::Null,
            DataValue::Bool(_) => TypeKey::Boolean,
            DataValue::Int(_) | DataValue::UInt(_) => TypeKey::Integer,
            DataValue::Float(_) => TypeKey::Float,
            DataValue::Text(_) => TypeKey::Text,
            DataValue::Bytes(_) => TypeKey::Bytes,
            DataValue::Sequence(_) => TypeKey::Sequence,
            DataValue::Record(r) => TypeKey::Named(r.type_name().to_string()),
        }
    }

    /// Short description for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DataValue::Null => "null",
            DataValue::Bool(_) => "a boolean",
            DataValue::Int(_) | DataValue::UInt(_) => "an integer",
            DataValue::Float(_) => "a number",
            DataValue::Text(_) => "text",
            DataValue::Bytes(_) => "bytes",
            DataValue::Sequence(_) => "a sequence",
            DataValue::Record(_) => "a record",
        }
    }

    pub fn as_sequence(&self) -> Option<&[DataValue]> {
        match self {
            DataValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            DataValue::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&Arc<Vec<u8>>> {
        match self {
            DataValue::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($t:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(impl From<$t> for DataValue {
            fn from(v: $t) -> Self {
                DataValue::$variant(v as $target)
            }
        })*
    };
}

impl_from!(
    i32 => Int as i64,
    i64 => Int as i64,
    u32 => UInt as u64,
    u64 => UInt as u64,
    usize => UInt as u64,
    f32 => Float as f64,
    f64 => Float as f64,
);

impl From<bool> for DataValue {
    fn from(v: bool) -> Self {
        DataValue::Bool(v)
    }
}

impl From<&str> for DataValue {
    fn from(v: &str) -> Self {
        DataValue::Text(v.to_string())
    }
}

impl From<String> for DataValue {
    fn from(v: String) -> Self {
        DataValue::Text(v)
    }
}

impl From<Record> for DataValue {
    fn from(v: Record) -> Self {
        DataValue::Record(v)
    }
}

impl From<Vec<DataValue>> for DataValue {
    fn from(v: Vec<DataValue>) -> Self {
        DataValue::Sequence(v)
    }
}

impl<T: Into<DataValue>> From<Option<T>> for DataValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(DataValue::Null, Into::into)
    }
}

/// JSON objects become records named `Object`.
impl From<serde_json::Value> for DataValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => DataValue::Null,
            Value::Bool(b) => DataValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    DataValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    DataValue::UInt(u)
                } else {
                    DataValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => DataValue::Text(s),
            Value::Array(items) => DataValue::Sequence(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                let mut record = Record::new(Record::JSON_TYPE_NAME);
                for (name, value) in map {
                    record.insert(name, value.into());
                }
                DataValue::Record(record)
            }
        }
    }
}

/// A named, flat set of fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    type_name: String,
    fields: Vec<(String, DataValue)>,
}

impl Record {
    pub const JSON_TYPE_NAME: &'static str = "Object";

    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<DataValue>) -> Self {
        self.insert(name, value.into());
        self
    }

    /// Sets a field, replacing an existing field of the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, value: DataValue) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn get(&self, name: &str) -> Option<&DataValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &DataValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }
}

/// Formatter lookup key. Keys form a small hierarchy rooted at `Any`:
/// a named record type derives from `Record`, and `Integer`/`Float` derive from `Number`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKey {
    Any,
    Null,
    Boolean,
    Number,
    Integer,
    Float,
    Text,
    Bytes,
    Sequence,
    Record,
    Named(String),
}

impl TypeKey {
    pub fn named(name: impl Into<String>) -> Self {
        TypeKey::Named(name.into())
    }

    pub fn parent(&self) -> Option<TypeKey> {
        match self {
            TypeKey::Any => None,
            TypeKey::Named(_) => Some(TypeKey::Record),
            TypeKey::Integer | TypeKey::Float => Some(TypeKey::Number),
            TypeKey::Null
            | TypeKey::Boolean
            | TypeKey::Number
            | TypeKey::Text
            | TypeKey::Bytes
            | TypeKey::Sequence
            | TypeKey::Record => Some(TypeKey::Any),
        }
    }

    /// This key followed by its ancestors, most derived first.
    pub fn lineage(&self) -> Vec<TypeKey> {
        let mut chain = vec![self.clone()];
        while let Some(parent) = chain.last().and_then(TypeKey::parent) {
            chain.push(parent);
        }
        chain
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKey::Named(name) => f.write_str(name),
            other => write!(f, "{:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lineage() {
        assert_eq!(
            TypeKey::named("Invoice").lineage(),
            vec![TypeKey::named("Invoice"), TypeKey::Record, TypeKey::Any]
        );
        assert_eq!(
            TypeKey::Integer.lineage(),
            vec![TypeKey::Integer, TypeKey::Number, TypeKey::Any]
        );
        assert_eq!(TypeKey::Any.lineage(), vec![TypeKey::Any]);
    }

    #[test]
    fn test_from_json() {
        let value = DataValue::from(json!({
            "Name": "Widget",
            "Qty": 3,
            "Price": 2.5,
            "Tags": ["a", "b"],
            "Discount": null
        }));
        let record = value.as_record().unwrap();
        assert_eq!(record.type_name(), "Object");
        assert_eq!(record.get("Name"), Some(&DataValue::Text("Widget".into())));
        assert_eq!(record.get("Qty"), Some(&DataValue::Int(3)));
        assert_eq!(record.get("Price"), Some(&DataValue::Float(2.5)));
        assert_eq!(record.get("Discount"), Some(&DataValue::Null));
        assert_eq!(record.get("Tags").and_then(|t| t.as_sequence()).map(|s| s.len()), Some(2));
    }

    #[test]
    fn test_record_insert_replaces() {
        let mut record = Record::new("Line").with_field("Qty", 1);
        record.insert("Qty", DataValue::from(2));
        assert_eq!(record.fields().count(), 1);
        assert_eq!(record.get("Qty"), Some(&DataValue::Int(2)));
    }

    #[test]
    fn test_type_keys() {
        assert_eq!(DataValue::from(7u32).type_key(), TypeKey::Integer);
        assert_eq!(DataValue::from(1.5).type_key(), TypeKey::Float);
        assert_eq!(
            DataValue::from(Record::new("Customer")).type_key(),
            TypeKey::named("Customer")
        );
        assert_eq!(DataValue::from(None::<i32>), DataValue::Null);
    }
}
