use crate::error::BindingError;
use crate::value::{DataValue, Record};
use std::collections::HashMap;

/// The flat field-name table of the bound object. One level only; no nested paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyMap {
    values: HashMap<String, DataValue>,
}

impl PropertyMap {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reads the fields of the bound object. No object, or null, yields an empty map.
    pub fn from_data(data: Option<&DataValue>) -> Result<Self, BindingError> {
        match data {
            None | Some(DataValue::Null) => Ok(Self::empty()),
            Some(DataValue::Record(record)) => Ok(Self::from_record(record)),
            Some(other) => Err(BindingError::NotARecord(other.kind_name())),
        }
    }

    pub fn from_record(record: &Record) -> Self {
        let values = record
            .fields()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Result<&DataValue, BindingError> {
        self.values
            .get(name)
            .ok_or_else(|| BindingError::PropertyNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
