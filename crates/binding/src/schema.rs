//! Statically declared field accessors for Rust types.
//!
//! A type exposes its fields to templates by implementing [`Bindable`] and
//! returning a [`Schema`] built once:
//!
//! ```
//! use folio_binding::{Bindable, DataValue, Lazy, Schema};
//!
//! struct Line { item: String, qty: u32 }
//!
//! impl Bindable for Line {
//!     fn schema() -> &'static Schema<Self> {
//!         static SCHEMA: Lazy<Schema<Line>> = Lazy::new(|| {
//!             Schema::<Line>::new("Line")
//!                 .field("Item", |l| l.item.as_str().into())
//!                 .field("Qty", |l| l.qty.into())
//!         });
//!         &SCHEMA
//!     }
//! }
//!
//! let value = Line { item: "Bolt".into(), qty: 4 }.to_data();
//! assert_eq!(value.as_record().unwrap().get("Qty"), Some(&DataValue::UInt(4)));
//! ```

use crate::value::{DataValue, Record};

pub type Accessor<T> = fn(&T) -> DataValue;

pub struct Schema<T> {
    type_name: &'static str,
    fields: Vec<(&'static str, Accessor<T>)>,
}

impl<T> Schema<T> {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: &'static str, accessor: Accessor<T>) -> Self {
        self.fields.push((name, accessor));
        self
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    /// Reads every declared field of `value` into a record.
    pub fn record(&self, value: &T) -> Record {
        let mut record = Record::new(self.type_name);
        for (name, accessor) in &self.fields {
            record.insert(*name, accessor(value));
        }
        record
    }
}

pub trait Bindable: Sized + 'static {
    fn schema() -> &'static Schema<Self>;

    fn to_data(&self) -> DataValue {
        DataValue::Record(Self::schema().record(self))
    }

    /// A sequence value for a data-row source.
    fn sequence(items: &[Self]) -> DataValue {
        DataValue::Sequence(items.iter().map(Bindable::to_data).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::TypeKey;
    use once_cell::sync::Lazy;

    struct Product {
        name: String,
        price: f64,
        discontinued: bool,
    }

    impl Bindable for Product {
        fn schema() -> &'static Schema<Self> {
            static SCHEMA: Lazy<Schema<Product>> = Lazy::new(|| {
                Schema::<Product>::new("Product")
                    .field("Name", |p| p.name.clone().into())
                    .field("Price", |p| p.price.into())
                    .field("Discontinued", |p| p.discontinued.into())
            });
            &SCHEMA
        }
    }

    #[test]
    fn test_schema_reads_declared_fields() {
        let product = Product {
            name: "Lamp".into(),
            price: 19.5,
            discontinued: false,
        };
        let value = product.to_data();
        assert_eq!(value.type_key(), TypeKey::named("Product"));

        let record = value.as_record().unwrap();
        assert_eq!(record.get("Name"), Some(&DataValue::from("Lamp")));
        assert_eq!(record.get("Price"), Some(&DataValue::Float(19.5)));
        assert_eq!(record.get("Discontinued"), Some(&DataValue::Bool(false)));
        assert_eq!(
            Product::schema().field_names().collect::<Vec<_>>(),
            vec!["Name", "Price", "Discontinued"]
        );
    }

    #[test]
    fn test_sequence() {
        let items = [
            Product { name: "A".into(), price: 1.0, discontinued: false },
            Product { name: "B".into(), price: 2.0, discontinued: true },
        ];
        let seq = Product::sequence(&items);
        assert_eq!(seq.as_sequence().map(|s| s.len()), Some(2));
    }
}
