//! Type-keyed formatter registry.

use crate::error::BindingError;
use crate::value::{DataValue, TypeKey};
use std::fmt;
use std::sync::Arc;

/// Turns values of one [`TypeKey`] (and its sub-keys) into display text.
pub trait PropertyFormatter: Send + Sync {
    fn type_key(&self) -> TypeKey;

    /// Among supertype matches, higher priority wins.
    fn priority(&self) -> i32 {
        0
    }

    fn format(&self, value: &DataValue) -> Result<String, BindingError>;
}

/// A formatter backed by a plain function.
pub struct FnFormatter<F> {
    key: TypeKey,
    priority: i32,
    f: F,
}

impl<F> FnFormatter<F> {
    pub fn new(key: TypeKey, f: F) -> Self
    where
        F: Fn(&DataValue) -> String + Send + Sync,
    {
        Self { key, priority: 0, f }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl<F> PropertyFormatter for FnFormatter<F>
where
    F: Fn(&DataValue) -> String + Send + Sync,
{
    fn type_key(&self) -> TypeKey {
        self.key.clone()
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn format(&self, value: &DataValue) -> Result<String, BindingError> {
        Ok((self.f)(value))
    }
}

/// Resolves the formatter for a value.
///
/// A formatter registered for the value's exact key wins outright. Otherwise
/// the candidates are formatters registered for any ancestor key; the one with
/// the highest priority wins, then the most derived key, then the most recently
/// registered. No candidate is a [`BindingError::MissingFormatter`].
#[derive(Clone, Default)]
pub struct FormatterRegistry {
    formatters: Vec<Arc<dyn PropertyFormatter>>,
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("formatters", &self.formatters.len())
            .finish()
    }
}

impl FormatterRegistry {
    /// An empty registry: every value is unformattable until something is registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Display formatters for null, booleans, numbers and text.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register_fn(TypeKey::Null, |_| String::new());
        registry.register_fn(TypeKey::Boolean, |v| match v {
            DataValue::Bool(b) => b.to_string(),
            _ => String::new(),
        });
        registry.register_fn(TypeKey::Integer, |v| match v {
            DataValue::Int(i) => i.to_string(),
            DataValue::UInt(u) => u.to_string(),
            _ => String::new(),
        });
        registry.register_fn(TypeKey::Float, |v| match v {
            DataValue::Float(f) => f.to_string(),
            _ => String::new(),
        });
        registry.register_fn(TypeKey::Text, |v| match v {
            DataValue::Text(s) => s.clone(),
            _ => String::new(),
        });
        registry
    }

    pub fn register(&mut self, formatter: impl PropertyFormatter + 'static) {
        self.register_shared(Arc::new(formatter));
    }

    pub fn register_shared(&mut self, formatter: Arc<dyn PropertyFormatter>) {
        log::trace!(
            "Registering formatter for {:?} at priority {}",
            formatter.type_key(),
            formatter.priority()
        );
        self.formatters.push(formatter);
    }

    /// Registers an ad-hoc function at priority 0.
    pub fn register_fn<F>(&mut self, key: TypeKey, f: F)
    where
        F: Fn(&DataValue) -> String + Send + Sync + 'static,
    {
        self.register(FnFormatter::new(key, f));
    }

    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }

    pub fn resolve(&self, key: &TypeKey) -> Option<&dyn PropertyFormatter> {
        let lineage = key.lineage();

        // (priority, -depth, registration index) ranks candidates; exact matches are depth 0
        // and are considered on their own first.
        let best_at = |accept: &dyn Fn(usize) -> bool| {
            self.formatters
                .iter()
                .enumerate()
                .filter_map(|(index, f)| {
                    let depth = lineage.iter().position(|k| *k == f.type_key())?;
                    accept(depth).then_some((f.priority(), -(depth as i64), index, f))
                })
                .max_by_key(|(priority, depth, index, _)| (*priority, *depth, *index))
                .map(|(_, _, _, f)| f.as_ref())
        };

        best_at(&|depth| depth == 0).or_else(|| best_at(&|depth| depth > 0))
    }

    pub fn format(&self, value: &DataValue) -> Result<String, BindingError> {
        let key = value.type_key();
        match self.resolve(&key) {
            Some(formatter) => formatter.format(value),
            None => Err(BindingError::MissingFormatter(key)),
        }
    }
}
