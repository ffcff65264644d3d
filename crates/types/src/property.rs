//! The optional-property container that every cascading slot is built on.
//!
//! A `Property<T>` remembers whether a value was explicitly assigned. Rendering
//! code never reads an unset slot as a zero value: it either takes the value
//! from an override layer, an inherited layer, or an explicit default.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Property<T> {
    value: Option<T>,
}

impl<T> Default for Property<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T> Property<T> {
    /// An unset slot.
    pub const fn unset() -> Self {
        Self { value: None }
    }

    /// A slot that is already set to `value`.
    pub fn with(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Assigns a value. Once set, a slot stays set; a later call replaces the value.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn value_or(&self, default: T) -> T
    where
        T: Clone,
    {
        self.value.clone().unwrap_or(default)
    }

    /// Returns this slot if it is set, otherwise `base`.
    ///
    /// This is the single merge step of the cascade: the receiver is the
    /// higher-priority layer.
    pub fn over(&self, base: &Property<T>) -> Property<T>
    where
        T: Clone,
    {
        if self.is_set() { self.clone() } else { base.clone() }
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T> From<T> for Property<T> {
    fn from(value: T) -> Self {
        Self::with(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_by_default() {
        let p: Property<f32> = Property::default();
        assert!(!p.is_set());
        assert_eq!(p.get(), None);
        assert_eq!(p.value_or(3.0), 3.0);
    }

    #[test]
    fn test_set_flips_flag() {
        let mut p = Property::unset();
        p.set(0.0_f32);
        assert!(p.is_set());
        assert_eq!(p.get(), Some(&0.0));
        p.set(2.0);
        assert_eq!(p.value_or(9.0), 2.0);
    }

    #[test]
    fn test_over_prefers_set_layer() {
        let local = Property::with(12.0_f32);
        let named = Property::with(8.0_f32);
        let unset = Property::<f32>::unset();

        assert_eq!(local.over(&named).get(), Some(&12.0));
        assert_eq!(unset.over(&named).get(), Some(&8.0));
        assert!(!unset.over(&Property::unset()).is_set());
    }
}
