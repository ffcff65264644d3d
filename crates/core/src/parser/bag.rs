/// One raw attribute awaiting assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct BagEntry {
    pub name: String,
    pub value: String,
    consumed: bool,
}

impl BagEntry {
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

/// The attributes of one element, in source order.
///
/// Assignment marks entries as consumed; anything left over after every
/// applicable handler ran is an unknown attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    entries: Vec<BagEntry>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(BagEntry {
            name: name.into(),
            value: value.into(),
            consumed: false,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[BagEntry] {
        &self.entries
    }

    pub fn consume(&mut self, index: usize) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.consumed = true;
        }
    }

    /// Returns the value of `name` and marks it consumed.
    pub fn take(&mut self, name: &str) -> Option<String> {
        let entry = self.entries.iter_mut().find(|e| e.name == name)?;
        entry.consumed = true;
        Some(entry.value.clone())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value.as_str())
    }

    pub fn first_unconsumed(&self) -> Option<&BagEntry> {
        self.entries.iter().find(|e| !e.consumed)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = PropertyBag::new();
        for (k, v) in iter {
            bag.push(k, v);
        }
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_marks_consumed() {
        let mut bag: PropertyBag = [("name", "a"), ("value", "b")].into_iter().collect();
        assert_eq!(bag.take("value").as_deref(), Some("b"));
        assert_eq!(bag.first_unconsumed().map(|e| e.name.as_str()), Some("name"));
        bag.consume(0);
        assert!(bag.first_unconsumed().is_none());
        assert_eq!(bag.take("missing"), None);
    }
}
