/// An owned key-value pair stored in the table
pub struct Entry {
    pub(crate) key: String,
    pub(crate) value: String,
}

impl Entry {
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}
impl Eq for Entry {}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.key, self.value)
    }
}

/// One bucket of the table
///
/// A removed entry leaves a `Tombstone` behind, so probe sequences
/// passing through the slot keep going instead of stopping early.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) enum Slot {
    #[default]
    Empty,
    Tombstone,
    Occupied(Entry),
}

impl Slot {
    pub(crate) fn entry(&self) -> Option<&Entry> {
        match self {
            Slot::Occupied(e) => Some(e),
            _ => None,
        }
    }

    /// Takes the entry out, leaving a tombstone in its place
    pub(crate) fn bury(&mut self) -> Option<Entry> {
        match std::mem::replace(self, Slot::Tombstone) {
            Slot::Occupied(e) => Some(e),
            other => {
                *self = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::Slot;
    use crate::entry;

    #[test]
    fn bury() {
        let mut s = Slot::Occupied(entry!("foo", "bar"));
        assert_eq!(s.entry(), Some(&entry!("foo", "bar")));

        assert_eq!(s.bury(), Some(entry!("foo", "bar")));
        assert_eq!(s, Slot::Tombstone);
        assert_eq!(s.entry(), None);

        // burying twice is a no-op
        assert_eq!(s.bury(), None);
        assert_eq!(s, Slot::Tombstone);

        let mut s = Slot::Empty;
        assert_eq!(s.bury(), None);
        assert_eq!(s, Slot::Empty);
    }

    #[test]
    fn entry_parts() {
        let e = entry!("peti", String::from("is a baby"));
        assert_eq!(e.key(), "peti");
        assert_eq!(e.value(), "is a baby");
        assert_eq!(format!("{e:?}"), "<peti, is a baby>");
        assert_eq!(e.into_parts(), ("peti".to_string(), "is a baby".to_string()));
    }
}
