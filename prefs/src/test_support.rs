use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::backend::{Context, PersistenceBackend};
use crate::preference::{Preference, StoredPreference};
use crate::presentation::DocumentRoot;

/// Root element double that counts every write.
#[derive(Debug, Default)]
pub struct MemoryRoot {
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    pub style: BTreeMap<String, String>,
    pub writes: usize,
}

impl MemoryRoot {
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }
}

impl DocumentRoot for MemoryRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.writes += 1;
        self.attributes.insert(name.to_owned(), value.to_owned());
    }

    fn replace_class(&mut self, remove: &[&str], add: &str) {
        self.writes += 1;
        for token in remove {
            self.classes.remove(*token);
        }
        self.classes.insert(add.to_owned());
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        self.writes += 1;
        self.style.insert(name.to_owned(), value.to_owned());
    }
}

/// Backend double with a fixed read value and a shared write log.
pub struct ScriptedBackend {
    pub context: Context,
    pub stored: StoredPreference,
    pub writes: Rc<RefCell<Vec<Preference>>>,
}

impl ScriptedBackend {
    pub fn client(stored: StoredPreference) -> Self {
        Self { context: Context::Client, stored, writes: Rc::default() }
    }
}

impl PersistenceBackend for ScriptedBackend {
    fn context(&self) -> Context {
        self.context
    }

    fn read(&self) -> StoredPreference {
        self.stored
    }

    fn write(&mut self, preference: &Preference) {
        self.writes.borrow_mut().push(*preference);
        self.stored = (*preference).into();
    }
}
