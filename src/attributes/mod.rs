pub mod dbf;

use std::collections::HashMap;

use crate::core::result::Result;

pub use dbf::{DbfField, DbfTable};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    names: Vec<String>,
    values: HashMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut attributes = Self::new();
        for (name, value) in pairs {
            attributes.insert(name.as_ref(), value);
        }
        attributes
    }

    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let key = name.to_lowercase();
        if self.values.insert(key.clone(), value.into()).is_none() {
            self.names.push(key);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(&name.to_lowercase())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .map(move |name| (name.as_str(), self.values[name].as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

pub trait AttributeSource {
    fn record_count(&self) -> usize;

    fn read_record(&mut self, index: usize) -> Result<Option<Attributes>>;
}
