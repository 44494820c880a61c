#![allow(dead_code)]

use caseless_dict::CaseInsensitiveDict;

/// Collects the three construction sources a dictionary can be seeded from
/// and applies them in order: mapping, then pairs, then named entries.
#[derive(Default)]
pub struct DictBuilder {
    mapping: Vec<(String, i32)>,
    pairs: Vec<(String, i32)>,
    named: Vec<(String, i32)>,
}

impl DictBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mapping<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        self.mapping = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }

    pub fn pairs<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        self.pairs = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }

    pub fn named(mut self, key: impl Into<String>, value: i32) -> Self {
        self.named.push((key.into(), value));
        self
    }

    pub fn build(self) -> CaseInsensitiveDict<String, i32> {
        let DictBuilder {
            mapping,
            pairs,
            named,
        } = self;

        let mut dict: CaseInsensitiveDict<String, i32> = mapping.into_iter().collect();
        dict.update(pairs);
        dict.extend(named);
        dict
    }
}

pub fn dict() -> DictBuilder {
    DictBuilder::new()
}
