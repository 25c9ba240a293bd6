//! Reference language profiles
//!
//! A [`Corpus`] pairs a language label with its normalized profile. The
//! ranker only ever reads corpora, through a [`CorpusSet`] that keeps them
//! ordered by label so that tie-breaking between languages is stable.

mod loader;

pub use loader::load_corpora;

use crate::profile::Profile;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    pub name: String,
    pub profile: Profile,
}

impl Corpus {
    pub fn new(name: impl Into<String>, profile: Profile) -> Self {
        Self {
            name: name.into(),
            profile,
        }
    }
}

/// Corpora keyed and iterated by label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusSet {
    corpora: BTreeMap<String, Corpus>,
}

impl CorpusSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a corpus, returning the one it replaced if the label was taken.
    pub fn insert(&mut self, corpus: Corpus) -> Option<Corpus> {
        self.corpora.insert(corpus.name.clone(), corpus)
    }

    pub fn get(&self, name: &str) -> Option<&Corpus> {
        self.corpora.get(name)
    }

    pub fn len(&self) -> usize {
        self.corpora.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corpora.is_empty()
    }

    /// Iterate corpora in label order
    pub fn iter(&self) -> impl Iterator<Item = &Corpus> {
        self.corpora.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.corpora.keys().map(String::as_str)
    }
}

impl FromIterator<Corpus> for CorpusSet {
    fn from_iter<I: IntoIterator<Item = Corpus>>(iter: I) -> Self {
        let mut set = CorpusSet::new();
        for corpus in iter {
            set.insert(corpus);
        }
        set
    }
}

impl<'a> IntoIterator for &'a CorpusSet {
    type Item = &'a Corpus;
    type IntoIter = std::collections::btree_map::Values<'a, String, Corpus>;

    fn into_iter(self) -> Self::IntoIter {
        self.corpora.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterates_by_label() {
        let set: CorpusSet = ["Spanish", "English", "French"]
            .into_iter()
            .map(|name| Corpus::new(name, Profile::new()))
            .collect();
        let names: Vec<&str> = set.names().collect();
        assert_eq!(names, vec!["English", "French", "Spanish"]);
    }

    #[test]
    fn test_insert_replaces_same_label() {
        let mut set = CorpusSet::new();
        assert!(set.insert(Corpus::new("English", Profile::new())).is_none());
        let replaced = set.insert(Corpus::new("English", Profile::from([("the", 1.0)])));
        assert_eq!(replaced, Some(Corpus::new("English", Profile::new())));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("English").unwrap().profile.get("the"), Some(1.0));
    }
}
