//! Rosetta - character k-gram language identification
//!
//! Profiles a text by counting its character k-grams, normalizes the counts
//! to a unit vector, and picks the known language whose profile has the
//! highest cosine similarity with it.
//!
//! ```
//! use rosetta::corpus::{Corpus, CorpusSet};
//! use rosetta::profile::Profile;
//! use rosetta::similarity::guess_language;
//!
//! let corpora: CorpusSet = [
//!     Corpus::new("English", Profile::from([("the", 1.0)])),
//!     Corpus::new("French", Profile::from([("le", 1.0)])),
//! ]
//! .into_iter()
//! .collect();
//!
//! let text = Profile::from([("the", 1.0)]);
//! assert_eq!(guess_language(&text, &corpora).unwrap(), "English");
//! ```

pub mod config;
pub mod corpus;
pub mod profile;
pub mod similarity;
