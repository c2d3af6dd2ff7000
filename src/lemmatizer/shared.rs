//! A lemmatizer shared between threads.
//!
//! Reads take a shared lock and may run concurrently. Insertions take the
//! exclusive lock, so a lookup never observes a half-inserted word.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::error::Result;
use crate::lemmatizer::lemmatizer::{Lemma, Lemmatizer};

/// Cloneable handle to a lemmatizer behind a read-write lock.
#[derive(Debug)]
pub struct SharedLemmatizer<P> {
    inner: Arc<RwLock<Lemmatizer<P>>>,
}

impl<P> Clone for SharedLemmatizer<P> {
    fn clone(&self) -> Self {
        SharedLemmatizer {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P> SharedLemmatizer<P> {
    pub fn new(lemmatizer: Lemmatizer<P>) -> Self {
        SharedLemmatizer {
            inner: Arc::new(RwLock::new(lemmatizer)),
        }
    }

    /// Borrow the lemmatizer for several reads under one lock.
    pub fn read(&self) -> RwLockReadGuard<'_, Lemmatizer<P>> {
        self.inner.read()
    }

    /// Insert a word, returning the replaced payload.
    pub fn insert(&self, word: &str, payload: P) -> Result<Option<P>> {
        self.inner.write().insert(word, payload)
    }

    pub fn exists<'a>(&self, word: impl Into<Option<&'a str>>) -> Result<bool> {
        self.inner.read().exists(word)
    }

    /// Payload of a stored word, cloned out of the lock.
    pub fn lookup<'a>(&self, word: impl Into<Option<&'a str>>) -> Result<P>
    where
        P: Clone,
    {
        self.inner.read().lookup(word).cloned()
    }

    pub fn lemmatize<'a>(&self, query: impl Into<Option<&'a str>>) -> Result<Lemma<P>>
    where
        P: Clone,
    {
        self.inner.read().lemmatize(query)
    }

    pub fn candidates<'a>(&self, query: impl Into<Option<&'a str>>) -> Result<Vec<Lemma<P>>>
    where
        P: Clone,
    {
        self.inner.read().candidates(query)
    }
}

impl<P> From<Lemmatizer<P>> for SharedLemmatizer<P> {
    fn from(lemmatizer: Lemmatizer<P>) -> Self {
        SharedLemmatizer::new(lemmatizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_readers() {
        let shared: SharedLemmatizer<String> =
            Lemmatizer::from_words(["kitap", "kitaplık", "sakız", "gel"])
                .unwrap()
                .into();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || shared.lemmatize("sakiz").unwrap().word)
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "sakız");
        }
    }

    #[test]
    fn test_insert_is_visible_to_clones() {
        let shared: SharedLemmatizer<String> = Lemmatizer::from_words(["gel"]).unwrap().into();
        let other = shared.clone();

        assert!(!other.exists("git").unwrap());
        shared.insert("git", "git".to_string()).unwrap();
        assert!(other.exists("git").unwrap());
        assert_eq!(other.lookup("git").unwrap(), "git");
        assert_eq!(other.read().trie().len(), 2);
    }
}
