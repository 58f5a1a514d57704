//! Named-selector registry
//!
//! A `Context` maps names to previously-built selectors so that later
//! expressions can refer back to them. The registry is an explicit object:
//! callers own an instance and hand it to whatever consumes it (typically
//! the grammar front-end). It carries no lock; the intended discipline is
//! a single writer with read-mostly use from one evaluation thread, and
//! callers in threaded programs must serialize access themselves.

use ahash::AHashMap;

use crate::ast::{none, Selector};
use crate::error::SelectError;

/// Registry of named selectors
///
/// A name can be registered with a selector, or with an empty marker
/// (`None`) meaning "known, but selects nothing".
#[derive(Debug, Clone, Default)]
pub struct Context {
    entries: AHashMap<String, Option<Selector>>,
}

impl Context {
    /// Create an empty registry.
    pub fn new() -> Self {
        Context::default()
    }

    /// Register a selector (or an empty marker) under a name.
    ///
    /// A later `set` with the same name replaces the earlier entry.
    pub fn set(&mut self, key: impl Into<String>, selector: impl Into<Option<Selector>>) {
        self.entries.insert(key.into(), selector.into());
    }

    /// Look up a named selector.
    ///
    /// Fails with [`SelectError::KeyNotFound`] when the name was never
    /// registered. A name registered with the empty marker yields a fresh
    /// `none` selector.
    pub fn get_selector(&self, key: &str) -> Result<Selector, SelectError> {
        match self.entries.get(key) {
            Some(Some(selector)) => Ok(selector.clone()),
            Some(None) => Ok(none()),
            None => Err(SelectError::KeyNotFound(key.to_string())),
        }
    }

    /// Check if a name is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove one entry, returning its stored value.
    pub fn remove(&mut self, key: &str) -> Option<Option<Selector>> {
        self.entries.remove(key)
    }

    /// Forget every registration.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over registered names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::all;

    fn populated() -> Context {
        let mut ctx = Context::new();
        ctx.set("all", all());
        ctx.set("noSelector", None::<Selector>);
        ctx.set("none", none());
        ctx
    }

    #[test]
    fn test_get_selector_unknown_key_fails() {
        let ctx = populated();
        let err = ctx.get_selector("strangeKey").unwrap_err();
        assert_eq!(err, SelectError::KeyNotFound("strangeKey".to_string()));
    }

    #[test]
    fn test_get_selector_known_key() {
        let ctx = populated();
        assert_eq!(ctx.get_selector("all").unwrap(), all());
        assert_eq!(ctx.get_selector("none").unwrap(), none());
    }

    #[test]
    fn test_get_selector_empty_marker_yields_none() {
        let ctx = populated();
        assert_eq!(ctx.get_selector("noSelector").unwrap(), none());
    }

    #[test]
    fn test_set_replaces() {
        let mut ctx = populated();
        ctx.set("all", none());
        assert_eq!(ctx.get_selector("all").unwrap(), none());
    }

    #[test]
    fn test_clear_forgets_registrations() {
        let mut ctx = populated();
        assert_eq!(ctx.get_selector("all").unwrap(), all());
        ctx.clear();
        assert!(ctx.get_selector("all").is_err());
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_bookkeeping() {
        let mut ctx = populated();
        assert_eq!(ctx.len(), 3);
        assert!(ctx.contains("noSelector"));
        assert!(!ctx.contains("strangeKey"));
        ctx.remove("noSelector");
        assert_eq!(ctx.len(), 2);
        assert!(!ctx.contains("noSelector"));
    }
}
