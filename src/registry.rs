use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::item::InnerItem;

/// Argument bundle handed to a binder for one field slot.
#[derive(Debug, Clone, Copy)]
pub struct BindRequest<'a> {
    pub name: &'a str,
    pub props: &'a Value,
    /// Name of the field that logically follows this one, when there is one.
    /// Binders use it to wire a submit/confirm gesture to a focus move.
    pub next_name: Option<&'a str>,
    pub inner: Option<&'a InnerItem>,
}

/// Rendering/wiring logic for one input type tag: connects a named slot of
/// external form state to a concrete widget of the host's element type.
pub trait InputBinder<E> {
    fn bind(&self, request: BindRequest<'_>) -> E;
}

impl<E, F> InputBinder<E> for F
where
    F: Fn(BindRequest<'_>) -> E,
{
    fn bind(&self, request: BindRequest<'_>) -> E {
        self(request)
    }
}

/// Insertion-ordered mapping from input type tag to binder. Contents are not
/// validated on registration; an unknown tag surfaces only at render time as
/// a silently skipped slot.
pub struct InputRegistry<E> {
    binders: IndexMap<String, Arc<dyn InputBinder<E>>>,
}

impl<E> InputRegistry<E> {
    pub fn new() -> Self {
        Self {
            binders: IndexMap::new(),
        }
    }

    pub fn register(&mut self, tag: impl Into<String>, binder: impl InputBinder<E> + 'static) {
        self.binders.insert(tag.into(), Arc::new(binder));
    }

    pub fn with(mut self, tag: impl Into<String>, binder: impl InputBinder<E> + 'static) -> Self {
        self.register(tag, binder);
        self
    }

    pub fn get(&self, tag: &str) -> Option<&dyn InputBinder<E>> {
        self.binders.get(tag).map(|binder| binder.as_ref())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.binders.contains_key(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.binders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.binders.len()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.binders.keys().map(String::as_str)
    }

    /// Folds `other` into this registry; entries of `other` replace existing
    /// ones on tag collision.
    pub fn extend(&mut self, other: InputRegistry<E>) {
        self.binders.extend(other.binders);
    }
}

impl<E> Default for InputRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for InputRegistry<E> {
    fn clone(&self) -> Self {
        Self {
            binders: self.binders.clone(),
        }
    }
}

impl<E> fmt::Debug for InputRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputRegistry")
            .field("tags", &self.binders.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(tag: &'static str) -> impl Fn(BindRequest<'_>) -> String {
        move |request| format!("{tag}:{}", request.name)
    }

    #[test]
    fn registers_closures_and_preserves_order() {
        let registry = InputRegistry::new()
            .with("text", tagged("text"))
            .with("email", tagged("email"))
            .with("password", tagged("password"));
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.tags().collect::<Vec<_>>(),
            vec!["text", "email", "password"]
        );
        assert!(registry.contains("email"));
        assert!(!registry.contains("radio"));
    }

    #[test]
    fn bind_receives_the_request() {
        let registry = InputRegistry::new().with("text", tagged("text"));
        let binder = registry.get("text").expect("registered tag");
        let rendered = binder.bind(BindRequest {
            name: "username",
            props: &serde_json::Value::Null,
            next_name: None,
            inner: None,
        });
        assert_eq!(rendered, "text:username");
    }

    #[test]
    fn extend_replaces_colliding_tags() {
        let mut base = InputRegistry::new()
            .with("text", tagged("base"))
            .with("checkbox", tagged("checkbox"));
        let overlay = InputRegistry::new().with("text", tagged("overlay"));
        base.extend(overlay);

        let binder = base.get("text").expect("text tag");
        let rendered = binder.bind(BindRequest {
            name: "bio",
            props: &serde_json::Value::Null,
            next_name: None,
            inner: None,
        });
        assert_eq!(rendered, "overlay:bio");
        assert_eq!(base.len(), 2);
    }
}
