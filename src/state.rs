use indexmap::{IndexMap, IndexSet};
use serde_json::Value;

/// Contract binders rely on to reach the host's form state.
///
/// The host owns the state; this crate never reads or writes it on its own.
/// Binders typically capture a handle to an implementation and forward user
/// interaction into it.
pub trait FormStateProvider {
    /// Current value for `name`, if one has been set.
    fn value(&self, name: &str) -> Option<&Value>;

    /// Externally computed validation message for `name`, if any. This crate
    /// performs no validation itself.
    fn error(&self, name: &str) -> Option<&str>;

    /// Change handler: record a new value for `name`.
    fn set_value(&mut self, name: &str, value: Value);

    /// Blur handler. Default is a no-op for hosts that do not track it.
    fn notify_blur(&mut self, name: &str) {
        let _ = name;
    }

    /// Move input focus to `name`; the target of the next-field hint.
    fn focus(&mut self, name: &str);

    fn focused(&self) -> Option<&str>;
}

/// Insertion-ordered in-memory form state, for tests, demos and hosts
/// without a store of their own.
#[derive(Debug, Clone, Default)]
pub struct MemoryFormState {
    values: IndexMap<String, Value>,
    errors: IndexMap<String, String>,
    touched: IndexSet<String>,
    focused: Option<String>,
}

impl MemoryFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, name: impl Into<String>, value: Value) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    pub fn set_error(&mut self, name: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(name.into(), message.into());
    }

    pub fn clear_error(&mut self, name: &str) {
        self.errors.shift_remove(name);
    }

    /// Whether `name` has received a blur since the state was created.
    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }
}

impl FormStateProvider for MemoryFormState {
    fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    fn set_value(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    fn notify_blur(&mut self, name: &str) {
        self.touched.insert(name.to_string());
    }

    fn focus(&mut self, name: &str) {
        self.focused = Some(name.to_string());
    }

    fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }
}
