use crate::item::{FormEntry, FormItem};
use crate::registry::{BindRequest, InputRegistry};
use crate::scope;

/// Walks a form item list and projects it to host elements.
///
/// The renderer is a pure projection: identical inputs (item list, registry,
/// external form state read by the binders) produce structurally identical
/// output, and rendering itself performs no side effects. Hosts re-run it on
/// every state change.
pub struct FormRenderer<E> {
    registry: Option<InputRegistry<E>>,
    spacer: Box<dyn Fn() -> E>,
    row_wrapper: Option<Box<dyn Fn(Vec<E>) -> E>>,
    column_wrapper: Option<Box<dyn Fn(E) -> E>>,
}

impl<E: 'static> FormRenderer<E> {
    /// `spacer` is invoked once after every rendered entry, the last one
    /// included.
    pub fn new(spacer: impl Fn() -> E + 'static) -> Self {
        Self {
            registry: None,
            spacer: Box::new(spacer),
            row_wrapper: None,
            column_wrapper: None,
        }
    }

    /// Explicit registry, consulted when a tag is absent from the ambient
    /// one. Ambient entries win on collision.
    pub fn with_registry(mut self, registry: InputRegistry<E>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Wraps the member elements of each row into one element. Without it,
    /// row members pass through into the output unchanged.
    pub fn with_row_wrapper(mut self, wrapper: impl Fn(Vec<E>) -> E + 'static) -> Self {
        self.row_wrapper = Some(Box::new(wrapper));
        self
    }

    /// Wraps each row member element individually. Without it, members are
    /// left unwrapped.
    pub fn with_column_wrapper(mut self, wrapper: impl Fn(E) -> E + 'static) -> Self {
        self.column_wrapper = Some(Box::new(wrapper));
        self
    }

    pub fn render(&self, entries: &[FormEntry<E>]) -> Vec<E> {
        let registry = self.effective_registry();
        tracing::trace!(
            entries = entries.len(),
            binders = registry.len(),
            "rendering form item list"
        );

        let mut output = Vec::new();
        for (index, entry) in entries.iter().enumerate() {
            // Fallback hint: the first field of the following top-level
            // entry, rows flattened.
            let fallback = entries.get(index + 1).and_then(FormEntry::leading_name);
            match entry {
                FormEntry::Item(item) => {
                    if let Some(element) = bind_item(item, fallback, &registry) {
                        output.push(element);
                    }
                }
                FormEntry::Row(members) => {
                    let mut columns = Vec::with_capacity(members.len());
                    for (position, member) in members.iter().enumerate() {
                        let next_name = members
                            .get(position + 1)
                            .and_then(FormItem::name)
                            .or(fallback);
                        let Some(element) = bind_item(member, next_name, &registry) else {
                            continue;
                        };
                        match &self.column_wrapper {
                            Some(wrap) => columns.push(wrap(element)),
                            None => columns.push(element),
                        }
                    }
                    match &self.row_wrapper {
                        Some(wrap) => output.push(wrap(columns)),
                        None => output.extend(columns),
                    }
                }
            }
            output.push((self.spacer)());
        }
        output
    }

    fn effective_registry(&self) -> InputRegistry<E> {
        let mut merged = self.registry.clone().unwrap_or_default();
        if let Some(ambient) = scope::current::<E>() {
            merged.extend(ambient);
        }
        merged
    }
}

fn bind_item<E>(
    item: &FormItem<E>,
    next_name: Option<&str>,
    registry: &InputRegistry<E>,
) -> Option<E> {
    match item {
        FormItem::Custom(custom) => Some(custom.render()),
        FormItem::Field(field) => match registry.get(&field.input) {
            Some(binder) => Some(binder.bind(BindRequest {
                name: &field.name,
                props: &field.props,
                next_name,
                inner: field.inner.as_ref(),
            })),
            None => {
                tracing::debug!(
                    input = %field.input,
                    name = %field.name,
                    "no binder registered for input tag, skipping slot"
                );
                None
            }
        },
    }
}
