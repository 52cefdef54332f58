use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A nested companion field forwarded opaquely to the binder of its parent
/// item (e.g. the unit selector that renders inside a quantity input).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InnerItem {
    pub name: String,
    #[serde(default)]
    pub props: Value,
}

impl InnerItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            props: Value::Null,
        }
    }

    pub fn with_props(mut self, props: Value) -> Self {
        self.props = props;
        self
    }
}

/// One bindable field: `name` is the join key into the host's form state,
/// `input` is the registry type tag, `props` travels untouched to the binder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldItem {
    pub name: String,
    pub input: String,
    #[serde(default)]
    pub props: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner: Option<InnerItem>,
}

impl FieldItem {
    pub fn new(name: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            props: Value::Null,
            inner: None,
        }
    }

    pub fn with_props(mut self, props: Value) -> Self {
        self.props = props;
        self
    }

    pub fn with_inner(mut self, inner: InnerItem) -> Self {
        self.inner = Some(inner);
        self
    }
}

/// Escape hatch: a slot rendered by calling the host back directly, never
/// resolved against the input registry.
pub struct CustomItem<E> {
    render: Arc<dyn Fn() -> E>,
}

impl<E> CustomItem<E> {
    pub fn new(render: impl Fn() -> E + 'static) -> Self {
        Self {
            render: Arc::new(render),
        }
    }

    pub fn render(&self) -> E {
        (self.render)()
    }
}

impl<E> Clone for CustomItem<E> {
    fn clone(&self) -> Self {
        Self {
            render: Arc::clone(&self.render),
        }
    }
}

impl<E> fmt::Debug for CustomItem<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomItem").finish_non_exhaustive()
    }
}

/// One form item: either a registry-bound field or a custom render callback.
pub enum FormItem<E> {
    Field(FieldItem),
    Custom(CustomItem<E>),
}

impl<E> FormItem<E> {
    pub fn custom(render: impl Fn() -> E + 'static) -> Self {
        Self::Custom(CustomItem::new(render))
    }

    /// The field name, when this item has one. Custom items are anonymous.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Field(field) => Some(&field.name),
            Self::Custom(_) => None,
        }
    }
}

impl<E> From<FieldItem> for FormItem<E> {
    fn from(field: FieldItem) -> Self {
        Self::Field(field)
    }
}

impl<E> Clone for FormItem<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Field(field) => Self::Field(field.clone()),
            Self::Custom(custom) => Self::Custom(custom.clone()),
        }
    }
}

impl<E> fmt::Debug for FormItem<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => f.debug_tuple("Field").field(field).finish(),
            Self::Custom(custom) => f.debug_tuple("Custom").field(custom).finish(),
        }
    }
}

/// One top-level slot of a form item list: a single item, or a row of items
/// sharing one visual line.
pub enum FormEntry<E> {
    Item(FormItem<E>),
    Row(Vec<FormItem<E>>),
}

impl<E> FormEntry<E> {
    pub fn row(members: impl IntoIterator<Item = FormItem<E>>) -> Self {
        Self::Row(members.into_iter().collect())
    }

    /// Name of the first field reachable from this entry; used as the
    /// next-field hint for the preceding entry.
    pub(crate) fn leading_name(&self) -> Option<&str> {
        match self {
            Self::Item(item) => item.name(),
            Self::Row(members) => members.first().and_then(FormItem::name),
        }
    }
}

impl<E> From<FormItem<E>> for FormEntry<E> {
    fn from(item: FormItem<E>) -> Self {
        Self::Item(item)
    }
}

impl<E> From<FieldItem> for FormEntry<E> {
    fn from(field: FieldItem) -> Self {
        Self::Item(FormItem::Field(field))
    }
}

impl<E> Clone for FormEntry<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Item(item) => Self::Item(item.clone()),
            Self::Row(members) => Self::Row(members.clone()),
        }
    }
}

impl<E> fmt::Debug for FormEntry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item(item) => f.debug_tuple("Item").field(item).finish(),
            Self::Row(members) => f.debug_tuple("Row").field(members).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn field_item_deserializes_with_default_props() {
        let item: FieldItem =
            serde_json::from_value(json!({"name": "email", "input": "email"}))
                .expect("minimal item");
        assert_eq!(item.name, "email");
        assert_eq!(item.input, "email");
        assert_eq!(item.props, Value::Null);
        assert!(item.inner.is_none());
    }

    #[test]
    fn field_item_round_trips_inner_item() {
        let item = FieldItem::new("amount", "number")
            .with_props(json!({"label": "Amount"}))
            .with_inner(InnerItem::new("unit").with_props(json!({"options": ["kg", "g"]})));
        let value = serde_json::to_value(&item).expect("serialize");
        let back: FieldItem = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, item);
    }

    #[test]
    fn leading_name_flattens_rows_and_skips_custom_items() {
        let single: FormEntry<String> = FieldItem::new("email", "email").into();
        assert_eq!(single.leading_name(), Some("email"));

        let row: FormEntry<String> = FormEntry::row([
            FieldItem::new("first", "text").into(),
            FieldItem::new("last", "text").into(),
        ]);
        assert_eq!(row.leading_name(), Some("first"));

        let custom_led: FormEntry<String> =
            FormEntry::row([FormItem::custom(|| "divider".to_string())]);
        assert_eq!(custom_led.leading_name(), None);
    }
}
