#![deny(rust_2018_idioms)]

//! Headless form building: a declarative list of form item descriptors is
//! projected onto whatever input widgets the host application has
//! registered, with row grouping, spacer interleaving and next-field focus
//! hints. The crate never interprets the host's element type and ships no
//! widgets of its own.
//!
//! ```
//! use formui::{BindRequest, FieldItem, FormEntry, FormRenderer, InputRegistry};
//!
//! let registry: InputRegistry<String> = InputRegistry::new()
//!     .with("text", |request: BindRequest<'_>| format!("[{}]", request.name));
//!
//! let items: Vec<FormEntry<String>> = vec![
//!     FieldItem::new("email", "text").into(),
//!     FieldItem::new("password", "text").into(),
//! ];
//!
//! let output = FormRenderer::new(|| "--".to_string())
//!     .with_registry(registry)
//!     .render(&items);
//! assert_eq!(output, vec!["[email]", "--", "[password]", "--"]);
//! ```

mod item;
mod parser;
mod registry;
mod render;
pub mod scope;
mod state;

pub use item::{CustomItem, FieldItem, FormEntry, FormItem, InnerItem};
pub use parser::parse_entries;
pub use registry::{BindRequest, InputBinder, InputRegistry};
pub use render::FormRenderer;
pub use scope::RegistryScope;
pub use state::{FormStateProvider, MemoryFormState};

pub mod prelude {
    pub use super::{
        BindRequest, FieldItem, FormEntry, FormItem, FormRenderer, FormStateProvider, InnerItem,
        InputBinder, InputRegistry, MemoryFormState, parse_entries, scope,
    };
}
