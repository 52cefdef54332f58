//! Ambient input registries, scoped to a region of the call tree.
//!
//! A host installs its widget set once near the application root with
//! [`install`]; any renderer running beneath that scope picks the registry up
//! without it being threaded through every call. Scopes nest, shadow inner to
//! outer, and tear down when their guard drops.

use std::any::Any;
use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::registry::InputRegistry;

thread_local! {
    static STACK: RefCell<Vec<Rc<dyn Any>>> = const { RefCell::new(Vec::new()) };
}

/// Guard returned by [`install`]; removes its registration on drop.
///
/// Guards must end in reverse order of creation, which holding them as plain
/// locals guarantees. The guard is `!Send`; ambient registration is
/// per-thread.
#[must_use = "the registration ends as soon as the scope guard is dropped"]
pub struct RegistryScope {
    index: usize,
    _not_send: PhantomData<*const ()>,
}

/// Install `registry` as the ambient registry for element type `E` on the
/// current thread, until the returned guard drops.
pub fn install<E: 'static>(registry: InputRegistry<E>) -> RegistryScope {
    let index = STACK.with(|stack| {
        let mut stack = stack.borrow_mut();
        stack.push(Rc::new(registry));
        stack.len() - 1
    });
    tracing::trace!(depth = index + 1, "installed ambient input registry");
    RegistryScope {
        index,
        _not_send: PhantomData,
    }
}

/// The nearest enclosing ambient registry for element type `E`, if any.
///
/// Registries for distinct element types coexist on the stack; lookup only
/// sees entries of the requested type.
pub fn current<E: 'static>() -> Option<InputRegistry<E>> {
    STACK.with(|stack| {
        stack
            .borrow()
            .iter()
            .rev()
            .find_map(|entry| entry.downcast_ref::<InputRegistry<E>>().cloned())
    })
}

impl Drop for RegistryScope {
    fn drop(&mut self) {
        STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            if stack.len() > self.index {
                stack.truncate(self.index);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::{BindRequest, InputRegistry};

    use super::*;

    fn bind(registry: &InputRegistry<String>, tag: &str, name: &str) -> Option<String> {
        let props = serde_json::Value::Null;
        registry.get(tag).map(|binder| {
            binder.bind(BindRequest {
                name,
                props: &props,
                next_name: None,
                inner: None,
            })
        })
    }

    #[test]
    fn nearest_scope_shadows_outer_and_teardown_restores_it() {
        let outer: InputRegistry<String> =
            InputRegistry::new().with("text", |request: BindRequest<'_>| {
                format!("outer:{}", request.name)
            });
        let inner: InputRegistry<String> =
            InputRegistry::new().with("text", |request: BindRequest<'_>| {
                format!("inner:{}", request.name)
            });

        assert!(current::<String>().is_none());
        let _outer = install(outer);
        {
            let _inner = install(inner);
            let ambient = current::<String>().expect("inner scope");
            assert_eq!(bind(&ambient, "text", "bio").as_deref(), Some("inner:bio"));
        }
        let ambient = current::<String>().expect("outer scope");
        assert_eq!(bind(&ambient, "text", "bio").as_deref(), Some("outer:bio"));
        drop(_outer);
        assert!(current::<String>().is_none());
    }

    #[test]
    fn scopes_for_distinct_element_types_do_not_interfere() {
        let strings: InputRegistry<String> =
            InputRegistry::new().with("text", |request: BindRequest<'_>| request.name.to_string());
        let counts: InputRegistry<usize> =
            InputRegistry::new().with("text", |request: BindRequest<'_>| request.name.len());

        let _strings = install(strings);
        let _counts = install(counts);

        let ambient = current::<String>().expect("string registry still visible");
        assert!(ambient.contains("text"));
        let ambient = current::<usize>().expect("count registry visible");
        assert!(ambient.contains("text"));
    }
}
