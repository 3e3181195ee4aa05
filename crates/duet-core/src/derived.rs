//! Derived (computed) cells.
//!
//! A [`Derived`] caches `compute()` in an inner signal and re-runs it
//! through the dependency graph whenever a signal it read changes, so
//! `derived.get() == compute()` holds as soon as a source write returns.

use std::fmt;
use std::rc::Rc;

use crate::effects::Dispose;
use crate::observable::Observable;
use crate::reactive::{self, ObserverId};
use crate::signal::Signal;

type Setter<T> = Rc<dyn Fn(T)>;

pub struct Derived<T: 'static> {
    inner: Rc<DerivedInner<T>>,
}

struct DerivedInner<T: 'static> {
    out: Signal<T>,
    observer: ObserverId,
    setter: Option<Setter<T>>,
}

impl<T: 'static> Drop for DerivedInner<T> {
    fn drop(&mut self) {
        reactive::remove_observer(self.observer);
    }
}

impl<T: Clone + 'static> Derived<T> {
    fn build(compute: Rc<dyn Fn() -> T>, setter: Option<Setter<T>>) -> Self {
        let out = Signal::new(reactive::untracked(|| compute()));
        let out_weak = out.downgrade();

        let observer = reactive::new_observer(move || {
            if let Some(out) = out_weak.upgrade() {
                let v = compute();
                out.set(v);
            }
        });

        // Initial compute under tracking to establish dependencies
        reactive::run_observer_now(observer);

        Self {
            inner: Rc::new(DerivedInner {
                out,
                observer,
                setter,
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.out.get()
    }

    pub fn get_untracked(&self) -> T {
        self.inner.out.get_untracked()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.out.with(f)
    }

    /// Routes `value` through the setter. Read-only cells ignore the write.
    pub fn set(&self, value: T) {
        match &self.inner.setter {
            Some(setter) => setter(value),
            None => log::warn!(
                "write to read-only derived cell (signal {}) ignored",
                self.inner.out.id()
            ),
        }
    }

    pub fn is_writable(&self) -> bool {
        self.inner.setter.is_some()
    }

    pub fn watch(&self, f: impl Fn(&T) + 'static) -> Dispose {
        self.inner.out.watch(f)
    }

    /// Number of signals the last computation read.
    pub fn dependency_count(&self) -> usize {
        reactive::dependency_count(self.inner.observer)
    }
}

impl<T: 'static> Clone for Derived<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Derived")
            .field("out", &self.inner.out)
            .field("writable", &self.inner.setter.is_some())
            .finish()
    }
}

impl<T: Clone + 'static> Observable<T> for Derived<T> {
    fn get(&self) -> T {
        Derived::get(self)
    }
    fn set(&self, value: T) {
        Derived::set(self, value)
    }
    fn get_untracked(&self) -> T {
        Derived::get_untracked(self)
    }
}

/// Read-only derived cell.
pub fn derived<T: Clone + 'static>(compute: impl Fn() -> T + 'static) -> Derived<T> {
    Derived::build(Rc::new(compute), None)
}

/// Derived cell whose writes are redirected through `set`.
pub fn derived_with_setter<T: Clone + 'static>(
    compute: impl Fn() -> T + 'static,
    set: impl Fn(T) + 'static,
) -> Derived<T> {
    Derived::build(Rc::new(compute), Some(Rc::new(set)))
}
