//! Boolean togglers.
//!
//! A [`Toggler`] is bound to exactly one boolean cell. Calling it with no
//! explicit value flips the cell; with `Some(v)` it stores `v` as is.
//!
//! ```rust
//! use duet_core::*;
//!
//! // owning: the toggler creates the cell
//! let (open, toggle_open) = use_toggle(false);
//! toggle_open.toggle();
//! assert!(open.get());
//!
//! // adapter: the caller keeps the cell
//! let dark = signal(true);
//! let toggle_dark = toggle_from(dark.clone());
//! toggle_dark.toggle();
//! assert!(!dark.get());
//! ```

use std::fmt;
use std::rc::Rc;

use crate::observable::Observable;
use crate::signal::Signal;

#[derive(Clone)]
pub struct Toggler {
    cell: Rc<dyn Observable<bool>>,
}

impl Toggler {
    /// Adapter mode: flips `cell` in place, no new cell is created.
    pub fn adapt(cell: impl Observable<bool> + 'static) -> Self {
        Self {
            cell: Rc::new(cell),
        }
    }

    /// Owning mode: a fresh cell starting at `initial`, plus its toggler.
    pub fn owned(initial: bool) -> (Signal<bool>, Self) {
        let cell = Signal::new(initial);
        let toggler = Self::adapt(cell.clone());
        (cell, toggler)
    }

    /// `None` flips, `Some(v)` sets `v`. Returns the value now stored.
    pub fn call(&self, explicit: Option<bool>) -> bool {
        let next = match explicit {
            Some(v) => v,
            None => !self.cell.get_untracked(),
        };
        log::trace!("toggle: explicit={explicit:?} -> {next}");
        self.cell.set(next);
        next
    }

    pub fn toggle(&self) -> bool {
        self.call(None)
    }

    pub fn set(&self, value: bool) -> bool {
        self.call(Some(value))
    }

    pub fn get(&self) -> bool {
        self.cell.get()
    }

    /// Click callback performing a plain flip.
    pub fn handler(&self) -> Rc<dyn Fn()> {
        let this = self.clone();
        Rc::new(move || {
            this.toggle();
        })
    }
}

/// A toggler over a private cell starting at `false`. The cell is only
/// reachable through the toggler; use [`toggle_cell`] to keep a handle.
impl Default for Toggler {
    fn default() -> Self {
        Self::owned(false).1
    }
}

impl fmt::Debug for Toggler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toggler")
            .field("value", &self.cell.get_untracked())
            .finish()
    }
}

pub fn toggle_from(cell: impl Observable<bool> + 'static) -> Toggler {
    Toggler::adapt(cell)
}

pub fn use_toggle(initial: bool) -> (Signal<bool>, Toggler) {
    Toggler::owned(initial)
}

/// `use_toggle(false)`: the owned cell and its toggler.
pub fn toggle_cell() -> (Signal<bool>, Toggler) {
    Toggler::owned(false)
}
