//! # Signals, togglers and mutex pairs
//!
//! Duet's reactive core is small. There are three layers:
//!
//! - `Signal<T>`: observable, reactive value.
//! - `Derived<T>`: a cell computed from other signals, kept up to date by
//!   the dependency graph.
//! - `Toggler`, `BoolMutex`, `ValueMutex`: state helpers built on top.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use duet_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Reads participate in a dependency graph: when you call `get()` inside a
//! derived cell, future writes recompute that cell synchronously.
//!
//! ```rust
//! use duet_core::*;
//!
//! let first = signal("Jane".to_string());
//! let last = signal("Doe".to_string());
//!
//! let full = derived({
//!     let first = first.clone();
//!     let last = last.clone();
//!     move || format!("{} {}", first.get(), last.get())
//! });
//!
//! assert_eq!(full.get(), "Jane Doe");
//! last.set("Roe".to_string());
//! assert_eq!(full.get(), "Jane Roe");
//! ```
//!
//! ## Togglers and mutex pairs
//!
//! ```rust
//! use duet_core::*;
//!
//! let (fish, bear_paw) = bool_mutex(false);
//! let toggle_fish = toggle_from(fish.clone());
//!
//! toggle_fish.toggle();
//! assert!(fish.get());
//! assert!(!bear_paw.get());
//! ```
//!
//! Writes are synchronous: by the time `set` or `toggle` returns, every
//! subscriber and derived cell has seen the new value. Wrap several writes
//! in `batch` to publish them together.

pub mod derived;
pub mod effects;
pub mod error;
pub mod maybe;
pub mod mutex;
pub mod observable;
pub mod prelude;
pub mod reactive;
pub mod scope;
pub mod signal;
pub mod toggle;


pub use derived::*;
pub use effects::*;
pub use error::*;
pub use maybe::*;
pub use mutex::*;
pub use observable::*;
pub use prelude::*;
pub use signal::*;
pub use toggle::*;
