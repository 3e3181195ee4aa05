//! Mutually exclusive pairs.
//!
//! - [`BoolMutex`]: two boolean cells kept as each other's negation.
//! - [`ValueMutex`]: two arbitrary values swapped on every call.
//! - [`reversed_pair`]: a plain positional swap with no binding at all.
//!
//! ```rust
//! use duet_core::*;
//!
//! let (fish, bear_paw) = bool_mutex(false);
//! assert!(bear_paw.get());
//!
//! fish.set(true);
//! assert!(!bear_paw.get());
//!
//! let bg = value_mutex(("white", "black"));
//! assert_eq!(bg.next(), "white");
//! assert_eq!(bg.next(), "black");
//! ```

use std::cell::Cell;
use std::fmt;

use crate::effects::Dispose;
use crate::error::MutexError;
use crate::maybe::MaybeSignal;
use crate::observable::Observable;
use crate::reactive;
use crate::signal::Signal;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Boolean,
    Versa,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Boolean => Side::Versa,
            Side::Versa => Side::Boolean,
        }
    }
}

/// Two boolean cells where `versa == !boolean` always holds.
///
/// Both sides are ordinary signals, so views and derived cells can read
/// either one. The only write path is [`BoolMutex::set_either`], which
/// updates both inside one batch.
#[derive(Clone)]
pub struct BoolMutex {
    boolean: Signal<bool>,
    versa: Signal<bool>,
}

impl BoolMutex {
    /// A signal argument is read once; the mutex owns fresh cells.
    pub fn new(initial: impl Into<MaybeSignal<bool>>) -> Self {
        let value = initial.into().resolve_untracked();
        Self {
            boolean: Signal::new(value),
            versa: Signal::new(!value),
        }
    }

    fn cell(&self, side: Side) -> &Signal<bool> {
        match side {
            Side::Boolean => &self.boolean,
            Side::Versa => &self.versa,
        }
    }

    pub fn get(&self, side: Side) -> bool {
        self.cell(side).get()
    }

    pub fn get_untracked(&self, side: Side) -> bool {
        self.cell(side).get_untracked()
    }

    /// Stores `value` on `side` and `!value` on the other side. Subscribers
    /// of both cells run after both writes.
    pub fn set_either(&self, side: Side, value: bool) {
        let (boolean, versa) = match side {
            Side::Boolean => (value, !value),
            Side::Versa => (!value, value),
        };
        log::trace!("mutex: {side:?} <- {value} (boolean={boolean}, versa={versa})");
        reactive::batch(|| {
            self.boolean.set(boolean);
            self.versa.set(versa);
        });
    }

    /// Flips both sides; returns the new `boolean` value.
    pub fn flip(&self) -> bool {
        let next = !self.boolean.get_untracked();
        self.set_either(Side::Boolean, next);
        next
    }

    pub fn side(&self, side: Side) -> MutexSide {
        MutexSide {
            mutex: self.clone(),
            side,
        }
    }

    pub fn boolean(&self) -> MutexSide {
        self.side(Side::Boolean)
    }

    pub fn versa(&self) -> MutexSide {
        self.side(Side::Versa)
    }

    pub fn split(self) -> (MutexSide, MutexSide) {
        (self.boolean(), self.versa())
    }
}

impl Default for BoolMutex {
    fn default() -> Self {
        Self::new(false)
    }
}

impl fmt::Debug for BoolMutex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoolMutex")
            .field("boolean", &self.boolean.get_untracked())
            .field("versa", &self.versa.get_untracked())
            .finish()
    }
}

/// One side of a [`BoolMutex`]. Writing it also writes the other side.
#[derive(Clone)]
pub struct MutexSide {
    mutex: BoolMutex,
    side: Side,
}

impl MutexSide {
    pub fn get(&self) -> bool {
        self.mutex.get(self.side)
    }

    pub fn get_untracked(&self) -> bool {
        self.mutex.get_untracked(self.side)
    }

    pub fn set(&self, value: bool) {
        self.mutex.set_either(self.side, value);
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn other(&self) -> MutexSide {
        self.mutex.side(self.side.other())
    }

    pub fn mutex(&self) -> &BoolMutex {
        &self.mutex
    }

    pub fn watch(&self, f: impl Fn(bool) + 'static) -> Dispose {
        self.mutex.cell(self.side).watch(move |v| f(*v))
    }
}

impl fmt::Debug for MutexSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutexSide")
            .field("side", &self.side)
            .field("value", &self.get_untracked())
            .finish()
    }
}

impl Observable<bool> for MutexSide {
    fn get(&self) -> bool {
        MutexSide::get(self)
    }
    fn set(&self, value: bool) {
        MutexSide::set(self, value)
    }
    fn get_untracked(&self) -> bool {
        MutexSide::get_untracked(self)
    }
}

/// `(boolean, versa)` sides of a fresh [`BoolMutex`].
pub fn bool_mutex(initial: impl Into<MaybeSignal<bool>>) -> (MutexSide, MutexSide) {
    BoolMutex::new(initial).split()
}

/// Two values that trade places on every [`next`](ValueMutex::next) call.
///
/// Each call reverses the pair. Then, if the value now in the first
/// position is a signal, it is overwritten with the resolved second value.
/// The call returns that second value. Starting from `(a, b)`, calls
/// return `a, b, a, b, ...`.
pub struct ValueMutex<T: Clone + 'static> {
    slots: [MaybeSignal<T>; 2],
    reversed: Cell<bool>,
}

impl<T: Clone + 'static> ValueMutex<T> {
    pub fn new(initial: impl Into<MaybeSignal<T>>, versa: impl Into<MaybeSignal<T>>) -> Self {
        Self {
            slots: [initial.into(), versa.into()],
            reversed: Cell::new(false),
        }
    }

    pub fn try_from_iter<I>(items: I) -> Result<Self, MutexError>
    where
        I: IntoIterator,
        I::Item: Into<MaybeSignal<T>>,
    {
        let (initial, versa) = take_pair(items)?;
        Ok(Self::new(initial, versa))
    }

    // (target, source) for the given orientation
    fn positions(&self, reversed: bool) -> (&MaybeSignal<T>, &MaybeSignal<T>) {
        let [a, b] = &self.slots;
        if reversed { (b, a) } else { (a, b) }
    }

    pub fn next(&self) -> T {
        let reversed = !self.reversed.get();
        self.reversed.set(reversed);

        let (target, source) = self.positions(reversed);
        let value = source.resolve_untracked();
        if let Some(cell) = target.as_signal() {
            cell.set(value.clone());
        }
        log::debug!(
            "value mutex: reversed={reversed}, wrote_target={}",
            target.is_signal()
        );
        value
    }

    /// What the next call to `next` would return, without swapping.
    pub fn peek(&self) -> T {
        let (_, source) = self.positions(!self.reversed.get());
        source.resolve_untracked()
    }

    /// Whether the pair currently sits reversed (after an odd number of calls).
    pub fn is_reversed(&self) -> bool {
        self.reversed.get()
    }

    pub fn into_fn(self) -> impl Fn() -> T {
        move || self.next()
    }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for ValueMutex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueMutex")
            .field("slots", &self.slots)
            .field("reversed", &self.reversed.get())
            .finish()
    }
}

pub fn value_mutex<T, A, B>(pair: (A, B)) -> ValueMutex<T>
where
    T: Clone + 'static,
    A: Into<MaybeSignal<T>>,
    B: Into<MaybeSignal<T>>,
{
    ValueMutex::new(pair.0, pair.1)
}

/// `(a, b)` becomes `(b, a)`. Nothing is bound or written.
pub fn reversed_pair<X, Y>(pair: (X, Y)) -> (Y, X) {
    let (x, y) = pair;
    (y, x)
}

/// Like [`reversed_pair`] for a runtime-sized collection.
pub fn try_reversed<T>(items: impl IntoIterator<Item = T>) -> Result<(T, T), MutexError> {
    let (a, b) = take_pair(items)?;
    Ok((b, a))
}

fn take_pair<I: IntoIterator>(items: I) -> Result<(I::Item, I::Item), MutexError> {
    let mut it = items.into_iter();
    match (it.next(), it.next(), it.next()) {
        (Some(a), Some(b), None) => Ok((a, b)),
        (a, b, c) => {
            let found = [a.is_some(), b.is_some(), c.is_some()]
                .into_iter()
                .filter(|present| *present)
                .count()
                + it.count();
            Err(MutexError::Arity { found })
        }
    }
}
