use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use crate::effects::Dispose;
use crate::observable::Observable;
use crate::reactive::{self, SignalId};

pub type SubId = usize;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Observable, reactive value.
///
/// `Signal` is a cheap `Rc` handle: clones share the same cell, so a write
/// through any clone is seen by all of them.
pub struct Signal<T: 'static>(Rc<Inner<T>>);

struct Inner<T> {
    id: SignalId,
    // Readers clone the `Rc` out, so no borrow outlives a read and
    // subscribers may write any signal, this one included.
    value: RefCell<Rc<T>>,
    subs: RefCell<SmallVec<[(SubId, Subscriber<T>); 2]>>,
    next_sub: Cell<SubId>,
}

/// Non-owning handle to a [`Signal`].
pub struct WeakSignal<T: 'static>(Weak<Inner<T>>);

impl<T: 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(Inner {
            id: reactive::next_signal_id(),
            value: RefCell::new(Rc::new(value)),
            subs: RefCell::new(SmallVec::new()),
            next_sub: Cell::new(0),
        }))
    }

    pub fn id(&self) -> SignalId {
        self.0.id
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        reactive::register_signal_read(self.0.id);
        T::clone(&*self.snapshot())
    }

    pub fn get_untracked(&self) -> T
    where
        T: Clone,
    {
        T::clone(&*self.snapshot())
    }

    /// Reads the value by reference. Tracked like `get`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        reactive::register_signal_read(self.0.id);
        f(&*self.snapshot())
    }

    pub fn set(&self, v: T) {
        *self.0.value.borrow_mut() = Rc::new(v);
        self.notify();
    }

    /// Mutates in place, or on a fresh copy while a subscriber still holds
    /// the previous value.
    pub fn update<F: FnOnce(&mut T)>(&self, f: F)
    where
        T: Clone,
    {
        {
            let mut slot = self.0.value.borrow_mut();
            f(Rc::make_mut(&mut slot));
        }
        self.notify();
    }

    /// Subscribers receive the new value by reference. A subscriber that
    /// writes a signal triggers a nested notification for it.
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let id = self.0.next_sub.get();
        self.0.next_sub.set(id + 1);
        self.0.subs.borrow_mut().push((id, Rc::new(f)));
        id
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        let mut subs = self.0.subs.borrow_mut();
        let before = subs.len();
        subs.retain(|(sid, _)| *sid != id);
        subs.len() != before
    }

    /// Like `subscribe`, but the returned guard unsubscribes when run.
    pub fn watch(&self, f: impl Fn(&T) + 'static) -> Dispose {
        let id = self.subscribe(f);
        let weak = self.downgrade();
        Dispose::new(move || {
            if let Some(sig) = weak.upgrade() {
                sig.unsubscribe(id);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.subs.borrow().len()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn downgrade(&self) -> WeakSignal<T> {
        WeakSignal(Rc::downgrade(&self.0))
    }

    fn snapshot(&self) -> Rc<T> {
        self.0.value.borrow().clone()
    }

    fn notify(&self) {
        let this = self.clone();
        reactive::schedule_notify(self.0.id, move || this.notify_now());
    }

    fn notify_now(&self) {
        let subs: SmallVec<[Subscriber<T>; 2]> =
            self.0.subs.borrow().iter().map(|(_, s)| s.clone()).collect();
        if !subs.is_empty() {
            let value = self.snapshot();
            for s in &subs {
                s(&*value);
            }
        }
        reactive::signal_changed(self.0.id);
    }
}

impl<T: 'static> WeakSignal<T> {
    pub fn upgrade(&self) -> Option<Signal<T>> {
        self.0.upgrade().map(Signal)
    }
}

impl<T: 'static> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: 'static> Clone for WeakSignal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Default + 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("id", &self.0.id)
            .field("value", &*self.snapshot())
            .finish()
    }
}

impl<T: Clone + 'static> Observable<T> for Signal<T> {
    fn get(&self) -> T {
        Signal::get(self)
    }
    fn set(&self, value: T) {
        Signal::set(self, value)
    }
    fn get_untracked(&self) -> T {
        Signal::get_untracked(self)
    }
}

pub fn signal<T: 'static>(t: T) -> Signal<T> {
    Signal::new(t)
}
