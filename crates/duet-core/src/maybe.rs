use crate::Signal;

/// Either a plain value or a signal holding one.
///
/// Call sites that accept both go through [`MaybeSignal::resolve`] so it is
/// always visible where a signal gets read.
#[derive(Clone, Debug)]
pub enum MaybeSignal<T: 'static> {
    Static(T),
    Signal(Signal<T>),
}

impl<T: Clone + 'static> MaybeSignal<T> {
    /// Current value. A signal read is tracked.
    pub fn resolve(&self) -> T {
        match self {
            MaybeSignal::Static(v) => v.clone(),
            MaybeSignal::Signal(s) => s.get(),
        }
    }

    pub fn resolve_untracked(&self) -> T {
        match self {
            MaybeSignal::Static(v) => v.clone(),
            MaybeSignal::Signal(s) => s.get_untracked(),
        }
    }
}

impl<T: 'static> MaybeSignal<T> {
    pub fn as_signal(&self) -> Option<&Signal<T>> {
        match self {
            MaybeSignal::Static(_) => None,
            MaybeSignal::Signal(s) => Some(s),
        }
    }

    pub fn is_signal(&self) -> bool {
        matches!(self, MaybeSignal::Signal(_))
    }
}

impl<T: Default + 'static> Default for MaybeSignal<T> {
    fn default() -> Self {
        MaybeSignal::Static(T::default())
    }
}

impl<T: 'static> From<T> for MaybeSignal<T> {
    fn from(v: T) -> Self {
        MaybeSignal::Static(v)
    }
}

impl<T: 'static> From<Signal<T>> for MaybeSignal<T> {
    fn from(s: Signal<T>) -> Self {
        MaybeSignal::Signal(s)
    }
}

impl<T: 'static> From<&Signal<T>> for MaybeSignal<T> {
    fn from(s: &Signal<T>) -> Self {
        MaybeSignal::Signal(s.clone())
    }
}
