use crate::reactive;

/// Read/write access to a single reactive value.
///
/// Implemented by [`Signal`](crate::Signal), [`Derived`](crate::Derived) and
/// [`MutexSide`](crate::MutexSide), which is what lets a
/// [`Toggler`](crate::Toggler) adapt any of them.
pub trait Observable<T> {
    /// Tracked read: inside an observer this records a dependency.
    fn get(&self) -> T;
    fn set(&self, value: T);

    fn get_untracked(&self) -> T {
        reactive::untracked(|| self.get())
    }
}
