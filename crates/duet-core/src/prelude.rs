pub use crate::derived::{Derived, derived, derived_with_setter};
pub use crate::effects::{Dispose, effect};
pub use crate::error::MutexError;
pub use crate::maybe::MaybeSignal;
pub use crate::mutex::{
    BoolMutex, MutexSide, Side, ValueMutex, bool_mutex, reversed_pair, try_reversed, value_mutex,
};
pub use crate::observable::Observable;
pub use crate::reactive::{batch, untracked};
pub use crate::scope::{Scope, current_scope};
pub use crate::signal::{Signal, WeakSignal, signal};
pub use crate::toggle::{Toggler, toggle_cell, toggle_from, use_toggle};
