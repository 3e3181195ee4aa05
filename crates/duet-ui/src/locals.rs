//! # Theming and locals
//!
//! Global UI parameters live in thread-local "composition locals". The only
//! one Duet needs is [`Theme`]; override it for a subtree with
//! [`with_theme`]:
//!
//! ```rust
//! use duet_ui::*;
//!
//! let night = Theme::dark();
//! let bg = with_theme(night, || theme().button_background);
//! assert_eq!(bg, night.button_background);
//! assert_eq!(theme(), Theme::default());
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::Color;

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn set_local_boxed(t: TypeId, v: Box<dyn Any>) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        } else {
            // no frame: create a temporary one
            let mut m = HashMap::new();
            m.insert(t, v);
            st.borrow_mut().push(m);
        }
    });
}

fn get_local<T: Copy + Default + 'static>() -> T {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return *t;
            }
        }
        T::default()
    })
}

/// Colors used by the widgets in this crate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    /// Window background / app root.
    pub background: Color,
    /// Foreground color for text.
    pub on_surface: Color,
    /// Default button background.
    pub button_background: Color,
    /// The other background a two-state button swaps to.
    pub button_background_alt: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            on_surface: Color::from_hex("#222222"),
            button_background: Color::WHITE,
            button_background_alt: Color::BLACK,
        }
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::from_hex("#121212"),
            on_surface: Color::from_hex("#EEEEEE"),
            button_background: Color::from_hex("#34495E"),
            button_background_alt: Color::from_hex("#F1C40F"),
        }
    }
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        set_local_boxed(TypeId::of::<Theme>(), Box::new(theme));
        f()
    })
}

pub fn theme() -> Theme {
    get_local::<Theme>()
}
