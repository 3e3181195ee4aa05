use std::fmt;
use std::rc::Rc;

use crate::Color;
use crate::view::Callback;

#[derive(Clone, Default)]
pub struct Modifier {
    pub background: Option<Color>,
    pub on_click: Option<Callback>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn clickable(mut self, on_click: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(on_click));
        self
    }

    /// Same as `clickable`, for callbacks that are already shared.
    pub fn on_click(mut self, on_click: Callback) -> Self {
        self.on_click = Some(on_click);
        self
    }
}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modifier")
            .field("background", &self.background)
            .field("clickable", &self.on_click.is_some())
            .finish()
    }
}
