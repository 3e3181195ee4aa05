#![allow(non_snake_case)]
//! Headless views, theming and frame composition.
//!
//! Views here are plain data: composing a frame yields the view tree plus
//! the click targets found in it, and a [`RenderBackend`] decides how to
//! show it.

pub mod color;
pub mod locals;
pub mod modifier;
pub mod render_api;
pub mod runtime;
pub mod view;

pub use color::*;
pub use locals::{Theme, theme, with_theme};
pub use modifier::*;
pub use render_api::*;
pub use runtime::*;
pub use view::*;

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: theme().on_surface,
        },
    )
}

/// Button with the theme's default background.
pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    View::new(
        0,
        ViewKind::Button {
            text: text.into(),
            on_click: Some(std::rc::Rc::new(on_click)),
        },
    )
    .modifier(Modifier::new().background(theme().button_background))
}

pub fn Fragment(children: Vec<View>) -> View {
    View::new(0, ViewKind::Fragment).with_children(children)
}
