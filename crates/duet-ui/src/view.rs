use std::fmt;
use std::rc::Rc;

use crate::{Color, Modifier};

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;

#[derive(Clone)]
pub enum ViewKind {
    Fragment,
    Text {
        text: String,
        color: Color,
    },
    Button {
        text: String,
        on_click: Option<Callback>,
    },
}

impl fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewKind::Fragment => write!(f, "Fragment"),
            ViewKind::Text { text, color } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .finish(),
            ViewKind::Button { text, .. } => f
                .debug_struct("Button")
                .field("text", text)
                .field("on_click", &"<callback>")
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    /// Label of a text or button leaf.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ViewKind::Text { text, .. } | ViewKind::Button { text, .. } => Some(text),
            ViewKind::Fragment => None,
        }
    }

    /// Button callback first, then a `clickable` modifier.
    pub fn click_handler(&self) -> Option<Callback> {
        match &self.kind {
            ViewKind::Button {
                on_click: Some(cb), ..
            } => Some(cb.clone()),
            _ => self.modifier.on_click.clone(),
        }
    }

    /// Pre-order walk over this view and all descendants.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a View)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }
}
