use std::io::Write;

use crate::runtime::Frame;
use crate::view::{View, ViewKind};

pub trait RenderBackend {
    fn frame(&mut self, frame: &Frame) -> std::io::Result<()>;
}

/// One line per leaf: `[id] text`, with `(clickable)` on click targets and
/// buttons drawn as `[id] [label] bg=#RRGGBB`.
pub fn describe(view: &View) -> String {
    let mut lines = Vec::new();
    view.walk(&mut |v| match &v.kind {
        ViewKind::Fragment => {}
        ViewKind::Text { text, .. } => {
            if v.modifier.on_click.is_some() {
                lines.push(format!("[{}] {} (clickable)", v.id, text));
            } else {
                lines.push(format!("[{}] {}", v.id, text));
            }
        }
        ViewKind::Button { text, .. } => match v.modifier.background {
            Some(bg) => lines.push(format!("[{}] [{}] bg={}", v.id, text, bg)),
            None => lines.push(format!("[{}] [{}]", v.id, text)),
        },
    });
    lines.join("\n")
}

/// Renders frames as plain text, for terminals and tests.
pub struct TextBackend<W: Write> {
    out: W,
    frames: usize,
}

impl<W: Write> TextBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderBackend for TextBackend<W> {
    fn frame(&mut self, frame: &Frame) -> std::io::Result<()> {
        self.frames += 1;
        writeln!(self.out, "-- frame {} --", self.frames)?;
        writeln!(self.out, "{}", describe(&frame.root))?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;

    fn sample(s: &mut Scheduler) -> View {
        Fragment(vec![
            Text("hello").modifier(Modifier::new().clickable(|| {})),
            Text("world"),
            Button("go", || {}).modifier(Modifier::new().background(Color::from_hex("#1E88E5"))),
            View::new(
                s.id() + 40,
                ViewKind::Button {
                    text: "bare".into(),
                    on_click: None,
                },
            ),
        ])
    }

    #[test]
    fn test_describe_frame() {
        let frame = Scheduler::new().compose(sample);
        insta::assert_snapshot!(describe(&frame.root), @r"
        [3] hello (clickable)
        [4] world
        [5] [go] bg=#1E88E5
        [41] [bare]
        ");
    }

    #[test]
    fn test_text_backend_writes_numbered_frames() {
        let mut s = Scheduler::new();
        let mut backend = TextBackend::new(Vec::new());
        backend.frame(&s.compose(|_| Text("one"))).unwrap();
        backend.frame(&s.compose(|_| Text("two"))).unwrap();
        assert_eq!(backend.frames(), 2);

        let out = String::from_utf8(backend.into_inner()).unwrap();
        assert_eq!(out, "-- frame 1 --\n[1] one\n-- frame 2 --\n[1] two\n");
    }
}
