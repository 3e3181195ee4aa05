use duet_core::scope::Scope;

use crate::view::{Callback, View, ViewId};

/// One click target of a composed frame.
#[derive(Clone)]
pub struct HitRegion {
    pub id: ViewId,
    pub label: String,
    pub on_click: Callback,
}

impl std::fmt::Debug for HitRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HitRegion")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish()
    }
}

/// Frame — output of composition: the view tree plus its click targets.
pub struct Frame {
    pub root: View,
    pub hit_regions: Vec<HitRegion>,
}

impl Frame {
    /// Runs the click handler registered for `id`. Returns false when `id`
    /// is not clickable in this frame.
    pub fn click(&self, id: ViewId) -> bool {
        match self.hit_regions.iter().find(|h| h.id == id) {
            Some(hit) => {
                log::debug!("click: #{} {:?}", hit.id, hit.label);
                (hit.on_click)();
                true
            }
            None => {
                log::warn!("click: no hit region #{id}");
                false
            }
        }
    }

    /// First view whose text contains `needle`.
    pub fn find_text(&self, needle: &str) -> Option<ViewId> {
        let mut found = None;
        self.root.walk(&mut |v| {
            if found.is_none() && v.text().is_some_and(|t| t.contains(needle)) {
                found = Some(v.id);
            }
        });
        found
    }

    pub fn view(&self, id: ViewId) -> Option<&View> {
        let mut found = None;
        self.root.walk(&mut |v| {
            if found.is_none() && v.id == id {
                found = Some(v);
            }
        });
        found
    }

    /// Texts of all leaves, in pre-order.
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.root.walk(&mut |v| {
            if let Some(t) = v.text() {
                out.push(t.to_string());
            }
        });
        out
    }
}

pub struct Scheduler {
    next_id: u64,
    frames: u64,
    // owns effects registered while building the current frame
    frame_scope: Option<Scope>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            frames: 0,
            frame_scope: None,
        }
    }

    pub fn id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Builds the root and assigns ids in pre-order to views that have none.
    /// Ids restart at 1 every frame, so an unchanged tree keeps its ids.
    ///
    /// `build_root` runs inside a fresh scope; effects it registers are
    /// disposed when the next frame is composed.
    pub fn compose<F>(&mut self, build_root: F) -> Frame
    where
        F: FnOnce(&mut Scheduler) -> View,
    {
        if let Some(prev) = self.frame_scope.take() {
            prev.dispose();
        }
        let scope = Scope::new();
        self.next_id = 1;
        let mut root = scope.run(|| build_root(self));
        self.frame_scope = Some(scope);
        self.assign_ids(&mut root);

        let mut hit_regions = Vec::new();
        root.walk(&mut |v| {
            if let Some(on_click) = v.click_handler() {
                hit_regions.push(HitRegion {
                    id: v.id,
                    label: v.text().unwrap_or_default().to_string(),
                    on_click,
                });
            }
        });

        self.frames += 1;
        log::debug!(
            "compose: frame {} with {} hit region(s)",
            self.frames,
            hit_regions.len()
        );
        Frame { root, hit_regions }
    }

    fn assign_ids(&mut self, view: &mut View) {
        if view.id == 0 {
            view.id = self.id();
        }
        for child in &mut view.children {
            self.assign_ids(child);
        }
    }
}
