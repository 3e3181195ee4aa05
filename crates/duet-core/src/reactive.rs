use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

pub type SignalId = usize;

new_key_type! {
    pub struct ObserverId;
}

thread_local! {
    static CURRENT_OBSERVER: RefCell<Option<ObserverId>> = const { RefCell::new(None) };
    static GRAPH: RefCell<DepGraph> = RefCell::new(DepGraph::default());
    static NEXT_SIGNAL: Cell<SignalId> = const { Cell::new(0) };
    static BATCH: RefCell<Batch> = RefCell::new(Batch::default());
}

#[derive(Default)]
struct DepGraph {
    // signal_id -> observers that depend on it
    edges: HashMap<SignalId, HashSet<ObserverId>>,
    // observer_id -> signals it depends on
    back: HashMap<ObserverId, HashSet<SignalId>>,
    // recompute closures
    observers: SlotMap<ObserverId, Rc<dyn Fn()>>,
    running: HashSet<ObserverId>,
}

impl DepGraph {
    fn remove_all_edges_for(&mut self, obs: ObserverId) {
        if let Some(signals) = self.back.remove(&obs) {
            for s in signals {
                if let Some(set) = self.edges.get_mut(&s) {
                    set.remove(&obs);
                }
            }
        }
    }
    fn remove_observer(&mut self, obs: ObserverId) {
        self.observers.remove(obs);
        self.remove_all_edges_for(obs);
        self.running.remove(&obs);
    }
}

#[derive(Default)]
struct Batch {
    depth: usize,
    pending: Vec<(SignalId, Box<dyn FnOnce()>)>,
}

/// Allocates a fresh id for a new signal on this thread.
pub fn next_signal_id() -> SignalId {
    NEXT_SIGNAL.with(|n| {
        let id = n.get();
        n.set(id + 1);
        id
    })
}

pub fn register_signal_read(sig: SignalId) {
    CURRENT_OBSERVER.with(|co| {
        if let Some(obs) = *co.borrow() {
            GRAPH.with(|g| {
                let mut g = g.borrow_mut();
                g.edges.entry(sig).or_default().insert(obs);
                g.back.entry(obs).or_default().insert(sig);
            });
        }
    });
}

/// Re-runs every observer that read `sig` during its last run.
///
/// Observers already running further up the stack are skipped, so a cycle
/// between two derived cells settles instead of recursing.
pub fn signal_changed(sig: SignalId) {
    let mut queue: VecDeque<ObserverId> = GRAPH.with(|g| {
        g.borrow()
            .edges
            .get(&sig)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    });
    while let Some(obs) = queue.pop_front() {
        let started = GRAPH.with(|g| {
            let mut g = g.borrow_mut();
            if g.running.contains(&obs) || !g.observers.contains_key(obs) {
                return false;
            }
            g.running.insert(obs);
            // clear previous deps before recompute
            g.remove_all_edges_for(obs);
            true
        });
        if !started {
            continue;
        }
        run_tracked(obs);
        GRAPH.with(|g| {
            g.borrow_mut().running.remove(&obs);
        });
    }
}

fn run_tracked(obs: ObserverId) {
    // Clone the closure out first: it may register reads or create observers.
    let f = GRAPH.with(|g| g.borrow().observers.get(obs).cloned());
    let Some(f) = f else {
        return;
    };
    let prev = CURRENT_OBSERVER.with(|co| co.replace(Some(obs)));
    f();
    CURRENT_OBSERVER.with(|co| *co.borrow_mut() = prev);
}

pub fn new_observer(f: impl Fn() + 'static) -> ObserverId {
    GRAPH.with(|g| g.borrow_mut().observers.insert(Rc::new(f)))
}

/// Remove an observer and all of its dependency edges.
pub fn remove_observer(id: ObserverId) {
    GRAPH.with(|g| {
        g.borrow_mut().remove_observer(id);
    });
}

pub fn run_observer_now(id: ObserverId) {
    GRAPH.with(|g| g.borrow_mut().remove_all_edges_for(id));
    run_tracked(id);
}

/// Number of signals `id` read during its last run.
pub fn dependency_count(id: ObserverId) -> usize {
    GRAPH.with(|g| g.borrow().back.get(&id).map_or(0, |s| s.len()))
}

/// Runs `f` without registering any signal reads with the current observer.
pub fn untracked<R>(f: impl FnOnce() -> R) -> R {
    let prev = CURRENT_OBSERVER.with(|co| co.replace(None));
    let out = f();
    CURRENT_OBSERVER.with(|co| *co.borrow_mut() = prev);
    out
}

/// Groups writes so that subscribers and observers run once, after `f`
/// returns, and only see the final values.
///
/// Batches nest; notifications flush when the outermost batch ends, in the
/// order the signals were first written.
pub fn batch<R>(f: impl FnOnce() -> R) -> R {
    struct Depth;
    impl Drop for Depth {
        fn drop(&mut self) {
            BATCH.with(|b| b.borrow_mut().depth -= 1);
        }
    }

    BATCH.with(|b| b.borrow_mut().depth += 1);
    let guard = Depth;
    let out = f();
    drop(guard);

    let pending = BATCH.with(|b| {
        let mut b = b.borrow_mut();
        if b.depth == 0 {
            std::mem::take(&mut b.pending)
        } else {
            Vec::new()
        }
    });
    if !pending.is_empty() {
        log::trace!("batch: flushing {} signal(s)", pending.len());
    }
    for (_, notify) in pending {
        notify();
    }
    out
}

pub fn is_batching() -> bool {
    BATCH.with(|b| b.borrow().depth > 0)
}

/// Runs `notify` now, or queues it until the current batch ends.
/// A signal written several times inside one batch is notified once.
pub fn schedule_notify(sig: SignalId, notify: impl FnOnce() + 'static) {
    let immediate = BATCH.with(|b| {
        let mut b = b.borrow_mut();
        if b.depth == 0 {
            return Some(notify);
        }
        if !b.pending.iter().any(|(id, _)| *id == sig) {
            b.pending.push((sig, Box::new(notify)));
        }
        None
    });
    if let Some(notify) = immediate {
        notify();
    }
}
