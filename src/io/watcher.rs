use std::path::Path;
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Watches the store directory for external writes to the items payload,
/// so a TUI session picks up changes made by CLI invocations.
pub struct StoreWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<()>,
}

impl StoreWatcher {
    /// Start watching the store directory. `poll()` should be called each
    /// event-loop tick.
    pub fn start(store_dir: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let Ok(event) = result else { return };
                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
                    _ => return,
                }
                // Only the items payload matters; lock, UI state, and
                // recovery-log churn would cause pointless reloads.
                let relevant = event
                    .paths
                    .iter()
                    .any(|p| p.file_name().and_then(|n| n.to_str()) == Some("items.json"));
                if relevant {
                    let _ = tx.send(());
                }
            },
            Config::default(),
        )?;

        watcher.watch(store_dir, RecursiveMode::NonRecursive)?;
        Ok(StoreWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// True if the items payload changed on disk since the last poll.
    pub fn poll(&self) -> bool {
        let mut changed = false;
        while self.rx.try_recv().is_ok() {
            changed = true;
        }
        changed
    }
}
