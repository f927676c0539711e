//! The presentation boundary: [`PathSink`].

use std::sync::Mutex;

use gridpath_core::Point;

/// Receives the computed path for rendering.
///
/// The engine posts `Some(path)` exactly once after a successful run,
/// with the vertices in goal→start order. `None` is posted by external
/// reset actions (clear screen / clear traversal), never by the engine
/// itself.
pub trait PathSink: Send + Sync {
    fn set_path(&self, path: Option<Vec<Point>>);
}

/// A mutex-backed sink holding the most recent posting. Suitable for
/// tests and for adapters that redraw from polled state.
#[derive(Debug, Default)]
pub struct LatestPath {
    path: Mutex<Option<Vec<Point>>>,
}

impl LatestPath {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently posted path, if any.
    pub fn get(&self) -> Option<Vec<Point>> {
        self.path.lock().expect("path lock poisoned").clone()
    }
}

impl PathSink for LatestPath {
    fn set_path(&self, path: Option<Vec<Point>>) {
        *self.path.lock().expect("path lock poisoned") = path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_latest_posting() {
        let sink = LatestPath::new();
        assert_eq!(sink.get(), None);

        sink.set_path(Some(vec![Point::new(1, 1), Point::new(0, 1)]));
        assert_eq!(sink.get(), Some(vec![Point::new(1, 1), Point::new(0, 1)]));

        // External reset clears the drawn path.
        sink.set_path(None);
        assert_eq!(sink.get(), None);
    }
}
