/// One direction of a connection between two stations.
///
/// Connections are undirected, but `StationGraph` stores every one of them as
/// a pair of records (start -> end and end -> start) so neighbor lookup never
/// has to walk incoming edges. Code that persists connections must collapse
/// the pair back into one entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Edge {
    highlighted: bool,
}

impl Edge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the displayed route runs along this record
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}
