//! Command types for the Elm-style architecture
//!
//! Commands tell the host what to do after an update.

/// Follow-up work requested by an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Only view state changed (edit cursor moved, buffer updated, or the
    /// requested operation was refused)
    Redraw,
    /// A commit or row operation ran; the host should persist and redraw
    DataChanged,
}

impl Cmd {
    /// Check if the host's change listener should be notified
    pub fn data_changed(self) -> bool {
        matches!(self, Cmd::DataChanged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_changed() {
        assert!(Cmd::DataChanged.data_changed());
        assert!(!Cmd::Redraw.data_changed());
    }
}
