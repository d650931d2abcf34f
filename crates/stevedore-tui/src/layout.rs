//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (title, view tabs, key hints)
    pub header: Rect,

    /// Main content area (list/detail/monitoring view)
    pub content: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    // Header: top border + title row + bottom border
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
    }
}
