//! Navigable views.

/// The three views a visitor can select from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Upload,
    Collection,
}

impl View {
    /// All views, in sidebar order.
    pub const ALL: [View; 3] = [View::Home, View::Upload, View::Collection];

    /// Route of the view.
    pub fn path(self) -> &'static str {
        match self {
            View::Home => "/home",
            View::Upload => "/upload",
            View::Collection => "/collection",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            View::Home => "🏠 హోమ్",
            View::Upload => "📤 అప్‌లోడ్",
            View::Collection => "📂 నా కథల సేకరణ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_distinct() {
        let paths: Vec<_> = View::ALL.iter().map(|v| v.path()).collect();
        assert_eq!(paths, vec!["/home", "/upload", "/collection"]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(View::Home.label(), "🏠 హోమ్");
        assert!(View::ALL.iter().all(|v| !v.label().is_empty()));
    }
}
