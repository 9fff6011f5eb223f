// src/config/state.rs

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    #[default]
    Grid,
    List,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Product cards vs compact table
    pub layout: LayoutMode,

    /// Size filter panel expanded under the toolbar
    pub size_panel_open: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 760,
            layout: LayoutMode::Grid,
            size_panel_open: false,
        }
    }
}
