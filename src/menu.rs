//! Option lists for the menu screens.

/// A vertical or horizontal list of options with one selected entry.
/// Selection wraps around at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    options: Vec<String>,
    selected: usize,
}

impl Menu {
    pub fn new<S: Into<String>>(options: impl IntoIterator<Item = S>) -> Self {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        debug_assert!(!options.is_empty());
        Self {
            options,
            selected: 0,
        }
    }

    pub fn main_menu() -> Self {
        Self::new(["2D Maze", "3D Maze", "Settings", "Quit"])
    }

    pub fn level_select(levels: usize) -> Self {
        Self::new((1..=levels.max(1)).map(|n| format!("Level {}", n)))
    }

    pub fn pause_menu() -> Self {
        Self::new(["Resume", "Quit"])
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_label(&self) -> &str {
        &self.options[self.selected]
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    pub fn move_forward(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub fn move_backward(&mut self) {
        self.selected = (self.selected + self.options.len() - 1) % self.options.len();
    }

    /// Back to the first option.
    pub fn reset(&mut self) {
        self.selected = 0;
    }
}
