//! Menu model: a titled list of items with one selection.
//!
//! Pure state only; drawing lives in the terminal crate.

use arrayvec::ArrayVec;

use crate::types::{MenuInput, MAX_MENU_ITEMS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    /// Shortcut key, matched case-insensitively.
    pub key: char,
    pub enabled: bool,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, key: char) -> Self {
        Self {
            label: label.into(),
            key,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Result of feeding one input to a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Stay in the menu.
    Continue,
    /// The item at this index was activated.
    Selected(usize),
    /// Leave the menu.
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    title: String,
    items: ArrayVec<MenuItem, MAX_MENU_ITEMS>,
    selected: usize,
}

impl Menu {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: ArrayVec::new(),
            selected: 0,
        }
    }

    /// Append an item. Items beyond the capacity are dropped with a warning.
    pub fn with_item(mut self, item: MenuItem) -> Self {
        if let Err(err) = self.items.try_push(item) {
            log::warn!(
                "menu {:?} is full ({MAX_MENU_ITEMS} items), dropping {:?}",
                self.title,
                err.element().label
            );
            return self;
        }
        if !self.items[self.selected].enabled {
            if let Some(i) = self.items.iter().position(|it| it.enabled) {
                self.selected = i;
            }
        }
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn item(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    /// Replace an item's label, keeping key and enabled state.
    pub fn set_label(&mut self, index: usize, label: impl Into<String>) {
        if let Some(item) = self.items.get_mut(index) {
            item.label = label.into();
        }
    }

    pub fn apply(&mut self, input: MenuInput) -> MenuOutcome {
        match input {
            MenuInput::Up => {
                self.step(-1);
                MenuOutcome::Continue
            }
            MenuInput::Down => {
                self.step(1);
                MenuOutcome::Continue
            }
            MenuInput::Confirm => match self.items.get(self.selected) {
                Some(item) if item.enabled => MenuOutcome::Selected(self.selected),
                _ => MenuOutcome::Continue,
            },
            MenuInput::Cancel => MenuOutcome::Back,
            MenuInput::Shortcut(ch) => {
                let hit = self
                    .items
                    .iter()
                    .position(|it| it.enabled && it.key.eq_ignore_ascii_case(&ch));
                match hit {
                    Some(i) => {
                        self.selected = i;
                        MenuOutcome::Selected(i)
                    }
                    None => MenuOutcome::Continue,
                }
            }
            MenuInput::None => MenuOutcome::Continue,
        }
    }

    /// Move to the next enabled item in `dir`, wrapping at both ends.
    fn step(&mut self, dir: isize) {
        let n = self.items.len() as isize;
        if n == 0 {
            return;
        }
        let mut i = self.selected as isize;
        for _ in 0..n {
            i = (i + dir).rem_euclid(n);
            if self.items[i as usize].enabled {
                self.selected = i as usize;
                return;
            }
        }
    }
}
