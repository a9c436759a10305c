//! Menu screens and what their items mean.

use crate::core::{Menu, MenuItem};
use crate::engine::AnimationConfig;

/// Main menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    Play,
    LoadScene,
    Settings,
    Help,
    Quit,
}

impl MainChoice {
    const ALL: [MainChoice; 5] = [
        MainChoice::Play,
        MainChoice::LoadScene,
        MainChoice::Settings,
        MainChoice::Help,
        MainChoice::Quit,
    ];

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }
}

/// Settings menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChoice {
    Frames,
    FrameDelay,
    Back,
}

impl SettingsChoice {
    const ALL: [SettingsChoice; 3] = [
        SettingsChoice::Frames,
        SettingsChoice::FrameDelay,
        SettingsChoice::Back,
    ];

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }
}

pub fn main_menu() -> Menu {
    Menu::new("WIRECUBE")
        .with_item(MenuItem::new("Play Animation", 'p'))
        .with_item(MenuItem::new("Load Scene", 'l').disabled())
        .with_item(MenuItem::new("Settings", 's'))
        .with_item(MenuItem::new("Help", '?'))
        .with_item(MenuItem::new("Quit", 'q'))
}

pub fn settings_menu(config: &AnimationConfig) -> Menu {
    Menu::new("SETTINGS")
        .with_item(MenuItem::new(frames_label(config), 'f'))
        .with_item(MenuItem::new(delay_label(config), 'd'))
        .with_item(MenuItem::new("Back", 'b'))
}

/// Apply a settings selection to `config` and refresh the menu labels.
///
/// Returns `true` when the choice leaves the settings screen.
pub fn apply_setting(choice: SettingsChoice, config: &mut AnimationConfig, menu: &mut Menu) -> bool {
    match choice {
        SettingsChoice::Frames => {
            config.cycle_frame_count();
            menu.set_label(0, frames_label(config));
            false
        }
        SettingsChoice::FrameDelay => {
            config.cycle_frame_delay();
            menu.set_label(1, delay_label(config));
            false
        }
        SettingsChoice::Back => true,
    }
}

pub const HELP_LINES: [&str; 4] = [
    "A wireframe cube drifts along the depth axis.",
    "Press q or Esc while it runs to stop early.",
    "Set WIRECUBE_FRAMES, WIRECUBE_FRAME_MS or WIRECUBE_DEPTH_STEP to tune it.",
    "Press any key to continue...",
];

fn frames_label(config: &AnimationConfig) -> String {
    format!("Frames: {}", config.frame_count)
}

fn delay_label(config: &AnimationConfig) -> String {
    format!("Frame delay: {}ms", config.frame_delay.as_millis())
}
