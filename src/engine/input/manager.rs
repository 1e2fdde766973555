// Input manager - tracks held keys and produces per-tick snapshots

use super::action::{default_bindings, Action};
use std::collections::{HashMap, HashSet};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Which movement keys are held at the start of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub run: bool,
    pub jump: bool,
}

/// Maps keyboard events onto actions and remembers which are held
pub struct InputManager {
    bindings: HashMap<KeyCode, Action>,
    /// Physical keys currently down, so two keys bound to one action
    /// release independently
    held_keys: HashSet<KeyCode>,
    /// Actions pressed since the last `update`
    just_pressed: HashSet<Action>,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            bindings: default_bindings().into_iter().collect(),
            held_keys: HashSet::new(),
            just_pressed: HashSet::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.handle_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply a key transition
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) {
        let Some(&action) = self.bindings.get(&key) else {
            return;
        };

        match state {
            ElementState::Pressed => {
                if self.held_keys.insert(key) && !repeat {
                    self.just_pressed.insert(action);
                }
            }
            ElementState::Released => {
                self.held_keys.remove(&key);
            }
        }
    }

    /// Check if any key bound to the action is held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.held_keys
            .iter()
            .any(|key| self.bindings.get(key) == Some(&action))
    }

    /// Check if the action was pressed since the last update
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Movement state for the next simulation tick
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: self.is_pressed(Action::MoveLeft),
            right: self.is_pressed(Action::MoveRight),
            run: self.is_pressed(Action::Run),
            jump: self.is_pressed(Action::Jump),
        }
    }

    /// Clear per-frame press events
    /// Call this once per frame after the frame's ticks have run
    pub fn update(&mut self) {
        self.just_pressed.clear();
    }

    /// Release everything, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.held_keys.clear();
        self.just_pressed.clear();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
