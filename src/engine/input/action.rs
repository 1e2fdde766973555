// Demo action definitions and key mappings

use winit::keyboard::KeyCode;

/// Represents all actions the demos react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    /// Held modifier switching walk speed to run speed
    Run,
    Jump,

    // Meta actions
    Pause,
    Quit,
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Movement (WASD - standard gaming layout)
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::KeyW, Action::Jump),
        (KeyCode::ShiftLeft, Action::Run),
        (KeyCode::ShiftRight, Action::Run),
        // Meta
        (KeyCode::KeyP, Action::Pause),
        (KeyCode::Escape, Action::Quit),
    ]
}
