// Input handling system
//
// Keyboard events from winit are mapped onto a small fixed action set.
// The simulation never reads raw events; it takes one `InputSnapshot`
// per tick from the `InputManager`.
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::new();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// // Before each tick, read the held keys
// let snapshot = input.snapshot();
//
// // At the end of each frame, clear press events
// input.update();
// ```

pub mod action;
pub mod manager;

// Re-export commonly used types
pub use action::Action;
pub use manager::{InputManager, InputSnapshot};
