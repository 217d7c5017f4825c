//! Translation of device events into mutation commands.
//!
//! The input collaborator polls the OS and feeds [`InputEvent`]s here;
//! each event maps to at most one [`Command`]. The translator is the
//! only place that remembers pointer-button state, so the rest of the
//! core never touches raw device events.

use hearth_core::{Command, FillValue, Material, ViewTarget};

/// Pointer buttons the sandbox distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    /// Paints with the brush while held.
    Left,
    /// Drags out a rectangle fill.
    Right,
}

/// Keys with a sandbox binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Toggle between temperature and material view.
    Space,
    /// Select aluminium.
    Digit1,
    /// Select glass.
    Digit2,
    /// Select water.
    Digit3,
}

/// A typed device event, in window coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A pointer button was pressed.
    PointerDown {
        /// Which button.
        button: Button,
        /// Window x.
        x: i32,
        /// Window y.
        y: i32,
    },
    /// A pointer button was released.
    PointerUp {
        /// Which button.
        button: Button,
        /// Window x.
        x: i32,
        /// Window y.
        y: i32,
    },
    /// The pointer moved.
    PointerMoved {
        /// Window x.
        x: i32,
        /// Window y.
        y: i32,
    },
    /// A bound key was pressed.
    KeyPressed(Key),
}

/// Stateful translator from input events to mutation commands.
///
/// Tracks whether the left button is held (motion paints) and where a
/// right-drag started (release fills the dragged rectangle).
#[derive(Debug, Default)]
pub struct InputTranslator {
    left_pressed: bool,
    right_origin: Option<(i32, i32)>,
}

impl InputTranslator {
    /// Create a translator with no buttons held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one event into at most one command.
    pub fn translate(&mut self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::PointerDown {
                button: Button::Left,
                x,
                y,
            } => {
                self.left_pressed = true;
                Some(Command::PaintPoint { x, y })
            }
            InputEvent::PointerUp {
                button: Button::Left,
                ..
            } => {
                self.left_pressed = false;
                None
            }
            InputEvent::PointerMoved { x, y } => self
                .left_pressed
                .then_some(Command::PaintPoint { x, y }),
            InputEvent::PointerDown {
                button: Button::Right,
                x,
                y,
            } => {
                self.right_origin = Some((x, y));
                None
            }
            InputEvent::PointerUp {
                button: Button::Right,
                x,
                y,
            } => self.right_origin.take().map(|(ox, oy)| Command::FillRect {
                x1: ox,
                y1: oy,
                x2: x,
                y2: y,
                value: FillValue::Default,
            }),
            InputEvent::KeyPressed(key) => Some(match key {
                Key::Space => Command::SwitchView(ViewTarget::Toggle),
                Key::Digit1 => Command::SelectMaterial(Material::Aluminium),
                Key::Digit2 => Command::SelectMaterial(Material::Glass),
                Key::Digit3 => Command::SelectMaterial(Material::Water),
            }),
        }
    }
}
