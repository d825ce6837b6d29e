use crate::core::theme::ThemeName;

/// Host notifications the galaxy reacts to.
/// Produced by input listeners between frames, applied at the start of the next one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The pointer moved to viewport coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// The pointer left the viewport (or the device has none).
    PointerLeave,
    /// The viewport was resized.
    Resize { width: f32, height: f32 },
    /// The UI switched palettes.
    Theme(ThemeName),
}

/// A queue of input events.
/// Listeners push; the frame loop drains once per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        // Only the latest pointer position matters.
        if let InputEvent::PointerMove { .. } = event {
            if let Some(last) = self.events.last_mut() {
                if matches!(last, InputEvent::PointerMove { .. }) {
                    *last = event;
                    return;
                }
            }
        }
        self.events.push(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, InputEvent> {
        self.events.drain(..)
    }

    /// Discard pending events without applying them.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
