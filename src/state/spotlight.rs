//! Pointer-tracked lighting for the sign-up card
//!
//! The spotlight only listens while attached. The card attaches it when it
//! is mounted and detaches it when the success panel replaces it.

use ratatui::layout::{Position, Rect};

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f32 = 2.0;

/// Direction the card leans toward the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tilt {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone)]
pub struct Spotlight {
    attached: bool,
    pointer: Option<Position>,
    /// Falloff radius in columns
    radius: f32,
}

impl Spotlight {
    pub fn new(radius: u16) -> Self {
        Self {
            attached: false,
            pointer: None,
            radius: f32::from(radius.max(1)),
        }
    }

    pub fn attach(&mut self) {
        if !self.attached {
            tracing::trace!("Spotlight attached");
            self.attached = true;
        }
    }

    /// Stop listening and forget the last pointer position
    pub fn detach(&mut self) {
        if self.attached {
            tracing::trace!("Spotlight detached");
            self.attached = false;
            self.pointer = None;
        }
    }

    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Record a pointer move. Returns false when detached.
    pub fn track(&mut self, column: u16, row: u16) -> bool {
        if !self.attached {
            return false;
        }
        self.pointer = Some(Position::new(column, row));
        true
    }

    pub fn pointer(&self) -> Option<Position> {
        self.pointer
    }

    /// Whether the pointer is currently over `area`
    pub fn is_hovering(&self, area: Rect) -> bool {
        self.pointer.is_some_and(|p| area.contains(p))
    }

    /// Light falloff at a cell: 1.0 under the pointer, 0.0 at `radius` and beyond
    pub fn intensity_at(&self, column: u16, row: u16) -> f32 {
        let Some(pointer) = self.pointer else {
            return 0.0;
        };
        let dx = f32::from(column) - f32::from(pointer.x);
        let dy = (f32::from(row) - f32::from(pointer.y)) * CELL_ASPECT;
        let distance = (dx * dx + dy * dy).sqrt();
        (1.0 - distance / self.radius).clamp(0.0, 1.0)
    }

    /// Lean toward whichever third of the card the pointer is over
    pub fn tilt(&self, card: Rect) -> Tilt {
        let Some(pointer) = self.pointer.filter(|_| self.is_hovering(card)) else {
            return Tilt::Center;
        };
        let third = card.width / 3;
        let offset = pointer.x - card.x;
        if offset < third {
            Tilt::Left
        } else if offset >= card.width - third {
            Tilt::Right
        } else {
            Tilt::Center
        }
    }
}

impl Default for Spotlight {
    fn default() -> Self {
        Self::new(12)
    }
}
