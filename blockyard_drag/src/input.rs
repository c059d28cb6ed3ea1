// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture adapter: pointer and touch input normalized into one event shape.
//!
//! ## Usage
//!
//! 1) Pick an [`InputMode`] once at setup from whether the environment is
//!    touch capable.
//! 2) Feed every raw event through [`GestureAdapter::normalize`] (or the
//!    per-modality helpers).
//! 3) Hand the resulting [`Gesture`] to
//!    [`DragController::handle`](crate::DragController::handle). `None` means
//!    "not a gesture"; drop the event.
//!
//! ## Minimal example
//!
//! ```
//! use blockyard_drag::{GestureAdapter, GesturePhase, InputMode, TouchContact, TouchEvent, TouchPhase};
//! use blockyard_script::Element;
//! use kurbo::Point;
//! use smallvec::smallvec;
//!
//! let adapter = GestureAdapter::new(InputMode::Touch);
//! let finger = TouchContact { target: Element::Background, position: Point::new(4.0, 2.0) };
//!
//! let one = TouchEvent { phase: TouchPhase::Move, contacts: smallvec![finger] };
//! assert_eq!(adapter.touch(&one).map(|g| g.phase), Some(GesturePhase::Move));
//!
//! // Two fingers on the surface is not a drag gesture.
//! let two = TouchEvent { phase: TouchPhase::Move, contacts: smallvec![finger, finger] };
//! assert!(adapter.touch(&two).is_none());
//! ```

use blockyard_script::Element;
use kurbo::Point;
use smallvec::SmallVec;

/// Which input modality the host delivers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputMode {
    /// Mouse or pen pointer events.
    Pointer,
    /// Touch events.
    Touch,
}

impl InputMode {
    /// Select the mode from the host's "is this a touch-capable environment" query.
    #[must_use]
    pub const fn from_touch_capable(touch_capable: bool) -> Self {
        if touch_capable {
            Self::Touch
        } else {
            Self::Pointer
        }
    }
}

/// Pointer button reported with a pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Main button, usually the left mouse button or a pen tip.
    Primary,
    /// Usually the right mouse button.
    Secondary,
    /// Usually the middle mouse button.
    Auxiliary,
    /// Any other button, by index.
    Other(u16),
}

/// Phase of a pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Button pressed.
    Down,
    /// Pointer moved while the button is held.
    Move,
    /// Button released.
    Up,
}

/// Raw pointer event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Event phase.
    pub phase: PointerPhase,
    /// Button pressed, held, or released.
    pub button: PointerButton,
    /// Element under the pointer.
    pub target: Element,
    /// Absolute surface position.
    pub position: Point,
}

/// Phase of a touch event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// A finger touched the surface.
    Start,
    /// Fingers on the surface moved.
    Move,
    /// A finger left the surface.
    End,
}

/// One finger on the surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchContact {
    /// Element under the finger.
    pub target: Element,
    /// Absolute surface position.
    pub position: Point,
}

/// Raw touch event.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// Event phase.
    pub phase: TouchPhase,
    /// Contacts on the surface; for [`TouchPhase::End`], the lifted contacts.
    pub contacts: SmallVec<[TouchContact; 2]>,
}

/// Either kind of raw input.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer input.
    Pointer(PointerEvent),
    /// Touch input.
    Touch(TouchEvent),
}

/// Phase of a normalized gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// Press on an element.
    Press,
    /// Movement while pressed.
    Move,
    /// Release.
    Release,
}

/// A single-contact, primary-button gesture event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gesture {
    /// Gesture phase.
    pub phase: GesturePhase,
    /// Element under the contact.
    pub target: Element,
    /// Absolute surface position.
    pub position: Point,
}

/// Normalizes raw input of one [`InputMode`] into [`Gesture`]s.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GestureAdapter {
    mode: InputMode,
}

impl GestureAdapter {
    /// Create an adapter for `mode`.
    #[must_use]
    pub const fn new(mode: InputMode) -> Self {
        Self { mode }
    }

    /// The modality this adapter accepts.
    #[must_use]
    pub const fn mode(&self) -> InputMode {
        self.mode
    }

    /// Normalize any raw event. Events of the other modality are not gestures.
    #[must_use]
    pub fn normalize(&self, event: &InputEvent) -> Option<Gesture> {
        match event {
            InputEvent::Pointer(event) => self.pointer(event),
            InputEvent::Touch(event) => self.touch(event),
        }
    }

    /// Normalize a pointer event. Non-primary buttons are not gestures.
    #[must_use]
    pub fn pointer(&self, event: &PointerEvent) -> Option<Gesture> {
        if self.mode != InputMode::Pointer || event.button != PointerButton::Primary {
            return None;
        }
        let phase = match event.phase {
            PointerPhase::Down => GesturePhase::Press,
            PointerPhase::Move => GesturePhase::Move,
            PointerPhase::Up => GesturePhase::Release,
        };
        Some(Gesture {
            phase,
            target: event.target,
            position: event.position,
        })
    }

    /// Normalize a touch event. Anything but exactly one contact is not a gesture.
    #[must_use]
    pub fn touch(&self, event: &TouchEvent) -> Option<Gesture> {
        if self.mode != InputMode::Touch {
            return None;
        }
        let [contact] = event.contacts.as_slice() else {
            return None;
        };
        let phase = match event.phase {
            TouchPhase::Start => GesturePhase::Press,
            TouchPhase::Move => GesturePhase::Move,
            TouchPhase::End => GesturePhase::Release,
        };
        Some(Gesture {
            phase,
            target: contact.target,
            position: contact.position,
        })
    }
}
