// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Blockyard Drag: drag-and-drop for block scripts.
//!
//! This crate decides, for a pointer or touch gesture, which block is being
//! dragged, which attachment points it may drop into, which of those wins
//! under the pointer, and what structural change the release makes.
//!
//! - [`GestureAdapter`] turns raw pointer or touch input into single-contact
//!   [`Gesture`]s, dropping multi-touch and non-primary buttons.
//! - [`DragController`] owns the one drag in flight and walks it through
//!   `Idle → Armed → Dragging → Idle`.
//! - [`eligible_targets`] lists the points a block may drop into; they are
//!   captured once per drag as [`Candidates`].
//! - [`HitTestTicker`] paces hit-testing independently of the move-event rate.
//! - [`DragFeedback`] receives the "active target" and "has a valid drop"
//!   signals for rendering.
//!
//! The script itself stays with the host and is borrowed through
//! [`DragHost`], i.e. [`ScriptTree`](blockyard_script::ScriptTree) plus
//! [`SurfaceQuery`](blockyard_geometry::SurfaceQuery).
//!
//! ## Minimal example
//!
//! ```rust
//! use blockyard_drag::{DragConfig, DragController, DropOutcome, GestureAdapter, InputMode};
//! use blockyard_drag::{PointerButton, PointerEvent, PointerPhase};
//! use blockyard_geometry::Zones;
//! use blockyard_script::{Category, Element, PointKind, Script, ScriptTree};
//! use kurbo::{Point, Rect, Size};
//!
//! let zones = Zones::new(Rect::new(0.0, 0.0, 150.0, 600.0), Rect::new(150.0, 0.0, 800.0, 600.0));
//! let mut script = Script::new(zones);
//! let template = script.add_template(Category::Step, Point::new(10.0, 10.0), Size::new(100.0, 20.0));
//! let anchor = script.add_block(Category::Step, Point::new(300.0, 100.0), Size::new(100.0, 20.0));
//! let next = script
//!     .add_point(anchor, PointKind::Next, Rect::new(0.0, 20.0, 100.0, 40.0))
//!     .unwrap();
//!
//! let adapter = GestureAdapter::new(InputMode::Pointer);
//! let mut drag = DragController::new(DragConfig::default());
//! let mut feed = |phase, x, y, now| {
//!     let event = PointerEvent {
//!         phase,
//!         button: PointerButton::Primary,
//!         target: Element::Block(template),
//!         position: Point::new(x, y),
//!     };
//!     let gesture = adapter.pointer(&event).unwrap();
//!     drag.handle(&mut script, &mut (), &gesture, now).unwrap()
//! };
//!
//! feed(PointerPhase::Down, 20.0, 20.0, 0);
//! feed(PointerPhase::Move, 310.0, 130.0, 0);
//! drag.tick(&script, &mut (), 20);
//! let outcome = drag.end(&mut script, &mut (), Point::new(310.0, 130.0)).unwrap();
//!
//! let Some(DropOutcome::Attached { block, point, .. }) = outcome else { unreachable!() };
//! assert_eq!(point, next);
//! assert_eq!(script.parent_point(block), Some(next));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod error;
mod feedback;
mod input;
mod scheduler;
mod session;
mod targets;

pub use config::DragConfig;
pub use controller::{DragController, DragHost, DropOutcome};
pub use error::DragError;
pub use feedback::DragFeedback;
pub use input::{
    Gesture, GestureAdapter, GesturePhase, InputEvent, InputMode, PointerButton, PointerEvent,
    PointerPhase, TouchContact, TouchEvent, TouchPhase,
};
pub use scheduler::HitTestTicker;
pub use session::{Candidates, DragPhase, DragSession, Origin};
pub use targets::{Targets, accepts, eligible_targets, is_free_for};
