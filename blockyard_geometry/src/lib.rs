// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Blockyard Geometry: rectangle overlap scoring for block drag-and-drop.
//!
//! This crate is the stateless geometry layer of Blockyard. It answers three
//! questions and nothing else:
//!
//! - How much do two axis-aligned rectangles overlap? See [`overlap_area`].
//! - Which of a list of candidate rectangles overlaps a probe the most? See
//!   [`best_overlap`].
//! - Where on screen is an element, and which drop zone contains a point? See
//!   [`SurfaceQuery`], [`rect_of`], and [`Zones`].
//!
//! It does not perform layout. The rendering layer owns positions and sizes and
//! exposes them through [`SurfaceQuery`]; this crate only turns them into
//! [`kurbo::Rect`] values and scores them.
//!
//! ## Coordinate convention
//!
//! Rectangles use Kurbo's y-down convention: `x0` is the left edge, `y0` the
//! top edge, `x1` the right edge and `y1` the bottom edge, with `y1 >= y0`.
//! Rectangles are expected to be finite and non-negative in size.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use blockyard_geometry::{best_overlap, overlap_area};
//!
//! let dragged = Rect::new(0.0, 0.0, 20.0, 20.0);
//! assert_eq!(overlap_area(&dragged, &Rect::new(10.0, 10.0, 30.0, 30.0)), 100.0);
//!
//! let candidates = [
//!     Rect::new(100.0, 100.0, 120.0, 120.0),
//!     Rect::new(15.0, 0.0, 40.0, 20.0),
//!     Rect::new(5.0, 5.0, 25.0, 25.0),
//! ];
//! assert_eq!(best_overlap(&dragged, &candidates), Some((2, 225.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod overlap;
mod surface;
mod zone;

pub use overlap::{best_overlap, overlap_area};
pub use surface::{SurfaceQuery, rect_of};
pub use zone::{Zone, Zones};
