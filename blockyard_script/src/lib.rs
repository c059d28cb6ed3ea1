// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Blockyard Script: the block tree that drag-and-drop edits.
//!
//! A script is a forest of blocks. Each block has a [`Category`] and owns
//! attachment points:
//!
//! - **Slots** ([`PointKind::Next`], [`PointKind::Contained`]) hold step blocks.
//!   A step's `Next` slot holds the step that follows it, so a chain of steps
//!   is a chain of `Next` slots.
//! - **Sockets** ([`PointKind::Socket`]) hold exactly one value block of the
//!   declared [`ValueType`]. When nothing is plugged in, a socket shows an
//!   editable [`InputWidget`].
//!
//! Every tree root lives in one [`Region`]: the palette (immutable templates),
//! the canvas, or the floating drag layer.
//!
//! The crate has two halves:
//!
//! - [`ScriptTree`]: the query and mutation interface a drag engine drives.
//!   Mutations are atomic and report failures as [`MutationError`].
//! - [`Script`]: an in-memory implementation that also answers
//!   [`SurfaceQuery`](blockyard_geometry::SurfaceQuery) from stored geometry,
//!   which makes it usable both as a real model and as a test double.
//!
//! ## Minimal example
//!
//! ```rust
//! use blockyard_geometry::Zones;
//! use blockyard_script::{Category, InputWidget, PointKind, Script, ScriptTree, ValueType};
//! use kurbo::{Point, Rect, Size};
//!
//! let mut script = Script::new(Zones::default());
//! let say = script.add_block(Category::Step, Point::new(0.0, 0.0), Size::new(120.0, 24.0));
//! let socket = script
//!     .add_point(say, PointKind::Socket(ValueType::String), Rect::new(40.0, 4.0, 100.0, 20.0))
//!     .unwrap();
//!
//! let join = script.add_block(Category::String, Point::new(300.0, 0.0), Size::new(60.0, 16.0));
//! let ejected = script.insert_into_socket(socket, join).unwrap();
//! assert_eq!(ejected, Some(InputWidget::default_for(ValueType::String)));
//!
//! // Removing the value puts a fresh input back.
//! script.detach(join).unwrap();
//! assert!(script.point_content(socket).unwrap().block().is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arena;
mod error;
mod id;
mod model;
mod script;
mod tree;

pub use error::MutationError;
pub use id::{BlockId, PointId};
pub use model::{Category, Element, InputWidget, PointContent, PointKind, Region, ValueType};
pub use script::Script;
pub use tree::ScriptTree;
