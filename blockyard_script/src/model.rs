// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Block categories, attachment point kinds, and surface elements.

use alloc::string::String;

use crate::{BlockId, PointId};

/// Value type carried by value blocks and declared by sockets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Numeric expression.
    Number,
    /// Boolean expression.
    Boolean,
    /// String expression.
    String,
}

/// What kind of block this is; drives which attachment points accept it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Statement-like block that chains through slots.
    Step,
    /// Number-valued expression.
    Number,
    /// Boolean-valued expression.
    Boolean,
    /// String-valued expression.
    String,
    /// Anything else (triggers, comments). Never attachable.
    Other,
}

impl Category {
    /// The value type of a value block, or `None` for steps and other blocks.
    #[must_use]
    pub const fn value_type(self) -> Option<ValueType> {
        match self {
            Self::Number => Some(ValueType::Number),
            Self::Boolean => Some(ValueType::Boolean),
            Self::String => Some(ValueType::String),
            Self::Step | Self::Other => None,
        }
    }
}

impl From<ValueType> for Category {
    fn from(ty: ValueType) -> Self {
        match ty {
            ValueType::Number => Self::Number,
            ValueType::Boolean => Self::Boolean,
            ValueType::String => Self::String,
        }
    }
}

/// Kind of attachment point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointKind {
    /// Slot after a step block; the following step chains here.
    Next,
    /// Slot inside a container step (loop bodies, branches).
    Contained,
    /// Socket accepting exactly one value block of the given type.
    Socket(ValueType),
}

impl PointKind {
    /// Returns `true` for [`Next`](Self::Next) and [`Contained`](Self::Contained).
    #[must_use]
    pub const fn is_slot(self) -> bool {
        matches!(self, Self::Next | Self::Contained)
    }
}

/// Editable literal shown in a socket when no block is plugged in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputWidget {
    /// Type of literal the widget edits.
    pub value_type: ValueType,
    /// Current text of the widget.
    pub text: String,
}

impl InputWidget {
    /// A fresh widget with the default literal for `value_type`.
    #[must_use]
    pub fn default_for(value_type: ValueType) -> Self {
        let text = match value_type {
            ValueType::Number => "0",
            ValueType::Boolean => "false",
            ValueType::String => "",
        };
        Self {
            value_type,
            text: String::from(text),
        }
    }
}

/// What an attachment point currently holds.
///
/// Slots are `Empty` or hold a block. Sockets hold an input widget or a block
/// and are never `Empty`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointContent {
    /// Empty slot.
    Empty,
    /// Socket showing its editable input.
    Input(InputWidget),
    /// A plugged or chained block.
    Block(BlockId),
}

impl PointContent {
    /// The occupying block, if any.
    #[must_use]
    pub fn block(&self) -> Option<BlockId> {
        match self {
            Self::Block(id) => Some(*id),
            Self::Empty | Self::Input(_) => None,
        }
    }
}

/// Top-level layer a block tree lives in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// Template in the block palette.
    Palette,
    /// Authoring canvas.
    Canvas,
    /// Free-floating drag layer above everything else.
    Floating,
}

/// A surface element that input can target and geometry can be read from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// A block's outer wrapper.
    Block(BlockId),
    /// An attachment point's drop area.
    Point(PointId),
    /// The editable input inside a socket.
    Input(PointId),
    /// Surface background, outside any block.
    Background,
}
