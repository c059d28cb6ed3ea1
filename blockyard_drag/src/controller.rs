// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owning drag controller: `Idle → Armed → Dragging → Idle`.

use core::mem;

use blockyard_geometry::{SurfaceQuery, rect_of};
use blockyard_script::{
    BlockId, Element, InputWidget, MutationError, PointId, Region, ScriptTree,
};
use kurbo::Point;

use crate::{
    Candidates, DragConfig, DragError, DragFeedback, DragPhase, DragSession, Gesture,
    GesturePhase, HitTestTicker, Origin, eligible_targets, is_free_for,
};

/// Everything a drag needs from the host: the script tree and its surface.
///
/// Implemented for every type that provides both.
pub trait DragHost: ScriptTree + SurfaceQuery<Element> {}

impl<T: ScriptTree + SurfaceQuery<Element> + ?Sized> DragHost for T {}

/// How a gesture ended.
#[derive(Clone, Debug, PartialEq)]
pub enum DropOutcome {
    /// The block was inserted at the winning point.
    Attached {
        /// The dropped block.
        block: BlockId,
        /// Where it was inserted.
        point: PointId,
        /// Input widget the block replaced, for sockets.
        ejected: Option<InputWidget>,
    },
    /// The block was dropped on the palette or outside every surface and
    /// destroyed together with its descendants.
    Discarded {
        /// The destroyed block.
        block: BlockId,
        /// How many blocks were destroyed, the block itself included.
        removed: usize,
    },
    /// The block was left free-floating on the canvas.
    Placed {
        /// The placed block.
        block: BlockId,
        /// Its top-left corner.
        position: Point,
    },
    /// The block was pressed and released without becoming a drag.
    Clicked(BlockId),
}

#[derive(Debug)]
struct Armed {
    block: BlockId,
    press: Point,
    origin: Origin,
    candidates: Candidates,
}

#[derive(Debug)]
struct Dragging {
    session: DragSession,
    ticker: HitTestTicker,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Armed(Armed),
    Dragging(Dragging),
}

/// Drives the single drag in flight.
///
/// The controller owns the session state and the hit-test ticker; the script
/// and the feedback sink are borrowed per call. Every transition that leaves
/// `Dragging` drops the ticker with the session, so no hit-test can outlive
/// its drag.
///
/// Transitions that do not apply to the current phase are silent no-ops: a
/// press while a drag is armed or running, or a move or release while idle.
///
/// ## Minimal example
///
/// ```
/// use blockyard_drag::{DragConfig, DragController, DropOutcome};
/// use blockyard_geometry::Zones;
/// use blockyard_script::{Category, Element, Script};
/// use kurbo::{Point, Rect, Size};
///
/// let zones = Zones::new(Rect::new(0.0, 0.0, 100.0, 400.0), Rect::new(100.0, 0.0, 600.0, 400.0));
/// let mut script = Script::new(zones);
/// let block = script.add_block(Category::Other, Point::new(200.0, 50.0), Size::new(80.0, 20.0));
///
/// let mut drag = DragController::new(DragConfig::default());
/// assert!(drag.init(&script, &Element::Block(block), Point::new(210.0, 60.0)));
/// drag.move_to(&mut script, &mut (), Point::new(260.0, 90.0), 0).unwrap();
///
/// let outcome = drag.end(&mut script, &mut (), Point::new(260.0, 90.0)).unwrap();
/// assert_eq!(
///     outcome,
///     Some(DropOutcome::Placed { block, position: Point::new(250.0, 80.0) })
/// );
/// ```
#[derive(Debug, Default)]
pub struct DragController {
    config: DragConfig,
    state: State,
}

impl DragController {
    /// Create an idle controller.
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            state: State::Idle,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match self.state {
            State::Idle => DragPhase::Idle,
            State::Armed(_) => DragPhase::Armed,
            State::Dragging(_) => DragPhase::Dragging,
        }
    }

    /// The pressed block while armed, or the dragged block while dragging.
    #[must_use]
    pub fn dragged(&self) -> Option<BlockId> {
        match &self.state {
            State::Idle => None,
            State::Armed(armed) => Some(armed.block),
            State::Dragging(dragging) => Some(dragging.session.dragged()),
        }
    }

    /// The running drag session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            State::Dragging(dragging) => Some(&dragging.session),
            State::Idle | State::Armed(_) => None,
        }
    }

    /// When the host should call [`tick`](Self::tick) next, while dragging.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        match &self.state {
            State::Dragging(dragging) => Some(dragging.ticker.next_deadline()),
            State::Idle | State::Armed(_) => None,
        }
    }

    /// Route a normalized gesture to [`init`](Self::init),
    /// [`move_to`](Self::move_to), or [`end`](Self::end).
    pub fn handle<H, F>(
        &mut self,
        host: &mut H,
        feedback: &mut F,
        gesture: &Gesture,
        now: u64,
    ) -> Result<Option<DropOutcome>, DragError>
    where
        H: DragHost + ?Sized,
        F: DragFeedback + ?Sized,
    {
        match gesture.phase {
            GesturePhase::Press => {
                self.init(&*host, &gesture.target, gesture.position);
                Ok(None)
            }
            GesturePhase::Move => {
                self.move_to(host, feedback, gesture.position, now)?;
                Ok(None)
            }
            GesturePhase::Release => self.end(host, feedback, gesture.position),
        }
    }

    /// Arm a drag on the block enclosing `target`.
    ///
    /// Captures the block's origin and the eligible drop targets with their
    /// rectangles. Nothing is moved or cloned yet. Returns `false` (and stays
    /// as is) if a drag is already armed or running, or if `target` is not
    /// inside a draggable block.
    pub fn init<H: DragHost + ?Sized>(
        &mut self,
        host: &H,
        target: &Element,
        position: Point,
    ) -> bool {
        if !matches!(self.state, State::Idle) {
            tracing::debug!(?target, "press ignored, drag already in progress");
            return false;
        }
        let Some(block) = host.draggable_at(target) else {
            return false;
        };
        let Some(top_left) = host.position(&Element::Block(block)) else {
            return false;
        };
        let origin = Origin {
            position: top_left,
            parent: host.parent_point(block),
        };
        let candidates = Candidates::capture(host, eligible_targets(host, block));
        tracing::debug!(?block, candidates = candidates.len(), "drag armed");
        self.state = State::Armed(Armed {
            block,
            press: position,
            origin,
            candidates,
        });
        true
    }

    /// Promote an armed press to a drag.
    ///
    /// Palette templates are cloned; anything else is detached from its
    /// parent point. The dragged block lands in the floating layer at its
    /// previous position and the hit-test ticker starts at `now`. Returns
    /// `Ok(false)` if nothing was armed.
    pub fn start<H: DragHost + ?Sized>(
        &mut self,
        host: &mut H,
        position: Point,
        now: u64,
    ) -> Result<bool, DragError> {
        let armed = match mem::take(&mut self.state) {
            State::Armed(armed) => armed,
            other => {
                self.state = other;
                return Ok(false);
            }
        };
        let is_clone = host.region(armed.block) == Some(Region::Palette);
        let lifted = if is_clone {
            host.clone_block(armed.block)
        } else {
            host.detach(armed.block).map(|()| armed.block)
        };
        let dragged = lifted.map_err(|err| {
            tracing::warn!(block = ?armed.block, %err, "could not lift block");
            DragError::mutation(armed.block, err)
        })?;

        tracing::debug!(?dragged, is_clone, ?position, "drag started");
        let session = DragSession::new(
            dragged,
            armed.origin,
            is_clone,
            armed.candidates,
            armed.press,
        );
        self.state = State::Dragging(Dragging {
            session,
            ticker: HitTestTicker::new(self.config.hit_test_interval_ms, now),
        });
        Ok(true)
    }

    /// Follow the pointer.
    ///
    /// While armed, starts the drag once the pointer has travelled
    /// [`drag_threshold`](DragConfig::drag_threshold) from the press. While
    /// dragging, moves the dragged block by the pointer's delta since the
    /// last move. Hit-testing is left to [`tick`](Self::tick).
    ///
    /// If the dragged block can no longer be moved, the drag is abandoned:
    /// `feedback` is cleared, the controller goes idle and the error is
    /// returned.
    pub fn move_to<H, F>(
        &mut self,
        host: &mut H,
        feedback: &mut F,
        position: Point,
        now: u64,
    ) -> Result<(), DragError>
    where
        H: DragHost + ?Sized,
        F: DragFeedback + ?Sized,
    {
        if let State::Armed(armed) = &self.state {
            let travelled = (position - armed.press).hypot2();
            if !self.config.exceeds_threshold(travelled) {
                return Ok(());
            }
            self.start(host, position, now)?;
        }
        let State::Dragging(dragging) = &mut self.state else {
            return Ok(());
        };
        let delta = dragging.session.advance(position);
        let block = dragging.session.dragged();
        if let Err(err) = host.translate(block, delta) {
            tracing::warn!(?block, %err, "dragged block vanished");
            self.state = State::Idle;
            clear(feedback, block);
            return Err(DragError::mutation(block, err));
        }
        Ok(())
    }

    /// Run a hit-test if the ticker is due at `now`.
    ///
    /// Scores the dragged block's current rectangle against the frozen
    /// candidates. When the winner changes, `feedback` hears about the new
    /// active point and whether the dragged block has a valid drop. Returns
    /// `true` if a hit-test ran.
    pub fn tick<H, F>(&mut self, host: &H, feedback: &mut F, now: u64) -> bool
    where
        H: DragHost + ?Sized,
        F: DragFeedback + ?Sized,
    {
        let State::Dragging(dragging) = &mut self.state else {
            return false;
        };
        if !dragging.ticker.poll(now) {
            return false;
        }
        let session = &mut dragging.session;
        let block = session.dragged();
        let probe = rect_of(host, &Element::Block(block));
        if let Some(previous) = session.hit_test(probe) {
            let current = session.winning();
            tracing::trace!(?previous, ?current, "drop target changed");
            feedback.set_active(current);
            if previous.is_some() != current.is_some() {
                feedback.set_drag_active(block, current.is_some());
            }
        }
        true
    }

    /// Finish the gesture at the release `position`.
    ///
    /// - Armed: reports [`DropOutcome::Clicked`].
    /// - Dragging: inserts the dragged block at the winning point if it is
    ///   still free; otherwise discards it over the palette or outside every
    ///   surface, and leaves it on the canvas at its current top-left
    ///   everywhere else.
    /// - Idle: does nothing.
    ///
    /// The controller is idle afterwards on every path. If the script
    /// rejects the final mutation, the dragged block stays in the floating
    /// layer and the error is returned.
    pub fn end<H, F>(
        &mut self,
        host: &mut H,
        feedback: &mut F,
        position: Point,
    ) -> Result<Option<DropOutcome>, DragError>
    where
        H: DragHost + ?Sized,
        F: DragFeedback + ?Sized,
    {
        // Taking the state drops the ticker along with the rest of the drag.
        let session = match mem::take(&mut self.state) {
            State::Idle => return Ok(None),
            State::Armed(armed) => {
                tracing::debug!(block = ?armed.block, "released before dragging");
                return Ok(Some(DropOutcome::Clicked(armed.block)));
            }
            State::Dragging(dragging) => dragging.session,
        };

        let block = session.dragged();
        clear(feedback, block);

        let outcome = resolve(host, &session, position).map_err(|err| {
            tracing::warn!(?block, %err, "drop failed");
            DragError::mutation(block, err)
        })?;
        tracing::debug!(?outcome, "drag ended");
        Ok(Some(outcome))
    }
}

/// Signals sent on every exit from `Dragging`.
fn clear<F: DragFeedback + ?Sized>(feedback: &mut F, block: BlockId) {
    feedback.set_active(None);
    feedback.set_drag_active(block, false);
}

fn resolve<H: DragHost + ?Sized>(
    host: &mut H,
    session: &DragSession,
    position: Point,
) -> Result<DropOutcome, MutationError> {
    let block = session.dragged();
    let tree = &*host;
    let winner = session.winning().filter(|point| {
        let fresh = tree
            .category(block)
            .is_some_and(|category| is_free_for(tree, *point, category));
        if !fresh {
            tracing::warn!(?point, "winning target went stale");
        }
        fresh
    });

    if let Some(point) = winner {
        let ejected = match host.point_kind(point) {
            Some(kind) if kind.is_slot() => {
                host.insert_into_slot(point, block)?;
                None
            }
            _ => host.insert_into_socket(point, block)?,
        };
        return Ok(DropOutcome::Attached {
            block,
            point,
            ejected,
        });
    }

    if host.zone_at(position).discards() {
        let removed = host.discard(block)?;
        return Ok(DropOutcome::Discarded { block, removed });
    }
    let top_left = host
        .position(&Element::Block(block))
        .unwrap_or(session.origin().position);
    host.move_to_free_canvas(block, top_left)?;
    Ok(DropOutcome::Placed {
        block,
        position: top_left,
    })
}
