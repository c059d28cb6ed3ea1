// Copyright 2025 the Blockyard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end drag scenarios against the in-memory `Script`.

use blockyard_drag::{
    DragConfig, DragController, DragError, DragFeedback, DragPhase, DropOutcome, GestureAdapter,
    InputMode, TouchContact, TouchEvent, TouchPhase,
};
use blockyard_geometry::{SurfaceQuery, Zones};
use blockyard_script::{
    BlockId, Category, Element, InputWidget, MutationError, PointContent, PointId, PointKind,
    Region, Script, ScriptTree, ValueType,
};
use kurbo::{Point, Rect, Size};
use smallvec::smallvec;

const STEP: Size = Size::new(100.0, 20.0);
const VALUE: Size = Size::new(60.0, 20.0);
const SOCKET: Rect = Rect::new(100.0, 5.0, 160.0, 25.0);

/// Records every feedback signal in order.
#[derive(Debug, Default)]
struct Recorder {
    active: Vec<Option<PointId>>,
    drag_active: Vec<(BlockId, bool)>,
}

impl DragFeedback for Recorder {
    fn set_active(&mut self, point: Option<PointId>) {
        self.active.push(point);
    }

    fn set_drag_active(&mut self, block: BlockId, active: bool) {
        self.drag_active.push((block, active));
    }
}

fn zones() -> Zones {
    Zones::new(
        Rect::new(0.0, 0.0, 150.0, 600.0),
        Rect::new(150.0, 0.0, 800.0, 600.0),
    )
}

/// A canvas step at `(x, y)` whose `Next` slot spans the 20 units below it.
fn anchored_slot(script: &mut Script, x: f64, y: f64) -> PointId {
    let block = script.add_block(Category::Step, Point::new(x, y), STEP);
    script
        .add_point(block, PointKind::Next, Rect::new(0.0, 20.0, 100.0, 40.0))
        .unwrap()
}

/// A canvas step at `(x, y)` with one socket of type `ty`.
fn socket_holder(script: &mut Script, x: f64, y: f64, ty: ValueType) -> PointId {
    let block = script.add_block(Category::Step, Point::new(x, y), Size::new(200.0, 30.0));
    script
        .add_point(block, PointKind::Socket(ty), SOCKET)
        .unwrap()
}

/// Press `block` at its top-left plus `(10, 10)`, then move by `delta`.
fn drag_by(
    drag: &mut DragController,
    script: &mut Script,
    block: BlockId,
    dx: f64,
    dy: f64,
) -> Point {
    let press = script.origin(block).unwrap() + (10.0, 10.0);
    assert!(drag.init(&*script, &Element::Block(block), press));
    let release = press + (dx, dy);
    drag.move_to(script, &mut (), release, 0).unwrap();
    release
}

#[test]
fn scenario_a_palette_step_drops_into_best_slot() {
    let mut script = Script::new(zones());
    let template = script.add_template(Category::Step, Point::new(10.0, 10.0), STEP);
    // Slots: (200,300)-(300,320), (400,70)-(500,90), (545,70)-(645,90).
    let far = anchored_slot(&mut script, 200.0, 280.0);
    let near = anchored_slot(&mut script, 400.0, 50.0);
    let best = anchored_slot(&mut script, 545.0, 50.0);
    let blocks_before = script.block_count();

    let mut drag = DragController::new(DragConfig::default());
    let mut feedback = Recorder::default();
    // Template moves to (485,80): overlaps are 0, 15x10 = 150, and 40x10 = 400.
    let release = drag_by(&mut drag, &mut script, template, 475.0, 70.0);
    let session = drag.session().unwrap();
    assert!(session.is_clone());
    assert_eq!(session.candidates().points(), &[far, near, best]);
    let clone = session.dragged();

    assert!(drag.tick(&script, &mut feedback, 20));
    assert_eq!(drag.session().unwrap().winning(), Some(best));

    let outcome = drag.end(&mut script, &mut feedback, release).unwrap();
    assert_eq!(
        outcome,
        Some(DropOutcome::Attached {
            block: clone,
            point: best,
            ejected: None
        })
    );
    assert_eq!(script.parent_point(clone), Some(best));
    assert_eq!(script.origin(clone), Some(Point::new(545.0, 70.0)));
    assert_eq!(script.block_count(), blocks_before + 1);
    assert_eq!(script.origin(template), Some(Point::new(10.0, 10.0)));
    assert_eq!(script.region(template), Some(Region::Palette));

    assert_eq!(feedback.active, vec![Some(best), None]);
    assert_eq!(feedback.drag_active, vec![(clone, true), (clone, false)]);
    assert_eq!(drag.phase(), DragPhase::Idle);
}

#[test]
fn scenario_b_value_moves_between_sockets() {
    let mut script = Script::new(zones());
    let first = socket_holder(&mut script, 200.0, 100.0, ValueType::Number);
    let second = socket_holder(&mut script, 200.0, 300.0, ValueType::Number);
    let value = script.add_block(Category::Number, Point::ORIGIN, VALUE);
    script.insert_into_socket(first, value).unwrap();
    let blocks_before = script.block_count();

    let mut drag = DragController::new(DragConfig::default());
    let release = drag_by(&mut drag, &mut script, value, 0.0, 200.0);
    let session = drag.session().unwrap();
    assert!(!session.is_clone());
    assert_eq!(session.dragged(), value);
    assert_eq!(session.origin().parent, Some(first));
    assert_eq!(session.candidates().points(), &[second]);
    // Detaching already put a fresh input back.
    assert!(matches!(
        script.point_content(first),
        Some(PointContent::Input(_))
    ));

    drag.tick(&script, &mut (), 20);
    let outcome = drag.end(&mut script, &mut (), release).unwrap();

    assert_eq!(
        outcome,
        Some(DropOutcome::Attached {
            block: value,
            point: second,
            ejected: Some(InputWidget::default_for(ValueType::Number)),
        })
    );
    assert_eq!(
        script.point_content(first),
        Some(&PointContent::Input(InputWidget::default_for(
            ValueType::Number
        )))
    );
    assert_eq!(
        script.point_content(second),
        Some(&PointContent::Block(value))
    );
    assert_eq!(script.block_count(), blocks_before);
}

#[test]
fn scenario_c_string_dropped_on_palette_is_discarded_with_children() {
    let mut script = Script::new(zones());
    let template = script.add_template(Category::String, Point::new(10.0, 10.0), VALUE);
    let join = script.add_block(Category::String, Point::new(300.0, 200.0), Size::new(200.0, 30.0));
    let part = script
        .add_point(join, PointKind::Socket(ValueType::String), SOCKET)
        .unwrap();
    let child = script.add_block(Category::String, Point::ORIGIN, VALUE);
    script.insert_into_socket(part, child).unwrap();

    let mut drag = DragController::new(DragConfig::default());
    let release = drag_by(&mut drag, &mut script, join, -250.0, -150.0);
    assert_eq!(script.zone_at(release), blockyard_geometry::Zone::Palette);
    drag.tick(&script, &mut (), 20);
    let outcome = drag.end(&mut script, &mut (), release).unwrap();

    assert_eq!(
        outcome,
        Some(DropOutcome::Discarded {
            block: join,
            removed: 2
        })
    );
    assert!(!script.is_alive(join));
    assert!(!script.is_alive(child));
    assert_eq!(script.roots(Region::Palette).collect::<Vec<_>>(), vec![template]);
    assert_eq!(script.block_count(), 1);
}

#[test]
fn scenario_d_second_finger_is_ignored_mid_drag() {
    let mut script = Script::new(zones());
    let slot = anchored_slot(&mut script, 400.0, 50.0);
    let block = script.add_block(Category::Step, Point::new(300.0, 300.0), STEP);
    let adapter = GestureAdapter::new(InputMode::Touch);
    let mut drag = DragController::new(DragConfig::default());

    let finger = |position: Point| TouchContact {
        target: Element::Block(block),
        position,
    };
    let one = |phase, position| TouchEvent {
        phase,
        contacts: smallvec![finger(position)],
    };

    for (event, now) in [
        (one(TouchPhase::Start, Point::new(310.0, 310.0)), 0),
        (one(TouchPhase::Move, Point::new(410.0, 80.0)), 5),
    ] {
        let gesture = adapter.touch(&event).unwrap();
        drag.handle(&mut script, &mut (), &gesture, now).unwrap();
    }
    assert!(drag.tick(&script, &mut (), 25));
    let pointer = drag.session().unwrap().pointer();
    let winning = drag.session().unwrap().winning_index();
    assert_eq!(drag.session().unwrap().winning(), Some(slot));

    let pinch = TouchEvent {
        phase: TouchPhase::Move,
        contacts: smallvec![
            finger(Point::new(600.0, 500.0)),
            finger(Point::new(650.0, 550.0))
        ],
    };
    assert!(adapter.touch(&pinch).is_none());

    assert!(drag.tick(&script, &mut (), 45));
    let session = drag.session().unwrap();
    assert_eq!(session.pointer(), pointer);
    assert_eq!(session.winning_index(), winning);
    assert_eq!(script.origin(block), Some(Point::new(400.0, 70.0)));
}

#[test]
fn scenario_e_open_canvas_drop_stays_where_released() {
    let mut script = Script::new(zones());
    anchored_slot(&mut script, 200.0, 50.0);
    anchored_slot(&mut script, 400.0, 50.0);
    let block = script.add_block(Category::Step, Point::new(300.0, 300.0), STEP);

    let mut drag = DragController::new(DragConfig::default());
    let mut feedback = Recorder::default();
    let release = drag_by(&mut drag, &mut script, block, 150.0, 100.0);
    assert_eq!(drag.session().unwrap().candidates().len(), 2);
    drag.tick(&script, &mut feedback, 20);
    assert_eq!(drag.session().unwrap().winning(), None);

    let outcome = drag.end(&mut script, &mut feedback, release).unwrap();
    assert_eq!(
        outcome,
        Some(DropOutcome::Placed {
            block,
            position: Point::new(450.0, 400.0)
        })
    );
    assert_eq!(script.region(block), Some(Region::Canvas));
    assert_eq!(script.parent_point(block), None);
    assert_eq!(feedback.active, vec![None]);
    assert_eq!(feedback.drag_active, vec![(block, false)]);
}

#[test]
fn press_while_busy_keeps_the_dragged_block() {
    let mut script = Script::new(zones());
    let a = script.add_block(Category::Step, Point::new(200.0, 200.0), STEP);
    let b = script.add_block(Category::Step, Point::new(400.0, 400.0), STEP);
    let mut drag = DragController::new(DragConfig::default());

    assert!(drag.init(&script, &Element::Block(a), Point::new(210.0, 210.0)));
    assert!(!drag.init(&script, &Element::Block(b), Point::new(410.0, 410.0)));
    assert_eq!(drag.dragged(), Some(a));

    drag.move_to(&mut script, &mut (), Point::new(220.0, 220.0), 0).unwrap();
    assert!(!drag.init(&script, &Element::Block(b), Point::new(410.0, 410.0)));
    assert_eq!(drag.dragged(), Some(a));
    assert_eq!(drag.phase(), DragPhase::Dragging);
}

#[test]
fn press_outside_any_block_stays_idle() {
    let mut script = Script::new(zones());
    let holder = socket_holder(&mut script, 200.0, 100.0, ValueType::String);
    let mut drag = DragController::new(DragConfig::default());

    assert!(!drag.init(&script, &Element::Background, Point::new(500.0, 500.0)));
    assert!(!drag.init(&script, &Element::Input(holder), Point::new(310.0, 110.0)));
    assert_eq!(drag.phase(), DragPhase::Idle);
}

#[test]
fn pressing_a_point_drags_its_owner() {
    let mut script = Script::new(zones());
    let slot = anchored_slot(&mut script, 200.0, 100.0);
    let owner = script.point_owner(slot).unwrap();
    let mut drag = DragController::new(DragConfig::default());

    assert!(drag.init(&script, &Element::Point(slot), Point::new(210.0, 125.0)));
    assert_eq!(drag.dragged(), Some(owner));
}

#[test]
fn idle_moves_and_releases_are_no_ops() {
    let mut script = Script::new(zones());
    let block = script.add_block(Category::Step, Point::new(200.0, 200.0), STEP);
    let mut drag = DragController::new(DragConfig::default());

    drag.move_to(&mut script, &mut (), Point::new(500.0, 500.0), 0).unwrap();
    assert!(!drag.tick(&script, &mut (), 100));
    assert_eq!(drag.end(&mut script, &mut (), Point::ORIGIN), Ok(None));
    assert_eq!(script.origin(block), Some(Point::new(200.0, 200.0)));
    assert_eq!(drag.next_deadline(), None);
}

#[test]
fn release_before_threshold_is_a_click() {
    let mut script = Script::new(zones());
    let slot = anchored_slot(&mut script, 200.0, 100.0);
    let block = script.add_block(Category::Step, Point::new(400.0, 400.0), STEP);
    script.insert_into_slot(slot, block).unwrap();
    let mut drag = DragController::new(DragConfig::default().with_drag_threshold(5.0));

    assert!(drag.init(&script, &Element::Block(block), Point::new(210.0, 130.0)));
    drag.move_to(&mut script, &mut (), Point::new(213.0, 133.0), 0).unwrap();
    assert_eq!(drag.phase(), DragPhase::Armed);

    let outcome = drag.end(&mut script, &mut (), Point::new(213.0, 133.0));
    assert_eq!(outcome, Ok(Some(DropOutcome::Clicked(block))));
    assert_eq!(drag.phase(), DragPhase::Idle);
    // Nothing was detached.
    assert_eq!(script.parent_point(block), Some(slot));
}

#[test]
fn crossing_threshold_keeps_block_under_the_pointer() {
    let mut script = Script::new(zones());
    let block = script.add_block(Category::Step, Point::new(400.0, 400.0), STEP);
    let mut drag = DragController::new(DragConfig::default().with_drag_threshold(5.0));

    assert!(drag.init(&script, &Element::Block(block), Point::new(410.0, 410.0)));
    drag.move_to(&mut script, &mut (), Point::new(413.0, 410.0), 0).unwrap();
    drag.move_to(&mut script, &mut (), Point::new(416.0, 410.0), 0).unwrap();
    assert_eq!(drag.phase(), DragPhase::Dragging);
    assert_eq!(script.origin(block), Some(Point::new(406.0, 400.0)));
}

#[test]
fn palette_clone_dropped_on_canvas_adds_one_block() {
    let mut script = Script::new(zones());
    let template = script.add_template(Category::Boolean, Point::new(10.0, 10.0), VALUE);
    let mut drag = DragController::new(DragConfig::default());

    let release = drag_by(&mut drag, &mut script, template, 400.0, 300.0);
    let clone = drag.dragged().unwrap();
    assert_ne!(clone, template);
    drag.tick(&script, &mut (), 20);
    let outcome = drag.end(&mut script, &mut (), release).unwrap();

    assert!(matches!(outcome, Some(DropOutcome::Placed { block, .. }) if block == clone));
    assert_eq!(script.roots(Region::Canvas).collect::<Vec<_>>(), vec![clone]);
    assert_eq!(script.roots(Region::Palette).collect::<Vec<_>>(), vec![template]);
    assert_eq!(script.origin(template), Some(Point::new(10.0, 10.0)));
    assert_eq!(script.block_count(), 2);
}

#[test]
fn attached_block_dropped_elsewhere_leaves_its_point_once() {
    let mut script = Script::new(zones());
    let slot = anchored_slot(&mut script, 200.0, 100.0);
    let block = script.add_block(Category::Step, Point::new(400.0, 400.0), STEP);
    script.insert_into_slot(slot, block).unwrap();
    let mut drag = DragController::new(DragConfig::default());

    let release = drag_by(&mut drag, &mut script, block, 300.0, 300.0);
    assert_eq!(script.point_content(slot), Some(&PointContent::Empty));
    drag.tick(&script, &mut (), 20);
    drag.end(&mut script, &mut (), release).unwrap();

    assert_eq!(script.point_content(slot), Some(&PointContent::Empty));
    assert_eq!(script.parent_point(block), None);
    assert_eq!(script.block_count(), 2);
    let canvas: Vec<_> = script.roots(Region::Canvas).collect();
    assert_eq!(canvas.iter().filter(|b| **b == block).count(), 1);
}

#[test]
fn dropping_outside_every_surface_discards() {
    let mut script = Script::new(zones());
    let slot = anchored_slot(&mut script, 200.0, 100.0);
    let top = script.add_block(Category::Step, Point::new(400.0, 400.0), STEP);
    let top_next = script
        .add_point(top, PointKind::Next, Rect::new(0.0, 20.0, 100.0, 40.0))
        .unwrap();
    let below = script.add_block(Category::Step, Point::new(400.0, 400.0), STEP);
    script.insert_into_slot(slot, top).unwrap();
    script.insert_into_slot(top_next, below).unwrap();
    let mut drag = DragController::new(DragConfig::default());

    let release = drag_by(&mut drag, &mut script, top, 700.0, 0.0);
    drag.tick(&script, &mut (), 20);
    let outcome = drag.end(&mut script, &mut (), release).unwrap();

    assert_eq!(
        outcome,
        Some(DropOutcome::Discarded {
            block: top,
            removed: 2
        })
    );
    assert!(!script.is_alive(below));
    assert_eq!(script.point_content(slot), Some(&PointContent::Empty));
}

#[test]
fn stale_winner_falls_back_to_placement() {
    let mut script = Script::new(zones());
    let slot = anchored_slot(&mut script, 400.0, 50.0);
    let block = script.add_block(Category::Step, Point::new(300.0, 300.0), STEP);
    let mut drag = DragController::new(DragConfig::default());

    let release = drag_by(&mut drag, &mut script, block, 100.0, -230.0);
    drag.tick(&script, &mut (), 20);
    assert_eq!(drag.session().unwrap().winning(), Some(slot));

    // The slot's owner disappears mid-drag.
    let owner = script.point_owner(slot).unwrap();
    script.discard(owner).unwrap();

    let outcome = drag.end(&mut script, &mut (), release).unwrap();
    assert!(matches!(outcome, Some(DropOutcome::Placed { block: placed, .. }) if placed == block));
    assert_eq!(script.region(block), Some(Region::Canvas));
}

#[test]
fn ticker_paces_hit_tests() {
    let mut script = Script::new(zones());
    anchored_slot(&mut script, 400.0, 50.0);
    let block = script.add_block(Category::Step, Point::new(300.0, 300.0), STEP);
    let mut drag = DragController::new(DragConfig::default().with_hit_test_interval(50));

    assert!(drag.init(&script, &Element::Block(block), Point::new(310.0, 310.0)));
    drag.move_to(&mut script, &mut (), Point::new(320.0, 320.0), 100).unwrap();
    assert_eq!(drag.next_deadline(), Some(150));
    assert!(!drag.tick(&script, &mut (), 149));
    assert!(drag.tick(&script, &mut (), 400));
    assert_eq!(drag.next_deadline(), Some(450));

    drag.end(&mut script, &mut (), Point::new(320.0, 320.0)).unwrap();
    assert_eq!(drag.next_deadline(), None);
    assert!(!drag.tick(&script, &mut (), 1_000));
}

/// Delegates to `Script` but rejects every slot insertion.
struct RejectingSlots(Script);

impl ScriptTree for RejectingSlots {
    fn category(&self, block: BlockId) -> Option<Category> {
        self.0.category(block)
    }

    fn region(&self, block: BlockId) -> Option<Region> {
        self.0.region(block)
    }

    fn draggable_at(&self, element: &Element) -> Option<BlockId> {
        self.0.draggable_at(element)
    }

    fn canvas_points(&self, out: &mut Vec<PointId>) {
        self.0.canvas_points(out);
    }

    fn point_kind(&self, point: PointId) -> Option<PointKind> {
        self.0.point_kind(point)
    }

    fn point_content(&self, point: PointId) -> Option<&PointContent> {
        self.0.point_content(point)
    }

    fn point_owner(&self, point: PointId) -> Option<BlockId> {
        self.0.point_owner(point)
    }

    fn parent_point(&self, block: BlockId) -> Option<PointId> {
        self.0.parent_point(block)
    }

    fn subtree(&self, block: BlockId, out: &mut Vec<BlockId>) {
        self.0.subtree(block, out);
    }

    fn clone_block(&mut self, template: BlockId) -> Result<BlockId, MutationError> {
        self.0.clone_block(template)
    }

    fn detach(&mut self, block: BlockId) -> Result<(), MutationError> {
        self.0.detach(block)
    }

    fn insert_into_slot(&mut self, slot: PointId, _: BlockId) -> Result<(), MutationError> {
        Err(MutationError::Occupied(slot))
    }

    fn insert_into_socket(
        &mut self,
        socket: PointId,
        block: BlockId,
    ) -> Result<Option<InputWidget>, MutationError> {
        self.0.insert_into_socket(socket, block)
    }

    fn move_to_free_canvas(
        &mut self,
        block: BlockId,
        position: Point,
    ) -> Result<(), MutationError> {
        self.0.move_to_free_canvas(block, position)
    }

    fn discard(&mut self, block: BlockId) -> Result<usize, MutationError> {
        self.0.discard(block)
    }

    fn translate(&mut self, block: BlockId, delta: kurbo::Vec2) -> Result<(), MutationError> {
        self.0.translate(block, delta)
    }
}

impl SurfaceQuery<Element> for RejectingSlots {
    fn position(&self, element: &Element) -> Option<Point> {
        self.0.position(element)
    }

    fn size(&self, element: &Element) -> Option<Size> {
        self.0.size(element)
    }

    fn zone_at(&self, point: Point) -> blockyard_geometry::Zone {
        self.0.zone_at(point)
    }
}

#[test]
fn failed_drop_reports_and_resets() {
    let mut script = Script::new(zones());
    let slot = anchored_slot(&mut script, 400.0, 50.0);
    let block = script.add_block(Category::Step, Point::new(300.0, 300.0), STEP);
    let mut host = RejectingSlots(script);
    let mut drag = DragController::new(DragConfig::default());
    let mut feedback = Recorder::default();

    assert!(drag.init(&host, &Element::Block(block), Point::new(310.0, 310.0)));
    drag.move_to(&mut host, &mut feedback, Point::new(410.0, 80.0), 0).unwrap();
    drag.tick(&host, &mut feedback, 20);
    assert_eq!(drag.session().unwrap().winning(), Some(slot));

    let result = drag.end(&mut host, &mut feedback, Point::new(410.0, 80.0));
    assert_eq!(
        result,
        Err(DragError::StructuralMutationFailed {
            block,
            source: MutationError::Occupied(slot),
        })
    );
    assert_eq!(drag.phase(), DragPhase::Idle);
    assert_eq!(drag.next_deadline(), None);
    assert_eq!(feedback.active.last(), Some(&None));
    assert_eq!(feedback.drag_active.last(), Some(&(block, false)));
    // The error names the block left floating, and the slot is untouched.
    let stranded = result.unwrap_err().block();
    assert_eq!(stranded, block);
    assert_eq!(host.0.region(stranded), Some(Region::Floating));
    assert_eq!(host.0.point_content(slot), Some(&PointContent::Empty));

    // The controller accepts a new drag right away.
    assert!(drag.init(&host, &Element::Block(block), Point::new(410.0, 80.0)));
}

#[test]
fn failed_lift_resets_to_idle() {
    let mut script = Script::new(zones());
    let block = script.add_block(Category::Step, Point::new(300.0, 300.0), STEP);
    let mut drag = DragController::new(DragConfig::default());

    assert!(drag.init(&script, &Element::Block(block), Point::new(310.0, 310.0)));
    script.discard(block).unwrap();
    let result = drag.move_to(&mut script, &mut (), Point::new(320.0, 320.0), 0);

    assert_eq!(
        result,
        Err(DragError::StructuralMutationFailed {
            block,
            source: MutationError::StaleBlock(block),
        })
    );
    assert_eq!(drag.phase(), DragPhase::Idle);
}

#[test]
fn vanished_block_mid_drag_clears_feedback() {
    let mut script = Script::new(zones());
    let slot = anchored_slot(&mut script, 400.0, 50.0);
    let block = script.add_block(Category::Step, Point::new(300.0, 300.0), STEP);
    let mut drag = DragController::new(DragConfig::default());
    let mut feedback = Recorder::default();

    assert!(drag.init(&script, &Element::Block(block), Point::new(310.0, 310.0)));
    drag.move_to(&mut script, &mut feedback, Point::new(410.0, 80.0), 0).unwrap();
    drag.tick(&script, &mut feedback, 20);
    assert_eq!(feedback.active, [Some(slot)]);
    assert_eq!(feedback.drag_active, [(block, true)]);

    script.discard(block).unwrap();
    let result = drag.move_to(&mut script, &mut feedback, Point::new(420.0, 90.0), 40);

    assert_eq!(
        result,
        Err(DragError::StructuralMutationFailed {
            block,
            source: MutationError::StaleBlock(block),
        })
    );
    assert_eq!(drag.phase(), DragPhase::Idle);
    assert_eq!(drag.next_deadline(), None);
    assert_eq!(feedback.active.last(), Some(&None));
    assert_eq!(feedback.drag_active.last(), Some(&(block, false)));
}
