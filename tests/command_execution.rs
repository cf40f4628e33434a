use egui::Color32;
use shape_paint::{
    Bounds, CommandError, CommandKind, PaintModel, Point, Shape, ShapeId,
};

// Helper to drive a full gesture through the model
fn gesture(model: &mut PaintModel, kind: CommandKind, points: &[Point]) {
    let (first, rest) = points.split_first().expect("gesture needs a start point");
    model.start_command(kind, *first).unwrap();
    for point in rest {
        model.update_command(*point).unwrap();
    }
    model.finalize_command().unwrap();
}

fn last_shape(model: &PaintModel) -> ShapeId {
    model.document().shape_ids().last().copied().unwrap()
}

// Observable state used for round-trip comparisons
fn snapshot(model: &PaintModel) -> (Vec<ShapeId>, Vec<(Bounds, Point)>, shape_paint::Pen, shape_paint::Brush) {
    let geometry = model
        .shapes()
        .map(|(_, shape)| (shape.bounds(), shape.offset()))
        .collect();
    (model.document().shape_ids(), geometry, model.pen(), model.brush())
}

#[test]
fn test_undo_redo_round_trip_for_every_command() {
    let mut model = PaintModel::new();
    gesture(&mut model, CommandKind::DrawRect, &[Point::new(0, 0), Point::new(40, 40)]);
    gesture(&mut model, CommandKind::DrawPencil, &[Point::new(50, 50), Point::new(60, 55)]);
    model.select_shape_at(Point::new(10, 10));

    model.set_pen_color(Color32::RED);
    model.request_set_pen_style().unwrap();
    model.set_brush_color(Color32::GREEN);
    model.request_set_brush_style().unwrap();
    gesture(&mut model, CommandKind::Move, &[Point::new(10, 10), Point::new(30, 25)]);
    model.request_delete().unwrap();

    // Walk the whole history back and forth, checking each step round-trips
    let mut states = vec![snapshot(&model)];
    while model.can_undo() {
        model.undo().unwrap();
        states.push(snapshot(&model));
    }
    assert!(model.document().is_empty());

    states.pop();
    while model.can_redo() {
        model.redo().unwrap();
        assert_eq!(Some(snapshot(&model)), states.pop());
    }
}

#[test]
fn test_pen_change_undo_restores_shape_and_default() {
    let mut model = PaintModel::new();
    gesture(&mut model, CommandKind::DrawRect, &[Point::new(0, 0), Point::new(20, 20)]);
    let id = last_shape(&model);
    model.select_shape_at(Point::new(5, 5));

    model.set_pen_color(Color32::RED);
    model.request_set_pen_style().unwrap();
    assert_eq!(model.shape(id).unwrap().pen().color, Color32::RED);

    model.undo().unwrap();
    assert_eq!(model.shape(id).unwrap().pen().color, Color32::BLACK);
    assert_eq!(model.pen_color(), Color32::BLACK);

    model.redo().unwrap();
    assert_eq!(model.shape(id).unwrap().pen().color, Color32::RED);
    assert_eq!(model.pen_color(), Color32::RED);
}

#[test]
fn test_brush_change_applies_to_selection_only() {
    let mut model = PaintModel::new();
    gesture(&mut model, CommandKind::DrawEllipse, &[Point::new(0, 0), Point::new(20, 20)]);
    let first = last_shape(&model);
    gesture(&mut model, CommandKind::DrawEllipse, &[Point::new(100, 100), Point::new(120, 120)]);
    let second = last_shape(&model);

    model.select_shape_at(Point::new(110, 110));
    model.set_brush_color(Color32::YELLOW);
    model.request_set_brush_style().unwrap();

    assert_eq!(model.shape(second).unwrap().brush().color, Color32::YELLOW);
    assert_eq!(model.shape(first).unwrap().brush().color, Color32::WHITE);
}

#[test]
fn test_move_command_undo_redo() {
    let mut model = PaintModel::new();
    gesture(&mut model, CommandKind::DrawRect, &[Point::new(10, 10), Point::new(30, 30)]);
    let id = last_shape(&model);
    model.select_shape_at(Point::new(20, 20));

    gesture(&mut model, CommandKind::Move, &[Point::new(20, 20), Point::new(70, 20)]);
    assert!(model.shape(id).unwrap().hit_test(Point::new(75, 20)));
    assert!(!model.shape(id).unwrap().hit_test(Point::new(15, 20)));

    model.undo().unwrap();
    assert_eq!(model.shape(id).unwrap().offset(), Point::ORIGIN);
    assert!(model.shape(id).unwrap().hit_test(Point::new(15, 20)));

    model.redo().unwrap();
    assert_eq!(model.shape(id).unwrap().offset(), Point::new(50, 0));
}

#[test]
fn test_requests_without_selection_are_noops() {
    let mut model = PaintModel::new();
    gesture(&mut model, CommandKind::DrawLine, &[Point::new(0, 0), Point::new(5, 5)]);

    model.request_delete().unwrap();
    model.request_set_pen_style().unwrap();
    model.request_set_brush_style().unwrap();

    assert_eq!(model.document().len(), 1);
    assert_eq!(model.history().undo_stack().len(), 1);
}

#[test]
fn test_explicit_selection_commands_fail_fast() {
    let mut model = PaintModel::new();
    assert_eq!(
        model.start_command(CommandKind::Delete, Point::new(0, 0)),
        Err(CommandError::NoSelection)
    );
    assert_eq!(
        model.start_command(CommandKind::SetPen, Point::new(0, 0)),
        Err(CommandError::NoSelection)
    );
    assert!(!model.has_active_command());
}

#[test]
fn test_requests_are_rejected_mid_gesture() {
    let mut model = PaintModel::new();
    gesture(&mut model, CommandKind::DrawRect, &[Point::new(0, 0), Point::new(10, 10)]);
    model.select_shape_at(Point::new(5, 5));

    model.start_command(CommandKind::DrawLine, Point::new(50, 50)).unwrap();
    assert!(matches!(model.request_delete(), Err(CommandError::Busy { .. })));
    assert!(matches!(model.redo(), Err(CommandError::Busy { .. })));
    model.finalize_command().unwrap();

    assert_eq!(model.document().len(), 2);
}
