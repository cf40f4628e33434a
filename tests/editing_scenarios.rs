use shape_paint::{
    Bounds, CanvasController, CommandKind, DrawCall, InputEvent, PaintModel, Point,
    RecordingSurface, Shape, Tool,
};

fn draw(model: &mut PaintModel, kind: CommandKind, from: Point, to: Point) {
    model.start_command(kind, from).unwrap();
    model.update_command(to).unwrap();
    model.finalize_command().unwrap();
}

#[test]
fn test_rectangle_draw_undo_redo() {
    let mut model = PaintModel::new();
    draw(&mut model, CommandKind::DrawRect, Point::new(10, 10), Point::new(50, 40));

    let (id, shape) = model.shapes().next().unwrap();
    let expected = Bounds::from_corners(Point::new(10, 10), Point::new(50, 40));
    assert_eq!(shape.bounds(), expected);
    assert_eq!(shape.bounds().top_left, Point::new(10, 10));
    assert_eq!(shape.bounds().bot_right, Point::new(50, 40));

    model.undo().unwrap();
    assert_eq!(model.shapes().count(), 0);

    model.redo().unwrap();
    let (redone_id, redone) = model.shapes().next().unwrap();
    assert_eq!(redone_id, id);
    assert_eq!(redone.bounds(), expected);
}

#[test]
fn test_select_prefers_topmost_overlapping_shape() {
    let mut model = PaintModel::new();
    draw(&mut model, CommandKind::DrawRect, Point::new(0, 0), Point::new(100, 100));
    draw(&mut model, CommandKind::DrawRect, Point::new(10, 10), Point::new(50, 50));
    let ids = model.document().shape_ids();

    assert_eq!(model.select_shape_at(Point::new(20, 20)), Some(ids[1]));
    assert_eq!(model.select_shape_at(Point::new(75, 75)), Some(ids[0]));
}

#[test]
fn test_select_miss_keeps_previous_selection() {
    let mut model = PaintModel::new();
    draw(&mut model, CommandKind::DrawEllipse, Point::new(0, 0), Point::new(10, 10));
    let selected = model.select_shape_at(Point::new(5, 5));
    assert!(selected.is_some());

    assert_eq!(model.select_shape_at(Point::new(500, 500)), selected);
    model.unselect();
    assert_eq!(model.selected(), None);
}

#[test]
fn test_delete_then_undo_restores_z_order() {
    let mut model = PaintModel::new();
    draw(&mut model, CommandKind::DrawRect, Point::new(0, 0), Point::new(10, 10));
    draw(&mut model, CommandKind::DrawRect, Point::new(20, 20), Point::new(30, 30));
    draw(&mut model, CommandKind::DrawRect, Point::new(40, 40), Point::new(50, 50));
    let ids = model.document().shape_ids();

    model.select_shape_at(Point::new(25, 25));
    model.request_delete().unwrap();
    assert!(!model.document().contains(ids[1]));
    assert_eq!(model.selected(), None);

    model.undo().unwrap();
    assert_eq!(model.document().shape_ids(), ids);
}

#[test]
fn test_pencil_bounds_cover_every_point() {
    let points = [
        Point::new(30, 30),
        Point::new(45, 12),
        Point::new(8, 40),
        Point::new(33, 90),
        Point::new(31, 31),
    ];
    let mut model = PaintModel::new();
    model.start_command(CommandKind::DrawPencil, points[0]).unwrap();
    for point in &points[1..] {
        model.update_command(*point).unwrap();
    }
    model.finalize_command().unwrap();

    let (_, shape) = model.shapes().next().unwrap();
    assert_eq!(shape.bounds(), Bounds::from_points(points).unwrap());
    assert_eq!(shape.pencil_points(), Some(&points[..]));
}

#[test]
fn test_new_command_discards_redo_history() {
    let mut model = PaintModel::new();
    for i in 0..4 {
        let at = Point::new(i * 10, i * 10);
        draw(&mut model, CommandKind::DrawLine, at, at.translate(Point::new(5, 5)));
    }
    for _ in 0..3 {
        model.undo().unwrap();
    }
    assert_eq!(model.history().redo_stack().len(), 3);

    model.start_command(CommandKind::DrawRect, Point::new(0, 0)).unwrap();
    assert!(!model.can_redo());
    model.finalize_command().unwrap();
    assert!(model.redo().is_err());
    assert_eq!(model.document().len(), 2);
}

#[test]
fn test_reset_restores_defaults() {
    let mut model = PaintModel::new();
    draw(&mut model, CommandKind::DrawRect, Point::new(0, 0), Point::new(10, 10));
    model.select_shape_at(Point::new(5, 5));
    model.set_pen_color(egui::Color32::RED);
    model.set_pen_width(4).unwrap();
    model.start_command(CommandKind::DrawLine, Point::new(1, 1)).unwrap();

    model.reset();
    assert!(!model.has_active_command());
    assert!(model.document().is_empty());
    assert_eq!(model.document().stored_len(), 0);
    assert_eq!(model.selected(), None);
    assert!(!model.can_undo() && !model.can_redo());
    assert_eq!(model.pen(), shape_paint::Pen::default());
    assert_eq!(model.brush(), shape_paint::Brush::default());
}

#[test]
fn test_draw_order_and_selection_on_top() {
    let mut model = PaintModel::new();
    draw(&mut model, CommandKind::DrawRect, Point::new(0, 0), Point::new(10, 10));
    draw(&mut model, CommandKind::DrawLine, Point::new(0, 0), Point::new(10, 10));
    model.select_shape_at(Point::new(5, 5));

    let mut surface = RecordingSurface::new();
    model.draw_shapes(&mut surface);

    let calls = surface.calls();
    assert_eq!(calls.len(), 3);
    assert!(matches!(calls[0], DrawCall::Rect { .. }));
    assert!(matches!(calls[1], DrawCall::Line { .. }));
    assert!(matches!(
        calls[2],
        DrawCall::DashedRect { bounds, .. }
            if bounds == Bounds::from_corners(Point::new(-2, -2), Point::new(12, 12))
    ));
}

#[test]
fn test_controller_session() {
    let mut model = PaintModel::new();
    let mut controller = CanvasController::new(Tool::DrawPencil);

    controller.handle(&mut model, InputEvent::PointerDown(Point::new(5, 5))).unwrap();
    for x in 6..20 {
        controller
            .handle(&mut model, InputEvent::PointerMove(Point::new(x, 5 + x % 3)))
            .unwrap();
    }
    controller.handle(&mut model, InputEvent::PointerUp(Point::new(20, 5))).unwrap();
    assert_eq!(model.history().undo_stack().len(), 1);

    controller.set_tool(Tool::Selector);
    controller.handle(&mut model, InputEvent::PointerDown(Point::new(10, 6))).unwrap();
    controller.handle(&mut model, InputEvent::PointerUp(Point::new(10, 6))).unwrap();
    assert!(model.selected().is_some());

    model.request_delete().unwrap();
    assert!(model.document().is_empty());
    model.undo().unwrap();
    assert_eq!(model.document().len(), 1);
}

#[test]
fn test_delete_undo_keeps_original_pen() {
    let mut model = PaintModel::new();
    model.set_pen_color(egui::Color32::RED);
    draw(&mut model, CommandKind::DrawRect, Point::new(0, 0), Point::new(10, 10));
    let id = model.document().shape_ids()[0];

    model.set_pen_color(egui::Color32::BLUE);
    model.select_shape_at(Point::new(5, 5));
    model.request_delete().unwrap();
    model.undo().unwrap();

    assert_eq!(model.shape(id).unwrap().pen().color, egui::Color32::RED);
    assert_eq!(model.pen_color(), egui::Color32::BLUE);

    model.redo().unwrap();
    model.undo().unwrap();
    assert_eq!(model.shape(id).unwrap().pen().color, egui::Color32::RED);
}
