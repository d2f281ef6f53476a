use scatter_rs::core::{MarkerShape, PathCommand, Point, Rect, ShapePath};
use scatter_rs::render::{Color, DrawCommand, RecordingSurface};
use scatter_rs::scatter::{PointOutcome, ShapePainter, ShapeStyle};

const CENTER: Point = Point::new(50.0, 40.0);

fn paint(shape: &MarkerShape, style: &ShapeStyle) -> (PointOutcome, RecordingSurface) {
    let mut surface = RecordingSurface::new();
    let outcome = ShapePainter::new().paint(&mut surface, shape, CENTER, style);
    (outcome, surface)
}

#[test]
fn square_fills_centered_rect() {
    let green = Color::rgb(0.0, 1.0, 0.0);
    let (outcome, surface) = paint(&MarkerShape::Square, &ShapeStyle::new(12.0, green));

    assert_eq!(outcome, PointOutcome::Drawn);
    assert_eq!(
        surface.commands(),
        &[DrawCommand::FillRect {
            rect: Rect::new(44.0, 34.0, 12.0, 12.0),
            color: green,
        }]
    );
}

#[test]
fn circle_without_hole_is_a_single_ellipse() {
    let (_, surface) = paint(&MarkerShape::Circle, &ShapeStyle::new(8.0, Color::BLACK));
    assert_eq!(
        surface.frame().ellipses(),
        vec![(Rect::new(46.0, 36.0, 8.0, 8.0), Color::BLACK)]
    );
}

#[test]
fn cross_strokes_two_segments_in_point_color() {
    let blue = Color::rgb(0.0, 0.0, 1.0);
    let (_, surface) = paint(&MarkerShape::Cross, &ShapeStyle::new(10.0, blue));

    assert_eq!(
        surface.frame().segments(),
        vec![
            (Point::new(45.0, 40.0), Point::new(55.0, 40.0)),
            (Point::new(50.0, 35.0), Point::new(50.0, 45.0)),
        ]
    );
    assert!(surface.commands().iter().all(|command| matches!(
        command,
        DrawCommand::StrokeSegment { color, .. } if *color == blue
    )));
}

#[test]
fn triangle_points_up_from_the_center() {
    let (_, surface) = paint(&MarkerShape::Triangle, &ShapeStyle::new(10.0, Color::BLACK));

    let paths = surface.frame().paths();
    assert_eq!(paths.len(), 1);
    assert_eq!(
        paths[0].commands(),
        &[
            PathCommand::MoveTo(Point::new(50.0, 35.0)),
            PathCommand::LineTo(Point::new(55.0, 45.0)),
            PathCommand::LineTo(Point::new(45.0, 45.0)),
            PathCommand::Close,
        ]
    );
}

#[test]
fn custom_path_curves_are_translated() {
    let mut path = ShapePath::new();
    path.move_to(Point::new(-3.0, 0.0))
        .quad_to(Point::new(0.0, -3.0), Point::new(3.0, 0.0))
        .cubic_to(Point::new(2.0, 2.0), Point::new(-2.0, 2.0), Point::new(-3.0, 0.0))
        .close();

    let (outcome, surface) = paint(
        &MarkerShape::Custom(path),
        &ShapeStyle::new(6.0, Color::BLACK),
    );

    assert_eq!(outcome, PointOutcome::Drawn);
    let paths = surface.frame().paths();
    assert_eq!(
        paths[0].commands()[1],
        PathCommand::QuadTo {
            control: Point::new(50.0, 37.0),
            to: Point::new(53.0, 40.0),
        }
    );
    assert_eq!(surface.depth(), 0);
}

#[test]
fn consecutive_shapes_do_not_inherit_color() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);
    let mut surface = RecordingSurface::new();
    let mut painter = ShapePainter::new();

    painter.paint(
        &mut surface,
        &MarkerShape::Circle,
        CENTER,
        &ShapeStyle::new(6.0, red).with_circle_hole(Color::WHITE),
    );
    painter.paint(&mut surface, &MarkerShape::Square, CENTER, &ShapeStyle::new(6.0, blue));

    assert_eq!(surface.frame().rects()[0].1, blue);
}
