//! Convert between the pixel space of a curve editor and normalized control
//! points, and compute the data needed to plot a scale.
//!
//! Editor coordinates have their origin in the top left corner, so a higher
//! value is drawn closer to the top.

use euclid::default::{Point2D, Size2D};
use tracing::trace;

use crate::{
    color::Component,
    curve::{ControlPoint, CurveKind},
    models::{Hsl, Rgb},
    shade::{ColorScale, Shade},
};

/// A point in editor pixels or in normalized plot space.
pub type Point = Point2D<Component>;

/// Padding around the plot used by [`curve_path_definition`] callers that
/// don't specify one.
pub const DEFAULT_PADDING: Component = 20.0;

/// The editing surface that control points are dragged on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    /// Size of the surface in pixels.
    pub size: Size2D<Component>,
}

impl Canvas {
    /// Create a canvas with the given size in pixels.
    pub fn new(width: Component, height: Component) -> Self {
        Self {
            size: Size2D::new(width, height),
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(320.0, 320.0)
    }
}

/// Convert points dragged on `canvas` into control points for a curve of
/// `kind`. The x axis becomes the position and the inverted y axis the value.
/// ```rust
/// use shadecraft::{curve::CurveKind, plot::{ui_points_to_control_points, Canvas, Point}};
/// let points = ui_points_to_control_points(
///     &[Point::new(160.0, 80.0)],
///     CurveKind::Lightness,
///     Canvas::default(),
/// );
/// assert_eq!(points[0].position, 0.5);
/// assert_eq!(points[0].lightness(), Some(0.75));
/// ```
pub fn ui_points_to_control_points(
    points: &[Point],
    kind: CurveKind,
    canvas: Canvas,
) -> Vec<ControlPoint> {
    points
        .iter()
        .map(|point| {
            let position = point.x / canvas.size.width;
            let value = 1.0 - point.y / canvas.size.height;
            ControlPoint::with_value(kind, position, value)
        })
        .collect()
}

/// Place control points back on `canvas`. Points without a value for `kind`
/// are skipped.
pub fn control_points_to_ui_points(
    points: &[ControlPoint],
    kind: CurveKind,
    canvas: Canvas,
) -> Vec<Point> {
    points
        .iter()
        .filter_map(|point| {
            let value = point.value(kind)?;
            Some(Point::new(
                point.position * canvas.size.width,
                (1.0 - value) * canvas.size.height,
            ))
        })
        .collect()
}

/// The lightness of every shade from `start` to `end` (inclusive) in plot
/// space: x runs from 0.0 to 1.0 proportionally to the shade keys and y is
/// `1 - lightness`.
///
/// Returns no points if `start` comes after `end`. A range of a single shade
/// gives one point at x 0.0.
pub fn generate_curve_points(scale: &ColorScale, start: Shade, end: Shade) -> Vec<Point> {
    let first = start.value() as Component;
    let range = (end.value() as Component - first).max(0.0);

    scale
        .iter()
        .filter(|(shade, _)| (start..=end).contains(shade))
        .map(|(shade, color)| {
            let x = if range == 0.0 {
                0.0
            } else {
                (shade.value() as Component - first) / range
            };
            Point::new(x, 1.0 - Hsl::from(color).lightness)
        })
        .collect()
}

/// A plot marker for the saturation of a shade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromaPoint {
    /// Position in plot space; y is `1 - saturation`.
    pub point: Point,
    /// The color of the shade, for drawing the marker.
    pub color: Rgb,
}

/// Saturation markers for the first, middle and last shade between `start`
/// and `end`.
///
/// The shades are taken in scale order; if `start` comes after `end` the x
/// axis is mirrored so the markers run from `start` to `end`.
pub fn generate_chroma_points(scale: &ColorScale, start: Shade, end: Shade) -> Vec<ChromaPoint> {
    let lower = start.index().min(end.index());
    let upper = start.index().max(end.index());
    let shades = &Shade::ALL[lower..=upper];
    let last = shades.len() - 1;

    [0, shades.len() / 2, last]
        .into_iter()
        .map(|i| {
            let shade = shades[i];
            let color = scale[shade];

            let x = if last == 0 {
                0.0
            } else {
                i as Component / last as Component
            };
            let x = if start > end { 1.0 - x } else { x };

            let point = Point::new(x, 1.0 - Hsl::from(color).saturation);
            trace!(%shade, x = point.x, y = point.y, %color);
            ChromaPoint { point, color }
        })
        .collect()
}

/// Build an SVG path through normalized `points` drawn into a `width` by
/// `height` box inset by `padding`.
///
/// Every segment is a cubic curve whose control points sit halfway along the
/// segment horizontally, level with its end points, which keeps monotonic
/// input from overshooting. Fewer than two points give an empty path.
pub fn curve_path_definition(
    points: &[Point],
    width: Component,
    height: Component,
    padding: Component,
) -> String {
    if points.len() < 2 {
        return String::new();
    }

    let draw_width = width - padding * 2.0;
    let draw_height = height - padding * 2.0;
    let mapped: Vec<Point> = points
        .iter()
        .map(|p| Point::new(padding + p.x * draw_width, padding + p.y * draw_height))
        .collect();

    let mut path = format!("M {},{}", mapped[0].x, mapped[0].y);
    for segment in mapped.windows(2) {
        let (current, next) = (segment[0], segment[1]);
        let half = (next.x - current.x) * 0.5;
        path += &format!(
            " C {},{} {},{} {},{}",
            current.x + half,
            current.y,
            next.x - half,
            next.y,
            next.x,
            next.y
        );
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, generate::generate_color_scale};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn blue_scale() -> ColorScale {
        generate_color_scale("#3b82f6".parse().unwrap())
    }

    #[test_case(0.0, 0.0, 0.0, 1.0)]
    #[test_case(160.0, 320.0, 0.5, 0.0)]
    #[test_case(320.0, 32.0, 1.0, 0.9)]
    #[test_case(80.0, 240.0, 0.25, 0.25)]
    fn pixels_to_lightness(x: Component, y: Component, position: Component, value: Component) {
        let points =
            ui_points_to_control_points(&[Point::new(x, y)], CurveKind::Lightness, Canvas::default());
        assert_component_eq!(points[0].position, position);
        assert_component_eq!(points[0].lightness().unwrap(), value);
        assert_eq!(points[0].saturation(), None);
    }

    #[test]
    fn chroma_points_store_saturation() {
        let points = ui_points_to_control_points(
            &[Point::new(100.0, 50.0), Point::new(0.0, 200.0)],
            CurveKind::Chroma,
            Canvas::new(200.0, 200.0),
        );
        assert_eq!(points.len(), 2);
        assert_component_eq!(points[0].position, 0.5);
        assert_component_eq!(points[0].saturation().unwrap(), 0.75);
        assert_eq!(points[0].lightness(), None);
        assert_component_eq!(points[1].saturation().unwrap(), 0.0);
    }

    #[test]
    fn pixels_outside_the_canvas_are_not_clamped() {
        let points = ui_points_to_control_points(
            &[Point::new(640.0, -320.0)],
            CurveKind::Lightness,
            Canvas::default(),
        );
        assert_component_eq!(points[0].position, 2.0);
        assert_component_eq!(points[0].lightness().unwrap(), 2.0);
    }

    #[test]
    fn control_points_back_to_pixels() {
        let canvas = Canvas::new(400.0, 200.0);
        let pixels = [Point::new(100.0, 50.0), Point::new(300.0, 150.0)];
        let points = ui_points_to_control_points(&pixels, CurveKind::Lightness, canvas);
        let back = control_points_to_ui_points(&points, CurveKind::Lightness, canvas);
        assert_eq!(back.len(), 2);
        for (a, b) in back.iter().zip(pixels) {
            assert_component_eq!(a.x, b.x);
            assert_component_eq!(a.y, b.y);
        }

        assert!(control_points_to_ui_points(&points, CurveKind::Chroma, canvas).is_empty());
    }

    #[test]
    fn curve_points_for_the_whole_scale() {
        let scale = blue_scale();
        let points = generate_curve_points(&scale, Shade::S50, Shade::S950);
        assert_eq!(points.len(), Shade::COUNT);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[10].x, 1.0);
        assert_component_eq!(points[1].x, 50.0 / 900.0);
        assert_component_eq!(points[5].x, 450.0 / 900.0);

        // Darker shades are plotted lower.
        assert!(points.windows(2).all(|w| w[0].y < w[1].y));
        assert_component_eq!(points[0].y, 1.0 - Hsl::from(scale[Shade::S50]).lightness);
    }

    #[test]
    fn curve_points_for_the_dark_range() {
        let points = generate_curve_points(&blue_scale(), Shade::S600, Shade::S950);
        let xs: Vec<_> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs.len(), 5);
        assert_component_eq!(xs[1], 100.0 / 350.0);
        assert_component_eq!(xs[3], 300.0 / 350.0);
        assert_eq!(xs[4], 1.0);
    }

    #[test]
    fn curve_points_degenerate_ranges() {
        let scale = blue_scale();
        assert!(generate_curve_points(&scale, Shade::S700, Shade::S200).is_empty());

        let points = generate_curve_points(&scale, Shade::S300, Shade::S300);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, 0.0);
    }

    #[test]
    fn chroma_points_pick_three_shades() {
        let scale = blue_scale();
        let points = generate_chroma_points(&scale, Shade::S50, Shade::S500);
        let colors: Vec<_> = points.iter().map(|p| p.color).collect();
        assert_eq!(
            colors,
            vec![scale[Shade::S50], scale[Shade::S300], scale[Shade::S500]]
        );
        assert_eq!(points[0].point.x, 0.0);
        assert_component_eq!(points[1].point.x, 0.6);
        assert_eq!(points[2].point.x, 1.0);
        assert_component_eq!(
            points[2].point.y,
            1.0 - Hsl::from(scale[Shade::S500]).saturation
        );
    }

    #[test]
    fn reversed_chroma_range_is_mirrored() {
        let scale = blue_scale();
        let points = generate_chroma_points(&scale, Shade::S950, Shade::S600);
        assert_eq!(points[0].color, scale[Shade::S600]);
        assert_eq!(points[2].color, scale[Shade::S950]);
        assert_eq!(points[0].point.x, 1.0);
        assert_component_eq!(points[1].point.x, 0.5);
        assert_eq!(points[2].point.x, 0.0);
    }

    #[test]
    fn single_shade_chroma_range() {
        let points = generate_chroma_points(&blue_scale(), Shade::S400, Shade::S400);
        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|p| p.point.x == 0.0));
    }

    #[test]
    fn path_needs_two_points() {
        assert_eq!(curve_path_definition(&[], 100.0, 100.0, DEFAULT_PADDING), "");
        assert_eq!(
            curve_path_definition(&[Point::new(0.5, 0.5)], 100.0, 100.0, DEFAULT_PADDING),
            ""
        );
    }

    #[test]
    fn path_with_horizontal_tangents() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        assert_eq!(
            curve_path_definition(&points, 100.0, 100.0, DEFAULT_PADDING),
            "M 20,20 C 50,20 50,80 80,80"
        );

        let points = [
            Point::new(0.0, 1.0),
            Point::new(0.5, 0.5),
            Point::new(1.0, 0.0),
        ];
        assert_eq!(
            curve_path_definition(&points, 200.0, 100.0, 0.0),
            "M 0,100 C 50,100 50,50 100,50 C 150,50 150,0 200,0"
        );
    }
}
