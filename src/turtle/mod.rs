use geo_types::{Line, LineString, MultiLineString, Point};

use crate::geo_types::rotate_vector;

/// # Turtle Module
///
/// This provides logo-style turtle features for walking L-system
/// expansions into line segments. The turtle carries its heading as a
/// vector rather than an angle: every forward step moves by exactly that
/// vector, so the heading's magnitude is the step length and turning never
/// changes it.
#[derive(Clone, Debug)]
pub struct Turtle {
    segments: Vec<Line<f64>>,
    position: Point<f64>,
    heading: Point<f64>,
}

/// TurtleTrait provides turtle related functions for the Turtle struct.
///
/// The walk accumulates one [`geo_types::Line`] per forward step, in draw
/// order.
///
/// # Example
///
/// ```
/// use geo_types::{MultiLineString, Point};
/// use flowsnake::turtle::{Turtle, TurtleTrait};
/// let mline_string: MultiLineString<f64> = Turtle::new()
///     .heading(Point::new(0.0, 100.0))
///     .fwd()
///     .right(90.0)
///     .fwd()
///     .right(90.0)
///     .fwd()
///     .right(90.0)
///     .fwd()
///     .to_multiline();
/// ```
pub trait TurtleTrait {
    fn new() -> Turtle;
    fn at(self, position: Point<f64>) -> Self;
    fn heading(self, heading: Point<f64>) -> Self;
    fn fwd(self) -> Self;
    fn left(self, angle_degrees: f64) -> Self;
    fn right(self, angle_degrees: f64) -> Self;
    fn walk_pattern(self, pattern: &str, angle_degrees: f64) -> Self;
    fn segments(&self) -> &[Line<f64>];
    fn into_segments(self) -> Vec<Line<f64>>;
    fn to_multiline(&self) -> MultiLineString<f64>;
}


impl TurtleTrait for Turtle {

    fn new() -> Self {
        Turtle {
            segments: vec![],
            position: Point::new(0.0f64, 0.0f64),
            heading: Point::new(1.0f64, 0.0f64),
        }
    }

    fn at(mut self, position: Point<f64>) -> Self {
        self.position = position;
        self
    }

    fn heading(mut self, heading: Point<f64>) -> Self {
        self.heading = heading;
        self
    }

    fn fwd(mut self) -> Self {
        let pos = self.position + self.heading;
        self.segments.push(Line::new(self.position, pos));
        self.position = pos;
        self
    }

    fn left(mut self, angle_degrees: f64) -> Self {
        self.heading = rotate_vector(self.heading, angle_degrees);
        self
    }

    fn right(self, angle_degrees: f64) -> Self {
        self.left(-angle_degrees)
    }

    /// Walks an expanded L-system pattern. `A` and `B` step forward and
    /// emit a segment, `+` turns counterclockwise by `angle_degrees`, `-`
    /// turns clockwise, and every other symbol is a no-op. That last arm
    /// is the escape hatch for symbols that only exist to steer the
    /// grammar.
    fn walk_pattern(mut self, pattern: &str, angle_degrees: f64) -> Self {
        for c in pattern.chars() {
            self = match c {
                'A' | 'B' => self.fwd(),
                '+' => self.left(angle_degrees),
                '-' => self.right(angle_degrees),
                _ => self,
            }
        }
        self
    }

    fn segments(&self) -> &[Line<f64>] {
        &self.segments
    }

    fn into_segments(self) -> Vec<Line<f64>> {
        self.segments
    }

    /// Chains consecutive segments that share an endpoint into connected
    /// [`geo_types::LineString`]s, for renderers that want polylines
    /// instead of disconnected primitives. A pattern walk without jumps
    /// produces a single linestring.
    fn to_multiline(&self) -> MultiLineString<f64> {
        let mut lines: Vec<LineString<f64>> = vec![];
        for segment in &self.segments {
            match lines.last_mut() {
                Some(line) if line.0.last() == Some(&segment.start) => line.0.push(segment.end),
                _ => lines.push(LineString::new(vec![segment.start, segment.end])),
            }
        }
        MultiLineString::new(lines)
    }
}
