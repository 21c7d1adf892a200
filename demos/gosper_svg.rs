use anyhow::{anyhow, Result};
use flowsnake::l_system::LSystem;
use flowsnake::turtle::{Turtle, TurtleTrait};
use geo::{BoundingRect, Translate};
use geo_types::Point;
use svg::node::element::path::Data;
use svg::node::element::Path;
use svg::Document;

fn main() -> Result<()> {
    // The stock Gosper system, expanded to the 4th generation. We'll be
    // walking this into line segments next.
    let gosper = LSystem::default();
    let pattern = gosper.expand(4)?;

    // Walk the pattern with an 8mm step. The heading's magnitude is the
    // step length, so scaling the curve is just scaling this vector.
    let tlines = Turtle::new()
        .heading(Point::new(8.0, 0.0))
        .walk_pattern(&pattern, gosper.angle)
        .to_multiline();

    // Center the drawing on the origin.
    let bc = tlines
        .bounding_rect()
        .ok_or_else(|| anyhow!("the walk produced no lines"))?
        .center();
    let tlines = tlines.translate(-bc.x, -bc.y);
    let bounds = tlines
        .bounding_rect()
        .ok_or_else(|| anyhow!("the walk produced no lines"))?;

    // Draw the turtle lines into the SVG context
    let mut svg_data = Data::new();
    for tline in tlines.iter() {
        for point in tline.points().take(1) {
            svg_data = svg_data.move_to((point.x(), point.y()));
        }
        for point in tline.points().skip(1) {
            svg_data = svg_data.line_to((point.x(), point.y()));
        }
    }
    let path = Path::new()
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 2)
        .set("d", svg_data);

    let svg = Document::new()
        .set(
            "viewBox",
            (bounds.min().x, bounds.min().y, bounds.width(), bounds.height()),
        )
        .add(path);

    svg::save("gosper.svg", &svg)?;
    Ok(())
}
