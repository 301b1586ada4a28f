//! Focus a parallel beam with a plano-convex lens and print where each ray
//! crosses the optical axis.
//!
//! Run: `cargo run -p geoptics --example lens_beam`

use geoptics::api::*;

fn main() -> Result<(), SceneError> {
    let lens = Polycurve::builder(1.5, Point::new(70.0, 60.0))
        .add_line(Point::new(70.0, 190.0))
        .add_line(Point::new(110.0, 190.0))
        .add_arc(Point::new(110.0, 60.0), Vector::new(10.0, -20.0))
        .map_err(ConfigError::from)?
        .close()
        .build();
    let beam = Beam::new(
        Line::new(Point::new(20.0, 80.0), Vector::new(1.0, 0.0)),
        50.0,
        Line::new(Point::new(20.0, 170.0), Vector::new(1.0, 0.0)),
        50.0,
        7,
    );

    let mut scene = Scene::new();
    scene.add(lens)?;
    scene.add(beam)?;
    scene.propagate();

    let axis = Line::new(Point::new(0.0, 125.0), Vector::new(1.0, 0.0));
    for (i, ray) in scene.sources()[0].rays().iter().enumerate() {
        let last = ray.last_part();
        let crossing = axis
            .intersection(&last.line, Reach::Ahead)
            .first()
            .map(|hit| format!("x = {:.3}", hit.p.x))
            .unwrap_or_else(|| "none".to_string());
        println!(
            "ray {i}: {} parts, exit direction ({:.4}, {:.4}), axis crossing {crossing}",
            ray.parts().len(),
            last.line.u.x,
            last.line.u.y,
        );
    }
    Ok(())
}
