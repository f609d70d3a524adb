use glyphmark::scene::Element;
use glyphmark::{
    ClearSpace, DimensionedLambda, DimensionedSnowflake, Lambda, LambdaParams, LineStyleSet, Scene,
    Snowflake,
};
use tracing_subscriber::EnvFilter;

fn summarize(title: &str, scene: &Scene) {
    let vb = scene.view_box;
    println!("=== {title} ===");
    println!(
        "viewBox: {} {} {} {}",
        vb.min_x, vb.min_y, vb.width, vb.height
    );
    for element in &scene.elements {
        match element {
            Element::Path(p) => println!("  path {}", p.data),
            Element::Line(l) => println!("  line {} -> {}", l.start, l.end),
            Element::Polygon(p) => println!("  polygon ({} points)", p.points.len()),
            Element::Polyline(p) => println!("  polyline ({} points)", p.points.len()),
            Element::Circle(c) => println!("  circle at {} r={}", c.center, c.radius),
            Element::Rect(r) => println!("  rect {}x{}", r.width, r.height),
            Element::Text(t) => println!("  text at {}", t.position),
            Element::Group(g) => println!("  group ({} children)", g.children.len()),
            Element::Defs(d) => println!("  defs ({} markers)", d.markers.len()),
        }
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let styles = LineStyleSet::small();

    let lambda = DimensionedLambda::with_clear_space(
        Lambda::new(LambdaParams::default()),
        styles.clone(),
        ClearSpace::Recommended,
    );
    match lambda.and_then(|d| Ok((d.linear_scene()?, d.angular_scene()?))) {
        Ok((linear, angular)) => {
            summarize("Lambda, linear dimensions", &linear);
            summarize("Lambda, angular dimensions", &angular);
        }
        Err(e) => eprintln!("Error: {:?}", miette::Report::new(e)),
    }

    let snowflake =
        DimensionedSnowflake::with_clear_space(Snowflake::default(), styles, ClearSpace::Minimal);
    match snowflake.and_then(|d| d.linear_scene()) {
        Ok(scene) => summarize("Snowflake", &scene),
        Err(e) => eprintln!("Error: {:?}", miette::Report::new(e)),
    }
}
