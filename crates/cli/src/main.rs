use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use planar::api::{InvalidShapeError, Point, RadialShape, Shape, SquareShape};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Build, transform and print validated 2D shapes")]
#[command(version = planar::VERSION)]
struct Cmd {
    /// Print a JSON object (kind, text, canonical points) instead of the text form
    #[arg(long, global = true)]
    json: bool,

    /// Debug-level logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

/// Translation is applied before rotation.
#[derive(Args, Clone, Copy, Debug, Default)]
struct Transform {
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    dx: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    dy: f64,
    /// Counterclockwise rotation in degrees
    #[arg(long, allow_negative_numbers = true)]
    rotate: Option<f64>,
}

#[derive(Subcommand)]
enum Action {
    /// Center plus equidistant neighbors, points given as NAME:X:Y
    Radial {
        #[arg(long, value_parser = parse_point)]
        center: Point,
        #[arg(long = "neighbor", value_parser = parse_point)]
        neighbors: Vec<Point>,
        #[command(flatten)]
        transform: Transform,
    },
    /// Four corners given as NAME:X:Y, in boundary order unless --unordered
    Square {
        #[arg(long = "point", value_parser = parse_point, required = true)]
        points: Vec<Point>,
        #[arg(long)]
        unordered: bool,
        #[command(flatten)]
        transform: Transform,
    },
    /// Walk through the reference scenarios
    Demo,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Radial {
            center,
            neighbors,
            transform,
        } => {
            let shape = radial(center, neighbors, transform)?;
            emit(&shape, cmd.json)
        }
        Action::Square {
            points,
            unordered,
            transform,
        } => {
            let shape = square(points, unordered, transform)?;
            emit(&shape, cmd.json)
        }
        Action::Demo => demo(),
    }
}

/// `NAME:X:Y`; the name may itself contain `:`.
fn parse_point(s: &str) -> Result<Point> {
    let mut parts = s.rsplitn(3, ':');
    let (Some(y), Some(x), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected NAME:X:Y, got `{s}`");
    };
    if name.is_empty() {
        bail!("point `{s}` has an empty name");
    }
    let x: f64 = x.trim().parse().with_context(|| format!("x coordinate of `{s}`"))?;
    let y: f64 = y.trim().parse().with_context(|| format!("y coordinate of `{s}`"))?;
    Ok(Point::new(name, x, y))
}

fn radial(center: Point, neighbors: Vec<Point>, t: Transform) -> Result<RadialShape> {
    tracing::info!(center = %center.name, neighbors = neighbors.len(), "radial");
    let shape = RadialShape::new(center, neighbors).context("invalid radial shape")?;
    Ok(apply(shape, t))
}

fn square(points: Vec<Point>, unordered: bool, t: Transform) -> Result<SquareShape> {
    tracing::info!(points = points.len(), unordered, "square");
    let n = points.len();
    let Ok(corners) = <[Point; 4]>::try_from(points) else {
        bail!("a square needs exactly 4 points, got {n}");
    };
    let shape = if unordered {
        SquareShape::from_unordered(corners)
    } else {
        let [a, b, c, d] = corners;
        SquareShape::new(a, b, c, d)
    }
    .context("invalid square")?;
    Ok(apply(shape, t))
}

fn apply<S: Shape>(shape: S, t: Transform) -> S {
    let shape = if t.dx != 0.0 || t.dy != 0.0 {
        tracing::debug!(kind = shape.kind(), dx = t.dx, dy = t.dy, "translate");
        shape.translate_by(t.dx, t.dy)
    } else {
        shape
    };
    match t.rotate {
        Some(degrees) => {
            tracing::debug!(kind = shape.kind(), degrees, "rotate");
            shape.rotate_by(degrees)
        }
        None => shape,
    }
}

#[derive(Serialize)]
struct PointView {
    name: String,
    x: f64,
    y: f64,
}

impl From<Point> for PointView {
    fn from(p: Point) -> Self {
        Self {
            x: p.x(),
            y: p.y(),
            name: p.name,
        }
    }
}

#[derive(Serialize)]
struct ShapeView {
    kind: &'static str,
    text: String,
    center: PointView,
    points: Vec<PointView>,
}

fn view<S: Shape>(shape: &S) -> ShapeView {
    ShapeView {
        kind: shape.kind(),
        text: shape.to_string(),
        center: shape.center().into(),
        points: shape.canonical_points().into_iter().map(Into::into).collect(),
    }
}

fn emit<S: Shape>(shape: &S, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&view(shape))?);
    } else {
        println!("{shape}");
    }
    Ok(())
}

fn demo() -> Result<()> {
    let center = Point::new("center", 0.0, 0.0);
    let east = Point::new("east", 1.0, 0.0);
    let west = Point::new("west", -1.0, 0.0);
    let north = Point::new("north", 0.0, 1.0);
    let south = Point::new("south", 0.0, -1.0);
    let too_far_south = Point::new("south", 0.0, -2.0);

    println!("lonely:     {}", RadialShape::lonely(center.clone()));

    match RadialShape::new(
        center.clone(),
        vec![north.clone(), too_far_south, east.clone(), west.clone()],
    ) {
        Err(e @ InvalidShapeError::UnequalRadius { .. }) => println!("rejected:   {e}"),
        other => bail!("expected an unequal radius rejection, got {other:?}"),
    }

    let g = RadialShape::new(center, vec![north, south, east, west])?;
    println!("compass:    {g}");
    println!("rotated 90: {}", g.rotate_by(90.0));
    println!("moved:      {}", g.translate_by(2.0, -1.0));

    let s = SquareShape::new(
        Point::new("A", 0.0, 0.0),
        Point::new("B", 0.0, 3.0),
        Point::new("C", 3.0, 3.0),
        Point::new("D", 3.0, 0.0),
    )?;
    println!("square:     {s}  center {}", s.center());
    let s = s.translate_by(1.0, 0.0);
    println!("translated: {s}");
    println!("rotated 90: {}", s.rotate_by(90.0));
    tracing::info!("demo complete");
    Ok(())
}
