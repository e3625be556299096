use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use routeplan_core::geometry::{Disk, Obstacle, Point, Polygon, Segment};
use routeplan_core::Scene;

/// Parses the line-oriented, `|`-delimited persisted scene format: one
/// entity per line, field 0 the kind (`Point`, `Line`, `Circle`,
/// `Polygon`), field 1 a kind-specific body, field 2 a display name, and
/// an optional trailing `Start` field on a `Point` line. Blank lines and
/// `#`-prefixed lines are skipped.
pub fn parse_scene(text: &str, epsilon_point: f64) -> Result<Scene> {
    let mut start: Option<Point> = None;
    let mut control_points = Vec::new();
    let mut obstacles = Vec::new();

    for (line_no, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let lineno = line_no + 1;
        let fields: Vec<&str> = line.split('|').collect();
        let kind = *fields
            .first()
            .ok_or_else(|| anyhow!("line {lineno}: missing entity kind"))?;
        let body = *fields.get(1).ok_or_else(|| anyhow!("line {lineno}: missing body"))?;
        let is_start = fields.iter().any(|&f| f == "Start");

        match kind {
            "Point" => {
                let p = parse_point(body).with_context(|| format!("line {lineno}: invalid Point"))?;
                if is_start {
                    if start.is_some() {
                        return Err(anyhow!("line {lineno}: more than one Start point"));
                    }
                    start = Some(p);
                } else {
                    control_points.push(p);
                }
            }
            "Line" => {
                let (a, b) = parse_two_points(body).with_context(|| format!("line {lineno}: invalid Line"))?;
                obstacles.push(Obstacle::Segment(Segment::new(a, b)));
            }
            "Circle" => {
                let (center, radius) = parse_circle(body).with_context(|| format!("line {lineno}: invalid Circle"))?;
                let disk = Disk::new(center, radius).map_err(|e| anyhow!("line {lineno}: {e}"))?;
                obstacles.push(Obstacle::Disk(disk));
            }
            "Polygon" => {
                let points = parse_point_list(body).with_context(|| format!("line {lineno}: invalid Polygon"))?;
                let polygon = Polygon::new(points, epsilon_point, true).map_err(|e| anyhow!("line {lineno}: {e}"))?;
                obstacles.push(Obstacle::Polygon(polygon));
            }
            other => return Err(anyhow!("line {lineno}: unknown entity kind '{other}'")),
        }
    }

    let start = start.ok_or_else(|| anyhow!("scene has no Start point"))?;
    Ok(Scene::new(start, control_points, obstacles))
}

fn parse_f64(s: &str) -> Result<f64> {
    f64::from_str(s.trim()).map_err(|e| anyhow!("invalid number '{s}': {e}"))
}

fn parse_point(body: &str) -> Result<Point> {
    let mut parts = body.split(',');
    let x = parse_f64(parts.next().ok_or_else(|| anyhow!("missing x"))?)?;
    let y = parse_f64(parts.next().ok_or_else(|| anyhow!("missing y"))?)?;
    Ok(Point::new(x, y))
}

fn parse_two_points(body: &str) -> Result<(Point, Point)> {
    let mut parts = body.split(';');
    let a = parse_point(parts.next().ok_or_else(|| anyhow!("missing first point"))?)?;
    let b = parse_point(parts.next().ok_or_else(|| anyhow!("missing second point"))?)?;
    Ok((a, b))
}

fn parse_circle(body: &str) -> Result<(Point, f64)> {
    let mut parts = body.split(';');
    let center = parse_point(parts.next().ok_or_else(|| anyhow!("missing center"))?)?;
    let radius = parse_f64(parts.next().ok_or_else(|| anyhow!("missing radius"))?)?;
    Ok((center, radius))
}

fn parse_point_list(body: &str) -> Result<Vec<Point>> {
    body.split(';').map(parse_point).collect()
}
