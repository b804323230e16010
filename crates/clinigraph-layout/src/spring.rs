//! Spring (Fruchterman-Reingold) force-directed layout
//!
//! Nodes repel each other with force `k² / d` and adjacent nodes attract with
//! force `d² / k`. Displacement per step is capped by a temperature that cools
//! linearly to zero. The result is centred on the origin and rescaled so the
//! largest coordinate magnitude is 1.

use super::common::GraphView;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Minimum distance between two nodes when computing forces
const MIN_DISTANCE: f64 = 0.01;

/// A 2-D position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Spring layout configuration
#[derive(Debug, Clone)]
pub struct SpringLayoutConfig {
    /// Optimal distance between nodes. `None` uses `1 / sqrt(n)`
    pub k: Option<f64>,
    /// Number of cooling iterations
    pub iterations: usize,
    /// Stop early when the mean displacement falls below this value
    pub threshold: f64,
    /// Seed for the initial random placement
    pub seed: u64,
}

impl Default for SpringLayoutConfig {
    fn default() -> Self {
        Self {
            k: None,
            iterations: 50,
            threshold: 1e-4,
            seed: 42,
        }
    }
}

/// Compute positions for every node of the view, indexed like the view.
///
/// The same view and configuration always yield the same positions.
pub fn spring_layout(view: &GraphView, config: &SpringLayoutConfig) -> Vec<Point> {
    let n = view.node_count;

    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![Point::default()];
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut positions: Vec<Point> = (0..n)
        .map(|_| Point::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();

    let k = config.k.unwrap_or_else(|| (1.0 / n as f64).sqrt());

    // Initial temperature: a tenth of the bounding box span
    let (min, max) = bounds(&positions);
    let mut temperature = (max.x - min.x).max(max.y - min.y) * 0.1;
    let cooling = temperature / (config.iterations as f64 + 1.0);

    let mut displacement = vec![Point::default(); n];

    for _ in 0..config.iterations {
        for i in 0..n {
            let mut disp = Point::default();
            for j in 0..n {
                if i == j {
                    continue;
                }
                let dx = positions[i].x - positions[j].x;
                let dy = positions[i].y - positions[j].y;
                let distance = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);

                let attraction = if view.is_adjacent(i, j) {
                    distance / k
                } else {
                    0.0
                };
                let force = k * k / (distance * distance) - attraction;

                disp.x += dx * force;
                disp.y += dy * force;
            }
            displacement[i] = disp;
        }

        let mut total_step = 0.0;
        for (pos, disp) in positions.iter_mut().zip(&displacement) {
            let length = disp.norm().max(MIN_DISTANCE);
            let step_x = disp.x * temperature / length;
            let step_y = disp.y * temperature / length;
            pos.x += step_x;
            pos.y += step_y;
            total_step += (step_x * step_x + step_y * step_y).sqrt();
        }

        temperature -= cooling;

        if total_step / (n as f64) < config.threshold {
            break;
        }
    }

    rescale(&mut positions);
    positions
}

fn bounds(positions: &[Point]) -> (Point, Point) {
    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in positions {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    (min, max)
}

/// Centre on the origin and scale into [-1, 1]
fn rescale(positions: &mut [Point]) {
    let n = positions.len() as f64;
    let mean_x = positions.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = positions.iter().map(|p| p.y).sum::<f64>() / n;

    let mut limit: f64 = 0.0;
    for p in positions.iter_mut() {
        p.x -= mean_x;
        p.y -= mean_y;
        limit = limit.max(p.x.abs()).max(p.y.abs());
    }

    if limit > 0.0 {
        for p in positions.iter_mut() {
            p.x /= limit;
            p.y /= limit;
        }
    }
}
