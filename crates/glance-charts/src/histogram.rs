//! Bucketed-histogram bar chart with linear axes.

use glance_stats::HistogramPoint;

use crate::geom::{Rect, Vec2};
use crate::scene::{HitShape, HitTarget, Primitive, Scene};
use crate::theme::ChartTheme;

pub const WIDTH: f32 = 1000.0;
pub const HEIGHT: f32 = 500.0;
pub const PADDING: f32 = 80.0;
pub const BAR_WIDTH: f32 = 20.0;

/// Render histogram points as vertical bars growing up from the baseline.
/// The bar whose bucket equals `highlight` gets the accent color. `label`
/// prefixes tooltips ("Level 3: 3 users").
///
/// Empty data renders nothing at all — no axes, no bars; the caller owns
/// any "no data" messaging. The `max_count == 0` guard cannot trigger for
/// aggregation output (zero-count buckets are never emitted) but keeps the
/// scale math total.
pub fn histogram_chart(
    data: &[HistogramPoint],
    highlight: i64,
    label: &str,
    theme: &ChartTheme,
) -> Scene {
    let mut scene = Scene::new(WIDTH, HEIGHT);
    if data.is_empty() {
        return scene;
    }

    let max_key = data.iter().map(|p| p.bucket).max().unwrap_or(0);
    let max_count = data.iter().map(|p| p.user_count).max().unwrap_or(0);
    if max_count == 0 {
        return scene;
    }

    // max_key is non-negative for aggregation output; clamp so a stray
    // negative key cannot zero the divisor.
    let x_scale = (WIDTH - 2.0 * PADDING) / (max_key.max(0) as f32 + 1.0);
    let y_scale = (HEIGHT - 2.0 * PADDING) / max_count as f32;
    let baseline = HEIGHT - PADDING;

    for p in data {
        let x = PADDING + p.bucket as f32 * x_scale;
        let bar_height = p.user_count as f32 * y_scale;
        let rect = Rect::new(x, baseline - bar_height, BAR_WIDTH, bar_height);
        let fill = if p.bucket == highlight {
            theme.accent
        } else {
            theme.secondary
        };
        scene.primitives.push(Primitive::Rect { rect, fill });
        scene.targets.push(HitTarget {
            shape: HitShape::Rect(rect),
            tooltip: format!("{label} {}: {} users", p.bucket, p.user_count),
        });
    }

    scene.primitives.push(Primitive::Line {
        from: Vec2::new(PADDING, baseline),
        to: Vec2::new(WIDTH - PADDING, baseline),
        stroke: theme.axis,
    });
    scene.primitives.push(Primitive::Line {
        from: Vec2::new(PADDING, PADDING),
        to: Vec2::new(PADDING, baseline),
        stroke: theme.axis,
    });

    scene
}
