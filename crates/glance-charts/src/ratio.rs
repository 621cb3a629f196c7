//! Two-sector proportion chart for audit volume.

use std::f32::consts::TAU;

use glance_stats::AuditStats;

use crate::fmt::format_mb;
use crate::geom::Vec2;
use crate::scene::{HitShape, HitTarget, Primitive, Scene, TextAnchor};
use crate::theme::ChartTheme;

pub const WIDTH: f32 = 300.0;
pub const HEIGHT: f32 = 300.0;
pub const CENTER: Vec2 = Vec2::new(150.0, 150.0);
pub const RADIUS: f32 = 100.0;

/// Closed wedge path: center → arc start → arc → arc end → center.
/// `major` selects the >180° arc; each sector computes it from its own
/// share so the drawn wedge always has the right visual size.
fn sector_path(from: Vec2, to: Vec2, major: bool) -> String {
    format!(
        "M {} {} L {:.2} {:.2} A {} {} 0 {} 1 {:.2} {:.2} Z",
        CENTER.x,
        CENTER.y,
        from.x,
        from.y,
        RADIUS,
        RADIUS,
        if major { 1 } else { 0 },
        to.x,
        to.y,
    )
}

/// Render audit totals as a two-sector circle with a persistent ratio
/// label. When there is no volume at all there is no ratio to depict:
/// the output is a single neutral disc with no hover targets.
pub fn ratio_chart(stats: &AuditStats, theme: &ChartTheme) -> Scene {
    let mut scene = Scene::new(WIDTH, HEIGHT);

    let total = stats.done + stats.received;
    if total == 0.0 {
        scene.primitives.push(Primitive::Circle {
            center: CENTER,
            radius: RADIUS,
            fill: theme.neutral,
        });
        return scene;
    }

    let done_pct = stats.done / total * 100.0;
    let received_pct = 100.0 - done_pct;
    let done_angle = (done_pct / 100.0 * f64::from(TAU)) as f32;

    let arc_start = CENTER + Vec2::from_angle(0.0) * RADIUS;
    let arc_mid = CENTER + Vec2::from_angle(done_angle) * RADIUS;

    scene.primitives.push(Primitive::Path {
        d: sector_path(arc_start, arc_mid, done_pct > 50.0),
        fill: theme.accent,
    });
    scene.primitives.push(Primitive::Path {
        d: sector_path(arc_mid, arc_start, received_pct > 50.0),
        fill: theme.secondary,
    });

    scene.targets.push(HitTarget {
        shape: HitShape::Sector {
            center: CENTER,
            radius: RADIUS,
            start: 0.0,
            end: done_angle,
        },
        tooltip: format!("Done: {} ({:.1}%)", format_mb(stats.done), done_pct),
    });
    scene.targets.push(HitTarget {
        shape: HitShape::Sector {
            center: CENTER,
            radius: RADIUS,
            start: done_angle,
            end: TAU,
        },
        tooltip: format!(
            "Received: {} ({:.1}%)",
            format_mb(stats.received),
            received_pct
        ),
    });

    scene.primitives.push(Primitive::Text {
        pos: Vec2::new(20.0, 24.0),
        size: 14.0,
        fill: theme.text,
        anchor: TextAnchor::Start,
        content: format!("Done: {}", format_mb(stats.done)),
    });
    scene.primitives.push(Primitive::Text {
        pos: Vec2::new(20.0, 44.0),
        size: 14.0,
        fill: theme.text,
        anchor: TextAnchor::Start,
        content: format!("Received: {}", format_mb(stats.received)),
    });
    let marker = if stats.ratio >= 1.0 { "\u{2713}" } else { "\u{26a0}" };
    scene.primitives.push(Primitive::Text {
        pos: Vec2::new(WIDTH - 20.0, 24.0),
        size: 16.0,
        fill: theme.text,
        anchor: TextAnchor::End,
        content: format!("Ratio: {:.2} {marker}", stats.ratio),
    });

    scene
}
