//! Chart geometry and interaction: derived statistics in, resolution-
//! independent scenes out.
//!
//! Renderers are pure functions from a statistic to a [`scene::Scene`]
//! (a display list plus hit targets); the scene is a disposable output,
//! rebuilt wholesale on every new snapshot. Backends consume the scene —
//! [`svg`] serializes it, [`tooltip::Tooltip`] drives hover state off it.
#![forbid(unsafe_code)]

pub mod fmt;
pub mod geom;
pub mod histogram;
pub mod ratio;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod tooltip;

pub use geom::{Rect, Vec2};
pub use histogram::histogram_chart;
pub use ratio::ratio_chart;
pub use scene::{HitShape, HitTarget, Primitive, Scene, TextAnchor};
pub use svg::scene_to_svg;
pub use theme::{ChartTheme, Color};
pub use tooltip::Tooltip;
