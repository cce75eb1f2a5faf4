use std::f64::consts::PI;

use super::style::{StyleProps, Transform};

/// Fraction of the viewport height over which group transitions play out.
const GROUP_SCROLL_SPAN: f64 = 0.8;
/// Pixels of drift per unit of group progress.
const GROUP_DRIFT_PX: f64 = 50.0;

/// Content section driven by scroll progress, identified by its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Cobblemon,
    Tavern,
    ServerInfo,
    Other,
}

impl GroupKind {
    pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str> + Clone) -> Self {
        let has = |name: &str| classes.clone().into_iter().any(|c| c == name);
        if has("cobblemon-section") {
            GroupKind::Cobblemon
        } else if has("tavern-section") {
            GroupKind::Tavern
        } else if has("server-info") {
            GroupKind::ServerInfo
        } else {
            GroupKind::Other
        }
    }

    /// Idle vertical oscillation in pixels at wall-clock time `t` seconds.
    pub fn bobbing(self, t: f64) -> f64 {
        match self {
            GroupKind::Cobblemon => wave(t, 4.0, 8.0, 0.0),
            GroupKind::Tavern => wave(t, 3.5, 6.0, 0.5),
            GroupKind::ServerInfo | GroupKind::Other => 0.0,
        }
    }

    /// Style writes for this group, or `None` when the group is left alone.
    /// Phases are `start ± n * delta` with literal deltas, not a lerp between
    /// endpoints, so the written numbers are stable down to the last digit.
    pub fn style(self, progress: f64, t: f64) -> Option<StyleProps> {
        let bob = self.bobbing(t);
        let drift = progress * GROUP_DRIFT_PX;
        match self {
            GroupKind::Cobblemon => Some(if progress <= 0.3 {
                let n = progress / 0.3;
                StyleProps::transform(Transform::translate_scale(drift + bob, 1.8 - n * 1.5))
                    .with_opacity(1.0 - n * 0.8)
            } else {
                StyleProps::transform(Transform::translate(bob)).with_opacity(0.2)
            }),
            GroupKind::Tavern => Some(if progress <= 0.3 {
                StyleProps::transform(Transform::translate(bob)).with_opacity(1.0)
            } else if progress <= 0.8 {
                let n = (progress - 0.3) / 0.5;
                StyleProps::transform(Transform::translate_scale(drift + bob, 1.0 + n * 1.7))
                    .with_opacity(1.0)
            } else {
                let n = (progress - 0.8) / 0.2;
                StyleProps::transform(Transform::translate_scale(drift + bob, 1.8 - n))
                    .with_opacity(1.0 - n * 0.8)
            }),
            GroupKind::ServerInfo if progress > 0.8 => {
                let n = (progress - 0.8) / 0.2;
                Some(StyleProps::transform(Transform::translate_scale(
                    drift,
                    0.8 + n * 0.5,
                )))
            }
            GroupKind::ServerInfo | GroupKind::Other => None,
        }
    }
}

/// Negated sine: starts moving upwards.
fn wave(t: f64, period: f64, amplitude: f64, phase: f64) -> f64 {
    ((t + phase) * (2.0 * PI / period)).sin() * -amplitude
}

/// `clamp(scrolled / (viewport_height * 0.8), 0, 1)`.
pub fn group_progress(scrolled: f64, viewport_height: f64) -> f64 {
    let span = viewport_height * GROUP_SCROLL_SPAN;
    if span <= 0.0 || !scrolled.is_finite() {
        return 0.0;
    }
    (scrolled / span).clamp(0.0, 1.0)
}
