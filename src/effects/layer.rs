use super::style::{lerp, Transform};

/// Pixels of initial separation per unit of speed.
const INITIAL_OFFSET_PER_SPEED: f64 = 500.0;

/// Zoom behaviour bucket of a parallax layer, derived from its `layer-N` index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Layers 1–6 and 11–13.
    Foreground,
    /// Layers 7–10.
    Middle,
    /// Layer 14 and anything unrecognised.
    Background,
}

impl LayerKind {
    pub fn from_index(index: Option<u32>) -> Self {
        match index {
            Some(1..=6) | Some(11..=13) => LayerKind::Foreground,
            Some(7..=10) => LayerKind::Middle,
            _ => LayerKind::Background,
        }
    }

    /// Zoom at scroll progress 0 and 1.
    pub fn zoom_range(self) -> (f64, f64) {
        match self {
            LayerKind::Foreground => (2.0, 1.0),
            LayerKind::Middle => (1.5, 1.0),
            // Ends below 1, so the backdrop shrinks past its natural size.
            LayerKind::Background => (1.5, 0.8),
        }
    }

    pub fn zoom(self, progress: f64) -> f64 {
        let (initial, last) = self.zoom_range();
        lerp(initial, last, progress)
    }
}

/// Parses the index out of the first class starting with `prefix`.
///
/// Mirrors `parseInt`: leading digits are taken, trailing junk is ignored,
/// and no digits at all yields `None`.
pub fn layer_index<'a>(classes: impl IntoIterator<Item = &'a str>, prefix: &str) -> Option<u32> {
    let class = classes.into_iter().find(|c| c.starts_with(prefix))?;
    let digits: String = class[prefix.len()..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Parses a `data-speed` value the way `parseFloat` does: the longest
/// leading decimal literal wins and trailing units are ignored (`"0.5px"` is
/// 0.5). Missing, non-numeric or non-finite values give `None`.
pub fn parse_speed(raw: Option<&str>) -> Option<f64> {
    let raw = raw?.trim_start();
    raw[..numeric_prefix_len(raw)]
        .parse::<f64>()
        .ok()
        .filter(|s| s.is_finite())
}

/// Byte length of the leading `[+-]digits[.digits][e[+-]digits]` literal.
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let int_end = digits_from(i);
    let mut has_digits = int_end > i;
    i = int_end;
    if i < b.len() && b[i] == b'.' {
        let frac_end = digits_from(i + 1);
        if frac_end > i + 1 || has_digits {
            has_digits |= frac_end > i + 1;
            i = frac_end;
        }
    }
    if !has_digits {
        return 0;
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            i = exp_end;
        }
    }
    i
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerSpec {
    pub kind: LayerKind,
    pub speed: f64,
}

impl LayerSpec {
    pub fn new(kind: LayerKind, speed: f64) -> Self {
        Self { kind, speed }
    }

    /// Vertical position: the initial offset minus the scroll-scaled travel.
    pub fn offset(&self, scrolled: f64) -> f64 {
        self.speed * INITIAL_OFFSET_PER_SPEED - scrolled * self.speed
    }

    pub fn transform(&self, scrolled: f64, progress: f64) -> Transform {
        Transform::translate_scale(self.offset(scrolled), self.kind.zoom(progress))
    }
}

/// `clamp(scrolled / max_scroll, 0, 1)`, or 0 on an unscrollable page.
pub fn scroll_progress(scrolled: f64, max_scroll: f64) -> f64 {
    if max_scroll <= 0.0 || !scrolled.is_finite() {
        return 0.0;
    }
    (scrolled / max_scroll).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_by_index() {
        for n in (1..=6).chain(11..=13) {
            assert_eq!(LayerKind::from_index(Some(n)), LayerKind::Foreground, "layer {n}");
        }
        for n in 7..=10 {
            assert_eq!(LayerKind::from_index(Some(n)), LayerKind::Middle, "layer {n}");
        }
        assert_eq!(LayerKind::from_index(Some(14)), LayerKind::Background);
        assert_eq!(LayerKind::from_index(Some(0)), LayerKind::Background);
        assert_eq!(LayerKind::from_index(None), LayerKind::Background);
    }

    #[test]
    fn index_parsing_follows_parse_int() {
        let classes = ["parallax-layer", "layer-12"];
        assert_eq!(layer_index(classes, "layer-"), Some(12));
        assert_eq!(layer_index(["layer-3b"], "layer-"), Some(3));
        assert_eq!(layer_index(["layer-x"], "layer-"), None);
        assert_eq!(layer_index(["parallax-layer"], "layer-"), None);
    }

    #[test]
    fn speed_parsing() {
        assert_eq!(parse_speed(Some(" 0.35 ")), Some(0.35));
        assert_eq!(parse_speed(Some("0.5px")), Some(0.5));
        assert_eq!(parse_speed(Some("-.25rem")), Some(-0.25));
        assert_eq!(parse_speed(Some("3.")), Some(3.0));
        assert_eq!(parse_speed(Some("1e2x")), Some(100.0));
        assert_eq!(parse_speed(Some("2e")), Some(2.0));
        assert_eq!(parse_speed(Some(".")), None);
        assert_eq!(parse_speed(Some("fast")), None);
        assert_eq!(parse_speed(Some("NaN")), None);
        assert_eq!(parse_speed(None), None);
    }

    #[test]
    fn progress_guards_unscrollable_page() {
        assert_eq!(scroll_progress(100.0, 0.0), 0.0);
        assert_eq!(scroll_progress(100.0, -20.0), 0.0);
        assert_eq!(scroll_progress(500.0, 250.0), 1.0);
        assert_eq!(scroll_progress(50.0, 200.0), 0.25);
    }
}
