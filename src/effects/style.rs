use std::fmt;

/// Vertical translation with an optional uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub y: f64,
    pub scale: Option<f64>,
}

impl Transform {
    pub fn translate(y: f64) -> Self {
        Self { y, scale: None }
    }

    pub fn translate_scale(y: f64, scale: f64) -> Self {
        Self {
            y,
            scale: Some(scale),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate3d(0, {}px, 0)", css_number(self.y))?;
        if let Some(scale) = self.scale {
            write!(f, " scale({})", css_number(scale))?;
        }
        Ok(())
    }
}

/// Inline style writes for one element. `None` fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleProps {
    pub transform: Option<Transform>,
    pub opacity: Option<f64>,
    /// Presence of the "hidden" class (scroll indicator only).
    pub hidden: Option<bool>,
}

impl StyleProps {
    pub fn transform(transform: Transform) -> Self {
        Self {
            transform: Some(transform),
            ..Self::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn hidden(hidden: bool) -> Self {
        Self {
            hidden: Some(hidden),
            ..Self::default()
        }
    }

    pub fn transform_css(&self) -> Option<String> {
        self.transform.map(|t| t.to_string())
    }

    pub fn opacity_css(&self) -> Option<String> {
        self.opacity.map(css_number)
    }
}

/// Shortest round-trip decimal, with negative zero written as `0`.
pub fn css_number(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    v.to_string()
}

/// `start + (end - start) * t`
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}
