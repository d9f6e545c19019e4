use std::fmt::Write;

/// An animatable visual property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    Opacity,
    /// Horizontal offset in px.
    X,
    /// Vertical offset in px.
    Y,
    Scale,
    /// Rotation in degrees.
    Rotation,
    /// Gaussian blur radius in px.
    Blur,
    /// Width as a percentage of the parent.
    WidthPercent,
}

impl Property {
    /// Value of the property when the element is at rest.
    pub fn resting(self) -> f64 {
        match self {
            Property::Opacity | Property::Scale => 1.0,
            Property::X | Property::Y | Property::Rotation | Property::Blur => 0.0,
            Property::WidthPercent => 100.0,
        }
    }
}

/// One property moving between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyDelta {
    pub property: Property,
    pub from: f64,
    pub to: f64,
}

impl PropertyDelta {
    pub fn new(property: Property, from: f64, to: f64) -> Self {
        Self { property, from, to }
    }

    /// Animate from `from` to the property's resting value.
    pub fn reveal(property: Property, from: f64) -> Self {
        Self::new(property, from, property.resting())
    }

    pub fn value_at(&self, eased: f64) -> f64 {
        self.from + (self.to - self.from) * eased
    }
}

/// Computed values for one element at one instant.
///
/// Properties that no tween touched stay `None` and are left alone
/// when the frame is turned into inline styles.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StyleFrame {
    pub opacity: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
    pub rotation: Option<f64>,
    pub blur: Option<f64>,
    pub width_percent: Option<f64>,
}

impl StyleFrame {
    pub fn set(&mut self, property: Property, value: f64) {
        let slot = match property {
            Property::Opacity => &mut self.opacity,
            Property::X => &mut self.x,
            Property::Y => &mut self.y,
            Property::Scale => &mut self.scale,
            Property::Rotation => &mut self.rotation,
            Property::Blur => &mut self.blur,
            Property::WidthPercent => &mut self.width_percent,
        };
        *slot = Some(value);
    }

    pub fn get(&self, property: Property) -> Option<f64> {
        match property {
            Property::Opacity => self.opacity,
            Property::X => self.x,
            Property::Y => self.y,
            Property::Scale => self.scale,
            Property::Rotation => self.rotation,
            Property::Blur => self.blur,
            Property::WidthPercent => self.width_percent,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Inline CSS declarations as `(property, value)` pairs.
    pub fn css(&self) -> Vec<(&'static str, String)> {
        let mut decls = Vec::new();

        if let Some(opacity) = self.opacity {
            decls.push(("opacity", format_number(opacity.clamp(0.0, 1.0))));
        }

        let has_transform = self.x.is_some()
            || self.y.is_some()
            || self.scale.is_some()
            || self.rotation.is_some();
        if has_transform {
            let mut transform = format!(
                "translate({}px, {}px)",
                format_number(self.x.unwrap_or(0.0)),
                format_number(self.y.unwrap_or(0.0))
            );
            if let Some(rotation) = self.rotation {
                let _ = write!(transform, " rotate({}deg)", format_number(rotation));
            }
            if let Some(scale) = self.scale {
                let _ = write!(transform, " scale({})", format_number(scale));
            }
            decls.push(("transform", transform));
        }

        if let Some(blur) = self.blur {
            decls.push(("filter", format!("blur({}px)", format_number(blur.max(0.0)))));
        }

        if let Some(width) = self.width_percent {
            decls.push(("width", format!("{}%", format_number(width))));
        }

        decls
    }

}

/// Trim floating point noise so styles stay readable (4 decimals max).
fn format_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    // Avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_frame_has_no_css() {
        assert!(StyleFrame::default().css().is_empty());
        assert!(StyleFrame::default().is_empty());
    }

    #[test]
    fn test_transform_is_combined() {
        let mut frame = StyleFrame::default();
        frame.set(Property::Y, 30.0);
        frame.set(Property::Scale, 0.8);
        frame.set(Property::Opacity, 0.0);

        let css = frame.css();
        assert_eq!(css[0], ("opacity", "0".to_string()));
        assert_eq!(css[1], ("transform", "translate(0px, 30px) scale(0.8)".to_string()));
    }

    #[test]
    fn test_filter_and_width_are_rounded() {
        let mut frame = StyleFrame::default();
        frame.set(Property::Blur, 2.123456);
        frame.set(Property::WidthPercent, 42.0);
        assert_eq!(
            frame.css(),
            vec![("filter", "blur(2.1235px)".to_string()), ("width", "42%".to_string())]
        );
    }

    #[test]
    fn test_resting_values() {
        assert_eq!(Property::Opacity.resting(), 1.0);
        assert_eq!(Property::X.resting(), 0.0);
        assert_eq!(Property::Blur.resting(), 0.0);
        assert_eq!(Property::Scale.resting(), 1.0);
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let mut frame = StyleFrame::default();
        frame.set(Property::X, -0.00001);
        assert_eq!(frame.css()[0].1, "translate(0px, 0px)");
    }
}
