//! Construction-time configuration read from host attributes.
//!
//! Hosts that describe their UI declaratively hand the menu a flat set of
//! string attributes. Dimensions accept `dp`/`dip`, `px` or a bare number of
//! pixels; colors accept `#RRGGBB` and `#AARRGGBB`.

use std::collections::BTreeMap;

use slideup_ui_graphics::{Color, Density, Dp};

use crate::error::SlideUpMenuError;
use crate::widgets::ContentNode;

pub const HEADER_VIEW: &str = "headerView";
pub const BODY_VIEW: &str = "bodyView";
pub const COLLAPSED_MENU_OFFSET: &str = "collapsedMenuOffset";
pub const EXPANDED_MENU_OFFSET: &str = "expandedMenuOffset";
pub const CORNER_RADIUS: &str = "cornerRadius";
pub const MENU_ELEVATION: &str = "menuElevation";
pub const MENU_BACKGROUND_COLOR: &str = "menuBackgroundColor";

/// Resolves layout references into content nodes.
pub trait ContentInflater {
    /// Returns `None` when `layout` does not name an inflatable layout.
    fn inflate(&mut self, layout: &str) -> Option<ContentNode>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeSet {
    values: BTreeMap<String, String>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Layout reference stored under `key`, ignoring blank values.
    pub fn resource(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|value| !value.is_empty())
    }

    /// Dimension converted to whole pixels, or `default` when absent.
    pub fn dimension_pixel_size(
        &self,
        key: &'static str,
        default: i32,
        density: Density,
    ) -> Result<i32, SlideUpMenuError> {
        let Some(raw) = self.get(key) else {
            return Ok(default);
        };
        let px = parse_dimension(raw, density).ok_or_else(|| SlideUpMenuError::InvalidDimension {
            attribute: key,
            value: raw.to_string(),
        })?;
        Ok(to_pixel_size(px))
    }

    pub fn color(&self, key: &'static str, default: Color) -> Result<Color, SlideUpMenuError> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => Color::parse_hex(raw).ok_or_else(|| SlideUpMenuError::InvalidColor {
                attribute: key,
                value: raw.to_string(),
            }),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = AttributeSet::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

fn parse_dimension(raw: &str, density: Density) -> Option<f32> {
    let raw = raw.trim();
    let (number, in_dp) = if let Some(number) = raw.strip_suffix("dip") {
        (number, true)
    } else if let Some(number) = raw.strip_suffix("dp") {
        (number, true)
    } else if let Some(number) = raw.strip_suffix("px") {
        (number, false)
    } else {
        (raw, false)
    };
    let value: f32 = number.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(if in_dp {
        density.dp_to_px(Dp(value))
    } else {
        value
    })
}

/// Rounds half away from zero; non-zero values never collapse to 0.
fn to_pixel_size(px: f32) -> i32 {
    let rounded = (if px >= 0.0 { px + 0.5 } else { px - 0.5 }) as i32;
    match rounded {
        0 if px > 0.0 => 1,
        0 if px < 0.0 => -1,
        value => value,
    }
}
