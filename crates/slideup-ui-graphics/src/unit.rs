//! Unit types: Dp, Density and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        Self(px / density)
    }
}

/// Display density: physical pixels per density-independent pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density(pub f32);

impl Density {
    pub fn dp_to_px(&self, dp: Dp) -> f32 {
        dp.to_px(self.0)
    }
}

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}
