use crate::constants::*;
use crate::error::ConfigError;
use glam::Vec3;

/// Bounds and unit conversion for the gesture transform engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub min_scale: f32,
    pub max_scale: f32,
    pub pan_units_per_world_unit: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            pan_units_per_world_unit: PAN_UNITS_PER_WORLD_UNIT,
        }
    }
}

impl GestureConfig {
    pub fn with_scale_bounds(mut self, min_scale: f32, max_scale: f32) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds_ok = self.min_scale.is_finite()
            && self.max_scale.is_finite()
            && self.min_scale > 0.0
            && self.min_scale <= self.max_scale;
        if !bounds_ok {
            return Err(ConfigError::ScaleBounds {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if !is_positive_finite(self.pan_units_per_world_unit) {
            return Err(ConfigError::PanDivisor(self.pan_units_per_world_unit));
        }
        Ok(())
    }
}

/// Everything an AR view needs to build and manipulate its plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArConfig {
    pub reference_width: f32,
    pub default_position: Vec3,
    pub bake_scale: f32,
    pub max_texture_edge: u32,
    pub gesture: GestureConfig,
}

impl Default for ArConfig {
    fn default() -> Self {
        Self {
            reference_width: REFERENCE_WIDTH,
            default_position: DEFAULT_NODE_POSITION,
            bake_scale: BAKE_SCALE,
            max_texture_edge: MAX_TEXTURE_EDGE,
            gesture: GestureConfig::default(),
        }
    }
}

impl ArConfig {
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    pub fn with_reference_width(mut self, reference_width: f32) -> Self {
        self.reference_width = reference_width;
        self
    }

    pub fn with_max_texture_edge(mut self, max_texture_edge: u32) -> Self {
        self.max_texture_edge = max_texture_edge;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive_finite(self.reference_width) {
            return Err(ConfigError::ReferenceWidth(self.reference_width));
        }
        if !is_positive_finite(self.bake_scale) {
            return Err(ConfigError::BakeScale(self.bake_scale));
        }
        if self.max_texture_edge == 0 {
            return Err(ConfigError::MaxTextureEdge);
        }
        if !self.default_position.is_finite() {
            return Err(ConfigError::DefaultPosition(
                self.default_position.to_array(),
            ));
        }
        self.gesture.validate()
    }
}

#[inline]
fn is_positive_finite(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ArConfig::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_scale_bounds_are_rejected() {
        let cfg = ArConfig::default().with_gesture(GestureConfig::default().with_scale_bounds(2.0, 1.0));
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ScaleBounds { min: 2.0, max: 1.0 })
        );
    }

    #[test]
    fn zero_min_scale_is_rejected() {
        let g = GestureConfig::default().with_scale_bounds(0.0, 1.0);
        assert!(g.validate().is_err());
    }

    #[test]
    fn non_finite_fields_are_rejected() {
        let cfg = ArConfig::default().with_reference_width(f32::NAN);
        assert!(matches!(cfg.validate(), Err(ConfigError::ReferenceWidth(_))));

        let mut cfg = ArConfig::default();
        cfg.default_position = Vec3::new(0.0, f32::INFINITY, 0.0);
        assert!(matches!(cfg.validate(), Err(ConfigError::DefaultPosition(_))));

        let cfg = ArConfig::default().with_max_texture_edge(0);
        assert_eq!(cfg.validate(), Err(ConfigError::MaxTextureEdge));
    }
}
