//! Tunable glow parameters.

use glow_common::{ParamError, MAX_RADIUS};
use glow_config::schema::GlowParamsConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INTENSITY: f32 = 0.3;
pub const DEFAULT_RADIUS: u32 = 10;
pub const DEFAULT_BASE: f64 = 10.0;

/// Glow parameters, read by the compositor on every draw.
///
/// Every setter validates, so a value of this type always has a finite
/// intensity, a radius in `0..=MAX_RADIUS`, and a finite `base > 0`.
/// The smallest kernel denominator is `base` (at offset 0,0), so every
/// coefficient derived from it is finite.
///
/// Intensity is unbounded: negative values and values above 1 are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGlowParameters", into = "RawGlowParameters")]
pub struct GlowParameters {
    intensity: f32,
    radius: u32,
    base: f64,
    active: bool,
}

impl Default for GlowParameters {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_INTENSITY,
            radius: DEFAULT_RADIUS,
            base: DEFAULT_BASE,
            active: true,
        }
    }
}

impl GlowParameters {
    pub fn new(intensity: f32, radius: i64, base: f64, active: bool) -> Result<Self, ParamError> {
        Ok(Self {
            intensity: check_intensity(intensity)?,
            radius: check_radius(radius)?,
            base: check_base(base)?,
            active,
        })
    }

    /// Build parameters from the `[glow]` config section.
    pub fn from_config(config: &GlowParamsConfig) -> Result<Self, ParamError> {
        Self::new(config.intensity, config.radius, config.base, config.enabled)
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_intensity(&mut self, intensity: f32) -> Result<(), ParamError> {
        self.intensity = check_intensity(intensity)?;
        Ok(())
    }

    pub fn set_radius(&mut self, radius: i64) -> Result<(), ParamError> {
        self.radius = check_radius(radius)?;
        Ok(())
    }

    pub fn set_base(&mut self, base: f64) -> Result<(), ParamError> {
        self.base = check_base(base)?;
        Ok(())
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn toggle_active(&mut self) {
        self.active = !self.active;
    }

    /// Add `delta` to the intensity. On error the parameters are unchanged.
    pub fn adjust_intensity(&mut self, delta: f32) -> Result<(), ParamError> {
        self.set_intensity(self.intensity + delta)
    }

    /// Add `delta` to the radius. On error the parameters are unchanged.
    pub fn adjust_radius(&mut self, delta: i64) -> Result<(), ParamError> {
        self.set_radius(i64::from(self.radius).saturating_add(delta))
    }

    /// Add `delta` to the base. On error the parameters are unchanged.
    pub fn adjust_base(&mut self, delta: f64) -> Result<(), ParamError> {
        self.set_base(self.base + delta)
    }

    /// Number of offsets in the kernel: `(2 * radius + 1)^2`.
    pub fn kernel_size(&self) -> usize {
        let side = 2 * self.radius as usize + 1;
        side * side
    }

    /// Draw calls one `draw_glowing` invocation issues with these parameters.
    pub fn draw_count(&self) -> usize {
        if self.active {
            self.kernel_size() + 1
        } else {
            1
        }
    }
}

fn check_intensity(intensity: f32) -> Result<f32, ParamError> {
    if intensity.is_finite() {
        Ok(intensity)
    } else {
        Err(ParamError::NonFiniteIntensity(intensity))
    }
}

fn check_radius(radius: i64) -> Result<u32, ParamError> {
    if radius < 0 {
        return Err(ParamError::NegativeRadius(radius));
    }
    if radius > i64::from(MAX_RADIUS) {
        return Err(ParamError::RadiusTooLarge(radius));
    }
    Ok(radius as u32)
}

fn check_base(base: f64) -> Result<f64, ParamError> {
    if !base.is_finite() {
        return Err(ParamError::NonFiniteBase(base));
    }
    if base <= 0.0 {
        return Err(ParamError::NonPositiveBase(base));
    }
    Ok(base)
}

/// Unvalidated wire form; deserialization goes through `GlowParameters::new`.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct RawGlowParameters {
    intensity: f32,
    radius: i64,
    base: f64,
    active: bool,
}

impl Default for RawGlowParameters {
    fn default() -> Self {
        GlowParameters::default().into()
    }
}

impl From<GlowParameters> for RawGlowParameters {
    fn from(p: GlowParameters) -> Self {
        Self {
            intensity: p.intensity,
            radius: i64::from(p.radius),
            base: p.base,
            active: p.active,
        }
    }
}

impl TryFrom<RawGlowParameters> for GlowParameters {
    type Error = ParamError;

    fn try_from(raw: RawGlowParameters) -> Result<Self, Self::Error> {
        GlowParameters::new(raw.intensity, raw.radius, raw.base, raw.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = GlowParameters::default();
        assert!((p.intensity() - 0.3).abs() < f32::EPSILON);
        assert_eq!(p.radius(), 10);
        assert!((p.base() - 10.0).abs() < f64::EPSILON);
        assert!(p.is_active());
    }

    #[test]
    fn kernel_size_and_draw_count() {
        let mut p = GlowParameters::default();
        assert_eq!(p.kernel_size(), 441);
        assert_eq!(p.draw_count(), 442);

        p.set_active(false);
        assert_eq!(p.draw_count(), 1);

        p.set_active(true);
        p.set_radius(0).unwrap();
        assert_eq!(p.kernel_size(), 1);
        assert_eq!(p.draw_count(), 2);
    }

    #[test]
    fn negative_radius_is_rejected() {
        let mut p = GlowParameters::default();
        assert_eq!(p.set_radius(-1), Err(ParamError::NegativeRadius(-1)));
        assert_eq!(p.radius(), 10);
    }

    #[test]
    fn oversized_radius_is_rejected() {
        let mut p = GlowParameters::default();
        assert_eq!(p.set_radius(513), Err(ParamError::RadiusTooLarge(513)));
        assert!(p.set_radius(512).is_ok());
    }

    #[test]
    fn zero_base_is_rejected() {
        let mut p = GlowParameters::default();
        assert_eq!(p.set_base(0.0), Err(ParamError::NonPositiveBase(0.0)));
        assert!(p.set_base(-2.0).is_err());
        assert!(matches!(
            p.set_base(f64::INFINITY),
            Err(ParamError::NonFiniteBase(_))
        ));
        assert!((p.base() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn intensity_is_not_clamped() {
        let mut p = GlowParameters::default();
        p.set_intensity(-0.5).unwrap();
        assert!((p.intensity() + 0.5).abs() < f32::EPSILON);
        p.set_intensity(7.0).unwrap();
        assert!((p.intensity() - 7.0).abs() < f32::EPSILON);
        assert!(p.set_intensity(f32::NAN).is_err());
    }

    #[test]
    fn new_validates_every_field() {
        assert!(GlowParameters::new(0.3, 10, 10.0, true).is_ok());
        assert!(GlowParameters::new(0.3, -1, 10.0, true).is_err());
        assert!(GlowParameters::new(0.3, 10, 0.0, true).is_err());
        assert!(GlowParameters::new(f32::INFINITY, 10, 10.0, true).is_err());
    }

    #[test]
    fn adjust_applies_deltas() {
        let mut p = GlowParameters::default();
        p.adjust_radius(1).unwrap();
        assert_eq!(p.radius(), 11);
        p.adjust_base(-0.5).unwrap();
        assert!((p.base() - 9.5).abs() < 1e-12);
        p.adjust_intensity(0.01).unwrap();
        assert!((p.intensity() - 0.31).abs() < 1e-6);
    }

    #[test]
    fn rejected_adjustment_leaves_state_unchanged() {
        let mut p = GlowParameters::new(0.3, 0, 0.5, true).unwrap();
        let before = p;

        assert_eq!(p.adjust_radius(-1), Err(ParamError::NegativeRadius(-1)));
        assert_eq!(p.adjust_base(-0.5), Err(ParamError::NonPositiveBase(0.0)));
        assert_eq!(p, before);
    }

    #[test]
    fn toggle_active_flips() {
        let mut p = GlowParameters::default();
        p.toggle_active();
        assert!(!p.is_active());
        p.toggle_active();
        assert!(p.is_active());
    }

    #[test]
    fn from_config_defaults() {
        let p = GlowParameters::from_config(&GlowParamsConfig::default()).unwrap();
        assert_eq!(p, GlowParameters::default());
    }

    #[test]
    fn from_config_disabled_and_invalid() {
        let config = GlowParamsConfig {
            enabled: false,
            ..Default::default()
        };
        assert!(!GlowParameters::from_config(&config).unwrap().is_active());

        let config = GlowParamsConfig {
            radius: -1,
            ..Default::default()
        };
        assert_eq!(
            GlowParameters::from_config(&config),
            Err(ParamError::NegativeRadius(-1))
        );
    }

    #[test]
    fn deserialization_is_validated() {
        let p: GlowParameters = serde_json::from_str(r#"{"radius": 2}"#).unwrap();
        assert_eq!(p.radius(), 2);
        assert!(p.is_active());

        let err = serde_json::from_str::<GlowParameters>(r#"{"base": 0.0}"#).unwrap_err();
        assert!(err.to_string().contains("base must be greater than zero"));

        let err = serde_json::from_str::<GlowParameters>(r#"{"radius": -1}"#).unwrap_err();
        assert!(err.to_string().contains("radius must not be negative"));
    }

    #[test]
    fn serialization_roundtrip() {
        let p = GlowParameters::new(0.75, 3, 2.5, false).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let back: GlowParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
