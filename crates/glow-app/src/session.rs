//! Interactive parameter state: key presses nudge the glow parameters.

use glow_common::{Action, ParamError};
use glow_config::schema::StepConfig;
use glow_platform::{KeyCombo, KeybindRegistry};
use glow_renderer::GlowParameters;
use tracing::{debug, info, warn};

/// What a single action did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Parameters changed.
    Updated,
    /// The adjustment would have produced invalid parameters and was dropped.
    Rejected(ParamError),
    /// The user asked to quit.
    Quit,
    /// No binding, or a no-op action.
    Ignored,
}

pub struct GlowSession {
    params: GlowParameters,
    steps: StepConfig,
    registry: KeybindRegistry,
}

impl GlowSession {
    pub fn new(params: GlowParameters, steps: StepConfig, registry: KeybindRegistry) -> Self {
        Self {
            params,
            steps,
            registry,
        }
    }

    pub fn params(&self) -> &GlowParameters {
        &self.params
    }

    /// Apply one action. Rejected adjustments leave the parameters as they were.
    pub fn apply(&mut self, action: &Action) -> SessionEvent {
        let steps = &self.steps;
        let result = match action {
            Action::ToggleGlow => {
                self.params.toggle_active();
                Ok(())
            }
            Action::IncreaseIntensity => self.params.adjust_intensity(steps.intensity),
            Action::DecreaseIntensity => self.params.adjust_intensity(-steps.intensity),
            Action::IncreaseRadius => self.params.adjust_radius(i64::from(steps.radius)),
            Action::DecreaseRadius => self.params.adjust_radius(-i64::from(steps.radius)),
            Action::IncreaseBase => self.params.adjust_base(steps.base),
            Action::DecreaseBase => self.params.adjust_base(-steps.base),
            Action::Quit => return SessionEvent::Quit,
            Action::None => return SessionEvent::Ignored,
        };

        match result {
            Ok(()) => {
                info!(action = action.label(), "{}", self.status());
                SessionEvent::Updated
            }
            Err(e) => {
                warn!(action = action.label(), "adjustment rejected: {e}");
                SessionEvent::Rejected(e)
            }
        }
    }

    /// Resolve a key press through the registry and apply its action.
    pub fn press(&mut self, combo: &KeyCombo) -> SessionEvent {
        match self.registry.lookup(combo).copied() {
            Some(action) => self.apply(&action),
            None => {
                debug!(key = %combo.key, mods = combo.mods, "unbound key");
                SessionEvent::Ignored
            }
        }
    }

    /// One-line parameter summary with the keys that change each value.
    pub fn status(&self) -> String {
        let key = |action: Action| {
            self.registry
                .keybind_for_action(&action)
                .unwrap_or_else(|| "unbound".to_string())
        };
        format!(
            "intensity {:.2} ({}/{}), radius {} ({}/{}), base {:.2} ({}/{}), glow active {} ({})",
            self.params.intensity(),
            key(Action::IncreaseIntensity),
            key(Action::DecreaseIntensity),
            self.params.radius(),
            key(Action::IncreaseRadius),
            key(Action::DecreaseRadius),
            self.params.base(),
            key(Action::IncreaseBase),
            key(Action::DecreaseBase),
            self.params.is_active(),
            key(Action::ToggleGlow),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glow_config::schema::KeybindConfig;

    fn session_with(params: GlowParameters) -> GlowSession {
        GlowSession::new(
            params,
            StepConfig::default(),
            KeybindRegistry::from_config(&KeybindConfig::default()),
        )
    }

    fn session() -> GlowSession {
        session_with(GlowParameters::default())
    }

    fn key(s: &str) -> KeyCombo {
        KeyCombo::parse(s).unwrap()
    }

    #[test]
    fn arrow_keys_adjust_intensity_and_radius() {
        let mut s = session();
        assert_eq!(s.press(&key("Up")), SessionEvent::Updated);
        assert!((s.params().intensity() - 0.31).abs() < 1e-6);
        s.press(&key("Down"));
        s.press(&key("Down"));
        assert!((s.params().intensity() - 0.29).abs() < 1e-6);

        s.press(&key("Right"));
        assert_eq!(s.params().radius(), 11);
        s.press(&key("Left"));
        s.press(&key("Left"));
        assert_eq!(s.params().radius(), 9);
    }

    #[test]
    fn q_and_a_adjust_base() {
        let mut s = session();
        s.press(&key("Q"));
        assert!((s.params().base() - 10.5).abs() < 1e-12);
        s.press(&key("a"));
        s.press(&key("A"));
        assert!((s.params().base() - 9.5).abs() < 1e-12);
    }

    #[test]
    fn space_toggles_glow() {
        let mut s = session();
        s.press(&key("Space"));
        assert!(!s.params().is_active());
        assert_eq!(s.params().draw_count(), 1);
        s.press(&key("Space"));
        assert!(s.params().is_active());
    }

    #[test]
    fn radius_cannot_go_below_zero() {
        let mut s = session_with(GlowParameters::new(0.3, 0, 10.0, true).unwrap());
        assert_eq!(
            s.press(&key("Left")),
            SessionEvent::Rejected(ParamError::NegativeRadius(-1))
        );
        assert_eq!(s.params().radius(), 0);
    }

    #[test]
    fn base_cannot_reach_zero() {
        let mut s = session_with(GlowParameters::new(0.3, 10, 0.5, true).unwrap());
        let before = *s.params();
        assert_eq!(
            s.apply(&Action::DecreaseBase),
            SessionEvent::Rejected(ParamError::NonPositiveBase(0.0))
        );
        assert_eq!(*s.params(), before);
    }

    #[test]
    fn intensity_may_go_negative() {
        let mut s = session_with(GlowParameters::new(0.0, 1, 10.0, true).unwrap());
        assert_eq!(s.apply(&Action::DecreaseIntensity), SessionEvent::Updated);
        assert!(s.params().intensity() < 0.0);
    }

    #[test]
    fn escape_quits_and_unbound_keys_are_ignored() {
        let mut s = session();
        assert_eq!(s.press(&key("Escape")), SessionEvent::Quit);
        assert_eq!(s.press(&key("Ctrl+Z")), SessionEvent::Ignored);
        assert_eq!(s.apply(&Action::None), SessionEvent::Ignored);
        assert_eq!(*s.params(), GlowParameters::default());
    }

    #[test]
    fn custom_steps_are_used() {
        let steps = StepConfig {
            intensity: 0.1,
            radius: 5,
            base: 2.0,
        };
        let mut s = GlowSession::new(
            GlowParameters::default(),
            steps,
            KeybindRegistry::from_config(&KeybindConfig::default()),
        );
        s.apply(&Action::IncreaseRadius);
        s.apply(&Action::IncreaseBase);
        assert_eq!(s.params().radius(), 15);
        assert!((s.params().base() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn status_names_values_and_keys() {
        let status = session().status();
        assert!(status.contains("intensity 0.30 (Up/Down)"));
        assert!(status.contains("radius 10 (Right/Left)"));
        assert!(status.contains("base 10.00 (Q/A)"));
        assert!(status.contains("glow active true (Space)"));
    }
}
