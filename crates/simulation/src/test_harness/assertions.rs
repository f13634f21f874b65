//! Assertion helpers for `TestSky` integration tests.

use crate::effects::EffectKind;
use crate::environment::FogConfig;

use super::TestSky;

impl TestSky {
    /// Assert exactly `expected` are visible, in any order.
    pub fn assert_visible_exactly(&self, expected: &[EffectKind]) {
        let mut expected = expected.to_vec();
        expected.sort();
        let visible = self.visible_effects();
        assert_eq!(
            visible, expected,
            "Expected visible effects {expected:?}, got {visible:?}"
        );
    }

    pub fn assert_lighting(&self, ambient: f32, directional: f32) {
        let env = self.environment();
        assert!(
            (env.ambient_intensity - ambient).abs() < f32::EPSILON
                && (env.directional_intensity - directional).abs() < f32::EPSILON,
            "Expected lighting ({ambient}, {directional}), got ({}, {})",
            env.ambient_intensity,
            env.directional_intensity
        );
    }

    pub fn assert_clear_color(&self, hex: u32) {
        let actual = self.environment().clear_color;
        assert_eq!(
            actual, hex,
            "Expected clear color {hex:#08X}, got {actual:#08X}"
        );
    }

    pub fn assert_fog(&self, expected: Option<FogConfig>) {
        let actual = self.environment().fog;
        assert_eq!(actual, expected, "Unexpected scene fog");
    }
}
