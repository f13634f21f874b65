//! Startup handling of rejected effect configs.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::effects::WeatherEffects;
use crate::effects_config::{EffectsConfig, DEFAULT_SEED};
use crate::selection::WeatherKind;
use crate::test_harness::TestSky;

fn rejected_config() -> EffectsConfig {
    let mut config = EffectsConfig::small();
    config.seed = 7;
    config.rain.velocity = (-0.4, -0.1);
    config.dust.velocity = (-0.3, -0.1);
    config.snow.velocity = (0.25, 0.25);
    config
}

#[test]
fn test_rejected_config_falls_back_to_defaults() {
    let sky = TestSky::with_config(rejected_config());
    assert_eq!(sky.config(), &EffectsConfig::default());
    assert_eq!(sky.effects().rain.len(), EffectsConfig::default().rain.count);
}

#[test]
fn test_fallback_allocation_uses_default_seed() {
    let sky = TestSky::with_config(rejected_config());
    let expected = WeatherEffects::from_config(
        &EffectsConfig::default(),
        &mut ChaCha8Rng::seed_from_u64(DEFAULT_SEED),
    );
    // Sunny start: nothing has been stepped yet.
    assert_eq!(sky.effects().rain.positions(), expected.rain.positions());
    assert_eq!(sky.effects().dust.velocities(), expected.dust.velocities());
}

#[test]
fn test_fallback_fields_stay_within_wrap_bounds() {
    let mut sky = TestSky::with_config(rejected_config());
    sky.select_weather(WeatherKind::Rainy).tick(300);
    for p in sky.effects().rain.positions() {
        assert!((-2.5..=50.0).contains(&p.y), "{p:?}");
    }
    sky.select_weather(WeatherKind::Dusty).tick(300);
    for p in sky.effects().dust.positions() {
        assert!((-50.0..=50.0).contains(&p.x), "{p:?}");
    }
}
