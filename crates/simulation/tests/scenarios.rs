//! Scenario tests through the public API, without an ECS app.
//!
//! Run: cargo test -p simulation --test scenarios

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use simulation::config::{DUST_TAN, FOG_GRAY, NIGHT_NAVY, SKY_BLUE};
use simulation::effects::{EffectKind, Updatable, WeatherEffects};
use simulation::effects_config::EffectsConfig;
use simulation::environment::{derive_environment, FogConfig};
use simulation::selection::{SelectionRequest, TimeOfDay, WeatherKind, WeatherSelection};
use simulation::transition::apply_transition;

fn effects() -> WeatherEffects {
    WeatherEffects::from_config(&EffectsConfig::small(), &mut ChaCha8Rng::seed_from_u64(2024))
}

// ---------------------------------------------------------------------------
// 1. Lighting derivation
// ---------------------------------------------------------------------------

#[test]
fn night_lighting_is_weather_independent() {
    for weather in WeatherKind::ALL {
        let env = derive_environment(TimeOfDay::Night, weather);
        assert_eq!(
            (env.ambient_intensity, env.directional_intensity, env.clear_color),
            (0.3, 0.5, NIGHT_NAVY)
        );
    }
}

#[test]
fn day_lighting_brightest_when_sunny() {
    let sunny = derive_environment(TimeOfDay::Day, WeatherKind::Sunny);
    let cloudy = derive_environment(TimeOfDay::Day, WeatherKind::Cloudy);
    assert_eq!((sunny.ambient_intensity, sunny.directional_intensity), (1.0, 2.0));
    assert_eq!((cloudy.ambient_intensity, cloudy.directional_intensity), (0.7, 1.5));
    assert_eq!(sunny.clear_color, SKY_BLUE);
    assert_eq!(cloudy.clear_color, SKY_BLUE);
}

// ---------------------------------------------------------------------------
// 2. Scenarios
// ---------------------------------------------------------------------------

#[test]
fn dusty_day() {
    let mut fx = effects();
    let env = apply_transition(
        WeatherSelection::new(TimeOfDay::Day, WeatherKind::Dusty),
        &mut fx,
        0.0,
    );
    assert_eq!(env.clear_color, DUST_TAN);
    assert_eq!(
        env.fog,
        Some(FogConfig {
            color: DUST_TAN,
            near: 1.0,
            far: 30.0
        })
    );
    assert!(fx.dust.is_visible());
    assert!(!fx.rain.is_visible());
    assert!(!fx.snow.is_visible());
    assert!(!fx.clouds.is_visible());
}

#[test]
fn night_then_rainy() {
    let mut fx = effects();
    let mut selection = WeatherSelection::default();
    for request in [
        SelectionRequest::TimeOfDay(TimeOfDay::Night),
        SelectionRequest::Weather(WeatherKind::Rainy),
    ] {
        selection.apply(request);
        apply_transition(selection, &mut fx, 0.0);
    }
    let env = apply_transition(selection, &mut fx, 0.0);

    assert_eq!(env.ambient_intensity, 0.3);
    assert_eq!(env.directional_intensity, 0.5);
    assert_eq!(env.clear_color, NIGHT_NAVY);
    assert_eq!(fx.visible_kinds(), vec![EffectKind::Rain, EffectKind::Clouds]);
}

#[test]
fn foggy_has_fog_and_nothing_else() {
    let mut fx = effects();
    let env = apply_transition(
        WeatherSelection::new(TimeOfDay::Day, WeatherKind::Foggy),
        &mut fx,
        0.0,
    );
    assert!(fx.visible_kinds().is_empty());
    assert_eq!(
        env.fog,
        Some(FogConfig {
            color: FOG_GRAY,
            near: 0.1,
            far: 20.0
        })
    );
}

// ---------------------------------------------------------------------------
// 3. Wrap-around over a long run
// ---------------------------------------------------------------------------

#[test]
fn long_run_stays_within_one_step_of_bounds() {
    let config = EffectsConfig::small();
    let mut fx = effects();
    for kind in EffectKind::ALL {
        fx.effect_mut(kind).set_visible(true);
    }

    let max_rain_step = config.rain.velocity.1;
    let max_snow_step = config.snow.velocity.1;
    for frame in 0..2_000 {
        fx.update_visible(frame as f32 / 60.0);

        for p in fx.rain.positions() {
            assert!(p.y >= -2.0 - max_rain_step && p.y <= 50.0);
        }
        for p in fx.snow.positions() {
            assert!(p.y >= -2.0 - max_snow_step && p.y <= 50.0);
        }
        for p in fx.dust.positions() {
            assert!(p.x <= 50.0 && p.y <= 20.0 && p.z <= 50.0);
        }
        for c in fx.clouds.instances() {
            assert!(c.position.x <= 50.0);
        }
    }
}
