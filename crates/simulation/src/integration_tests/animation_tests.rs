//! Per-frame animation of visible effects.

use crate::selection::WeatherKind;
use crate::test_harness::TestSky;

#[test]
fn test_hidden_fields_do_not_move() {
    let mut sky = TestSky::new();
    let rain = sky.effects().rain.positions().to_vec();
    let clouds = sky.effects().clouds.instances().to_vec();
    sky.tick(10);
    assert_eq!(sky.effects().rain.positions(), rain.as_slice());
    assert_eq!(sky.effects().clouds.instances(), clouds.as_slice());
}

#[test]
fn test_visible_clouds_drift_every_frame() {
    let mut sky = TestSky::new();
    sky.select_weather(WeatherKind::Cloudy);
    let before = sky.effects().clouds.instances()[0].rotation_y;
    sky.tick(10);
    let after = sky.effects().clouds.instances()[0].rotation_y;
    assert!(
        (after - before - 0.01).abs() < 1e-5,
        "10 frames should add 0.01 rad, got {}",
        after - before
    );
}

#[test]
fn test_dust_field_spins_while_visible() {
    let mut sky = TestSky::new();
    sky.select_weather(WeatherKind::Dusty);
    let spin = sky.effects().dust.rotation_y();
    assert!(spin > 0.0);

    sky.select_weather(WeatherKind::Sunny).tick(5);
    assert_eq!(sky.effects().dust.rotation_y(), spin);
}

#[test]
fn test_animation_respects_wrap_bounds() {
    let mut sky = TestSky::new();
    sky.select_weather(WeatherKind::Dusty).tick(200);
    for p in sky.effects().dust.positions() {
        assert!(p.x <= 50.0 && p.y <= 20.0 && p.z <= 50.0, "{p:?}");
    }

    sky.select_weather(WeatherKind::Snowy).tick(200);
    for p in sky.effects().snow.positions() {
        assert!((-2.0..=50.0).contains(&p.y), "{p:?}");
    }
}

#[test]
fn test_population_is_fixed() {
    let mut sky = TestSky::new();
    let counts = (
        sky.effects().rain.len(),
        sky.effects().snow.len(),
        sky.effects().dust.len(),
    );
    sky.select_weather(WeatherKind::Rainy)
        .select_weather(WeatherKind::Snowy)
        .select_weather(WeatherKind::Dusty)
        .tick(50);
    assert_eq!(
        counts,
        (
            sky.config().rain.count,
            sky.config().snow.count,
            sky.config().dust.count
        )
    );
    assert_eq!(sky.effects().rain.len(), counts.0);
}
