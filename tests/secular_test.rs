use approx::assert_relative_eq;
use orbiter::kepler::{cos_deg, reduce_degrees};
use orbiter::{
    FrameConvention, SecularElementState, SecularElements, SecularPropagator, SecularRates,
};

fn mercury() -> SecularElementState {
    SecularElementState::new(
        SecularElements {
            ascending_node_longitude: 48.3313,
            inclination: 7.0047,
            periapsis_argument: 29.1241,
            semi_major_axis: 0.387098,
            eccentricity: 0.205635,
            mean_anomaly: 168.6562,
        },
        SecularRates {
            ascending_node_longitude: 3.24587e-5,
            inclination: 5.00e-8,
            periapsis_argument: 1.01444e-5,
            semi_major_axis: 0.0,
            eccentricity: 5.59e-10,
            mean_anomaly: 4.0923344368,
        },
    )
}

#[test]
fn test_angle_reduction() {
    assert_eq!(reduce_degrees(370.0), 10.0);
    assert_eq!(reduce_degrees(-10.0), 350.0);
    assert_eq!(reduce_degrees(720.0), 0.0);
}

#[test]
fn test_zero_rates_freeze_the_position() {
    let propagator = SecularPropagator::default();
    let mut state = mercury();
    state.rates = SecularRates::default();

    let positions: Vec<_> = (0..20).map(|_| propagator.step(&mut state, 0.1)).collect();
    assert!(positions.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_angles_stay_in_one_revolution() {
    let propagator = SecularPropagator::default();
    let mut state = mercury();

    for _ in 0..1000 {
        propagator.step(&mut state, 0.1);
        let el = state.elements;
        for angle in [
            el.ascending_node_longitude,
            el.inclination,
            el.periapsis_argument,
            el.mean_anomaly,
        ] {
            assert!((0.0..360.0).contains(&angle), "angle out of range: {angle}");
        }
    }
    // 100 time units of mean motion, reduced
    assert_relative_eq!(
        state.elements.mean_anomaly,
        reduce_degrees(168.6562 + 409.23344368),
        epsilon = 1e-8
    );
}

#[test]
fn test_satellite_shares_the_planet_motion() {
    let propagator = SecularPropagator::new(FrameConvention::Physical);
    let mut planet = mercury();
    let mut satellite = mercury().with_visual_scale(0.1);

    for _ in 0..10 {
        let p1 = propagator.step(&mut planet, 0.1);
        let p2 = propagator.step(&mut satellite, 0.1);
        assert_eq!(p1, p2);
    }
    assert_eq!(satellite.visual_scale, Some(0.1));
}

#[test]
fn test_snapshot_allows_reset() {
    let propagator = SecularPropagator::default();
    let initial = mercury();
    let mut state = initial;

    let first = propagator.step(&mut state, 0.1);
    for _ in 0..100 {
        propagator.step(&mut state, 0.1);
    }

    let mut state = initial;
    assert_eq!(propagator.step(&mut state, 0.1), first);
}

#[test]
fn test_radius_bounded_by_apsides() {
    let propagator = SecularPropagator::new(FrameConvention::Physical);
    let mut state = mercury();

    for _ in 0..500 {
        let position = propagator.step(&mut state, 1.0);
        let el = state.elements;

        // x and y carry r·cos(i): undo the projection to recover r
        let radius = position.x.hypot(position.y) / cos_deg(el.inclination).abs();
        let a = el.semi_major_axis;
        assert!(radius >= a * (1.0 - el.eccentricity) - 1e-12);
        assert!(radius <= a * (1.0 + el.eccentricity) + 1e-12);
    }
}
