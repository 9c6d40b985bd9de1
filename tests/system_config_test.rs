use approx::assert_relative_eq;
use camino::Utf8Path;
use orbiter::{BodyOrbit, FrameConvention, OrbiterError, SystemConfig};

#[test]
fn test_load_earth_moon_system() {
    let config = SystemConfig::from_path(Utf8Path::new("tests/data/earth_moon.json")).unwrap();

    assert_eq!(config.frame, FrameConvention::DisplayYUp);
    assert_eq!(config.time_step, 60.0);
    let names: Vec<&str> = config.bodies.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["iss", "molniya", "moon"]);

    match &config.bodies[1].orbit {
        BodyOrbit::Keplerian(elements) => {
            assert_eq!(elements.eccentricity, 0.72);
            assert_eq!(elements.periapsis_epoch, -3600.0);
            assert_eq!(elements.anomaly_iterations, 20);
        }
        BodyOrbit::Secular(_) => panic!("molniya should be keplerian"),
    }
    assert_eq!(config.bodies[2].orbit.visual_scale(), Some(0.27));
}

#[test]
fn test_simulation_from_config() {
    let config = SystemConfig::from_path(Utf8Path::new("tests/data/earth_moon.json")).unwrap();
    let mut sim = config.build_simulation().unwrap();

    let iss_path = sim.body("iss").unwrap().path().unwrap().to_vec();
    assert_eq!(iss_path.len(), 61);
    assert_eq!(iss_path.first(), iss_path.last());

    let mut last_time = sim.time();
    for _ in 0..90 {
        let frames = sim.tick();
        assert_eq!(frames.len(), 3);

        // ISS stays within its apsides (a = 6.78e6 m, e = 0.0005)
        let iss = frames[0].position.norm();
        assert!(iss > 6.78e6 * (1.0 - 0.0005) - 1.0);
        assert!(iss < 6.78e6 * (1.0 + 0.0005) + 1.0);

        assert!(sim.time() > last_time);
        last_time = sim.time();
    }
    assert_relative_eq!(sim.time(), 90.0 * 60.0, max_relative = 1e-12);

    // paths depend on the elements only
    assert_eq!(sim.body("iss").unwrap().path().unwrap(), iss_path.as_slice());
}

#[test]
fn test_missing_system_file() {
    let err = SystemConfig::from_path(Utf8Path::new("tests/data/missing.json")).unwrap_err();
    assert!(matches!(err, OrbiterError::IoError(_)));
}
