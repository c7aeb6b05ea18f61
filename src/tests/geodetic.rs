#[cfg(test)]
mod test {
    use crate::{
        prelude::*,
        tests::toolkit::{random_site, site_from_geodetic},
    };
    use map_3d::{ecef2geodetic, Ellipsoid as RefEllipsoid};

    #[test]
    fn equatorial_site() {
        for (x, y) in [
            (Ellipsoid::EQUATORIAL_RADIUS_KM, 0.0),
            (0.0, Ellipsoid::EQUATORIAL_RADIUS_KM),
            (-4510.0, 4510.0),
            (3000.0, -6000.0),
        ] {
            let site = EcefPosition::new(x, y, 0.0);
            let solution = GeodeticSolution::solve(&site);
            assert!(solution.converged, "{} did not converge", site);
            assert_eq!(solution.iterations, 1);
            assert!(solution.latitude_rad.abs() < 1.0E-12, "{}", solution);
            assert!((solution.longitude_rad - y.atan2(x)).abs() < 1.0E-15);
        }
    }

    #[test]
    fn reference_radius() {
        let site = EcefPosition::new(Ellipsoid::EQUATORIAL_RADIUS_KM, 0.0, 0.0);
        let solution = GeodeticSolution::solve(&site);
        assert_eq!(solution.latitude_rad, 0.0);
        assert_eq!(solution.longitude_rad, 0.0);
        assert_eq!(
            solution.curvature_radius_km,
            Ellipsoid::EQUATORIAL_RADIUS_KM
        );
        assert!(solution.height_km.abs() < 1.0E-9);
    }

    #[test]
    fn polar_sites() {
        for z_km in [6356.752, -6356.752] {
            let site = EcefPosition::new(0.0, 0.0, z_km);
            let solution = GeodeticSolution::solve(&site);
            assert!(solution.converged);
            let expected = std::f64::consts::FRAC_PI_2.copysign(z_km);
            assert!((solution.latitude_rad - expected).abs() < 1.0E-12);
        }
    }

    #[test]
    fn known_sites() {
        // (lat [ddeg], lon [ddeg], alt [m])
        for (lat_ddeg, lon_ddeg, alt_m) in [
            (40.0, -105.25, 1655.0),
            (-33.8688, 151.2093, 50.0),
            (51.477, 0.0, 46.0),
            (78.22, 15.65, 500.0),
            (-77.85, 166.67, 24.0),
            (0.5, 45.0, 0.0),
        ] {
            let site = site_from_geodetic(lat_ddeg, lon_ddeg, alt_m);
            let solution = GeodeticSolution::solve(&site);

            assert!(solution.converged, "{} did not converge", site);
            assert!(solution.iterations < 10);

            let lat_err = (solution.latitude_ddeg() - lat_ddeg).abs();
            assert!(lat_err < 1.0E-5, "latitude error {}° @ {}", lat_err, site);

            let lon_err = (solution.longitude_ddeg() - lon_ddeg).abs();
            assert!(lon_err < 1.0E-9, "longitude error {}° @ {}", lon_err, site);

            // ellipsoids differ by a fraction of a meter
            let alt_err = (solution.height_km - alt_m * 1.0E-3).abs();
            assert!(alt_err < 2.0E-3, "altitude error {}km @ {}", alt_err, site);
        }
    }

    #[test]
    fn map3d_agreement() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let site = random_site(&mut rng);
            let solution = GeodeticSolution::solve(&site);

            let (lat, lon, alt) = ecef2geodetic(
                site.x_km * 1.0E3,
                site.y_km * 1.0E3,
                site.z_km * 1.0E3,
                RefEllipsoid::WGS84,
            );

            assert!(solution.converged);
            assert!((solution.latitude_ddeg() - lat.to_degrees()).abs() < 1.0E-5);
            assert!((solution.longitude_rad - lon).abs() < 1.0E-9);
            assert!((solution.height_km - alt * 1.0E-3).abs() < 2.0E-3);
        }
    }

    #[test]
    fn degree_accessors() {
        let site = EcefPosition::new(0.0, -Ellipsoid::EQUATORIAL_RADIUS_KM, 0.0);
        let solution = GeodeticSolution::solve(&site);
        assert_eq!(solution.latitude_ddeg(), 0.0);
        assert!((solution.longitude_ddeg() + 90.0).abs() < 1.0E-12);

        let solution = GeodeticSolution::solve(&EcefPosition::new(0.0, 0.0, 6356.752));
        assert!((solution.latitude_ddeg() - 90.0).abs() < 1.0E-12);
    }

    #[test]
    fn iteration_cap() {
        // degenerate site: nothing to converge to
        let solution = GeodeticSolution::solve(&EcefPosition::default());
        assert!(!solution.converged);
        assert_eq!(solution.iterations, 10);
        assert!(solution.latitude_rad.is_nan());
    }

    #[test]
    fn fixed_point() {
        let site = site_from_geodetic(45.0, 7.0, 300.0);
        let solution = GeodeticSolution::solve(&site);

        // one more update does not move the latitude
        let sin_lat = solution.latitude_rad.sin();
        let c_e = Ellipsoid::EQUATORIAL_RADIUS_KM
            / (1.0 - Ellipsoid::ECCENTRICITY_SQUARED * sin_lat.powi(2)).sqrt();
        let next = ((site.z_km + c_e * Ellipsoid::ECCENTRICITY_SQUARED * sin_lat)
            / site.planar_radius_km())
        .atan();

        assert!((next - solution.latitude_rad).abs() <= 1.0E-11);
        assert!((c_e - solution.curvature_radius_km).abs() < 1.0E-6);
    }
}
