mod tests {
    use approx::assert_relative_eq;

    use crate::velocity::{Velocity, AU_DAY_TO_M_SEC};

    #[test]
    fn test_velocity_conversions() {
        let v = Velocity::from_au_per_day(1.0);
        assert_relative_eq!(v.to_meters_per_sec(), AU_DAY_TO_M_SEC);

        let kms = Velocity::from_km_per_sec(29.78);
        assert_relative_eq!(kms.to_meters_per_sec(), 29_780.0);

        // Round trip
        let round_trip =
            Velocity::from_meters_per_sec(Velocity::from_au_per_day(0.0172).to_meters_per_sec())
                .to_au_per_day();
        assert_relative_eq!(round_trip, 0.0172);
    }

    #[test]
    fn test_earth_orbital_speed() {
        // Horizons reports Earth's orbital velocity near 0.0172 AU/day,
        // which should come out around 29.8 km/s
        let earth = Velocity::from_au_per_day(0.0172);
        let kms = earth.to_km_per_sec();
        assert!(kms > 29.0 && kms < 30.5, "got {kms} km/s");
    }

    #[test]
    fn test_velocity_arithmetic_operations() {
        let a = Velocity::from_meters_per_sec(6.0);
        let b = Velocity::from_meters_per_sec(2.0);

        assert_relative_eq!((a + b).to_meters_per_sec(), 8.0);
        assert_relative_eq!((a - b).to_meters_per_sec(), 4.0);
        assert_relative_eq!((a * 2.0).to_meters_per_sec(), 12.0);
        assert_relative_eq!((a / 3.0).to_meters_per_sec(), 2.0);
        assert_relative_eq!(a / b, 3.0);
    }
}
