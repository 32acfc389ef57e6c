mod tests {
    use approx::assert_relative_eq;

    use crate::length::{Length, AU_M};

    #[test]
    fn test_length_conversions() {
        // AU to meters
        let one_au = Length::from_au(1.0);
        assert_relative_eq!(one_au.to_meters(), AU_M);

        // Kilometers to meters
        let km = Length::from_km(1.0);
        assert_relative_eq!(km.to_meters(), 1_000.0);

        // Round trip
        let original = 5.203; // Jupiter's semi-major axis in AU
        let round_trip = Length::from_meters(Length::from_au(original).to_meters()).to_au();
        assert_relative_eq!(round_trip, original);
    }

    #[test]
    fn test_au_magnitude() {
        // An AU is about 150 million kilometers
        let one_au = Length::from_au(1.0);
        assert!(one_au.to_km() > 1.49e8 && one_au.to_km() < 1.50e8);
    }

    #[test]
    fn test_length_arithmetic_operations() {
        let a = Length::from_meters(3.0);
        let b = Length::from_meters(1.5);

        assert_relative_eq!((a + b).to_meters(), 4.5);
        assert_relative_eq!((a - b).to_meters(), 1.5);
        assert_relative_eq!((a * 2.0).to_meters(), 6.0);
        assert_relative_eq!((a / 2.0).to_meters(), 1.5);
        assert_relative_eq!((4.0 * b).to_meters(), 6.0);
        assert_relative_eq!(a / b, 2.0);
    }
}
