mod tests {
    use approx::assert_relative_eq;

    use crate::time::{Time, SECONDS_PER_DAY, SECONDS_PER_YEAR};

    #[test]
    fn test_time_conversions() {
        let day = Time::from_days(1.0);
        assert_relative_eq!(day.to_seconds(), SECONDS_PER_DAY);

        let year = Time::from_years(1.0);
        assert_relative_eq!(year.to_seconds(), SECONDS_PER_YEAR);
        assert_relative_eq!(year.to_days(), 365.25);

        // Round trip
        let round_trip = Time::from_seconds(Time::from_days(88.0).to_seconds()).to_days();
        assert_relative_eq!(round_trip, 88.0);
    }

    #[test]
    fn test_zero() {
        assert_eq!(Time::zero().to_seconds(), 0.0);
    }

    #[test]
    fn test_time_arithmetic_operations() {
        let a = Time::from_seconds(10.0);
        let b = Time::from_seconds(4.0);

        assert_relative_eq!((a + b).to_seconds(), 14.0);
        assert_relative_eq!((a - b).to_seconds(), 6.0);
        assert_relative_eq!((a * 0.5).to_seconds(), 5.0);
        assert_relative_eq!((a / 2.0).to_seconds(), 5.0);
        assert_relative_eq!(a / b, 2.5);
    }
}
