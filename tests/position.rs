mod tests {
    use strip_pixbuf::position::resolve;

    #[test]
    fn test_positive_positions_pass_through() {
        assert_eq!(resolve(1, 10), 1);
        assert_eq!(resolve(10, 10), 10);
        assert_eq!(resolve(15, 10), 15);
    }

    #[test]
    fn test_negative_positions_count_from_end() {
        assert_eq!(resolve(-1, 10), 10);
        assert_eq!(resolve(-10, 10), 1);
        assert_eq!(resolve(-2, 5), 4);
    }

    #[test]
    fn test_past_the_front_floors_at_zero() {
        assert_eq!(resolve(-11, 10), 0);
        assert_eq!(resolve(-100, 10), 0);
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(resolve(-1, 0), 0);
        assert_eq!(resolve(1, 0), 1);
    }
}
