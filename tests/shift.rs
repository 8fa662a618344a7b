mod tests {
    use strip_pixbuf::{BufferError, PixelBuffer, PixelSource, ShiftMode};

    fn counting_buffer() -> PixelBuffer<8> {
        let mut buffer: PixelBuffer<8> = PixelBuffer::new(5, 1).unwrap();
        buffer.set(1, PixelSource::Raw(&[1, 2, 3, 4, 5])).unwrap();
        buffer
    }

    #[test]
    fn test_circular_right_shift_wraps() {
        let mut buffer = counting_buffer();
        buffer.shift(2, ShiftMode::Circular).unwrap();
        assert_eq!(buffer.dump(), &[4, 5, 1, 2, 3]);
    }

    #[test]
    fn test_logical_right_shift_zero_fills() {
        let mut buffer = counting_buffer();
        buffer.shift(2, ShiftMode::Logical).unwrap();
        assert_eq!(buffer.dump(), &[0, 0, 1, 2, 3]);
    }

    #[test]
    fn test_circular_left_shift_wraps() {
        let mut buffer = counting_buffer();
        buffer.shift(-2, ShiftMode::Circular).unwrap();
        assert_eq!(buffer.dump(), &[3, 4, 5, 1, 2]);
    }

    #[test]
    fn test_logical_left_shift_zero_fills() {
        let mut buffer = counting_buffer();
        buffer.shift(-2, ShiftMode::Logical).unwrap();
        assert_eq!(buffer.dump(), &[3, 4, 5, 0, 0]);
    }

    #[test]
    fn test_zero_shift_is_noop() {
        let mut buffer = counting_buffer();
        buffer.shift(0, ShiftMode::Logical).unwrap();
        buffer.shift(0, ShiftMode::Circular).unwrap();
        assert_eq!(buffer.dump(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_shift_window_leaves_outside_untouched() {
        let mut buffer = counting_buffer();
        buffer.shift_range(1, ShiftMode::Circular, 2, 4).unwrap();
        assert_eq!(buffer.dump(), &[1, 4, 2, 3, 5]);

        let mut buffer = counting_buffer();
        buffer.shift_range(1, ShiftMode::Logical, 2, 4).unwrap();
        assert_eq!(buffer.dump(), &[1, 0, 2, 3, 5]);
    }

    #[test]
    fn test_shift_window_accepts_end_relative_positions() {
        // [2, -2] resolves to pixels 2..=4 on a 5-pixel strip.
        let mut buffer = counting_buffer();
        buffer.shift_range(1, ShiftMode::Circular, 2, -2).unwrap();
        assert_eq!(buffer.dump(), &[1, 4, 2, 3, 5]);
    }

    #[test]
    fn test_shift_clamps_window_to_strip() {
        let mut buffer = counting_buffer();
        buffer.shift_range(2, ShiftMode::Circular, -100, 100).unwrap();
        assert_eq!(buffer.dump(), &[4, 5, 1, 2, 3]);
    }

    #[test]
    fn test_empty_window_is_noop() {
        let mut buffer = counting_buffer();
        buffer.shift_range(1, ShiftMode::Logical, 4, 2).unwrap();
        assert_eq!(buffer.dump(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_shift_rejects_amount_at_window_size() {
        let mut buffer = counting_buffer();
        assert_eq!(
            buffer.shift(5, ShiftMode::Circular).unwrap_err(),
            BufferError::InvalidArgument
        );
        assert_eq!(
            buffer.shift(-5, ShiftMode::Logical).unwrap_err(),
            BufferError::InvalidArgument
        );
        assert_eq!(buffer.dump(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_circular_shift_preserves_power() {
        let mut buffer = counting_buffer();
        let before = buffer.power();
        buffer.shift(3, ShiftMode::Circular).unwrap();
        assert_eq!(buffer.power(), before);
    }

    #[test]
    fn test_logical_shift_drops_evicted_power() {
        let mut buffer = counting_buffer();
        let before = buffer.power();
        // Right shift by 2 evicts the last two pixels (4 and 5).
        buffer.shift(2, ShiftMode::Logical).unwrap();
        assert_eq!(buffer.power(), before - 9);
    }

    #[test]
    fn test_shift_moves_whole_pixels() {
        let mut buffer: PixelBuffer<16> = PixelBuffer::new(3, 3).unwrap();
        buffer
            .set(1, PixelSource::Raw(&[1, 1, 1, 2, 2, 2, 3, 3, 3]))
            .unwrap();
        buffer.shift(1, ShiftMode::Circular).unwrap();
        assert_eq!(buffer.dump(), &[3, 3, 3, 1, 1, 1, 2, 2, 2]);
    }
}
