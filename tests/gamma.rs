mod tests {
    use ledweave::gamma::{filter_pixel, install_lut, install_power_lut, lut_value, power_lut};

    #[test]
    fn test_power_lut_shape() {
        let table = power_lut(1.5);
        assert_eq!(table[0], 0);
        assert_eq!(table[255], 255);
        assert!(table[128] < 128);

        // a gamma above one stays at or below identity and never decreases
        for (index, &value) in table.iter().enumerate() {
            assert!(usize::from(value) <= index, "entry {index}");
        }
        for pair in table.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    // Install order matters, so the whole story lives in one test.
    #[test]
    fn test_gamma_lifecycle() {
        // identity until a table is installed, scaling truncates
        assert_eq!(lut_value(200), 200);
        assert_eq!(filter_pixel([10, 200, 255], 0.5), [5, 100, 127]);

        // the factor is clamped to [0, 1]
        assert_eq!(filter_pixel([10, 200, 250], 2.0), [10, 200, 250]);
        assert_eq!(filter_pixel([10, 200, 250], -1.0), [0, 0, 0]);

        assert!(install_power_lut(1.5));
        let expected = power_lut(1.5);
        assert_eq!(lut_value(128), expected[128]);
        assert_eq!(filter_pixel([255, 128, 0], 1.0), [255, expected[128], 0]);

        // scaling happens before the table lookup
        assert_eq!(filter_pixel([200, 0, 0], 0.5), [expected[100], 0, 0]);

        // a second install is refused and the first table kept
        static FLAT: [u8; 256] = [7; 256];
        assert!(!install_lut(&FLAT));
        assert_eq!(lut_value(128), expected[128]);
        assert_ne!(lut_value(128), 7);
    }
}
