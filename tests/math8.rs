mod tests {
    use waste_signal::math8::{blend8, breathe8, progress8, scale8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_progress8() {
        assert_eq!(progress8(0, 100), 0);
        assert_eq!(progress8(50, 100), 127);
        assert_eq!(progress8(100, 100), 255);
        assert_eq!(progress8(3, 0), 255);
    }

    #[test]
    fn test_breathe8_stays_between_floor_and_full() {
        assert_eq!(breathe8(0, 50, 51), 51);
        assert_eq!(breathe8(50, 50, 51), 255);

        let mut previous = 0;
        for step in 0..=50 {
            let level = breathe8(step, 50, 51);
            assert!(level >= 51);
            assert!(level >= previous, "curve must rise monotonically");
            previous = level;
        }
    }
}
