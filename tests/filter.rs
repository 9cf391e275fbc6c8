mod tests {
    use fibonacci_reel::color::{BLACK, Rgb, WHITE};
    use fibonacci_reel::filter::{
        ColorCorrection, OutputConfig, OutputFilters, PowerBudget, TYPICAL_SMD5050, UNCORRECTED,
        unscaled_milliwatts,
    };

    fn uncorrected() -> OutputConfig {
        OutputConfig {
            color_correction: UNCORRECTED,
            ..OutputConfig::default()
        }
    }

    #[test]
    fn test_power_model() {
        assert_eq!(unscaled_milliwatts(&[WHITE]), 214);
        assert_eq!(unscaled_milliwatts(&[BLACK; 10]), 50);
        assert_eq!(PowerBudget::default().max_milliwatts(), 10_000);
    }

    #[test]
    fn test_power_limit() {
        let budget = PowerBudget::default();
        let frame = [WHITE; 64];
        assert_eq!(budget.limit_brightness(&frame, 255), 186);
        assert_eq!(budget.limit_brightness(&frame, 128), 128);
        assert_eq!(budget.limit_brightness(&[WHITE; 4], 255), 255);
    }

    #[test]
    fn test_uncorrected_full_brightness_is_identity() {
        let filters = OutputFilters::new(&uncorrected());
        let frame = [
            Rgb { r: 1, g: 2, b: 3 },
            Rgb {
                r: 200,
                g: 100,
                b: 50,
            },
        ];
        let mut out = [BLACK; 2];
        assert_eq!(filters.apply(&frame, 255, &mut out), 255);
        assert_eq!(out, frame);
    }

    #[test]
    fn test_zero_brightness_is_black() {
        let filters = OutputFilters::new(&OutputConfig::default());
        let mut out = [WHITE; 3];
        assert_eq!(filters.apply(&[WHITE; 3], 0, &mut out), 0);
        assert_eq!(out, [BLACK; 3]);
    }

    #[test]
    fn test_typical_correction() {
        let filters = OutputFilters::new(&OutputConfig::default());
        let mut out = [BLACK; 1];
        filters.apply(&[WHITE], 255, &mut out);
        assert_eq!(
            out[0],
            Rgb {
                r: 255,
                g: 176,
                b: 240
            }
        );
    }

    #[test]
    fn test_source_frame_untouched() {
        let filters = OutputFilters::new(&OutputConfig::default());
        let frame = [WHITE; 64];
        let mut out = [BLACK; 64];
        let brightness = filters.apply(&frame, 255, &mut out);

        assert_eq!(brightness, 186);
        assert_eq!(frame, [WHITE; 64]);
        assert!(out[0].r < 255);
    }

    #[test]
    fn test_scaled_factors() {
        let correction = ColorCorrection::new(TYPICAL_SMD5050);
        assert!(correction.is_active());
        assert_eq!(
            correction.scaled(128).factors(),
            Rgb {
                r: 128,
                g: 88,
                b: 120
            }
        );
        assert!(!ColorCorrection::new(UNCORRECTED).scaled(255).is_active());
        assert_eq!(correction.scaled(0).factors(), BLACK);
    }
}
