mod tests {
    use fibonacci_reel::math8::{
        addmod8, beat8, beat16, beatsin8, beatsin16, beatsin88, blend8, qadd8, qsub8, scale8,
        scale16, sin8, sin16,
    };

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale16() {
        assert_eq!(scale16(65535, 65535), 65535);
        assert_eq!(scale16(32768, 64), 32);
        assert_eq!(scale16(1000, 0), 0);
    }

    #[test]
    fn test_saturating_ops() {
        assert_eq!(qsub8(5, 10), 0);
        assert_eq!(qsub8(10, 5), 5);
        assert_eq!(qadd8(250, 10), 255);
        assert_eq!(qadd8(100, 10), 110);
    }

    #[test]
    fn test_addmod8() {
        assert_eq!(addmod8(254, 3, 8), 1);
        assert_eq!(addmod8(7, 1, 8), 0);
        assert_eq!(addmod8(3, 1, 8), 4);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_sin8() {
        assert_eq!(sin8(0), 128);
        assert_eq!(sin8(64), 255);
        assert_eq!(sin8(128), 128);
        assert_eq!(sin8(192), 1);
    }

    #[test]
    fn test_sin16() {
        assert_eq!(sin16(0), 0);
        assert_eq!(sin16(16384), 32645);
        assert_eq!(sin16(32768), 0);
        assert_eq!(sin16(49152), -32645);
    }

    #[test]
    fn test_beat() {
        assert_eq!(beat16(60, 0), 0);
        // Half a beat at 60 BPM
        assert_eq!(beat16(60, 500), 32812);
        assert_eq!(beat8(60, 500), 128);
    }

    #[test]
    fn test_beatsin_start_at_midpoint() {
        assert_eq!(beatsin8(60, 64, 255, 0), 160);
        assert_eq!(beatsin16(30, 0, 64, 0), 32);
    }

    #[test]
    fn test_beatsin88_stays_in_range() {
        for now in (0..200_000u32).step_by(37) {
            let value = beatsin88(341, 96, 224, now);
            assert!((96..=224).contains(&value), "{value} at {now}");
        }
    }

    #[test]
    fn test_beat_wraps_with_clock() {
        // Large clocks overflow the intermediate product without panicking
        let _ = beat16(255, u32::MAX);
        let _ = beatsin16(255, 0, 64, u32::MAX);
    }
}
