mod tests {
    use fibonacci_reel::random::{Rand16, RandomSource};

    #[test]
    fn test_lcg_sequence() {
        let mut rng = Rand16::new(0);
        assert_eq!(rng.random16(), 13849);
        assert_eq!(rng.random16(), 3222);
    }

    #[test]
    fn test_random8_folds_both_bytes() {
        // 13849 = 0x3619, 0x19 + 0x36
        let mut rng = Rand16::new(0);
        assert_eq!(rng.random8(), 79);
    }

    #[test]
    fn test_add_entropy() {
        let mut rng = Rand16::new(10);
        rng.add_entropy(5);
        assert_eq!(rng.seed(), 15);
        rng.add_entropy(u16::MAX);
        assert_eq!(rng.seed(), 14);
    }

    #[test]
    fn test_ranges() {
        let mut rng = Rand16::default();
        for _ in 0..1000 {
            assert!(rng.random8_below(7) < 7);
            assert!((160..255).contains(&rng.random8_between(160, 255)));
            assert!(rng.random16_below(64) < 64);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Rand16::new(42);
        let mut b = Rand16::new(42);
        for _ in 0..100 {
            assert_eq!(a.random16(), b.random16());
        }
    }
}
