mod tests {
    use fibonacci_reel::pattern::{FireConfig, HeatField};
    use fibonacci_reel::{Rand16, RandomSource};

    /// Source that always draws zero
    struct Zero;

    impl RandomSource for Zero {
        fn random16(&mut self) -> u16 {
            0
        }

        fn random8(&mut self) -> u8 {
            0
        }

        fn add_entropy(&mut self, _entropy: u16) {}
    }

    #[test]
    fn test_spark_and_diffusion() {
        let mut field = HeatField::<16>::new();
        let config = FireConfig::default();

        field.step(config, &mut Zero);
        assert_eq!(field.cells()[0], 160);
        assert!(field.cells()[1..].iter().all(|c| *c == 0));

        field.step(config, &mut Zero);
        assert_eq!(&field.cells()[..4], &[255, 0, 106, 0]);
    }

    #[test]
    fn test_no_sparks_without_sparking() {
        let mut field = HeatField::<16>::new();
        let config = FireConfig {
            cooling: 49,
            sparking: 0,
        };
        let mut rng = Rand16::new(7);
        for _ in 0..50 {
            field.step(config, &mut rng);
        }
        assert!(field.cells().iter().all(|c| *c == 0));
    }

    #[test]
    fn test_same_seed_same_flames() {
        let config = FireConfig::default();
        let mut a = HeatField::<32>::new();
        let mut b = HeatField::<32>::new();
        let mut rng_a = Rand16::new(42);
        let mut rng_b = Rand16::new(42);

        for _ in 0..100 {
            a.step(config, &mut rng_a);
            b.step(config, &mut rng_b);
        }
        assert_eq!(a.cells(), b.cells());
        assert!(a.cells().iter().any(|c| *c > 0));
    }

    #[test]
    fn test_tiny_fields() {
        let config = FireConfig::default();
        let mut rng = Rand16::new(1);
        let mut one = HeatField::<1>::new();
        let mut two = HeatField::<2>::new();
        for _ in 0..100 {
            one.step(config, &mut rng);
            two.step(config, &mut rng);
        }
    }
}
