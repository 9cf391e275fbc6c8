mod tests {
    use fibonacci_reel::color::{BLACK, Hsv, Rgb, hsv2rgb};
    use fibonacci_reel::layout::FibonacciLayout;
    use fibonacci_reel::palette::{
        Palette16, PaletteBlend,
        presets::{self, GRADIENTS},
    };
    use fibonacci_reel::pattern::{
        Bpm, ColorTwinkles, ColorWaves, Confetti, FireConfig, Juggle, Pattern, PatternId,
        PatternLibrary, PixelOrder, Rainbow, RainbowVariant, RenderContext, Sinelon,
        TwinkleField, TwinkleFox,
    };
    use fibonacci_reel::{Instant, Rand16, RandomSource, WaveClock};

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

    fn context<'a, R: RandomSource, const N: usize>(
        now_ms: u32,
        hue: u8,
        palette: &'a Palette16,
        layout: &'a FibonacciLayout<N>,
        rng: &'a mut R,
    ) -> RenderContext<'a, R, N> {
        RenderContext {
            now_ms,
            hue,
            speed: 30,
            fire: FireConfig::default(),
            palette,
            base_palette: &presets::RAINBOW,
            layout,
            rng,
        }
    }

    #[test]
    fn test_pattern_ids() {
        assert_eq!(PatternId::COUNT, 39);
        assert_eq!(PatternId::from_raw(0), Some(PatternId::PrideFibonacci));
        assert_eq!(PatternId::from_raw(38), Some(PatternId::Water));
        assert_eq!(PatternId::from_raw(39), None);
        assert_eq!(PatternId::default(), PatternId::PrideFibonacci);

        for (raw, id) in PatternId::ALL.iter().enumerate() {
            assert_eq!(usize::from(id.raw()), raw);
            assert_eq!(PatternId::parse_from_str(id.as_str()), Some(*id));
        }
        assert_eq!(
            PatternId::parse_from_str("snow2_twinkles"),
            Some(PatternId::Snow2Twinkles)
        );
        assert_eq!(PatternId::parse_from_str("strobe"), None);
    }

    fn render_every_pattern<const N: usize>() {
        let layout = FibonacciLayout::<N>::new();
        let mut library = PatternLibrary::<N>::new(Instant::from_millis(0));
        let mut rng = Rand16::new(3);
        let palette = GRADIENTS[0].palette;

        for id in PatternId::ALL {
            let mut leds = [BLACK; N];
            for frame in 0..120u32 {
                #[allow(clippy::cast_possible_truncation)]
                let mut ctx = context(frame * 313, frame as u8, &palette, &layout, &mut rng);
                library.render(id, &mut ctx, &mut leds);
            }
        }
    }

    #[test]
    fn test_every_pattern_renders() {
        render_every_pattern::<64>();
        render_every_pattern::<1>();
        render_every_pattern::<9>();
    }

    #[test]
    fn test_waves_light_the_board() {
        let layout = FibonacciLayout::<64>::new();
        let mut library = PatternLibrary::<64>::new(Instant::from_millis(0));
        let mut rng = Rand16::default();
        let palette = GRADIENTS[1].palette;

        for id in [PatternId::PrideFibonacci, PatternId::ColorWavesFibonacci] {
            let mut leds = [BLACK; 64];
            for frame in 0..20 {
                let mut ctx = context(1000 + frame * 16, 0, &palette, &layout, &mut rng);
                library.render(id, &mut ctx, &mut leds);
            }
            let lit = leds.iter().filter(|led| **led != BLACK).count();
            assert!(lit > 32, "{}: {lit} lit", id.as_str());
        }
    }

    #[test]
    fn test_natural_order_waves() {
        let layout = FibonacciLayout::<16>::new();
        let mut clock = WaveClock::new();
        let mut rng = Rand16::default();
        let palette = GRADIENTS[2].palette;
        let mut leds = [BLACK; 16];

        let mut ctx = context(500, 0, &palette, &layout, &mut rng);
        ColorWaves::new(&mut clock, PixelOrder::Natural).render(&mut ctx, &mut leds);
        assert_eq!(clock.pseudotime(), pseudotime_after_first_frame(500));
    }

    fn pseudotime_after_first_frame(now_ms: u32) -> u16 {
        use fibonacci_reel::math8::beatsin88;
        #[allow(clippy::cast_possible_truncation)]
        let elapsed = now_ms as u16;
        elapsed.wrapping_mul(beatsin88(147, 23, 60, now_ms))
    }

    #[test]
    fn test_rainbow_solid() {
        let layout = FibonacciLayout::<8>::new();
        let mut rng = Rand16::default();
        let mut leds = [BLACK; 8];
        let mut ctx = context(0, 96, &presets::RAINBOW, &layout, &mut rng);

        Rainbow::new(RainbowVariant::Solid).render(&mut ctx, &mut leds);
        let expected = hsv2rgb(Hsv {
            hue: 96,
            sat: 255,
            val: 255,
        });
        assert!(leds.iter().all(|led| *led == expected));
    }

    #[test]
    fn test_rainbow_gradient_starts_at_hue() {
        let layout = FibonacciLayout::<8>::new();
        let mut rng = Rand16::default();
        let mut leds = [BLACK; 8];
        let mut ctx = context(0, 10, &presets::RAINBOW, &layout, &mut rng);

        Rainbow::new(RainbowVariant::Gradient).render(&mut ctx, &mut leds);
        let first = hsv2rgb(Hsv {
            hue: 10,
            sat: 240,
            val: 255,
        });
        assert_eq!(leds[0], first);
        assert_ne!(leds[0], leds[4]);
    }

    #[test]
    fn test_x_palette_sweep() {
        let layout = FibonacciLayout::<64>::new();
        let mut library = PatternLibrary::<64>::new(Instant::from_millis(0));
        let mut rng = Rand16::default();
        let mut leds = [BLACK; 64];
        let palette = GRADIENTS[0].palette;

        let mut ctx = context(0, 0, &palette, &layout, &mut rng);
        library.render(PatternId::XPalette, &mut ctx, &mut leds);
        for (i, led) in leds.iter().enumerate() {
            let expected = presets::RAINBOW.color_at(0u8.wrapping_sub(layout.x()[i]));
            assert_eq!(*led, expected);
        }

        let mut ctx = context(0, 0, &palette, &layout, &mut rng);
        library.render(PatternId::RadiusGradientPalette, &mut ctx, &mut leds);
        for (i, led) in leds.iter().enumerate() {
            let expected = palette.color_at(0u8.wrapping_sub(layout.radius()[i]));
            assert_eq!(*led, expected);
        }
    }

    #[test]
    fn test_bpm_stripes() {
        let layout = FibonacciLayout::<4>::new();
        let mut rng = Rand16::default();
        let mut leds = [BLACK; 4];
        let mut ctx = context(0, 0, &presets::RAINBOW, &layout, &mut rng);

        Bpm.render(&mut ctx, &mut leds);
        assert_eq!(
            leds[0],
            presets::RAINBOW.color(0, 160, PaletteBlend::Linear)
        );
        assert_eq!(
            leds[1],
            presets::RAINBOW.color(2, 170, PaletteBlend::Linear)
        );
    }

    #[test]
    fn test_sinelon_fills_gap() {
        let layout = FibonacciLayout::<64>::new();
        let mut rng = Rand16::default();
        let mut leds = [BLACK; 64];
        let mut ctx = context(0, 0, &presets::RAINBOW, &layout, &mut rng);

        Sinelon::new().render(&mut ctx, &mut leds);
        let color = presets::RAINBOW.color_at(0);
        assert!(leds[..=32].iter().all(|led| *led == color));
        assert!(leds[33..].iter().all(|led| *led == BLACK));
    }

    #[test]
    fn test_confetti_adds_one_speck() {
        let layout = FibonacciLayout::<32>::new();
        let mut rng = Rand16::new(99);
        let mut leds = [BLACK; 32];
        let mut ctx = context(0, 0, &presets::RAINBOW, &layout, &mut rng);

        Confetti.render(&mut ctx, &mut leds);
        assert_eq!(leds.iter().filter(|led| **led != BLACK).count(), 1);
    }

    #[test]
    fn test_juggle_program() {
        let layout = FibonacciLayout::<32>::new();
        let mut rng = Rand16::default();
        let mut leds = [BLACK; 32];
        let mut juggle = Juggle::new();

        for (now_ms, dots) in [(0, 1), (9_999, 1), (10_000, 4), (20_000, 8), (30_000, 1)] {
            let mut ctx = context(now_ms, 0, &presets::RAINBOW, &layout, &mut rng);
            juggle.render(&mut ctx, &mut leds);
            assert_eq!(juggle.dots(), dots);
        }
        assert!(leds.iter().any(|led| *led != BLACK));
    }

    #[test]
    fn test_fire_and_water_share_heat() {
        let layout = FibonacciLayout::<16>::new();
        let mut library = PatternLibrary::<16>::new(Instant::from_millis(0));
        let mut rng = Zero;
        let mut leds = [BLACK; 16];
        let palette = GRADIENTS[0].palette;

        let mut ctx = context(0, 0, &palette, &layout, &mut rng);
        library.render(PatternId::Fire, &mut ctx, &mut leds);
        assert_eq!(library.heat().cells()[0], 160);
        assert_eq!(leds[0], presets::HEAT.color_at(119));

        let mut ctx = context(8, 0, &palette, &layout, &mut rng);
        library.render(PatternId::Water, &mut ctx, &mut leds);
        assert_eq!(library.heat().cells()[0], 255);
        assert_eq!(leds[15], presets::ICE.color_at(190));
        assert_eq!(leds[0], presets::ICE.color_at(0));
    }

    #[test]
    fn test_twinkles_seed_and_brighten() {
        let layout = FibonacciLayout::<16>::new();
        let mut library = PatternLibrary::<16>::new(Instant::from_millis(0));
        let mut rng = Rand16::new(5);
        let mut leds = [BLACK; 16];
        let palette = GRADIENTS[0].palette;

        // Before the first step period nothing happens
        let mut ctx = context(10, 0, &palette, &layout, &mut rng);
        library.render(PatternId::IncandescentTwinkles, &mut ctx, &mut leds);
        assert!(leds.iter().all(|led| *led == BLACK));

        let mut ctx = context(30, 0, &palette, &layout, &mut rng);
        library.render(PatternId::IncandescentTwinkles, &mut ctx, &mut leds);
        let lit: Vec<Rgb> = leds.iter().copied().filter(|led| *led != BLACK).collect();
        assert_eq!(lit.len(), 1);
        assert_eq!(
            lit[0],
            presets::INCANDESCENT.color(0, 64, PaletteBlend::Snap)
        );
    }

    #[test]
    fn test_twinkle_stops_brightening_at_saturation() {
        let layout = FibonacciLayout::<8>::new();
        let mut field = TwinkleField::<8>::new(Instant::from_millis(0));
        let mut rng = Zero;
        let mut leds = [BLACK; 8];

        let mut ctx = context(30, 0, &presets::RAINBOW, &layout, &mut rng);
        ColorTwinkles::new(&mut field, &presets::INCANDESCENT).render(&mut ctx, &mut leds);
        assert_eq!(
            leds[0],
            presets::INCANDESCENT.color(0, 64, PaletteBlend::Snap)
        );
        assert!(field.is_brightening(0));
        assert!(!field.is_brightening(1));

        let mut step = 2;
        while field.is_brightening(0) && step < 100 {
            let mut ctx = context(step * 30, 0, &presets::RAINBOW, &layout, &mut rng);
            ColorTwinkles::new(&mut field, &presets::INCANDESCENT).render(&mut ctx, &mut leds);
            step += 1;
        }
        assert!(!field.is_brightening(0));
        assert_eq!(leds[0].r, 255);
        assert!(leds[1..].iter().all(|led| *led == BLACK));
    }

    #[test]
    fn test_twinkle_fox_is_stateless() {
        let layout = FibonacciLayout::<32>::new();
        let mut rng = Rand16::new(77);
        let mut a = [BLACK; 32];
        let mut b = [BLACK; 32];

        let mut ctx = context(123_456, 0, &presets::RAINBOW, &layout, &mut rng);
        TwinkleFox::new(&presets::RETRO_C9).render(&mut ctx, &mut a);
        let mut ctx = context(123_456, 0, &presets::RAINBOW, &layout, &mut rng);
        TwinkleFox::new(&presets::RETRO_C9).render(&mut ctx, &mut b);

        assert_eq!(a, b);
        assert_eq!(rng.seed(), 77);
    }
}
