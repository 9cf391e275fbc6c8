mod tests {
    use fibonacci_reel::color::{
        BLACK, Hsv, Rgb, WHITE, add_colors, blend_colors, fade_to_black_by, fill_gradient_rgb,
        fill_rainbow, hsv2rgb, nblend, rgb_from_u32,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );
    }

    #[test]
    fn test_nblend_extremes() {
        let mut pixel = RED;
        nblend(&mut pixel, BLUE, 0);
        assert_eq!(pixel, RED);
        nblend(&mut pixel, BLUE, 255);
        assert_eq!(pixel, BLUE);
    }

    #[test]
    fn test_nblend_scales_both_sides() {
        let mut pixel = Rgb {
            r: 37,
            g: 100,
            b: 0,
        };
        let overlay = Rgb {
            r: 200,
            g: 200,
            b: 255,
        };
        nblend(&mut pixel, overlay, 128);
        assert_eq!(
            pixel,
            Rgb {
                r: 118,
                g: 150,
                b: 128,
            }
        );
    }

    #[test]
    fn test_add_colors_saturates() {
        let color = Rgb {
            r: 200,
            g: 10,
            b: 0,
        };
        assert_eq!(
            add_colors(color, color),
            Rgb {
                r: 255,
                g: 20,
                b: 0
            }
        );
        assert_eq!(add_colors(WHITE, WHITE), WHITE);
    }

    #[test]
    fn test_fade_to_black_by() {
        let mut leds = [WHITE; 3];
        fade_to_black_by(&mut leds, 10);
        assert_eq!(
            leds[0],
            Rgb {
                r: 245,
                g: 245,
                b: 245
            }
        );
        fade_to_black_by(&mut leds, 255);
        assert_eq!(leds, [BLACK; 3]);
    }

    #[test]
    fn test_fill_gradient_rgb() {
        let mut leds = [BLACK; 5];
        fill_gradient_rgb(&mut leds, 0, BLACK, 4, WHITE);
        let reds: Vec<u8> = leds.iter().map(|led| led.r).collect();
        assert_eq!(reds, [0, 63, 127, 191, 255]);
    }

    #[test]
    fn test_fill_gradient_rgb_steep_step() {
        let start = Rgb {
            r: 55,
            g: 0,
            b: 255,
        };
        let end = Rgb {
            r: 197,
            g: 3,
            b: 7,
        };
        let mut leds = [BLACK; 2];
        fill_gradient_rgb(&mut leds, 0, start, 1, end);
        assert_eq!(leds, [start, end]);
    }

    #[test]
    fn test_fill_gradient_rgb_ignores_out_of_range() {
        let mut leds = [BLACK; 3];
        fill_gradient_rgb(&mut leds, 4, WHITE, 1, BLACK);
        assert_eq!(leds[0], BLACK);
        assert_eq!(leds[1], BLACK);
        assert_ne!(leds[2], BLACK);
    }

    #[test]
    fn test_fill_rainbow() {
        let mut leds = [BLACK; 4];
        fill_rainbow(&mut leds, 10, 20);
        assert_eq!(
            leds[0],
            hsv2rgb(Hsv {
                hue: 10,
                sat: 240,
                val: 255
            })
        );
        assert_eq!(
            leds[3],
            hsv2rgb(Hsv {
                hue: 70,
                sat: 240,
                val: 255
            })
        );
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(
            rgb_from_u32(0xFFB0F0),
            Rgb {
                r: 0xFF,
                g: 0xB0,
                b: 0xF0
            }
        );
    }
}
