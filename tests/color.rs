mod tests {
    use prysma_light::{
        Hsv, Rgb,
        color::{
            HEAT_COLORS, OCEAN_COLORS, add_saturating, blend_colors, color_from_palette,
            fade_to_black_by, fill_rainbow, fill_solid, hsv2rgb, rgb_from_u32,
        },
    };

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0x12_34_56), Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_palette_entries_are_exact() {
        assert_eq!(color_from_palette(&HEAT_COLORS, 0, 255), Rgb::new(0, 0, 0));
        assert_eq!(color_from_palette(&HEAT_COLORS, 16, 255), Rgb::new(0x33, 0, 0));
        assert_eq!(
            color_from_palette(&OCEAN_COLORS, 0, 255),
            Rgb::new(0x19, 0x19, 0x70)
        );
    }

    #[test]
    fn test_palette_blends_between_entries() {
        let color = color_from_palette(&HEAT_COLORS, 8, 255);
        assert!(color.r > 0 && color.r < 0x33);
        assert_eq!(color.g, 0);
    }

    #[test]
    fn test_palette_wraps_to_first_entry() {
        // Entry 15 is white, blended most of the way back toward black
        assert_eq!(color_from_palette(&HEAT_COLORS, 255, 255), Rgb::new(15, 15, 15));
    }

    #[test]
    fn test_palette_brightness() {
        assert_eq!(color_from_palette(&HEAT_COLORS, 16, 128), Rgb::new(25, 0, 0));
    }

    #[test]
    fn test_fade_to_black_by() {
        let mut leds = [Rgb::new(255, 128, 0); 4];
        fade_to_black_by(&mut leds, 255);
        assert!(leds.iter().all(|led| *led == Rgb::new(0, 0, 0)));

        let mut leds = [Rgb::new(200, 200, 200)];
        fade_to_black_by(&mut leds, 0);
        assert_eq!(leds[0], Rgb::new(200, 200, 200));
    }

    #[test]
    fn test_add_saturating() {
        assert_eq!(
            add_saturating(Rgb::new(200, 10, 0), Rgb::new(100, 10, 5)),
            Rgb::new(255, 20, 5)
        );
    }

    #[test]
    fn test_blend_colors() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(255, 255, 255);
        assert_eq!(blend_colors(a, b, 0), a);
        assert_eq!(blend_colors(a, b, 255), b);
    }

    #[test]
    fn test_fill_helpers() {
        let mut leds = [Rgb::default(); 8];
        fill_solid(&mut leds, Rgb::new(1, 2, 3));
        assert!(leds.iter().all(|led| *led == Rgb::new(1, 2, 3)));

        fill_rainbow(&mut leds, 0, 32);
        let red = hsv2rgb(Hsv {
            hue: 0,
            sat: 255,
            val: 255,
        });
        assert_eq!(leds[0], red);
        assert_ne!(leds[0], leds[4]);
    }
}
