mod tests {
    use embassy_time::Instant;
    use prysma_light::math8::{
        Prng, beat8, beat16, blend8, ease_in_out_quad, map_range, qadd8, qsub8, scale8,
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
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_saturating_ops() {
        assert_eq!(qadd8(200, 100), 255);
        assert_eq!(qsub8(10, 20), 0);
        assert_eq!(qadd8(1, 2), 3);
    }

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(0, 0, 100, 0, 255), 0);
        assert_eq!(map_range(50, 0, 100, 0, 255), 127);
        assert_eq!(map_range(100, 0, 100, 0, 255), 255);
        assert_eq!(map_range(100, 0, 100, 0, 200), 200);
        assert_eq!(map_range(7, 3, 3, 9, 200), 9);
    }

    #[test]
    fn test_ease_in_out_quad_endpoints() {
        assert_eq!(ease_in_out_quad(0), 0);
        assert_eq!(ease_in_out_quad(255), 255);
    }

    #[test]
    fn test_beat() {
        assert_eq!(beat16(60, Instant::from_millis(0)), 0);
        // Half a period at 60 BPM
        assert_eq!(beat8(60, Instant::from_millis(500)), 128);
        // Full period wraps back to zero
        assert_eq!(beat16(60, Instant::from_millis(1000)), 0);
    }

    #[test]
    fn test_prng_sequence() {
        let mut rng = Prng::new(0);
        assert_eq!(rng.random16(), 13849);
        assert_eq!(rng.random16(), 3222);
    }

    #[test]
    fn test_prng_bounds() {
        let mut rng = Prng::default();
        for _ in 0..1000 {
            assert!(rng.random8_below(10) < 10);
            assert!(rng.random16_below(300) < 300);
            let value = rng.random8_range(160, 255);
            assert!((160..255).contains(&value));
        }
        assert_eq!(rng.random8_range(5, 5), 5);
        assert_eq!(rng.random8_below(0), 0);
    }
}
