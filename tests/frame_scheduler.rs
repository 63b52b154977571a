mod tests {
    use embassy_time::{Duration, Instant};
    use prysma_light::{FrameScheduler, OutputDriver, Rgb, filter::BrightnessFilter};

    #[derive(Default)]
    struct CountingDriver {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for CountingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    fn scheduler(max_brightness: u8) -> FrameScheduler<CountingDriver, 4> {
        let mut filter = BrightnessFilter::new(max_brightness);
        filter.set_brightness(100);
        FrameScheduler::new(
            CountingDriver::default(),
            filter,
            Duration::from_millis(16),
        )
    }

    #[test]
    fn test_static_frames_are_not_pushed() {
        let mut scheduler = scheduler(255);
        let pixels = [Rgb::new(1, 2, 3); 4];
        assert!(!scheduler.tick(Instant::from_millis(0), false, &pixels));
        assert!(!scheduler.tick(Instant::from_millis(100), false, &pixels));
        assert_eq!(scheduler.pushes(), 0);
    }

    #[test]
    fn test_forced_push_ignores_frame_rate() {
        let mut scheduler = scheduler(255);
        let pixels = [Rgb::new(1, 2, 3); 4];
        scheduler.request_push();
        assert!(scheduler.tick(Instant::from_millis(0), false, &pixels));
        assert!(!scheduler.is_push_requested());

        scheduler.request_push();
        assert!(scheduler.tick(Instant::from_millis(1), false, &pixels));
        assert_eq!(scheduler.pushes(), 2);
    }

    #[test]
    fn test_animation_is_throttled() {
        let mut scheduler = scheduler(255);
        let pixels = [Rgb::new(1, 2, 3); 4];
        assert!(scheduler.tick(Instant::from_millis(0), true, &pixels));
        assert!(!scheduler.tick(Instant::from_millis(10), true, &pixels));
        assert!(scheduler.tick(Instant::from_millis(16), true, &pixels));
    }

    #[test]
    fn test_output_is_scaled_and_source_untouched() {
        let mut scheduler = scheduler(128);
        let pixels = [Rgb::new(255, 100, 0), Rgb::new(0, 0, 0)];
        scheduler.push(Instant::from_millis(0), &pixels);

        assert_eq!(
            scheduler.driver().frames[0],
            vec![Rgb::new(128, 50, 0), Rgb::new(0, 0, 0)]
        );
        assert_eq!(pixels[0], Rgb::new(255, 100, 0));
    }
}
