mod tests {
    use embassy_time::{Duration, Instant};
    use prysma_light::{
        IdentifySequencer, PixelBuffer, Rgb, SequenceStep,
        identify::{IDENTIFY_SEQUENCE, IdentifyTick, MAX_SEQUENCE_STEPS},
    };

    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    fn blue_buffer() -> PixelBuffer<6> {
        let mut buffer = PixelBuffer::new(6);
        buffer.fill(BLUE);
        buffer
    }

    #[test]
    fn test_default_sequence() {
        assert_eq!(IDENTIFY_SEQUENCE.len(), 4);
        assert_eq!(IDENTIFY_SEQUENCE[0].color, GREEN);
        assert!(
            IDENTIFY_SEQUENCE
                .iter()
                .all(|step| step.duration == Duration::from_millis(500))
        );
    }

    #[test]
    fn test_idle_sequencer_leaves_buffer_alone() {
        let mut sequencer = IdentifySequencer::<6>::new();
        let mut buffer = blue_buffer();
        assert_eq!(sequencer.tick(Instant::from_millis(0), &mut buffer), IdentifyTick::Idle);
        assert!(buffer.pixels().iter().all(|pixel| *pixel == BLUE));
    }

    #[test]
    fn test_steps_hold_for_their_duration() {
        let mut sequencer = IdentifySequencer::<6>::new();
        let mut buffer = blue_buffer();
        sequencer.start(&buffer);

        assert_eq!(
            sequencer.tick(Instant::from_millis(0), &mut buffer),
            IdentifyTick::Step(GREEN)
        );
        assert_eq!(
            sequencer.tick(Instant::from_millis(499), &mut buffer),
            IdentifyTick::Holding
        );
        assert_eq!(
            sequencer.tick(Instant::from_millis(500), &mut buffer),
            IdentifyTick::Step(Rgb::default())
        );
        assert_eq!(sequencer.remaining(), 2);
    }

    #[test]
    fn test_restart_keeps_first_snapshot() {
        let mut sequencer = IdentifySequencer::<6>::new();
        let mut buffer = blue_buffer();
        sequencer.start(&buffer);
        sequencer.tick(Instant::from_millis(0), &mut buffer);

        // Buffer is green now; restarting must not capture it
        sequencer.start(&buffer);
        let mut now = 0;
        let outcome = loop {
            now += 100;
            let tick = sequencer.tick(Instant::from_millis(now), &mut buffer);
            if tick == IdentifyTick::Finished {
                break tick;
            }
            assert!(now < 10_000);
        };
        assert_eq!(outcome, IdentifyTick::Finished);
        assert!(!sequencer.is_running());
        assert!(buffer.pixels().iter().all(|pixel| *pixel == BLUE));
    }

    #[test]
    fn test_custom_sequence_is_truncated() {
        let steps = [SequenceStep::new(WHITE, Duration::from_millis(10)); 12];
        let mut sequencer = IdentifySequencer::<6>::new();
        let buffer = blue_buffer();
        sequencer.start_with(&steps, &buffer);
        assert_eq!(sequencer.remaining(), MAX_SEQUENCE_STEPS);
    }
}
