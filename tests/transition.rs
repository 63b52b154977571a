mod tests {
    use embassy_time::{Duration, Instant};
    use proptest::prelude::*;
    use prysma_light::{
        Rgb,
        transition::{
            BrightnessTransition, ColorTransition, StepPlan, StepTiming, TransitionPhase,
            TransitionTick,
        },
    };

    const TIMING: StepTiming = StepTiming::new(30, Duration::from_millis(500));

    #[test]
    fn test_step_plan_quotient_and_remainder() {
        let plan = StepPlan::new(0, 100, 30);
        assert_eq!(plan.amount, 3);
        assert_eq!(plan.remainder, 10);

        let plan = StepPlan::new(100, 0, 30);
        assert_eq!(plan.amount, -3);
        assert_eq!(plan.remainder, -10);
    }

    #[test]
    fn test_first_steps_spread_remainder() {
        let mut transition = BrightnessTransition::new(0, TIMING);
        transition.transition_to(100);
        assert_eq!(transition.phase(), TransitionPhase::Pending);
        assert_eq!(transition.tick(Instant::from_millis(0)), TransitionTick::Started);

        let mut values = [0u8; 5];
        for (i, value) in values.iter_mut().enumerate() {
            let now = Instant::from_millis(17 * (i as u64 + 1));
            assert_eq!(transition.tick(now), TransitionTick::Stepped);
            *value = transition.current();
        }
        assert_eq!(values, [3, 6, 10, 13, 16]);
    }

    #[test]
    fn test_step_waits_for_step_duration() {
        let mut transition = BrightnessTransition::new(0, TIMING);
        transition.transition_to(100);
        transition.tick(Instant::from_millis(0));
        assert_eq!(transition.tick(Instant::from_millis(10)), TransitionTick::Idle);
        assert_eq!(transition.current(), 0);
    }

    #[test]
    fn test_completes_on_target() {
        let mut transition = BrightnessTransition::new(0, TIMING);
        transition.transition_to(100);
        transition.tick(Instant::from_millis(0));

        let mut completed_at = None;
        for step in 1..=30u64 {
            if transition.tick(Instant::from_millis(17 * step)) == TransitionTick::Completed {
                completed_at = Some(step);
            }
        }
        assert_eq!(completed_at, Some(30));
        assert_eq!(transition.current(), 100);
        assert!(!transition.is_active());
    }

    #[test]
    fn test_zero_delta_completes_immediately() {
        let mut transition = BrightnessTransition::new(42, TIMING);
        transition.transition_to(42);
        assert_eq!(transition.tick(Instant::from_millis(0)), TransitionTick::Completed);
        assert!(!transition.is_active());
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut transition = ColorTransition::new(Rgb::new(0, 0, 0), TIMING);
        transition.transition_to(Rgb::new(255, 0, 0));
        transition.tick(Instant::from_millis(0));
        transition.tick(Instant::from_millis(17));
        let reached = transition.current();
        assert!(reached.r > 0);

        transition.transition_to(Rgb::new(0, 0, 255));
        transition.tick(Instant::from_millis(20));
        assert_eq!(transition.current(), reached);
        assert_eq!(transition.plan(0).amount, -i16::from(reached.r) / 30);
    }

    #[test]
    fn test_set_immediate_cancels() {
        let mut transition = ColorTransition::new(Rgb::new(0, 0, 0), TIMING);
        transition.transition_to(Rgb::new(255, 255, 255));
        transition.tick(Instant::from_millis(0));
        assert!(transition.is_running());

        transition.set_immediate(Rgb::new(1, 2, 3));
        assert_eq!(transition.phase(), TransitionPhase::Idle);
        assert_eq!(transition.current(), Rgb::new(1, 2, 3));
        assert_eq!(transition.tick(Instant::from_millis(100)), TransitionTick::Idle);
    }

    proptest! {
        #[test]
        fn prop_increments_sum_to_delta(start: u8, target: u8, steps in 1u16..=300) {
            let plan = StepPlan::new(start, target, steps);
            let total: i32 = (1..=steps).map(|i| i32::from(plan.increment(i, steps))).sum();
            prop_assert_eq!(total, i32::from(target) - i32::from(start));
        }

        #[test]
        fn prop_cumulative_tracks_linear_interpolation(
            start: u8,
            target: u8,
            steps in 1u16..=300,
        ) {
            let plan = StepPlan::new(start, target, steps);
            let delta = f64::from(i32::from(target) - i32::from(start));
            let mut cumulative = 0i32;
            for i in 1..=steps {
                cumulative += i32::from(plan.increment(i, steps));
                let ideal = delta * f64::from(i) / f64::from(steps);
                prop_assert!((f64::from(cumulative) - ideal).abs() <= 1.0);
            }
        }

        #[test]
        fn prop_color_transition_lands_on_target(
            from in any::<(u8, u8, u8)>(),
            to in any::<(u8, u8, u8)>(),
        ) {
            let target = Rgb::new(to.0, to.1, to.2);
            let timing = StepTiming::new(10, Duration::from_millis(100));
            let mut transition = ColorTransition::new(Rgb::new(from.0, from.1, from.2), timing);
            transition.transition_to(target);
            for ms in (0..=200u64).step_by(10) {
                transition.tick(Instant::from_millis(ms));
            }
            prop_assert_eq!(transition.current(), target);
            prop_assert!(!transition.is_active());
        }
    }
}
