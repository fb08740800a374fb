mod tests {
    use dotmorph::{DEFAULT_MORPH_DURATION, Duration, MorphDigit, MorphError, Segment};

    fn digit_800ms() -> MorphDigit {
        MorphDigit::new(Duration::from_millis(800))
    }

    #[test]
    fn test_new_digit_is_idle_zero() {
        let digit = MorphDigit::new(DEFAULT_MORPH_DURATION);
        assert_eq!(digit.current(), 0);
        assert_eq!(digit.target(), 0);
        assert!(!digit.is_morphing());
        assert_eq!(digit.progress(), 0.0);
    }

    #[test]
    fn test_set_target_same_digit_is_noop() {
        let mut digit = digit_800ms();
        digit.set_target(0).unwrap();
        assert!(!digit.is_morphing());
        assert_eq!(digit.progress(), 0.0);
    }

    #[test]
    fn test_set_target_starts_morph() {
        let mut digit = digit_800ms();
        digit.set_target(7).unwrap();
        assert!(digit.is_morphing());
        assert_eq!(digit.current(), 0);
        assert_eq!(digit.target(), 7);
        assert_eq!(digit.progress(), 0.0);
    }

    #[test]
    fn test_update_completes_morph() {
        let mut digit = digit_800ms();
        digit.set_target(3).unwrap();

        digit.update(400).unwrap();
        assert!(digit.is_morphing());
        assert_eq!(digit.progress(), 0.5);
        assert_eq!(digit.current(), 0);

        digit.update(400).unwrap();
        assert!(!digit.is_morphing());
        assert_eq!(digit.current(), 3);
        assert_eq!(digit.target(), 3);
        assert_eq!(digit.progress(), 0.0);
    }

    #[test]
    fn test_completion_is_chunk_invariant() {
        // Same cumulative delta, different chunking, same final state
        let mut one_shot = digit_800ms();
        one_shot.set_target(9).unwrap();
        one_shot.update(800).unwrap();

        let mut chunked = digit_800ms();
        chunked.set_target(9).unwrap();
        for delta in [100, 250, 17, 433] {
            chunked.update(delta).unwrap();
        }

        assert!(!one_shot.is_morphing());
        assert!(!chunked.is_morphing());
        assert_eq!(one_shot.current(), 9);
        assert_eq!(chunked.current(), 9);
        assert_eq!(one_shot.progress(), 0.0);
        assert_eq!(chunked.progress(), 0.0);
    }

    #[test]
    fn test_huge_delta_converges_in_one_call() {
        let mut digit = digit_800ms();
        digit.set_target(5).unwrap();
        digit.update(1_000_000).unwrap();
        assert!(!digit.is_morphing());
        assert_eq!(digit.current(), 5);
    }

    #[test]
    fn test_update_zero_is_idempotent() {
        let mut digit = digit_800ms();
        digit.set_target(4).unwrap();
        digit.update(200).unwrap();

        let progress = digit.progress();
        for _ in 0..10 {
            digit.update(0).unwrap();
        }
        assert_eq!(digit.progress(), progress);
        assert!(digit.is_morphing());
        assert_eq!(digit.current(), 0);
        assert_eq!(digit.target(), 4);
    }

    #[test]
    fn test_update_when_idle_is_noop() {
        let mut digit = digit_800ms();
        digit.update(500).unwrap();
        assert_eq!(digit.current(), 0);
        assert!(!digit.is_morphing());
        assert_eq!(digit.progress(), 0.0);
    }

    #[test]
    fn test_retarget_mid_flight_restarts_timer() {
        let mut digit = digit_800ms();
        digit.set_target(1).unwrap();
        digit.update(400).unwrap();

        // Retarget halfway through: current stays, timer restarts
        digit.set_target(2).unwrap();
        assert!(digit.is_morphing());
        assert_eq!(digit.current(), 0);
        assert_eq!(digit.target(), 2);
        assert_eq!(digit.progress(), 0.0);

        digit.update(800).unwrap();
        assert_eq!(digit.current(), 2);
    }

    #[test]
    fn test_set_current_cancels_morph() {
        let mut digit = digit_800ms();
        digit.set_target(6).unwrap();
        digit.update(300).unwrap();

        digit.set_current(8).unwrap();
        assert!(!digit.is_morphing());
        assert_eq!(digit.current(), 8);
        assert_eq!(digit.target(), 8);
        assert_eq!(digit.progress(), 0.0);
        assert_eq!(digit.segment_brightness(Segment::G), 255);
    }

    #[test]
    fn test_invalid_digit_rejected_without_mutation() {
        let mut digit = digit_800ms();
        digit.set_target(4).unwrap();
        digit.update(200).unwrap();
        let progress = digit.progress();

        assert_eq!(digit.set_target(10), Err(MorphError::InvalidDigit(10)));
        assert_eq!(digit.set_current(255), Err(MorphError::InvalidDigit(255)));

        assert!(digit.is_morphing());
        assert_eq!(digit.current(), 0);
        assert_eq!(digit.target(), 4);
        assert_eq!(digit.progress(), progress);
    }

    #[test]
    fn test_negative_delta_rejected_without_mutation() {
        let mut digit = digit_800ms();
        digit.set_target(4).unwrap();
        digit.update(200).unwrap();
        let progress = digit.progress();

        assert_eq!(digit.update(-5), Err(MorphError::InvalidDuration(-5)));

        assert!(digit.is_morphing());
        assert_eq!(digit.progress(), progress);
        assert_eq!(digit.target(), 4);
    }

    #[test]
    fn test_zero_duration_morph_completes_on_first_update() {
        let mut digit = MorphDigit::new(Duration::from_millis(0));
        digit.set_target(7).unwrap();
        assert!(digit.is_morphing());
        assert_eq!(digit.progress(), 1.0);

        digit.update(0).unwrap();
        assert!(!digit.is_morphing());
        assert_eq!(digit.current(), 7);
    }

    #[test]
    fn test_color_follows_current_digit() {
        let mut digit = digit_800ms();
        let zero_color = digit.color();
        digit.set_target(9).unwrap();
        digit.update(400).unwrap();

        // Color never interpolates; it tracks the current numeral
        assert_eq!(digit.color(), zero_color);

        digit.update(400).unwrap();
        assert_eq!(digit.color(), dotmorph::DIGIT_COLORS[9]);
    }
}
