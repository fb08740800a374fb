mod tests {
    use dotmorph::{DigitFace, Duration, MorphError};

    fn face_800ms() -> DigitFace<6> {
        DigitFace::new(Duration::from_millis(800))
    }

    #[test]
    fn test_new_face_shows_zeros() {
        let face = face_800ms();
        assert!(!face.is_morphing());
        assert_eq!(face.slots(), 6);
        for slot in 0..6 {
            assert_eq!(face.digit(slot).current(), 0);
        }
    }

    #[test]
    fn test_set_value_morphs_only_changed_slots() {
        let mut face = face_800ms();
        face.force(&[1, 2, 5, 9, 5, 9]).unwrap();

        // One minute later: only the two last slots change
        face.set_value(&[1, 2, 5, 9, 6, 0]).unwrap();
        assert!(!face.digit(0).is_morphing());
        assert!(!face.digit(3).is_morphing());
        assert!(face.digit(4).is_morphing());
        assert!(face.digit(5).is_morphing());
        assert_eq!(face.digit(4).target(), 6);
        assert_eq!(face.digit(5).target(), 0);
    }

    #[test]
    fn test_update_fans_out_to_all_slots() {
        let mut face = face_800ms();
        face.set_value(&[2, 3, 5, 9, 0, 1]).unwrap();
        assert!(face.is_morphing());

        face.update(800).unwrap();
        assert!(!face.is_morphing());
        for (slot, expected) in [2u8, 3, 5, 9, 0, 1].into_iter().enumerate() {
            assert_eq!(face.digit(slot).current(), expected);
        }
    }

    #[test]
    fn test_invalid_value_leaves_face_unchanged() {
        let mut face = face_800ms();
        // Slot 0 would have morphed if validation were per-slot
        assert_eq!(
            face.set_value(&[5, 0, 0, 0, 0, 12]),
            Err(MorphError::InvalidDigit(12))
        );
        assert!(!face.is_morphing());
        assert_eq!(face.digit(0).current(), 0);
        assert_eq!(face.digit(0).target(), 0);

        assert_eq!(
            face.force(&[1, 1, 1, 1, 255, 1]),
            Err(MorphError::InvalidDigit(255))
        );
        assert_eq!(face.digit(0).current(), 0);
    }

    #[test]
    fn test_negative_delta_rejected() {
        let mut face = face_800ms();
        face.set_value(&[1, 0, 0, 0, 0, 0]).unwrap();
        face.update(100).unwrap();
        let progress = face.digit(0).progress();

        assert_eq!(face.update(-1), Err(MorphError::InvalidDuration(-1)));
        assert_eq!(face.digit(0).progress(), progress);
    }

    #[test]
    fn test_force_cancels_in_flight_morphs() {
        let mut face = face_800ms();
        face.set_value(&[9, 9, 9, 9, 9, 9]).unwrap();
        face.update(300).unwrap();

        face.force(&[0, 0, 0, 0, 0, 0]).unwrap();
        assert!(!face.is_morphing());
        for slot in 0..6 {
            assert_eq!(face.digit(slot).current(), 0);
            assert_eq!(face.digit(slot).progress(), 0.0);
        }
    }
}
