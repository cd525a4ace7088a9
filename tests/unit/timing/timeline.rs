use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn three_words_at_two_seconds() {
    let t = Timeline::new(3, 2.0).unwrap();
    assert_eq!(t.total_duration_s, 6.0);
    assert!(approx(t.visible_percentage, 100.0 / 3.0));
    assert!(approx(t.fade_percentage, 20.0 / 3.0));
    assert!(approx(t.opaque_until_percentage(), 80.0 / 3.0));
    assert_eq!(t.delays_s, vec![0.0, 2.0, 4.0]);
    assert_eq!(t.word_count(), 3);
}

#[test]
fn single_word_still_fades_each_cycle() {
    let t = Timeline::new(1, 2.0).unwrap();
    assert_eq!(t.visible_percentage, 100.0);
    assert_eq!(t.fade_percentage, 20.0);
    assert_eq!(t.opaque_until_percentage(), 80.0);
    assert_eq!(t.total_duration_s, 2.0);
    assert_eq!(t.delays_s, vec![0.0]);
}

#[test]
fn fade_is_a_fifth_of_the_slot() {
    for n in 1..=12usize {
        let t = Timeline::new(n, 1.5).unwrap();
        assert!(approx(t.visible_percentage, 100.0 / n as f64));
        assert!(approx(t.fade_percentage, 0.2 * t.visible_percentage));
        for (i, d) in t.delays_s.iter().enumerate() {
            assert!(approx(*d, i as f64 * 1.5));
        }
    }
}

#[test]
fn zero_words_is_invalid_input() {
    assert!(matches!(
        Timeline::new(0, 2.0),
        Err(WordcycleError::InvalidInput(_))
    ));
}

#[test]
fn non_positive_or_non_finite_duration_is_rejected() {
    for d in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            Timeline::new(2, d),
            Err(WordcycleError::InvalidConfig(_))
        ));
    }
}

#[test]
fn delay_lookup_is_bounds_checked() {
    let t = Timeline::new(2, 3.0).unwrap();
    assert_eq!(t.delay_s(1), Some(3.0));
    assert_eq!(t.delay_s(2), None);
}
