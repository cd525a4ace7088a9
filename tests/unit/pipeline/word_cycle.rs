use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

#[test]
fn prepare_filters_then_prepends_sentinel() {
    let cycle = WordCycle::new(&AnimationOptions::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    let seq = cycle.prepare(&["master", "mists", "xyz"], &mut rng);
    assert_eq!(seq, vec!["mstr".to_string(), "master".to_string()]);
}

#[test]
fn render_rejects_words_without_the_letters() {
    let cycle = WordCycle::new(&AnimationOptions::default()).unwrap();
    let seq = vec!["mstr".to_string(), "xyz".to_string()];
    let err = cycle.render(&seq).unwrap_err();
    assert!(matches!(err, WordcycleError::InvalidInput(_)));
    assert!(err.to_string().contains("xyz"));
}

#[test]
fn render_of_empty_sequence_is_invalid_input() {
    let cycle = WordCycle::new(&AnimationOptions::default()).unwrap();
    assert!(matches!(
        cycle.render(&[]),
        Err(WordcycleError::InvalidInput(_))
    ));
}

#[test]
fn render_is_deterministic() {
    let cycle = WordCycle::new(&AnimationOptions::default().duration_per_word(1.5)).unwrap();
    let seq = vec![
        "mstr".to_string(),
        "mister".to_string(),
        "Mustard".to_string(),
    ];
    assert_eq!(cycle.render(&seq).unwrap(), cycle.render(&seq).unwrap());
}

#[test]
fn invalid_options_fail_before_rendering() {
    assert!(matches!(
        WordCycle::new(&AnimationOptions::default().width(-10.0)),
        Err(WordcycleError::InvalidConfig(_))
    ));

    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        generate_svg_with_rng(
            &["master"],
            &AnimationOptions::default().width(-10.0),
            &mut rng
        ),
        Err(WordcycleError::InvalidConfig(_))
    ));
}

#[test]
fn from_config_with_invalid_values_fails_on_render() {
    let config = AnimationConfig {
        height: f64::NAN,
        ..AnimationConfig::default()
    };
    let cycle = WordCycle::from_config(config);
    assert!(matches!(
        cycle.render(&["mstr".to_string()]),
        Err(WordcycleError::InvalidConfig(_))
    ));
}

#[test]
fn custom_letters_change_the_sentinel() {
    let cycle = WordCycle::new(&AnimationOptions::default())
        .unwrap()
        .with_letters(TargetLetters::new("CAT").unwrap());
    let mut rng = StdRng::seed_from_u64(1);
    let seq = cycle.prepare(&["scatter", "act"], &mut rng);
    assert_eq!(seq, vec!["cat".to_string(), "scatter".to_string()]);

    let svg = cycle.render(&seq).unwrap();
    assert!(svg.contains(r#"<tspan class="em">c</tspan><tspan class="em">a</tspan>"#));
}

#[test]
fn generate_uses_thread_rng_without_panicking() {
    let svg = generate_svg(&["master", "mister"], &AnimationOptions::default()).unwrap();
    assert_eq!(svg.matches("<text ").count(), 3);
}
