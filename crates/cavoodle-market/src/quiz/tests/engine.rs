use super::common::*;
use crate::quiz::{PersonalityType, Trait};

#[test]
fn doorbell_barker_with_zoomies_is_a_champion() {
    let engine = engine();
    let submission = answers(&[(1, "A"), (3, "B")]);

    let scores = engine.accumulate(&submission);
    assert_eq!(scores.get(Trait::Bark), 5);
    assert_eq!(scores.get(Trait::Energy), 9);
    assert_eq!(scores.get(Trait::Zoomies), 5);
    assert_eq!(
        scores.iter().map(|(_, total)| total).sum::<u32>(),
        19,
        "no other trait should move"
    );
    assert_eq!(PersonalityType::ZoomiesChampion.type_score(&scores), 14);

    let result = engine.score_with_rng(&submission, &mut seeded_rng(7));
    assert_eq!(result.personality_type, PersonalityType::ZoomiesChampion);
    assert_eq!(result.personality_display_name, "Olympic Zoomies Champion");
    assert_eq!(result.energy_level, 2);
    assert_eq!(result.sass_rating, 1);
    assert!(result.custom_bio.contains("lightspeed"));
}

#[test]
fn empty_answers_fall_back_to_first_declared_type() {
    let engine = engine();

    let result = engine.score(&answers(&[]));

    assert_eq!(result.personality_type, PersonalityType::CouchThief);
    assert_eq!(result.energy_level, 1);
    assert_eq!(result.sass_rating, 1);
    assert!((3..=5).contains(&result.floof_factor));
}

#[test]
fn unknown_question_is_ignored() {
    let engine = engine();
    let baseline = engine.accumulate(&answers(&[(2, "A")]));
    let with_unknown = engine.accumulate(&answers(&[(2, "A"), (99, "A")]));

    assert_eq!(baseline, with_unknown);
}

#[test]
fn unknown_option_is_ignored() {
    let engine = engine();
    let baseline = engine.accumulate(&answers(&[(4, "A")]));
    let with_unknown = engine.accumulate(&answers(&[(4, "A"), (1, "Z")]));

    assert_eq!(baseline, with_unknown);
    assert!(engine.accumulate(&answers(&[(1, "a")])).is_empty());
}

#[test]
fn couch_and_treat_tie_goes_to_couch_thief() {
    let engine = engine();
    // couch 5, treat 5, sass 10: CouchThief and TreatNegotiator both reach 15
    let submission = answers(&[(1, "D"), (4, "A"), (7, "A")]);

    let result = engine.score_with_rng(&submission, &mut seeded_rng(1));

    assert_eq!(result.personality_type, PersonalityType::CouchThief);
    assert_eq!(result.sass_rating, 3);
}

#[test]
fn cupboard_raider_counts_garden_weight() {
    let engine = engine();
    let scores = engine.accumulate(&answers(&[(7, "D")]));

    assert_eq!(scores.get(Trait::Garden), 2);
    assert_eq!(PersonalityType::SockCollector.type_score(&scores), 2);
    // treat + sass beats couch + sass
    let result = engine.score_with_rng(&answers(&[(7, "D")]), &mut seeded_rng(3));
    assert_eq!(result.personality_type, PersonalityType::TreatNegotiator);
}

#[test]
fn ratings_saturate_at_five() {
    let engine = engine();
    // energy: 4 + 4 + 5 + 4 + 3 = 20, sass: 3
    let submission = answers(&[(1, "A"), (2, "B"), (3, "B"), (4, "D"), (7, "B")]);

    let result = engine.score_with_rng(&submission, &mut seeded_rng(11));

    assert_eq!(result.energy_level, 5);
    assert_eq!(result.sass_rating, 1);
    assert_eq!(result.personality_type, PersonalityType::ZoomiesChampion);
}

#[test]
fn classification_is_stable_across_calls() {
    let engine = engine();
    let submission = answers(&[(1, "B"), (3, "C"), (5, "D"), (6, "A")]);

    let first = engine.score(&submission);
    for _ in 0..25 {
        let again = engine.score(&submission);
        assert_eq!(again.personality_type, first.personality_type);
        assert_eq!(again.energy_level, first.energy_level);
        assert_eq!(again.sass_rating, first.sass_rating);
    }
    assert_eq!(first.personality_type, PersonalityType::VelcroVelvet);
}

#[test]
fn floof_is_drawn_from_three_to_five() {
    let engine = engine();
    let submission = answers(&[(2, "A")]);
    let mut rng = seeded_rng(42);

    let mut seen = [false; 6];
    for _ in 0..200 {
        let floof = engine.score_with_rng(&submission, &mut rng).floof_factor;
        assert!((3..=5).contains(&floof), "floof {floof} out of range");
        seen[floof as usize] = true;
    }
    assert!(seen[3] && seen[4] && seen[5], "every floof value should appear");
}
