use super::common::*;
use crate::quiz::repository::{ListingId, RepositoryError};
use crate::quiz::{PersonalityType, QuizServiceError};

#[test]
fn submit_stores_result_with_raw_answers() {
    let repository = MemoryProfiles::default();
    let service = service(repository.clone());
    let listing = ListingId("listing-biscuit".to_string());
    let submission = answers(&[(5, "A"), (6, "A"), (99, "Q")]);

    let record = service
        .submit(listing.clone(), submission.clone())
        .expect("submission stored");

    assert_eq!(record.listing_id, listing);
    assert_eq!(record.answers, submission);
    assert_eq!(record.result.personality_type, PersonalityType::DramaQueen);
    assert_eq!(repository.stored(), 1);

    let fetched = service.profile(&listing).expect("profile exists");
    assert_eq!(fetched, record);
}

#[test]
fn resubmission_replaces_previous_profile() {
    let repository = MemoryProfiles::default();
    let service = service(repository.clone());
    let listing = ListingId("listing-waffles".to_string());

    service
        .submit(listing.clone(), answers(&[(2, "A")]))
        .expect("first submission");
    service
        .submit(listing.clone(), answers(&[(5, "B"), (6, "B")]))
        .expect("second submission");

    let profile = service.profile(&listing).expect("profile exists");
    assert_eq!(repository.stored(), 1);
    assert_eq!(profile.result.personality_type, PersonalityType::VelcroVelvet);
    assert!(!profile.answers.contains_key(&2));
}

#[test]
fn blank_listing_is_rejected_before_scoring() {
    let repository = MemoryProfiles::default();
    let service = service(repository.clone());

    let result = service.submit(ListingId("   ".to_string()), answers(&[(1, "A")]));

    assert!(matches!(result, Err(QuizServiceError::InvalidListing)));
    assert_eq!(repository.stored(), 0);
}

#[test]
fn missing_profile_reports_not_found() {
    let service = service(MemoryProfiles::default());

    let result = service.profile(&ListingId("listing-unknown".to_string()));

    assert!(matches!(
        result,
        Err(QuizServiceError::Repository(RepositoryError::NotFound))
    ));
}

#[test]
fn repository_outage_propagates() {
    let service = service(UnavailableProfiles);

    let result = service.submit(ListingId("listing-1".to_string()), answers(&[(1, "A")]));

    assert!(matches!(
        result,
        Err(QuizServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
}

#[test]
fn calculate_does_not_touch_storage() {
    let repository = MemoryProfiles::default();
    let service = service(repository.clone());

    let result = service.calculate(&answers(&[(1, "A"), (3, "B")]));

    assert_eq!(result.personality_type, PersonalityType::ZoomiesChampion);
    assert_eq!(repository.stored(), 0);
    assert_eq!(service.questions().len(), 7);
}
