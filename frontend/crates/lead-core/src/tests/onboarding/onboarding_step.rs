use crate::OnboardingStep;

#[test]
fn test_step_numbers_are_one_based_and_ordered() {
    let numbers: Vec<u8> = OnboardingStep::ALL.iter().map(|s| s.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
}

#[test]
fn test_try_from_number() {
    assert_eq!(OnboardingStep::try_from(3).unwrap(), OnboardingStep::Contact);
    assert!(OnboardingStep::try_from(0).is_err());
    assert!(OnboardingStep::try_from(5).is_err());
}

#[test]
fn test_first_and_last_have_no_neighbour() {
    assert!(OnboardingStep::Profile.previous().is_none());
    assert!(OnboardingStep::Goals.next().is_none());
    assert!(OnboardingStep::Goals.is_last());
}
