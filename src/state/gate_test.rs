use super::*;

// =============================================================
// Transitions
// =============================================================

#[test]
fn default_is_unchecked() {
    assert_eq!(GateState::default(), GateState::Unchecked);
}

#[test]
fn load_splits_on_session_presence() {
    assert_eq!(GateState::on_load(true), GateState::LocalPresent);
    assert_eq!(GateState::on_load(false), GateState::LocalAbsent);
}

#[test]
fn validation_confirms_or_expires_a_present_session() {
    assert_eq!(
        GateState::LocalPresent.on_validated(true),
        GateState::Confirmed
    );
    assert_eq!(
        GateState::LocalPresent.on_validated(false),
        GateState::Expired
    );
}

#[test]
fn validation_does_not_resurrect_other_states() {
    assert_eq!(GateState::LocalAbsent.on_validated(true), GateState::LocalAbsent);
    assert_eq!(GateState::Expired.on_validated(true), GateState::Expired);
    assert_eq!(GateState::Confirmed.on_validated(false), GateState::Confirmed);
    assert_eq!(GateState::Unchecked.on_validated(true), GateState::Unchecked);
}

// =============================================================
// View gating
// =============================================================

#[test]
fn present_and_confirmed_allow_the_view() {
    assert!(GateState::LocalPresent.allows_view());
    assert!(GateState::Confirmed.allows_view());
    assert!(!GateState::Unchecked.allows_view());
    assert!(!GateState::LocalAbsent.allows_view());
    assert!(!GateState::Expired.allows_view());
}

#[test]
fn only_blocked_states_schedule_the_redirect() {
    let all = [
        GateState::Unchecked,
        GateState::LocalPresent,
        GateState::LocalAbsent,
        GateState::Confirmed,
        GateState::Expired,
    ];
    let scheduled: Vec<_> = all.into_iter().filter(|s| s.schedules_redirect()).collect();
    assert_eq!(scheduled, vec![GateState::LocalAbsent, GateState::Expired]);
}

#[test]
fn blocked_states_carry_their_messages() {
    assert_eq!(
        GateState::LocalAbsent.message(),
        Some("You need to be logged in to view this page.")
    );
    assert_eq!(
        GateState::Expired.message(),
        Some("Session expired. Please log in again.")
    );
    assert_eq!(GateState::Confirmed.message(), None);
    assert_eq!(GateState::LocalPresent.message(), None);
}
