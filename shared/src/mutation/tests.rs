use super::*;

#[test]
fn happy_path_walks_idle_pending_succeeded() {
    let mut m = MutationLifecycle::new();
    assert_eq!(*m.state(), MutationState::Idle);

    m.begin().unwrap();
    assert!(m.is_pending());

    m.succeed();
    assert_eq!(*m.state(), MutationState::Succeeded);

    m.settle();
    assert_eq!(*m.state(), MutationState::Idle);
}

#[test]
fn concurrent_submit_while_pending_is_rejected() {
    let mut m = MutationLifecycle::new();
    m.begin().unwrap();
    assert_eq!(m.begin(), Err(SubmitRejected));
    // 拒绝不得破坏在途状态
    assert!(m.is_pending());
}

#[test]
fn failure_retains_the_reason_until_the_next_submit() {
    let mut m = MutationLifecycle::new();
    m.begin().unwrap();
    m.fail("Invalid email or password");

    assert_eq!(m.failure_reason(), Some("Invalid email or password"));
    assert!(!m.is_pending());

    // Retry is a fresh submit and clears the displayed reason.
    m.begin().unwrap();
    assert!(m.failure_reason().is_none());
}

#[test]
fn double_submit_of_the_same_payload_is_two_independent_lifecycles() {
    let mut m = MutationLifecycle::new();

    m.begin().unwrap();
    m.succeed();
    m.settle();

    // No dedup: the second identical submit runs the machine again.
    m.begin().unwrap();
    assert!(m.is_pending());
    m.succeed();
    assert_eq!(*m.state(), MutationState::Succeeded);
}

#[test]
fn completions_after_reset_are_no_ops() {
    let mut m = MutationLifecycle::new();
    m.succeed();
    assert_eq!(*m.state(), MutationState::Idle);
    m.fail("late network response");
    assert_eq!(*m.state(), MutationState::Idle);
}

#[test]
fn settle_never_interrupts_a_pending_submission() {
    let mut m = MutationLifecycle::new();
    m.begin().unwrap();
    m.settle();
    assert!(m.is_pending());
}
