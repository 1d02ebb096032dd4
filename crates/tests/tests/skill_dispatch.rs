use river_core::intent::{CANCEL_INTENT, HELP_INTENT, LEVEL_INTENT, RIVER_SLOT, STOP_INTENT};
use river_core::SkillRequest;
use river_tests::{skill_with, StubReply, DEE_BODY, RIBBLE_BODY};

const HELP: &str = "Ask me for the level of your favourite river";
const STOP: &str = "See you on the river!";
const UNKNOWN: &str = "Sorry, I don't know about that river";

fn level_request(river: &str) -> SkillRequest {
    SkillRequest::intent(LEVEL_INTENT, &[(RIVER_SLOT, river)])
}

#[tokio::test]
async fn launch_answers_with_help_and_keeps_session() {
    let (skill, levels, _) = skill_with(StubReply::Body(RIBBLE_BODY));

    let response = skill.handle(&SkillRequest::launch()).await;

    assert_eq!(response.speech_text(), HELP);
    assert!(!response.should_end_session());
    assert_eq!(levels.calls(), 0);
}

#[tokio::test]
async fn stop_and_cancel_end_the_session() {
    let (skill, _, _) = skill_with(StubReply::Body(RIBBLE_BODY));

    for intent in [STOP_INTENT, CANCEL_INTENT] {
        let response = skill.handle(&SkillRequest::intent(intent, &[])).await;
        assert_eq!(response.speech_text(), STOP);
        assert!(response.should_end_session());
    }
}

#[tokio::test]
async fn help_intent_keeps_session_open() {
    let (skill, _, _) = skill_with(StubReply::Body(RIBBLE_BODY));

    let response = skill.handle(&SkillRequest::intent(HELP_INTENT, &[])).await;

    assert_eq!(response.speech_text(), HELP);
    assert!(!response.should_end_session());
}

#[tokio::test]
async fn other_request_kinds_fall_back_to_help() {
    let (skill, _, _) = skill_with(StubReply::Body(RIBBLE_BODY));

    let session_ended = SkillRequest::from_json(
        r#"{"version":"1.0","request":{"type":"SessionEndedRequest","reason":"USER_INITIATED"}}"#,
    )
    .unwrap();
    let unknown_intent = SkillRequest::intent("AMAZON.FallbackIntent", &[]);

    for request in [session_ended, unknown_intent] {
        let response = skill.handle(&request).await;
        assert_eq!(response.speech_text(), HELP);
        assert!(!response.should_end_session());
    }
}

#[tokio::test]
async fn level_intent_speaks_ribble_level() {
    let (skill, levels, metrics) = skill_with(StubReply::Body(RIBBLE_BODY));

    let response = skill.handle(&level_request("Ribble")).await;

    assert_eq!(response.speech_text(), "The river Ribble, Lower is Normal, 0.3");
    assert!(response.should_end_session());
    assert_eq!(
        levels.requested_ids(),
        vec!["3ac9af6d-df37-49a8-86f3-222e52744cc4".to_string()]
    );
    assert_eq!(metrics.snapshot().level_lookups_total, 1);
}

#[tokio::test]
async fn level_intent_speaks_dee_level() {
    let (skill, _, _) = skill_with(StubReply::Body(DEE_BODY));

    let response = skill.handle(&level_request("dee")).await;

    assert_eq!(response.speech_text(), "The river Dee, Chester Weir is High, 1.2");
    assert!(response.should_end_session());
}

#[tokio::test]
async fn river_names_resolve_regardless_of_case() {
    let (skill, levels, _) = skill_with(StubReply::Body(DEE_BODY));

    for name in ["dee", "Dee", "DEE"] {
        skill.handle(&level_request(name)).await;
    }

    let ids = levels.requested_ids();
    assert_eq!(ids.len(), 3);
    assert!(ids
        .iter()
        .all(|id| id == "75148ca0-ee5e-4344-8534-db9a59ed4cd0"));
}

#[tokio::test]
async fn unknown_river_skips_lookup() {
    let (skill, levels, metrics) = skill_with(StubReply::Body(RIBBLE_BODY));

    let response = skill.handle(&level_request("Thames")).await;

    assert_eq!(response.speech_text(), UNKNOWN);
    assert!(response.should_end_session());
    assert_eq!(levels.calls(), 0);
    assert_eq!(metrics.snapshot().unknown_river_total, 1);
}

#[tokio::test]
async fn missing_river_slot_is_unknown() {
    let (skill, levels, _) = skill_with(StubReply::Body(RIBBLE_BODY));

    let response = skill.handle(&SkillRequest::intent(LEVEL_INTENT, &[])).await;

    assert_eq!(response.speech_text(), UNKNOWN);
    assert_eq!(levels.calls(), 0);
}

#[tokio::test]
async fn upstream_failures_degrade_to_unknown() {
    for reply in [
        StubReply::Status(503),
        StubReply::Timeout,
        StubReply::Body(r#"{"data":{"river":"Ribble"}}"#),
    ] {
        let (skill, levels, metrics) = skill_with(reply);

        let response = skill.handle(&level_request("Ribble")).await;

        assert_eq!(response.speech_text(), UNKNOWN);
        assert!(response.should_end_session());
        assert_eq!(levels.calls(), 1);
        assert_eq!(metrics.snapshot().upstream_failures_total, 1);
    }
}

#[tokio::test]
async fn repeated_invocations_are_identical() {
    let (skill, _, metrics) = skill_with(StubReply::Body(RIBBLE_BODY));
    let request = level_request("Ribble");

    let first = skill.handle(&request).await;
    let second = skill.handle(&request).await;

    assert_eq!(first, second);
    assert_eq!(metrics.snapshot().invocations_total, 2);
}
