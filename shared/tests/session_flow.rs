use shared::{
    AnalysisInput, AnalysisResult, ContentKind, DetectionSignal, GatewayError, HistoryLedger,
    ProgressSequence, Session, SessionState, SignalWeight, Verdict, DEFAULT_DISCLAIMER,
};

fn text_result() -> AnalysisResult {
    AnalysisResult {
        ai_probability: 82.0,
        signals: vec![
            DetectionSignal {
                label: "Low perplexity".into(),
                weight: SignalWeight::High,
                detail: "score 8.1".into(),
            },
            DetectionSignal {
                label: "Uniform sentence length".into(),
                weight: SignalWeight::Medium,
                detail: String::new(),
            },
        ],
        metrics: Default::default(),
        processing_time_ms: 340,
        disclaimer: DEFAULT_DISCLAIMER.to_string(),
    }
}

// Mirrors what the frontend resolution handler does with a gateway outcome:
// discard if superseded, otherwise finish progress, record on success, and
// apply the terminal transition.
fn deliver(
    session: &mut Session,
    ledger: &mut HistoryLedger,
    token: u64,
    display_name: &str,
    outcome: Result<AnalysisResult, GatewayError>,
) -> bool {
    if !session.is_current(token) {
        return false;
    }
    session.set_progress(100);
    if let Ok(result) = &outcome {
        ledger.append(
            session.kind(),
            display_name.to_string(),
            result.clone(),
            "2026-08-23 12:00".into(),
        );
    }
    session.resolve(token, outcome)
}

#[test]
fn text_submission_succeeds_and_records_one_likely_ai_entry() {
    let mut session = Session::new();
    let mut ledger = HistoryLedger::new();

    let input = AnalysisInput::Text {
        body: "twenty five characters xx".into(),
    };
    assert!(session.can_submit(Some(&input)));
    let token = session.begin(&input, 1_000.0).unwrap();

    // Progress ticks while the call is outstanding.
    let mut seq = ProgressSequence::new();
    for _ in 0..3 {
        let step = seq.advance().unwrap();
        assert!(session.set_progress(step));
    }

    assert!(deliver(&mut session, &mut ledger, token, "twenty five characters xx", Ok(text_result())));

    match session.state() {
        SessionState::Succeeded { kind, result } => {
            assert_eq!(*kind, ContentKind::Text);
            assert_eq!(result.processing_time_ms, 340);
        }
        other => panic!("unexpected state: {other:?}"),
    }
    assert_eq!(ledger.len(), 1);
    let entry = ledger.iter_recent().next().unwrap();
    assert_eq!(Verdict::classify(entry.result.ai_probability), Verdict::LikelyAi);
}

#[test]
fn gateway_failure_surfaces_the_detail_and_leaves_history_untouched() {
    let mut session = Session::new();
    let mut ledger = HistoryLedger::new();

    session.select_kind(ContentKind::Image);
    let input = AnalysisInput::Image {
        mime_type: "image/png".into(),
    };
    let token = session.begin(&input, 0.0).unwrap();

    // Body {"detail":"model unavailable"} on an HTTP 500.
    assert!(deliver(
        &mut session,
        &mut ledger,
        token,
        "photo.png",
        Err(GatewayError::new("model unavailable")),
    ));

    assert_eq!(
        *session.state(),
        SessionState::Failed {
            kind: ContentKind::Image,
            message: "model unavailable".into(),
        }
    );
    assert!(ledger.is_empty());
}

#[test]
fn only_the_newest_of_two_overlapping_submissions_lands() {
    let mut session = Session::new();
    let mut ledger = HistoryLedger::new();
    let input = AnalysisInput::Text {
        body: "a body long enough to pass validation".into(),
    };

    let first = session.begin(&input, 0.0).unwrap();
    let second = session.begin(&input, 1.0).unwrap();

    // First request fails late; it must not be recorded or displayed.
    assert!(!deliver(
        &mut session,
        &mut ledger,
        first,
        "first",
        Err(GatewayError::new("timeout")),
    ));
    assert!(session.is_in_flight());
    assert!(ledger.is_empty());

    assert!(deliver(&mut session, &mut ledger, second, "second", Ok(text_result())));
    assert!(matches!(session.state(), SessionState::Succeeded { .. }));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.iter_recent().next().unwrap().display_name, "second");
}

#[test]
fn kind_switch_mid_flight_resets_and_discards_the_outcome() {
    let mut session = Session::new();
    let mut ledger = HistoryLedger::new();
    let input = AnalysisInput::Text {
        body: "a body long enough to pass validation".into(),
    };

    let token = session.begin(&input, 0.0).unwrap();
    assert!(session.select_kind(ContentKind::Video));
    assert_eq!(*session.state(), SessionState::Idle);

    assert!(!deliver(&mut session, &mut ledger, token, "stale", Ok(text_result())));
    assert_eq!(*session.state(), SessionState::Idle);
    assert!(ledger.is_empty());
}
