use pdf_quizzer::Session;
use pdf_quizzer::api::{AnalyzeResponse, UploadPayload, interpret_analysis, interpret_upload};
use pdf_quizzer::model::{AppState, MasteryTier, UploadArtifact};
use pdf_quizzer::session::{AnalysisStatus, Effect, NoticeLevel, Ticket};

const UPLOAD_BODY: &str = r#"{
    "summary": "Photosynthesis converts light into chemical energy.",
    "questions": [
        {"question": "Where does photosynthesis happen?", "options": ["a) Chloroplast", "b) Nucleus", "c) Ribosome", "d) Vacuole"], "answer": "a) Chloroplast"},
        {"question": "Main product?", "options": ["a) Oxygen", "b) Glucose", "c) Nitrogen", "d) Salt"], "answer": "b) Glucose"},
        {"question": "Pigment involved?", "options": ["a) Melanin", "b) Keratin", "c) Chlorophyll", "d) Hemoglobin"], "answer": "c) Chlorophyll"},
        {"question": "Energy source?", "options": ["a) Heat", "b) Sound", "c) Wind", "d) Light"], "answer": "d) Light"}
    ]
}"#;

fn upload(session: &mut Session) -> Ticket {
    session.select_file(UploadArtifact::new("photosynthesis.pdf", b"%PDF".to_vec()));
    match session.submit_upload() {
        Some(Effect::Upload { ticket, .. }) => ticket,
        other => panic!("expected upload effect, got {other:?}"),
    }
}

fn submit(session: &mut Session) -> Ticket {
    match session.submit_quiz() {
        Some(Effect::Analyze { ticket, .. }) => ticket,
        other => panic!("expected analyze effect, got {other:?}"),
    }
}

fn into_quiz(session: &mut Session) {
    let ticket = upload(session);
    let payload: UploadPayload = interpret_upload(200, UPLOAD_BODY).unwrap();
    assert!(session.upload_succeeded(ticket, payload));
}

#[test]
fn three_correct_one_unanswered() {
    let mut session = Session::new();
    into_quiz(&mut session);

    session.record_answer(0, "a) Chloroplast");
    session.record_answer(1, "b) Glucose");
    session.record_answer(2, "c) Chlorophyll");
    submit(&mut session);

    let report = session.report().unwrap();
    assert_eq!(report.correct_count, 3);
    assert_eq!(report.accuracy_percent, 75.0);
    assert_eq!(report.mastery_tier, MasteryTier::Advanced);
    assert_eq!(report.weak_topics, vec!["Energy source?".to_string()]);
}

#[test]
fn changing_an_answer_keeps_only_the_latest() {
    let mut session = Session::new();
    into_quiz(&mut session);

    session.record_answer(0, "b) Nucleus");
    session.record_answer(0, "a) Chloroplast");
    assert_eq!(session.ledger().get(0), Some("a) Chloroplast"));
    assert_eq!(session.ledger().len(), 1);
}

#[test]
fn failed_analysis_keeps_the_local_report() {
    let mut session = Session::new();
    into_quiz(&mut session);
    session.record_answer(3, "d) Light");
    let ticket = submit(&mut session);
    let naive = session.report().cloned().unwrap();

    let err = interpret_analysis(500, r#"{"error": "Invalid JSON returned by AI"}"#).unwrap_err();
    assert!(session.analysis_failed(ticket, err.user_message()));

    assert_eq!(session.state(), AppState::Report);
    let report = session.report().unwrap();
    assert!(report.feedback_text.is_empty());
    assert_eq!(report.strong_topics, naive.strong_topics);
    assert_eq!(report.weak_topics, naive.weak_topics);
    assert_eq!(session.notice().unwrap().level, NoticeLevel::Warning);
}

#[test]
fn successful_analysis_refines_topics() {
    let mut session = Session::new();
    into_quiz(&mut session);
    let ticket = submit(&mut session);

    let response: AnalyzeResponse = interpret_analysis(
        200,
        r#"{"strong_areas": [], "weak_areas": ["Light reactions"], "feedback": "Start with the basics."}"#,
    )
    .unwrap();
    assert!(session.analysis_succeeded(ticket, response));

    let report = session.report().unwrap();
    assert_eq!(report.weak_topics, vec!["Light reactions".to_string()]);
    assert!(report.strong_topics.is_empty()); // nada acertado, se queda la lista local
    assert_eq!(report.feedback_text, "Start with the basics.");
    assert_eq!(session.analysis(), AnalysisStatus::Done);
}

#[test]
fn reset_then_late_analysis_does_not_leak_into_new_session() {
    let mut session = Session::new();
    into_quiz(&mut session);
    session.record_answer(0, "a) Chloroplast");
    let stale = submit(&mut session);

    assert!(session.reset());
    assert_eq!(session.state(), AppState::Upload);
    assert!(session.report().is_none());
    assert!(session.questions().is_empty());
    assert!(session.summary().is_empty());
    assert!(session.ledger().is_empty());
    assert!(session.artifact().is_none());

    // la respuesta tardía llega con la sesión nueva aún en Upload
    let late = AnalyzeResponse {
        strong_areas: Some(vec!["old".into()]),
        weak_areas: None,
        feedback: Some("old".into()),
    };
    assert!(!session.analysis_succeeded(stale, late.clone()));
    assert_eq!(session.state(), AppState::Upload);

    // y también si la nueva sesión ya tiene informe propio
    into_quiz(&mut session);
    submit(&mut session);
    assert!(!session.analysis_succeeded(stale, late));
    assert!(session.report().unwrap().feedback_text.is_empty());
    assert_eq!(session.analysis(), AnalysisStatus::Pending);
}

#[test]
fn upload_error_returns_to_upload_with_file_kept() {
    let mut session = Session::new();
    let ticket = upload(&mut session);
    let err = interpret_upload(500, r#"{"error": "Failed to process PDF: bad xref"}"#).unwrap_err();
    assert!(session.upload_failed(ticket, err.user_message()));

    assert_eq!(session.state(), AppState::Upload);
    assert_eq!(session.artifact().unwrap().name, "photosynthesis.pdf");
    assert_eq!(
        session.notice().unwrap().text,
        "Failed to process PDF: bad xref"
    );
}
