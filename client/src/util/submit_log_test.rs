use super::*;
use crate::state::request_draft::RequestDraft;

#[test]
fn payload_for_request_scenario() {
    let draft = RequestDraft {
        title: "Fix printer".to_owned(),
        description: "Printer jam on 3rd floor".to_owned(),
        ..RequestDraft::default()
    };
    assert_eq!(
        submission_payload(&draft).unwrap(),
        r#"{"titre":"Fix printer","description":"Printer jam on 3rd floor","priorite":"normale","categorie":"general","dateEcheance":""}"#
    );
}

#[test]
fn log_submission_is_callable_without_logger() {
    log_submission("request", &RequestDraft::default());
}
