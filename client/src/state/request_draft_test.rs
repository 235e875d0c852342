use super::*;
use time::Month;

#[test]
fn default_draft_matches_empty_form() {
    let draft = RequestDraft::default();
    assert_eq!(draft.title, "");
    assert_eq!(draft.description, "");
    assert_eq!(draft.priority, Priority::Normale);
    assert_eq!(draft.category, Category::General);
    assert_eq!(draft.due_date, None);
}

#[test]
fn serializes_with_form_field_names() {
    let draft = RequestDraft {
        title: "Fix printer".to_owned(),
        description: "Printer jam on 3rd floor".to_owned(),
        ..RequestDraft::default()
    };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        serde_json::json!({
            "titre": "Fix printer",
            "description": "Printer jam on 3rd floor",
            "priorite": "normale",
            "categorie": "general",
            "dateEcheance": ""
        })
    );
}

#[test]
fn due_date_parses_and_formats_iso_dates() {
    let mut draft = RequestDraft::default();
    draft.set_value(FIELD_DUE_DATE, "2026-03-09").unwrap();
    assert_eq!(draft.due_date, Some(Date::from_calendar_date(2026, Month::March, 9).unwrap()));
    assert_eq!(draft.value(FIELD_DUE_DATE).as_deref(), Some("2026-03-09"));
    assert_eq!(serde_json::to_value(&draft).unwrap()["dateEcheance"], "2026-03-09");
}

#[test]
fn empty_due_date_clears_it() {
    let mut draft = RequestDraft::default();
    draft.set_value(FIELD_DUE_DATE, "2026-03-09").unwrap();
    draft.set_value(FIELD_DUE_DATE, "").unwrap();
    assert_eq!(draft.due_date, None);
}

#[test]
fn malformed_due_date_is_rejected() {
    let mut draft = RequestDraft::default();
    assert_eq!(
        draft.set_value(FIELD_DUE_DATE, "09/03/2026"),
        Err(DraftError::InvalidValue { field: FIELD_DUE_DATE, value: "09/03/2026".to_owned() })
    );
    assert_eq!(draft.due_date, None);
}

#[test]
fn unknown_choice_is_rejected() {
    let mut draft = RequestDraft::default();
    assert!(draft.set_value(FIELD_PRIORITY, "critique").is_err());
    assert!(draft.set_value(FIELD_CATEGORY, "rh").is_err());
    assert_eq!(draft, RequestDraft::default());
}

#[test]
fn unknown_field_is_rejected() {
    let mut draft = RequestDraft::default();
    assert_eq!(draft.set_value("titre_bis", "x"), Err(DraftError::UnknownField("titre_bis".to_owned())));
}

#[test]
fn every_schema_field_round_trips_through_value() {
    for spec in RequestDraft::FIELDS {
        let draft = RequestDraft::default();
        let current = draft.value(spec.name).expect("schema field has a value");
        let mut copy = draft.clone();
        copy.set_value(spec.name, &current).unwrap();
        assert_eq!(copy, draft, "field {}", spec.name);
    }
}

#[test]
fn select_choices_all_parse() {
    for spec in RequestDraft::FIELDS {
        if let FieldKind::Select(choices) = spec.kind {
            for choice in choices {
                let mut draft = RequestDraft::default();
                draft.set_value(spec.name, choice.value).unwrap();
                assert_eq!(draft.value(spec.name).as_deref(), Some(choice.value));
            }
        }
    }
}

#[test]
fn title_and_description_are_required() {
    let required: Vec<_> = RequestDraft::FIELDS
        .iter()
        .filter(|spec| spec.required)
        .map(|spec| spec.name)
        .collect();
    assert_eq!(required, vec![FIELD_TITLE, FIELD_DESCRIPTION]);
}
