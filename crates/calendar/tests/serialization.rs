use almanac_calendar::Month;

const NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[test]
fn to_string_is_english_name() {
    for (month, name) in Month::all().zip(NAMES) {
        assert_eq!(month.to_string(), name);
    }
}

#[test]
fn json_encodes_name() {
    for (month, name) in Month::all().zip(NAMES) {
        assert_eq!(
            serde_json::to_string(&month).unwrap(),
            serde_json::to_string(name).unwrap()
        );
    }
    assert_eq!(
        serde_json::to_string(&Month::of(8).unwrap()).unwrap(),
        "\"August\""
    );
}

#[test]
fn json_decodes_name() {
    let month: Month = serde_json::from_str("\"August\"").unwrap();
    assert_eq!(month, Month::August);

    let months: Vec<Month> = serde_json::from_str("[\"March\", \"December\"]").unwrap();
    assert_eq!(months, vec![Month::March, Month::December]);
}

#[test]
fn json_rejects_ordinals_and_unknown_names() {
    assert!(serde_json::from_str::<Month>("8").is_err());
    assert!(serde_json::from_str::<Month>("\"august\"").is_err());
    assert!(serde_json::from_str::<Month>("\"Smarch\"").is_err());
}

#[test]
fn json_inside_struct() {
    #[derive(serde::Serialize)]
    struct Row {
        month: Month,
    }
    let row = Row {
        month: Month::February,
    };
    assert_eq!(
        serde_json::to_string(&row).unwrap(),
        r#"{"month":"February"}"#
    );
}
