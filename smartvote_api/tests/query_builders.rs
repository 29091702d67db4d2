use smartvote_api::{CandidateQuery, FilterValue, ListQuery, PartyQuery, Query, ResponderQuery};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/2.0/elections/188/candidates").unwrap()
}

#[test]
fn candidate_query_defaults() {
    let url = CandidateQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), None);
}

#[test]
fn candidate_query_names_are_encoded() {
    let url = CandidateQuery::default()
        .with_firstname("Petra")
        .with_lastname("Gössi")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("firstname=Petra"));
    assert!(query.contains("lastname=G%C3%B6ssi"));
}

#[test]
fn candidate_age_range_keys() {
    let pairs = CandidateQuery::default()
        .with_age_from(18)
        .with_age_until(40)
        .to_query_pairs();
    assert_eq!(
        pairs,
        vec![
            ("ageFrom".to_string(), "18".to_string()),
            ("ageuntil".to_string(), "40".to_string()),
        ]
    );
}

#[test]
fn boolean_filters_are_lowercase_strings() {
    let pairs = CandidateQuery::default()
        .with_smartvote_profile(false)
        .with_elected(true)
        .with_incumbent(true)
        .to_query_pairs();
    for (_, value) in &pairs {
        assert!(value == "true" || value == "false");
    }
    assert_eq!(pairs[0], ("hasSmartvoteProfile".to_string(), "false".to_string()));
}

#[test]
fn candidate_filters_listed_in_wire_order() {
    let keys: Vec<&str> = CandidateQuery::default()
        .filters()
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    assert_eq!(
        keys,
        vec![
            "constituencyId",
            "partyId",
            "listId",
            "firstname",
            "lastname",
            "ageFrom",
            "ageuntil",
            "gender",
            "hasSmartvoteProfile",
            "isElected",
            "isIncumbent",
        ]
    );
}

#[test]
fn list_query_both_filters() {
    let pairs = ListQuery::default()
        .with_constituency_id(18800000004)
        .with_party_id(18800003411)
        .to_query_pairs();
    assert_eq!(pairs.len(), 2);
}

#[test]
fn party_query_root_parties_flag() {
    let filters = PartyQuery::default().filters();
    assert_eq!(filters[1], ("rootParties", Some(FilterValue::Flag(true))));
}

#[test]
fn responder_query_absent_by_default() {
    let url = ResponderQuery::default().add_to_url(&base_url());
    assert!(url.query().is_none());
}
