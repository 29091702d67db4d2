use crate::types::{ConstituencyID, ListID, PartyID};

use super::{FilterValue, Query};

/// Filters for the candidate listing.
///
/// Every filter is optional and only sent when set.
#[derive(Clone, Debug, Default)]
pub struct CandidateQuery {
    pub constituency_id: Option<ConstituencyID>,
    pub party_id: Option<PartyID>,
    pub list_id: Option<ListID>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub age_from: Option<u32>,
    pub age_until: Option<u32>,
    /// Gender code as used by the API, e.g. `"f"` or `"m"`.
    pub gender: Option<String>,
    pub has_smartvote_profile: Option<bool>,
    pub is_elected: Option<bool>,
    pub is_incumbent: Option<bool>,
}

impl Query for CandidateQuery {
    fn filters(&self) -> Vec<(&'static str, Option<FilterValue>)> {
        vec![
            ("constituencyId", self.constituency_id.map(FilterValue::Id)),
            ("partyId", self.party_id.map(FilterValue::Id)),
            ("listId", self.list_id.map(FilterValue::Id)),
            ("firstname", self.firstname.clone().map(FilterValue::Text)),
            ("lastname", self.lastname.clone().map(FilterValue::Text)),
            ("ageFrom", self.age_from.map(FilterValue::Number)),
            // The API expects this key in lowercase, unlike its siblings.
            ("ageuntil", self.age_until.map(FilterValue::Number)),
            ("gender", self.gender.clone().map(FilterValue::Text)),
            (
                "hasSmartvoteProfile",
                self.has_smartvote_profile.map(FilterValue::Flag),
            ),
            ("isElected", self.is_elected.map(FilterValue::Flag)),
            ("isIncumbent", self.is_incumbent.map(FilterValue::Flag)),
        ]
    }
}

impl CandidateQuery {
    pub fn with_constituency_id(mut self, constituency_id: ConstituencyID) -> Self {
        self.constituency_id = Some(constituency_id);
        self
    }

    pub fn with_party_id(mut self, party_id: PartyID) -> Self {
        self.party_id = Some(party_id);
        self
    }

    pub fn with_list_id(mut self, list_id: ListID) -> Self {
        self.list_id = Some(list_id);
        self
    }

    pub fn with_firstname(mut self, firstname: &str) -> Self {
        self.firstname = Some(firstname.to_string());
        self
    }

    pub fn with_lastname(mut self, lastname: &str) -> Self {
        self.lastname = Some(lastname.to_string());
        self
    }

    /// Restricts to candidates at least this old.
    pub fn with_age_from(mut self, age_from: u32) -> Self {
        self.age_from = Some(age_from);
        self
    }

    /// Restricts to candidates at most this old.
    pub fn with_age_until(mut self, age_until: u32) -> Self {
        self.age_until = Some(age_until);
        self
    }

    pub fn with_gender(mut self, gender: &str) -> Self {
        self.gender = Some(gender.to_string());
        self
    }

    pub fn with_smartvote_profile(mut self, has_smartvote_profile: bool) -> Self {
        self.has_smartvote_profile = Some(has_smartvote_profile);
        self
    }

    pub fn with_elected(mut self, is_elected: bool) -> Self {
        self.is_elected = Some(is_elected);
        self
    }

    pub fn with_incumbent(mut self, is_incumbent: bool) -> Self {
        self.is_incumbent = Some(is_incumbent);
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{CandidateQuery, Query};

    #[test]
    fn test_candidate_query() {
        let url = Url::parse("https://example.com").unwrap();

        insta::assert_snapshot!(CandidateQuery::default()
            .with_firstname("Petra")
            .with_lastname("Meier")
            .with_age_from(18)
            .with_age_until(99)
            .with_gender("f")
            .with_smartvote_profile(true)
            .with_elected(true)
            .with_incumbent(false)
            .add_to_url(&url)
            .to_string(), @"https://example.com/?firstname=Petra&lastname=Meier&ageFrom=18&ageuntil=99&gender=f&hasSmartvoteProfile=true&isElected=true&isIncumbent=false");

        insta::assert_snapshot!(CandidateQuery::default()
            .with_constituency_id(18800000004)
            .with_party_id(18800001494)
            .with_list_id(18800023982)
            .add_to_url(&url)
            .to_string(), @"https://example.com/?constituencyId=18800000004&partyId=18800001494&listId=18800023982");
    }

    #[test]
    fn unset_filters_absent() {
        let pairs = CandidateQuery::default().with_elected(false).to_query_pairs();
        assert_eq!(pairs, vec![("isElected".to_string(), "false".to_string())]);
    }
}
