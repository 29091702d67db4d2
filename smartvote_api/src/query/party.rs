use crate::types::ConstituencyID;

use super::{FilterValue, Query};

/// Filters for the party listing.
///
/// Defaults to root parties only, matching what the API shows on its own
/// party overview. Use [`PartyQuery::without_root_parties`] to drop the filter.
#[derive(Clone, Debug)]
pub struct PartyQuery {
    pub constituency_id: Option<ConstituencyID>,
    pub root_parties: Option<bool>,
}

impl Default for PartyQuery {
    fn default() -> Self {
        Self {
            constituency_id: None,
            root_parties: Some(true),
        }
    }
}

impl Query for PartyQuery {
    fn filters(&self) -> Vec<(&'static str, Option<FilterValue>)> {
        vec![
            ("constituencyId", self.constituency_id.map(FilterValue::Id)),
            ("rootParties", self.root_parties.map(FilterValue::Flag)),
        ]
    }
}

impl PartyQuery {
    pub fn with_constituency_id(mut self, constituency_id: ConstituencyID) -> Self {
        self.constituency_id = Some(constituency_id);
        self
    }

    pub fn with_root_parties(mut self, root_parties: bool) -> Self {
        self.root_parties = Some(root_parties);
        self
    }

    /// Omits `rootParties` from the request entirely.
    pub fn without_root_parties(mut self) -> Self {
        self.root_parties = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{PartyQuery, Query};

    #[test]
    fn test_party_query() {
        let url = Url::parse("https://example.com").unwrap();

        insta::assert_snapshot!(PartyQuery::default().add_to_url(&url).to_string(), @"https://example.com/?rootParties=true");

        insta::assert_snapshot!(PartyQuery::default()
            .with_constituency_id(18800000004)
            .with_root_parties(false)
            .add_to_url(&url)
            .to_string(), @"https://example.com/?constituencyId=18800000004&rootParties=false");

        insta::assert_snapshot!(PartyQuery::default()
            .without_root_parties()
            .add_to_url(&url)
            .to_string(), @"https://example.com/");
    }
}
