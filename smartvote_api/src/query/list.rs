use crate::types::{ConstituencyID, PartyID};

use super::{FilterValue, Query};

/// Filters for the candidate list listing.
#[derive(Clone, Debug, Default)]
pub struct ListQuery {
    pub constituency_id: Option<ConstituencyID>,
    pub party_id: Option<PartyID>,
}

impl Query for ListQuery {
    fn filters(&self) -> Vec<(&'static str, Option<FilterValue>)> {
        vec![
            ("constituencyId", self.constituency_id.map(FilterValue::Id)),
            ("partyId", self.party_id.map(FilterValue::Id)),
        ]
    }
}

impl ListQuery {
    pub fn with_constituency_id(mut self, constituency_id: ConstituencyID) -> Self {
        self.constituency_id = Some(constituency_id);
        self
    }

    pub fn with_party_id(mut self, party_id: PartyID) -> Self {
        self.party_id = Some(party_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{ListQuery, Query};

    #[test]
    fn empty_by_default() {
        assert!(ListQuery::default().to_query_pairs().is_empty());
    }

    #[test]
    fn party_only() {
        let pairs = ListQuery::default().with_party_id(18800003411).to_query_pairs();
        assert_eq!(
            pairs,
            vec![("partyId".to_string(), "18800003411".to_string())]
        );
    }
}
