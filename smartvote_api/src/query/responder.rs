use crate::types::ResponderID;

use super::{FilterValue, Query};

/// Filter shared by the smartspider and answers endpoints.
///
/// A responder is either a candidate or a list; both live in the same
/// identifier space, so one filter serves both.
#[derive(Clone, Debug, Default)]
pub struct ResponderQuery {
    pub responder_id: Option<ResponderID>,
}

impl Query for ResponderQuery {
    fn filters(&self) -> Vec<(&'static str, Option<FilterValue>)> {
        vec![("responderId", self.responder_id.map(FilterValue::Id))]
    }
}

impl ResponderQuery {
    pub fn with_responder_id(mut self, responder_id: ResponderID) -> Self {
        self.responder_id = Some(responder_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{Query, ResponderQuery};

    #[test]
    fn responder_id() {
        assert!(ResponderQuery::default().to_query_pairs().is_empty());
        assert_eq!(
            ResponderQuery::default()
                .with_responder_id(18800001009)
                .to_query_pairs(),
            vec![("responderId".to_string(), "18800001009".to_string())]
        );
    }
}
