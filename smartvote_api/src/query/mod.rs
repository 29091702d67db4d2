mod common;
pub use self::common::{FilterValue, Query};

mod party;
pub use self::party::PartyQuery;

mod list;
pub use self::list::ListQuery;

mod candidate;
pub use self::candidate::CandidateQuery;

mod responder;
pub use self::responder::ResponderQuery;
