mod language;
pub use self::language::Language;

mod resource;
pub use self::resource::{
    CandidateID, ConstituencyID, ElectionID, ListID, PartyID, Resource, Resources, ResponderID,
};

mod token;
pub(crate) use self::token::TokenResponse;
