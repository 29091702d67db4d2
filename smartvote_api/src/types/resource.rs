//! Opaque response shapes and identifier aliases.
//!
//! Domain objects are returned exactly as the API sends them; the client
//! only distinguishes single records from collections.

use serde_json::{Map, Value};

/// A single record (election, constituency, party, list, candidate, ...).
pub type Resource = Map<String, Value>;

/// A collection endpoint's response.
pub type Resources = Vec<Resource>;

/// Unique identifier for an election. Upstream identifiers exceed 32 bits.
pub type ElectionID = i64;

/// Unique identifier for a constituency (e.g. 18800000004).
pub type ConstituencyID = i64;

/// Unique identifier for a party.
pub type PartyID = i64;

/// Unique identifier for a candidate list.
pub type ListID = i64;

/// Unique identifier for a candidate.
pub type CandidateID = i64;

/// Identifier of a responder: a candidate or a list, which share one id space.
pub type ResponderID = i64;
