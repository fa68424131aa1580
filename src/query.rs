//! Dog Query
//!
//! Turns a breed selection into the `breeds` query parameter and sequences
//! the requests issued for it.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::selection::BreedSelection;

/// Name of the breed filter query parameter
pub const BREEDS_PARAM: &str = "breeds";

/// Characters left as-is inside a query value (RFC 3986 unreserved)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Server-side filter for the dog list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DogQuery {
    breeds: Vec<String>,
}

impl DogQuery {
    pub fn new(breeds: impl IntoIterator<Item = String>) -> Self {
        let mut breeds: Vec<String> = breeds.into_iter().filter(|b| !b.is_empty()).collect();
        breeds.sort();
        breeds.dedup();
        Self { breeds }
    }

    pub fn from_selection(selection: &BreedSelection) -> Self {
        Self::new(selection.selected_breeds())
    }

    pub fn breeds(&self) -> &[String] {
        &self.breeds
    }

    /// True when the server should return every dog
    pub fn is_unfiltered(&self) -> bool {
        self.breeds.is_empty()
    }

    /// `breeds=<a>,<b>` with each name percent-encoded, or `None` when the
    /// parameter must be omitted.
    pub fn to_query_string(&self) -> Option<String> {
        if self.is_unfiltered() {
            return None;
        }
        let value = self
            .breeds
            .iter()
            .map(|b| utf8_percent_encode(b, QUERY_VALUE).to_string())
            .collect::<Vec<_>>()
            .join(",");
        Some(format!("{}={}", BREEDS_PARAM, value))
    }
}

/// Sequence number carried by an issued dog request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// Hands out increasing tickets; only the latest may apply its response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}
