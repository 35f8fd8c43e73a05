use crate::ticket::{AirportCode, Ticket};
use std::fmt;
use tracing::debug;

/// Two location codes; a ticket flying in either direction between them matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePair {
    pub first: AirportCode,
    pub second: AirportCode,
}

impl RoutePair {
    pub fn new(first: &str, second: &str) -> RoutePair {
        RoutePair {
            first: AirportCode::from(first),
            second: AirportCode::from(second),
        }
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        (ticket.origin == self.first && ticket.destination == self.second)
            || (ticket.origin == self.second && ticket.destination == self.first)
    }

    /// Matching tickets in input order. Absent records are skipped.
    pub fn filter<'a>(&self, tickets: &'a [Option<Ticket>]) -> Vec<&'a Ticket> {
        let present = tickets.iter().flatten().count();
        if present < tickets.len() {
            debug!(dropped = tickets.len() - present, "skipping null ticket records");
        }
        tickets
            .iter()
            .flatten()
            .filter(|t| self.matches(t))
            .collect()
    }
}

impl Default for RoutePair {
    fn default() -> Self {
        RoutePair::new("VVO", "TLV")
    }
}

impl fmt::Display for RoutePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and {}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(origin: &str, destination: &str, carrier: &str) -> Option<Ticket> {
        Some(Ticket {
            origin: AirportCode::from(origin),
            destination: AirportCode::from(destination),
            carrier: carrier.into(),
            departure_time: Some("10:00".to_string()),
            arrival_time: Some("12:00".to_string()),
            price: Some(100),
        })
    }

    #[test]
    fn test_both_directions_in_order() {
        let tickets = vec![
            ticket("TLV", "VVO", "A"),
            ticket("VVO", "UFA", "B"),
            None,
            ticket("VVO", "TLV", "C"),
            ticket("LRN", "TLV", "D"),
        ];
        let route = RoutePair::default();
        let carriers = route
            .filter(&tickets)
            .iter()
            .map(|t| t.carrier.to_string())
            .collect::<Vec<_>>();

        assert_eq!(vec!["A", "C"], carriers);
    }

    #[test]
    fn test_same_code_both_ends_does_not_match() {
        let route = RoutePair::default();
        assert!(!route.matches(ticket("VVO", "VVO", "A").as_ref().unwrap()));
        assert!(!route.matches(ticket("TLV", "TLV", "A").as_ref().unwrap()));
    }

    #[test]
    fn test_only_nulls() {
        let tickets: Vec<Option<Ticket>> = vec![None, None];
        assert!(RoutePair::default().filter(&tickets).is_empty());
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert!(!RoutePair::default().matches(ticket("vvo", "tlv", "A").as_ref().unwrap()));
    }
}
