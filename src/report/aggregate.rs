use crate::ticket::{CarrierId, TimedTicket};
use std::collections::HashMap;

/// Shortest valid flight time per carrier. Carriers whose every ticket has
/// an unknown duration do not appear.
pub fn min_duration_by_carrier(tickets: &[TimedTicket<'_>]) -> HashMap<CarrierId, u64> {
    let mut minima = HashMap::<CarrierId, u64>::new();
    tickets
        .iter()
        .filter_map(|t| t.duration.minutes().map(|m| (&t.ticket.carrier, m)))
        .for_each(|(carrier, minutes)| {
            minima
                .entry(carrier.clone())
                .and_modify(|current| *current = (*current).min(minutes))
                .or_insert(minutes);
        });
    minima
}

/// Ascending prices of tickets with a known duration and a price.
pub fn sorted_prices(tickets: &[TimedTicket<'_>]) -> Vec<i64> {
    let mut prices = tickets
        .iter()
        .filter(|t| t.duration.is_valid())
        .filter_map(|t| t.ticket.price)
        .collect::<Vec<i64>>();
    prices.sort_unstable();
    prices
}
