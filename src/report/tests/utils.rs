use crate::route::RoutePair;
use crate::ticket::{AirportCode, Ticket, TicketSet};
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;

pub fn ticket(
    origin: &str,
    destination: &str,
    carrier: &str,
    departure_time: &str,
    arrival_time: &str,
    price: Option<i64>,
) -> Ticket {
    Ticket {
        origin: AirportCode::from(origin),
        destination: AirportCode::from(destination),
        carrier: carrier.into(),
        departure_time: Some(departure_time.to_string()),
        arrival_time: Some(arrival_time.to_string()),
        price,
    }
}

pub fn ticket_set(tickets: Vec<Option<Ticket>>) -> TicketSet {
    TicketSet { tickets }
}

pub fn default_route() -> RoutePair {
    RoutePair::new("VVO", "TLV")
}

pub fn arb_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("VVO"), Just("TLV"), Just("LED"), Just("UFA")]
}

pub fn arb_time() -> impl Strategy<Value = String> {
    prop_oneof![
        (0..24u32, 0..60u32).prop_map(|(h, m)| format!("{}:{:02}", h, m)),
        Just("bad".to_string()),
        Just("25:00".to_string()),
    ]
}

pub fn arb_ticket() -> impl Strategy<Value = Option<Ticket>> {
    let ticket = (
        arb_code(),
        arb_code(),
        prop_oneof![Just("S7"), Just("SU"), Just("TK")],
        arb_time(),
        arb_time(),
        proptest::option::of(-1_000..50_000i64),
    )
        .prop_map(|(org, dst, carrier, dep, arr, price)| {
            ticket(org, dst, carrier, &dep, &arr, price)
        });
    prop_oneof![9 => ticket.prop_map(Some), 1 => Just(None)]
}
