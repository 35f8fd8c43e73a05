use crate::error::Error;
use crate::time::{FlightDuration, TimePattern, flight_duration};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

pub type AirportCode = Arc<str>;
pub type CarrierId = Arc<str>;

/// One flight offer. Fields the report does not use (airport names, dates,
/// stops) are ignored on load. A missing, `null` or mistyped time or price
/// becomes `None` so only that ticket drops out of the report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub carrier: CarrierId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub departure_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub arrival_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub price: Option<i64>,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_integer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|v| v.as_i64()))
}

/// A ticket annotated with its computed flight time.
#[derive(Clone, Debug, PartialEq)]
pub struct TimedTicket<'a> {
    pub ticket: &'a Ticket,
    pub duration: FlightDuration,
}

impl<'a> TimedTicket<'a> {
    pub fn new(ticket: &'a Ticket, pattern: TimePattern) -> Self {
        let duration = match (&ticket.departure_time, &ticket.arrival_time) {
            (Some(dep), Some(arr)) => flight_duration(dep, arr, pattern),
            _ => FlightDuration::Invalid,
        };
        TimedTicket { ticket, duration }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketSet {
    /// `null` entries are kept here and dropped by the route filter.
    pub tickets: Vec<Option<Ticket>>,
}

impl TicketSet {
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
