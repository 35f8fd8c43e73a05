use crate::error::Error;
use crate::route::RoutePair;
use crate::time::TimePattern;

/// Knobs of one report run. `Default` is the Vladivostok - Tel Aviv
/// corridor with `H:mm` times.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportConfig {
    pub route: RoutePair,
    pub time_pattern: TimePattern,
}

impl ReportConfig {
    pub fn new(origin: &str, destination: &str, time_pattern: TimePattern) -> Result<Self, Error> {
        let origin = origin.trim();
        let destination = destination.trim();
        if origin.is_empty() || destination.is_empty() {
            return Err(Error::InvalidConfig("location codes must not be empty".to_string()));
        }
        if origin == destination {
            return Err(Error::InvalidConfig(format!(
                "route needs two distinct location codes, got {} twice",
                origin
            )));
        }
        Ok(ReportConfig {
            route: RoutePair::new(origin, destination),
            time_pattern,
        })
    }
}
