use crate::config::ReportConfig;
use crate::report::aggregate::{min_duration_by_carrier, sorted_prices};
use crate::report::stats::PriceStats;
use crate::route::RoutePair;
use crate::ticket::{CarrierId, TicketSet, TimedTicket};
use crate::time::FlightDuration;
use clap::ValueEnum;
use std::fmt::Write;
use tabled::Tabled;
use tabled::settings::{Alignment, Style};
use tracing::{debug, warn};

pub mod aggregate;
pub mod stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Table,
}

#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct CarrierMinimum {
    #[tabled(rename = "Carrier")]
    pub carrier: CarrierId,
    #[tabled(rename = "Minimum flight time")]
    pub duration: FlightDuration,
}

#[derive(Tabled)]
struct PriceRow {
    #[tabled(rename = "Price")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub route: RoutePair,
    /// Tickets flying the route in either direction.
    pub matched: usize,
    pub invalid_times: usize,
    /// Tickets with a known duration but no price.
    pub missing_prices: usize,
    /// Sorted by carrier.
    pub carriers: Vec<CarrierMinimum>,
    pub prices: Option<PriceStats>,
}

impl Report {
    pub fn build(tickets: &TicketSet, config: &ReportConfig) -> Report {
        let matched = config.route.filter(&tickets.tickets);
        let timed = matched
            .iter()
            .map(|t| TimedTicket::new(t, config.time_pattern))
            .collect::<Vec<_>>();
        debug!(total = tickets.tickets.len(), matched = timed.len(), route = %config.route, "filtered tickets");

        timed.iter().filter(|t| !t.duration.is_valid()).for_each(|t| {
            warn!(
                carrier = %t.ticket.carrier,
                departure = ?t.ticket.departure_time,
                arrival = ?t.ticket.arrival_time,
                pattern = %config.time_pattern,
                "unparseable flight time, ticket excluded"
            )
        });
        let invalid_times = timed.iter().filter(|t| !t.duration.is_valid()).count();
        let missing_prices = timed
            .iter()
            .filter(|t| t.duration.is_valid() && t.ticket.price.is_none())
            .count();

        let mut carriers = min_duration_by_carrier(&timed)
            .into_iter()
            .map(|(carrier, minutes)| CarrierMinimum {
                carrier,
                duration: FlightDuration::Valid(minutes),
            })
            .collect::<Vec<_>>();
        carriers.sort_by(|a, b| a.carrier.cmp(&b.carrier));

        Report {
            route: config.route.clone(),
            matched: timed.len(),
            invalid_times,
            missing_prices,
            carriers,
            prices: PriceStats::from_sorted(&sorted_prices(&timed)),
        }
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.to_string(),
            OutputFormat::Table => TableView(self).to_string(),
        }
    }

    fn write_diagnostics(&self, f: &mut impl Write) -> std::fmt::Result {
        if self.invalid_times > 0 {
            writeln!(
                f,
                "Skipped {} with unparseable departure or arrival time",
                count_tickets(self.invalid_times)
            )?;
        }
        if self.missing_prices > 0 {
            writeln!(f, "Skipped {} without a price", count_tickets(self.missing_prices))?;
        }
        Ok(())
    }
}

fn count_tickets(n: usize) -> String {
    if n == 1 { "1 ticket".to_string() } else { format!("{} tickets", n) }
}

/// Same content as the text report, as rounded `tabled` tables.
struct TableView<'a>(&'a Report);

impl std::fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let report = self.0;
        if report.matched == 0 {
            return writeln!(f, "No tickets found between {}", report.route);
        }

        if report.carriers.is_empty() {
            writeln!(f, "No carrier has a valid flight duration")?;
        } else {
            let mut table = tabled::Table::new(&report.carriers);
            table.with(Style::rounded());
            table.with(Alignment::left());
            writeln!(f, "{}", table)?;
        }

        match &report.prices {
            Some(stats) => {
                let rows = vec![
                    PriceRow { metric: "Average", value: format!("{:.2}", stats.mean) },
                    PriceRow { metric: "Median", value: format!("{:.2}", stats.median) },
                    PriceRow { metric: "Average - median", value: format!("{:.2}", stats.difference) },
                ];
                let mut table = tabled::Table::new(rows);
                table.with(Style::rounded());
                table.with(Alignment::left());
                writeln!(f, "{}", table)?;
            }
            None => writeln!(f, "No price data available")?,
        }
        report.write_diagnostics(f)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.matched == 0 {
            return writeln!(f, "No tickets found between {}", self.route);
        }

        writeln!(f, "Minimum flight time between {} for each carrier:", self.route)?;
        if self.carriers.is_empty() {
            writeln!(f, "No carrier has a valid flight duration")?;
        }
        for row in &self.carriers {
            writeln!(f, "{}: {}", row.carrier, row.duration)?;
        }

        match &self.prices {
            Some(stats) => {
                writeln!(f, "Average price: {:.2}", stats.mean)?;
                writeln!(f, "Median price: {:.2}", stats.median)?;
                writeln!(f, "Difference between average and median price: {:.2}", stats.difference)?;
            }
            None => writeln!(f, "No price data available")?,
        }

        self.write_diagnostics(f)
    }
}
