//! CSV batch quoting.
//!
//! Reads trips from a CSV file, quotes each one in turn and writes the input
//! row back out with the polyline, costs, toll query time and any error
//! appended. A failing row never stops the run.

mod error;

use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;

use csv::StringRecord;
use tracing::{info, warn};

use crate::domain::Location;
use crate::pipeline::{Geocoder, PipelineError, RouteProvider, TollPricer, TollQuoter};
use crate::tollguru::TollCosts;

pub use error::BatchError;

/// Columns appended to every input row.
pub const OUTPUT_COLUMNS: [&str; 5] = ["polyline", "tag_cost", "cash_cost", "query_time_secs", "error"];

/// Outcome counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Where the trip fields sit in the input rows.
#[derive(Debug, Clone, Copy)]
struct Columns {
    source: usize,
    destination: usize,
    vehicle: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, BatchError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        Ok(Self {
            source: find("source").ok_or(BatchError::MissingColumn("source"))?,
            destination: find("destination").ok_or(BatchError::MissingColumn("destination"))?,
            vehicle: find("vehicle_type"),
        })
    }
}

/// Result cells for one row.
#[derive(Debug, Default)]
struct RowOutcome {
    polyline: String,
    costs: Option<TollCosts>,
    query_time_secs: Option<f64>,
    error: Option<String>,
}

impl RowOutcome {
    fn cells(&self) -> [String; 5] {
        let cost = |amount: Option<f64>| amount.map(|v| v.to_string()).unwrap_or_default();
        [
            self.polyline.clone(),
            cost(self.costs.as_ref().and_then(TollCosts::tag)),
            cost(self.costs.as_ref().and_then(TollCosts::cash)),
            self.query_time_secs
                .map(|t| format!("{t:.3}"))
                .unwrap_or_default(),
            self.error.clone().unwrap_or_default(),
        ]
    }
}

/// Quote every row of `input` and write the results to `output`.
pub async fn run<P, T, R, W>(
    quoter: &TollQuoter<P, T>,
    input: R,
    output: W,
) -> Result<BatchSummary, BatchError>
where
    P: Geocoder + RouteProvider,
    T: TollPricer,
    R: Read,
    W: Write,
{
    let mut reader = csv::Reader::from_reader(input);
    let mut writer = csv::Writer::from_writer(output);

    let headers = reader.headers()?.clone();
    let columns = Columns::from_headers(&headers)?;

    let mut out_headers = headers.clone();
    out_headers.extend(OUTPUT_COLUMNS);
    writer.write_record(&out_headers)?;

    let mut summary = BatchSummary::default();
    for record in reader.records() {
        let record = record?;
        summary.rows += 1;

        let outcome = quote_row(quoter, &record, columns).await;
        match &outcome.error {
            None => summary.succeeded += 1,
            Some(message) => {
                warn!(row = summary.rows, error = %message, "row failed");
                summary.failed += 1;
            }
        }

        let mut row = record.clone();
        row.extend(outcome.cells());
        writer.write_record(&row)?;
    }

    writer.flush()?;
    info!(
        rows = summary.rows,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "batch finished"
    );
    Ok(summary)
}

/// Run a batch from one CSV file into another.
pub async fn run_files<P, T>(
    quoter: &TollQuoter<P, T>,
    input: &Path,
    output: &Path,
) -> Result<BatchSummary, BatchError>
where
    P: Geocoder + RouteProvider,
    T: TollPricer,
{
    let input = std::fs::File::open(input)?;
    let output = std::fs::File::create(output)?;
    run(quoter, input, output).await
}

async fn quote_row<P, T>(
    quoter: &TollQuoter<P, T>,
    record: &StringRecord,
    columns: Columns,
) -> RowOutcome
where
    P: Geocoder + RouteProvider,
    T: TollPricer,
{
    let field = |index: usize| record.get(index).unwrap_or_default();

    let Ok(source) = field(columns.source).parse::<Location>();
    let Ok(destination) = field(columns.destination).parse::<Location>();
    let vehicle_code = columns
        .vehicle
        .map(field)
        .map(str::trim)
        .filter(|code| !code.is_empty());
    let vehicle = quoter.vehicle(vehicle_code);

    let resolution = match quoter.resolve(&source, &destination, &vehicle).await {
        Ok(resolution) => resolution,
        Err(e) => return failed(RowOutcome::default(), e),
    };

    let mut outcome = RowOutcome {
        polyline: resolution.polyline.clone(),
        ..RowOutcome::default()
    };

    let started = Instant::now();
    let priced = quoter.price(&resolution, &vehicle).await;
    outcome.query_time_secs = Some(started.elapsed().as_secs_f64());

    match priced {
        Ok(costs) => {
            outcome.costs = Some(costs);
            outcome
        }
        Err(e) => failed(outcome, e),
    }
}

fn failed(mut outcome: RowOutcome, error: PipelineError) -> RowOutcome {
    outcome.error = Some(error.to_string());
    outcome
}
