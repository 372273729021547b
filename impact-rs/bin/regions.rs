use std::{env, fs};

use impact::prelude::*;
use log::*;
use serde::Deserialize;

/// One region per line, estimator inputs flattened alongside the label.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    region: String,
    reported_cases: u64,
    period_type: Period,
    time_to_elapse: Days,
    total_hospital_beds: u64,
    avg_daily_income_population: Real,
    #[serde(rename = "avgDailyIncomeInUSD")]
    avg_daily_income_in_usd: Real,
}

impl Row {
    pub fn into_input(self) -> (String, EstimatorInput) {
        let region = Region::new(
            self.avg_daily_income_population,
            self.avg_daily_income_in_usd,
        );
        let input = EstimatorInput::new(
            self.reported_cases,
            self.period_type,
            self.time_to_elapse,
            self.total_hospital_beds,
            region,
        );
        (self.region, input)
    }
}

pub fn read_rows(path: &str) -> csv::Result<(Vec<String>, Vec<EstimatorInput>)> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut labels = Vec::new();
    let mut inputs = Vec::new();

    for res in reader.deserialize() {
        let row: Row = res?;
        let (label, input) = row.into_input();
        labels.push(label);
        inputs.push(input);
    }
    return Ok((labels, inputs));
}

pub fn main() {
    use simple_logger::SimpleLogger;
    SimpleLogger::new().init().unwrap();

    let path = env::args().nth(1).unwrap_or_else(|| "regions.csv".to_string());
    let (labels, inputs) = read_rows(&path).unwrap();

    let mut table = ImpactTable::new();
    for (label, result) in labels.iter().zip(estimate_many(&inputs)) {
        match result {
            Ok(est) => table.push(label.as_str(), est),
            Err(err) => warn!("skipping {}: {}", label, err),
        }
    }

    fs::write("impact.csv", table.render_csv(CSV_HEADER, ',')).unwrap();
    println!("Wrote {} of {} regions to impact.csv", table.len(), labels.len());
}
