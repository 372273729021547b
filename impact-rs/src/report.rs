//! CSV rendering of estimation results.

use crate::{
    estimator::{Estimate, Impact},
    scenario::Scenario,
};

/// Column names matching [`ImpactTable::render_csv`] output.
pub const CSV_HEADER: &str = "region,scenario,currentlyInfected,infectionsByRequestedTime,\
severeCasesByRequestedTime,hospitalBedsByRequestedTime,casesForICUByRequestedTime,\
casesForVentilatorsByRequestedTime,dollarsInFlight";

impl Impact {
    /// Render the record as a CSV fragment with fields joined by `sep`.
    pub fn csv(&self, sep: char) -> String {
        [
            self.currently_infected().to_string(),
            self.infections_by_requested_time().to_string(),
            self.severe_cases_by_requested_time().to_string(),
            self.hospital_beds_by_requested_time().to_string(),
            self.cases_for_icu_by_requested_time().to_string(),
            self.cases_for_ventilators_by_requested_time().to_string(),
            self.dollars_in_flight().to_string(),
        ]
        .join(&sep.to_string())
    }
}

/// Accumulates labelled estimates and renders them as a CSV table.
#[derive(Debug, Clone, Default)]
pub struct ImpactTable {
    rows: Vec<(String, Estimate)>,
}

impl ImpactTable {
    pub fn new() -> Self {
        ImpactTable { rows: vec![] }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append one labelled estimate.
    pub fn push(&mut self, label: impl Into<String>, estimate: Estimate) {
        self.rows.push((label.into(), estimate));
    }

    /// Render the table as CSV data, two rows per estimate (one per
    /// scenario).
    pub fn render_csv(&self, head: &str, sep: char) -> String {
        let mut data = head.to_string();

        for (label, estimate) in &self.rows {
            for scenario in [Scenario::Normal, Scenario::Severe] {
                data.push('\n');
                data.push_str(label);
                data.push(sep);
                data.push_str(scenario.label());
                data.push(sep);
                data.push_str(&estimate.impact_for(scenario).csv(sep));
            }
        }
        return data;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        estimator::estimate,
        input::{EstimatorInput, Region},
        period::Period,
    };

    fn example_estimate() -> Estimate {
        let input = EstimatorInput::new(10, Period::Days, 30, 10_000, Region::new(0.6, 1.5));
        estimate(&input).unwrap()
    }

    #[test]
    fn header_leads_with_the_row_labels() {
        let columns: Vec<&str> = CSV_HEADER.split(',').collect();
        assert_eq!(columns.len(), 9);
        assert_eq!(columns[0], "region");
        assert_eq!(columns[1], "scenario");
        assert_eq!(columns[4], "severeCasesByRequestedTime");
        assert_eq!(columns[8], "dollarsInFlight");
    }

    #[test]
    fn impact_row_joins_every_field() {
        let est = example_estimate();
        assert_eq!(est.impact().csv(','), "100,102400,15360,-11860,5120,2048,2764800");
        assert_eq!(
            est.severe_impact().csv(';'),
            "500;512000;76800;-73300;25600;10240;13824000"
        );
    }

    #[test]
    fn table_renders_two_rows_per_estimate() {
        let mut table = ImpactTable::new();
        assert!(table.is_empty());
        table.push("Nigeria", example_estimate());
        assert_eq!(table.len(), 1);

        let data = table.render_csv(CSV_HEADER, ',');
        let lines: Vec<&str> = data.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "Nigeria,impact,100,102400,15360,-11860,5120,2048,2764800");
        assert_eq!(
            lines[2],
            "Nigeria,severeImpact,500,512000,76800,-73300,25600,10240,13824000"
        );
    }

    #[test]
    fn empty_table_is_just_the_header() {
        let table = ImpactTable::new();
        assert_eq!(table.render_csv(CSV_HEADER, ','), CSV_HEADER);
    }
}
