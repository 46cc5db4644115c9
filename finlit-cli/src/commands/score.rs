use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::Args;
use finlit_core::calculations::scoring::{
    self, AttributeValue, Candidate, Criterion, CriterionKind,
};
use rust_decimal::Decimal;
use tracing::warn;

#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Candidates CSV: first column is the option name, every other column a
    /// numeric criterion.
    #[arg(long)]
    file: PathBuf,

    /// Criterion weight as `column=weight`, repeatable. Columns without a
    /// weight are ignored.
    #[arg(long = "weight", value_name = "NAME=WEIGHT")]
    weights: Vec<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

pub fn run(args: ScoreArgs) -> Result<()> {
    let file = File::open(&args.file)
        .with_context(|| format!("failed to open: {}", args.file.display()))?;
    let (columns, candidates) = read_candidates(file)
        .with_context(|| format!("failed to parse: {}", args.file.display()))?;

    let criteria = build_criteria(&args.weights, &columns)?;

    let ranked = scoring::rank(&criteria, &candidates)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    println!("{:>4}  {:>7}  name", "rank", "score");
    for (index, scored) in ranked.iter().enumerate() {
        println!("{:>4}  {:>7}  {}", index + 1, scored.score, scored.name);
    }
    Ok(())
}

/// Reads a candidates CSV: the header names the criteria, the first column
/// holds candidate names, and every other cell is a numeric sub-score.
fn read_candidates<R: Read>(reader: R) -> Result<(Vec<String>, Vec<Candidate>)> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers().context("missing CSV header row")?;
    if headers.len() < 2 {
        bail!("candidates CSV needs a name column and at least one criterion column");
    }
    let columns: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

    let mut candidates = Vec::new();
    for (row_index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let name = record
            .get(0)
            .ok_or_else(|| anyhow!("row {} has no name column", row_index + 1))?
            .to_string();

        let mut attributes = BTreeMap::new();
        for (column, cell) in columns.iter().zip(record.iter().skip(1)) {
            let value: Decimal = cell.trim().parse().with_context(|| {
                format!("'{name}': column '{column}' has non-numeric value '{cell}'")
            })?;
            attributes.insert(column.clone(), AttributeValue::Number(value));
        }
        candidates.push(Candidate { name, attributes });
    }

    Ok((columns, candidates))
}

/// Turns `column=weight` arguments into numeric criteria over the CSV columns.
fn build_criteria(weights: &[String], columns: &[String]) -> Result<Vec<Criterion>> {
    if weights.is_empty() {
        bail!("provide at least one --weight name=value");
    }

    let mut criteria: Vec<Criterion> = Vec::new();
    for entry in weights {
        let (name, weight) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("--weight '{entry}' is not in name=value form"))?;
        if !columns.iter().any(|c| c == name) {
            bail!("--weight names unknown column '{name}'");
        }
        if criteria.iter().any(|c| c.name == name) {
            bail!("--weight given twice for column '{name}'");
        }
        let weight: Decimal = weight
            .trim()
            .parse()
            .with_context(|| format!("--weight '{entry}' has a non-numeric value"))?;
        criteria.push(Criterion {
            name: name.to_string(),
            weight,
            kind: CriterionKind::Numeric,
        });
    }

    for column in columns {
        if !criteria.iter().any(|c| &c.name == column) {
            warn!(%column, "column has no weight and is ignored");
        }
    }

    Ok(criteria)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const TEST_CSV: &str = "name,earnings,balance\nsoftware,120000,5\nnursing,75000,6\n";

    #[test]
    fn read_candidates_parses_names_and_columns() {
        let (columns, candidates) = read_candidates(TEST_CSV.as_bytes()).unwrap();

        assert_eq!(columns, vec!["earnings".to_string(), "balance".to_string()]);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "software");
        assert_eq!(
            candidates[1].attributes.get("balance"),
            Some(&AttributeValue::Number(dec!(6)))
        );
    }

    #[test]
    fn read_candidates_rejects_non_numeric_cells() {
        let csv = "name,earnings\nsoftware,lots\n";

        assert!(read_candidates(csv.as_bytes()).is_err());
    }

    #[test]
    fn read_candidates_rejects_name_only_header() {
        let csv = "name\nsoftware\n";

        assert!(read_candidates(csv.as_bytes()).is_err());
    }

    #[test]
    fn build_criteria_maps_weight_arguments() {
        let columns = vec!["earnings".to_string(), "balance".to_string()];
        let weights = vec!["earnings=60".to_string(), "balance=40".to_string()];

        let criteria = build_criteria(&weights, &columns).unwrap();

        assert_eq!(criteria.len(), 2);
        assert_eq!(criteria[0].name, "earnings");
        assert_eq!(criteria[0].weight, dec!(60));
    }

    #[test]
    fn build_criteria_rejects_unknown_columns() {
        let columns = vec!["earnings".to_string()];
        let weights = vec!["prestige=60".to_string()];

        assert!(build_criteria(&weights, &columns).is_err());
    }

    #[test]
    fn build_criteria_rejects_repeated_columns() {
        let columns = vec!["earnings".to_string()];
        let weights = vec!["earnings=40".to_string(), "earnings=40".to_string()];

        assert!(build_criteria(&weights, &columns).is_err());
    }

    #[test]
    fn build_criteria_rejects_malformed_entries() {
        let columns = vec!["earnings".to_string()];

        assert!(build_criteria(&["earnings:60".to_string()], &columns).is_err());
        assert!(build_criteria(&["earnings=sixty".to_string()], &columns).is_err());
        assert!(build_criteria(&[], &columns).is_err());
    }

    #[test]
    fn end_to_end_ranking_from_csv() {
        let (columns, candidates) = read_candidates(TEST_CSV.as_bytes()).unwrap();
        let weights = vec!["earnings=60".to_string(), "balance=40".to_string()];
        let criteria = build_criteria(&weights, &columns).unwrap();

        let ranked = scoring::rank(&criteria, &candidates).unwrap();

        assert_eq!(ranked[0].name, "software");
        assert_eq!(ranked[0].score, dec!(93.33));
    }
}
