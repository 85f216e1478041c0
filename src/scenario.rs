//! Transfer scenarios - load from CSV and run through the TransferService
//!
//! CSV layout (header row skipped):
//!
//! ```text
//! name,from,to,amount,expected
//! full_balance,100,0,100,ok
//! null_from,,0,100,invalid_argument
//! ```
//!
//! An empty `from`/`to` cell means the account is absent.
//! Blank lines and `#` comment lines are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::account::Account;
use crate::transfer::{TransferError, TransferService};

pub const TRANSFERS_CSV: &str = "fixtures/transfers.csv";

/// Outcome a scenario expects from the transfer call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Ok,
    InvalidArgument,
    InsufficientFunds,
}

impl Expected {
    pub fn matches(&self, result: &Result<bool, TransferError>) -> bool {
        matches!(
            (self, result),
            (Expected::Ok, Ok(true))
                | (Expected::InvalidArgument, Err(TransferError::InvalidArgument(_)))
                | (Expected::InsufficientFunds, Err(TransferError::InsufficientFunds))
        )
    }
}

impl FromStr for Expected {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ok" => Ok(Expected::Ok),
            "invalid_argument" => Ok(Expected::InvalidArgument),
            "insufficient_funds" => Ok(Expected::InsufficientFunds),
            other => bail!("unknown expected outcome: {}", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub from: Option<Decimal>,
    pub to: Option<Decimal>,
    pub amount: Decimal,
    pub expected: Expected,
}

/// Result of one scenario run, with balances captured after the call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioOutcome {
    pub result: Result<bool, TransferError>,
    pub from_after: Option<Decimal>,
    pub to_after: Option<Decimal>,
}

impl Scenario {
    pub fn run(&self, service: &TransferService) -> ScenarioOutcome {
        let mut from = self.from.map(Account::new);
        let mut to = self.to.map(Account::new);

        let result = service.transfer(from.as_mut(), to.as_mut(), self.amount);

        ScenarioOutcome {
            result,
            from_after: from.as_ref().map(Account::balance),
            to_after: to.as_ref().map(Account::balance),
        }
    }

    /// The outcome kind matches and balances obey the transfer contract:
    /// moved by exactly `amount` on success, untouched on failure.
    pub fn verify(&self, outcome: &ScenarioOutcome) -> bool {
        if !self.expected.matches(&outcome.result) {
            return false;
        }
        match outcome.result {
            Ok(_) => {
                outcome.from_after == self.from.map(|b| b - self.amount)
                    && outcome.to_after == self.to.map(|b| b + self.amount)
            }
            Err(_) => outcome.from_after == self.from && outcome.to_after == self.to,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

fn parse_balance(cell: &str) -> Result<Option<Decimal>> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }
    Ok(Some(Decimal::from_str(cell)?))
}

/// Parse scenarios from any buffered reader
pub fn parse_scenarios<R: BufRead>(reader: R) -> Result<Vec<Scenario>> {
    let mut scenarios = Vec::new();

    for (line_num, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line_no = line_num + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() != 5 {
            bail!(
                "Expected 5 columns at line {}, found {}",
                line_no,
                parts.len()
            );
        }

        let from = parse_balance(parts[1])
            .with_context(|| format!("Invalid from balance at line {}", line_no))?;
        let to = parse_balance(parts[2])
            .with_context(|| format!("Invalid to balance at line {}", line_no))?;
        let amount = Decimal::from_str(parts[3].trim())
            .with_context(|| format!("Invalid amount at line {}", line_no))?;
        let expected: Expected = parts[4]
            .parse()
            .with_context(|| format!("Invalid expected at line {}", line_no))?;

        scenarios.push(Scenario {
            name: parts[0].trim().to_string(),
            from,
            to,
            amount,
            expected,
        });
    }

    Ok(scenarios)
}

pub fn load_scenarios(path: impl AsRef<Path>) -> Result<Vec<Scenario>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    parse_scenarios(BufReader::new(file))
        .with_context(|| format!("Failed to load scenarios from {}", path.display()))
}

/// Run every scenario, logging each outcome.
pub fn run_all(
    scenarios: &[Scenario],
    service: &TransferService,
    stop_on_mismatch: bool,
) -> RunSummary {
    let mut summary = RunSummary::default();

    for scenario in scenarios {
        let outcome = scenario.run(service);
        if scenario.verify(&outcome) {
            summary.passed += 1;
            info!(
                scenario = %scenario.name,
                result = ?outcome.result,
                from = ?outcome.from_after,
                to = ?outcome.to_after,
                "scenario passed"
            );
        } else {
            summary.failed += 1;
            warn!(
                scenario = %scenario.name,
                expected = ?scenario.expected,
                result = ?outcome.result,
                from = ?outcome.from_after,
                to = ?outcome.to_after,
                "scenario mismatch"
            );
            if stop_on_mismatch {
                break;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = "\
name,from,to,amount,expected
full_balance,100,0,100,ok

# absent source
null_from,,0,100,invalid_argument
broke,0,100,100,insufficient_funds
";

    #[test]
    fn test_parse_sample() {
        let scenarios = parse_scenarios(SAMPLE.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 3);

        assert_eq!(scenarios[0].name, "full_balance");
        assert_eq!(scenarios[0].from, Some(dec!(100)));
        assert_eq!(scenarios[0].expected, Expected::Ok);

        assert_eq!(scenarios[1].from, None);
        assert_eq!(scenarios[1].to, Some(dec!(0)));
        assert_eq!(scenarios[2].expected, Expected::InsufficientFunds);
    }

    #[test]
    fn test_parse_reports_line_number() {
        let csv = "name,from,to,amount,expected\nok_row,1,1,1,ok\nbad,1,1,abc,ok\n";
        let err = parse_scenarios(csv.as_bytes()).unwrap_err();
        assert!(format!("{:#}", err).contains("line 3"));
    }

    #[test]
    fn test_parse_rejects_wrong_column_count() {
        let csv = "name,from,to,amount,expected\nshort,1,1,ok\n";
        assert!(parse_scenarios(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_expected_from_str() {
        assert_eq!("OK".parse::<Expected>().unwrap(), Expected::Ok);
        assert_eq!(
            " insufficient_funds ".parse::<Expected>().unwrap(),
            Expected::InsufficientFunds
        );
        assert!("boom".parse::<Expected>().is_err());
    }

    #[test]
    fn test_run_all_counts() {
        let scenarios = parse_scenarios(SAMPLE.as_bytes()).unwrap();
        let summary = run_all(&scenarios, &TransferService::new(), false);
        assert_eq!(summary, RunSummary { passed: 3, failed: 0 });
        assert!(summary.all_passed());
    }

    #[test]
    fn test_wrong_expectation_is_mismatch() {
        let scenario = Scenario {
            name: "wrong".into(),
            from: Some(dec!(0)),
            to: Some(dec!(0)),
            amount: dec!(5),
            expected: Expected::Ok,
        };
        let outcome = scenario.run(&TransferService);
        assert_eq!(outcome.result, Err(TransferError::InsufficientFunds));
        assert!(!scenario.verify(&outcome));
    }

    #[test]
    fn test_stop_on_mismatch() {
        let bad = Scenario {
            name: "bad".into(),
            from: None,
            to: None,
            amount: dec!(1),
            expected: Expected::Ok,
        };
        let scenarios = vec![bad.clone(), bad];

        let summary = run_all(&scenarios, &TransferService, true);
        assert_eq!(summary.failed, 1);

        let summary = run_all(&scenarios, &TransferService, false);
        assert_eq!(summary.failed, 2);
    }
}
