//! End-to-end checks running the tax calculator over the bundled 2024 tables.

use finlit_core::FilingStatus;
use finlit_core::calculations::{TaxCalculator, TaxInput};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn input(gross: Decimal) -> TaxInput {
    TaxInput {
        gross_income: gross,
        pretax_contributions: dec!(0),
        state_rate_percent: dec!(0),
    }
}

#[test]
fn single_filer_75k_worked_example() {
    let tables = finlit_data::tax_tables_2024().unwrap();
    let fica = finlit_data::fica_2024();
    let calculator = TaxCalculator::new(tables.profile(FilingStatus::Single), &fica);

    let result = calculator.calculate(&input(dec!(75000))).unwrap();

    // 75,000 - 14,600 standard deduction = 60,400 taxable.
    assert_eq!(result.taxable_income, dec!(60400));
    // 11,600 @ 10% + 35,550 @ 12% + 13,250 @ 22%.
    assert_eq!(result.federal_tax, dec!(8341.00));
    assert_eq!(result.marginal_rate_percent, dec!(22));

    let bracket_sum: Decimal = result.bracket_taxes.iter().map(|b| b.tax).sum();
    assert_eq!(bracket_sum, result.federal_tax);
}

#[test]
fn joint_filers_owe_less_than_single_at_the_same_income() {
    let tables = finlit_data::tax_tables_2024().unwrap();
    let fica = finlit_data::fica_2024();

    let single = TaxCalculator::new(tables.profile(FilingStatus::Single), &fica)
        .calculate(&input(dec!(120000)))
        .unwrap();
    let joint = TaxCalculator::new(tables.profile(FilingStatus::MarriedFilingJointly), &fica)
        .calculate(&input(dec!(120000)))
        .unwrap();

    assert!(joint.federal_tax < single.federal_tax);
}

#[test]
fn every_status_computes_at_a_range_of_incomes() {
    let tables = finlit_data::tax_tables_2024().unwrap();
    let fica = finlit_data::fica_2024();

    for status in FilingStatus::ALL {
        let calculator = TaxCalculator::new(tables.profile(status), &fica);
        let mut previous = dec!(0);
        for gross in [dec!(0), dec!(30000), dec!(95000), dec!(260000), dec!(800000)] {
            let result = calculator.calculate(&input(gross)).unwrap();
            assert!(
                result.total_tax >= previous,
                "{status:?} tax decreased at gross {gross}"
            );
            previous = result.total_tax;
        }
    }
}
