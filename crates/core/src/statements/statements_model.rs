use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockbase_market_data::LineItems;

/// Fields identifying a filing, shared by every statement record.
///
/// Statements are unique by `(symbols, start_date, end_date, timeframe)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementHeader {
    /// Tickers of the filer joined with `,`.
    pub symbols: String,
    pub company_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub filing_date: Option<NaiveDate>,
    pub fiscal_year: Option<i32>,
    pub timeframe: String,
    pub fiscal_period: String,
}

/// Declares a statement record: the header plus one `Option<f64>` per line
/// item, named after the vendor's key.
macro_rules! statement_record {
    ($(#[$meta:meta])* $name:ident { $($field:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            pub header: StatementHeader,
            $(pub $field: Option<f64>,)+
        }

        impl $name {
            /// Vendor keys of the line items this record keeps.
            pub const LINE_ITEMS: &'static [&'static str] = &[$(stringify!($field)),+];

            /// Picks the known line items out of `items`; unknown keys are ignored.
            pub fn from_line_items(header: StatementHeader, items: &LineItems) -> Self {
                Self {
                    header,
                    $($field: items.get(stringify!($field)).and_then(|point| point.value),)+
                }
            }

            /// Number of line items that carry a value.
            pub fn reported_items(&self) -> usize {
                [$(self.$field.is_some()),+].iter().filter(|present| **present).count()
            }
        }
    };
}

statement_record! {
    BalanceSheet {
        assets,
        capitalization,
        commitments_and_contingencies,
        current_assets,
        current_liabilities,
        equity,
        equity_attributable_to_noncontrolling_interest,
        equity_attributable_to_parent,
        fixed_assets,
        liabilities,
        liabilities_and_equity,
        long_term_debt,
        noncurrent_assets,
        noncurrent_liabilities,
        other_noncurrent_assets_of_regulated_entity,
        other_noncurrent_liabilities_of_regulated_entity,
        other_than_fixed_noncurrent_assets,
        public_utilities_property_plant_and_equipment_net,
        redeemable_noncontrolling_interest,
        redeemable_noncontrolling_interest_common,
        redeemable_noncontrolling_interest_other,
        redeemable_noncontrolling_interest_preferred,
        temporary_equity,
        temporary_equity_attributable_to_parent,
    }
}

statement_record! {
    CashFlowStatement {
        exchange_gains_losses,
        net_cash_flow,
        net_cash_flow_continuing,
        net_cash_flow_discontinued,
        net_cash_flow_from_financing_activities,
        net_cash_flow_from_financing_activities_continuing,
        net_cash_flow_from_financing_activities_discontinued,
        net_cash_flow_from_investing_activities,
        net_cash_flow_from_investing_activities_continuing,
        net_cash_flow_from_investing_activities_discontinued,
        net_cash_flow_from_operating_activities,
        net_cash_flow_from_operating_activities_continuing,
        net_cash_flow_from_operating_activities_discontinued,
    }
}

statement_record! {
    ComprehensiveIncomeStatement {
        comprehensive_income_loss,
        comprehensive_income_loss_attributable_to_noncontrolling_interest,
        comprehensive_income_loss_attributable_to_parent,
        other_comprehensive_income_loss,
        other_comprehensive_income_loss_attributable_to_noncontrolling_interest,
        other_comprehensive_income_loss_attributable_to_parent,
    }
}

statement_record! {
    IncomeStatement {
        benefits_costs_and_expenses,
        cost_of_revenue,
        cost_of_revenue_goods,
        cost_of_revenue_services,
        costs_and_expenses,
        extraordinary_items_of_income_expense_net_of_tax,
        gain_loss_on_disposition_of_stock_in_subsidiary_or_equity_method_investee,
        gain_loss_on_sale_of_previouslyunissued_stock_by_subsidiary_or_equity_investee_nonoperating_income,
        gain_loss_on_sale_of_properties_net_of_tax,
        grossprofit,
        income_loss_before_equity_method_investments,
        income_loss_from_continuing_operations_after_tax,
        income_loss_from_continuing_operations_before_tax,
        income_loss_from_discontinued_operations_net_of_tax,
        income_loss_from_discontinued_operations_net_of_tax_adjustment_to_prior_year_gain_loss_on_disposal,
        income_loss_from_discontinued_operations_net_of_tax_during_phase_out,
        income_loss_from_discontinued_operations_net_of_tax_gain_loss_on_disposal,
        income_loss_from_discontinued_operations_net_of_tax_provision_for_gain_loss_on_disposal,
        income_loss_from_equity_method_investments,
        income_tax_expense_benefit,
        income_tax_expense_benefit_current,
        income_tax_expense_benefit_deferred,
        indirect_operating_and_nonoperating_costs_and_expenses,
        interest_and_debt_expense,
        interest_and_dividend_income_operating,
        interest_expense,
        interest_expense_operating,
        interest_income_expense_after_provision_for_losses,
        interest_income_expense_operating_net,
        net_income_loss,
        net_income_loss_attributable_to_noncontrolling_interest,
        net_income_loss_attributable_to_noncontrolling_interest_plus_preferred_stock_dividends_and_other_adjustments,
        net_income_loss_attributable_to_nonredeemable_noncontrolling_interest,
        net_income_loss_attributable_to_parent,
        net_income_loss_attributable_to_redeemable_noncontrolling_interest,
        net_income_loss_available_to_common_stockholders_basic,
        noninterest_expense,
        noninterest_income,
        nonoperating_gains_losses,
        nonoperating_income_expense,
        nonoperating_income_loss_plus_interest_and_debt_expense,
        nonoperating_income_loss_plus_interest_and_debt_expense_plus_income_loss_from_equity_method_investments,
        operating_and_nonoperating_costs_and_expenses,
        operating_and_nonoperating_revenues,
        operating_expenses,
        operating_income_loss,
        other_operating_income_expenses,
        participating_securities_distributed_and_undistributed_earnings_loss_basic,
        preferred_stock_dividends_and_other_adjustments,
        provision_for_loan_lease_and_other_losses,
        revenues,
        revenues_excluding_interest_and_dividends,
        revenues_net_of_interest_expense,
        undistributed_earnings_loss_allocated_to_participating_securities_basic,
    }
}

/// The statements mapped from one filing. Absent statements are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialStatements {
    pub balance_sheet: Option<BalanceSheet>,
    pub cash_flow_statement: Option<CashFlowStatement>,
    pub comprehensive_income_statement: Option<ComprehensiveIncomeStatement>,
    pub income_statement: Option<IncomeStatement>,
}

impl FinancialStatements {
    /// Number of statement records present.
    pub fn len(&self) -> usize {
        [
            self.balance_sheet.is_some(),
            self.cash_flow_statement.is_some(),
            self.comprehensive_income_statement.is_some(),
            self.income_statement.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
