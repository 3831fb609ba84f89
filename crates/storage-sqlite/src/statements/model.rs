//! Database models for financial statements.
//!
//! Every statement table repeats the filing header columns. Each table gets
//! its own header struct, embedded into the row structs with
//! `#[diesel(embed)]`.

use chrono::NaiveDate;
use diesel::prelude::*;

use stockbase_core::statements::{
    BalanceSheet, CashFlowStatement, ComprehensiveIncomeStatement, IncomeStatement,
    StatementHeader,
};

/// Number of header columns written per statement row.
pub const HEADER_COLUMNS: usize = 8;

macro_rules! statement_rows {
    (
        table: $table:ident,
        record: $Record:ident,
        header: $Header:ident,
        row: $Row:ident,
        new_row: $NewRow:ident,
        items: { $($field:ident),+ $(,)? }
    ) => {
        #[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
        #[diesel(table_name = crate::schema::$table)]
        #[diesel(check_for_backend(diesel::sqlite::Sqlite))]
        pub struct $Header {
            pub symbols: String,
            pub company_name: String,
            pub start_date: NaiveDate,
            pub end_date: NaiveDate,
            pub filing_date: Option<NaiveDate>,
            pub fiscal_year: Option<i32>,
            pub timeframe: String,
            pub fiscal_period: String,
        }

        #[derive(Queryable, Selectable, Debug, Clone)]
        #[diesel(table_name = crate::schema::$table)]
        #[diesel(check_for_backend(diesel::sqlite::Sqlite))]
        pub struct $Row {
            pub id: i32,
            #[diesel(embed)]
            pub header: $Header,
            $(pub $field: Option<f64>,)+
        }

        #[derive(Insertable, Debug, Clone)]
        #[diesel(table_name = crate::schema::$table)]
        pub struct $NewRow {
            #[diesel(embed)]
            pub header: $Header,
            $(pub $field: Option<f64>,)+
        }

        impl $NewRow {
            pub const COLUMNS: usize = HEADER_COLUMNS + $Record::LINE_ITEMS.len();
        }

        impl From<StatementHeader> for $Header {
            fn from(header: StatementHeader) -> Self {
                Self {
                    symbols: header.symbols,
                    company_name: header.company_name,
                    start_date: header.start_date,
                    end_date: header.end_date,
                    filing_date: header.filing_date,
                    fiscal_year: header.fiscal_year,
                    timeframe: header.timeframe,
                    fiscal_period: header.fiscal_period,
                }
            }
        }

        impl From<$Header> for StatementHeader {
            fn from(db: $Header) -> Self {
                Self {
                    symbols: db.symbols,
                    company_name: db.company_name,
                    start_date: db.start_date,
                    end_date: db.end_date,
                    filing_date: db.filing_date,
                    fiscal_year: db.fiscal_year,
                    timeframe: db.timeframe,
                    fiscal_period: db.fiscal_period,
                }
            }
        }

        impl From<$Record> for $NewRow {
            fn from(record: $Record) -> Self {
                Self {
                    header: record.header.into(),
                    $($field: record.$field,)+
                }
            }
        }

        impl From<$Row> for $Record {
            fn from(row: $Row) -> Self {
                Self {
                    header: row.header.into(),
                    $($field: row.$field,)+
                }
            }
        }
    };
}

statement_rows! {
    table: balance_sheet,
    record: BalanceSheet,
    header: BalanceSheetHeaderDB,
    row: BalanceSheetDB,
    new_row: NewBalanceSheetDB,
    items: {
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

statement_rows! {
    table: cash_flow_statement,
    record: CashFlowStatement,
    header: CashFlowStatementHeaderDB,
    row: CashFlowStatementDB,
    new_row: NewCashFlowStatementDB,
    items: {
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

statement_rows! {
    table: comprehensive_income_statement,
    record: ComprehensiveIncomeStatement,
    header: ComprehensiveIncomeStatementHeaderDB,
    row: ComprehensiveIncomeStatementDB,
    new_row: NewComprehensiveIncomeStatementDB,
    items: {
        comprehensive_income_loss,
        comprehensive_income_loss_attributable_to_noncontrolling_interest,
        comprehensive_income_loss_attributable_to_parent,
        other_comprehensive_income_loss,
        other_comprehensive_income_loss_attributable_to_noncontrolling_interest,
        other_comprehensive_income_loss_attributable_to_parent,
    }
}

statement_rows! {
    table: income_statement,
    record: IncomeStatement,
    header: IncomeStatementHeaderDB,
    row: IncomeStatementDB,
    new_row: NewIncomeStatementDB,
    items: {
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
