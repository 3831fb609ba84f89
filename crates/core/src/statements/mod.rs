//! Financial statements - the four statement records sharing one header.
//!
//! A vendor filing carries up to four statements. Each is stored as a flat
//! record: the [`StatementHeader`] identifying the filing plus that
//! statement's nullable line items.

mod statements_model;
mod statements_traits;

pub use statements_model::{
    BalanceSheet, CashFlowStatement, ComprehensiveIncomeStatement, FinancialStatements,
    IncomeStatement, StatementHeader,
};
pub use statements_traits::StatementStore;
