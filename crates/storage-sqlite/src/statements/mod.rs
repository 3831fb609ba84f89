//! SQLite storage implementation for the four financial statement tables.

mod model;
mod repository;

pub use model::{
    BalanceSheetDB, BalanceSheetHeaderDB, CashFlowStatementDB, CashFlowStatementHeaderDB,
    ComprehensiveIncomeStatementDB, ComprehensiveIncomeStatementHeaderDB, IncomeStatementDB,
    IncomeStatementHeaderDB, NewBalanceSheetDB, NewCashFlowStatementDB,
    NewComprehensiveIncomeStatementDB, NewIncomeStatementDB,
};
pub use repository::StatementRepository;
