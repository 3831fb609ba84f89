use async_trait::async_trait;

use super::statements_model::{
    BalanceSheet, CashFlowStatement, ComprehensiveIncomeStatement, FinancialStatements,
    IncomeStatement,
};
use crate::errors::Result;
use crate::policy::WritePolicy;

/// Storage interface for financial statements.
///
/// Reads match the joined `symbols` column exactly (e.g. `"GOOG,GOOGL"`).
#[async_trait]
pub trait StatementStore: Send + Sync {
    /// Writes every statement of every filing in one transaction.
    ///
    /// Returns the number of statement rows written across all four tables.
    async fn save_statements(
        &self,
        statements: Vec<FinancialStatements>,
        policy: WritePolicy,
    ) -> Result<usize>;

    fn get_balance_sheets(&self, symbols: &str) -> Result<Vec<BalanceSheet>>;

    fn get_cash_flow_statements(&self, symbols: &str) -> Result<Vec<CashFlowStatement>>;

    fn get_comprehensive_income_statements(
        &self,
        symbols: &str,
    ) -> Result<Vec<ComprehensiveIncomeStatement>>;

    fn get_income_statements(&self, symbols: &str) -> Result<Vec<IncomeStatement>>;
}
