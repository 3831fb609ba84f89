use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::model::{
    BalanceSheetDB, CashFlowStatementDB, ComprehensiveIncomeStatementDB, IncomeStatementDB,
    NewBalanceSheetDB, NewCashFlowStatementDB, NewComprehensiveIncomeStatementDB,
    NewIncomeStatementDB,
};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::{
    balance_sheet, cash_flow_statement, comprehensive_income_statement, income_statement,
};
use crate::utils::{chunk_for_insert, write_rows};
use stockbase_core::statements::{
    BalanceSheet, CashFlowStatement, ComprehensiveIncomeStatement, FinancialStatements,
    IncomeStatement, StatementStore,
};
use stockbase_core::{Result, WritePolicy};

pub struct StatementRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl StatementRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

/// Statement rows split by destination table.
#[derive(Default)]
struct StatementRows {
    balance_sheets: Vec<NewBalanceSheetDB>,
    cash_flows: Vec<NewCashFlowStatementDB>,
    comprehensive_incomes: Vec<NewComprehensiveIncomeStatementDB>,
    incomes: Vec<NewIncomeStatementDB>,
}

impl StatementRows {
    fn from_filings(filings: Vec<FinancialStatements>) -> Self {
        let mut rows = StatementRows::default();
        for filing in filings {
            if let Some(sheet) = filing.balance_sheet {
                rows.balance_sheets.push(sheet.into());
            }
            if let Some(cash_flow) = filing.cash_flow_statement {
                rows.cash_flows.push(cash_flow.into());
            }
            if let Some(comprehensive) = filing.comprehensive_income_statement {
                rows.comprehensive_incomes.push(comprehensive.into());
            }
            if let Some(income) = filing.income_statement {
                rows.incomes.push(income.into());
            }
        }
        rows
    }
}

#[async_trait]
impl StatementStore for StatementRepository {
    async fn save_statements(
        &self,
        statements: Vec<FinancialStatements>,
        policy: WritePolicy,
    ) -> Result<usize> {
        let rows = StatementRows::from_filings(statements);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut written = 0;
                for chunk in chunk_for_insert(&rows.balance_sheets, NewBalanceSheetDB::COLUMNS) {
                    written += write_rows!(conn, policy, balance_sheet::table, chunk)
                        .map_err(StorageError::from)?;
                }
                for chunk in chunk_for_insert(&rows.cash_flows, NewCashFlowStatementDB::COLUMNS) {
                    written += write_rows!(conn, policy, cash_flow_statement::table, chunk)
                        .map_err(StorageError::from)?;
                }
                for chunk in chunk_for_insert(
                    &rows.comprehensive_incomes,
                    NewComprehensiveIncomeStatementDB::COLUMNS,
                ) {
                    written +=
                        write_rows!(conn, policy, comprehensive_income_statement::table, chunk)
                            .map_err(StorageError::from)?;
                }
                for chunk in chunk_for_insert(&rows.incomes, NewIncomeStatementDB::COLUMNS) {
                    written += write_rows!(conn, policy, income_statement::table, chunk)
                        .map_err(StorageError::from)?;
                }
                debug!("statements: {} row(s) written ({})", written, policy);
                Ok(written)
            })
            .await
    }

    fn get_balance_sheets(&self, symbols: &str) -> Result<Vec<BalanceSheet>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = balance_sheet::table
            .filter(balance_sheet::symbols.eq(symbols))
            .order(balance_sheet::end_date.desc())
            .select(BalanceSheetDB::as_select())
            .load(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(BalanceSheet::from).collect())
    }

    fn get_cash_flow_statements(&self, symbols: &str) -> Result<Vec<CashFlowStatement>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = cash_flow_statement::table
            .filter(cash_flow_statement::symbols.eq(symbols))
            .order(cash_flow_statement::end_date.desc())
            .select(CashFlowStatementDB::as_select())
            .load(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(CashFlowStatement::from).collect())
    }

    fn get_comprehensive_income_statements(
        &self,
        symbols: &str,
    ) -> Result<Vec<ComprehensiveIncomeStatement>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = comprehensive_income_statement::table
            .filter(comprehensive_income_statement::symbols.eq(symbols))
            .order(comprehensive_income_statement::end_date.desc())
            .select(ComprehensiveIncomeStatementDB::as_select())
            .load(&mut conn)
            .into_core()?;
        Ok(rows
            .into_iter()
            .map(ComprehensiveIncomeStatement::from)
            .collect())
    }

    fn get_income_statements(&self, symbols: &str) -> Result<Vec<IncomeStatement>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = income_statement::table
            .filter(income_statement::symbols.eq(symbols))
            .order(income_statement::end_date.desc())
            .select(IncomeStatementDB::as_select())
            .load(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(IncomeStatement::from).collect())
    }
}
