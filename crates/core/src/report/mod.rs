//! Derived cash-flow dashboard view.

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::{
    CashFlowReport, NetResult, ReportCell, ReportOptions, ReportRow, TotalsRow, TypeSummary,
};
