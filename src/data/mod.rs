//! Data persistence layer for draftstore
//!
//! This module provides SQLite-based storage for draft records.

mod database;
mod drafts;
mod migrations;
mod models;

pub use database::{Database, DatabaseError};
pub use drafts::{DraftRecord, DraftRecordStore};
pub use models::{
    ApplicationDraft, ApplicationOverview, Draft, FundingTerms, InvestmentDraft, InvestmentTier,
    Milestone, ProgramDraft, ProjectDraft,
};
