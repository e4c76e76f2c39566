pub mod config;
pub mod data;
pub mod identity;
pub mod store;
pub mod util;

pub use config::Config;
pub use data::{
    ApplicationDraft, Database, Draft, DraftRecord, DraftRecordStore, InvestmentDraft, Milestone,
    ProgramDraft, ProjectDraft,
};
pub use identity::{IdentityProvider, StaticIdentity, UserId};
pub use store::{DraftKey, DraftKind, DraftSession, DraftStore};
