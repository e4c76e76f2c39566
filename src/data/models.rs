//! Typed draft shapes for the portal creation flows

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

use crate::store::DraftKind;

/// A draft shape that knows which storage kind it belongs to.
///
/// Implemented by each entity draft so the session layer can compute
/// storage keys without the caller naming the kind twice.
pub trait Draft: Serialize + DeserializeOwned {
    /// Storage kind for this draft shape
    const KIND: DraftKind;
}

/// A milestone entry shared by project and application drafts
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    /// Client-generated identity, stable across list edits and reloads
    pub id: Uuid,
    /// Milestone title
    pub title: String,
    /// Milestone description (markdown)
    pub description: String,
    /// Payout for completing the milestone (form text, e.g. "500 USDC")
    pub payout: Option<String>,
    /// Milestone deadline
    pub deadline: Option<DateTime<Utc>>,
}

impl Milestone {
    /// Create a new milestone with a fresh identity
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            payout: None,
            deadline: None,
        }
    }
}

/// In-progress program creation form state
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProgramDraft {
    /// Program title
    pub title: String,
    /// Short summary shown on listing cards
    pub summary: String,
    /// Full description (markdown)
    pub description: String,
    /// Application deadline
    pub deadline: Option<DateTime<Utc>>,
    /// Total reward pool (form text)
    pub reward: Option<String>,
    /// Search keywords
    pub keywords: Vec<String>,
    /// External links (site, repository, socials)
    pub links: Vec<String>,
}

impl Draft for ProgramDraft {
    const KIND: DraftKind = DraftKind::Program;
}

/// A funding tier offered by an investment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InvestmentTier {
    /// Tier name
    pub name: String,
    /// Contribution amount for this tier (form text)
    pub amount: Option<String>,
    /// What the tier grants
    pub description: String,
}

/// In-progress investment creation form state
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InvestmentDraft {
    /// Investment title
    pub title: String,
    /// Full description (markdown)
    pub description: String,
    /// Funding goal (form text)
    pub goal: Option<String>,
    /// Funding deadline
    pub deadline: Option<DateTime<Utc>>,
    /// Funding tiers
    pub tiers: Vec<InvestmentTier>,
}

impl Draft for InvestmentDraft {
    const KIND: DraftKind = DraftKind::Investment;
}

/// Funding terms for a project draft
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FundingTerms {
    /// Target amount to raise (form text)
    pub target_amount: Option<String>,
    /// Token the raise is denominated in
    pub token_symbol: Option<String>,
    /// Address payouts are sent to
    pub payout_address: Option<String>,
}

/// In-progress project creation form state
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectDraft {
    /// Project title
    pub title: String,
    /// Full description (markdown)
    pub description: String,
    /// Funding terms
    pub terms: FundingTerms,
    /// Delivery milestones
    pub milestones: Vec<Milestone>,
}

impl Draft for ProjectDraft {
    const KIND: DraftKind = DraftKind::Project;
}

/// Overview section of an application draft
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApplicationOverview {
    /// Applicant or team name
    pub name: String,
    /// One-line pitch
    pub summary: String,
    /// External links (portfolio, repository)
    pub links: Vec<String>,
}

/// In-progress application form state, tied to a parent program
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApplicationDraft {
    /// Overview section
    pub overview: ApplicationOverview,
    /// Full proposal (markdown)
    pub description: String,
    /// Proposed milestones
    pub milestones: Vec<Milestone>,
}

impl Draft for ApplicationDraft {
    const KIND: DraftKind = DraftKind::Application;
}
