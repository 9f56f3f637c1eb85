//! Shared, UI-independent pieces of the REIV IP Signals site.
//! The frontend renders everything in here; the site host uses the page table
//! to decide which paths are real pages. Nothing in this crate touches the DOM,
//! so all of it is testable natively.

mod error;
mod format;
mod records;
mod status;
mod tab;

pub mod mock_data;
pub mod site;

pub use error::ParseTabError;
pub use format::{format_signed_percent, format_usd};
pub use records::{
    Alert, AssetTypeCount, Audience, CategoryValuation, CompetitiveMetric, Feature, FooterLink,
    Headline, IndexPoint, Opportunity, ProtectionShare, ProtectionStrategy, Recommendation, Report,
    ReportInsight, RiskFactor, RiskScorePoint, Share, Step, UseCase, ValuationFactor,
    ValuationPoint,
};
pub use status::{EffortLevel, FactorImpact, ImpactLevel, MatchLevel, Severity, StrategyStatus, Tone};
pub use tab::DashboardTab;
