//! Immutable literal records the views render.
//!
//! These have no identity or lifecycle; they exist only as render input and
//! are all built as `const` data in [`crate::mock_data`].

use crate::status::{EffortLevel, FactorImpact, ImpactLevel, MatchLevel, Severity, StrategyStatus, Tone};

// ===================== Chart points =====================

/// Monthly risk score against the fixed alert threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskScorePoint {
    pub month: &'static str,
    pub score: u32,
    pub threshold: u32,
}

/// Portfolio value at the end of a quarter, in dollars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuationPoint {
    pub quarter: &'static str,
    pub value: u64,
}

/// Monthly AI index reading (0-100).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexPoint {
    pub month: &'static str,
    pub index: u32,
}

/// One slice of a percentage distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Share {
    pub name: &'static str,
    pub percent: u32,
}

/// Current and previous value of one IP category, in dollars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryValuation {
    pub name: &'static str,
    pub value: u64,
    pub last_value: u64,
}

// ===================== Cards and lists =====================

/// Label / big value / small note triple used for headline figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Headline {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
    /// Colors the note; `None` renders it muted.
    pub note_tone: Option<Tone>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alert {
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
    pub severity: Severity,
}

/// A scored risk dimension; used both for the overview bars and the breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskFactor {
    pub name: &'static str,
    pub score: u32,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetTypeCount {
    pub name: &'static str,
    pub count: u32,
    /// Tailwind background class for the legend dot
    pub dot_class: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProtectionShare {
    pub label: &'static str,
    pub percent: u32,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: ImpactLevel,
    pub effort: EffortLevel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValuationFactor {
    pub name: &'static str,
    pub score: u32,
    pub impact: FactorImpact,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opportunity {
    pub title: &'static str,
    pub description: &'static str,
    pub potential: &'static str,
    pub fit: MatchLevel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompetitiveMetric {
    pub name: &'static str,
    pub your_score: u32,
    pub ai_average: u32,
    pub description: &'static str,
}

impl CompetitiveMetric {
    /// Points by which the portfolio leads the AI-generated average.
    pub fn lead(&self) -> i64 {
        self.your_score as i64 - self.ai_average as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProtectionStrategy {
    pub title: &'static str,
    pub description: &'static str,
    pub status: StrategyStatus,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub format: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportInsight {
    pub title: &'static str,
    pub insight: &'static str,
    pub recommendation: &'static str,
}

// ===================== Landing page =====================

/// A stage of the "How It Works" pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Audience {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UseCase {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}
