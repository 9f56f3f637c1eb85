//! Hardcoded demo data rendered by the landing page and the dashboard.
//!
//! Every value here is a literal stand-in for what a real analytics service
//! would return. Nothing is computed from it at runtime.

use crate::records::*;
use crate::status::{EffortLevel, FactorImpact, ImpactLevel, MatchLevel, Severity, StrategyStatus, Tone};

/// Palette for categorical charts (infringement slices).
pub const CHART_PALETTE: [&str; 5] = ["#9D4EDD", "#7B2CBF", "#5A189A", "#3C096C", "#240046"];

pub const PRIMARY_COLOR: &str = "#9D4EDD";
pub const SECONDARY_COLOR: &str = "#5A189A";
pub const MUTED_COLOR: &str = "#666";

// ===================== Overview =====================

/// IP integrity gauge value, out of 100.
pub const INTEGRITY_SCORE: u32 = 78;
pub const INTEGRITY_RATING: &str = "Good Protection";
pub const INTEGRITY_SUMMARY: &str =
    "Your IP assets have strong protection, with some areas for improvement";

pub const INTEGRITY_RISKS: &[RiskFactor] = &[
    RiskFactor { name: "Infringement Risk", score: 65, severity: Severity::Medium },
    RiskFactor { name: "Deepfake Risk", score: 85, severity: Severity::High },
    RiskFactor { name: "Replication Risk", score: 30, severity: Severity::Low },
];

pub const RECENT_ALERTS: &[Alert] = &[
    Alert {
        title: "Potential Infringement Detected",
        description: "Similar content found on marketplace platform",
        time: "2 hours ago",
        severity: Severity::High,
    },
    Alert {
        title: "Copyright Registration Expiring",
        description: "Renewal required within 30 days",
        time: "1 day ago",
        severity: Severity::Medium,
    },
    Alert {
        title: "AI Model Trained on Your Content",
        description: "Detected unauthorized use in training data",
        time: "3 days ago",
        severity: Severity::Medium,
    },
    Alert {
        title: "New Licensing Opportunity",
        description: "Matching business interested in your IP",
        time: "1 week ago",
        severity: Severity::Low,
    },
];

pub const TOTAL_ASSETS: u32 = 24;

pub const ASSETS_BY_TYPE: &[AssetTypeCount] = &[
    AssetTypeCount { name: "Visual - Character Content", count: 8, dot_class: "bg-reiv-purple-light" },
    AssetTypeCount { name: "Audio Content", count: 5, dot_class: "bg-reiv-purple" },
    AssetTypeCount { name: "Written Works", count: 7, dot_class: "bg-reiv-purple-dark" },
    AssetTypeCount { name: "Visual - Landmark Content", count: 4, dot_class: "bg-indigo-500" },
];

pub const PROTECTION_STATUS: &[ProtectionShare] = &[
    ProtectionShare { label: "Protected", percent: 70, severity: Severity::Low },
    ProtectionShare { label: "Pending", percent: 20, severity: Severity::Medium },
    ProtectionShare { label: "At Risk", percent: 10, severity: Severity::High },
];

pub const VALUATION_HISTORY: &[ValuationPoint] = &[
    ValuationPoint { quarter: "Q1", value: 240_000 },
    ValuationPoint { quarter: "Q2", value: 300_000 },
    ValuationPoint { quarter: "Q3", value: 280_000 },
    ValuationPoint { quarter: "Q4", value: 450_000 },
];

/// Quarter-over-quarter change shown next to the current valuation.
pub const VALUATION_CHANGE_PERCENT: f64 = 12.5;

pub const INFRINGEMENT_DISTRIBUTION: &[Share] = &[
    Share { name: "Visual - Character", percent: 35 },
    Share { name: "Audio Content", percent: 25 },
    Share { name: "Written Works", percent: 20 },
    Share { name: "Visual - Landmark", percent: 15 },
    Share { name: "Other", percent: 5 },
];

pub const AI_INDEX_HISTORY: &[IndexPoint] = &[
    IndexPoint { month: "Jan", index: 72 },
    IndexPoint { month: "Feb", index: 75 },
    IndexPoint { month: "Mar", index: 78 },
    IndexPoint { month: "Apr", index: 82 },
    IndexPoint { month: "May", index: 79 },
    IndexPoint { month: "Jun", index: 85 },
    IndexPoint { month: "Jul", index: 87 },
    IndexPoint { month: "Aug", index: 90 },
    IndexPoint { month: "Sep", index: 92 },
];

pub const AI_INDEX_HEADLINES: &[Headline] = &[
    Headline { label: "Current Score", value: "92", note: "+2 pts", note_tone: Some(Tone::Success) },
    Headline { label: "Industry Average", value: "76", note: "points", note_tone: None },
    Headline { label: "Percentile Rank", value: "Top 5%", note: "↑", note_tone: Some(Tone::Success) },
];

// ===================== Risk scores =====================

pub const RISK_SCORE_HISTORY: &[RiskScorePoint] = &[
    RiskScorePoint { month: "Jan", score: 65, threshold: 50 },
    RiskScorePoint { month: "Feb", score: 59, threshold: 50 },
    RiskScorePoint { month: "Mar", score: 80, threshold: 50 },
    RiskScorePoint { month: "Apr", score: 81, threshold: 50 },
    RiskScorePoint { month: "May", score: 56, threshold: 50 },
    RiskScorePoint { month: "Jun", score: 55, threshold: 50 },
    RiskScorePoint { month: "Jul", score: 40, threshold: 50 },
    RiskScorePoint { month: "Aug", score: 70, threshold: 50 },
    RiskScorePoint { month: "Sep", score: 90, threshold: 50 },
];

/// Current score, 90-day average and trend, each with the badge it carries.
pub const RISK_HEADLINES: &[(Headline, Option<Severity>)] = &[
    (Headline { label: "Current Risk Score", value: "90", note: "", note_tone: None }, Some(Severity::High)),
    (Headline { label: "Average Risk (90 days)", value: "68", note: "", note_tone: None }, Some(Severity::Medium)),
    (
        Headline { label: "Risk Trend", value: "+22%", note: "↑ Increasing", note_tone: Some(Tone::Danger) },
        None,
    ),
];

pub const RISK_BREAKDOWN: &[RiskFactor] = &[
    RiskFactor { name: "Infringement", score: 85, severity: Severity::High },
    RiskFactor { name: "Deepfake", score: 75, severity: Severity::High },
    RiskFactor { name: "Replication", score: 60, severity: Severity::Medium },
    RiskFactor { name: "Unauthorized Use", score: 55, severity: Severity::Medium },
    RiskFactor { name: "Legal Exposure", score: 40, severity: Severity::Low },
    RiskFactor { name: "Market Dilution", score: 35, severity: Severity::Low },
];

/// Deepfake exposure of visual content; slices are ordered low, medium, high.
pub const DEEPFAKE_DISTRIBUTION: &[(Share, Severity)] = &[
    (Share { name: "Low", percent: 30 }, Severity::Low),
    (Share { name: "Medium", percent: 45 }, Severity::Medium),
    (Share { name: "High", percent: 25 }, Severity::High),
];

pub const DEEPFAKE_WARNING: &str =
    "25% of your visual content is at high risk for deepfake manipulation";

pub const PROTECTION_RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation {
        title: "Implement Digital Watermarking",
        description: "Add invisible watermarks to visual content to track unauthorized use",
        impact: ImpactLevel::High,
        effort: EffortLevel::Medium,
    },
    Recommendation {
        title: "Register Additional Copyrights",
        description: "3 high-value assets need formal copyright registration",
        impact: ImpactLevel::High,
        effort: EffortLevel::Medium,
    },
    Recommendation {
        title: "Deploy Content Monitoring",
        description: "Set up automated scanning for your content across platforms",
        impact: ImpactLevel::High,
        effort: EffortLevel::Low,
    },
    Recommendation {
        title: "Update Terms of Service",
        description: "Strengthen legal language regarding AI training and usage",
        impact: ImpactLevel::Medium,
        effort: EffortLevel::Low,
    },
];

// ===================== Valuation =====================

pub const VALUATION_HEADLINES: &[Headline] = &[
    Headline {
        label: "Total Portfolio Value",
        value: "$450,000",
        note: "+12.5% from last quarter",
        note_tone: Some(Tone::Success),
    },
    Headline {
        label: "Projected Annual Revenue",
        value: "$85,000",
        note: "+5.2% from last year",
        note_tone: Some(Tone::Success),
    },
    Headline { label: "Collateral Potential", value: "$320,000", note: "Estimated borrowing capacity", note_tone: None },
    Headline { label: "Confidence Score", value: "85%", note: "Based on market data reliability", note_tone: None },
];

pub const CATEGORY_VALUATIONS: &[CategoryValuation] = &[
    CategoryValuation { name: "Visual IP", value: 180_000, last_value: 160_000 },
    CategoryValuation { name: "Audio IP", value: 120_000, last_value: 110_000 },
    CategoryValuation { name: "Written IP", value: 90_000, last_value: 85_000 },
    CategoryValuation { name: "Software IP", value: 60_000, last_value: 45_000 },
];

pub const VALUATION_FACTORS: &[ValuationFactor] = &[
    ValuationFactor {
        name: "Market Demand",
        score: 85,
        impact: FactorImpact::Positive,
        description: "Strong market interest in your content category",
    },
    ValuationFactor {
        name: "Uniqueness",
        score: 92,
        impact: FactorImpact::Positive,
        description: "Highly distinctive compared to similar works",
    },
    ValuationFactor {
        name: "Revenue History",
        score: 78,
        impact: FactorImpact::Positive,
        description: "Consistent earnings with growth potential",
    },
    ValuationFactor {
        name: "Legal Protection",
        score: 65,
        impact: FactorImpact::Neutral,
        description: "Adequate but could be strengthened",
    },
    ValuationFactor {
        name: "Market Saturation",
        score: 45,
        impact: FactorImpact::Negative,
        description: "Increasing competition in your segment",
    },
    ValuationFactor {
        name: "Technological Relevance",
        score: 88,
        impact: FactorImpact::Positive,
        description: "Well-positioned for emerging tech trends",
    },
];

pub const MONETIZATION_OPPORTUNITIES: &[Opportunity] = &[
    Opportunity {
        title: "Licensing Opportunity",
        description: "3 companies interested in licensing your visual content",
        potential: "$25,000 - $40,000 annually",
        fit: MatchLevel::High,
    },
    Opportunity {
        title: "Collateralized Loan",
        description: "Use your IP portfolio to secure financing",
        potential: "Up to $320,000 in capital",
        fit: MatchLevel::High,
    },
    Opportunity {
        title: "NFT Collection",
        description: "Convert select assets into limited NFT series",
        potential: "$15,000 - $30,000 one-time",
        fit: MatchLevel::Medium,
    },
    Opportunity {
        title: "Underwriting Incentives",
        description: "Measurement of Risk Insights",
        potential: "$5,000 - $10,000 monthly",
        fit: MatchLevel::Medium,
    },
];

// ===================== AI index =====================

pub const AI_OVERVIEW_HEADLINES: &[Headline] = &[
    Headline { label: "Overall AI Index", value: "92/100", note: "Top 5% in your industry", note_tone: None },
    Headline {
        label: "AI Distinctiveness",
        value: "95/100",
        note: "Highly unique compared to AI-generated content",
        note_tone: None,
    },
    Headline {
        label: "AI Replication Risk",
        value: "Low",
        note: "Difficult for AI to replicate your style",
        note_tone: None,
    },
    Headline {
        label: "Market AI Saturation",
        value: "Medium",
        note: "Growing AI presence in your market",
        note_tone: None,
    },
];

pub const COMPETITIVE_METRICS: &[CompetitiveMetric] = &[
    CompetitiveMetric {
        name: "Originality",
        your_score: 95,
        ai_average: 65,
        description: "Your content shows high originality compared to AI-generated work",
    },
    CompetitiveMetric {
        name: "Complexity",
        your_score: 88,
        ai_average: 72,
        description: "Your work demonstrates sophisticated structure and nuance",
    },
    CompetitiveMetric {
        name: "Emotional Impact",
        your_score: 90,
        ai_average: 45,
        description: "Your content creates stronger emotional connections",
    },
    CompetitiveMetric {
        name: "Technical Quality",
        your_score: 85,
        ai_average: 80,
        description: "Your technical execution is slightly above AI capabilities",
    },
];

pub const PROTECTION_STRATEGIES: &[ProtectionStrategy] = &[
    ProtectionStrategy {
        title: "AI Training Opt-Out",
        description: "Implement technical measures to prevent AI systems from training on your content",
        status: StrategyStatus::Implemented,
    },
    ProtectionStrategy {
        title: "Watermarking",
        description: "Add invisible digital watermarks that survive AI processing",
        status: StrategyStatus::Recommended,
    },
    ProtectionStrategy {
        title: "Style Diversification",
        description: "Develop distinctive stylistic elements that are difficult for AI to replicate",
        status: StrategyStatus::InProgress,
    },
    ProtectionStrategy {
        title: "Legal Protection",
        description: "Update copyright registrations with AI-specific protections",
        status: StrategyStatus::Recommended,
    },
    ProtectionStrategy {
        title: "Monitoring Service",
        description: "Deploy AI-powered monitoring to detect unauthorized AI usage",
        status: StrategyStatus::Implemented,
    },
];

// ===================== Reports =====================

pub const AVAILABLE_REPORTS: &[Report] = &[
    Report {
        title: "Quarterly Valuation Report",
        description: "Comprehensive analysis of your IP portfolio value",
        date: "September 30, 2023",
        format: "pdf",
    },
    Report {
        title: "AI Risk Assessment",
        description: "Detailed analysis of AI-related threats to your IP",
        date: "October 15, 2023",
        format: "pdf",
    },
    Report {
        title: "Market Opportunity Analysis",
        description: "Potential monetization channels for your IP assets",
        date: "August 22, 2023",
        format: "pdf",
    },
    Report {
        title: "Infringement Detection Report",
        description: "Identified instances of potential IP infringement",
        date: "October 5, 2023",
        format: "pdf",
    },
    Report {
        title: "Underwriting Performance",
        description: "Revenue per risk tier report for the list of IP assets collection",
        date: "September 12, 2023",
        format: "pdf",
    },
];

pub const REPORT_TYPES: &[&str] = &[
    "Valuation Analysis",
    "Risk Assessment",
    "Market Opportunities",
    "Infringement Detection",
    "AI Vulnerability Analysis",
    "Legal Protection Status",
];

pub const REPORT_PERIODS: &[&str] = &[
    "Last 30 days",
    "Last quarter",
    "Last 6 months",
    "Last year",
    "Custom range",
];

pub const REPORT_FORMATS: &[&str] = &[
    "PDF Report",
    "Interactive Dashboard",
    "Excel Spreadsheet",
    "API Data Feed",
];

pub const REPORT_INSIGHTS: &[ReportInsight] = &[
    ReportInsight {
        title: "Valuation Trend",
        insight: "Your IP portfolio value has increased by 12.5% in the last quarter, outperforming the industry average of 8.3%.",
        recommendation: "Consider expanding your high-performing visual content category to capitalize on market demand.",
    },
    ReportInsight {
        title: "Risk Analysis",
        insight: "Deepfake risk has increased by 15% in the last month, particularly for your video content.",
        recommendation: "Implement advanced watermarking and consider registering with deepfake detection services.",
    },
    ReportInsight {
        title: "Market Opportunity",
        insight: "Three companies in the entertainment sector have shown interest in licensing your content.",
        recommendation: "Engage with our licensing specialists to negotiate favorable terms and maximize revenue.",
    },
];

// ===================== Landing page =====================

pub const HOW_IT_WORKS: &[Step] = &[
    Step {
        icon: "fas fa-brain",
        title: "Data Analysis",
        description: "AI Agent collects and analyzes IP performance data",
    },
    Step {
        icon: "fas fa-chart-column",
        title: "Performance Prediction",
        description: "Predictive models forecast future IP value",
    },
    Step {
        icon: "fas fa-triangle-exclamation",
        title: "Risk Flagging",
        description: "Potential risks are identified and prioritized",
    },
    Step {
        icon: "fas fa-dollar-sign",
        title: "Valuation",
        description: "Transparent, data-backed IP valuations",
    },
];

pub const AUDIENCES: &[Audience] = &[
    Audience {
        icon: "fas fa-users",
        title: "Creators",
        description: "Understand and monetize your IP's true value with data-backed insights that help you make strategic decisions.",
    },
    Audience {
        icon: "fas fa-building",
        title: "Lenders",
        description: "Assess IP risk before issuing capital with comprehensive analytics that reduce uncertainty.",
    },
    Audience {
        icon: "fas fa-scale-balanced",
        title: "Underwriters",
        description: "Make informed coverage decisions with predictive risk models specifically designed for digital assets.",
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "fas fa-chart-line",
        title: "Real-time Performance Tracking",
        description: "Monitor your IP assets with live data streams and instant notifications about significant changes.",
    },
    Feature {
        icon: "fas fa-triangle-exclamation",
        title: "Predictive Risk Analysis",
        description: "Anticipate potential issues before they impact value with AI-powered risk assessment.",
    },
    Feature {
        icon: "fas fa-shield-halved",
        title: "Transparent Valuation Model",
        description: "Understand exactly how valuations are calculated with full visibility into our methodology.",
    },
    Feature {
        icon: "fas fa-chart-column",
        title: "Smart Dashboards & Alerts",
        description: "Customize your view with intuitive dashboards and receive timely alerts about your portfolio.",
    },
];

pub const USE_CASES: &[UseCase] = &[
    UseCase {
        title: "IP as Collateral",
        description: "Secure loans using your intellectual property as collateral, backed by reliable valuation data.",
    },
    UseCase {
        title: "Insurance Underwriting",
        description: "Enable insurers to accurately assess and price coverage for digital and creative assets.",
    },
    UseCase {
        title: "Investment Risk Profiling",
        description: "Help investors evaluate IP portfolios with comprehensive risk and performance analytics.",
    },
];

pub const COMPANY_LINKS: &[FooterLink] = &[
    FooterLink { label: "About", href: "/about" },
    FooterLink { label: "Careers", href: "/careers" },
    FooterLink { label: "Contact", href: "/contact" },
];

pub const LEGAL_LINKS: &[FooterLink] = &[
    FooterLink { label: "Privacy Policy", href: "/privacy" },
    FooterLink { label: "Terms of Service", href: "/terms" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_usd;

    fn total(shares: impl IntoIterator<Item = u32>) -> u32 {
        shares.into_iter().sum()
    }

    #[test]
    fn test_distributions_sum_to_one_hundred() {
        assert_eq!(total(INFRINGEMENT_DISTRIBUTION.iter().map(|s| s.percent)), 100);
        assert_eq!(total(DEEPFAKE_DISTRIBUTION.iter().map(|(s, _)| s.percent)), 100);
        assert_eq!(total(PROTECTION_STATUS.iter().map(|s| s.percent)), 100);
    }

    #[test]
    fn test_asset_counts_match_total() {
        assert_eq!(total(ASSETS_BY_TYPE.iter().map(|a| a.count)), TOTAL_ASSETS);
    }

    #[test]
    fn test_current_valuation_is_last_quarter() {
        let last = VALUATION_HISTORY.last().expect("valuation history is not empty");
        assert_eq!(last.quarter, "Q4");
        assert_eq!(format_usd(last.value), "$450,000");
        assert_eq!(VALUATION_HEADLINES[0].value, format_usd(last.value));
    }

    #[test]
    fn test_category_valuations_add_up_to_portfolio() {
        let current: u64 = CATEGORY_VALUATIONS.iter().map(|c| c.value).sum();
        assert_eq!(current, 450_000);
    }

    #[test]
    fn test_ai_index_headline_matches_series() {
        let last = AI_INDEX_HISTORY.last().expect("AI index history is not empty");
        assert_eq!(last.index, 92);
        assert_eq!(AI_OVERVIEW_HEADLINES[0].value, "92/100");
        assert_eq!(AI_INDEX_HEADLINES[0].value, last.index.to_string());
    }

    #[test]
    fn test_monthly_series_cover_same_months() {
        let risk: Vec<_> = RISK_SCORE_HISTORY.iter().map(|p| p.month).collect();
        let index: Vec<_> = AI_INDEX_HISTORY.iter().map(|p| p.month).collect();
        assert_eq!(risk, index);
        assert!(RISK_SCORE_HISTORY.iter().all(|p| p.threshold == 50));
    }

    #[test]
    fn test_scores_are_percentages() {
        let scores = INTEGRITY_RISKS
            .iter()
            .chain(RISK_BREAKDOWN)
            .map(|r| r.score)
            .chain(VALUATION_FACTORS.iter().map(|f| f.score))
            .chain(COMPETITIVE_METRICS.iter().flat_map(|m| [m.your_score, m.ai_average]));
        for score in scores {
            assert!(score <= 100, "score {} out of range", score);
        }
    }

    #[test]
    fn test_portfolio_leads_ai_average_everywhere() {
        assert!(COMPETITIVE_METRICS.iter().all(|m| m.lead() > 0));
        assert_eq!(COMPETITIVE_METRICS[2].lead(), 45);
    }

    #[test]
    fn test_list_lengths() {
        assert_eq!(RECENT_ALERTS.len(), 4);
        assert_eq!(RISK_BREAKDOWN.len(), 6);
        assert_eq!(PROTECTION_RECOMMENDATIONS.len(), 4);
        assert_eq!(VALUATION_FACTORS.len(), 6);
        assert_eq!(MONETIZATION_OPPORTUNITIES.len(), 4);
        assert_eq!(PROTECTION_STRATEGIES.len(), 5);
        assert_eq!(AVAILABLE_REPORTS.len(), 5);
        assert_eq!(REPORT_INSIGHTS.len(), 3);
        assert_eq!(HOW_IT_WORKS.len(), 4);
        assert_eq!(AUDIENCES.len(), 3);
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(USE_CASES.len(), 3);
    }
}
