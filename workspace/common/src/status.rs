//! Severity and status enumerations attached to the mock entries.
//!
//! None of these carry behaviour beyond picking how an entry is displayed:
//! every enum resolves to a [`Tone`], and the tone decides the badge and bar
//! colors.

/// Display color family shared by badges, progress bars and chart slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Accent,
}

impl Tone {
    /// Tailwind classes for a tinted badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Tone::Success => "bg-green-500/20 text-green-500 border-green-500/30",
            Tone::Warning => "bg-amber-500/20 text-amber-500 border-amber-500/30",
            Tone::Danger => "bg-red-500/20 text-red-500 border-red-500/30",
            Tone::Accent => "bg-reiv-purple-light/20 text-reiv-purple-light border-reiv-purple-light/30",
        }
    }

    /// Tailwind class for the filled part of a progress bar.
    pub fn bar_class(&self) -> &'static str {
        match self {
            Tone::Success => "bg-green-500",
            Tone::Warning => "bg-amber-500",
            Tone::Danger => "bg-red-500",
            Tone::Accent => "bg-reiv-purple-light",
        }
    }

    /// Text color class, used for icons next to an entry.
    pub fn text_class(&self) -> &'static str {
        match self {
            Tone::Success => "text-green-500",
            Tone::Warning => "text-amber-500",
            Tone::Danger => "text-red-500",
            Tone::Accent => "text-reiv-purple-light",
        }
    }

    /// Hex color for chart slices.
    pub fn hex(&self) -> &'static str {
        match self {
            Tone::Success => "#4CAF50",
            Tone::Warning => "#FF9800",
            Tone::Danger => "#F44336",
            Tone::Accent => "#9D4EDD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Severity::Low => Tone::Success,
            Severity::Medium => Tone::Warning,
            Severity::High => Tone::Danger,
        }
    }
}

/// Expected benefit of a protection recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImpactLevel {
    High,
    Medium,
}

impl ImpactLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ImpactLevel::High => "High Impact",
            ImpactLevel::Medium => "Medium Impact",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ImpactLevel::High => Tone::Success,
            ImpactLevel::Medium => Tone::Warning,
        }
    }
}

/// Work needed to apply a protection recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffortLevel {
    Low,
    Medium,
}

impl EffortLevel {
    pub fn label(&self) -> &'static str {
        match self {
            EffortLevel::Low => "Low Effort",
            EffortLevel::Medium => "Medium Effort",
        }
    }

    // Low effort is the good news here, so it gets the success tone.
    pub fn tone(&self) -> Tone {
        match self {
            EffortLevel::Low => Tone::Success,
            EffortLevel::Medium => Tone::Warning,
        }
    }
}

/// Direction in which a valuation factor moves the portfolio value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorImpact {
    Positive,
    Neutral,
    Negative,
}

impl FactorImpact {
    pub fn tone(&self) -> Tone {
        match self {
            FactorImpact::Positive => Tone::Success,
            FactorImpact::Neutral => Tone::Warning,
            FactorImpact::Negative => Tone::Danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchLevel {
    High,
    Medium,
}

impl MatchLevel {
    pub fn label(&self) -> &'static str {
        match self {
            MatchLevel::High => "High Match",
            MatchLevel::Medium => "Medium Match",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            MatchLevel::High => Tone::Success,
            MatchLevel::Medium => Tone::Warning,
        }
    }
}

/// Adoption state of an AI protection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyStatus {
    Implemented,
    InProgress,
    Recommended,
}

impl StrategyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StrategyStatus::Implemented => "Implemented",
            StrategyStatus::InProgress => "In Progress",
            StrategyStatus::Recommended => "Recommended",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            StrategyStatus::Implemented => Tone::Success,
            StrategyStatus::InProgress => Tone::Warning,
            StrategyStatus::Recommended => Tone::Accent,
        }
    }

    /// Only strategies that have not been started offer an "Implement" action.
    pub fn is_actionable(&self) -> bool {
        matches!(self, StrategyStatus::Recommended)
    }
}
