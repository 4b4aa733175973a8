//! Risk scoring for authorization specifications.
//!
//! A pure, additive heuristic over scope generosity and surface area.
//! The score is advisory: it never changes the pass/fail verdict.

use serde::{Deserialize, Serialize};
use specgate_types::AuthorizationSpec;

const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * MIB;

/// Severity classification of an overall risk score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// `>= 0.7` critical, `>= 0.5` high, `>= 0.3` medium, else low.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            Severity::Critical
        } else if score >= 0.5 {
            Severity::High
        } else if score >= 0.3 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring a spec.
///
/// `risk_factors` and `recommendations` are never empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// 0.0 (safe) to 1.0 (dangerous)
    pub overall_risk: f64,
    pub severity: Severity,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Score added by each triggered factor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskWeights {
    pub high_iterations: f64,
    pub moderate_iterations: f64,
    pub large_data_size: f64,
    pub moderate_data_size: f64,
    pub long_timeout: f64,
    pub moderate_timeout: f64,
    pub input_surface: f64,
    pub action_surface: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            high_iterations: 0.25,
            moderate_iterations: 0.10,
            large_data_size: 0.30,
            moderate_data_size: 0.15,
            long_timeout: 0.20,
            moderate_timeout: 0.10,
            input_surface: 0.15,
            action_surface: 0.15,
        }
    }
}

/// Thresholds and weights for the risk heuristic.
///
/// Each metric has a "safe" and a "warn" threshold; exceeding warn adds the
/// high weight and a recommendation, exceeding only safe adds the moderate
/// weight and a factor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    pub safe_iterations: u64,
    pub warn_iterations: u64,
    pub safe_data_size: u64,
    pub warn_data_size: u64,
    pub safe_timeout_seconds: u64,
    pub warn_timeout_seconds: u64,
    pub max_inputs: usize,
    pub max_actions: usize,
    pub weights: RiskWeights,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            safe_iterations: 1_000,
            warn_iterations: 10_000,
            safe_data_size: 100 * MIB,
            warn_data_size: GIB,
            safe_timeout_seconds: 300,
            warn_timeout_seconds: 3_600,
            max_inputs: 10,
            max_actions: 20,
            weights: RiskWeights::default(),
        }
    }
}

/// Evaluates how generous a spec's scope and surface area are.
#[derive(Clone, Debug, Default)]
pub struct RiskScorer {
    config: RiskConfig,
}

impl RiskScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RiskConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    pub fn score_spec(&self, spec: &AuthorizationSpec) -> RiskAssessment {
        let Some(scope) = &spec.execution_scope else {
            return RiskAssessment {
                overall_risk: 1.0,
                severity: Severity::Critical,
                risk_factors: vec!["No execution scope defined".into()],
                recommendations: vec!["Add an execution_scope to the spec".into()],
            };
        };

        let cfg = &self.config;
        let w = &cfg.weights;
        let mut risk = 0.0_f64;
        let mut factors = Vec::new();
        let mut recommendations = Vec::new();

        // Iterations: more room for runaway loops
        if scope.max_iterations > cfg.warn_iterations {
            risk += w.high_iterations;
            factors.push(format!(
                "High iteration limit ({} > {})",
                group_thousands(scope.max_iterations),
                group_thousands(cfg.warn_iterations)
            ));
            recommendations.push(format!(
                "Reduce max_iterations from {} to {} or lower",
                scope.max_iterations, cfg.warn_iterations
            ));
        } else if scope.max_iterations > cfg.safe_iterations {
            risk += w.moderate_iterations;
            factors.push(format!(
                "Moderate iteration limit ({} > {})",
                group_thousands(scope.max_iterations),
                group_thousands(cfg.safe_iterations)
            ));
        }

        // Data size: more room for exfiltration
        if scope.max_data_size > cfg.warn_data_size {
            risk += w.large_data_size;
            factors.push(format!(
                "Large data size limit ({} > {})",
                format_gib(scope.max_data_size),
                format_gib(cfg.warn_data_size)
            ));
            recommendations.push(format!(
                "Reduce max_data_size from {} to {} or lower unless justified",
                format_gib(scope.max_data_size),
                format_mib(cfg.safe_data_size)
            ));
        } else if scope.max_data_size > cfg.safe_data_size {
            risk += w.moderate_data_size;
            factors.push(format!(
                "Moderate data size limit ({} > {})",
                format_mib(scope.max_data_size),
                format_mib(cfg.safe_data_size)
            ));
        }

        // Timeout: more time to act
        if scope.timeout_seconds > cfg.warn_timeout_seconds {
            risk += w.long_timeout;
            factors.push(format!(
                "Long timeout ({}s > {}s)",
                scope.timeout_seconds, cfg.warn_timeout_seconds
            ));
            recommendations.push(format!(
                "Reduce timeout_seconds from {} to {} or lower",
                scope.timeout_seconds, cfg.warn_timeout_seconds
            ));
        } else if scope.timeout_seconds > cfg.safe_timeout_seconds {
            risk += w.moderate_timeout;
            factors.push(format!(
                "Moderate timeout ({}s > {}s)",
                scope.timeout_seconds, cfg.safe_timeout_seconds
            ));
        }

        let num_inputs = spec.allowed_inputs.len();
        if num_inputs > cfg.max_inputs {
            risk += w.input_surface;
            factors.push(format!(
                "Large input surface area ({num_inputs} allowed sources)"
            ));
            recommendations
                .push("Limit allowed inputs to the sources the task actually reads".into());
        }

        let num_actions = spec.permitted_actions.len();
        if num_actions > cfg.max_actions {
            risk += w.action_surface;
            factors.push(format!(
                "Large action surface area ({num_actions} permitted actions)"
            ));
            recommendations
                .push("Limit permitted actions to the effects the task actually needs".into());
        }

        let overall_risk = risk.clamp(0.0, 1.0);

        if factors.is_empty() {
            factors.push("No risk factors detected".into());
        }
        if recommendations.is_empty() {
            recommendations.push("No security concerns detected; spec appears reasonable".into());
        }

        RiskAssessment {
            overall_risk,
            severity: Severity::from_score(overall_risk),
            risk_factors: factors,
            recommendations,
        }
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn format_gib(bytes: u64) -> String {
    format!("{:.1} GB", bytes as f64 / GIB as f64)
}

fn format_mib(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / MIB as f64)
}
