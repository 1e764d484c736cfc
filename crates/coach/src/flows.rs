//! Coaching flows: typed inputs/outputs with degradation to static copy.

use crate::errors::CoachError;
use crate::prompts::{
    achievement_coach_prompt, financial_advice_prompt, goal_plan_prompt, quick_tip_prompt,
    spending_insights_prompt,
};
use crate::provider::CoachProviderTrait;
use algosave_core::Sourced;
use chrono::{Duration, Utc};
use log::warn;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// Flow inputs/outputs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementCoachInput {
    /// e.g. "First Deposit", "50% Saver", "Goal Completed"
    pub achievement_name: String,
    pub goal_name: String,
    pub current_saved: Decimal,
    pub target_amount: Decimal,
    pub progress_percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementCoachOutput {
    pub congratulatory_message: String,
    pub micro_tip: String,
}

/// One turn of the advice conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Aggregate savings figures handed to the advisor so it can reference the
/// user's actual numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsSnapshot {
    pub total_saved: Decimal,
    pub total_target: Decimal,
    pub active_goals: u32,
    pub completed_goals: u32,
    #[serde(default)]
    pub recent_deposits: Vec<RecentDeposit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentDeposit {
    pub amount: Decimal,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAdviceInput {
    pub user_message: String,
    #[serde(default)]
    pub context: Option<SavingsSnapshot>,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAdviceOutput {
    pub response: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickTipInput {
    pub total_saved: Decimal,
    pub progress_percent: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRecord {
    pub amount: Decimal,
    pub date: String,
    pub goal_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingInsightsInput {
    pub total_saved: Decimal,
    pub total_target: Decimal,
    pub active_goals: u32,
    pub completed_goals: u32,
    #[serde(default)]
    pub deposit_history: Vec<DepositRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingInsightsOutput {
    /// 0-100, clamped after parsing.
    pub savings_score: u32,
    pub insight: String,
    pub top_tip: String,
    /// Suggested weekly saving in ALGO.
    pub weekly_target: Decimal,
    /// Estimated YYYY-MM-DD completion date, when the model offers one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projected_completion: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPlanInput {
    /// Free-text description of what the user wants to save for.
    pub goal_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPlanOutput {
    /// Realistic target amount for the goal, in ALGO.
    pub suggested_target_amount: Decimal,
    /// Suitable deadline in YYYY-MM-DD format.
    pub suggested_deadline: String,
    /// Personalized weekly/monthly savings plan.
    pub suggested_savings_plan: String,
}

// ============================================================================
// Static fallback copy
// ============================================================================

const ADVICE_SAVE: &str = "To save more effectively, try the 50/30/20 rule: 50% for needs, 30% for wants, and 20% for savings. Start small and increase gradually!";
const ADVICE_STUDENT: &str = "As a student, start with small amounts - even ₹100/week adds up! Use apps to track spending, avoid impulse purchases, and consider part-time work or freelancing.";
const ADVICE_MOTIVATED: &str = "Stay motivated by visualizing your goals, celebrating small wins, and tracking your progress. Remember: every deposit brings you closer to your dream!";
const ADVICE_MULTIPLE: &str = "Having multiple goals is great! Prioritize by urgency and importance. Focus on emergency fund first, then work on other goals simultaneously.";
const ADVICE_BUDGET: &str = "Create a simple budget: list all income, track expenses for a week, identify non-essentials to cut, and automate your savings on payday.";
const ADVICE_DEFAULT: &str = "Great question! The key to financial success is consistency. Set clear goals, track your progress, and make saving a habit. Even small amounts add up over time!";

const QUICK_TIP_FALLBACK: &str =
    "Every small deposit brings you closer to your goal. Keep going!";

/// Keyword-matched canned advice for when the provider is unreachable.
fn advice_fallback(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    if lower.contains("save more") || lower.contains("saving") {
        ADVICE_SAVE
    } else if lower.contains("student") {
        ADVICE_STUDENT
    } else if lower.contains("motivated") || lower.contains("motivation") {
        ADVICE_MOTIVATED
    } else if lower.contains("multiple") || lower.contains("goals") {
        ADVICE_MULTIPLE
    } else if lower.contains("budget") || lower.contains("tight income") {
        ADVICE_BUDGET
    } else {
        ADVICE_DEFAULT
    }
}

/// Deterministic insights derived from the savings figures alone.
fn spending_insights_fallback(input: &SpendingInsightsInput) -> SpendingInsightsOutput {
    let remaining = input.total_target - input.total_saved;
    let weekly_target = (remaining / dec!(12)).max(dec!(0.1)).round_dp(3);

    let mut score = Decimal::from(input.completed_goals * 20 + input.active_goals * 5);
    if input.total_saved > Decimal::ZERO {
        score += (input.total_saved * dec!(5)).min(dec!(50));
    }
    let savings_score = score.round().min(dec!(100)).to_u32().unwrap_or(100);

    let encouragement = if input.completed_goals > 0 {
        let plural = if input.completed_goals > 1 { "s" } else { "" };
        format!("Great job completing {} goal{plural}!", input.completed_goals)
    } else {
        "Keep going — every deposit counts!".to_string()
    };

    SpendingInsightsOutput {
        savings_score,
        insight: format!(
            "You've saved {} ALGO across {} goals. {}",
            input.total_saved.round_dp(2),
            input.active_goals + input.completed_goals,
            encouragement
        ),
        top_tip: "Try the 24-hour rule: wait a day before any non-essential purchase. Transfer the saved amount directly to your goal.".to_string(),
        weekly_target,
        projected_completion: None,
    }
}

// ============================================================================
// JSON extraction
// ============================================================================

/// Find and deserialize the first balanced JSON object embedded in raw model
/// output. Models wrap answers in prose or code fences often enough that a
/// plain `from_str` on the whole completion is not viable.
fn extract_json<T: DeserializeOwned>(raw: &str) -> Option<T> {
    let start = raw.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in raw[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let candidate = &raw[start..start + offset + c.len_utf8()];
                    return serde_json::from_str(candidate).ok();
                }
            }
            _ => {}
        }
    }
    None
}

// ============================================================================
// Service
// ============================================================================

pub struct CoachService {
    provider: Arc<dyn CoachProviderTrait>,
}

impl CoachService {
    pub fn new(provider: Arc<dyn CoachProviderTrait>) -> Self {
        CoachService { provider }
    }

    /// Shared body for the JSON-answering flows.
    async fn run_flow<T: DeserializeOwned>(
        &self,
        flow: &str,
        prompt: String,
        fallback: T,
    ) -> Sourced<T> {
        let raw = match self.provider.complete(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("{flow}: provider failed, using static copy: {e}");
                return Sourced::Fallback {
                    value: fallback,
                    reason: format!("provider failed: {e}"),
                };
            }
        };

        match extract_json::<T>(&raw) {
            Some(output) => Sourced::Fresh(output),
            None => {
                warn!("{flow}: completion had no usable JSON, using static copy");
                Sourced::Fallback {
                    value: fallback,
                    reason: "completion had no usable JSON".to_string(),
                }
            }
        }
    }

    /// Congratulate an unlocked achievement. Never fails: degraded output is
    /// tagged, not hidden.
    pub async fn achievement_advice(
        &self,
        input: &AchievementCoachInput,
    ) -> Sourced<AchievementCoachOutput> {
        let fallback = AchievementCoachOutput {
            congratulatory_message: format!(
                "Congratulations! You've unlocked \"{}\" for your goal \"{}\". \
                 Your progress is recorded on the Algorand blockchain.",
                input.achievement_name, input.goal_name
            ),
            micro_tip: "Keep the momentum going with a small deposit every week.".to_string(),
        };
        self.run_flow(
            "achievement_advice",
            achievement_coach_prompt(input),
            fallback,
        )
        .await
    }

    /// Conversational savings advice. The completion is free text, not JSON;
    /// an unreachable provider degrades to a keyword-matched canned answer.
    pub async fn financial_advice(
        &self,
        input: &FinancialAdviceInput,
    ) -> Sourced<FinancialAdviceOutput> {
        match self.provider.complete(&financial_advice_prompt(input)).await {
            Ok(text) => {
                let response = if text.trim().is_empty() {
                    "I'm here to help! Could you please rephrase your question?".to_string()
                } else {
                    text.trim().to_string()
                };
                Sourced::Fresh(FinancialAdviceOutput {
                    response,
                    suggestions: Vec::new(),
                })
            }
            Err(e) => {
                warn!("financial_advice: provider failed, using canned answer: {e}");
                Sourced::Fallback {
                    value: FinancialAdviceOutput {
                        response: advice_fallback(&input.user_message).to_string(),
                        suggestions: vec![
                            "How can I save more?".to_string(),
                            "Budgeting tips".to_string(),
                        ],
                    },
                    reason: format!("provider failed: {e}"),
                }
            }
        }
    }

    /// One-liner motivational tip for the dashboard.
    pub async fn quick_tip(&self, input: &QuickTipInput) -> Sourced<String> {
        match self.provider.complete(&quick_tip_prompt(input)).await {
            Ok(text) if !text.trim().is_empty() => Sourced::Fresh(text.trim().to_string()),
            Ok(_) => Sourced::Fallback {
                value: QUICK_TIP_FALLBACK.to_string(),
                reason: "provider returned empty completion".to_string(),
            },
            Err(e) => {
                warn!("quick_tip: provider failed, using static tip: {e}");
                Sourced::Fallback {
                    value: QUICK_TIP_FALLBACK.to_string(),
                    reason: format!("provider failed: {e}"),
                }
            }
        }
    }

    /// Score the user's savings habits and suggest a weekly target. The
    /// fallback is pure arithmetic over the input figures.
    pub async fn spending_insights(
        &self,
        input: &SpendingInsightsInput,
    ) -> Sourced<SpendingInsightsOutput> {
        let fallback = spending_insights_fallback(input);
        self.run_flow("spending_insights", spending_insights_prompt(input), fallback)
            .await
            .map(|mut out| {
                out.savings_score = out.savings_score.min(100);
                out
            })
    }

    /// Turn a free-text goal description into a target amount, deadline, and
    /// savings plan. The fallback proposes a modest 12-week starter plan.
    pub async fn plan_goal(&self, input: &GoalPlanInput) -> Sourced<GoalPlanOutput> {
        let deadline = (Utc::now() + Duration::weeks(12)).format("%Y-%m-%d");
        let fallback = GoalPlanOutput {
            suggested_target_amount: dec!(50),
            suggested_deadline: deadline.to_string(),
            suggested_savings_plan:
                "Start with about 4 ALGO a week for the next 12 weeks, and adjust the amount \
                 once you know what fits your budget."
                    .to_string(),
        };
        self.run_flow("plan_goal", goal_plan_prompt(input), fallback)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::FakeCoachProvider;
    use rust_decimal_macros::dec;

    fn coach_input() -> AchievementCoachInput {
        AchievementCoachInput {
            achievement_name: "First Deposit".to_string(),
            goal_name: "New Laptop".to_string(),
            current_saved: dec!(1.5),
            target_amount: dec!(50),
            progress_percentage: dec!(3),
        }
    }

    fn insights_input() -> SpendingInsightsInput {
        SpendingInsightsInput {
            total_saved: dec!(0),
            total_target: dec!(120),
            active_goals: 2,
            completed_goals: 1,
            deposit_history: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_valid_json_is_fresh() {
        let service = CoachService::new(Arc::new(FakeCoachProvider::replying(
            r#"{"congratulatoryMessage": "Great start!", "microTip": "Try Savings Sunday."}"#,
        )));
        let out = service.achievement_advice(&coach_input()).await;
        assert!(!out.is_fallback());
        assert_eq!(out.value().congratulatory_message, "Great start!");
    }

    #[tokio::test]
    async fn test_json_embedded_in_prose_still_parses() {
        let service = CoachService::new(Arc::new(FakeCoachProvider::replying(
            "Sure! Here is the response:\n```json\n{\"congratulatoryMessage\": \"Well done {friend}\", \"microTip\": \"Automate it.\"}\n```\nHope this helps.",
        )));
        let out = service.achievement_advice(&coach_input()).await;
        assert!(!out.is_fallback());
        assert_eq!(out.value().micro_tip, "Automate it.");
    }

    #[tokio::test]
    async fn test_garbage_output_degrades_to_static_copy() {
        let service = CoachService::new(Arc::new(FakeCoachProvider::replying(
            "I cannot answer in JSON right now.",
        )));
        let out = service.achievement_advice(&coach_input()).await;
        assert!(out.is_fallback());
        assert!(out
            .value()
            .congratulatory_message
            .contains("First Deposit"));
    }

    #[tokio::test]
    async fn test_provider_failure_degrades_with_reason() {
        let service = CoachService::new(Arc::new(FakeCoachProvider::failing()));
        let out = service.achievement_advice(&coach_input()).await;
        assert!(out.is_fallback());
        assert!(out.fallback_reason().unwrap().contains("provider failed"));
    }

    #[tokio::test]
    async fn test_advice_passes_completion_text_through() {
        let service = CoachService::new(Arc::new(FakeCoachProvider::replying(
            "Set up a standing order on payday.\n",
        )));
        let out = service
            .financial_advice(&FinancialAdviceInput {
                user_message: "How do I stay consistent?".to_string(),
                context: None,
                conversation_history: Vec::new(),
            })
            .await;
        assert!(!out.is_fallback());
        assert_eq!(out.value().response, "Set up a standing order on payday.");
        assert!(out.value().suggestions.is_empty());
    }

    #[tokio::test]
    async fn test_advice_fallback_matches_keywords() {
        let service = CoachService::new(Arc::new(FakeCoachProvider::failing()));
        let out = service
            .financial_advice(&FinancialAdviceInput {
                user_message: "How can I save more each month?".to_string(),
                context: None,
                conversation_history: Vec::new(),
            })
            .await;
        assert!(out.is_fallback());
        assert!(out.value().response.contains("50/30/20"));
        assert_eq!(out.value().suggestions.len(), 2);
    }

    #[test]
    fn test_advice_fallback_keyword_table() {
        assert!(advice_fallback("I'm a broke STUDENT").contains("part-time work"));
        assert!(advice_fallback("help me budget this").contains("simple budget"));
        assert!(advice_fallback("I juggle multiple things").contains("emergency fund"));
        assert!(advice_fallback("tell me a joke").contains("consistency"));
    }

    #[tokio::test]
    async fn test_quick_tip_fallback_on_empty_completion() {
        let service = CoachService::new(Arc::new(FakeCoachProvider::replying("  \n")));
        let out = service
            .quick_tip(&QuickTipInput {
                total_saved: dec!(3),
                progress_percent: dec!(30),
            })
            .await;
        assert!(out.is_fallback());
        assert_eq!(out.value(), QUICK_TIP_FALLBACK);
    }

    #[tokio::test]
    async fn test_insights_fallback_is_deterministic_arithmetic() {
        let service = CoachService::new(Arc::new(FakeCoachProvider::failing()));
        let out = service.spending_insights(&insights_input()).await;
        assert!(out.is_fallback());
        // completed*20 + active*5, nothing saved yet
        assert_eq!(out.value().savings_score, 30);
        // (120 - 0) / 12
        assert_eq!(out.value().weekly_target, dec!(10));
        assert!(out.value().insight.contains("3 goals"));
        assert!(out.value().projected_completion.is_none());
    }

    #[tokio::test]
    async fn test_insights_fallback_caps_saved_contribution() {
        let service = CoachService::new(Arc::new(FakeCoachProvider::failing()));
        let out = service
            .spending_insights(&SpendingInsightsInput {
                total_saved: dec!(40),
                total_target: dec!(40),
                active_goals: 0,
                completed_goals: 5,
                deposit_history: Vec::new(),
            })
            .await;
        // 5*20 + min(50, 40*5) would be 150, capped at 100
        assert_eq!(out.value().savings_score, 100);
        // nothing remaining, floor kicks in
        assert_eq!(out.value().weekly_target, dec!(0.1));
    }

    #[tokio::test]
    async fn test_insights_fresh_score_is_clamped() {
        let service = CoachService::new(Arc::new(FakeCoachProvider::replying(
            r#"{"savingsScore": 150, "insight": "Solid habit.", "topTip": "Round up deposits.", "weeklyTarget": 0.5}"#,
        )));
        let out = service.spending_insights(&insights_input()).await;
        assert!(!out.is_fallback());
        assert_eq!(out.value().savings_score, 100);
        assert_eq!(out.value().weekly_target, dec!(0.5));
    }

    #[tokio::test]
    async fn test_goal_plan_parses_suggestion_fields() {
        let service = CoachService::new(Arc::new(FakeCoachProvider::replying(
            r#"{"suggestedTargetAmount": 80, "suggestedDeadline": "2026-12-01", "suggestedSavingsPlan": "Save 6.7 ALGO per week."}"#,
        )));
        let out = service
            .plan_goal(&GoalPlanInput {
                goal_description: "a refurbished laptop for college".to_string(),
            })
            .await;
        assert!(!out.is_fallback());
        assert_eq!(out.value().suggested_target_amount, dec!(80));
        assert_eq!(out.value().suggested_deadline, "2026-12-01");
    }

    #[tokio::test]
    async fn test_goal_plan_fallback_is_twelve_week_starter() {
        let service = CoachService::new(Arc::new(FakeCoachProvider::failing()));
        let out = service
            .plan_goal(&GoalPlanInput {
                goal_description: "a trip".to_string(),
            })
            .await;
        assert!(out.is_fallback());
        assert_eq!(out.value().suggested_target_amount, dec!(50));
        let expected = (Utc::now() + Duration::weeks(12)).format("%Y-%m-%d").to_string();
        assert_eq!(out.value().suggested_deadline, expected);
    }

    #[test]
    fn test_extract_json_handles_braces_in_strings() {
        #[derive(Deserialize)]
        struct Msg {
            text: String,
        }
        let parsed: Msg = extract_json(r#"noise {"text": "curly {demo} inside"} trailing"#).unwrap();
        assert_eq!(parsed.text, "curly {demo} inside");
    }

    #[test]
    fn test_extract_json_none_on_plain_text() {
        assert!(extract_json::<AchievementCoachOutput>("no json here").is_none());
    }
}
