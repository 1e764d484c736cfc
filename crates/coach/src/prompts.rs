//! Prompt templates for the coaching flows.
//!
//! The JSON-answering templates ask the model for a single JSON object so the
//! flows can parse the completion; the flows still treat the output as
//! untrusted text. The advisor and quick-tip templates expect plain prose.

use crate::flows::{
    AchievementCoachInput, ChatRole, FinancialAdviceInput, GoalPlanInput, QuickTipInput,
    SpendingInsightsInput,
};
use rust_decimal::Decimal;
use std::fmt::Write;

pub fn achievement_coach_prompt(input: &AchievementCoachInput) -> String {
    format!(
        r#"You are an encouraging financial coach for students. Your goal is to motivate them by explaining their on-chain progress in simple, easy-to-understand language.

A student has just unlocked the "{achievement}" milestone for their savings goal: "{goal}". This is a permanent, verifiable event on the Algorand blockchain.

Their current on-chain status is:
- Saved: {saved} ALGO
- Target: {target} ALGO
- Progress: {progress}%

Based on this achievement:
1. Craft a personalized, congratulatory message. Explain what this milestone means and reassure them that their progress is permanently recorded and secured on the blockchain.
2. Provide a relevant, actionable micro-tip to help them continue saving.

Answer with a single JSON object:
{{"congratulatoryMessage": "...", "microTip": "..."}}"#,
        achievement = input.achievement_name,
        goal = input.goal_name,
        saved = input.current_saved,
        target = input.target_amount,
        progress = input.progress_percentage,
    )
}

pub fn financial_advice_prompt(input: &FinancialAdviceInput) -> String {
    let mut prompt = String::from(
        r#"You are DhanSathi AI, a friendly and knowledgeable financial advisor specializing in personal savings and financial goal planning. You help users with:

1. Savings Strategies: Tips on how to save more effectively
2. Goal Planning: Helping users set realistic financial goals
3. Budgeting Advice: Smart spending and budget management
4. Motivation: Encouraging users to stick to their savings plans
5. Financial Literacy: Explaining financial concepts in simple terms

Guidelines:
- Be warm, supportive, and encouraging
- Give practical, actionable advice
- Keep responses concise but helpful (2-3 paragraphs max)
- Use simple language, avoid jargon
- Reference the user's actual data when available
- Use INR or ALGO as currency context
"#,
    );

    if let Some(ctx) = &input.context {
        let _ = write!(
            prompt,
            "\nUser's Current Financial Status:\n\
             - Total Saved: {} ALGO\n\
             - Total Target: {} ALGO\n\
             - Active Goals: {}\n\
             - Completed Goals: {}\n",
            ctx.total_saved.round_dp(2),
            ctx.total_target.round_dp(2),
            ctx.active_goals,
            ctx.completed_goals,
        );
        if !ctx.recent_deposits.is_empty() {
            let deposits: Vec<String> = ctx
                .recent_deposits
                .iter()
                .map(|d| format!("{} ALGO on {}", d.amount, d.date))
                .collect();
            let _ = writeln!(prompt, "- Recent Deposits: {}", deposits.join(", "));
        }
    }

    if !input.conversation_history.is_empty() {
        prompt.push_str("\nPrevious conversation:\n");
        for turn in &input.conversation_history {
            let speaker = match turn.role {
                ChatRole::User => "User",
                ChatRole::Assistant => "Assistant",
            };
            let _ = writeln!(prompt, "{speaker}: {}", turn.content);
        }
    }

    let _ = write!(
        prompt,
        "\nUser's question: {}\n\nProvide helpful, specific financial advice:",
        input.user_message
    );
    prompt
}

pub fn quick_tip_prompt(input: &QuickTipInput) -> String {
    format!(
        "Generate a short, motivating savings tip (1-2 sentences) for a user who has saved \
         {saved} ALGO and is {progress}% towards their goal. Be encouraging and specific.",
        saved = input.total_saved.round_dp(2),
        progress = input.progress_percent,
    )
}

pub fn spending_insights_prompt(input: &SpendingInsightsInput) -> String {
    let total_deposits = input.deposit_history.len();
    let avg_deposit = if total_deposits > 0 {
        let sum: Decimal = input.deposit_history.iter().map(|d| d.amount).sum();
        sum / Decimal::from(total_deposits as u64)
    } else {
        Decimal::ZERO
    };
    let recent: Vec<String> = input
        .deposit_history
        .iter()
        .rev()
        .take(10)
        .rev()
        .map(|d| format!("{} ALGO for \"{}\" on {}", d.amount, d.goal_name, d.date))
        .collect();
    let recent = if recent.is_empty() {
        "None yet".to_string()
    } else {
        recent.join("; ")
    };

    format!(
        r#"You are DhanSathi AI, a financial wellness coach. Analyze this user's savings data and provide actionable insights.

User Savings Profile:
- Total Saved: {saved} ALGO
- Total Target: {target} ALGO
- Active Goals: {active}
- Completed Goals: {completed}
- Total Deposits: {deposits}
- Average Deposit: {avg} ALGO
- Recent Deposits: {recent}

Provide a JSON response with:
1. savingsScore: integer 0-100 based on their savings habits
2. insight: 2-3 sentence analysis of their savings pattern (encouraging but honest)
3. topTip: one specific, actionable tip to improve savings (1-2 sentences)
4. weeklyTarget: suggested weekly ALGO savings amount (number, 2 decimal places)
5. projectedCompletion: estimated date to reach all goals in YYYY-MM-DD format (optional)

JSON format: {{"savingsScore": 75, "insight": "...", "topTip": "...", "weeklyTarget": 0.5, "projectedCompletion": "2026-06-01"}}"#,
        saved = input.total_saved.round_dp(3),
        target = input.total_target.round_dp(3),
        active = input.active_goals,
        completed = input.completed_goals,
        deposits = total_deposits,
        avg = avg_deposit.round_dp(3),
        recent = recent,
    )
}

pub fn goal_plan_prompt(input: &GoalPlanInput) -> String {
    format!(
        r#"As an expert financial advisor, your task is to help a student set achievable financial objectives for a savings goal.
Based on the following goal description, suggest a realistic target amount in ALGO, a suitable deadline in YYYY-MM-DD format, and a personalized weekly/monthly savings plan.

Goal Description: {description}

Answer with a single JSON object:
{{"suggestedTargetAmount": <number>, "suggestedDeadline": "YYYY-MM-DD", "suggestedSavingsPlan": "..."}}"#,
        description = input.goal_description,
    )
}
