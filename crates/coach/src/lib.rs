//! AlgoSave Coach - savings coaching text generation.
//!
//! Thin prompt wrappers over a hosted text-generation endpoint. Model output
//! has no guaranteed schema: the JSON-answering flows scan the raw completion
//! for a JSON object and deserialize it defensively, the conversational flows
//! pass the prose through, and every flow degrades to static copy as
//! `Sourced::Fallback` when the model is unreachable or its output is
//! unusable. Callers always get something to show, and can tell whether it
//! was generated.
//!
//! # Architecture
//!
//! - `provider`: the completion endpoint trait plus HTTP and fake impls
//! - `prompts`: prompt templates for each flow
//! - `flows`: typed input/output flows with fallback copy

pub mod errors;
pub mod flows;
pub mod prompts;
pub mod provider;

pub use errors::CoachError;
pub use flows::{
    AchievementCoachInput, AchievementCoachOutput, ChatRole, ChatTurn, CoachService,
    DepositRecord, FinancialAdviceInput, FinancialAdviceOutput, GoalPlanInput, GoalPlanOutput,
    QuickTipInput, RecentDeposit, SavingsSnapshot, SpendingInsightsInput, SpendingInsightsOutput,
};
pub use provider::{CoachProviderTrait, FakeCoachProvider, HttpCoachProvider, ProviderConfig};
