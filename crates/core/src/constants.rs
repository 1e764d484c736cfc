/// MicroALGOs per ALGO.
pub const MICROALGOS_PER_ALGO: u64 = 1_000_000;

/// Minimum balance the goal contract escrow is funded with, in microALGOs.
pub const MIN_ESCROW_FUNDING: u64 = 100_000;

/// Rounds to wait for transaction confirmation.
pub const CONFIRMATION_ROUNDS: u64 = 4;

/// Length of a group invite code.
pub const INVITE_CODE_LEN: usize = 6;

/// Length of the random suffix in locally generated goal ids.
pub const GOAL_ID_SUFFIX_LEN: usize = 6;
