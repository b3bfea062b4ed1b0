//! Search and evaluation constants.

// ============================================================================
// SCORE SENTINELS
// ============================================================================

/// Returned by minimax when the side to move is checkmated (negated when
/// White is the loser). Half the i32 range so later arithmetic cannot wrap.
pub const MATE_SCORE: i32 = i32::MAX / 2;

/// Static evaluation of a position where White is checkmated
pub const EVAL_WHITE_MATED: i32 = i32::MIN + 1;

/// Static evaluation of a position where Black is checkmated
pub const EVAL_BLACK_MATED: i32 = i32::MAX - 1;

// ============================================================================
// EVALUATION WEIGHTS
// ============================================================================

/// Piece values are divided by this before summing material
pub const MATERIAL_DIVISOR: i32 = 10;

/// Flat penalty for the side currently in check
pub const KING_SAFETY_PENALTY: i32 = 50;

// ============================================================================
// MOVE ORDERING
// ============================================================================

/// Victim value multiplier in the MVV-LVA capture score
pub const MVV_LVA_MULTIPLIER: i32 = 10;

/// Bonus for a move that gives check
pub const CHECK_BONUS: i32 = 1000;

/// Score of a move that delivers checkmate; sorts ahead of everything
pub const MATING_MOVE_SCORE: i32 = i32::MAX;
