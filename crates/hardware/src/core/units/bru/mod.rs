//! Branch resolution unit (BRU).
//!
//! Evaluates branch conditions and computes branch targets. Every branch is
//! PC-relative to the already-advanced fetch pointer: the sign-extended
//! displacement counts words, so it is shifted left by two before being added.

/// Condition under which a branch is taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    /// Always taken (`br`).
    Always,
    /// Taken when the operands differ (`btne`, `btnei`).
    NotEqual(i32, i32),
    /// Taken when the operands match (`bte`, `btei`).
    Equal(i32, i32),
    /// Taken when the condition-code bit is set (`bc`).
    Carry(bool),
    /// Taken when the condition-code bit is clear (`bnc`).
    NoCarry(bool),
}

impl Condition {
    /// Returns `true` when the branch is taken.
    #[inline]
    pub const fn holds(self) -> bool {
        match self {
            Self::Always => true,
            Self::NotEqual(a, b) => a != b,
            Self::Equal(a, b) => a == b,
            Self::Carry(cc) => cc,
            Self::NoCarry(cc) => !cc,
        }
    }
}

/// Result of resolving a branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BranchOutcome {
    /// Whether the branch was taken.
    pub taken: bool,
    /// Next fetch pointer: the target when taken, `fip` unchanged otherwise.
    pub next_fip: u32,
}

/// Computes the target of a taken branch.
///
/// # Arguments
///
/// * `fip`  - Fetch pointer, already advanced past the branch.
/// * `disp` - Sign-extended word displacement.
#[inline]
pub const fn target(fip: u32, disp: i32) -> u32 {
    fip.wrapping_add(disp.wrapping_shl(2) as u32)
}

/// Resolves a branch against its condition.
pub const fn resolve(cond: Condition, fip: u32, disp: i32) -> BranchOutcome {
    let taken = cond.holds();
    BranchOutcome {
        taken,
        next_fip: if taken { target(fip, disp) } else { fip },
    }
}
