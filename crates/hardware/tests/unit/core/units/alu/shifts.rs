//! # ALU Shift Tests

use i860sim_core::core::units::alu::shifts::{sll, sra, srl};
use i860sim_core::core::units::alu::{Alu, AluOp};
use proptest::prelude::*;

#[test]
fn test_logical_and_arithmetic_right_shift() {
    assert_eq!(Alu::execute(AluOp::Srl, -16, 2), 0x3fff_fffc);
    assert_eq!(Alu::execute(AluOp::Sra, -16, 2), -4);
    assert_eq!(Alu::execute(AluOp::Sll, -16, 2), -64);
}

#[test]
fn test_each_shift_op_selects_its_own_helper() {
    assert_eq!(Alu::execute(AluOp::Sll, 1, 31), sll(1, 31));
    assert_eq!(Alu::execute(AluOp::Srl, i32::MIN, 31), srl(i32::MIN, 31));
    assert_eq!(Alu::execute(AluOp::Sra, i32::MIN, 31), sra(i32::MIN, 31));
    assert_eq!(srl(i32::MIN, 31), 1);
    assert_eq!(sra(i32::MIN, 31), -1);
    assert_eq!(sll(1, 31), i32::MIN);
}

#[test]
fn test_shift_by_zero_is_identity() {
    for op in [AluOp::Sll, AluOp::Srl, AluOp::Sra] {
        assert_eq!(Alu::execute(op, -123, 0), -123);
        assert_eq!(Alu::execute(op, -123, 32), -123);
    }
}

proptest! {
    /// Only the low five bits of the count take part.
    #[test]
    fn count_wraps_modulo_32(value in any::<i32>(), count in 0i32..1024) {
        for op in [AluOp::Sll, AluOp::Srl, AluOp::Sra] {
            prop_assert_eq!(Alu::execute(op, value, count), Alu::execute(op, value, count & 31));
        }
    }
}
