use crate::decoder::InstructionDecoder;
use std::fmt;

pub fn get_opcode(inst: u32) -> u32 {
    inst & 0x7f
}

pub fn get_funct3(inst: u32) -> u32 {
    (inst >> 12) & 0x07
}

pub fn get_rd(inst: u32) -> usize {
    ((inst >> 7) & 0x1f) as usize
}

pub fn get_rs1(inst: u32) -> usize {
    ((inst >> 15) & 0x1f) as usize
}

pub fn get_rs2(inst: u32) -> usize {
    ((inst >> 20) & 0x1f) as usize
}

pub fn get_funct7(inst: u32) -> u32 {
    inst >> 25
}

// Reinterpret the low `width` bits of value as a two's-complement number
pub fn sign_extend(value: u32, width: u32) -> i32 {
    debug_assert!((1..=32).contains(&width));
    let shift = 32 - width;
    ((value << shift) as i32) >> shift
}

pub fn get_imm_i(inst: u32) -> i32 {
    sign_extend(inst >> 20, 12)
}

pub fn get_imm_s(inst: u32) -> i32 {
    let mut imm = (inst >> 7) & 0x1f;
    imm |= ((inst >> 25) & 0x7f) << 5;
    sign_extend(imm, 12)
}

pub fn get_imm_b(inst: u32) -> i32 {
    let mut imm = ((inst >> 8) & 0x0f) << 1;
    imm |= ((inst >> 25) & 0x3f) << 5;
    imm |= ((inst >> 7) & 0x01) << 11;
    imm |= (inst >> 31) << 12;
    sign_extend(imm, 13)
}

pub fn get_imm_u(inst: u32) -> i32 {
    sign_extend(inst & 0xffff_f000, 32)
}

pub fn get_imm_j(inst: u32) -> i32 {
    let mut imm = ((inst >> 21) & 0x3ff) << 1;
    imm |= ((inst >> 20) & 0x01) << 11;
    imm |= ((inst >> 12) & 0xff) << 12;
    imm |= (inst >> 31) << 20;
    sign_extend(imm, 21)
}

/// A decoded RV32I instruction.
///
/// Encodings that land on a known opcode but an unassigned funct3/funct7
/// slot decode to one of the `Unknown*` placeholders, which keep the operand
/// layout of their format. Anything else decodes to [`Op::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    // r-type
    Add { rd: usize, rs1: usize, rs2: usize },
    Sub { rd: usize, rs1: usize, rs2: usize },
    Sll { rd: usize, rs1: usize, rs2: usize },
    Slt { rd: usize, rs1: usize, rs2: usize },
    Sltu { rd: usize, rs1: usize, rs2: usize },
    Xor { rd: usize, rs1: usize, rs2: usize },
    Srl { rd: usize, rs1: usize, rs2: usize },
    Sra { rd: usize, rs1: usize, rs2: usize },
    Or { rd: usize, rs1: usize, rs2: usize },
    And { rd: usize, rs1: usize, rs2: usize },

    // i-type
    Addi { rd: usize, rs1: usize, imm: i32 },
    Slti { rd: usize, rs1: usize, imm: i32 },
    Sltiu { rd: usize, rs1: usize, imm: i32 },
    Xori { rd: usize, rs1: usize, imm: i32 },
    Ori { rd: usize, rs1: usize, imm: i32 },
    Andi { rd: usize, rs1: usize, imm: i32 },
    // shifts keep the whole 12-bit immediate, not just shamt
    Slli { rd: usize, rs1: usize, imm: i32 },
    Srli { rd: usize, rs1: usize, imm: i32 },
    Srai { rd: usize, rs1: usize, imm: i32 },

    // branch
    Beq { rs1: usize, rs2: usize, offset: i32 },
    Bne { rs1: usize, rs2: usize, offset: i32 },
    Blt { rs1: usize, rs2: usize, offset: i32 },
    Bge { rs1: usize, rs2: usize, offset: i32 },
    Bltu { rs1: usize, rs2: usize, offset: i32 },
    Bgeu { rs1: usize, rs2: usize, offset: i32 },

    // jump
    Jal { rd: usize, offset: i32 },
    Jalr { rd: usize, rs1: usize, offset: i32 },

    // load
    Lb { rd: usize, rs1: usize, offset: i32 },
    Lh { rd: usize, rs1: usize, offset: i32 },
    Lw { rd: usize, rs1: usize, offset: i32 },
    Lbu { rd: usize, rs1: usize, offset: i32 },
    Lhu { rd: usize, rs1: usize, offset: i32 },

    // store
    Sb { rs1: usize, rs2: usize, offset: i32 },
    Sh { rs1: usize, rs2: usize, offset: i32 },
    Sw { rs1: usize, rs2: usize, offset: i32 },

    // u-type
    Lui { rd: usize, imm: i32 },
    Auipc { rd: usize, imm: i32 },

    // placeholders for unassigned funct3/funct7 slots
    UnknownBranch { rs1: usize, rs2: usize, offset: i32 },
    UnknownLoad { rd: usize, rs1: usize, offset: i32 },
    UnknownStore { rs1: usize, rs2: usize, offset: i32 },
    UnknownAluImm { rd: usize, rs1: usize, imm: i32 },
    UnknownAlu { rd: usize, rs1: usize, rs2: usize },

    Unknown { inst: u32 },
}

impl Op {
    pub fn new(inst: u32) -> Self {
        InstructionDecoder::decode(inst)
    }

    /// False for the placeholder variants and for unknown opcodes.
    pub fn is_known(&self) -> bool {
        !matches!(
            self,
            Op::UnknownBranch { .. }
                | Op::UnknownLoad { .. }
                | Op::UnknownStore { .. }
                | Op::UnknownAluImm { .. }
                | Op::UnknownAlu { .. }
                | Op::Unknown { .. }
        )
    }

    pub fn mnemonic(&self) -> &'static str {
        match self.to_fields()[0] {
            Field::Opcode(name) => name,
            _ => "unknown",
        }
    }

    pub fn to_fields(&self) -> Vec<Field> {
        use Field::{Imm, Indirect, Opcode, Reg, Word};

        match *self {
            // r-type
            Op::Add { rd, rs1, rs2 } => vec![Opcode("add"), Reg(rd), Reg(rs1), Reg(rs2)],
            Op::Sub { rd, rs1, rs2 } => vec![Opcode("sub"), Reg(rd), Reg(rs1), Reg(rs2)],
            Op::Sll { rd, rs1, rs2 } => vec![Opcode("sll"), Reg(rd), Reg(rs1), Reg(rs2)],
            Op::Slt { rd, rs1, rs2 } => vec![Opcode("slt"), Reg(rd), Reg(rs1), Reg(rs2)],
            Op::Sltu { rd, rs1, rs2 } => vec![Opcode("sltu"), Reg(rd), Reg(rs1), Reg(rs2)],
            Op::Xor { rd, rs1, rs2 } => vec![Opcode("xor"), Reg(rd), Reg(rs1), Reg(rs2)],
            Op::Srl { rd, rs1, rs2 } => vec![Opcode("srl"), Reg(rd), Reg(rs1), Reg(rs2)],
            Op::Sra { rd, rs1, rs2 } => vec![Opcode("sra"), Reg(rd), Reg(rs1), Reg(rs2)],
            Op::Or { rd, rs1, rs2 } => vec![Opcode("or"), Reg(rd), Reg(rs1), Reg(rs2)],
            Op::And { rd, rs1, rs2 } => vec![Opcode("and"), Reg(rd), Reg(rs1), Reg(rs2)],

            // i-type
            Op::Addi { rd, rs1, imm } => vec![Opcode("addi"), Reg(rd), Reg(rs1), Imm(imm)],
            Op::Slti { rd, rs1, imm } => vec![Opcode("slti"), Reg(rd), Reg(rs1), Imm(imm)],
            Op::Sltiu { rd, rs1, imm } => vec![Opcode("sltiu"), Reg(rd), Reg(rs1), Imm(imm)],
            Op::Xori { rd, rs1, imm } => vec![Opcode("xori"), Reg(rd), Reg(rs1), Imm(imm)],
            Op::Ori { rd, rs1, imm } => vec![Opcode("ori"), Reg(rd), Reg(rs1), Imm(imm)],
            Op::Andi { rd, rs1, imm } => vec![Opcode("andi"), Reg(rd), Reg(rs1), Imm(imm)],
            Op::Slli { rd, rs1, imm } => vec![Opcode("slli"), Reg(rd), Reg(rs1), Imm(imm)],
            Op::Srli { rd, rs1, imm } => vec![Opcode("srli"), Reg(rd), Reg(rs1), Imm(imm)],
            Op::Srai { rd, rs1, imm } => vec![Opcode("srai"), Reg(rd), Reg(rs1), Imm(imm)],

            // branch
            Op::Beq { rs1, rs2, offset } => vec![Opcode("beq"), Reg(rs1), Reg(rs2), Imm(offset)],
            Op::Bne { rs1, rs2, offset } => vec![Opcode("bne"), Reg(rs1), Reg(rs2), Imm(offset)],
            Op::Blt { rs1, rs2, offset } => vec![Opcode("blt"), Reg(rs1), Reg(rs2), Imm(offset)],
            Op::Bge { rs1, rs2, offset } => vec![Opcode("bge"), Reg(rs1), Reg(rs2), Imm(offset)],
            Op::Bltu { rs1, rs2, offset } => vec![Opcode("bltu"), Reg(rs1), Reg(rs2), Imm(offset)],
            Op::Bgeu { rs1, rs2, offset } => vec![Opcode("bgeu"), Reg(rs1), Reg(rs2), Imm(offset)],

            // jump
            Op::Jal { rd, offset } => vec![Opcode("jal"), Reg(rd), Imm(offset)],
            Op::Jalr { rd, rs1, offset } => vec![Opcode("jalr"), Reg(rd), Reg(rs1), Imm(offset)],

            // load
            Op::Lb { rd, rs1, offset } => vec![Opcode("lb"), Reg(rd), Indirect(offset, rs1)],
            Op::Lh { rd, rs1, offset } => vec![Opcode("lh"), Reg(rd), Indirect(offset, rs1)],
            Op::Lw { rd, rs1, offset } => vec![Opcode("lw"), Reg(rd), Indirect(offset, rs1)],
            Op::Lbu { rd, rs1, offset } => vec![Opcode("lbu"), Reg(rd), Indirect(offset, rs1)],
            Op::Lhu { rd, rs1, offset } => vec![Opcode("lhu"), Reg(rd), Indirect(offset, rs1)],

            // store
            Op::Sb { rs1, rs2, offset } => vec![Opcode("sb"), Reg(rs2), Indirect(offset, rs1)],
            Op::Sh { rs1, rs2, offset } => vec![Opcode("sh"), Reg(rs2), Indirect(offset, rs1)],
            Op::Sw { rs1, rs2, offset } => vec![Opcode("sw"), Reg(rs2), Indirect(offset, rs1)],

            // u-type
            Op::Lui { rd, imm } => vec![Opcode("lui"), Reg(rd), Imm(imm)],
            Op::Auipc { rd, imm } => vec![Opcode("auipc"), Reg(rd), Imm(imm)],

            Op::UnknownBranch { rs1, rs2, offset } => vec![Opcode("b?"), Reg(rs1), Reg(rs2), Imm(offset)],
            Op::UnknownLoad { rd, rs1, offset } => vec![Opcode("l?"), Reg(rd), Indirect(offset, rs1)],
            Op::UnknownStore { rs1, rs2, offset } => vec![Opcode("s?"), Reg(rs2), Indirect(offset, rs1)],
            Op::UnknownAluImm { rd, rs1, imm } => vec![Opcode("opimm?"), Reg(rd), Reg(rs1), Imm(imm)],
            Op::UnknownAlu { rd, rs1, rs2 } => vec![Opcode("op?"), Reg(rd), Reg(rs1), Reg(rs2)],

            Op::Unknown { inst } => vec![Opcode("unknown"), Word(inst)],
        }
    }

    /// Operand text after the mnemonic, e.g. `x10,8(x2)`.
    pub fn operands(&self) -> String {
        self.to_fields()[1..].iter().map(Field::to_string).collect::<Vec<_>>().join(",")
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operands = self.operands();
        if operands.is_empty() {
            write!(f, "{}", self.mnemonic())
        } else {
            write!(f, "{} {}", self.mnemonic(), operands)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Opcode(&'static str),
    Reg(usize),
    Imm(i32),
    Indirect(i32, usize),
    Word(u32),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Opcode(inst) => write!(f, "{}", inst),
            Field::Reg(reg) => write!(f, "x{}", reg),
            Field::Imm(i) => write!(f, "{}", i),
            Field::Indirect(imm, reg) => write!(f, "{}(x{})", imm, reg),
            Field::Word(inst) => write!(f, "0x{:08x}", inst),
        }
    }
}

/// Decode a raw instruction word into its assembly text.
///
/// Total over all 32-bit inputs: encodings outside RV32I come back as
/// placeholder mnemonics rather than errors.
pub fn disassemble(inst: u32) -> String {
    Op::new(inst).to_string()
}
