use crate::riscv::{
    Op, get_funct3, get_funct7, get_imm_b, get_imm_i, get_imm_j, get_imm_s, get_imm_u, get_opcode, get_rd, get_rs1,
    get_rs2,
};

pub struct InstructionDecoder;

impl InstructionDecoder {
    pub fn decode(inst: u32) -> Op {
        match get_opcode(inst) {
            0x37 => Op::Lui { rd: get_rd(inst), imm: get_imm_u(inst) },
            0x17 => Op::Auipc { rd: get_rd(inst), imm: get_imm_u(inst) },
            0x6f => Op::Jal { rd: get_rd(inst), offset: get_imm_j(inst) },
            // funct3 is not checked for jalr
            0x67 => Op::Jalr { rd: get_rd(inst), rs1: get_rs1(inst), offset: get_imm_i(inst) },
            0x63 => Self::decode_branches(inst),
            0x03 => Self::decode_load(inst),
            0x23 => Self::decode_store(inst),
            0x13 => Self::decode_i_type(inst),
            0x33 => Self::decode_r_type(inst),
            _ => Op::Unknown { inst },
        }
    }

    fn decode_branches(inst: u32) -> Op {
        let funct3 = get_funct3(inst);
        let rs1 = get_rs1(inst);
        let rs2 = get_rs2(inst);
        let offset = get_imm_b(inst);

        match funct3 {
            0 => Op::Beq { rs1, rs2, offset },
            1 => Op::Bne { rs1, rs2, offset },
            4 => Op::Blt { rs1, rs2, offset },
            5 => Op::Bge { rs1, rs2, offset },
            6 => Op::Bltu { rs1, rs2, offset },
            7 => Op::Bgeu { rs1, rs2, offset },
            _ => Op::UnknownBranch { rs1, rs2, offset },
        }
    }

    fn decode_load(inst: u32) -> Op {
        let funct3 = get_funct3(inst);
        let rd = get_rd(inst);
        let rs1 = get_rs1(inst);
        let offset = get_imm_i(inst);

        match funct3 {
            0 => Op::Lb { rd, rs1, offset },
            1 => Op::Lh { rd, rs1, offset },
            2 => Op::Lw { rd, rs1, offset },
            4 => Op::Lbu { rd, rs1, offset },
            5 => Op::Lhu { rd, rs1, offset },
            _ => Op::UnknownLoad { rd, rs1, offset },
        }
    }

    fn decode_store(inst: u32) -> Op {
        let funct3 = get_funct3(inst);
        let rs1 = get_rs1(inst);
        let rs2 = get_rs2(inst);
        let offset = get_imm_s(inst);

        match funct3 {
            0 => Op::Sb { rs1, rs2, offset },
            1 => Op::Sh { rs1, rs2, offset },
            2 => Op::Sw { rs1, rs2, offset },
            _ => Op::UnknownStore { rs1, rs2, offset },
        }
    }

    fn decode_i_type(inst: u32) -> Op {
        let funct3 = get_funct3(inst);
        let rd = get_rd(inst);
        let rs1 = get_rs1(inst);
        let imm = get_imm_i(inst);

        match funct3 {
            0 => Op::Addi { rd, rs1, imm },
            1 => Op::Slli { rd, rs1, imm },
            2 => Op::Slti { rd, rs1, imm },
            3 => Op::Sltiu { rd, rs1, imm },
            4 => Op::Xori { rd, rs1, imm },
            5 if get_funct7(inst) == 0 => Op::Srli { rd, rs1, imm },
            5 => Op::Srai { rd, rs1, imm },
            6 => Op::Ori { rd, rs1, imm },
            7 => Op::Andi { rd, rs1, imm },
            _ => Op::UnknownAluImm { rd, rs1, imm },
        }
    }

    fn decode_r_type(inst: u32) -> Op {
        let funct3 = get_funct3(inst);
        let funct7 = get_funct7(inst);
        let rd = get_rd(inst);
        let rs1 = get_rs1(inst);
        let rs2 = get_rs2(inst);

        match (funct7, funct3) {
            (0x00, 0x00) => Op::Add { rd, rs1, rs2 },
            (0x20, 0x00) => Op::Sub { rd, rs1, rs2 },
            (0x00, 0x01) => Op::Sll { rd, rs1, rs2 },
            (0x00, 0x02) => Op::Slt { rd, rs1, rs2 },
            (0x00, 0x03) => Op::Sltu { rd, rs1, rs2 },
            (0x00, 0x04) => Op::Xor { rd, rs1, rs2 },
            (0x00, 0x05) => Op::Srl { rd, rs1, rs2 },
            (0x20, 0x05) => Op::Sra { rd, rs1, rs2 },
            (0x00, 0x06) => Op::Or { rd, rs1, rs2 },
            (0x00, 0x07) => Op::And { rd, rs1, rs2 },
            _ => Op::UnknownAlu { rd, rs1, rs2 },
        }
    }
}
