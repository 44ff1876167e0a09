//! Canned simulator output.

/// Two cycles writing `x10` twice.
pub const TWO_CYCLE_TRANSCRIPT: &str = "\
[CYCLE 1]
Writing 0x6 to x10
--------------------
[CYCLE 2]
Writing 0xA to x10
";

/// Realistic transcript: banner preamble, three cycles, and the end-of-program block.
pub const FULL_TRANSCRIPT: &str = "\
Starting RISC-V simulation...

--------------------
[CYCLE 0]
[FETCH] PC = 0x0, IR = 0x00500093
[DECODE] opcode = 0x13, rd = x1, rs1 = x0
[EXECUTE] addi x1
[WRITEBACK] Writing 0x5 to x1
[STATE] PC = 0x4, Clock = 1

--------------------
[CYCLE 1]
[FETCH] PC = 0x4, IR = 0x00a00113
[DECODE] opcode = 0x13, rd = x2, rs1 = x0
[EXECUTE] addi x2
[WRITEBACK] Writing 0xa to x2
[STATE] PC = 0x8, Clock = 2

--------------------
[CYCLE 2]
[FETCH] PC = 0x8, IR = 0x002081b3
[DECODE] opcode = 0x33, rd = x3, rs1 = x1, rs2 = x2
[EXECUTE] add x3 = x1 + x2
[WRITEBACK] Writing 0xf to x3
[STATE] PC = 0xc, Clock = 3

--------------------
[CYCLE 3]
[INFO] No instruction at PC = 0xc. Simulation complete.
Simulation complete. Total clock cycles: 3
";

/// Three structured records: a RAW hazard with forwarding, then a taken branch.
pub const RECORD_STREAM: &str = r#"{"pipeline":{"IF":"addi x1,x0,5","ID":"---","EX":"---","MEM":"---","WB":"---"},"hazards":[],"forwarding":[],"predictor":{"PHT":{},"BTB":{}}}
{"pipeline":{"IF":"add x3,x1,x2","ID":"addi x1,x0,5","EX":"---","MEM":"---","WB":"---"},"hazards":[{"stage":"ID","type":"RAW"}],"forwarding":[{"from":"EX","to":"ID"}],"predictor":{"PHT":{},"BTB":{}}}

{"pipeline":{"IF":"beq x1,x2,8","ID":"add x3,x1,x2","EX":"addi x1,x0,5"},"hazards":[{"stage":"IF","type":"Control"}],"forwarding":[],"predictor":{"PHT":{"0x10":1},"BTB":{"0x10":"0x20","0x14":"0x30"}}}
"#;

/// A program listing with a blank and a one-token line.
pub const LISTING: &str = "\
0x0 0x00500093 , addi x1 x0 5
0x4 0x00a00113

0x8
0xc 0x002081b3
";
