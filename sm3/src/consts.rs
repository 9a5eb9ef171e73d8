pub const STATE_LEN: usize = 8;

/// Digest length in bytes.
pub const SIZE: usize = 32;

/// Compression function input width in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Initial value, GM/T 0004-2012 4.1
pub const IV: [u32; STATE_LEN] = [
    0x7380_166f,
    0x4914_b2b9,
    0x1724_42d7,
    0xda8a_0600,
    0xa96f_30bc,
    0x1631_38aa,
    0xe38d_ee4d,
    0xb0fb_0e4e,
];

// round constants, j in 0..=15 and 16..=63
pub const T_0: u32 = 0x79cc_4519;
pub const T_1: u32 = 0x7a87_9d8a;
