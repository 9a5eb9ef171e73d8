use block_buffer::byteorder::{ByteOrder, BE};

use crate::consts::{BLOCK_SIZE, STATE_LEN, T_0, T_1};

#[inline(always)]
fn ff0(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn ff1(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

#[inline(always)]
fn gg0(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn gg1(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

#[inline(always)]
fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

/// 5.3.2 Message Expansion: W0..W67 and W'0..W'63
fn expand(block: &[u8; BLOCK_SIZE]) -> ([u32; 68], [u32; 64]) {
    let mut w = [0u32; 68];
    let mut w_prime = [0u32; 64];

    BE::read_u32_into(block, &mut w[..16]);
    for j in 16..68 {
        w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
            ^ w[j - 13].rotate_left(7)
            ^ w[j - 6];
    }
    for j in 0..64 {
        w_prime[j] = w[j] ^ w[j + 4];
    }
    (w, w_prime)
}

#[inline(always)]
fn round(
    regs: &mut [u32; STATE_LEN],
    j: usize,
    t: u32,
    ff: fn(u32, u32, u32) -> u32,
    gg: fn(u32, u32, u32) -> u32,
    w: u32,
    w_prime: u32,
) {
    let [a, b, c, d, e, f, g, h] = *regs;
    let a12 = a.rotate_left(12);
    let ss1 = a12
        .wrapping_add(e)
        .wrapping_add(t.rotate_left((j % 32) as u32))
        .rotate_left(7);
    let ss2 = ss1 ^ a12;
    let tt1 = ff(a, b, c)
        .wrapping_add(d)
        .wrapping_add(ss2)
        .wrapping_add(w_prime);
    let tt2 = gg(e, f, g)
        .wrapping_add(h)
        .wrapping_add(ss1)
        .wrapping_add(w);
    *regs = [
        tt1,
        a,
        b.rotate_left(9),
        c,
        p0(tt2),
        e,
        f.rotate_left(19),
        g,
    ];
}

/// CF: compress function.
///
/// Advances `state` by one 64-byte block and returns the new state. The input
/// state is left untouched, so the same call always yields the same output.
pub fn compress256(state: &[u32; STATE_LEN], block: &[u8; BLOCK_SIZE]) -> [u32; STATE_LEN] {
    let (w, w_prime) = expand(block);

    let mut regs = *state;
    for j in 0..16 {
        round(&mut regs, j, T_0, ff0, gg0, w[j], w_prime[j]);
    }
    for j in 16..64 {
        round(&mut regs, j, T_1, ff1, gg1, w[j], w_prime[j]);
    }

    let mut out = [0u32; STATE_LEN];
    for (o, (s, r)) in out.iter_mut().zip(state.iter().zip(regs.iter())) {
        *o = s ^ r;
    }
    out
}
