use block_buffer::byteorder::{ByteOrder, BE};
use block_buffer::BlockBuffer;
use digest::generic_array::typenum::{U32, U64};
use digest::generic_array::GenericArray;
use digest::{BlockInput, FixedOutput, Input, Reset};

use crate::consts::{BLOCK_SIZE, IV, SIZE, STATE_LEN};
use crate::utils::compress256;

type BlockSize = U64;
type Block = GenericArray<u8, BlockSize>;

// the 64-bit bit length occupies the last 8 bytes of the final block
const LEN_OFFSET: usize = BLOCK_SIZE - 8;

#[derive(Clone)]
struct EngineState {
    h: [u32; STATE_LEN],
}

impl EngineState {
    fn new() -> EngineState {
        EngineState { h: IV }
    }

    fn process_block(&mut self, block: &Block) {
        // GenericArray<u8, U64> has the layout of [u8; 64]
        let block = unsafe { &*(block.as_ptr() as *const [u8; BLOCK_SIZE]) };
        self.h = compress256(&self.h, block);
    }
}

#[derive(Clone)]
struct Engine {
    /// total bytes written, wraps at 2^64
    len: u64,
    buffer: BlockBuffer<BlockSize>,
    state: EngineState,
}

impl Engine {
    fn new() -> Engine {
        Engine {
            len: 0,
            buffer: Default::default(),
            state: EngineState::new(),
        }
    }

    fn input(&mut self, input: &[u8]) {
        self.len = self.len.wrapping_add(input.len() as u64);
        let self_state = &mut self.state;
        self.buffer
            .input(input, |block| self_state.process_block(block));
    }

    /// Appends 0x80, zeros up to 56 mod 64, then the bit length, all through
    /// `input`. Leaves the engine holding the final state.
    fn finish(&mut self) {
        let len = self.len;
        let mut tmp = [0u8; BLOCK_SIZE];
        tmp[0] = 0x80;

        let rem = (len % BLOCK_SIZE as u64) as usize;
        let pad = if rem < LEN_OFFSET {
            LEN_OFFSET - rem
        } else {
            BLOCK_SIZE + LEN_OFFSET - rem
        };
        self.input(&tmp[..pad]);

        BE::write_u64(&mut tmp[..8], len << 3);
        self.input(&tmp[..8]);

        assert_eq!(
            self.buffer.position(),
            0,
            "sm3: block buffer not empty after length padding"
        );
    }

    fn checksum(mut self) -> [u8; SIZE] {
        self.finish();
        let mut out = [0u8; SIZE];
        BE::write_u32_into(&self.state.h, &mut out);
        out
    }

    fn reset(&mut self) {
        self.len = 0;
        self.buffer.reset();
        self.state = EngineState::new();
    }
}

/// Incremental SM3 hasher.
///
/// Input may be fed in chunks of any size; the digest only depends on the
/// concatenation of everything written since construction or the last reset.
///
/// ```
/// use sm3::Sm3;
///
/// let mut hasher = Sm3::new();
/// hasher.write(b"ab");
/// hasher.write(b"c");
/// assert_eq!(hasher.sum(), sm3::sum(b"abc"));
/// ```
#[derive(Clone)]
pub struct Sm3 {
    engine: Engine,
}

impl Sm3 {
    /// Creates a hasher loaded with the standard IV.
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorbs `data` and returns the number of bytes accepted, which is
    /// always `data.len()`.
    pub fn write(&mut self, data: &[u8]) -> usize {
        self.engine.input(data);
        data.len()
    }

    /// Digest of everything written so far. The hasher itself is not
    /// finalized and can keep accepting input.
    pub fn sum(&self) -> [u8; SIZE] {
        self.engine.clone().checksum()
    }

    /// Discards all input and returns to the initial state.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    pub fn size(&self) -> usize {
        SIZE
    }

    pub fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}

impl Default for Sm3 {
    fn default() -> Self {
        Sm3 {
            engine: Engine::new(),
        }
    }
}

impl BlockInput for Sm3 {
    type BlockSize = BlockSize;
}

impl Input for Sm3 {
    fn input<B: AsRef<[u8]>>(&mut self, input: B) {
        self.engine.input(input.as_ref());
    }
}

impl FixedOutput for Sm3 {
    type OutputSize = U32;

    fn fixed_result(self) -> GenericArray<u8, Self::OutputSize> {
        GenericArray::clone_from_slice(&self.engine.checksum())
    }
}

impl Reset for Sm3 {
    fn reset(&mut self) {
        self.engine.reset();
    }
}

opaque_debug::impl_opaque_debug!(Sm3);

#[cfg(feature = "std")]
impl std::io::Write for Sm3 {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.engine.input(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
