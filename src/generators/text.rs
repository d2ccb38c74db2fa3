//! Plain-text generators: `many_lines`, `long_lines` and `binary`

use super::random::{random_lines, Lcg};
use super::Test;
use crate::buffer::{Buffer, MIB};
use crate::encoder;
use crate::terminal::TerminalSize;
use tracing::debug;

/// Size of the pre-generated random block
pub const RANDOM_BLOCK_SIZE: usize = 4 * MIB;

/// Re-emits a fixed block of random lines materialized during setup
pub struct RandomLines {
    name: &'static str,
    description: &'static str,
    seed: u32,
    block_size: usize,
    reset_on_teardown: bool,
    text: Vec<u8>,
}

impl RandomLines {
    #[must_use]
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            seed: Lcg::DEFAULT_SEED,
            block_size: RANDOM_BLOCK_SIZE,
            reset_on_teardown: false,
            text: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Emit a terminal reset after streaming
    #[must_use]
    pub fn reset_on_teardown(mut self) -> Self {
        self.reset_on_teardown = true;
        self
    }

    /// The block generated by the last setup
    #[must_use]
    pub fn text(&self) -> &[u8] {
        &self.text
    }
}

impl Test for RandomLines {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn setup(&mut self, _size: TerminalSize) {
        let mut rng = Lcg::new(self.seed);
        self.text = random_lines(&mut rng, self.block_size);
        debug!("{}: generated {} bytes of random text", self.name, self.text.len());
    }

    fn fill(&mut self, sink: &mut Buffer) {
        sink.write(&self.text);
    }

    fn teardown(&mut self, sink: &mut Buffer) {
        if self.reset_on_teardown {
            encoder::reset_terminal(sink);
        }
    }
}

/// Emits one random letter per fill, never a newline
pub struct LongLines {
    seed: u32,
    rng: Lcg,
}

impl LongLines {
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: Lcg::new(seed),
        }
    }
}

impl Test for LongLines {
    fn name(&self) -> &str {
        "long_lines"
    }

    fn description(&self) -> &str {
        "a single line of random letters"
    }

    fn setup(&mut self, _size: TerminalSize) {
        self.rng = Lcg::new(self.seed);
    }

    #[inline]
    fn fill(&mut self, sink: &mut Buffer) {
        sink.push(self.rng.lowercase());
    }
}

#[must_use]
pub fn many_lines() -> Box<dyn Test> {
    Box::new(RandomLines::new("many_lines", "random text split into lines"))
}

#[must_use]
pub fn long_lines() -> Box<dyn Test> {
    Box::new(LongLines::new(Lcg::DEFAULT_SEED))
}

#[must_use]
pub fn binary() -> Box<dyn Test> {
    Box::new(
        RandomLines::new("binary", "random text followed by a terminal reset").reset_on_teardown(),
    )
}
