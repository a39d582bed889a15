//! 可注入的随机数源
//!
//! 引擎只通过这里取随机数，固定种子即可复现 AI 的每一步。

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// 引擎随机数源
#[derive(Debug, Clone)]
pub struct EngineRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl EngineRng {
    /// 使用固定种子创建
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// 使用系统熵生成种子
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// 创建时使用的种子（用于复现）
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for EngineRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
