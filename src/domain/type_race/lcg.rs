//! 32-bit linear congruential generator.

/// Multiplier of the recurrence.
const MULTIPLIER: u32 = 0x41C6_4E6D;

/// Increment of the recurrence.
const INCREMENT: u32 = 0x0000_6073;

/// Short-lived generator; create one per shuffle.
///
/// `seed = seed * 0x41C64E6D + 0x6073 (mod 2^32)`, output is the high
/// 16 bits of the new seed.
#[derive(Debug, Clone)]
pub struct Lcg {
    seed: u32,
}

impl Lcg {
    /// Seeds the generator. The seed is reduced modulo 2^32, so negative
    /// and oversized products are accepted.
    pub fn new(seed: i64) -> Self {
        Self { seed: seed as u32 }
    }

    /// Advances the state once.
    pub fn step(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.seed
    }

    /// Draws an integer in `0..=max` (inclusive upper bound).
    pub fn next_bounded(&mut self, max: u32) -> u32 {
        let high = u64::from(self.step() >> 16);
        // `high` fits in 16 bits, so the remainder always fits back in u32
        (high % (u64::from(max) + 1)) as u32
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_steps_from_zero() {
        let mut lcg = Lcg::new(0);
        assert_eq!(lcg.step(), 0x6073);
        assert_eq!(lcg.step(), 0xE97E_7B6A);
        assert_eq!(lcg.step(), 0x5271_3895);
    }

    #[test]
    fn bounded_draw_uses_high_half() {
        let mut lcg = Lcg::new(0);
        lcg.step();
        // 0xE97E7B6A >> 16 == 59774
        assert_eq!(lcg.next_bounded(u32::MAX - 1), 59774);
    }

    #[test]
    fn bounded_draw_includes_upper_bound() {
        // 59774 % (59774 + 1) keeps the bound itself reachable
        let mut lcg = Lcg::new(0);
        lcg.step();
        assert_eq!(lcg.next_bounded(59774), 59774);
    }

    #[test]
    fn bounded_draw_accepts_full_range() {
        let mut lcg = Lcg::new(0);
        lcg.step();
        assert_eq!(lcg.next_bounded(u32::MAX), 59774);
        assert_eq!(lcg.next_bounded(0), 0);
    }

    #[test]
    fn negative_seeds_wrap_modulo_two_pow_32() {
        let mut a = Lcg::new(-200);
        let mut b = Lcg::new((1i64 << 32) - 200);
        assert_eq!(a.seed(), b.seed());
        assert_eq!(a.step(), b.step());
    }
}
