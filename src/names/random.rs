//! Injected randomness.
//!
//! The generator never reaches for a global RNG. Every random decision goes
//! through a [`RandomSource`], which is implemented for any `rand::Rng`
//! (so `rand::thread_rng()` and seeded `StdRng`s both work) and can be
//! replaced by a scripted source in tests.

use rand::Rng;

/// The two kinds of random decision the generator makes.
pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// True with probability `odds.hits / odds.out_of`.
    fn chance(&mut self, odds: Odds) -> bool {
        odds.hits > 0 && self.index(odds.out_of as usize) < odds.hits as usize
    }

    /// Fair coin.
    fn coin(&mut self) -> bool {
        self.chance(Odds::new(1, 2))
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// A probability expressed as `hits` in `out_of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Odds {
    pub hits: u32,
    pub out_of: u32,
}

impl Odds {
    /// `hits` in `out_of`; `out_of` is clamped to at least 1 and `hits` to at
    /// most `out_of`.
    pub const fn new(hits: u32, out_of: u32) -> Self {
        let out_of = if out_of == 0 { 1 } else { out_of };
        let hits = if hits > out_of { out_of } else { hits };
        Odds { hits, out_of }
    }

    pub const NEVER: Odds = Odds::new(0, 1);
    pub const ALWAYS: Odds = Odds::new(1, 1);
}

/// Pick a uniformly random element of `items`, or `None` if empty.
pub(crate) fn pick<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() { None } else { items.get(rng.index(items.len())) }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn odds_clamp() {
        assert_eq!(Odds::new(5, 3), Odds { hits: 3, out_of: 3 });
        assert_eq!(Odds::new(1, 0), Odds { hits: 1, out_of: 1 });
    }

    #[test]
    fn never_and_always_are_exact() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(!rng.chance(Odds::NEVER));
            assert!(rng.chance(Odds::ALWAYS));
        }
    }

    #[test]
    fn two_in_three_is_roughly_two_thirds() {
        let mut rng = StdRng::seed_from_u64(11);
        let hits = (0..3000).filter(|_| rng.chance(Odds::new(2, 3))).count();
        assert!((1800..2200).contains(&hits), "got {hits} hits of 3000");
    }

    #[test]
    fn pick_handles_empty_and_scripted_choice() {
        let mut rng = scripted::Scripted::new(&[2]);
        assert_eq!(pick(&mut rng, &["a", "b", "c"]), Some(&"c"));
        assert_eq!(pick::<&str>(&mut rng, &[]), None);
    }
}
