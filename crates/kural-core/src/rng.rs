// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Injected randomness: every component that draws entries or shuffles
//! options takes a `&mut impl RandomSource`, so a fixed seed reproduces the
//! same quiz.

use crate::error::EngineError;

/// A source of uniformly distributed 32-bit values.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    /// Uniform integer in `[0, max)`. `max` must be non-zero.
    fn below(&mut self, max: usize) -> usize {
        debug_assert!(max > 0);
        // Multiply-shift keeps the result unbiased enough for corpus-sized ranges.
        ((self.next_u32() as u64 * max as u64) >> 32) as usize
    }
}

/// A minimal, zero-dependency, completely insecure PRNG.
pub struct TinyRng {
    state: u64,
}

const A: u64 = 6364136223846793005;
const C: u64 = 1442695040888963407;

impl TinyRng {
    /// Initialize the RNG from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RandomSource for TinyRng {
    fn next_u32(&mut self) -> u32 {
        let new = self.state.wrapping_mul(A).wrapping_add(C);
        self.state = new;
        (new >> 32) as u32
    }
}

/// Pick one element uniformly at random.
pub fn pick<'a, T>(items: &'a [T], rng: &mut impl RandomSource) -> Result<&'a T, EngineError> {
    if items.is_empty() {
        return Err(EngineError::EmptyCollection);
    }
    Ok(&items[rng.below(items.len())])
}

/// Fisher-Yates: walk from the last index down to 1, swapping each slot with
/// a uniformly chosen slot in `[0, i]`.
pub fn shuffle<T>(v: Vec<T>, rng: &mut impl RandomSource) -> Vec<T> {
    let (v, _) = shuffle_tracking(v, 0, rng);
    v
}

/// Shuffle like [`shuffle`], and report where the element that started at
/// `tracked` ended up.
pub fn shuffle_tracking<T>(
    v: Vec<T>,
    tracked: usize,
    rng: &mut impl RandomSource,
) -> (Vec<T>, usize) {
    let mut v = v;
    let mut position = tracked;
    for i in (1..v.len()).rev() {
        let j = rng.below(i + 1);
        v.swap(i, j);
        if position == i {
            position = j;
        } else if position == j {
            position = i;
        }
    }
    (v, position)
}
