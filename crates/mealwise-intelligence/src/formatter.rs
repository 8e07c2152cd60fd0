// ABOUTME: Renders meal candidates into the reply text and appends follow-up prompts
// ABOUTME: Follow-up selection goes through an injectable FollowUpSource for deterministic tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealwise Contributors

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::constants::messages::{CLARIFICATION_PROMPT, MEAL_OPTIONS_HEADER};
use crate::constants::FOLLOW_UP_PROMPTS;
use crate::models::{MealCandidate, NutrientValue};

/// Source of follow-up prompts
///
/// Returns `None` only for an empty pool.
pub trait FollowUpSource: Send + Sync {
    /// Pick one prompt from `pool`
    fn next_follow_up(&self, pool: &[&str]) -> Option<String>;
}

/// Uniform random choice using the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomFollowUp;

impl FollowUpSource for RandomFollowUp {
    fn next_follow_up(&self, pool: &[&str]) -> Option<String> {
        pool.choose(&mut rand::thread_rng())
            .map(|prompt| (*prompt).to_owned())
    }
}

/// Reproducible random choice from a fixed seed
#[derive(Debug)]
pub struct SeededFollowUp {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededFollowUp {
    /// Create a source seeded with `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl FollowUpSource for SeededFollowUp {
    fn next_follow_up(&self, pool: &[&str]) -> Option<String> {
        // Poisoning leaves the rng state intact
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        pool.choose(&mut *rng).map(|prompt| (*prompt).to_owned())
    }
}

/// Always picks the prompt at a fixed index (wrapping), for tests
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedFollowUp(pub usize);

impl FollowUpSource for FixedFollowUp {
    fn next_follow_up(&self, pool: &[&str]) -> Option<String> {
        if pool.is_empty() {
            return None;
        }
        Some(pool[self.0 % pool.len()].to_owned())
    }
}

/// Builds the final reply text
#[derive(Clone)]
pub struct ResponseFormatter {
    follow_ups: Arc<dyn FollowUpSource>,
    pool: &'static [&'static str],
}

impl ResponseFormatter {
    /// Formatter drawing follow-ups from the standard pool
    #[must_use]
    pub fn new(follow_ups: Arc<dyn FollowUpSource>) -> Self {
        Self {
            follow_ups,
            pool: FOLLOW_UP_PROMPTS,
        }
    }

    /// Replace the follow-up pool
    #[must_use]
    pub fn with_pool(mut self, pool: &'static [&'static str]) -> Self {
        self.pool = pool;
        self
    }

    /// Render candidates, appending one follow-up when no preference is known
    ///
    /// An empty candidate list yields the clarification prompt alone.
    #[must_use]
    pub fn format(&self, candidates: &[MealCandidate], preference_known: bool) -> String {
        if candidates.is_empty() {
            return CLARIFICATION_PROMPT.to_owned();
        }

        let mut lines = Vec::with_capacity(candidates.len() + 2);
        lines.push(MEAL_OPTIONS_HEADER.to_owned());
        lines.extend(candidates.iter().map(render_candidate));

        if !preference_known {
            if let Some(follow_up) = self.follow_ups.next_follow_up(self.pool) {
                lines.push(follow_up);
            }
        }

        lines.join("\n")
    }
}

impl Default for ResponseFormatter {
    fn default() -> Self {
        Self::new(Arc::new(RandomFollowUp))
    }
}

impl fmt::Debug for ResponseFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseFormatter")
            .field("pool_size", &self.pool.len())
            .finish_non_exhaustive()
    }
}

/// One display line for a candidate
///
/// Gram suffixes attach to known amounts only, so a missing value reads
/// `Fat: unknown` rather than `Fat: unknowng`.
#[must_use]
pub fn render_candidate(candidate: &MealCandidate) -> String {
    format!(
        "{} - {} kcal | Protein: {} | Carbs: {} | Fat: {}",
        candidate.name,
        candidate.calories,
        grams(candidate.protein),
        grams(candidate.carbs),
        grams(candidate.fat)
    )
}

fn grams(value: NutrientValue) -> String {
    if value.is_known() {
        format!("{value}g")
    } else {
        value.to_string()
    }
}
