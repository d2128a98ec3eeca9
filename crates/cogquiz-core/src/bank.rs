//! Pooled, per-band question bank.
//!
//! Each band's pool is generated lazily on first request and then reused.
//! A request larger than the pool tops it up with freshly generated
//! questions; pools only ever grow. Sampling an already-sufficient pool takes
//! a read lock only, growth takes the write lock.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::config::CogquizConfig;
use crate::generator;
use crate::model::{AgeBand, Question};

/// Questions generated per band when its pool is first touched.
pub const DEFAULT_POOL_SIZE: usize = 500;

/// Serves random question samples from per-band pools.
#[derive(Debug)]
pub struct QuestionBank {
    pools: RwLock<HashMap<AgeBand, Vec<Question>>>,
    pool_size: usize,
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE)
    }
}

impl QuestionBank {
    /// Create an empty bank whose pools will start with `pool_size` questions.
    pub fn new(pool_size: usize) -> Self {
        Self {
            pools: RwLock::new(HashMap::new()),
            pool_size,
        }
    }

    pub fn from_config(config: &CogquizConfig) -> Self {
        Self::new(config.pool_size)
    }

    /// Generate every band's pool now instead of on first request.
    pub fn warm_up(&self) {
        let mut rng = rand::rng();
        let mut pools = self.pools.write().unwrap_or_else(PoisonError::into_inner);
        for band in AgeBand::ALL {
            pools
                .entry(band)
                .or_insert_with(|| generator::generate(band, self.pool_size, &mut rng));
        }
        info!(
            six_to_eight = pools.get(&AgeBand::SixToEight).map_or(0, Vec::len),
            nine_to_eleven = pools.get(&AgeBand::NineToEleven).map_or(0, Vec::len),
            twelve_to_fourteen = pools.get(&AgeBand::TwelveToFourteen).map_or(0, Vec::len),
            "question bank initialized"
        );
    }

    /// Generate `count` fresh questions without touching the pools.
    pub fn generate(&self, band: AgeBand, count: usize) -> Vec<Question> {
        generator::generate(band, count, &mut rand::rng())
    }

    /// Sample `count` distinct questions for `band`.
    pub fn get_questions(&self, band: AgeBand, count: usize) -> Vec<Question> {
        self.get_questions_with_rng(band, count, &mut rand::rng())
    }

    /// Like [`get_questions`](Self::get_questions), for a band label.
    /// Unrecognized labels are served from the 6-8 band.
    pub fn get_questions_for_label(&self, label: &str, count: usize) -> Vec<Question> {
        self.get_questions(AgeBand::from_label_or_default(label), count)
    }

    /// Sample with a caller-supplied RNG.
    ///
    /// Returns `min(count, pool size after top-up)` questions, drawn without
    /// replacement.
    pub fn get_questions_with_rng<R: Rng + ?Sized>(
        &self,
        band: AgeBand,
        count: usize,
        rng: &mut R,
    ) -> Vec<Question> {
        if count == 0 {
            return Vec::new();
        }

        {
            let pools = self.pools.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(pool) = pools.get(&band) {
                if pool.len() >= count {
                    return sample(pool, count, rng);
                }
            }
        }

        let mut pools = self.pools.write().unwrap_or_else(PoisonError::into_inner);
        let pool = pools.entry(band).or_insert_with(|| {
            debug!(%band, size = self.pool_size, "generating question pool");
            generator::generate(band, self.pool_size, rng)
        });

        if pool.len() < count {
            let shortfall = count - pool.len();
            debug!(%band, pool = pool.len(), shortfall, "topping up question pool");
            let next_number = pool.len() + 1;
            pool.extend(generator::generate_from(band, next_number, shortfall, rng));
        }

        sample(pool, count, rng)
    }

    /// Current pool size for `band` (0 if not yet generated).
    pub fn pool_len(&self, band: AgeBand) -> usize {
        self.pools
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&band)
            .map_or(0, Vec::len)
    }
}

fn sample<R: Rng + ?Sized>(pool: &[Question], count: usize, rng: &mut R) -> Vec<Question> {
    let selected: Vec<Question> = pool
        .choose_multiple(rng, count.min(pool.len()))
        .cloned()
        .collect();
    debug!(requested = count, selected = selected.len(), "sampled questions");
    selected
}
