use std::{env, str::FromStr};

const ROOT_PREFIX: &str = "TRILIST";

/// Tuning for a [Driver](crate::Driver)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TessOptions {
    /// The vertex pool reserves `pool_reserve_factor` times the input vertex count, leaving
    /// room for synthesized vertices. Values below 2 are treated as 2.
    pub pool_reserve_factor: usize,
    /// Triangles reserved up front by the collector
    pub triangle_capacity: usize,
}

impl Default for TessOptions {
    fn default() -> Self {
        Self {
            pool_reserve_factor: 2,
            triangle_capacity: 4096,
        }
    }
}

impl TessOptions {
    pub fn with_pool_reserve_factor(mut self, pool_reserve_factor: usize) -> Self {
        self.pool_reserve_factor = pool_reserve_factor;
        self
    }

    pub fn with_triangle_capacity(mut self, triangle_capacity: usize) -> Self {
        self.triangle_capacity = triangle_capacity;
        self
    }

    /// The defaults, overridden by `TRILIST_POOL_RESERVE_FACTOR` and `TRILIST_TRIANGLE_CAPACITY`
    /// where those are set to valid values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            pool_reserve_factor: env_value("POOL_RESERVE_FACTOR").unwrap_or(defaults.pool_reserve_factor),
            triangle_capacity: env_value("TRIANGLE_CAPACITY").unwrap_or(defaults.triangle_capacity),
        }
    }
}

pub(crate) fn env_key(key: &str) -> String {
    format!("{}_{}", ROOT_PREFIX, key)
}

fn env_value<T: FromStr>(key: &str) -> Option<T> {
    let key = env_key(key);
    let value = env::var(&key).ok()?;
    match value.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("ignoring unparsable {}={:?}", key, value);
            None
        }
    }
}
