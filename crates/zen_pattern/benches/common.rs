use std::time::Duration;

use criterion::{Criterion, Throughput};
use zen_pattern::prelude::*;

pub const SAMPLE_SIZE: usize = 30;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

/// Throughput in grid cells visited, the unit generation cost scales with.
pub fn cells_throughput(params: &GenerationParameters) -> Throughput {
    Throughput::Elements(params.grid().cell_count().max(1) as u64)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}
