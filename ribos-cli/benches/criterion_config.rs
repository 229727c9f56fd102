use criterion::Criterion;
use std::time::Duration;

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(2))
        .sample_size(20)
        .noise_threshold(0.02)
}
