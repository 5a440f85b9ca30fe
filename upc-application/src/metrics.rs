use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    lookups: AtomicU64,
    lookup_errors: AtomicU64,
    invalid_items: AtomicU64,
}

impl Metrics {
    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lookup_error(&self) {
        self.lookup_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_invalid_item(&self) {
        self.invalid_items.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let lookups = self.lookups.load(Ordering::Relaxed);
        let errors = self.lookup_errors.load(Ordering::Relaxed);
        let invalid = self.invalid_items.load(Ordering::Relaxed);

        format!(
            "# TYPE upc_lookups_total counter\n\
upc_lookups_total {}\n\
# TYPE upc_lookup_errors_total counter\n\
upc_lookup_errors_total {}\n\
# TYPE upc_invalid_items_total counter\n\
upc_invalid_items_total {}\n",
            lookups, errors, invalid
        )
    }
}
