pub mod fixtures;

use doxnav::NavigationIndex;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Initialise logging once per test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Labels of the top-level entries, in order.
pub fn labels(index: &NavigationIndex) -> Vec<&str> {
    index.iter().map(|e| e.label.as_str()).collect()
}
