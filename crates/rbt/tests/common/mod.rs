use std::sync::Once;

use rbt::{Compare, RbTree};
use simplelog::{Config, LevelFilter, TestLogger};

/// Routes library logs through the test harness's captured output.
pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = TestLogger::init(LevelFilter::Trace, Config::default());
    });
}

pub fn assert_tree<T, C: Compare<T>>(tree: &RbTree<T, C>) {
    if let Err(err) = tree.assert_valid() {
        panic!("invalid tree: {err}");
    }
}

#[allow(dead_code)]
pub fn next_pseudo(seed: &mut u64, modulo: u64) -> u64 {
    *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    (*seed >> 33) % modulo
}
