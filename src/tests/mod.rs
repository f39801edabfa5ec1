use std::sync::Once;

mod sanitize_tests;

static ONCE: Once = Once::new();

fn init_logger() {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );
}
