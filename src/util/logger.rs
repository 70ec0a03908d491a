use tracing_subscriber::{Layer, Registry, filter::LevelFilter, layer::SubscriberExt,
                         util::SubscriberInitExt};

/// Maps the number of `-v` flags to a level filter.
///
/// No flag keeps warnings only; every extra flag lowers the threshold one
/// step, down to `TRACE`.
///
/// ## Example
/// ```
/// use calcline::util::logger::level_for_verbosity;
/// use tracing_subscriber::filter::LevelFilter;
///
/// assert_eq!(level_for_verbosity(0), LevelFilter::WARN);
/// assert_eq!(level_for_verbosity(2), LevelFilter::DEBUG);
/// assert_eq!(level_for_verbosity(9), LevelFilter::TRACE);
/// ```
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber: `[LEVEL] message` lines on stderr, without
/// timestamps, targets or colors.
///
/// Must be called at most once per process.
pub fn init_with_level(level: LevelFilter) {
    let layer = tracing_subscriber::fmt::layer().without_time()
                                                .with_target(false)
                                                .with_level(true)
                                                .with_ansi(false)
                                                .with_writer(std::io::stderr)
                                                .compact()
                                                .with_filter(level);

    Registry::default().with(layer).init();
}
