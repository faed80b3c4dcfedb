use std::hint::black_box;
use std::time::{Duration, Instant};

/// Times exactly one call of `f` on the monotonic clock.
///
/// The result goes through `black_box` before the second timestamp so the
/// call cannot be optimized away or moved out of the timed window.
#[inline(never)]
pub fn time_once<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let output = black_box(f());
    let elapsed = start.elapsed();
    (output, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_once_returns_output() {
        let (value, elapsed) = time_once(|| 21 * 2);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(1));
    }

    #[test]
    fn test_time_once_measures_sleep() {
        let (_, elapsed) = time_once(|| std::thread::sleep(Duration::from_millis(5)));
        assert!(elapsed >= Duration::from_millis(5));
    }
}
