//! Walks a timer through its whole lifecycle, printing its state along the way.
//!
//! Run with: `cargo run --example halt_timer_basic`.

use std::thread;
use std::time::Duration;

use halt_timer::{Milliseconds, StartMode, Timer, TimeUnit};

/// Tenths of a second, to show how custom units plug into the timer.
struct Deciseconds;

impl TimeUnit for Deciseconds {
    const PERIOD_NUMERATOR: u128 = 1;
    const PERIOD_DENOMINATOR: u128 = 10;
}

fn report(label: &str, timer: &Timer) {
    println!(
        "{label:<24} state={:<8} runtime={:>4} ms halted={:>4} ms",
        timer.state().to_string(),
        timer.runtime_in::<Milliseconds>(),
        timer.halt_time_ms(),
    );
}

fn main() {
    let mut timer = Timer::new(StartMode::Manual);
    report("created", &timer);

    // Illegal transitions are reported, not panics.
    if let Err(error) = timer.halt() {
        println!("halt rejected: {error}");
    }

    timer.start().unwrap();
    thread::sleep(Duration::from_millis(100));
    report("after 100 ms of work", &timer);

    timer.halt().unwrap();
    thread::sleep(Duration::from_millis(200));
    report("after 200 ms halted", &timer);

    timer.resume().unwrap();
    thread::sleep(Duration::from_millis(100));
    timer.end().unwrap();
    report("ended", &timer);

    println!(
        "runtime in deciseconds: {}",
        timer.runtime_in::<Deciseconds>()
    );

    if let Err(error) = timer.start() {
        println!("start rejected: {error}");
    }

    timer.reset(StartMode::Manual);
    report("after reset", &timer);
}
