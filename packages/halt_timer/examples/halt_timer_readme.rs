//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `halt_timer` package `README.md`.

use std::thread;
use std::time::Duration;

use halt_timer::{ScopedTimer, StartMode, Timer};

fn main() {
    // Measure a closure and get its result back.
    let (sum, timer) = Timer::run(|| (0..1_000_000_u64).sum::<u64>()).into_parts();
    println!("Summed to {sum} in {} us", timer.runtime_us());

    // Exclude waiting time from a measurement.
    let mut timer = Timer::new(StartMode::Automatic);
    for _ in 0..3 {
        let _sum: u64 = (0..100_000).sum();

        let _halted = timer.halt_scope();
        thread::sleep(Duration::from_millis(5));
    }
    timer.end().unwrap();
    println!(
        "Active for {:?}, halted for {:?}",
        timer.runtime(),
        timer.halt_time()
    );

    // Report how long a scope took when it exits.
    {
        let _scope = ScopedTimer::new(|timer| {
            println!("Scope took {} ms", timer.runtime_ms());
        });
        thread::sleep(Duration::from_millis(10));
    }
}
