#![forbid(unsafe_code)]
#![deny(warnings)]
#![warn(clippy::pedantic)]

use cpu_bomber::shutdown::Shutdown;
use std::time::{Duration, Instant};

#[test]
fn wait_runs_full_timeout_when_untriggered() {
    let s = Shutdown::new();
    let started = Instant::now();
    assert!(!s.wait_timeout(Duration::from_millis(50)));
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[test]
fn trigger_wakes_waiter_early() {
    let s = Shutdown::new();
    let waker = s.clone();
    let t = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(20));
        waker.trigger();
    });
    let started = Instant::now();
    assert!(s.wait_timeout(Duration::from_secs(30)));
    assert!(started.elapsed() < Duration::from_secs(10));
    t.join().expect("join");
}

#[test]
fn trigger_is_sticky_and_idempotent() {
    let s = Shutdown::new();
    assert!(!s.is_triggered());
    s.trigger();
    s.trigger();
    assert!(s.is_triggered());
    assert!(s.wait_timeout(Duration::from_secs(30)));
}
