/*++

Licensed under the Apache-2.0 license.

File Name:

    wdt.rs

Abstract:

    File contains the interface the boot loader uses to service the watchdog.

--*/

/// Watchdog that must be restarted during long running boot steps
pub trait Watchdog {
    /// Restart the countdown
    fn restart(&mut self);
}

/// Used when the platform has no watchdog instantiated
#[derive(Default, Debug)]
pub struct NoWatchdog;

impl Watchdog for NoWatchdog {
    fn restart(&mut self) {}
}
