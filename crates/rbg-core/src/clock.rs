use rbg_model::BuildDate;

/// Source of "now" for age checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> BuildDate;
}

/// Wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> BuildDate {
        BuildDate::now()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub BuildDate);

impl Clock for FixedClock {
    fn now(&self) -> BuildDate {
        self.0
    }
}
