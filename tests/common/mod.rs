//! Shared test doubles: recording pins and a simulated microsecond clock.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin, PinState};
use stepper_wave::Clock;

/// Output pin that records every write, with shared handles so the test
/// can inspect writes after the pin has been moved into the motor.
#[derive(Clone, Default)]
pub struct SimPin {
    writes: Rc<RefCell<Vec<PinState>>>,
}

impl SimPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes performed on this pin.
    pub fn write_count(&self) -> usize {
        self.writes.borrow().len()
    }

    /// The most recent level written, if any.
    pub fn last(&self) -> Option<PinState> {
        self.writes.borrow().last().copied()
    }

    /// All levels written, in order.
    pub fn writes(&self) -> Vec<PinState> {
        self.writes.borrow().clone()
    }
}

impl ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.writes.borrow_mut().push(PinState::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.writes.borrow_mut().push(PinState::High);
        Ok(())
    }
}

/// Simulated monotonic microsecond clock.
///
/// The counter lives behind a shared handle: tests keep a clone, set or
/// read the time, and optionally let each sample auto-advance by a fixed
/// tick so blocking busy-waits terminate.
#[derive(Clone)]
pub struct SimClock {
    now: Rc<Cell<u64>>,
    tick: u64,
}

impl SimClock {
    /// Clock that only moves when the test calls [`set`](Self::set).
    pub fn manual() -> Self {
        Self {
            now: Rc::new(Cell::new(0)),
            tick: 0,
        }
    }

    /// Clock that advances by `tick` microseconds on every sample.
    pub fn ticking(tick: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(0)),
            tick,
        }
    }

    /// Set the current time.
    pub fn set(&self, t: u64) {
        self.now.set(t);
    }

    /// Read the current time without advancing it.
    pub fn now(&self) -> u64 {
        self.now.get()
    }
}

impl Clock for SimClock {
    fn now_us(&mut self) -> u64 {
        let t = self.now.get();
        self.now.set(t.wrapping_add(self.tick));
        t
    }
}

/// Four fresh recording pins plus inspection handles.
pub fn sim_pins() -> ((SimPin, SimPin, SimPin, SimPin), [SimPin; 4]) {
    let pins = (SimPin::new(), SimPin::new(), SimPin::new(), SimPin::new());
    let handles = [pins.0.clone(), pins.1.clone(), pins.2.clone(), pins.3.clone()];
    (pins, handles)
}
