//! Property tests for the wave-drive stepping state machine.

mod common;

use common::{sim_pins, SimClock};

use embedded_hal::digital::PinState;
use proptest::prelude::*;
use stepper_wave::{Rpm, StepperMotor};

fn unpaced_motor(
    steps_per_revolution: u16,
) -> (
    StepperMotor<common::SimPin, common::SimPin, common::SimPin, common::SimPin, SimClock>,
    [common::SimPin; 4],
) {
    let ((p1, p2, p3, p4), handles) = sim_pins();
    let motor = StepperMotor::builder()
        .pins(p1, p2, p3, p4)
        .clock(SimClock::manual())
        .steps_per_revolution(steps_per_revolution)
        .build()
        .unwrap();
    (motor, handles)
}

proptest! {
    /// Move(s) then Move(-s) returns the phase index to its prior value.
    #[test]
    fn round_trip_restores_phase(s in -100i32..100) {
        let (motor, _) = unpaced_motor(200);
        let start = motor.phase();

        let motor = motor.move_blocking(s).unwrap();
        let motor = motor.move_blocking(-s).unwrap();

        prop_assert_eq!(motor.phase(), start);
    }

    /// The number of phase transitions equals abs(s) * 4, observed as one
    /// write per pin per transition.
    #[test]
    fn transition_count_matches_step_count(s in -100i32..100) {
        let (motor, handles) = unpaced_motor(200);

        let _motor = motor.move_blocking(s).unwrap();

        let expected = s.unsigned_abs() as usize * 4;
        for pin in &handles {
            prop_assert_eq!(pin.write_count(), expected);
        }
    }

    /// The phase index stays in [0, 3] throughout any sequence of moves.
    #[test]
    fn phase_always_in_range(moves in proptest::collection::vec(-20i32..20, 1..8)) {
        let (mut motor, _) = unpaced_motor(200);

        for s in moves {
            let mut moving = motor.move_relative(s);
            loop {
                prop_assert!(moving.phase().index() < 4);
                if moving.poll().unwrap() {
                    break;
                }
            }
            motor = moving.finish();
            prop_assert!(motor.phase().index() < 4);
        }
    }

    /// After any nonzero move, exactly one output line is asserted and it
    /// matches the settled phase index.
    #[test]
    fn single_line_asserted_at_settle(s in 1i32..60, reverse in proptest::bool::ANY) {
        let steps = if reverse { -s } else { s };
        let (motor, handles) = unpaced_motor(200);

        let motor = motor.move_blocking(steps).unwrap();

        let phase = motor.phase().index() as usize;
        for (i, pin) in handles.iter().enumerate() {
            let expected = if i == phase { PinState::High } else { PinState::Low };
            prop_assert_eq!(pin.last(), Some(expected));
        }
    }

    /// Speed only scales timing: the pin sequence for a move is identical
    /// whatever the configured RPM.
    #[test]
    fn sequence_is_independent_of_speed(s in -30i32..30, rpm in 60.0f32..600.0) {
        let (slow, slow_pins) = unpaced_motor(200);
        let _slow = slow.move_blocking(s).unwrap();

        let ((p1, p2, p3, p4), fast_pins) = sim_pins();
        let fast = StepperMotor::builder()
            .pins(p1, p2, p3, p4)
            .clock(SimClock::ticking(500))
            .steps_per_revolution(200)
            .speed(Rpm::new(rpm).unwrap())
            .build()
            .unwrap();
        let _fast = fast.move_blocking(s).unwrap();

        for (a, b) in slow_pins.iter().zip(fast_pins.iter()) {
            prop_assert_eq!(a.writes(), b.writes());
        }
    }
}
