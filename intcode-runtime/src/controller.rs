//! Interactive controllers
//!
//! A controller is the world outside the machine: a painting robot, an
//! arcade cabinet, a repair droid. It decides each input from its own
//! state and updates that state from the machine's output.

use intcode_spec::Word;

use crate::error::Result;
use crate::state::Status;
use crate::vm::Machine;

pub trait Controller {
    /// Next input for the machine, computed from the controller's own view of
    /// the world. `None` means the controller has nothing to say yet.
    fn next_input(&mut self) -> Option<Word>;

    /// Outputs the machine produced since the previous call, oldest first
    fn observe(&mut self, outputs: &[Word]);
}

/// Drive `machine` with `controller` until it halts.
///
/// Each round runs the machine to its next suspension, hands the new output
/// to the controller and, if the machine is waiting, asks the controller for
/// one input. Returns [`Status::BlockedOnInput`] early when the controller
/// has no input to give.
pub fn drive<C: Controller + ?Sized>(machine: &mut Machine, controller: &mut C) -> Result<Status> {
    loop {
        let status = machine.run()?;

        let outputs = machine.take_outputs();
        if !outputs.is_empty() {
            controller.observe(&outputs);
        }

        match status {
            Status::Halted => return Ok(Status::Halted),
            Status::BlockedOnInput => match controller.next_input() {
                Some(value) => machine.push_input(value),
                None => return Ok(Status::BlockedOnInput),
            },
            Status::Running => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intcode_spec::Program;

    /// Reads values until it sees 0, outputting each value doubled
    const DOUBLER: &str = "3,100,1006,100,14,1002,100,2,101,4,101,1105,1,0,99";

    struct Script {
        inputs: Vec<Word>,
        seen: Vec<Vec<Word>>,
    }

    impl Controller for Script {
        fn next_input(&mut self) -> Option<Word> {
            if self.inputs.is_empty() {
                None
            } else {
                Some(self.inputs.remove(0))
            }
        }

        fn observe(&mut self, outputs: &[Word]) {
            self.seen.push(outputs.to_vec());
        }
    }

    #[test]
    fn test_drive_until_halt() {
        let mut machine = Machine::new(&Program::load(DOUBLER).unwrap());
        let mut script = Script {
            inputs: vec![3, 5, 0],
            seen: vec![],
        };

        assert_eq!(drive(&mut machine, &mut script).unwrap(), Status::Halted);
        assert_eq!(script.seen, vec![vec![6], vec![10]]);
    }

    #[test]
    fn test_drive_returns_when_controller_is_idle() {
        let mut machine = Machine::new(&Program::load(DOUBLER).unwrap());
        let mut script = Script {
            inputs: vec![21],
            seen: vec![],
        };

        assert_eq!(
            drive(&mut machine, &mut script).unwrap(),
            Status::BlockedOnInput
        );
        assert_eq!(script.seen, vec![vec![42]]);

        script.inputs.push(0);
        assert_eq!(drive(&mut machine, &mut script).unwrap(), Status::Halted);
    }

    /// Feedback from output to input: the controller answers each output
    /// with that output plus one.
    struct Counter {
        last: Word,
    }

    impl Controller for Counter {
        fn next_input(&mut self) -> Option<Word> {
            if self.last >= 8 {
                Some(0)
            } else {
                Some(self.last + 1)
            }
        }

        fn observe(&mut self, outputs: &[Word]) {
            if let Some(&value) = outputs.last() {
                self.last = value;
            }
        }
    }

    #[test]
    fn test_controller_state_drives_inputs() {
        let mut machine = Machine::new(&Program::load(DOUBLER).unwrap());
        let mut counter = Counter { last: 0 };
        assert_eq!(drive(&mut machine, &mut counter).unwrap(), Status::Halted);
        // 1 -> 2, 3 -> 6, 7 -> 14, then 0 stops it
        assert_eq!(counter.last, 14);
    }
}
