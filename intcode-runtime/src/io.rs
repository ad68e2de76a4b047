//! I/O handling
//!
//! Two FIFO queues owned by the machine. Output is visible to the caller as
//! soon as OUTPUT executes; it never waits for HALT.

use std::collections::VecDeque;

use intcode_spec::Word;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IOHandler {
    inputs: VecDeque<Word>,
    outputs: VecDeque<Word>,
}

impl IOHandler {
    pub fn new(inputs: Vec<Word>) -> Self {
        IOHandler {
            inputs: inputs.into(),
            outputs: VecDeque::new(),
        }
    }

    pub fn push_input(&mut self, value: Word) {
        self.inputs.push_back(value);
    }

    pub fn extend_inputs<I: IntoIterator<Item = Word>>(&mut self, values: I) {
        self.inputs.extend(values);
    }

    /// Consume the next input, if any
    pub fn read(&mut self) -> Option<Word> {
        self.inputs.pop_front()
    }

    pub fn pending_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn write(&mut self, value: Word) {
        self.outputs.push_back(value);
    }

    /// Outputs not yet drained, oldest first
    pub fn outputs(&self) -> &VecDeque<Word> {
        &self.outputs
    }

    /// Drain the oldest output
    pub fn next_output(&mut self) -> Option<Word> {
        self.outputs.pop_front()
    }

    /// Drain every pending output
    pub fn take_outputs(&mut self) -> Vec<Word> {
        std::mem::take(&mut self.outputs).into()
    }

    pub fn last_output(&self) -> Option<Word> {
        self.outputs.back().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_are_fifo() {
        let mut io = IOHandler::new(vec![1, 2]);
        io.push_input(3);
        io.extend_inputs([4, 5]);
        assert_eq!(io.pending_inputs(), 5);
        let drained: Vec<Word> = std::iter::from_fn(|| io.read()).collect();
        assert_eq!(drained, vec![1, 2, 3, 4, 5]);
        assert_eq!(io.pending_inputs(), 0);
    }

    #[test]
    fn test_outputs_are_fifo() {
        let mut io = IOHandler::default();
        io.write(7);
        io.write(8);
        io.write(9);
        assert_eq!(io.last_output(), Some(9));
        assert_eq!(io.next_output(), Some(7));
        assert_eq!(io.take_outputs(), vec![8, 9]);
        assert!(io.outputs().is_empty());
        assert_eq!(io.next_output(), None);
    }
}
