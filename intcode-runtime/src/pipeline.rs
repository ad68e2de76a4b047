//! Pipeline composition
//!
//! Machines never share memory. Composition is the caller moving values from
//! one machine's output queue into another's input queue.
//!
//! - [`run_chain`]: one pass, each stage runs to HALT on the previous stage's
//!   full output.
//! - [`FeedbackLoop`]: stages wired in a ring and resumed round-robin until
//!   the last stage halts.

use tracing::debug;

use intcode_spec::{Program, Word};

use crate::error::{Result, RuntimeError};
use crate::vm::Machine;

/// Run stages in order, each to completion, feeding each stage's entire
/// output to the next as one batch. Returns the last stage's output.
pub fn run_chain(stages: &mut [Machine], input: Vec<Word>) -> Result<Vec<Word>> {
    if stages.is_empty() {
        return Err(RuntimeError::EmptyPipeline);
    }

    let mut carry = input;
    for (stage, machine) in stages.iter_mut().enumerate() {
        machine.extend_input(carry);
        if !machine.run()?.is_halted() {
            return Err(RuntimeError::PipelineStalled { stage });
        }
        carry = machine.take_outputs();
        debug!(stage, outputs = carry.len(), "chain stage halted");
    }

    Ok(carry)
}

/// Machines wired in a ring. Stage `i` reads from stage `i - 1`; stage 0
/// reads from the last stage, which is also the terminal stage.
#[derive(Debug, Clone)]
pub struct FeedbackLoop {
    machines: Vec<Machine>,
}

impl FeedbackLoop {
    pub fn new(machines: Vec<Machine>) -> Result<Self> {
        if machines.is_empty() {
            return Err(RuntimeError::EmptyPipeline);
        }
        Ok(Self { machines })
    }

    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    /// Cycle the ring until the terminal stage halts and return its last output.
    ///
    /// `seed` is delivered to stage 0 as if the terminal stage had produced it.
    /// Each cycle a stage receives only the most recent value its upstream
    /// neighbour produced during that neighbour's last run.
    pub fn run(&mut self, seed: Word) -> Result<Word> {
        let n = self.machines.len();
        let terminal = n - 1;

        // Latest value produced by each stage and not yet forwarded
        let mut fresh: Vec<Option<Word>> = vec![None; n];
        fresh[terminal] = Some(seed);
        let mut last_signal: Option<Word> = None;
        let mut cycle = 0usize;

        loop {
            let mut produced = false;

            for i in 0..n {
                let upstream = (i + n - 1) % n;
                let machine = &mut self.machines[i];

                if let Some(value) = fresh[upstream].take() {
                    machine.push_input(value);
                }
                if machine.is_halted() {
                    continue;
                }

                machine.run()?;
                let outputs = machine.take_outputs();
                if let Some(&latest) = outputs.last() {
                    fresh[i] = Some(latest);
                    produced = true;
                    if i == terminal {
                        last_signal = Some(latest);
                    }
                }
            }

            debug!(cycle, produced, "feedback cycle complete");

            if self.machines[terminal].is_halted() {
                return last_signal.ok_or(RuntimeError::MissingOutput { stage: terminal });
            }

            if !produced {
                let stage = self
                    .machines
                    .iter()
                    .position(|m| m.is_blocked())
                    .unwrap_or(terminal);
                return Err(RuntimeError::PipelineStalled { stage });
            }

            cycle += 1;
        }
    }
}

fn seeded_stages(program: &Program, phases: &[Word]) -> Result<Vec<Machine>> {
    if phases.is_empty() {
        return Err(RuntimeError::EmptyPipeline);
    }
    Ok(phases
        .iter()
        .map(|&phase| Machine::new(program).with_input([phase]))
        .collect())
}

/// Series amplifiers: one machine per phase setting, each seeded with its
/// phase, run once in a chain starting from `signal`.
pub fn amplify(program: &Program, phases: &[Word], signal: Word) -> Result<Word> {
    let mut stages = seeded_stages(program, phases)?;
    let output = run_chain(&mut stages, vec![signal])?;
    output.last().copied().ok_or(RuntimeError::MissingOutput {
        stage: stages.len() - 1,
    })
}

/// Amplifiers in a feedback ring, each seeded with its phase
pub fn amplify_with_feedback(program: &Program, phases: &[Word], signal: Word) -> Result<Word> {
    let mut ring = FeedbackLoop::new(seeded_stages(program, phases)?)?;
    ring.run(signal)
}

/// Try every ordering of `phases` and return the highest signal together
/// with the ordering that produced it. The input signal is 0.
pub fn best_phase_setting(
    program: &Program,
    phases: &[Word],
    feedback: bool,
) -> Result<(Word, Vec<Word>)> {
    let mut best: Option<(Word, Vec<Word>)> = None;

    for ordering in permutations(phases) {
        let signal = if feedback {
            amplify_with_feedback(program, &ordering, 0)?
        } else {
            amplify(program, &ordering, 0)?
        };
        if best.as_ref().map_or(true, |(top, _)| signal > *top) {
            best = Some((signal, ordering));
        }
    }

    best.ok_or(RuntimeError::EmptyPipeline)
}

/// Largest noun and verb tried by [`find_noun_verb`]
pub const NOUN_VERB_MAX: Word = 99;

/// Search patched programs for one that leaves `target` at address 0.
///
/// The noun goes to address 1 and the verb to address 2, both in
/// `0..=NOUN_VERB_MAX`. Returns the first pair that matches, nouns outer.
pub fn find_noun_verb(program: &Program, target: Word) -> Result<Option<(Word, Word)>> {
    for noun in 0..=NOUN_VERB_MAX {
        for verb in 0..=NOUN_VERB_MAX {
            let patched = program.clone().patched(1, noun).patched(2, verb);
            let mut machine = Machine::new(&patched);
            machine.run()?;
            if machine.memory().read(0) == target {
                debug!(noun, verb, "noun and verb found");
                return Ok(Some((noun, verb)));
            }
        }
    }
    Ok(None)
}

/// All orderings of `items` (Heap's algorithm, iterative)
pub fn permutations(items: &[Word]) -> Vec<Vec<Word>> {
    if items.is_empty() {
        return vec![];
    }

    let mut current = items.to_vec();
    let mut result = vec![current.clone()];

    let n = current.len();
    let mut counters = vec![0usize; n];
    let mut i = 1;
    while i < n {
        if counters[i] < i {
            let swap_with = if i % 2 == 0 { 0 } else { counters[i] };
            current.swap(swap_with, i);
            result.push(current.clone());
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }

    result
}
