//! Cooperative scheduler.
//!
//! Every effect is a [`Task`]: a resumable state machine that does one slice
//! of drawing per [`Task::resume`] call and then says when it wants to run
//! again. The scheduler keeps sleeping tasks in a min-heap keyed by wake time
//! and runs them on one thread against one shared [`Canvas`], so writes are
//! totally ordered and no locking is needed.
//!
//! Time is virtual: callers advance it explicitly with [`Scheduler::run_pass`]
//! or [`Scheduler::run_until`]. The binary maps it onto wall-clock time; tests
//! step it directly.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::time::Duration;

use crate::canvas::Canvas;
use crate::rng::SimpleRng;
use crate::types::{Control, MAX_PENDING_CONTROLS};

/// What a task wants after one resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Run again once this much virtual time has passed.
    Sleep(Duration),
    /// Run again on the next pass, without advancing time.
    Yield,
    /// Finished; the task is dropped.
    Done,
}

pub trait Task {
    fn resume(&mut self, cx: &mut Context<'_>) -> Step;

    /// Short label used in logs and task counts.
    fn name(&self) -> &'static str;
}

/// Everything a task may touch while it runs.
pub struct Context<'a> {
    canvas: &'a mut Canvas,
    rng: &'a mut SimpleRng,
    input: &'a mut VecDeque<Control>,
    spawned: &'a mut Vec<Box<dyn Task>>,
}

impl<'a> Context<'a> {
    pub fn canvas(&mut self) -> &mut Canvas {
        self.canvas
    }

    pub fn rng(&mut self) -> &mut SimpleRng {
        self.rng
    }

    /// Take the oldest pending control, or an idle one when nothing is queued.
    ///
    /// Never blocks. Keys left in the queue are seen on later reads.
    pub fn read_control(&mut self) -> Control {
        self.input.pop_front().unwrap_or_default()
    }

    /// Start a new task on the next pass. The caller gets no handle back.
    pub fn spawn(&mut self, task: impl Task + 'static) {
        self.spawned.push(Box::new(task));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(usize);

// (wake, sequence, slot). The sequence number keeps equal wake times FIFO.
type Timer = Reverse<(Duration, u64, usize)>;

pub struct Scheduler {
    canvas: Canvas,
    rng: SimpleRng,
    input: VecDeque<Control>,
    tasks: Vec<Option<Box<dyn Task>>>,
    free: Vec<usize>,
    timers: BinaryHeap<Timer>,
    seq: u64,
    now: Duration,
}

impl Scheduler {
    pub fn new(canvas: Canvas, rng: SimpleRng) -> Self {
        Self {
            canvas,
            rng,
            input: VecDeque::new(),
            tasks: Vec::new(),
            free: Vec::new(),
            timers: BinaryHeap::new(),
            seq: 0,
            now: Duration::ZERO,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn rng_mut(&mut self) -> &mut SimpleRng {
        &mut self.rng
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Register a task to run on the next pass.
    pub fn spawn(&mut self, task: impl Task + 'static) -> TaskId {
        self.spawn_boxed(Box::new(task))
    }

    pub fn spawn_boxed(&mut self, task: Box<dyn Task>) -> TaskId {
        tracing::debug!(target: "sched", task = task.name(), "task_spawned");
        let slot = match self.free.pop() {
            Some(slot) => {
                self.tasks[slot] = Some(task);
                slot
            }
            None => {
                self.tasks.push(Some(task));
                self.tasks.len() - 1
            }
        };
        self.schedule(slot, self.now);
        TaskId(slot)
    }

    /// Queue one sampled input for the next task that reads controls.
    ///
    /// Once [`MAX_PENDING_CONTROLS`] samples are waiting, new ones are dropped.
    /// Returns whether the sample was queued.
    pub fn push_control(&mut self, control: Control) -> bool {
        if self.input.len() >= MAX_PENDING_CONTROLS {
            tracing::trace!(target: "sched", ?control, "control_dropped");
            return false;
        }
        self.input.push_back(control);
        true
    }

    pub fn pending_controls(&self) -> usize {
        self.input.len()
    }

    /// Number of live tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_some()).count()
    }

    /// Number of live tasks with the given name.
    pub fn count_tasks(&self, name: &str) -> usize {
        self.tasks
            .iter()
            .flatten()
            .filter(|t| t.name() == name)
            .count()
    }

    /// Earliest virtual time at which some task wants to run.
    pub fn next_wake(&self) -> Option<Duration> {
        self.timers.peek().map(|Reverse((wake, _, _))| *wake)
    }

    /// Advance the clock to `now` (never backwards) and resume every task that
    /// was due at that moment, once. Tasks that yield or are spawned during the
    /// pass run on the following pass. Returns the number of tasks resumed.
    pub fn run_pass(&mut self, now: Duration) -> usize {
        self.now = self.now.max(now);

        let mut due = Vec::new();
        while let Some(Reverse((wake, _, _))) = self.timers.peek() {
            if *wake > self.now {
                break;
            }
            if let Some(Reverse((_, _, slot))) = self.timers.pop() {
                due.push(slot);
            }
        }

        let mut spawned: Vec<Box<dyn Task>> = Vec::new();
        let mut resumed = 0;
        for slot in due {
            let Some(mut task) = self.tasks[slot].take() else {
                continue;
            };
            resumed += 1;

            let step = {
                let mut cx = Context {
                    canvas: &mut self.canvas,
                    rng: &mut self.rng,
                    input: &mut self.input,
                    spawned: &mut spawned,
                };
                task.resume(&mut cx)
            };

            match step {
                Step::Sleep(d) => {
                    self.tasks[slot] = Some(task);
                    self.schedule(slot, self.now + d);
                }
                Step::Yield => {
                    self.tasks[slot] = Some(task);
                    self.schedule(slot, self.now);
                }
                Step::Done => {
                    tracing::debug!(target: "sched", task = task.name(), "task_finished");
                    self.free.push(slot);
                }
            }
        }

        for task in spawned {
            self.spawn_boxed(task);
        }
        resumed
    }

    /// Run every pass up to and including `deadline`, then leave the clock
    /// there.
    pub fn run_until(&mut self, deadline: Duration) {
        while let Some(wake) = self.next_wake() {
            if wake > deadline {
                break;
            }
            self.run_pass(wake);
        }
        self.now = self.now.max(deadline);
    }

    fn schedule(&mut self, slot: usize, wake: Duration) {
        self.seq += 1;
        self.timers.push(Reverse((wake, self.seq, slot)));
    }
}
