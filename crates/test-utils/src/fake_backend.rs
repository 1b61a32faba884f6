use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use zigtest::exec::InvokerBackend;
use zigtest::types::{Invocation, InvocationOutcome};

use crate::transcript::Transcript;

/// A fake backend that:
/// - records every invocation it receives
/// - appends `[invoke] <cmd>` to a shared transcript
/// - returns scripted outcomes in order, then success.
pub struct FakeBackend {
    transcript: Transcript,
    invoked: Arc<Mutex<Vec<Invocation>>>,
    outcomes: VecDeque<InvocationOutcome>,
}

impl FakeBackend {
    pub fn new(transcript: Transcript) -> Self {
        Self {
            transcript,
            invoked: Arc::new(Mutex::new(Vec::new())),
            outcomes: VecDeque::new(),
        }
    }

    pub fn with_outcomes(mut self, outcomes: impl IntoIterator<Item = InvocationOutcome>) -> Self {
        self.outcomes.extend(outcomes);
        self
    }

    /// Handle to the recorded invocations; stays valid after the backend is
    /// moved into an invoker.
    pub fn invoked(&self) -> Arc<Mutex<Vec<Invocation>>> {
        Arc::clone(&self.invoked)
    }
}

pub fn success() -> InvocationOutcome {
    InvocationOutcome::Exited { code: Some(0), success: true }
}

pub fn failure(code: i32) -> InvocationOutcome {
    InvocationOutcome::Exited { code: Some(code), success: false }
}

pub fn spawn_failed(reason: &str) -> InvocationOutcome {
    InvocationOutcome::SpawnFailed { reason: reason.to_string() }
}

impl InvokerBackend for FakeBackend {
    fn invoke<'a>(
        &'a mut self,
        invocation: &'a Invocation,
    ) -> Pin<Box<dyn Future<Output = InvocationOutcome> + Send + 'a>> {
        Box::pin(async move {
            self.transcript.append(&format!("[invoke] {invocation}\n"));
            self.invoked.lock().unwrap().push(invocation.clone());
            self.outcomes.pop_front().unwrap_or_else(success)
        })
    }
}
