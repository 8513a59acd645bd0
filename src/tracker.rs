//! Reference tracking for recursive type definitions.

/// Signal that a type name is already open on the resolution path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CycleDetected {
    pub name: String,
}

/// The chain of type names currently being expanded, root first.
#[derive(Debug, Default)]
pub(crate) struct ReferenceTracker {
    path: Vec<String>,
    // One flag per `enter` call: whether it pushed onto `path`.
    pushed: Vec<bool>,
}

impl ReferenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `name` on the resolution path.
    ///
    /// Reports `CycleDetected` and leaves the path unchanged if `name` is
    /// already open. Every call must be paired with `leave`, whatever the
    /// outcome.
    pub fn enter(&mut self, name: &str) -> Result<(), CycleDetected> {
        if self.is_open(name) {
            self.pushed.push(false);
            return Err(CycleDetected {
                name: name.to_string(),
            });
        }
        self.path.push(name.to_string());
        self.pushed.push(true);
        Ok(())
    }

    /// Close the most recent `enter`.
    pub fn leave(&mut self, name: &str) {
        if self.pushed.pop() == Some(true) {
            let popped = self.path.pop();
            debug_assert_eq!(popped.as_deref(), Some(name));
        }
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.path.iter().any(|n| n == name)
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }
}
