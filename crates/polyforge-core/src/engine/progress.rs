/// Progress events emitted while a structure is generated.
#[derive(Debug, Clone)]
pub enum Progress {
    /// A generation attempt begins. `cycle` is 0-based.
    CycleStart { cycle: usize, total_residues: u64 },
    /// One residue instance was placed successfully.
    ResiduePlaced,
    /// The attempt ran out of placement iterations and will be retried.
    CycleAbandoned { cycle: usize },
    /// Generation finished.
    Finished { residues: usize, atoms: usize },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + 'a>;

/// Forwards progress events to an optional callback; a reporter without a
/// callback swallows them.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::ResiduePlaced);
    }

    #[test]
    fn reporter_forwards_events_in_order() {
        let events = RefCell::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.borrow_mut().push(format!("{event:?}"));
        }));

        reporter.report(Progress::CycleStart {
            cycle: 0,
            total_residues: 2,
        });
        reporter.report(Progress::ResiduePlaced);
        reporter.report(Progress::Finished {
            residues: 2,
            atoms: 6,
        });
        drop(reporter);

        let events = events.into_inner();
        assert_eq!(events.len(), 3);
        assert!(events[0].contains("CycleStart"));
        assert!(events[2].contains("Finished"));
    }
}
