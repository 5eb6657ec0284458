use std::fmt;

/// One of the independent computations making up a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    BondAngles,
    ForwardTorsions,
    BackwardTorsions,
    Combine,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Pass::BondAngles => "Bond angles",
                Pass::ForwardTorsions => "Forward torsions",
                Pass::BackwardTorsions => "Backward torsions",
                Pass::Combine => "Combining features",
            }
        )
    }
}

#[derive(Debug, Clone)]
pub enum Progress {
    PassStart { pass: Pass, residues: usize },
    PassFinish { pass: Pass },

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards progress events to an optional callback.
///
/// Passes may run on different threads, so the callback must be `Send + Sync` and
/// may observe `PassStart`/`PassFinish` events of different passes interleaved.
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

    /// Brackets `work` with start and finish events for `pass`.
    pub fn track<T>(&self, pass: Pass, residues: usize, work: impl FnOnce() -> T) -> T {
        self.report(Progress::PassStart { pass, residues });
        let out = work();
        self.report(Progress::PassFinish { pass });
        out
    }
}
