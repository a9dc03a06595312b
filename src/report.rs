use std::fmt;

/// The call a failure was observed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    Signup,
    ProfileWrite,
    ProfileRead,
    UnknownProfileRead,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::Signup => "signup",
            Step::ProfileWrite => "profile write",
            Step::ProfileRead => "profile read",
            Step::UnknownProfileRead => "unknown profile read",
        })
    }
}

/// A single failed check. Each renders as one self-describing line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    /// The account could not be bootstrapped into a usable identity.
    Setup { user: String, message: String },
    /// The auth service refused to create the account.
    SignupRejected { user: String, status: u16 },
    Transport {
        user: String,
        step: Step,
        message: String,
    },
    Status {
        user: String,
        step: Step,
        expected: u16,
        actual: u16,
    },
    MalformedBody {
        user: String,
        step: Step,
        message: String,
    },
    FieldMissing { user: String, field: String },
    FieldMismatch {
        user: String,
        field: String,
        expected: String,
        actual: String,
    },
    /// A read of a profile nobody wrote returned someone's data.
    LeakedProfile { user: String, owner: String },
}

impl Failure {
    pub fn user(&self) -> &str {
        match self {
            Failure::Setup { user, .. }
            | Failure::SignupRejected { user, .. }
            | Failure::Transport { user, .. }
            | Failure::Status { user, .. }
            | Failure::MalformedBody { user, .. }
            | Failure::FieldMissing { user, .. }
            | Failure::FieldMismatch { user, .. }
            | Failure::LeakedProfile { user, .. } => user,
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.user())?;

        match self {
            Failure::Setup { message, .. } => {
                write!(f, "{message} - tests may fail")
            }
            Failure::SignupRejected { status, .. } => {
                write!(f, "signup: expected a 2xx status code but was {status}")
            }
            Failure::Transport { step, message, .. } => {
                write!(f, "{step}: request failed: {message}")
            }
            Failure::Status {
                step,
                expected,
                actual,
                ..
            } => {
                write!(f, "{step}: expected status code {expected} but was {actual}")
            }
            Failure::MalformedBody { step, message, .. } => {
                write!(f, "{step}: malformed response body: {message}")
            }
            Failure::FieldMissing { field, .. } => {
                write!(f, "{field} not in response")
            }
            Failure::FieldMismatch {
                field,
                expected,
                actual,
                ..
            } => {
                write!(f, "expected {field} {expected} but was {actual}")
            }
            Failure::LeakedProfile { owner, .. } => {
                write!(f, "profile of a never written identity returned data of {owner}")
            }
        }
    }
}

/// Accumulates failures across a run. An empty report means every check
/// passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    failures: Vec<Failure>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, failure: Failure) {
        ::tracing::debug!(%failure, "check failed");

        self.failures.push(failure);
    }

    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Process exit status for this report: `0` when every check passed.
    pub fn exit_status(&self) -> u8 {
        if self.passed() { 0 } else { 1 }
    }

    /// Failures recorded against a single fixture.
    pub fn for_user<'a>(&'a self, user: &'a str) -> impl Iterator<Item = &'a Failure> + 'a {
        self.failures.iter().filter(move |f| f.user() == user)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for failure in &self.failures {
            writeln!(f, "error: {failure}")?;
        }

        Ok(())
    }
}
