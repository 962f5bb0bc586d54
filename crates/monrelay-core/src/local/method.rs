//! Allow-list of methods exposed by the local invoker

use crate::error::MonrelayError;
use std::fmt;
use std::str::FromStr;

/// Methods the local pseudo-server answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalMethod {
    ProblemGet,
    EventGet,
    HostGroupGet,
    HostGet,
    AlertGet,
    UserGet,
    MediaTypeGet,
    TriggerGet,
    ItemGet,
}

impl LocalMethod {
    pub const ALL: [LocalMethod; 9] = [
        Self::ProblemGet,
        Self::EventGet,
        Self::HostGroupGet,
        Self::HostGet,
        Self::AlertGet,
        Self::UserGet,
        Self::MediaTypeGet,
        Self::TriggerGet,
        Self::ItemGet,
    ];

    /// JSON-RPC method name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProblemGet => "problem.get",
            Self::EventGet => "event.get",
            Self::HostGroupGet => "hostgroup.get",
            Self::HostGet => "host.get",
            Self::AlertGet => "alert.get",
            Self::UserGet => "user.get",
            Self::MediaTypeGet => "mediatype.get",
            Self::TriggerGet => "trigger.get",
            Self::ItemGet => "item.get",
        }
    }
}

impl FromStr for LocalMethod {
    type Err = MonrelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| MonrelayError::unsupported_method(s))
    }
}

impl fmt::Display for LocalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
