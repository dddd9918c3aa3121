use std::fmt;

/// What a generation request produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A module directory with service, controller, dto, wire and middleware files
    Module,
    /// A single service file
    Service,
    /// A single response file
    Response,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Module, Kind::Service, Kind::Response];

    /// Returns the kind identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Module => "module",
            Kind::Service => "service",
            Kind::Response => "response",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
