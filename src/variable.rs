use std::fmt;

/// A requestable Open-Meteo variable name, e.g. `"temperature_2m"`.
///
/// Each resource module declares the constants it understands. The type does
/// not enforce membership; an unknown token is rejected by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpenMeteoConst(&'static str);

impl OpenMeteoConst {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for OpenMeteoConst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
