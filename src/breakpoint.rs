//! Responsive breakpoints the editor can preview a layout at

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown breakpoint: {0}")]
pub struct UnknownBreakpoint(pub String);

/// Canvas width presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl Breakpoint {
    /// All breakpoints, narrowest first
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop];

    pub fn id(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "mobile",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Desktop => "desktop",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Breakpoint::Mobile => "Mobile",
            Breakpoint::Tablet => "Tablet",
            Breakpoint::Desktop => "Desktop",
        }
    }

    /// Canvas width in pixels
    pub fn width(self) -> u32 {
        match self {
            Breakpoint::Mobile => 375,
            Breakpoint::Tablet => 768,
            Breakpoint::Desktop => 1200,
        }
    }
}

impl FromStr for Breakpoint {
    type Err = UnknownBreakpoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bp| bp.id() == s)
            .ok_or_else(|| UnknownBreakpoint(s.to_string()))
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
