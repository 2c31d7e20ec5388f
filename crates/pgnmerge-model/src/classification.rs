use std::fmt;

/// Value domain of a parameter column, derived once per fill pass.
///
/// Continuous parameters take values in a numeric range where intermediate
/// values are physically meaningful; discrete parameters are enumerated
/// states where blending two values is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Classification {
    Continuous,
    Discrete,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Continuous => "continuous",
            Self::Discrete => "discrete",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
