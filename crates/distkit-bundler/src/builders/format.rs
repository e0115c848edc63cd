use serde::{Deserialize, Serialize};

/// Module format of a generated distribution file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistFormat {
    /// Universal module definition: works as a `<script>` global and as a
    /// CommonJS/AMD module.
    Umd,

    /// Plain CommonJS (`module.exports`).
    Cjs,

    /// ECMAScript module (`export` syntax).
    Esm,
}

impl DistFormat {
    /// Whether the format assigns a browser global and therefore needs a name.
    pub fn needs_global_name(self) -> bool {
        matches!(self, Self::Umd)
    }

    pub(crate) fn to_rolldown(self) -> rolldown::OutputFormat {
        match self {
            Self::Umd => rolldown::OutputFormat::Umd,
            Self::Cjs => rolldown::OutputFormat::Cjs,
            Self::Esm => rolldown::OutputFormat::Esm,
        }
    }
}

impl std::fmt::Display for DistFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Umd => write!(f, "umd"),
            Self::Cjs => write!(f, "cjs"),
            Self::Esm => write!(f, "esm"),
        }
    }
}
