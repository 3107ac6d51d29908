use thiserror::Error;

/// Discern's error types, covering the three failure classes the library can
/// surface: resolution, configuration, and detection.
#[derive(Debug, Error)]
pub enum DiscernError {
    /// One or more identifiers passed to a resolution function do not exist
    /// in the registry. Every offending token is collected before the error
    /// is raised, so callers get complete feedback in one pass.
    #[error("unknown identifier(s): {}", .ids.join(", "))]
    UnknownIds { ids: Vec<String> },

    /// The catalog violated a load-time invariant: a duplicate id across the
    /// combined trait/group namespace, a canonical family that overlaps a
    /// sibling, or a category whose canonical families do not cover it.
    /// Fatal; the registry is unusable until the tables are fixed.
    #[error("invalid catalog configuration:\n{}", .problems.join("\n"))]
    Configuration { problems: Vec<String> },

    /// The detection predicate registered for a trait failed. Never mapped
    /// to `false` - a failed probe is not the same as an absent trait.
    #[error("detection probe for '{id}' failed: {source}")]
    Detection {
        id: String,
        #[source]
        source: anyhow::Error,
    },

    /// A trait's liveness was queried but no detection predicate has been
    /// registered for its id.
    #[error("no detection probe registered for '{id}'")]
    MissingProbe { id: String },
}

pub type Result<T> = std::result::Result<T, DiscernError>;

impl DiscernError {
    pub fn unknown_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnknownIds {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn configuration<I, S>(problems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Configuration {
            problems: problems.into_iter().map(Into::into).collect(),
        }
    }

    pub fn detection<S: Into<String>>(id: S, source: anyhow::Error) -> Self {
        Self::Detection { id: id.into(), source }
    }

    pub fn missing_probe<S: Into<String>>(id: S) -> Self {
        Self::MissingProbe { id: id.into() }
    }

    /// Returns true if the error was caused by caller input rather than by
    /// the catalog or the detection layer.
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::UnknownIds { .. })
    }

    /// Returns true if the error is fatal at load time and cannot be
    /// recovered from by retrying the query.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}
