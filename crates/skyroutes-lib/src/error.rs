use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the SkyRoutes library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset file could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset")]
    ProjectDirsUnavailable,

    /// Raised when an airport identifier could not be found in the graph.
    #[error("unknown airport: {id}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        id: String,
        suggestions: Vec<String>,
    },

    /// Raised when a request lacks a required endpoint.
    #[error("itinerary request is missing its {missing}")]
    IncompleteRequest { missing: &'static str },

    /// Raised when no itinerary could be found between two airports.
    #[error("no route found between {origin} and {destination}")]
    RouteNotFound { origin: String, destination: String },

    /// Raised when summarising an itinerary that has no airports.
    #[error("itinerary was empty")]
    EmptyItinerary,

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
