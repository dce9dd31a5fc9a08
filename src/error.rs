use std::io;
use thiserror::Error;

/// Failure conditions surfaced by the library.
///
/// An unreachable destination is deliberately *not* in this list: a search
/// that drains its frontier still returns a [`crate::search::Path`], with
/// `destination_reached` left false.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A strategy selector did not match any known traversal strategy.
    #[error("unknown search strategy: {0:?}")]
    UnknownStrategy(String),

    /// The search source label is not part of the graph's node set.
    #[error("source node {0:?} not found in graph")]
    SourceNotFound(String),

    /// The external rendering process exited non-zero; carries its captured
    /// stderr text.
    #[error("graphviz rendering failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_strategy_names_the_selector() {
        let err = GraphError::UnknownStrategy("bogofirst".to_owned());
        assert_eq!(err.to_string(), "unknown search strategy: \"bogofirst\"");
    }

    #[test]
    fn source_not_found_names_the_label() {
        let err = GraphError::SourceNotFound("zz".to_owned());
        assert_eq!(err.to_string(), "source node \"zz\" not found in graph");
    }

    #[test]
    fn render_error_carries_diagnostic_text() {
        let err = GraphError::Render("syntax error in line 3".to_owned());
        assert!(err.to_string().contains("syntax error in line 3"));
    }

    #[test]
    fn io_errors_convert() {
        let io_err = io::Error::other("disk fell off");
        let err: GraphError = io_err.into();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
