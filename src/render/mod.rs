//! Image rendering through the external Graphviz `dot` tool.
//!
//! The graph is serialized to a scratch DOT file and handed to a `dot`
//! subprocess. Failures surface as [`GraphError::Render`] with the
//! subprocess's captured stderr; nothing in here panics.

use std::{path::Path, process::Command};

use crate::{error::GraphError, fs::to_dot_string, graph::DotGraph};

/// Renders `graph` to an image at `out_path`.
///
/// `format` is handed to `dot -T` verbatim (`png`, `svg`, ...).
///
/// # Errors
/// [`GraphError::Render`] when the `dot` process cannot be launched or exits
/// non-zero; the error text is the captured diagnostic output.
pub fn render_image(
    graph: &DotGraph,
    out_path: impl AsRef<Path>,
    format: &str,
) -> Result<(), GraphError> {
    let scratch = tempfile::NamedTempFile::new()?;
    std::fs::write(scratch.path(), to_dot_string(graph))?;

    let output = Command::new("dot")
        .arg(format!("-T{format}"))
        .arg(scratch.path())
        .arg("-o")
        .arg(out_path.as_ref())
        .output()
        .map_err(|e| GraphError::Render(format!("failed to launch dot: {e}")))?;

    if !output.status.success() {
        return Err(GraphError::Render(
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_format_or_missing_tool_is_a_render_error() {
        let mut graph = DotGraph::new();
        graph.add_edge("a", "b");
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.img");

        // fails whether or not graphviz is installed: either the launch
        // fails, or dot rejects the format and exits non-zero
        let err = render_image(&graph, &out, "definitely-not-a-format").unwrap_err();
        assert!(matches!(err, GraphError::Render(_)));
    }
}
