//! JavaScript rendering of an [`ArtifactDocument`]
//!
//! Every data value goes through `serde_json`, which yields valid JavaScript
//! literals. Only comments and the two fixed helper functions are plain text.

use std::fmt::Write as _;

use super::document::ArtifactDocument;
use crate::yaml_utils::strip_control_chars;
use crate::{ExportError, Result};

const HELPERS: &str = r#"// Helper function to get coordinates for a specific time step
function getCoordinatesAtTimeStep(timeStep) {
  return cubeCoordinates.map(cubeCoords => cubeCoords[timeStep]);
}

// Helper function to get the current time step based on document time
function getCurrentTimeStep(currentTime) {
  const step = Math.floor(currentTime / coordinateConfig.timeStepDuration) % coordinateConfig.totalTimeSteps;
  return step < 0 ? step + coordinateConfig.totalTimeSteps : step;
}
"#;

fn fmt_err(e: std::fmt::Error) -> ExportError {
    ExportError::Render { reason: e.to_string() }
}

/// Render the document as a self-contained script
pub fn render_js(doc: &ArtifactDocument) -> Result<String> {
    let mut out = String::with_capacity(doc.coordinates.len() * doc.config.total_time_steps * 48);

    writeln!(
        out,
        "// F1 coordinate data for {} drivers from {}",
        doc.drivers.len(),
        strip_control_chars(&doc.session.to_string())
    )
    .map_err(fmt_err)?;
    writeln!(
        out,
        "// Coordinates scaled by 1/{} and filtered to remove stationary positions",
        doc.scale.divisor()
    )
    .map_err(fmt_err)?;
    writeln!(
        out,
        "// One position per second of session time, {} ms per replay step\n",
        doc.config.time_step_duration
    )
    .map_err(fmt_err)?;

    out.push_str("// Cube coordinates array - accessible globally\n");
    out.push_str("const cubeCoordinates = [\n");
    for (index, (driver, sequence)) in doc.drivers.iter().zip(&doc.coordinates).enumerate() {
        writeln!(
            out,
            "  // Cube {} coordinates (driver {})",
            index + 1,
            strip_control_chars(driver)
        )
        .map_err(fmt_err)?;
        out.push_str("  [\n");
        for coordinate in sequence {
            writeln!(out, "    {},", serde_json::to_string(coordinate)?).map_err(fmt_err)?;
        }
        out.push_str("  ],\n");
    }
    out.push_str("];\n\n");

    if let Some(records) = &doc.driver_info {
        out.push_str("// Driver metadata, parallel to cubeCoordinates\n");
        writeln!(out, "const driverInfo = {};\n", serde_json::to_string_pretty(records)?)
            .map_err(fmt_err)?;
    }

    out.push_str("// Configuration for the coordinate system - accessible globally\n");
    writeln!(out, "const coordinateConfig = {};\n", serde_json::to_string_pretty(&doc.config)?)
        .map_err(fmt_err)?;

    out.push_str(HELPERS);

    Ok(out)
}
