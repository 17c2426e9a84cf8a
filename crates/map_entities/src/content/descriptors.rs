use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::registry::{CollisionFootprint, EntityDescriptor, FootprintError, Vec2};

/// On-disk shape of a footprint pattern. Validated into a
/// `CollisionFootprint` after parsing; the cell count invariant is not
/// trusted from the file.
#[derive(Debug, Deserialize)]
struct RawFootprint {
    width: u32,
    height: u32,
    cells: Vec<u16>,
}

#[derive(Debug, Deserialize)]
struct RawEntityDescriptor {
    name: String,
    top_left: Vec2,
    #[serde(default)]
    collision: Option<RawFootprint>,
    #[serde(default)]
    reversed_collision: Option<RawFootprint>,
}

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("failed to read descriptor file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse descriptor file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_path_to_error::Error<serde_json::Error>,
    },
    #[error("invalid collision footprint for entity '{name}': {source}")]
    Footprint {
        name: String,
        #[source]
        source: FootprintError,
    },
}

/// Loads a JSON array of entity descriptors, ready to register. Footprint
/// shapes are validated; parse failures report the JSON path to the
/// offending field.
pub fn load_descriptors(path: &Path) -> Result<Vec<EntityDescriptor>, DescriptorError> {
    let text = fs::read_to_string(path).map_err(|source| DescriptorError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut deserializer = serde_json::Deserializer::from_str(&text);
    let raw: Vec<RawEntityDescriptor> = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|source| DescriptorError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let descriptors = raw
        .into_iter()
        .map(build_descriptor)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        path = %path.display(),
        count = descriptors.len(),
        "entity descriptors loaded"
    );
    Ok(descriptors)
}

fn build_descriptor(raw: RawEntityDescriptor) -> Result<EntityDescriptor, DescriptorError> {
    let collision = raw
        .collision
        .map(|footprint| build_footprint(&raw.name, footprint))
        .transpose()?;
    let reversed_collision = raw
        .reversed_collision
        .map(|footprint| build_footprint(&raw.name, footprint))
        .transpose()?;

    let mut descriptor = EntityDescriptor::new(raw.name, raw.top_left);
    if let Some(footprint) = collision {
        descriptor = descriptor.with_collision(footprint);
    }
    if let Some(footprint) = reversed_collision {
        descriptor = descriptor.with_reversed_collision(footprint);
    }
    Ok(descriptor)
}

fn build_footprint(name: &str, raw: RawFootprint) -> Result<CollisionFootprint, DescriptorError> {
    CollisionFootprint::new(raw.width, raw.height, raw.cells).map_err(|source| {
        DescriptorError::Footprint {
            name: name.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_descriptor_file(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("entities.json");
        let mut file = fs::File::create(&path).expect("create descriptor file");
        file.write_all(contents.as_bytes())
            .expect("write descriptor file");
        path
    }

    #[test]
    fn loads_descriptors_with_and_without_footprints() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_descriptor_file(
            &dir,
            r#"[
                {
                    "name": "desk",
                    "top_left": { "x": 3.0, "y": 4.0 },
                    "collision": { "width": 2, "height": 1, "cells": [1, 1] },
                    "reversed_collision": { "width": 2, "height": 1, "cells": [0, 0] }
                },
                { "name": "poster", "top_left": { "x": 0.0, "y": 0.0 } }
            ]"#,
        );

        let descriptors = load_descriptors(&path).expect("descriptors");

        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].name(), "desk");
        assert_eq!(descriptors[0].top_left(), Vec2 { x: 3.0, y: 4.0 });
        let collision = descriptors[0].collision().expect("collision pattern");
        assert_eq!(collision.occupied_cell_count(), 2);
        let vacate = descriptors[0]
            .reversed_collision()
            .expect("vacate pattern");
        assert_eq!(vacate.occupied_cell_count(), 0);
        assert_eq!(descriptors[1].name(), "poster");
        assert!(descriptors[1].collision().is_none());
    }

    #[test]
    fn footprint_cell_count_mismatch_is_reported_with_the_entity_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_descriptor_file(
            &dir,
            r#"[
                {
                    "name": "desk",
                    "top_left": { "x": 0.0, "y": 0.0 },
                    "collision": { "width": 2, "height": 2, "cells": [1, 1, 1] }
                }
            ]"#,
        );

        let error = load_descriptors(&path).expect_err("cell count mismatch");
        match error {
            DescriptorError::Footprint { name, source } => {
                assert_eq!(name, "desk");
                assert_eq!(
                    source,
                    FootprintError::CellCountMismatch {
                        expected: 4,
                        actual: 3
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_errors_name_the_json_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_descriptor_file(
            &dir,
            r#"[{ "name": "desk", "top_left": { "x": "not-a-number", "y": 0.0 } }]"#,
        );

        let error = load_descriptors(&path).expect_err("type error");
        match error {
            DescriptorError::Parse { source, .. } => {
                assert_eq!(source.path().to_string(), "[0].top_left.x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.json");

        let error = load_descriptors(&path).expect_err("missing file");
        assert!(matches!(error, DescriptorError::ReadFile { .. }));
    }
}
