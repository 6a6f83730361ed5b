use anyhow::{Context, Result};
use geojson::{FeatureCollection, GeoJson};
use std::path::Path;

/// Write a rendered map to a GeoJSON file
pub fn write_map_geojson(map: &FeatureCollection, output_path: &Path) -> Result<()> {
    log::info!(
        "Writing {} features to {}",
        map.features.len(),
        output_path.display()
    );

    let geojson = GeoJson::from(map.clone());
    let json_string = serde_json::to_string_pretty(&geojson)
        .context("Failed to serialize GeoJSON")?;

    std::fs::write(output_path, json_string)
        .with_context(|| format!("Failed to write GeoJSON to {}", output_path.display()))?;

    Ok(())
}
