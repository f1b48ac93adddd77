use railwatch_core::conf::{EnvOverrides, ValidatedConfig, load_config_with};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Render an HCL fixture with the allocated ports and load it.
///
/// The rendered file is returned so it outlives the server.
pub fn render_config(
    fixture: &str,
    listen_port: u16,
    upstream_port: u16,
) -> (ValidatedConfig, NamedTempFile) {
    let template_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("config")
        .join(fixture);

    let template = std::fs::read_to_string(&template_path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", template_path.display()));

    let rendered = template
        .replace("{listen_port}", &listen_port.to_string())
        .replace("{upstream_port}", &upstream_port.to_string());

    let mut file = NamedTempFile::new().expect("failed to create temp config");
    file.write_all(rendered.as_bytes())
        .expect("failed to write temp config");

    // Ignore BIND_HOST/PORT from the environment running the tests.
    let cfg = load_config_with(file.path(), &EnvOverrides::default())
        .expect("failed to load fixture config");

    (cfg, file)
}
