//! MovingAI `.scen` scenario file loading.

use std::fs;
use std::path::Path;

use crate::core::ScenError;

/// One pathfinding test case from a MovingAI `.scen` file: the start/goal
/// cell coordinates and the associated map's declared dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenCase {
    pub map_name: String,
    pub map_w: i64,
    pub map_h: i64,
    pub sx: i64,
    pub sy: i64,
    pub gx: i64,
    pub gy: i64,
    pub opt: f64,
}

/// Parse a MovingAI `.scen` file.
///
/// A leading `version ...` line is skipped if present. Lines that don't
/// parse as a scenario record (missing fields, non-numeric fields) are
/// skipped rather than treated as fatal — only a failure to open the file
/// itself is an error.
pub fn load_scen<P: AsRef<Path>>(scen_path: P) -> Result<Vec<ScenCase>, ScenError> {
    let path = scen_path.as_ref();
    let path_str = path.display().to_string();
    let text = fs::read_to_string(path).map_err(|source| ScenError::Open {
        path: path_str,
        source,
    })?;

    let mut out = Vec::new();
    let mut first = true;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if first && line.trim_start().starts_with("version") {
            first = false;
            continue;
        }
        first = false;

        if let Some(case) = parse_line(line) {
            out.push(case);
        }
    }
    Ok(out)
}

fn parse_line(line: &str) -> Option<ScenCase> {
    let mut fields = line.split_whitespace();
    let _bucket: i64 = fields.next()?.parse().ok()?;
    let map_name = fields.next()?.to_string();
    let map_w: i64 = fields.next()?.parse().ok()?;
    let map_h: i64 = fields.next()?.parse().ok()?;
    let sx: i64 = fields.next()?.parse().ok()?;
    let sy: i64 = fields.next()?.parse().ok()?;
    let gx: i64 = fields.next()?.parse().ok()?;
    let gy: i64 = fields.next()?.parse().ok()?;
    let opt: f64 = fields.next().and_then(|s| s.parse().ok()).unwrap_or(0.0);

    Some(ScenCase {
        map_name,
        map_w,
        map_h,
        sx,
        sy,
        gx,
        gy,
        opt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("pathlab_scen_test_{name}.scen"));
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn skips_leading_version_line() {
        let path = write_temp("version", "version 1\n0\tmap.map\t10\t10\t1\t1\t5\t5\t4.0\n");
        let cases = load_scen(&path).unwrap();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].map_name, "map.map");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn defaults_missing_opt_to_zero() {
        let path = write_temp("noopt", "0\tmap.map\t10\t10\t1\t1\t5\t5\n");
        let cases = load_scen(&path).unwrap();
        assert_eq!(cases[0].opt, 0.0);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn skips_malformed_lines_without_failing() {
        let path = write_temp(
            "malformed",
            "0\tmap.map\t10\t10\t1\t1\t5\t5\t4.0\nnot a valid line\n1\tmap.map\t10\t10\t2\t2\t6\t6\t2.0\n",
        );
        let cases = load_scen(&path).unwrap();
        assert_eq!(cases.len(), 2);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_scen("/nonexistent/path/does-not-exist.scen").unwrap_err();
        assert!(matches!(err, ScenError::Open { .. }));
    }
}
