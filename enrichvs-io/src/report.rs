//! JSON metric reports and parameter files.

use std::fs;
use std::path::Path;

use enrichvs_core::{EnrichError, Result};
use enrichvs_stats::{MetricSummary, ScreeningParams};

/// Serialize a metric summary as pretty-printed JSON.
pub fn summary_json(summary: &MetricSummary) -> Result<String> {
    serde_json::to_string_pretty(summary).map_err(|e| EnrichError::Parse(e.to_string()))
}

/// Parse evaluation parameters from a JSON document.
///
/// Missing fields take their [`ScreeningParams::default`] values, so `{}` is
/// a valid document.
pub fn parse_params(json: &str) -> Result<ScreeningParams> {
    serde_json::from_str(json).map_err(|e| EnrichError::Parse(e.to_string()))
}

/// Load evaluation parameters from a JSON file.
pub fn load_params(path: impl AsRef<Path>) -> Result<ScreeningParams> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        EnrichError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    parse_params(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use enrichvs_stats::Evaluator;
    use serde_json::Value;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_summary_json_fields() {
        let eval = Evaluator::new(
            vec![0.9, 0.8, 0.7, 0.6, 0.5],
            vec![true, false, true, false, false],
        );
        let params = ScreeningParams::default().with_top(1.0).with_decreasing(true);
        let summary = eval.summary(&params).unwrap();

        let json = summary_json(&summary).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["n_items"], 5);
        assert_eq!(parsed["n_hits"], 2);
        let auc = parsed["auc"].as_f64().unwrap();
        assert!((auc - 5.0 / 6.0).abs() < 1e-12);
        for key in ["rie", "bedroc", "enrichment_factor", "auac"] {
            assert!(parsed[key].is_number(), "missing {}", key);
        }
    }

    #[test]
    fn test_parse_params_partial() {
        let p = parse_params(r#"{"alpha": 20.0, "decreasing": true}"#).unwrap();
        assert_eq!(p.alpha, 20.0);
        assert_eq!(p.top, ScreeningParams::default().top);
        assert!(p.decreasing);
    }

    #[test]
    fn test_parse_params_empty_object() {
        assert_eq!(parse_params("{}").unwrap(), ScreeningParams::default());
    }

    #[test]
    fn test_parse_params_malformed() {
        assert!(matches!(parse_params("{alpha:"), Err(EnrichError::Parse(_))));
    }

    #[test]
    fn test_load_params_file() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        writeln!(file, r#"{{"top": 0.01}}"#).unwrap();
        file.flush().unwrap();

        let p = load_params(file.path()).unwrap();
        assert_eq!(p.top, 0.01);
        assert_eq!(p.alpha, 0.20);
    }

    #[test]
    fn test_load_params_missing_file() {
        assert!(matches!(load_params("/nonexistent/params.json"), Err(EnrichError::Io(_))));
    }
}
