use crate::error::{GeoPixeError, Result};

/// `<label>_0 .. <label>_<count-1>`, the per-channel column names.
pub fn channel_column_names(label: &str, count: usize) -> Vec<String> {
    (0..count).map(|ch| format!("{label}_{ch}")).collect()
}

/// Detector labels end up in column names, so they must not break a CSV header.
pub fn validate_label(label: &str) -> Result<()> {
    let forbidden = |c: char| matches!(c, ',' | '"' | '\r' | '\n');
    if label.is_empty() || label.contains(forbidden) {
        return Err(GeoPixeError::InvalidLabel(label.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_are_label_prefixed() {
        let names = channel_column_names("B", 3);
        assert_eq!(names, ["B_0", "B_1", "B_2"]);
    }

    #[test]
    fn label_validation() {
        assert!(validate_label("A").is_ok());
        assert!(validate_label("det-2").is_ok());
        assert!(validate_label("").is_err());
        assert!(validate_label("A,B").is_err());
        assert!(validate_label("A\n").is_err());
        assert!(validate_label("\"A\"").is_err());
    }
}
