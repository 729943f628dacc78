use crate::error::Result;
use crate::utils::misc::validate_label;
use bon::Builder;

/// Settings for turning a decoded record stream into a table.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ConversionOptions {
    /// Detector tag used to name the channel columns (`<label>_<n>`).
    #[builder(into)]
    pub detector_label: String,
    /// Log progress every this many pixels; 0 turns progress logging off.
    #[builder(default = 1000)]
    pub progress_interval: usize,
}

impl ConversionOptions {
    pub fn validate(&self) -> Result<()> {
        validate_label(&self.detector_label)
    }

    pub(crate) fn should_report(&self, pixels: usize) -> bool {
        self.progress_interval != 0 && pixels % self.progress_interval == 0
    }
}
