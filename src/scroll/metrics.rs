use crate::foundation::core::Progress;

/// Raw scroll geometry as a browser reports it, in CSS px.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMetrics {
    /// Current vertical scroll position of the document.
    pub scroll_y: f64,
    /// Document-relative top of the tracked container.
    pub container_top: f64,
    pub container_height: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    /// Progress through the tracked container, from its top meeting the viewport top to its
    /// bottom meeting the viewport bottom.
    pub fn progress(&self) -> Progress {
        let range = self.container_height - self.viewport_height;
        Self::normalize(self.scroll_y - self.container_top, range)
    }

    /// Progress through the whole document.
    pub fn page_progress(&self) -> Progress {
        let range = self.document_height - self.viewport_height;
        Self::normalize(self.scroll_y, range)
    }

    fn normalize(travelled: f64, range: f64) -> Progress {
        if range > 0.0 {
            return Progress::new(travelled / range);
        }
        // Nothing to scroll through: the container is either not reached yet or fully passed.
        if travelled >= 0.0 {
            Progress::END
        } else {
            Progress::START
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/metrics.rs"]
mod tests;
