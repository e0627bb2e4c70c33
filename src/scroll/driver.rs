use crate::{
    foundation::core::Progress,
    scroll::{
        mapper::{HeaderVisibility, ScrollFrame, ScrollProgressMapper},
        metrics::ScrollMetrics,
    },
};

/// Header flag flip observed between two consecutive samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct VisibilityChange {
    pub from: HeaderVisibility,
    pub to: HeaderVisibility,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DriverUpdate {
    pub frame: ScrollFrame,
    pub change: Option<VisibilityChange>,
}

/// Host-side subscription to the scroll stream.
///
/// The host pushes each progress sample in the order it occurred; the driver maps it and
/// reports header visibility transitions. The mapper stays pure; the last observed
/// visibility is the only state and it lives here.
#[derive(Clone, Debug)]
pub struct ScrollDriver {
    mapper: ScrollProgressMapper,
    header: HeaderVisibility,
    samples: u64,
}

impl ScrollDriver {
    /// The header starts out visible, as on first paint.
    pub fn new(mapper: ScrollProgressMapper) -> Self {
        Self {
            mapper,
            header: HeaderVisibility::Visible,
            samples: 0,
        }
    }

    pub fn mapper(&self) -> &ScrollProgressMapper {
        &self.mapper
    }

    pub fn header(&self) -> HeaderVisibility {
        self.header
    }

    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn push(&mut self, progress: impl Into<Progress>) -> DriverUpdate {
        let frame = self.mapper.map(progress);
        self.samples += 1;

        let next = HeaderVisibility::from_visible(frame.header.visible);
        let change = if next != self.header {
            let change = VisibilityChange {
                from: self.header,
                to: next,
            };
            tracing::debug!(
                progress = %frame.progress,
                from = ?change.from,
                to = ?change.to,
                "header visibility changed"
            );
            self.header = next;
            Some(change)
        } else {
            None
        };

        tracing::trace!(progress = %frame.progress, sample = self.samples, "scroll sample");
        DriverUpdate { frame, change }
    }

    pub fn push_metrics(&mut self, metrics: &ScrollMetrics) -> DriverUpdate {
        self.push(metrics.progress())
    }

    /// Push every sample of `stream` in order.
    pub fn drain<I>(&mut self, stream: I) -> Vec<DriverUpdate>
    where
        I: IntoIterator,
        I::Item: Into<Progress>,
    {
        stream.into_iter().map(|p| self.push(p)).collect()
    }
}

impl Default for ScrollDriver {
    fn default() -> Self {
        Self::new(ScrollProgressMapper::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/driver.rs"]
mod tests;
