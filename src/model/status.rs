#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityStatus {
    Excellent,
    Acceptable,
    NeedsImprovement,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusBand {
    pub good: f64,
    pub acceptable: f64,
}

#[derive(Debug, Clone)]
pub struct QualityThresholds {
    pub bands: Vec<(String, StatusBand)>,
    pub fallback: StatusBand,
}

impl QualityStatus {
    pub fn symbol(self) -> &'static str {
        match self {
            QualityStatus::Excellent => "✅",
            QualityStatus::Acceptable => "⚠️",
            QualityStatus::NeedsImprovement => "❌",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QualityStatus::Excellent => "Excellent",
            QualityStatus::Acceptable => "Acceptable",
            QualityStatus::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl QualityThresholds {
    pub fn default_v1() -> Self {
        let standard = StatusBand {
            good: 4.0,
            acceptable: 3.0,
        };
        let mut bands: Vec<(String, StatusBand)> =
            ["groundedness", "relevance", "coherence", "fluency"]
                .iter()
                .map(|name| (name.to_string(), standard))
                .collect();
        bands.push((
            "similarity".to_string(),
            StatusBand {
                good: 3.5,
                acceptable: 2.5,
            },
        ));
        Self {
            bands,
            fallback: standard,
        }
    }

    pub fn band_for(&self, metric_name: &str) -> StatusBand {
        let lower = metric_name.to_lowercase();
        let prefix = lower.split('.').next().unwrap_or(&lower);
        self.lookup(&lower)
            .or_else(|| self.lookup(prefix))
            .unwrap_or(self.fallback)
    }

    pub fn status(&self, metric_name: &str, score: f64) -> QualityStatus {
        let band = self.band_for(metric_name);
        if score >= band.good {
            QualityStatus::Excellent
        } else if score >= band.acceptable {
            QualityStatus::Acceptable
        } else {
            QualityStatus::NeedsImprovement
        }
    }

    fn lookup(&self, name: &str) -> Option<StatusBand> {
        self.bands
            .iter()
            .find(|(family, _)| family == name)
            .map(|(_, band)| *band)
    }
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/status.rs"]
mod tests;
