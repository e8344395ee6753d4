//! In-memory sources for decision tests.
use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;

use rbg_model::{BuildDate, Comparison, ImageLabels, LABEL_BUILD_DATE, LABEL_VCS_REF};

use crate::{
    clock::FixedClock,
    error::CheckError,
    source::{ImageInspector, ReportSource, SourceHistory},
};

pub fn labels(sha: &str, built: &str) -> ImageLabels {
    ImageLabels::from_iter([(LABEL_VCS_REF, sha), (LABEL_BUILD_DATE, built)])
}

pub fn at(now: &str) -> Arc<FixedClock> {
    Arc::new(FixedClock(BuildDate::parse(now).unwrap()))
}

#[derive(Default)]
pub struct FakeRegistry {
    images: HashMap<String, ImageLabels>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, image: &str, labels: ImageLabels) -> Self {
        self.images.insert(image.to_string(), labels);
        self
    }
}

#[async_trait]
impl ImageInspector for FakeRegistry {
    async fn image_labels(&self, image: &str) -> Result<ImageLabels, CheckError> {
        self.images
            .get(image)
            .cloned()
            .ok_or_else(|| CheckError::Registry(format!("no such image: {image}")))
    }
}

/// Returns the same comparison for any base and records the bases asked for.
pub struct FakeHistory {
    comparison: Comparison,
    bases: Mutex<Vec<String>>,
}

impl FakeHistory {
    pub fn new(changed: &[&str]) -> Self {
        Self {
            comparison: changed.iter().copied().collect(),
            bases: Mutex::new(Vec::new()),
        }
    }

    pub fn bases(&self) -> Vec<String> {
        self.bases.lock().unwrap().clone()
    }
}

#[async_trait]
impl SourceHistory for FakeHistory {
    async fn compare_to_head(&self, base: &str) -> Result<Comparison, CheckError> {
        self.bases.lock().unwrap().push(base.to_string());
        Ok(self.comparison.clone())
    }
}

/// Serves a fixed tail, or fails when built with [`FakeReport::failing`].
pub struct FakeReport {
    tail: Option<String>,
    calls: AtomicUsize,
}

impl FakeReport {
    pub fn new(tail: &str) -> Self {
        Self {
            tail: Some(tail.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            tail: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReportSource for FakeReport {
    async fn report_tail(&self) -> Result<String, CheckError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tail
            .clone()
            .ok_or_else(|| CheckError::Report("report unavailable".to_string()))
    }
}
