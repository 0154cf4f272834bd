// ============================================================
// Layer 2 — ClassifyUseCase
// ============================================================
// Runs the whole pipeline over a record file:
//
//   Step 1: Load records            (Layer 4 - data)
//   Step 2: Wrap in HiscoDataset    (Layer 4 - data)
//   Step 3: Build the classifier    (Layer 5 - ml)
//   Step 4: Batch with DataLoader   (Layer 4 - data)
//   Step 5: Predict per batch       (Layer 5 - ml)
//
// The classifier is freshly initialised (seeded when asked), so
// this is a pipeline check rather than a source of real codes.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use burn::{
    data::{dataloader::DataLoaderBuilder, dataset::InMemDataset},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::data::{batcher::HiscoBatcher, dataset::HiscoDataset, loader::RecordLoader};
use crate::domain::traits::RecordSource;
use crate::ml::{inferencer::Inferencer, model::HiscoClassifierConfig};

#[cfg(not(feature = "wgpu"))]
pub type CliBackend = burn::backend::NdArray;
#[cfg(feature = "wgpu")]
pub type CliBackend = burn::backend::Wgpu;

// ─── Run Configuration ───────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyConfig {
    /// CSV or JSON-lines file with `occ1` and `label` columns
    pub data_path:    PathBuf,
    pub batch_size:   usize,
    /// Seed for parameter initialisation; None keeps the backend default
    pub seed:         Option<u64>,
    /// JSON file with a HiscoClassifierConfig; None uses the defaults
    pub model_config: Option<PathBuf>,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            data_path:    PathBuf::from("data/records.csv"),
            batch_size:   64,
            seed:         None,
            model_config: None,
        }
    }
}

/// One record with the classifier's verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedRecord {
    pub occ1:        String,
    pub label:       i64,
    pub predicted:   i64,
    pub probability: f32,
}

// ─── ClassifyUseCase ──────────────────────────────────────────────────────────
pub struct ClassifyUseCase {
    config: ClassifyConfig,
}

impl ClassifyUseCase {
    pub fn new(config: ClassifyConfig) -> Self {
        Self { config }
    }

    /// Run on the CLI backend's default device.
    pub fn execute(&self) -> Result<Vec<ClassifiedRecord>> {
        self.execute_on::<CliBackend>(Default::default())
    }

    /// Run over the configured `data_path`.
    pub fn execute_on<B: Backend>(&self, device: B::Device) -> Result<Vec<ClassifiedRecord>> {
        let loader = RecordLoader::new(&self.config.data_path);
        self.execute_with::<B>(&loader, device)
    }

    /// Run over records from any source; `data_path` is not read.
    pub fn execute_with<B: Backend>(
        &self,
        source: &dyn RecordSource,
        device: B::Device,
    ) -> Result<Vec<ClassifiedRecord>> {
        let cfg = &self.config;
        if cfg.batch_size == 0 {
            bail!("batch_size must be greater than zero");
        }

        // ── Step 1 + 2: records → dataset ────────────────────────────────────
        let records = source
            .load_records()
            .context("Failed to load occupation records")?;
        let dataset = HiscoDataset::new(InMemDataset::new(records));
        tracing::info!("Dataset ready: {} records", dataset.size());

        // ── Step 3: classifier ───────────────────────────────────────────────
        let model_cfg = self.model_config()?;
        if let Some(seed) = cfg.seed {
            B::seed(seed);
        }
        let inferencer = Inferencer::<B>::new(&model_cfg, device.clone())
            .context("Invalid classifier configuration")?;

        // ── Step 4 + 5: batch and predict ────────────────────────────────────
        // Single-threaded loader so results come back in record order.
        let loader = DataLoaderBuilder::new(HiscoBatcher::<B>::new(device))
            .batch_size(cfg.batch_size)
            .build(dataset);

        let mut results = Vec::new();
        for batch in loader.iter() {
            let labels: Vec<i64> = batch
                .labels
                .clone()
                .into_data()
                .convert::<i64>()
                .to_vec()
                .map_err(|e| anyhow::anyhow!("Cannot read batch labels: {e:?}"))?;
            let predictions = inferencer.predict_batch(&batch)?;

            tracing::debug!("Classified batch of {}", predictions.len());

            results.extend(batch.occ1.into_iter().zip(labels).zip(predictions).map(
                |((occ1, label), p)| ClassifiedRecord {
                    occ1,
                    label,
                    predicted:   p.label,
                    probability: p.probability,
                },
            ));
        }

        let matches = results.iter().filter(|r| r.label == r.predicted).count();
        tracing::info!("Classified {} records, {} match their label", results.len(), matches);
        Ok(results)
    }

    fn model_config(&self) -> Result<HiscoClassifierConfig> {
        match &self.config.model_config {
            Some(path) => {
                let cfg = HiscoClassifierConfig::load(path).map_err(|e| {
                    anyhow::anyhow!("Cannot read model config '{}': {e:?}", path.display())
                })?;
                tracing::info!("Loaded model config from '{}'", path.display());
                Ok(cfg)
            }
            None => Ok(HiscoClassifierConfig::new()),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_classifies_every_record_in_order() {
        let dir       = tempfile::tempdir().unwrap();
        let data_path = write(&dir, "toy.csv", "occ1,label\nfarmer,1\nminer,2\nweaver,3\n");
        let model     = write(&dir, "model.json", r#"{"vocab_size": 80, "hidden_size": 8, "num_classes": 5}"#);

        let use_case = ClassifyUseCase::new(ClassifyConfig {
            data_path,
            batch_size:   2,
            seed:         Some(7),
            model_config: Some(model),
        });
        let results = use_case.execute_on::<NdArray>(Default::default()).unwrap();

        assert_eq!(
            results.iter().map(|r| r.occ1.as_str()).collect::<Vec<_>>(),
            vec!["farmer", "miner", "weaver"]
        );
        assert_eq!(results.iter().map(|r| r.label).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(results.iter().all(|r| (0..5).contains(&r.predicted)));
    }

    #[test]
    fn test_runs_on_in_memory_records() {
        use crate::domain::record::HiscoRecord;

        let records = vec![
            HiscoRecord::new("tailor", 4),
            HiscoRecord::new("Skomager", 3_000_000_000),
        ];
        let use_case = ClassifyUseCase::new(ClassifyConfig {
            data_path:  PathBuf::from("unused.csv"),
            batch_size: 8,
            ..Default::default()
        });
        let results = use_case.execute_with::<NdArray>(&records, Default::default()).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].occ1, "tailor");
        assert_eq!(results[1].label, 3_000_000_000);
        assert!(results.iter().all(|r| (0..1919).contains(&r.predicted)));
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let use_case = ClassifyUseCase::new(ClassifyConfig { batch_size: 0, ..Default::default() });
        assert!(use_case.execute_on::<NdArray>(Default::default()).is_err());
    }

    #[test]
    fn test_invalid_model_config_rejected() {
        let dir       = tempfile::tempdir().unwrap();
        let data_path = write(&dir, "toy.csv", "occ1,label\nfarmer,1\n");
        let model     = write(&dir, "model.json", r#"{"vocab_size": 20, "hidden_size": 8, "num_classes": 5}"#);

        let use_case = ClassifyUseCase::new(ClassifyConfig {
            data_path,
            model_config: Some(model),
            ..Default::default()
        });
        let err = use_case.execute_on::<NdArray>(Default::default()).unwrap_err();
        assert!(format!("{err:#}").contains("vocab_size 20 is too small"));
    }
}
