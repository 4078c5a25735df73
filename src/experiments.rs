//! Completed-experiment catalog shown on the Experiments tab.

use serde::{Deserialize, Serialize};

/// A completed optimization experiment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentRun {
    pub id: u32,
    pub name: String,
    /// Human-readable completion note ("Completed 2h ago").
    pub completed: String,
}

impl ExperimentRun {
    /// Case-insensitive substring match on the name, or a digit match on
    /// the run id. An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query_lower = query.to_lowercase();
        self.name.to_lowercase().contains(&query_lower) || self.id.to_string().contains(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(id: u32, name: &str) -> ExperimentRun {
        ExperimentRun {
            id,
            name: name.to_string(),
            completed: "Completed 2h ago".to_string(),
        }
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert!(run(1025, "Layer Pruning v1").matches(""));
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let experiment = run(1026, "8-bit Quantization (INT8)");
        assert!(experiment.matches("quant"));
        assert!(experiment.matches("INT8"));
        assert!(experiment.matches("int8"));
        assert!(!experiment.matches("pruning"));
    }

    #[test]
    fn test_id_match_on_digits() {
        let experiment = run(1027, "LoRA Fine-tuning subset");
        assert!(experiment.matches("1027"));
        assert!(experiment.matches("102"));
        assert!(!experiment.matches("999"));
    }
}
