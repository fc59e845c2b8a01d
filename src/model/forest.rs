use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FeatureFrame, ModelError, ModelLoadError, PotabilityModel};

/// Artifact layout version understood by [`RandomForestModel`].
pub const FOREST_FORMAT_VERSION: u32 = 1;

const LEAF: i64 = -1;

/// On-disk JSON layout of a fitted random forest classifier.
///
/// Each tree mirrors the parallel-array layout of a scikit-learn tree: node `i`
/// splits on `feature[i]` at `threshold[i]` (values `<=` go left) unless both
/// child pointers are `-1`, in which case `value[i]` holds per-class weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestArtifact {
    pub format_version: u32,
    pub feature_names: Vec<String>,
    pub classes: Vec<i64>,
    pub feature_importances: Vec<f64>,
    pub trees: Vec<TreeArrays>,
}

/// Parallel node arrays for one tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeArrays {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<Vec<f64>>,
}

#[derive(Debug, Clone)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        proba: Vec<f64>,
    },
}

#[derive(Debug, Clone)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn compile(
        index: usize,
        arrays: &TreeArrays,
        n_features: usize,
        n_classes: usize,
    ) -> Result<Self, ModelLoadError> {
        let n = arrays.children_left.len();
        if n == 0 {
            return Err(malformed(format!("tree {index} has no nodes")));
        }
        if arrays.children_right.len() != n
            || arrays.feature.len() != n
            || arrays.threshold.len() != n
            || arrays.value.len() != n
        {
            return Err(malformed(format!("tree {index} has inconsistent array lengths")));
        }
        let mut nodes = Vec::with_capacity(n);
        for node in 0..n {
            let left = arrays.children_left[node];
            let right = arrays.children_right[node];
            if left == LEAF && right == LEAF {
                nodes.push(Node::Leaf {
                    proba: normalize_leaf(index, node, &arrays.value[node], n_classes)?,
                });
                continue;
            }
            let child = |pointer: i64| -> Result<usize, ModelLoadError> {
                usize::try_from(pointer)
                    .ok()
                    .filter(|&child| child > node && child < n)
                    .ok_or_else(|| {
                        malformed(format!(
                            "tree {index} node {node} has invalid child pointer {pointer}"
                        ))
                    })
            };
            let feature = usize::try_from(arrays.feature[node])
                .ok()
                .filter(|&feature| feature < n_features)
                .ok_or_else(|| {
                    malformed(format!(
                        "tree {index} node {node} splits on unknown feature {}",
                        arrays.feature[node]
                    ))
                })?;
            let threshold = arrays.threshold[node];
            if !threshold.is_finite() {
                return Err(malformed(format!(
                    "tree {index} node {node} has a non-finite threshold"
                )));
            }
            nodes.push(Node::Split {
                feature,
                threshold,
                left: child(left)?,
                right: child(right)?,
            });
        }
        Ok(Self { nodes })
    }

    /// Class distribution of the leaf reached by `row`.
    ///
    /// Children always sit after their parent, so the walk terminates.
    fn leaf_proba(&self, row: &[f64]) -> &[f64] {
        let mut idx = 0usize;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { proba } => return proba,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

fn normalize_leaf(
    tree: usize,
    node: usize,
    weights: &[f64],
    n_classes: usize,
) -> Result<Vec<f64>, ModelLoadError> {
    if weights.len() != n_classes {
        return Err(malformed(format!(
            "tree {tree} leaf {node} has {} class weights but {n_classes} classes",
            weights.len()
        )));
    }
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(malformed(format!(
            "tree {tree} leaf {node} has a negative or non-finite weight"
        )));
    }
    let sum: f64 = weights.iter().sum();
    if sum <= 0.0 {
        return Err(malformed(format!("tree {tree} leaf {node} has no weight")));
    }
    Ok(weights.iter().map(|w| w / sum).collect())
}

fn malformed(message: String) -> ModelLoadError {
    ModelLoadError::Malformed(message)
}

/// Random forest classifier loaded from a [`ForestArtifact`].
///
/// Prediction averages the leaf class distributions of every tree and returns
/// the label with the highest mean; ties resolve to the earliest class.
#[derive(Debug, Clone)]
pub struct RandomForestModel {
    feature_names: Vec<String>,
    classes: Vec<i64>,
    importances: Vec<f64>,
    trees: Vec<Tree>,
}

impl RandomForestModel {
    /// Load and validate a model from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, ModelLoadError> {
        let bytes = std::fs::read(path).map_err(|source| ModelLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: ForestArtifact =
            serde_json::from_slice(&bytes).map_err(|source| ModelLoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let model = Self::from_artifact(artifact)?;
        tracing::info!(
            "Loaded random forest from {} ({} trees, {} classes)",
            path.display(),
            model.n_trees(),
            model.classes.len()
        );
        Ok(model)
    }

    /// Validate a parsed artifact and compile its trees.
    pub fn from_artifact(artifact: ForestArtifact) -> Result<Self, ModelLoadError> {
        if artifact.format_version != FOREST_FORMAT_VERSION {
            return Err(ModelLoadError::UnsupportedVersion {
                found: artifact.format_version,
                expected: FOREST_FORMAT_VERSION,
            });
        }
        if artifact.classes.is_empty() {
            return Err(malformed("model lists no classes".into()));
        }
        if artifact.trees.is_empty() {
            return Err(malformed("model contains no trees".into()));
        }
        let n_features = artifact.feature_names.len();
        if artifact.feature_importances.len() != n_features {
            return Err(malformed(format!(
                "{} feature importances for {n_features} features",
                artifact.feature_importances.len()
            )));
        }
        let n_classes = artifact.classes.len();
        let trees = artifact
            .trees
            .iter()
            .enumerate()
            .map(|(index, arrays)| Tree::compile(index, arrays, n_features, n_classes))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            feature_names: artifact.feature_names,
            classes: artifact.classes,
            importances: artifact.feature_importances,
            trees,
        })
    }

    /// Column names the model was fitted on, in order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Output labels in class-index order.
    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    /// Number of trees in the ensemble.
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Mean class distribution for one row whose width is already checked.
    fn predict_proba_row(&self, row: &[f64]) -> Vec<f64> {
        let mut mean = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            for (acc, p) in mean.iter_mut().zip(tree.leaf_proba(row)) {
                *acc += p;
            }
        }
        let count = self.trees.len() as f64;
        for value in &mut mean {
            *value /= count;
        }
        mean
    }

    fn check_frame(&self, frame: &FeatureFrame) -> Result<(), ModelError> {
        if frame.columns() != self.feature_names.as_slice() {
            return Err(ModelError::FeatureNames {
                expected: self.feature_names.clone(),
                found: frame.columns().to_vec(),
            });
        }
        for (row_idx, row) in frame.rows().iter().enumerate() {
            if row.len() != self.feature_names.len() {
                return Err(ModelError::RowWidth {
                    row: row_idx,
                    expected: self.feature_names.len(),
                    found: row.len(),
                });
            }
            if let Some(col) = row.iter().position(|value| !value.is_finite()) {
                return Err(ModelError::NonFiniteValue {
                    row: row_idx,
                    column: self.feature_names[col].clone(),
                });
            }
        }
        Ok(())
    }
}

impl PotabilityModel for RandomForestModel {
    fn predict(&self, frame: &FeatureFrame) -> Result<Vec<i64>, ModelError> {
        self.check_frame(frame)?;
        Ok(frame
            .rows()
            .iter()
            .map(|row| self.classes[argmax(&self.predict_proba_row(row))])
            .collect())
    }

    fn feature_importances(&self) -> &[f64] {
        &self.importances
    }
}

fn argmax(values: &[f64]) -> usize {
    let mut best_idx = 0usize;
    let mut best_val = f64::NEG_INFINITY;
    for (idx, &v) in values.iter().enumerate() {
        if v > best_val {
            best_val = v;
            best_idx = idx;
        }
    }
    best_idx
}
