use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use potability::gateway::PredictionGateway;
use potability::model::{FeatureFrame, ForestArtifact, PotabilityModel, RandomForestModel};
use potability::record::MeasurementRecord;
use potability::schema;

fn sample_model() -> RandomForestModel {
    let artifact: ForestArtifact =
        serde_json::from_str(include_str!("../assets/models/sample_forest.json"))
            .expect("sample forest json");
    RandomForestModel::from_artifact(artifact).expect("sample forest")
}

fn default_pairs() -> Vec<(String, String)> {
    schema::FIELDS
        .iter()
        .map(|spec| (spec.name.to_string(), spec.default.to_string()))
        .collect()
}

fn bench_model_predict(c: &mut Criterion) {
    let model = sample_model();
    let frame = FeatureFrame::single_row(&MeasurementRecord::default());
    c.bench_function("forest_predict_row", |b| {
        b.iter(|| model.predict(black_box(&frame)).expect("predict"));
    });
}

fn bench_gateway_submit(c: &mut Criterion) {
    let gateway = PredictionGateway::new(Arc::new(sample_model())).expect("gateway");
    let pairs = default_pairs();
    c.bench_function("gateway_submit", |b| {
        b.iter(|| {
            gateway
                .submit(
                    black_box(&pairs)
                        .iter()
                        .map(|(name, value)| (name.as_str(), value.as_str())),
                )
                .expect("submit")
        });
    });
}

criterion_group!(benches, bench_model_predict, bench_gateway_submit);
criterion_main!(benches);
