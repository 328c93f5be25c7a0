mod common;

use common::{grid, observation, shuffled, tp, trial_dataset, trial_index};
use swarmscope::types::ident::{AgentId, GroupId, StateId, TaskId};
use swarmscope::{Config, Dataset, SwarmError, TemporalIndex, TimeLabel};

#[test]
fn test_trial_dataset_metadata() {
    let ds = trial_dataset();
    let meta = ds.metadata();

    assert_eq!(ds.len(), 16);
    assert_eq!(meta.total_agents, 4);
    assert_eq!(meta.total_time_points, 4);

    assert_eq!(meta.group_counts.get(&GroupId::from(1)), 5);
    assert_eq!(meta.group_counts.get(&GroupId::from(2)), 4);
    assert_eq!(meta.group_counts.total(), 9);
    assert_eq!(meta.task_counts.get(&TaskId::from(1)), 2);
    assert_eq!(meta.task_counts.get(&TaskId::from(2)), 4);

    let vocab = ds.vocabulary();
    let count = |label: &str| meta.state_counts.get(&vocab.resolve(label).unwrap());
    assert_eq!(count("Taking Off"), 4);
    assert_eq!(count("Entering Swarm"), 4);
    assert_eq!(count("Hovering"), 2);
    assert_eq!(count("Passing By"), 4);
    assert_eq!(count("Attacking"), 1);
    assert_eq!(count("Parachute Deployment"), 1);

    let bbox = meta.bounding_box.unwrap();
    assert!((bbox.min.x + 10.0).abs() < 1e-9);
    assert!((bbox.min.z + 10.0).abs() < 1e-9);
    assert!((bbox.max.x - 106.0).abs() < 1e-9);
    assert!((bbox.max.y - 90.6).abs() < 1e-9);
    assert!((bbox.max.z - 40.8).abs() < 1e-9);

    assert!(ds.metadata_is_consistent());
}

#[test]
fn test_index_round_trip() {
    let index = trial_index();
    let dataset = index.dataset().clone();

    for obs in dataset.observations() {
        assert!(index.observations_at(&obs.time).contains(&obs));
        assert!(index.trajectory_of(&obs.agent).contains(&obs));
        assert_eq!(index.observation_of(&obs.agent, &obs.time), Some(obs));
    }

    let framed: usize = (0..index.len()).map(|i| index.frame(i).len()).sum();
    let tracked: usize = index
        .agents()
        .iter()
        .map(|agent| index.trajectory_of(agent).len())
        .sum();
    assert_eq!(framed, dataset.len());
    assert_eq!(tracked, dataset.len());
}

#[test]
fn test_trajectory_ascending() {
    let index = trial_index();
    let states: Vec<&str> = index
        .trajectory_of(&AgentId::from(2))
        .iter()
        .map(|o| index.dataset().state_label(o.state).unwrap())
        .collect();
    assert_eq!(
        states,
        vec!["Taking Off", "Passing By", "Entering Swarm", "Attacking"]
    );

    let observations = shuffled(&grid(6, 30), 17);
    let dataset = Dataset::builder()
        .observations(observations)
        .build()
        .unwrap();
    let index = TemporalIndex::from_dataset(dataset).unwrap();
    for agent in index.agents() {
        let times: Vec<u64> = index.trajectory_of(agent).iter().map(|o| o.time).collect();
        assert_eq!(times, (0..30).collect::<Vec<_>>());
    }
}

#[test]
fn test_lookups_on_missing_keys_are_empty() {
    let index = trial_index();
    assert!(index.observations_at(&tp("TP9")).is_empty());
    assert!(index.trajectory_of(&AgentId::from(42)).is_empty());
    assert!(index.trajectory_of(&AgentId::from("alpha")).is_empty());
    assert_eq!(index.observation_of(&AgentId::from(1), &tp("TP0")), None);
}

#[test]
fn test_natural_time_label_order() {
    let rows: Vec<_> = ["TP10", "TP2", "TP1", "TP9"]
        .into_iter()
        .map(|label| {
            format!(
                r#"{{"DroneID": "d-1", "TimePoint": "{}", "SwarmID": null, "TaskID": null,
                    "State": "Hovering", "PositionX": 0, "PositionY": 0, "PositionZ": 0,
                    "VelocityX": 0, "VelocityY": 0, "VelocityZ": 0,
                    "Pitch": 0, "Roll": 0, "Yaw": 0,
                    "BatteryPercentage": 50, "DetectionRange": 10}}"#,
                label
            )
        })
        .collect();
    let json = format!("[{}]", rows.join(","));

    let ds: Dataset<TimeLabel> = Dataset::from_json_records(&json, Config::default()).unwrap();
    let labels: Vec<&str> = ds.time_points().iter().map(TimeLabel::as_str).collect();
    assert_eq!(labels, vec!["TP1", "TP2", "TP9", "TP10"]);

    let index = TemporalIndex::from_dataset(ds).unwrap();
    assert_eq!(index.seek_ordinal(&tp("TP5")), 1);
    assert_eq!(index.seek_ordinal(&tp("TP0")), 0);
    assert_eq!(index.seek_ordinal(&tp("TP99")), 3);
}

#[test]
fn test_duplicate_sample_rejected() {
    let ds = Dataset::builder()
        .observations([
            observation(1, 0, 1, 1, 0, 50.0),
            observation(1, 1, 1, 1, 0, 50.0),
            observation(1, 1, 2, 2, 1, 40.0),
        ])
        .build()
        .unwrap();
    match TemporalIndex::from_dataset(ds) {
        Err(SwarmError::MalformedDataset(msg)) => assert!(msg.contains("more than one")),
        other => panic!("expected malformed dataset, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_observation_outside_timeline_rejected() {
    let ds = Dataset::builder()
        .time_points([0u64, 1, 2])
        .observation(observation(1, 3, 1, 1, 0, 50.0))
        .build()
        .unwrap();
    assert!(matches!(
        TemporalIndex::from_dataset(ds),
        Err(SwarmError::MalformedDataset(_))
    ));
}

#[test]
fn test_time_point_without_observations() {
    let ds = Dataset::builder()
        .time_points([0u64, 1, 2])
        .observations([
            observation(1, 0, 1, 1, 0, 50.0),
            observation(1, 2, 1, 1, 0, 50.0),
        ])
        .build()
        .unwrap();
    let index = TemporalIndex::from_dataset(ds).unwrap();
    assert!(index.observations_at(&1).is_empty());
    assert_eq!(index.trajectory_of(&AgentId::from(1)).len(), 2);
    assert_eq!(index.dataset().state_label(StateId(0)), Some("Taking Off"));
}

#[test]
fn test_unknown_state_in_rows() {
    let json = common::TRIAL_ROWS.replacen("Hovering", "Loitering", 1);
    let err = Dataset::<TimeLabel>::from_json_records(&json, Config::default()).unwrap_err();
    assert!(matches!(err, SwarmError::UnknownState(label) if label == "Loitering"));
}

#[test]
fn test_malformed_json() {
    let err = Dataset::<TimeLabel>::from_json_records("[{\"DroneID\": 1}]", Config::default())
        .unwrap_err();
    assert!(matches!(err, SwarmError::Serialization(_)));
}
