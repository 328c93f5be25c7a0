use swarmscope::types::ident::{AgentId, GroupId};
use swarmscope::{Config, Dataset, Session, TimeLabel};

const ROWS: &str = r#"[
    {"DroneID": 1, "TimePoint": "TP1", "SwarmID": -1, "TaskID": -1, "State": "Taking Off", "PositionX": 0, "PositionY": 0, "PositionZ": 0, "VelocityX": 2.1, "VelocityY": 2.3, "VelocityZ": 1.04, "Pitch": 22.1, "Roll": 2.3, "Yaw": 48.2, "BatteryPercentage": 98, "DetectionRange": 50},
    {"DroneID": 1, "TimePoint": "TP2", "SwarmID": 1, "TaskID": -1, "State": "Entering Swarm", "PositionX": 21, "PositionY": 23, "PositionZ": 10.4, "VelocityX": 1.9, "VelocityY": 2.56, "VelocityZ": 0.94, "Pitch": 18.4, "Roll": -1.5, "Yaw": 52.7, "BatteryPercentage": 98, "DetectionRange": 50},
    {"DroneID": 1, "TimePoint": "TP3", "SwarmID": 1, "TaskID": -1, "State": "Hovering", "PositionX": 40, "PositionY": 48.6, "PositionZ": 19.8, "VelocityX": 2.16, "VelocityY": 2.2, "VelocityZ": 1.1, "Pitch": 21.9, "Roll": 3.2, "Yaw": 49.5, "BatteryPercentage": 96, "DetectionRange": 50},
    {"DroneID": 2, "TimePoint": "TP1", "SwarmID": -1, "TaskID": -1, "State": "Taking Off", "PositionX": 96, "PositionY": 40, "PositionZ": 20, "VelocityX": -2.1, "VelocityY": 0.96, "VelocityZ": 0.04, "Pitch": 0.9, "Roll": -2.5, "Yaw": 160.1, "BatteryPercentage": 100, "DetectionRange": 50},
    {"DroneID": 2, "TimePoint": "TP2", "SwarmID": -1, "TaskID": -1, "State": "Passing By", "PositionX": 75, "PositionY": 49.6, "PositionZ": 20.4, "VelocityX": -2.24, "VelocityY": 1.04, "VelocityZ": -0.02, "Pitch": -1.1, "Roll": 4.1, "Yaw": 155.3, "BatteryPercentage": 98, "DetectionRange": 50},
    {"DroneID": 2, "TimePoint": "TP3", "SwarmID": 1, "TaskID": 1, "State": "Entering Swarm", "PositionX": 52.6, "PositionY": 60, "PositionZ": 20.2, "VelocityX": -2.6, "VelocityY": 0.92, "VelocityZ": 0.06, "Pitch": 1.2, "Roll": -3.7, "Yaw": 158.2, "BatteryPercentage": 97, "DetectionRange": 50}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug to see detailed logs)
    env_logger::init();

    println!("=== Swarmscope - Getting Started ===\n");

    // === LOADING ===
    println!("1. Loading Observations");
    println!("-----------------------");

    let dataset: Dataset<TimeLabel> = Dataset::from_json_records(ROWS, Config::default())?;
    let meta = dataset.metadata();
    println!(
        "   {} drones over {} time points",
        meta.total_agents, meta.total_time_points
    );
    for (group, count) in meta.group_counts.iter() {
        println!("     - swarm {}: {} observations", group, count);
    }
    if let Some(bbox) = meta.bounding_box {
        println!(
            "   Bounds: ({:.1}, {:.1}, {:.1}) .. ({:.1}, {:.1}, {:.1})\n",
            bbox.min.x, bbox.min.y, bbox.min.z, bbox.max.x, bbox.max.y, bbox.max.z
        );
    }

    // === SESSION ===
    println!("2. Current Frame");
    println!("----------------");

    let mut session = Session::open(dataset)?;
    let summary = session.summarize();
    println!(
        "   At {}: {} visible, average battery {:.1}% ({:?})\n",
        session.current_time(),
        summary.count,
        summary.average_battery,
        summary.battery_band()
    );

    // === FILTERING ===
    println!("3. Filtering");
    println!("------------");

    session.skip_to_end();
    session.filter_mut().toggle_group(GroupId::Unassigned);
    session.set_battery_range(97.0, 100.0)?;
    for obs in session.visible() {
        println!(
            "   drone {} in swarm {} at battery {}%",
            obs.agent, obs.group, obs.battery
        );
    }
    session.reset_filter();
    println!();

    // === TRAJECTORIES ===
    println!("4. Trajectories");
    println!("---------------");

    let drone = AgentId::from(2);
    for obs in session.trajectory(&drone) {
        let state = session.dataset().state_label(obs.state).unwrap_or("?");
        println!(
            "   {} {:>14} at ({:.1}, {:.1}, {:.1}), speed {:.2}",
            obs.time,
            state,
            obs.position.x,
            obs.position.y,
            obs.position.z,
            obs.speed()
        );
    }

    println!("\n=== Done ===");
    Ok(())
}
