//! Drives a session's playback clock from a fixed-rate loop, the way a UI
//! timer would.

use std::time::Duration;
use swarmscope::types::ident::{AgentId, GroupId, StateId, TaskId};
use swarmscope::types::observation::Observation;
use swarmscope::types::point::{Orientation, Vec3};
use swarmscope::{Config, Dataset, EndOfRange, Session};

const AGENTS: i64 = 8;
const TICKS: u64 = 20;

fn synthetic_flight() -> Vec<Observation<u64>> {
    let mut observations = Vec::new();
    for agent in 0..AGENTS {
        let heading = agent as f64 * std::f64::consts::TAU / AGENTS as f64;
        let velocity = Vec3::new(heading.cos() * 2.0, heading.sin() * 2.0, 0.5);

        for tick in 0..TICKS {
            let t = tick as f64;
            observations.push(Observation {
                agent: AgentId::from(agent),
                time: tick,
                group: if tick < 5 {
                    GroupId::Unassigned
                } else {
                    GroupId::from(agent % 2 + 1)
                },
                task: if tick < 10 {
                    TaskId::Unassigned
                } else {
                    TaskId::from(agent % 3 + 1)
                },
                state: StateId(((tick / 4) as u16).min(5)),
                position: Vec3::new(velocity.x * t, velocity.y * t, velocity.z * t),
                velocity,
                orientation: Orientation::new(5.0, 0.0, heading.to_degrees()),
                battery: 100.0 - t * (1.0 + agent as f64 * 0.25),
                detection_radius: 50.0,
            });
        }
    }
    observations
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Config::default()
        .with_end_of_range(EndOfRange::StopAtEnd)
        .with_playback_speed(1.5);
    let dataset = Dataset::builder()
        .config(config)
        .observations(synthetic_flight())
        .build()?;

    let mut session = Session::open(dataset)?;
    session.play();

    // 10 FPS
    let frame = Duration::from_millis(100);
    while let Some(&tick) = session.tick() {
        let summary = session.summarize();
        println!(
            "t={:>2} [{:>3.0}%] visible={} swarms={} tasks={} battery={:.1}% speed={:.2}",
            tick,
            session.progress() * 100.0,
            summary.count,
            summary.active_groups(),
            summary.active_tasks(),
            summary.average_battery,
            summary.average_speed
        );
        std::thread::sleep(frame);
    }

    println!("Playback finished at t={}", session.current_time());
    Ok(())
}
