use std::path::Path;

use lj2d::diagnostics::{self, EnergyTrace};
use lj2d::error::Result;
use lj2d::io::SimulationState;
use lj2d::run_config::RunConfig;
use lj2d::simulation;

fn main() {
    if let Err(e) = run() {
        eprintln!("lj2d: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let run_config = if Path::new(RunConfig::DEFAULT_PATH).exists() {
        RunConfig::load_default()?
    } else {
        RunConfig::default()
    };
    run_config.validate()?;

    let physics = &run_config.physics;
    let nsteps = run_config.steps_per_iteration();
    println!(
        "{} particles, {} iterations of {} Euler steps (dt = {:e} s, L = {:e} m)",
        run_config.particles, run_config.iterations, nsteps, physics.dt, physics.box_length
    );

    let mut system = run_config
        .sampler
        .sample(run_config.particles, physics, run_config.seed)?;

    let mut trace = EnergyTrace::new();
    let mut diverged = false;
    for iteration in 0..run_config.iterations {
        simulation::advance(&mut system, nsteps, physics.dt, physics)?;

        let kinetic = diagnostics::kinetic_energy(&system.velocities, physics.mass);
        let total = diagnostics::total_energy(&system, physics)?;
        let time = (iteration + 1) as f64 * nsteps as f64 * physics.dt;
        trace.record(iteration, time, kinetic, total - kinetic);

        if !total.is_finite() && !diverged {
            diverged = true;
            eprintln!(
                "warning: non-finite total energy at iteration {iteration}; \
                 the system has left its valid regime (particles collided)"
            );
        }
    }

    trace.write_csv(&run_config.output)?;
    println!("energy trace written to {}", run_config.output.display());

    if let Some(path) = &run_config.checkpoint {
        let state = SimulationState {
            system,
            config: physics.clone(),
            elapsed_steps: (run_config.iterations * nsteps) as u64,
        };
        state.save_compressed(path)?;
        println!("final state checkpointed to {}", path.display());
    }

    #[cfg(feature = "profiling")]
    lj2d::PROFILER.lock().print_and_clear();

    Ok(())
}
