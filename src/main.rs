use clap::Parser;
use colored::Colorize;
use std::time::Instant;
use stick_ants::prelude::*;
use stick_ants::simulation::EPS_X;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let seed = match args.seed {
        Some(seed) => seed,
        None => fastrand::u64(..),
    };
    let stick = StickConfig {
        ants: args.ants,
        length: args.length,
        speed: args.speed,
    };

    if args.trace {
        let mut rng = fastrand::Rng::with_seed(seed);
        trace_trial(&stick, &mut rng)?;
        return Ok(());
    }

    let config = MonteCarloConfig {
        stick,
        seed,
        trials: args.trials,
        groups: args.groups,
    };

    let start = Instant::now();
    let stats = run_monte_carlo(&config)?;
    print_report(&stats, &args, seed, start.elapsed());

    Ok(())
}

/// Run one seeded trial and print every step of it
fn trace_trial(config: &StickConfig, rng: &mut fastrand::Rng) -> Result<()> {
    let mut set = ParticleSet::random(config, rng)?;

    println!(
        "Created {} ants with velocity +/- {} on a stick of length {}",
        config.ants, config.speed, config.length
    );
    println!("\n  #   position   velocity   heading");
    for ant in &set.ants {
        println!(
            " {:2}     {:6.1}     {:4.1}    {}",
            ant.id,
            ant.position,
            ant.velocity,
            ant.direction().as_str()
        );
    }

    let mut engine = SimulationEngine::new(config.length, config.speed);
    println!("\n    Time    Ant positions");
    print_step_line(&set, engine.time());
    while !set.window.is_empty() && engine.steps() < engine.max_steps() {
        engine.step(&mut set);
        print_step_line(&set, engine.time());
    }
    Ok(())
}

/// One trace row: `----` for exited ants, `a==b` for a colliding pair
fn print_step_line(set: &ParticleSet, time: f64) {
    let mut line = String::with_capacity(128);
    line.push_str(&format!(" {:6.1}:  ", time));

    let mut i = 0;
    while i < set.len() {
        let ant = &set.ants[i];
        if !ant.is_active() {
            line.push_str("   ----");
        } else if i + 1 < set.len()
            && set.ants[i + 1].is_active()
            && (set.ants[i + 1].position - ant.position).abs() < EPS_X
        {
            line.push_str(&format!(
                "  {:5.1}=={:5.1}",
                ant.position,
                set.ants[i + 1].position
            ));
            i += 1;
        } else {
            line.push_str(&format!("  {:5.1}", ant.position));
        }
        i += 1;
    }
    println!("{}", line);
}

/// Print per-ant probabilities and a timing summary
fn print_report(
    stats: &AggregateStatistics,
    args: &Args,
    seed: u64,
    elapsed: std::time::Duration,
) {
    if !args.quiet {
        println!(
            "\n{}",
            "Probability that an ant falls off the end it faced initially".bold()
        );
        println!("{}", "ant  probability".bright_blue());
        for (id, p) in stats.probabilities.iter().enumerate() {
            println!(" {:2}  {}", id, format!("{:6.4}", p).cyan());
        }
    }

    println!(
        "\n{}\n{} {:.3} ms {} {} {} {} {}",
        "===".bright_blue().bold(),
        "⏱️  Simulation Latency:".green().bold(),
        elapsed.as_secs_f64() * 1000.0,
        "|".dimmed(),
        format!("ants={}", args.ants).cyan(),
        format!("trials={}", stats.trials).cyan(),
        format!("groups={}", stats.groups).cyan(),
        format!("seed={}", seed).cyan(),
    );
}
