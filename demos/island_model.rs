//! Island Model
//!
//! This example runs the same multimodal problem twice: once as a single
//! isolated island, and once as four smaller islands joined in a ring that
//! trade their best chromosome every 25 generations.
//!
//! Island models can help maintain diversity and escape local optima.

use island_evo::prelude::*;

const DIM: usize = 20;
const GENERATIONS: usize = 400;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Island Model ===\n");

    let bounds = MultiBounds::symmetric(5.12, DIM);

    println!("Problem: {}-D Rastrigin", DIM);
    println!("Configuration:");
    println!("  Islands: 4");
    println!("  Population per island: 50");
    println!("  Migration interval: 25 generations");
    println!("  Topology: ring\n");

    // Four islands of 50, each with its own seed
    let islands = (0..4u64)
        .map(|i| -> EvoResult<_> {
            let config = AlgorithmConfig::new(GENERATIONS, 50).with_seed(42 + i);
            let mut island = GeneticAlgorithm::from_config(Rastrigin::new(DIM), &config);
            island.init(&config, &bounds)?;
            Ok(island)
        })
        .collect::<EvoResult<Vec<_>>>()?;

    let mut archipelago = Archipelago::new(islands, MigrationTopology::Ring, 25)?;
    let mut accepted = 0;
    while !archipelago.is_finished() {
        accepted += archipelago.step()?.accepted;
    }
    let report = archipelago.report()?;

    println!("Results:");
    println!("  Best objective:     {:.6}", report.best_objective);
    println!("  Rounds:             {}", report.rounds);
    println!("  Migrants accepted:  {}", accepted);
    println!("  Evaluations:        {}", report.total_evaluations());

    // Same total population on one island, no migration
    println!("\n--- Comparison with single population ---");
    let config = AlgorithmConfig::new(GENERATIONS, 200).with_seed(42);
    let mut single = GeneticAlgorithm::from_config(Rastrigin::new(DIM), &config);
    single.init(&config, &bounds)?;
    single.run_iterations(GENERATIONS)?;
    let single_best = single.get_stats().best_fitness;

    println!("Single population best: {:.6}", single_best);
    println!("Island model best:      {:.6}", report.best_objective);

    if report.best_objective < single_best {
        println!("\nIsland model found better solution!");
    } else {
        println!("\nSingle population found better solution.");
    }

    Ok(())
}
