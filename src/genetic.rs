//! Genetic algorithm for closed-tour ordering.
//!
//! Individuals encode a closed tour `[start] + permutation(stops) + [start]`.
//! Order crossover and interior swaps keep every individual a valid
//! permutation, so the result is always a closed tour over the full stop
//! set regardless of generation count or population size.

use std::cmp::Ordering;
use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::graph::DynamicGraph;
use crate::search::RouteError;
use crate::tour::{TourResult, route_cost, validate_stops};

/// Tuning knobs for one optimizer run.
#[derive(Debug, Clone)]
pub struct GeneticConfig {
    pub generations: usize,
    pub population_size: usize,
    /// Per-individual probability of an interior swap.
    pub mutation_rate: f64,
    pub tournament_size: usize,
    /// Number of top individuals carried over unchanged each generation.
    pub elite_count: usize,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            population_size: 50,
            mutation_rate: 0.1,
            tournament_size: 5,
            elite_count: 5,
            seed: None,
        }
    }
}

impl GeneticConfig {
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Evolve a closed tour visiting every stop exactly once.
///
/// Runs a fixed number of generations (no convergence-based early stop);
/// `generations = 0` returns the best individual of the initial random
/// population. An empty stop list yields the trivial single-node tour.
pub fn genetic_tour(
    graph: &DynamicGraph,
    start: &str,
    stops: &[String],
    config: &GeneticConfig,
) -> Result<TourResult, RouteError> {
    validate_stops(graph, start, stops)?;

    if stops.is_empty() {
        return Ok(TourResult {
            route: vec![start.to_string()],
            cost: 0.0,
            complete: true,
        });
    }

    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let population_size = config.population_size.max(1);

    let mut population: Vec<Vec<String>> = (0..population_size)
        .map(|_| random_individual(start, stops, &mut rng))
        .collect();
    let mut fitness = evaluate(graph, &population);

    for _ in 0..config.generations {
        let elite_count = config.elite_count.min(population_size);
        let ranked = ranked_indices(&fitness);

        let mut next: Vec<Vec<String>> = ranked
            .iter()
            .take(elite_count)
            .map(|&index| population[index].clone())
            .collect();

        while next.len() < population_size {
            let parent_one = tournament(&fitness, config.tournament_size, &mut rng);
            let parent_two = tournament(&fitness, config.tournament_size, &mut rng);
            let mut child = crossover(&population[parent_one], &population[parent_two], &mut rng);
            mutate(&mut child, config.mutation_rate, &mut rng);
            next.push(child);
        }

        population = next;
        fitness = evaluate(graph, &population);
    }

    let best = ranked_indices(&fitness)[0];
    let route = population.swap_remove(best);
    let cost = route_cost(graph, &route);
    tracing::debug!(
        stops = stops.len(),
        generations = config.generations,
        cost,
        "genetic tour finished"
    );

    Ok(TourResult {
        route,
        cost,
        complete: true,
    })
}

fn random_individual(start: &str, stops: &[String], rng: &mut SmallRng) -> Vec<String> {
    let mut middle = stops.to_vec();
    middle.shuffle(rng);

    let mut route = Vec::with_capacity(middle.len() + 2);
    route.push(start.to_string());
    route.extend(middle);
    route.push(start.to_string());
    route
}

/// Fitness is `1 / (cost + 1)`; individuals whose tour crosses a missing
/// edge score exactly zero and stay in the population without selection
/// pressure.
fn fitness_of(graph: &DynamicGraph, route: &[String]) -> f64 {
    let cost = route_cost(graph, route);
    if cost.is_finite() { 1.0 / (cost + 1.0) } else { 0.0 }
}

fn evaluate(graph: &DynamicGraph, population: &[Vec<String>]) -> Vec<f64> {
    population
        .par_iter()
        .map(|individual| fitness_of(graph, individual))
        .collect()
}

/// Population indices sorted by descending fitness.
fn ranked_indices(fitness: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitness.len()).collect();
    order.sort_by(|&a, &b| fitness[b].partial_cmp(&fitness[a]).unwrap_or(Ordering::Equal));
    order
}

/// Tournament selection: sample entrants uniformly without replacement,
/// return the index of the fittest.
fn tournament(fitness: &[f64], size: usize, rng: &mut SmallRng) -> usize {
    let entrants = rand::seq::index::sample(rng, fitness.len(), size.min(fitness.len()));
    entrants
        .iter()
        .max_by(|&a, &b| fitness[a].partial_cmp(&fitness[b]).unwrap_or(Ordering::Equal))
        .expect("tournament over non-empty population")
}

/// Order crossover restricted to the interior, leaving the fixed start/end
/// positions untouched.
///
/// Copies parent one's `[cut_one, cut_two)` slice verbatim, then fills the
/// remaining positions left-to-right with parent two's stops that are not
/// already present, preserving parent two's relative order.
fn crossover(parent_one: &[String], parent_two: &[String], rng: &mut SmallRng) -> Vec<String> {
    let size = parent_one.len() - 2;
    if size < 2 {
        return parent_one.to_vec();
    }

    let one_middle = &parent_one[1..parent_one.len() - 1];
    let two_middle = &parent_two[1..parent_two.len() - 1];

    let cut_one = rng.gen_range(0..size);
    let cut_two = rng.gen_range(cut_one + 1..=size);

    let copied: HashSet<&String> = one_middle[cut_one..cut_two].iter().collect();
    let mut fill = two_middle.iter().filter(|stop| !copied.contains(stop));

    let mut middle: Vec<Option<&String>> = vec![None; size];
    for position in cut_one..cut_two {
        middle[position] = Some(&one_middle[position]);
    }
    for slot in middle.iter_mut() {
        if slot.is_none() {
            *slot = fill.next();
        }
    }

    let mut child = Vec::with_capacity(parent_one.len());
    child.push(parent_one[0].clone());
    child.extend(middle.into_iter().flatten().cloned());
    child.push(parent_one[0].clone());
    child
}

/// Swap two random interior positions with probability `rate`. The fixed
/// endpoints are never touched; routes with fewer than two interior stops
/// are left unchanged.
fn mutate(route: &mut [String], rate: f64, rng: &mut SmallRng) {
    if route.len() <= 3 {
        return;
    }
    if !rng.gen_bool(rate.clamp(0.0, 1.0)) {
        return;
    }

    let interior = route.len() - 2;
    let picked = rand::seq::index::sample(rng, interior, 2);
    route.swap(picked.index(0) + 1, picked.index(1) + 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn assert_interior_permutation(route: &[String], expected: &[&str]) {
        let mut interior: Vec<&str> = route[1..route.len() - 1]
            .iter()
            .map(String::as_str)
            .collect();
        interior.sort_unstable();
        let mut want = expected.to_vec();
        want.sort_unstable();
        assert_eq!(interior, want);
    }

    #[test]
    fn test_crossover_preserves_permutation() {
        let parent_one = closed(&["d", "a", "b", "c", "e", "d"]);
        let parent_two = closed(&["d", "c", "e", "a", "b", "d"]);
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..50 {
            let child = crossover(&parent_one, &parent_two, &mut rng);
            assert_eq!(child.len(), parent_one.len());
            assert_eq!(child.first().map(String::as_str), Some("d"));
            assert_eq!(child.last().map(String::as_str), Some("d"));
            assert_interior_permutation(&child, &["a", "b", "c", "e"]);
        }
    }

    #[test]
    fn test_crossover_short_interior_copies_parent() {
        let parent_one = closed(&["d", "a", "d"]);
        let parent_two = closed(&["d", "a", "d"]);
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(crossover(&parent_one, &parent_two, &mut rng), parent_one);
    }

    #[test]
    fn test_mutate_keeps_endpoints_fixed() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..50 {
            let mut route = closed(&["d", "a", "b", "c", "d"]);
            mutate(&mut route, 1.0, &mut rng);
            assert_eq!(route.first().map(String::as_str), Some("d"));
            assert_eq!(route.last().map(String::as_str), Some("d"));
            assert_interior_permutation(&route, &["a", "b", "c"]);
        }
    }

    #[test]
    fn test_mutate_skips_tiny_interiors() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut route = closed(&["d", "a", "d"]);
        mutate(&mut route, 1.0, &mut rng);
        assert_eq!(route, closed(&["d", "a", "d"]));
    }

    #[test]
    fn test_ranked_indices_orders_by_descending_fitness() {
        let order = ranked_indices(&[0.1, 0.9, 0.0, 0.5]);
        assert_eq!(order, vec![1, 3, 0, 2]);
    }
}
