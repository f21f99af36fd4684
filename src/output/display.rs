//! Display functions for command results

use super::formatters::{create_progress_bar, format_ladder, step_change};
use crate::commands::{BenchmarkResult, NeighborsResult, SolveResult, StatsResult};
use colored::Colorize;

/// Print the result of solving a ladder
///
/// Without `verbose` only the slash-joined ladder is printed, so the output
/// can be consumed by scripts.
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let Some(ladder) = &result.ladder else {
        eprintln!(
            "{}",
            format!("No ladder from {} to {}", result.source, result.target)
                .red()
                .bold()
        );
        if verbose {
            if let Some(explored) = result.explored {
                eprintln!("  Explored:   {explored} words");
            }
            if !result.target_in_dictionary {
                eprintln!("  Note:       '{}' is not in the dictionary", result.target);
            }
        }
        return;
    };

    if !verbose {
        println!("{}", format_ladder(ladder, "/"));
        return;
    }

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.source.bright_yellow().bold(),
        result.target.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let words = ladder.words();
    println!("\n  0. {}", words[0].bright_white().bold());
    for (i, pair) in words.windows(2).enumerate() {
        let line = step_change(&pair[0], &pair[1]).map_or_else(
            || pair[1].clone(),
            |change| {
                format!(
                    "{}{}{}",
                    change.prefix,
                    change.to.to_string().green().bold(),
                    change.suffix
                )
            },
        );
        println!("  {}. {line}", i + 1);
    }

    println!();
    println!(
        "{}",
        format!("✅ {} steps: {ladder}", ladder.steps()).green().bold()
    );
    if !result.source_in_dictionary {
        println!("  Note:       '{}' is not in the dictionary", result.source);
    }
    println!(
        "  Time taken: {:.3}ms",
        result.duration.as_secs_f64() * 1000.0
    );
}

/// Print the neighbors of a word
pub fn print_neighbors_result(result: &NeighborsResult) {
    let membership = if result.in_dictionary {
        "in dictionary".green()
    } else {
        "not in dictionary".yellow()
    };
    println!(
        "{} ({membership}): {} neighbors",
        result.word.bright_yellow().bold(),
        result.neighbors.len()
    );
    for neighbor in &result.neighbors {
        println!("  • {neighbor}");
    }
}

/// Print dictionary graph statistics
pub fn print_stats_result(result: &StatsResult) {
    let stats = &result.stats;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD GRAPH:".bright_cyan().bold(),
        format!("{}-symbol words", result.word_len)
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Shape:".bright_cyan().bold());
    println!("   Words:             {}", stats.words);
    println!("   Edges:             {}", stats.edges);
    println!("   Average degree:    {:.2}", stats.average_degree());
    println!(
        "   Busiest word:      {} ({} neighbors)",
        stats.max_degree.0.bright_white().bold(),
        stats.max_degree.1
    );
    println!("   Isolated words:    {}", stats.isolated);

    println!("\n🔗 {}", "Connectivity:".bright_cyan().bold());
    println!("   Components:        {}", stats.components);
    let share = if stats.words > 0 {
        stats.largest_component as f64 / stats.words as f64 * 100.0
    } else {
        0.0
    };
    println!(
        "   Largest component: [{}] {} ({share:.1}%)",
        create_progress_bar(share, 100.0, 30).green(),
        stats.largest_component
    );
    println!("   Time taken:        {:.3}s", result.duration.as_secs_f64());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.total_pairs);
    println!(
        "   Ladders found:    {}",
        format!("{}", result.found).green()
    );
    println!(
        "   Disconnected:     {}",
        format!("{}", result.not_found).yellow()
    );
    println!(
        "   Average steps:    {}",
        format!("{:.2}", result.average_steps).bright_yellow().bold()
    );
    println!("   Longest:          {}", result.max_steps);
    if let Some(ladder) = &result.longest {
        println!("                     {ladder}");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.searches_per_second);

    if result.found == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for steps in 0..=result.max_steps {
        if let Some(&count) = result.distribution.get(&steps) {
            let pct = (count as f64 / result.found as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {steps:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
