//! Text rendering of reports and tables

use prc_core::config::Dataset;
use prc_core::{
    Category, ConfrontationDomain, EngagementReport, MultiplierKey, RatioResult, ScoreBreakdown, Side,
};
use std::fmt::Write;

/// Format a number with precision falling as magnitude grows
///
/// `≥ 10` → no decimals, `≥ 1` → two, otherwise three. Non-finite → "–".
pub fn format_number(x: f64) -> String {
    if !x.is_finite() {
        return "–".to_string();
    }
    if x >= 10.0 {
        format!("{:.0}", x)
    } else if x >= 1.0 {
        format!("{:.2}", x)
    } else {
        format!("{:.3}", x)
    }
}

pub fn format_ratio(ratio: RatioResult) -> String {
    match ratio {
        RatioResult::Finite(value) => format!("{} : 1", format_number(value)),
        RatioResult::Infinite => "∞ : 1".to_string(),
        RatioResult::Undefined => "–".to_string(),
    }
}

fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// Helper to print a section header
fn separator(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}", "=".repeat(60));
    let _ = writeln!(out, "  {}", title);
    let _ = writeln!(out, "{}", "=".repeat(60));
}

fn render_breakdown(out: &mut String, breakdown: &ScoreBreakdown) {
    let _ = writeln!(out, "  {}:", breakdown.side.name());
    for element in &breakdown.elements {
        let name = if element.label.is_empty() {
            element.key.clone()
        } else {
            format!("{} ({})", element.label, element.key)
        };
        let _ = writeln!(out, "    {:<40} {:>8}", name, format_number(element.value));
    }
    let _ = writeln!(out, "    Elements total:       {}", format_number(breakdown.elements_total));
    let _ = writeln!(out, "    Support fire total:   {:.2}", breakdown.support_fire_total);
    let _ = writeln!(out, "    Multiplier average:   {:.3}", breakdown.multiplier_average);
    let _ = writeln!(out, "    Combat power:         {}", format_number(breakdown.score));
}

/// Human-readable summary of an evaluated engagement
pub fn render_report(report: &EngagementReport) -> String {
    let mut out = String::new();

    separator(&mut out, "COMBAT POWER");
    for side in Side::all() {
        render_breakdown(&mut out, &report.breakdowns[*side]);
    }

    separator(&mut out, "CONFRONTATIONS");
    for outcome in &report.confrontations {
        let _ = writeln!(
            out,
            "  {:<20} {} vs {}  →  {} / {}",
            outcome.domain.name(),
            format_number(outcome.sums.friendly),
            format_number(outcome.sums.enemy),
            outcome.statuses.friendly,
            outcome.statuses.enemy,
        );
    }

    separator(&mut out, "RATIO");
    let _ = writeln!(out, "  Ratio:    {}", format_ratio(report.ratio));
    let _ = writeln!(out, "  Reading:  {}", report.reading);
    let required = report
        .requirement
        .required
        .map(|r| r.to_string())
        .unwrap_or_else(|| "–".to_string());
    let _ = writeln!(out, "  Mission:  {} (minimum {})", report.requirement.mission, required);
    let verdict = if report.requirement.meets { "MEETS" } else { "DOES NOT MEET" };
    let _ = writeln!(out, "  Status:   {}", verdict);

    let projection = &report.projection;
    separator(&mut out, &format!("DEGRADATION AFTER {}h", projection.hours));
    let _ = writeln!(out, "  Profile:  {} ({} attacking)", report.profile, report.attacker.name());
    let _ = writeln!(
        out,
        "  Reduction friendly / enemy:  {} / {}",
        percent(projection.effective_reduction_friendly),
        percent(projection.effective_reduction_enemy),
    );
    let _ = writeln!(
        out,
        "  Projected combat power:      {} / {}",
        format_number(projection.projected_friendly),
        format_number(projection.projected_enemy),
    );
    let _ = writeln!(out, "  Projected ratio:             {}", format_ratio(projection.projected_ratio));
    let _ = writeln!(out, "  Projected reading:           {}", report.projected_reading());

    out
}

/// Listing of every option a scenario may name
pub fn render_tables(dataset: &Dataset) -> String {
    let mut out = String::new();

    for side in Side::all() {
        separator(&mut out, &format!("ELEMENTS - {}", side.name().to_uppercase()));
        for category in Category::all() {
            let _ = writeln!(out, "  {}:", category.name());
            for name in dataset.coefficients.options(*category, *side) {
                let pair = dataset.coefficients.pair(*category, *side, name);
                let _ = writeln!(out, "    {:<32} {:>5} / {:<5}", name, pair.offensive, pair.defensive);
            }
        }
        let _ = writeln!(out, "  Support fire:");
        for name in dataset.coefficients.support_fire_options(*side) {
            let value = dataset.coefficients.support_fire_coefficient(*side, name);
            let _ = writeln!(out, "    {:<32} {:>5}", name, value);
        }
        for domain in ConfrontationDomain::all() {
            let _ = writeln!(out, "  {}:", domain.name());
            for name in dataset.confrontation.options(*domain, *side) {
                let weight = dataset.confrontation.weight(*domain, *side, name);
                let _ = writeln!(out, "    {:<32} {:>5}", name, weight);
            }
        }
    }

    separator(&mut out, "MULTIPLIERS");
    for factor in dataset.multipliers.factors() {
        let derived = if factor.key.derived_from().is_some() {
            " (from confrontation)"
        } else if factor.key == MultiplierKey::EngineeringStatus {
            " (enemy mirrors friendly)"
        } else {
            ""
        };
        let _ = writeln!(out, "  {} [{}]{}", factor.name, factor.key.key(), derived);
        for option in &factor.options {
            let marker = if option.label == factor.default { "*" } else { " " };
            let _ = writeln!(out, "   {} {:<20} {}", marker, option.label, option.value);
        }
    }

    separator(&mut out, "MISSIONS");
    for name in dataset.missions.names() {
        if let Some(required) = dataset.missions.get(name) {
            let _ = writeln!(out, "  {:<24} {}", name, required);
        }
    }

    separator(&mut out, "DEGRADATION PROFILES (24h reference)");
    for profile in dataset.degradation.profiles() {
        let _ = writeln!(
            out,
            "  {:<28} attacker {} / defender {}  {}",
            profile.name,
            percent(profile.attacker),
            percent(profile.defender),
            profile.note,
        );
    }

    out
}
