use crate::support::units::UnitSystem;

use super::ReportPayload;

/// Plain-text summary of a report payload.
///
/// Values are shown in `units`. When the schematic was sampled, the summary
/// states both the true and the rendered tube counts.
#[must_use]
pub fn render_summary(payload: &ReportPayload, units: UnitSystem) -> String {
    let labels = units.labels();
    let inputs = &payload.inputs;
    let results = &payload.results;
    let (nx, ny) = results.array_dims;

    let mut lines = vec![
        format!(
            "{} array of {} tubes, {} in {}",
            inputs.shape, inputs.material, inputs.config, inputs.fluid
        ),
        format!("Array: {nx} × {ny} tubes ({} total)", u64::from(nx) * u64::from(ny)),
    ];

    if payload.schematic_truncated {
        let (rx, ry) = payload.schematic_dims;
        lines.push(format!("Schematic shows a {rx} × {ry} sample"));
    }

    let section = labels.cross_section;
    lines.extend([
        format!(
            "Tube: {:.3} × {:.3} {section}, wall {:.3} {section}",
            units.cross_section(results.width_in),
            units.cross_section(results.height_in),
            units.cross_section(results.wall_in),
        ),
        format!(
            "Length: {:.2} {}",
            units.length(results.length_ft),
            labels.length
        ),
        format!(
            "Velocity: {:.2} {}",
            units.velocity(results.velocity_fts),
            labels.velocity
        ),
        format!(
            "Pressure drop: {:.4} {} (limit {:.4}, {})",
            units.pressure(results.pressure_drop_psi),
            labels.pressure,
            units.pressure(inputs.pressure_drop_limit_psi),
            verdict(Some(payload.compliance.pressure_drop_ok)),
        ),
        format!(
            "Temperature range: {:.1} to {:.1} {}",
            units.temperature(inputs.temperature_min_f),
            units.temperature(inputs.temperature_max_f),
            labels.temperature
        ),
        format!(
            "Weight: {:.2} {}",
            units.weight(results.total_weight_lbm),
            labels.weight
        ),
        format!("Cutoff frequency: {:.3} GHz", results.cutoff_ghz),
    ]);

    let attenuation = match payload.compliance.attenuation_db {
        Some(db) => format!("{db:.1} dB"),
        None => "not sampled".to_owned(),
    };
    lines.push(format!(
        "Attenuation at 1 GHz: {attenuation} ({})",
        verdict(payload.compliance.attenuation_ok)
    ));

    lines.join("\n")
}

fn verdict(ok: Option<bool>) -> &'static str {
    match ok {
        Some(true) => "pass",
        Some(false) => "fail",
        None => "unchecked",
    }
}
