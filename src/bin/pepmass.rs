use std::fmt::Write;

use blockchem::{CysteineTreatment, Massive, Modifications, Peptide, Sequence};
use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, IntoDiagnostic, Result, miette};
use rustyline::DefaultEditor;

const USAGE: &str = "modifiers: +amide, +acid, +ox, +label=<codes>";

fn main() -> Result<()> {
    let mut rl = DefaultEditor::new().into_diagnostic()?;
    println!("Enter a peptide sequence, optionally followed by {USAGE}");
    while let Ok(line) = rl.readline("Peptide: ") {
        if line.trim().is_empty() {
            continue;
        }
        rl.add_history_entry(&line).into_diagnostic()?;
        match peptide_info(&line) {
            Ok(info) => print!("{info}"),
            Err(report) => render_error(&*report),
        }
    }
    Ok(())
}

fn peptide_info(line: &str) -> Result<String> {
    let mut words = line.split_whitespace();
    // NOTE: Blank lines are skipped before getting here
    let sequence = words.next().unwrap_or_default();
    let modifications = words.try_fold(Modifications::new(), apply_modifier)?;

    let peptide = Peptide::new(Sequence::parse(sequence)?, &modifications);
    let composition = peptide.composition();

    let mut buf = String::new();
    writeln!(buf, "Formula: {composition}").into_diagnostic()?;
    for (element, count) in composition.counts() {
        writeln!(buf, "{}: {count}", element.name()).into_diagnostic()?;
    }

    let labeled = peptide.labeled_atoms();
    if !labeled.is_empty() {
        writeln!(
            buf,
            "Labeled: {} [13C], {} [15N]",
            labeled.carbon_13(),
            labeled.nitrogen_15()
        )
        .into_diagnostic()?;
    }
    if let Some(treatment) = peptide.cysteine_treatment() {
        writeln!(buf, "Cysteine treatment: {treatment}").into_diagnostic()?;
    }
    if let Some(oxidized) = peptide.methionine_oxidized() {
        let state = if oxidized { "oxidized" } else { "reduced" };
        writeln!(buf, "Methionines: {state}").into_diagnostic()?;
    }

    let mass = peptide.monoisotopic_mass();
    writeln!(buf, "Monoisotopic Mass: {mass:.9}").into_diagnostic()?;
    writeln!(buf).into_diagnostic()?;

    Ok(buf)
}

fn apply_modifier(modifications: Modifications, modifier: &str) -> Result<Modifications> {
    let modifications = match modifier {
        "+amide" => modifications.with_cysteine_treatment(CysteineTreatment::Amide),
        "+acid" => modifications.with_cysteine_treatment(CysteineTreatment::Acid),
        "+ox" => modifications.with_methionine_oxidized(true),
        _ => {
            let Some(codes) = modifier.strip_prefix("+label=") else {
                return Err(miette!(help = USAGE, "unknown modifier {modifier:?}"));
            };
            let residues = Sequence::parse(codes)?;
            modifications.with_isotope_labeled(residues.iter())
        }
    };
    Ok(modifications)
}

fn render_error(diagnostic: &dyn Diagnostic) {
    let mut buf = String::new();
    if GraphicalReportHandler::new_themed(GraphicalTheme::unicode())
        .render_report(&mut buf, diagnostic)
        .is_ok()
    {
        println!("{buf}");
    }
}
