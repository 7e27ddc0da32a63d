use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use tracing::Level;

use crate::chemistry::{ACIDS, AcidProfile, find_acid};
use crate::display::{
    DilutionDisplay, FormDisplay, PhDisplay, recalc_dilution, recalc_form, recalc_ph,
};
use crate::error::AppError;
use crate::models::{DilutionForm, DilutionResult, Fidelity, FormDocument, PhForm, PhResult};
use crate::solution::{compute_dilution, compute_ph};

#[derive(Parser, Debug)]
#[command(author, version, about = "Weak-acid pH and dilution calculator with optional JSON output", long_about = None)]
pub struct Args {
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true, help = "Debug logging on stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List supported acids
    Acids,
    /// pH of a solution from its mass-percent
    Ph {
        #[arg(long, default_value = "citric", help = "Acid key (see 'acids')")]
        acid: String,
        #[arg(long, allow_hyphen_values = true, help = "Mass-percent, e.g. 5 or 2,5")]
        percent: String,
        #[arg(long, help = "Solve the equilibrium exactly instead of sqrt(Ka*C)")]
        exact: bool,
    },
    /// Water to add to reach a lower concentration
    Dilute {
        #[arg(long, allow_hyphen_values = true, help = "Current volume (or mass)")]
        amount: String,
        #[arg(long, allow_hyphen_values = true, help = "Current concentration")]
        current: String,
        #[arg(long, allow_hyphen_values = true, help = "Target concentration")]
        target: String,
    },
    /// Evaluate a JSON form document with 'ph' and 'dilution' sections
    Form {
        #[arg(long, value_name = "FILE", help = "JSON form document; '-' reads from stdin")]
        input: String,
    },
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum Output {
    Acids(Vec<AcidProfile>),
    Ph {
        acid: &'static str,
        fidelity: Fidelity,
        result: PhResult,
        display: PhDisplay,
    },
    Dilution {
        result: DilutionResult,
        display: DilutionDisplay,
    },
    Form(FormDisplay),
}

pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn read_form_document(path: &str) -> Result<FormDocument, AppError> {
    let s = if path == "-" {
        let mut s = String::new();
        io::stdin()
            .read_to_string(&mut s)
            .map_err(|source| AppError::ReadStdin { source })?;
        s
    } else {
        fs::read_to_string(path).map_err(|source| AppError::ReadFile {
            path: path.to_string(),
            source,
        })?
    };
    serde_json::from_str(&s).map_err(|source| AppError::ParseFormJson { source })
}

pub fn execute(args: &Args) -> Result<Output, AppError> {
    match &args.command {
        Command::Acids => Ok(Output::Acids(ACIDS.to_vec())),
        Command::Ph {
            acid,
            percent,
            exact,
        } => {
            let profile = find_acid(acid).ok_or_else(|| AppError::UnknownAcid(acid.clone()))?;
            let fidelity = Fidelity::from(*exact);
            let result = compute_ph(percent, profile, fidelity);
            let display = recalc_ph(&PhForm {
                acid: profile.id.to_string(),
                percent: percent.clone(),
                exact: *exact,
            });
            Ok(Output::Ph {
                acid: profile.id,
                fidelity,
                result,
                display,
            })
        }
        Command::Dilute {
            amount,
            current,
            target,
        } => {
            let result = compute_dilution(amount, current, target);
            let display = recalc_dilution(&DilutionForm {
                amount: amount.clone(),
                current: current.clone(),
                target: target.clone(),
            });
            Ok(Output::Dilution { result, display })
        }
        Command::Form { input } => {
            let doc = read_form_document(input)?;
            Ok(Output::Form(recalc_form(&doc)))
        }
    }
}

fn print_note(note: &str) {
    if !note.is_empty() {
        println!("Note: {}", note);
    }
}

pub fn print_output(out: &Output, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
        return Ok(());
    }

    match out {
        Output::Acids(acids) => {
            for a in acids {
                println!(
                    "{:<10} {:<10} Ka={:<9e} M={:<7} g/mol rho={} g/mL",
                    a.id, a.name, a.ka, a.molar_mass, a.density
                );
            }
        }
        Output::Ph { display, .. } => {
            println!("pH: {}", display.ph);
            print_note(&display.note);
        }
        Output::Dilution { display, .. } => {
            println!("Water to add: {}", display.water);
            print_note(&display.note);
        }
        Output::Form(form) => {
            println!("pH: {}", form.ph.ph);
            print_note(&form.ph.note);
            println!("Water to add: {}", form.dilution.water);
            print_note(&form.dilution.note);
        }
    }

    Ok(())
}
