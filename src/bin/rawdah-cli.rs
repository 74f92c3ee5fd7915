#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rawdah::{
    demo, export, io,
    model::{DateRange, Gender},
    planner::Planner,
    report::{SummaryRenderer, TextSummary},
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de gestion des capacités Rawdah (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de session
    #[arg(long, global = true, default_value = "session.json")]
    session: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Importer la feuille de gabarits (remplacement en bloc)
    ImportSheet {
        /// Feuille CSV : `Slot_ID,Start_Time,End_Time,Day,Gender,Capacity`
        #[arg(long)]
        sheet: String,
    },

    /// Déployer les gabarits sur une plage de dates
    Plan {
        /// Date ISO `YYYY-MM-DD`, incluse
        #[arg(long)]
        from: String,
        /// Date ISO `YYYY-MM-DD`, incluse
        #[arg(long)]
        to: String,
    },

    /// Marquer les dates de l'expansion courante comme appliquées
    Apply,

    /// Lister l'expansion courante
    List,

    /// Vérifier les conflits de genre par (date, créneau)
    Check {
        /// Export CSV des conflits (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Afficher les totaux (capacité globale, par genre, réservations)
    Summary,

    /// Exporter les capacités visibles en CSV
    ExportCapacities {
        #[arg(long, default_value = "capacities.csv")]
        out: String,
        /// Ne garder qu'une date ISO
        #[arg(long)]
        date: Option<String>,
        /// Ne garder qu'un genre (`Men` ou `Women`)
        #[arg(long)]
        gender: Option<String>,
    },

    /// Exporter toutes les réservations en CSV
    ExportBookings {
        #[arg(long, default_value = "booked_slots.csv")]
        out: String,
    },

    /// Charger des réservations depuis un export JSON externe
    LoadBookings {
        #[arg(long)]
        json: String,
    },

    /// Générer des réservations de démonstration (déterministe à graine fixée)
    DemoBookings {
        #[arg(long, default_value_t = 25)]
        count: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.session)?;
    let mut planner = Planner::from_session(storage.load_or_default()?);

    let code = match cli.cmd {
        Commands::ImportSheet { sheet } => {
            let report = io::import_templates_csv(&sheet)?;
            for warning in &report.warnings {
                eprintln!("warning: {warning}");
            }
            println!(
                "{} template(s) imported, {} warning(s)",
                report.templates.len(),
                report.warnings.len()
            );
            planner.replace_templates(report.templates);
            storage.save(planner.session())?;
            0
        }
        Commands::Plan { from, to } => {
            let from: NaiveDate = from.parse().context("--from must be YYYY-MM-DD")?;
            let to: NaiveDate = to.parse().context("--to must be YYYY-MM-DD")?;
            let range = DateRange::new(from, to);
            let overlap = planner.overlap_with_applied(range);
            let rows = planner.plan(range)?.len();
            let conflicts = planner.conflicts().len();
            storage.save(planner.session())?;
            println!("{rows} capacity row(s) over [{from}, {to}]");
            if overlap > 0 {
                println!("{overlap} day(s) of the range already applied");
            }
            if conflicts > 0 {
                // consultatif : ne bloque jamais la planification
                eprintln!("warning: {conflicts} gender conflict(s), see `check`");
            }
            0
        }
        Commands::Apply => {
            let added = planner.apply();
            storage.save(planner.session())?;
            println!("{added} date(s) newly applied");
            0
        }
        Commands::List => {
            for slot in planner.expanded() {
                let t = &slot.template;
                let id = t
                    .slot_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{} | {} | {} → {} | {} | {}",
                    slot.date, id, t.start_time, t.end_time, t.gender, t.capacity
                );
            }
            0
        }
        Commands::Check { report } => {
            let conflicts = planner.conflicts();
            if conflicts.is_empty() {
                println!("OK: no gender conflicts");
                0
            } else {
                eprintln!("Found {} conflict(s)", conflicts.len());
                if let Some(path) = report {
                    let rows: Vec<export::Row> = conflicts
                        .iter()
                        .map(|c| {
                            let mut row = export::Row::default();
                            row.push("Date", export::Field::Text(c.date.to_string()));
                            row.push("Slot_ID", c.slot_id);
                            row.push("Men_Templates", export::Field::Int(i64::from(c.men_templates)));
                            row.push(
                                "Women_Templates",
                                export::Field::Int(i64::from(c.women_templates)),
                            );
                            row
                        })
                        .collect();
                    std::fs::write(&path, export::to_csv(&rows))
                        .with_context(|| format!("writing {path}"))?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Summary => {
            let renderer = TextSummary;
            print!(
                "{}",
                renderer.render(&planner.summary(), &planner.conflicts())
            );
            0
        }
        Commands::ExportCapacities { out, date, gender } => {
            let date: Option<NaiveDate> = match date {
                Some(raw) => Some(raw.parse().context("--date must be YYYY-MM-DD")?),
                None => None,
            };
            let gender = gender.map(|raw| Gender::parse(&raw));
            let visible: Vec<_> = planner
                .expanded()
                .iter()
                .filter(|s| date.map_or(true, |d| s.date == d))
                .filter(|s| gender.as_ref().map_or(true, |g| &s.template.gender == g))
                .cloned()
                .collect();
            export::export_capacities_csv(&out, &visible)?;
            println!("{} row(s) written to {out}", visible.len());
            0
        }
        Commands::ExportBookings { out } => {
            export::export_bookings_csv(&out, planner.bookings())?;
            println!("{} booking(s) written to {out}", planner.bookings().len());
            0
        }
        Commands::LoadBookings { json } => {
            let bookings = io::load_bookings_json(&json)?;
            println!("{} booking(s) loaded", bookings.len());
            planner.set_bookings(bookings);
            storage.save(planner.session())?;
            0
        }
        Commands::DemoBookings { count, seed } => {
            let bookings = demo::demo_bookings(planner.expanded(), count, seed);
            println!("{} demo booking(s) generated (seed {seed})", bookings.len());
            planner.set_bookings(bookings);
            storage.save(planner.session())?;
            0
        }
    };

    std::process::exit(code);
}
