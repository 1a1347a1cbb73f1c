use crate::infra::{bootstrap, parse_weights, warn_on_unbalanced_weights};
use crate::report::{self, OutputFormat};
use clap::Args;
use std::io::Write;
use supplier_radar::error::AppError;
use supplier_radar::workflows::comparison::{MaterialShare, SupplierRecord, WeightSet};

const DEMO_WEIGHTS: WeightSet = WeightSet::new(40.0, 20.0, 20.0, 10.0, 10.0);

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Weights as impact,traceability,price,lead_time,moq. Defaults to 40,20,20,10,10.
    #[arg(long, value_parser = parse_weights)]
    pub(crate) weights: Option<WeightSet>,
    /// Restrict the demo to one category
    #[arg(long)]
    pub(crate) category: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        weights,
        category,
        format,
    } = args;

    let service = bootstrap()?;
    let weights = weights.unwrap_or(DEMO_WEIGHTS);
    warn_on_unbalanced_weights(&weights);
    let suppliers = sample_suppliers();

    let recommendations = match category.as_deref() {
        Some(requested) => service
            .compare_category(&suppliers, requested, &weights)
            .into_iter()
            .collect(),
        None => service.compare_all(&suppliers, &weights),
    };

    let mut out = std::io::stdout().lock();
    if format == OutputFormat::Text {
        writeln!(out, "Supplier comparison demo ({} suppliers)\n", suppliers.len())?;
    }
    if recommendations.is_empty() && format == OutputFormat::Text {
        report::render_no_suppliers(&mut out, category.as_deref())?;
    } else {
        report::render_recommendations(&mut out, &recommendations, format)?;
    }
    out.flush()?;
    Ok(())
}

struct Sample {
    name: &'static str,
    fabric: &'static str,
    materials: &'static [(&'static str, f64)],
    impact: f64,
    price: f64,
    lead_time: f64,
    moq: f64,
    origins: [&'static str; 4],
    certifications: &'static [&'static str],
}

const SAMPLES: [Sample; 7] = [
    Sample {
        name: "Filature du Nord",
        fabric: "Oxford 140",
        materials: &[("ei-coton", 1.0)],
        impact: 412.0,
        price: 9.8,
        lead_time: 6.0,
        moq: 500.0,
        origins: ["India", "Portugal", "Portugal", "France"],
        certifications: &["GOTS", "OEKO-TEX"],
    },
    Sample {
        name: "Tissage Atlantique",
        fabric: "Popeline",
        materials: &[("ei-coton", 0.8), ("ei-pet", 0.2)],
        impact: 655.0,
        price: 6.4,
        lead_time: 4.0,
        moq: 1000.0,
        origins: ["Pays inconnu", "Turkey", "Turkey", "---"],
        certifications: &["OEKO-TEX"],
    },
    Sample {
        name: "Coton Sud",
        fabric: "Twill",
        materials: &[("ei-coton-organic", 1.0)],
        impact: 520.0,
        price: 11.2,
        lead_time: 10.0,
        moq: 300.0,
        origins: ["Egypt", "Italy", "Italy", "Italy"],
        certifications: &[],
    },
    Sample {
        name: "Lainière des Vosges",
        fabric: "Flanelle",
        materials: &[("ei-laine-par-defaut", 1.0)],
        impact: 1480.0,
        price: 24.0,
        lead_time: 8.0,
        moq: 200.0,
        origins: ["France", "France", "France", "France"],
        certifications: &["RWS"],
    },
    Sample {
        name: "Woolmark Mills",
        fabric: "Gabardine",
        materials: &[("ei-laine-par-defaut", 0.9), ("ei-pa", 0.1)],
        impact: 1210.0,
        price: 19.5,
        lead_time: 12.0,
        moq: 600.0,
        origins: ["Australia", "China", "Pays inconnu", "China"],
        certifications: &[],
    },
    Sample {
        name: "Mélanges Lyonnais",
        fabric: "Crêpe",
        materials: &[("ei-viscose", 0.5), ("ei-soie", 0.5)],
        impact: 880.0,
        price: 15.0,
        lead_time: 7.0,
        moq: 250.0,
        origins: ["China", "France", "France", "France"],
        certifications: &[],
    },
    Sample {
        name: "Polytex",
        fabric: "Ripstop",
        materials: &[("ei-polyester-recycle", 1.0)],
        impact: 310.0,
        price: 4.9,
        lead_time: 3.0,
        moq: 2000.0,
        origins: ["Taiwan", "Vietnam", "Vietnam", "Vietnam"],
        certifications: &["GRS"],
    },
];

fn sample_suppliers() -> Vec<SupplierRecord> {
    SAMPLES
        .iter()
        .map(|sample| {
            let [spinning, fabric, dyeing, making] =
                sample.origins.map(|country| Some(country.to_string()));
            SupplierRecord {
                fabric_label: Some(sample.fabric.to_string()),
                material_composition: sample
                    .materials
                    .iter()
                    .map(|(id, share)| MaterialShare::new(*id, *share))
                    .collect(),
                environmental_impact_score: Some(sample.impact),
                price_per_unit: Some(sample.price),
                lead_time_weeks: Some(sample.lead_time),
                minimum_order_quantity: Some(sample.moq),
                spinning_country: spinning,
                fabric_country: fabric,
                dyeing_country: dyeing,
                making_country: making,
                certifications: sample
                    .certifications
                    .iter()
                    .map(|name| name.to_string())
                    .collect(),
                ..SupplierRecord::new(sample.name)
            }
        })
        .collect()
}
