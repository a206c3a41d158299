use clap::Args;
use officiality::error::AppError;
use officiality::questionnaire::{
    ClassificationResponse, Classify, DocumentState, FlatDocumentState, Officiality, Schema,
};
use serde_json::{json, Value};
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Questionnaire schema of the snapshot (flat or nested)
    #[arg(long, value_parser = crate::infra::parse_schema, default_value = "nested")]
    pub(crate) schema: Schema,
    /// JSON snapshot to classify. Reads stdin when omitted.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Only run scenarios for one schema
    #[arg(long, value_parser = crate::infra::parse_schema)]
    pub(crate) schema: Option<Schema>,
    /// Print each verdict as JSON instead of a one-line summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let ClassifyArgs { schema, input } = args;

    let raw = match input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let officiality = classify_snapshot(schema, serde_json::from_str(&raw)?)?;
    let rendered = serde_json::to_string_pretty(&ClassificationResponse { officiality })?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { schema, json } = args;

    println!("Official document classifier demo");
    for scenario in scenarios() {
        if schema.is_some_and(|only| only != scenario.schema) {
            continue;
        }

        let outcome = classify_snapshot(scenario.schema, scenario.snapshot)?;
        println!("\n[{}] {}", scenario.schema.label(), scenario.label);
        if json {
            let rendered =
                serde_json::to_string_pretty(&ClassificationResponse { officiality: outcome })?;
            println!("{rendered}");
        } else {
            println!("  -> {}", render_outcome(outcome.as_ref()));
        }
    }

    Ok(())
}

fn classify_snapshot(schema: Schema, snapshot: Value) -> Result<Option<Officiality>, AppError> {
    let outcome = match schema {
        Schema::Flat => serde_json::from_value::<FlatDocumentState>(snapshot)?.classify(),
        Schema::Nested => serde_json::from_value::<DocumentState>(snapshot)?.classify(),
    };
    Ok(outcome)
}

fn render_outcome(outcome: Option<&Officiality>) -> String {
    match outcome {
        Some(officiality) => officiality.summary(),
        None => "more answers needed".to_string(),
    }
}

struct Scenario {
    label: &'static str,
    schema: Schema,
    snapshot: Value,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            label: "Ledger ready for notation",
            schema: Schema::Flat,
            snapshot: json!({
                "held_by_authority": true,
                "doc_type_choice": "ledger",
                "ready_for_notation": true,
            }),
        },
        Scenario {
            label: "Riksdag minutes",
            schema: Schema::Flat,
            snapshot: json!({
                "held_by_authority": true,
                "doc_type_choice": "memoranda",
                "riksdag_record": true,
            }),
        },
        Scenario {
            label: "Dispatched letter never held by an authority",
            schema: Schema::Flat,
            snapshot: json!({
                "held_by_authority": false,
                "doc_type_choice": "other",
                "dispatched": true,
            }),
        },
        Scenario {
            label: "Draft in an unsettled matter",
            schema: Schema::Flat,
            snapshot: json!({
                "held_by_authority": true,
                "doc_type_choice": "other",
                "dispatched": false,
                "specific_matter": true,
                "settled": false,
            }),
        },
        Scenario {
            label: "Backup copy kept for another body",
            schema: Schema::Nested,
            snapshot: json!({
                "held_by_authority": true,
                "backup_etc": true,
            }),
        },
        Scenario {
            label: "Letter addressed personally about a pending case",
            schema: Schema::Nested,
            snapshot: json!({
                "held_by_authority": true,
                "backup_etc": false,
                "transferred_within_auth": false,
                "competition": false,
                "has_arrived": true,
                "paths": { "arrived": { "directed_to_official": true, "refers_to_case": true } },
            }),
        },
        Scenario {
            label: "Archived riksdag memorandum",
            schema: Schema::Nested,
            snapshot: json!({
                "held_by_authority": true,
                "backup_etc": false,
                "transferred_within_auth": false,
                "competition": false,
                "has_arrived": false,
                "paths": { "not_arrived": {
                    "doc_type": "record",
                    "riksdag_record": true,
                    "other_working_material": false,
                    "memoranda": true,
                    "document_archived": true,
                } },
            }),
        },
        Scenario {
            label: "Court ruling awaiting announcement",
            schema: Schema::Nested,
            snapshot: json!({
                "held_by_authority": true,
                "backup_etc": false,
                "transferred_within_auth": false,
                "competition": false,
                "has_arrived": false,
                "paths": { "not_arrived": { "doc_type": "court-ruling" } },
            }),
        },
    ]
}
