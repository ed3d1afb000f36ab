use std::fs;
use std::path::Path;

use crate::analyzer::StructuralAnalyzer;
use crate::baseline::TemplateBaseline;
use crate::cli::{CheckArgs, Cli};
use crate::codebase::{self, Codebase};
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult, Settings};
use crate::output::{
    CsvReport, CsvWriter, GradeProgress, GradedCodebase, JsonFormatter, OutputFormatter,
    TextFormatter,
};
use crate::pipeline::ValidationPipeline;
use crate::scanner::SourceSelection;
use crate::syntax::JavaSyntax;
use crate::validator::{ExternalEngine, Validator};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED, Result, StyleGradeError};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates and scores every selected codebase, one at a time.
///
/// # Errors
/// Returns an error on invalid configuration, an unreadable template, a report that
/// cannot be written, or a systemic validator failure.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let loaded = load_config(args.config.as_deref())?;
    let mut settings = Settings::resolve(&loaded.config, &loaded.base_dir);

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut settings, args);

    // 3. Select codebases
    let codebases = select_codebases(args, &settings)?;
    if codebases.is_empty() {
        if !cli.quiet {
            let root = settings.codebases_root.as_ref().unwrap_or(&settings.base_dir);
            eprintln!("No codebases found under {}", root.display());
        }
        return Ok(EXIT_SUCCESS);
    }

    // 4. Assemble the pipeline
    let mut pipeline = build_pipeline(&settings)?;
    if let Some(baseline) = load_baseline(&settings)? {
        pipeline = pipeline.with_baseline(baseline);
    }
    pipeline.setup(&settings)?;
    tracing::info!(
        validators = ?pipeline.validator_names(),
        codebases = codebases.len(),
        "starting run"
    );

    // 5. Validate sequentially, reporting as each codebase completes
    let formatter = TextFormatter::with_verbose(cli.color.into(), &settings, cli.verbose);
    let mut csv = settings
        .csv_report
        .as_deref()
        .map(|path| CsvWriter::create(path, CsvReport::new(&settings)))
        .transpose()?;
    let total = u64::try_from(codebases.len()).unwrap_or(u64::MAX);
    let progress = GradeProgress::new(total, cli.quiet);

    let mut graded = Vec::with_capacity(codebases.len());
    for codebase in &codebases {
        progress.start(&codebase.name);
        let result = pipeline.validate(codebase)?;
        if let Some(message) = result.failure_message() {
            progress.println(&format!("Warning: {message}"));
        }

        let entry = GradedCodebase::new(result, &settings);
        if let Some(writer) = csv.as_mut() {
            writer.write(&entry)?;
        }
        if !cli.quiet {
            let text = formatter.format(std::slice::from_ref(&entry))?;
            progress.suspend(|| print!("{text}"));
        }
        progress.inc();
        graded.push(entry);
    }
    progress.finish();

    if !cli.quiet && graded.len() > 1 {
        println!("{}", formatter.summary(&graded));
    }

    // 6. Write the full report
    if let Some(path) = &settings.json_report {
        let json = JsonFormatter::new(&settings).format(&graded)?;
        write_report(path, &json)?;
    }

    // 7. Determine exit code
    if graded.iter().any(|g| g.result.is_fatal()) {
        Ok(EXIT_VALIDATION_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>) -> Result<LoadResult> {
    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(settings: &mut Settings, args: &CheckArgs) {
    if let Some(csv) = &args.csv {
        settings.csv_report = Some(csv.clone());
    }
    if let Some(json) = &args.json {
        settings.json_report = Some(json.clone());
    }
    if args.no_template {
        settings.ignore_template_violations = false;
    }
}

/// Explicit paths, else every codebase under the root, else the base directory itself.
fn select_codebases(args: &CheckArgs, settings: &Settings) -> Result<Vec<Codebase>> {
    if args.paths.is_empty() {
        return match &settings.codebases_root {
            Some(root) => codebase::discover(
                root,
                settings.template.as_deref(),
                settings.organization.as_deref(),
            ),
            None => Ok(vec![Codebase::from_dir(
                &settings.base_dir,
                settings.organization.clone(),
            )]),
        };
    }

    args.paths
        .iter()
        .map(|path| {
            if path.is_dir() {
                Ok(Codebase::from_dir(path, settings.organization.clone()))
            } else {
                Err(StyleGradeError::Config(format!(
                    "Codebase is not a directory: {}",
                    path.display()
                )))
            }
        })
        .collect()
}

fn build_pipeline(settings: &Settings) -> Result<ValidationPipeline> {
    let mut validators: Vec<Box<dyn Validator>> = Vec::new();
    if StructuralAnalyzer::<JavaSyntax>::is_needed(settings) {
        validators.push(Box::new(StructuralAnalyzer::new(JavaSyntax::new()?)));
    }
    for engine in &settings.engines {
        validators.push(Box::new(ExternalEngine::new(engine.clone())));
    }
    Ok(ValidationPipeline::new(validators))
}

/// The template baseline, when template violations are ignored.
fn load_baseline(settings: &Settings) -> Result<Option<TemplateBaseline>> {
    if !settings.ignore_template_violations {
        return Ok(None);
    }
    let Some(template) = &settings.template else {
        tracing::warn!("template.ignore_violations is set but no template is configured");
        return Ok(None);
    };
    let selection = SourceSelection::from_settings(settings)?;
    TemplateBaseline::build(&Codebase::from_dir(template, None), &selection).map(Some)
}

fn write_report(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| StyleGradeError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
