//! Application entry point and dispatch.

use anyhow::Result;

use polyfft_cli::output::write_to_file;
use polyfft_cli::presenter::CLIResultPresenter;
use polyfft_cli::Report;
use polyfft_core::constants::exit_codes;
use polyfft_core::registry::DefaultFactory;
use polyfft_core::trim_to_product;
use polyfft_orchestration::interfaces::ResultPresenter;
use polyfft_orchestration::multiplier_selection::get_multipliers_to_run;
use polyfft_orchestration::orchestrator::{analyze_comparison_results, execute_multiplications};

use crate::config::{AppConfig, OutputFormat};
use crate::errors::handle_error;

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        polyfft_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    config.validate()?;
    let a = config.coefficients_a()?;
    let b = config.coefficients_b()?;
    tracing::debug!(len_a = a.len(), len_b = b.len(), algo = %config.algo, "inputs parsed");

    let factory = DefaultFactory::new();
    let multipliers = get_multipliers_to_run(&config.algo, &factory)?;
    let results = execute_multiplications(&multipliers, &a, &b);

    let mut code = exit_codes::SUCCESS;

    // Cross-check when more than one multiplier ran
    if results.len() > 1 {
        let product_len = (a.len() + b.len()).saturating_sub(1);
        if let Err(e) = analyze_comparison_results(&results, product_len, config.tolerance) {
            eprintln!("Warning: {e}");
            code = handle_error(&e);
        }
    }

    let report = Report::new(&a, &b, &results, config.trim);

    match config.format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => {
            let presenter =
                CLIResultPresenter::new(config.verbose, config.quiet, config.precision);
            for result in &results {
                match &result.outcome {
                    Ok(coeffs) => {
                        let shown = if config.trim {
                            trim_to_product(coeffs, a.len(), b.len())
                        } else {
                            coeffs.as_slice()
                        };
                        presenter.present_result(&result.algorithm, shown, result.duration);
                    }
                    Err(e) => presenter.present_error(&format!("{}: {e}", result.algorithm)),
                }
            }
            if results.len() > 1 {
                presenter.present_comparison(&results);
            }
        }
    }

    if let Some(path) = &config.output {
        write_to_file(path, &report.to_json()?)?;
    }

    if code == exit_codes::SUCCESS {
        if let Some(err) = results.iter().find_map(|r| r.outcome.as_ref().err()) {
            code = handle_error(err);
        }
    }

    Ok(code)
}
