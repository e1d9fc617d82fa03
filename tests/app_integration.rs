use irrcalc::AppCommand;
use irrcalc::cli::calc::CalcOptions;
use irrcalc::core::RawInput;
use irrcalc::core::config::AppConfig;
use irrcalc::core::form::evaluate;
use std::fs;
use tracing::info;

mod test_utils {
    use std::fs;

    pub fn write_config(content: &str) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        fs::write(config_file.path(), content).expect("Failed to write config file");
        config_file
    }

    pub fn raw(start: &str, end: &str, begin: &str, end_balance: &str) -> irrcalc::core::RawInput {
        irrcalc::core::RawInput {
            start_date: start.to_string(),
            end_date: end.to_string(),
            begin_balance: begin.to_string(),
            end_balance: end_balance.to_string(),
        }
    }
}

fn calc(input: RawInput) -> AppCommand {
    AppCommand::Calc {
        input,
        options: CalcOptions::default(),
    }
}

#[test_log::test]
fn test_calc_with_config_file() {
    let config_file = test_utils::write_config(
        r#"
        currency_symbol: "$"
        precision: 3
    "#,
    );
    let config_path = config_file.path().to_str().unwrap();

    let input = test_utils::raw("2020-01-01", "2025-01-01", "1,000", "2000");
    info!(?input, "Running calc");
    let result = irrcalc::run_command(calc(input), Some(config_path));
    assert!(
        result.is_ok(),
        "Calc command failed with: {:?}",
        result.err()
    );
}

#[test_log::test]
fn test_calc_rejections_surface_banner_messages() {
    let config_file = test_utils::write_config("precision: 2\n");
    let config_path = config_file.path().to_str().unwrap();

    let cases = [
        (
            test_utils::raw("", "2020-01-01", "1000", "1100"),
            "Please fill in all fields",
        ),
        (
            test_utils::raw("2020-01-01", "2020-01-01", "1000", "1100"),
            "End date must be after start date",
        ),
        (
            test_utils::raw("2020-01-01", "2021-01-01", "0", "100"),
            "Balances must be positive numbers",
        ),
        (
            test_utils::raw("2020-01-01", "2020-01-02", "0.01", "99,000,000"),
            "Error calculating IRR. Please check your inputs.",
        ),
    ];

    for (input, expected) in cases {
        let err = irrcalc::run_command(calc(input), Some(config_path)).unwrap_err();
        assert_eq!(err.to_string(), expected);
    }
}

#[test_log::test]
fn test_calc_json_and_details_output() {
    let config_file = test_utils::write_config("min_elapsed_days: 30\n");
    let config_path = config_file.path().to_str().unwrap();

    let config = AppConfig::load_from_path(config_path).expect("Failed to load config");
    let input = test_utils::raw("2020-01-01", "2020-01-02", "1000", "1001");
    let result = evaluate(&input, &config.calculator()).expect("Calculation failed");
    assert_eq!(result.elapsed_days, 1);
    assert!((result.years - 30.0 / 365.0).abs() < 1e-12);
    let expected = (1.001_f64.powf(365.0 / 30.0) - 1.0) * 100.0;
    assert!((result.irr_percent - expected).abs() < 1e-9);
    assert!((result.irr_percent - 1.2235).abs() < 0.001);

    for options in [
        CalcOptions {
            json: true,
            details: false,
        },
        CalcOptions {
            json: false,
            details: true,
        },
    ] {
        let command = AppCommand::Calc {
            input: input.clone(),
            options,
        };
        assert!(irrcalc::run_command(command, Some(config_path)).is_ok());
    }
}

#[test_log::test]
fn test_missing_config_file_is_an_error() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("missing.yaml");

    let input = test_utils::raw("2020-01-01", "2021-01-01", "1000", "1100");
    let err = irrcalc::run_command(calc(input), Some(config_path.to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test_log::test]
fn test_setup_then_load() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("irrcalc").join("config.yaml");

    irrcalc::cli::setup::setup_at_path(&config_path).expect("Setup failed");
    assert!(fs::read_to_string(&config_path).unwrap().contains("precision"));

    let input = test_utils::raw("2020-01-01", "2021-01-01", "1000", "1100");
    let result = irrcalc::run_command(calc(input), Some(config_path.to_str().unwrap()));
    assert!(result.is_ok(), "Calc failed with: {:?}", result.err());
}
