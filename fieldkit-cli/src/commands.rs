//! Command implementations

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use fieldkit_lib::config::FieldDefaults;
use fieldkit_lib::error::ValidationErrors;
use fieldkit_lib::model::{ModelMetadata, ModelSchema, ModelValidator, Record};

use crate::args::{Command, Target};

/// What a command produced: the JSON to print and whether the input was valid.
#[derive(Debug)]
struct Outcome {
    valid: bool,
    output: serde_json::Value,
}

impl Outcome {
    fn valid(output: impl serde::Serialize) -> anyhow::Result<Self> {
        Ok(Self {
            valid: true,
            output: serde_json::to_value(output)?,
        })
    }

    fn invalid(errors: &ValidationErrors) -> anyhow::Result<Self> {
        Ok(Self {
            valid: false,
            output: serde_json::to_value(errors)?,
        })
    }
}

/// Runs a command, returning the process exit code.
///
/// Invalid input is reported on stdout with exit code 1; configuration and
/// I/O problems are returned as errors.
pub fn run(command: Command) -> anyhow::Result<ExitCode> {
    let outcome = execute(command)?;
    print_json(&outcome.output)?;
    Ok(exit_code(outcome.valid))
}

fn execute(command: Command) -> anyhow::Result<Outcome> {
    match command {
        Command::Validate(target) => {
            let errors = load(&target)?.validate();
            Ok(Outcome {
                valid: errors.is_empty(),
                output: serde_json::to_value(&errors)?,
            })
        }
        Command::Transform(target) => {
            let validator = load(&target)?;
            let errors = validator.validate();
            if !errors.is_empty() {
                return Outcome::invalid(&errors);
            }
            Outcome::valid(validator.transform()?)
        }
        Command::Populate(target) => {
            let validator = load(&target)?;
            let errors = validator.validate();
            if !errors.is_empty() {
                return Outcome::invalid(&errors);
            }
            let record: Record = validator.populate(None)?;
            Outcome::valid(record)
        }
    }
}

fn load(target: &Target) -> anyhow::Result<ModelValidator> {
    let metadata: ModelMetadata = read_json(&target.model)?;
    let input: serde_json::Value = read_json(&target.input)?;
    let defaults: FieldDefaults = match &target.defaults {
        Some(path) => read_json(path)?,
        None => FieldDefaults::default(),
    };

    let mut builder = ModelSchema::builder(metadata).defaults(defaults);
    if !target.include.is_empty() {
        builder = builder.include(target.include.iter().cloned());
    }
    if !target.exclude.is_empty() {
        builder = builder.exclude(target.exclude.iter().cloned());
    }
    let schema = builder.build()?;

    log::info!(
        "validating {} against {} fields of '{}'",
        target.input.display(),
        schema.schema().len(),
        schema.metadata().kind
    );
    Ok(schema.validator_from_json(input)?)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn exit_code(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn json_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn target(model: &NamedTempFile, input: &NamedTempFile) -> Target {
        Target {
            model: model.path().to_path_buf(),
            input: input.path().to_path_buf(),
            defaults: None,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }

    const MODEL: &str = r#"{
        "kind": "Product",
        "properties": [
            {"name": "name", "propertyType": "String", "required": true},
            {"name": "stock", "propertyType": "Integer", "lower": 0}
        ]
    }"#;

    #[test]
    fn test_load_reports_invalid_input() {
        let model = json_file(MODEL);
        let input = json_file(r#"{"stock": "-3"}"#);

        let validator = load(&target(&model, &input)).unwrap();
        let errors = validator.validate();
        assert_eq!(errors.get("name"), Some("name is required"));
        assert_eq!(errors.get("stock"), Some("stock must be greater than 0"));
    }

    #[test]
    fn test_load_with_include() {
        let model = json_file(MODEL);
        let input = json_file(r#"{"stock": "5"}"#);

        let mut target = target(&model, &input);
        target.include = vec!["stock".to_string()];
        let validator = load(&target).unwrap();
        assert!(validator.is_valid());
    }

    #[test]
    fn test_load_rejects_unknown_input_key() {
        let model = json_file(MODEL);
        let input = json_file(r#"{"colour": "red"}"#);

        let err = load(&target(&model, &input)).unwrap_err();
        assert!(err.to_string().contains("unknown field 'colour'"));
    }

    #[test]
    fn test_load_rejects_non_object_input() {
        let model = json_file(MODEL);
        let input = json_file(r#"["widget", 3]"#);

        let err = load(&target(&model, &input)).unwrap_err();
        assert!(err.to_string().contains("input must be a JSON object, found array"));
    }

    #[test]
    fn test_validate_command() {
        let model = json_file(MODEL);
        let input = json_file(r#"{"stock": "-3"}"#);

        let outcome = execute(Command::Validate(target(&model, &input))).unwrap();
        assert!(!outcome.valid);
        assert_eq!(
            outcome.output,
            serde_json::json!({
                "name": "name is required",
                "stock": "stock must be greater than 0",
            })
        );

        let input = json_file(r#"{"name": "Widget", "stock": 4}"#);
        let outcome = execute(Command::Validate(target(&model, &input))).unwrap();
        assert!(outcome.valid);
        assert_eq!(outcome.output, serde_json::json!({}));
    }

    #[test]
    fn test_transform_command() {
        let model = json_file(MODEL);
        let input = json_file(r#"{"name": "Widget", "stock": "4"}"#);

        let outcome = execute(Command::Transform(target(&model, &input))).unwrap();
        assert!(outcome.valid);
        assert_eq!(outcome.output, serde_json::json!({"name": "Widget", "stock": 4}));
    }

    #[test]
    fn test_transform_command_refuses_invalid_input() {
        let model = json_file(MODEL);
        let input = json_file(r#"{"name": "Widget", "stock": "many"}"#);

        let outcome = execute(Command::Transform(target(&model, &input))).unwrap();
        assert!(!outcome.valid);
        assert_eq!(outcome.output, serde_json::json!({"stock": "stock must be integer"}));
    }

    #[test]
    fn test_populate_command() {
        let model = json_file(MODEL);
        let input = json_file(r#"{"name": "Widget", "stock": "4"}"#);

        let outcome = execute(Command::Populate(target(&model, &input))).unwrap();
        assert!(outcome.valid);
        assert_eq!(
            outcome.output,
            serde_json::json!({
                "kind": "Product",
                "properties": {"name": "Widget", "stock": 4},
            })
        );

        let input = json_file(r#"{"stock": "4"}"#);
        let outcome = execute(Command::Populate(target(&model, &input))).unwrap();
        assert!(!outcome.valid);
        assert_eq!(outcome.output, serde_json::json!({"name": "name is required"}));
    }
}
