//! Table formatters for terminal output
//!
//! Keys are padded to a common width before styling so alignment survives
//! ANSI escapes. Styling is dropped automatically when stdout is not a TTY.

use console::Style;

use ollama_params::{
    CreateModelRequest, ModelDetail, ModelInfo, ParameterRegistry, RawPair, ValidatedParameters,
};

fn key_style() -> Style {
    Style::new().bold().cyan()
}

fn label_style() -> Style {
    Style::new().bold()
}

/// Two aligned columns, one row per entry
fn aligned_rows<'a, I>(rows: I) -> String
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    let rows: Vec<(&str, String)> = rows.into_iter().collect();
    let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);

    rows.iter()
        .map(|(key, value)| {
            format!(
                "{}  {}",
                key_style().apply_to(format!("{key:<width$}")),
                value
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parameter block rows
pub fn pairs_table(pairs: &[RawPair]) -> String {
    if pairs.is_empty() {
        return "No parameters.".to_string();
    }
    aligned_rows(pairs.iter().map(|p| (p.key.as_str(), p.value.clone())))
}

/// Validated parameters with their cast values
pub fn validated_table(params: &ValidatedParameters) -> String {
    if params.is_empty() {
        return "No parameters.".to_string();
    }
    aligned_rows(params.iter().map(|(k, v)| (k.as_str(), v.to_string())))
}

/// Installed models: name, size and modification time
pub fn models_table(models: &[ModelInfo]) -> String {
    if models.is_empty() {
        return "No models.".to_string();
    }

    let name_width = models
        .iter()
        .map(|m| m.name.chars().count())
        .max()
        .unwrap_or(0);
    let size_width = models
        .iter()
        .map(|m| m.size.to_string().len())
        .max()
        .unwrap_or(0);

    models
        .iter()
        .map(|m| {
            format!(
                "{}  {:>size_width$}  {}",
                key_style().apply_to(format!("{:<name_width$}", m.name)),
                m.size,
                m.modified_at
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Model detail view: metadata, parameter rows and template
pub fn detail_table(detail: &ModelDetail) -> String {
    let mut out = vec![
        format!("{} {}", label_style().apply_to("Name:"), detail.name),
        format!("{} {}", label_style().apply_to("Size:"), detail.size),
    ];
    if !detail.modified_at.is_empty() {
        out.push(format!(
            "{} {}",
            label_style().apply_to("Modified:"),
            detail.modified_at
        ));
    }

    out.push(String::new());
    out.push(label_style().apply_to("Parameters:").to_string());
    out.push(indent(&pairs_table(&detail.parameters)));

    if !detail.template.is_empty() {
        out.push(String::new());
        out.push(label_style().apply_to("Template:").to_string());
        out.push(indent(&detail.template));
    }

    out.join("\n")
}

/// Create request body summary
pub fn create_request_table(request: &CreateModelRequest) -> String {
    let mut out = vec![format!(
        "{} {}",
        label_style().apply_to("Model:"),
        request.model
    )];
    if let Some(ref from) = request.from {
        out.push(format!("{} {}", label_style().apply_to("From:"), from));
    }
    if let Some(ref parameters) = request.parameters {
        out.push(label_style().apply_to("Parameters:").to_string());
        out.push(indent(&validated_table(parameters)));
    }
    if let Some(ref template) = request.template {
        out.push(label_style().apply_to("Template:").to_string());
        out.push(indent(template));
    }
    out.join("\n")
}

/// Accepted parameters with their expected types
pub fn registry_table(registry: &ParameterRegistry) -> String {
    aligned_rows(
        registry
            .all()
            .iter()
            .map(|d| (d.name.as_str(), d.expected_type())),
    )
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ollama_params::ValidatedValue;

    #[test]
    fn test_pairs_table_aligns_keys() {
        console::set_colors_enabled(false);
        let out = pairs_table(&[
            RawPair::new("seed", "42"),
            RawPair::new("temperature", "0.8"),
        ]);
        assert_eq!(out, "seed         42\ntemperature  0.8");
    }

    #[test]
    fn test_pairs_table_empty() {
        assert_eq!(pairs_table(&[]), "No parameters.");
    }

    #[test]
    fn test_validated_table_renders_sequences() {
        console::set_colors_enabled(false);
        let mut params = ValidatedParameters::new();
        params.insert(
            "stop".to_string(),
            ValidatedValue::Sequence(vec![
                ValidatedValue::String("a".to_string()),
                ValidatedValue::String("b".to_string()),
            ]),
        );
        assert_eq!(validated_table(&params), "stop  [a, b]");
    }

    #[test]
    fn test_registry_table_lists_every_parameter() {
        console::set_colors_enabled(false);
        let out = registry_table(ParameterRegistry::builtin());
        assert_eq!(out.lines().count(), 13);
        assert!(out.contains("String or sequence of String"));
    }

    #[test]
    fn test_models_table_aligns_columns() {
        console::set_colors_enabled(false);
        let out = models_table(&[
            ModelInfo {
                name: "llama3:latest".to_string(),
                size: 4_661_224_676,
                modified_at: "2024-05-01T10:00:00Z".to_string(),
            },
            ModelInfo {
                name: "tiny".to_string(),
                size: 42,
                modified_at: String::new(),
            },
        ]);
        assert_eq!(
            out,
            "llama3:latest  4661224676  2024-05-01T10:00:00Z\ntiny                   42"
        );
    }

    #[test]
    fn test_models_table_empty() {
        assert_eq!(models_table(&[]), "No models.");
    }

    #[test]
    fn test_detail_table_skips_empty_template() {
        console::set_colors_enabled(false);
        let detail = ModelDetail {
            name: "llama3".to_string(),
            size: 10,
            modified_at: String::new(),
            parameters: vec![RawPair::new("top_k", "40")],
            template: String::new(),
        };
        let out = detail_table(&detail);
        assert!(out.contains("Name: llama3"));
        assert!(out.contains("  top_k  40"));
        assert!(!out.contains("Template:"));
        assert!(!out.contains("Modified:"));
    }
}
