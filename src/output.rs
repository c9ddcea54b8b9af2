use abcompute::compute::types::SampleSizeCalculation;
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    per_group_needed: u64,
    total_needed: u64,
    #[serde(flatten)]
    calculation: &'a SampleSizeCalculation,
}

pub fn render_text(calc: &SampleSizeCalculation) -> String {
    format!(
        "Required Sample Size\n\
        Minimum Sample Size per Group Needed: {}\n\
        Total Sample Size Needed: {}\n",
        calc.per_group_needed(),
        calc.total_needed()
    )
}

pub fn render_json(calc: &SampleSizeCalculation) -> Result<String> {
    let report = JsonReport {
        per_group_needed: calc.per_group_needed(),
        total_needed: calc.total_needed(),
        calculation: calc,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc() -> SampleSizeCalculation {
        SampleSizeCalculation {
            per_group: 685.6,
            total: 1371.2,
            group_count: 2,
            z_alpha: 1.96,
            z_power: 0.84,
        }
    }

    #[test]
    fn text_report_truncates() {
        let text = render_text(&calc());
        assert!(text.contains("Minimum Sample Size per Group Needed: 685\n"));
        assert!(text.contains("Total Sample Size Needed: 1371\n"));
        assert!(text.starts_with("Required Sample Size\n"));
    }

    #[test]
    fn json_report_fields() {
        let json = render_json(&calc()).expect("failed to render json");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["per_group_needed"], 685);
        assert_eq!(value["total_needed"], 1371);
        assert_eq!(value["group_count"], 2);
        assert_eq!(value["per_group"], 685.6);
    }
}
