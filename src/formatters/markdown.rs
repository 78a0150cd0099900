use crate::suitability::{factor_breakdown, CropRecommendation, SuitabilityReport};

/// Markdown formatter for suitability reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown: soil summary, top pick, all crops
    pub fn format(report: &SuitabilityReport) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str("# Soil Analysis Results\n\n");
        md.push_str(
            "Based on your soil parameters, here are the recommended crops and estimated yields\n\n",
        );

        Self::format_soil_summary(&mut md, report);

        if let Some(top) = report.top() {
            Self::format_top_recommendation(&mut md, top);
        }

        md.push_str("## All Crop Suitability Analysis\n\n");
        md.push_str("| Crop | Suitability | Status | Estimated Yield | Notes |\n");
        md.push_str("|------|-------------|--------|-----------------|-------|\n");
        for rec in &report.recommendations {
            md.push_str(&format!(
                "| {} | {}% | {} {} | {} | {} |\n",
                rec.crop, rec.suitability, rec.status.marker(), rec.status, rec.estimated_yield, rec.notes
            ));
        }
        md.push('\n');

        md
    }

    /// Same as [`MarkdownFormatter::format`] plus the per-crop factor table
    pub fn format_detailed(report: &SuitabilityReport) -> String {
        let mut md = Self::format(report);

        md.push_str("## Factor Breakdown\n\n");
        md.push_str("| Crop | pH | Fertility | Temperature | Site | Raw Score |\n");
        md.push_str("|------|----|-----------|-------------|------|-----------|\n");
        for rec in &report.recommendations {
            let f = factor_breakdown(rec.crop, &report.sample);
            md.push_str(&format!(
                "| {} | {:.1} | {:.3} | {:.1} | {:.1} | {:.2} |\n",
                rec.crop, f.ph, f.fertility, f.temperature, f.site, f.raw
            ));
        }
        md.push('\n');

        md
    }

    fn format_soil_summary(md: &mut String, report: &SuitabilityReport) {
        let sample = &report.sample;
        md.push_str("| Soil pH | Nitrogen (mg/kg) | Moisture | Organic Matter |\n");
        md.push_str("|---------|------------------|----------|----------------|\n");
        md.push_str(&format!(
            "| {:.1} | {} | {}% | {:.1}% |\n\n",
            sample.ph, sample.nitrogen, sample.moisture, sample.organic_matter
        ));
    }

    fn format_top_recommendation(md: &mut String, top: &CropRecommendation) {
        md.push_str(&format!(
            "## Top Recommendation: {} {} {}\n\n",
            top.crop,
            top.status.marker(),
            top.status.as_str().to_uppercase()
        ));
        md.push_str(&format!("**Suitability Score:** {}%  \n", top.suitability));
        md.push_str(&format!("**Estimated Yield:** {}  \n", top.estimated_yield));
        md.push_str(&format!("**Recommendation Notes:** {}\n\n", top.notes));
    }
}
