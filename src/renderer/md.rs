use crate::stats::Summary;
use anyhow::Result;

/// Render an activity summary to Markdown.
pub fn render(summary: &Summary) -> Result<String> {
    let mut output = String::new();

    render_header(&mut output, summary);
    render_day_table(&mut output, summary);
    render_active_users(&mut output, summary);

    Ok(output)
}

fn render_header(output: &mut String, summary: &Summary) {
    output.push_str(&format!(
        "# 📊 Group Activity — Last {} Days\n\n",
        summary.window_days
    ));
    output.push_str(&format!(
        "*Window: {} to {} · generated {}*\n\n",
        summary.coverage.from, summary.coverage.to, summary.generated_at
    ));
}

fn render_day_table(output: &mut String, summary: &Summary) {
    output.push_str("### 📅 Daily activity\n");
    output.push_str("| Day | Messaging users | New users |\n");
    output.push_str("|---|---|---|\n");

    for (i, label) in summary.labels.iter().enumerate() {
        let messaging = summary.series.messaging_users.get(i).copied().unwrap_or(0);
        let joined = summary.series.new_users.get(i).copied().unwrap_or(0);
        output.push_str(&format!("| {} | {} | {} |\n", label, messaging, joined));
    }

    let total_new: u32 = summary.series.new_users.iter().sum();
    output.push_str(&format!("\n- 👋 **New members over the window:** {}\n", total_new));

    if let Some(peak) = peak_day(summary) {
        output.push_str(&format!(
            "- 📈 **Busiest day:** {} ({} messaging users)\n",
            peak.0, peak.1
        ));
    }
    output.push('\n');
}

fn render_active_users(output: &mut String, summary: &Summary) {
    output.push_str(&format!(
        "### 🔥 Highly active users ({}+ days of {})\n",
        summary.active_day_threshold, summary.window_days
    ));

    if summary.active_users.is_empty() {
        output.push_str("*No user met the activity threshold this window.*\n");
        return;
    }

    for user in &summary.active_users {
        output.push_str(&format!("- {}\n", user));
    }
}

/// Day label with the highest messaging-user count, if any count is non-zero.
fn peak_day(summary: &Summary) -> Option<(&str, u32)> {
    summary
        .labels
        .iter()
        .zip(summary.series.messaging_users.iter())
        .max_by_key(|(_, &count)| count)
        .filter(|(_, &count)| count > 0)
        .map(|(label, &count)| (label.as_str(), count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Coverage, Series};

    fn sample_summary() -> Summary {
        Summary {
            schema_version: 1,
            generated_at: "2024-06-02".to_string(),
            coverage: Coverage {
                from: "2024-05-27".to_string(),
                to: "2024-06-02".to_string(),
            },
            window_days: 7,
            active_day_threshold: 4,
            labels: vec![
                "May 27".into(),
                "May 28".into(),
                "May 29".into(),
                "May 30".into(),
                "May 31".into(),
                "Jun 1".into(),
                "Jun 2".into(),
            ],
            series: Series {
                messaging_users: vec![0, 1, 2, 5, 1, 3, 2],
                new_users: vec![0, 0, 1, 0, 0, 2, 0],
            },
            active_users: vec!["Alice".to_string(), "Bob".to_string()],
        }
    }

    #[test]
    fn test_render_contains_table_and_users() {
        let md = render(&sample_summary()).unwrap();

        assert!(md.contains("# 📊 Group Activity — Last 7 Days"));
        assert!(md.contains("| Jun 1 | 3 | 2 |"));
        assert!(md.contains("**Busiest day:** May 30 (5 messaging users)"));
        assert!(md.contains("**New members over the window:** 3"));
        assert!(md.contains("- Alice\n"));
        assert!(md.contains("- Bob\n"));
    }

    #[test]
    fn test_render_no_active_users() {
        let mut summary = sample_summary();
        summary.active_users.clear();
        let md = render(&summary).unwrap();
        assert!(md.contains("No user met the activity threshold"));
    }

    #[test]
    fn test_peak_day_all_zero() {
        let mut summary = sample_summary();
        summary.series.messaging_users = vec![0; 7];
        assert!(peak_day(&summary).is_none());
        let md = render(&summary).unwrap();
        assert!(!md.contains("Busiest day"));
    }
}
