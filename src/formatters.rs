use crate::models::{AdviceResult, WeatherSummary};

/// Formats a summary as the one-line answer handed back to an agent
pub fn format_weather_report(summary: &WeatherSummary) -> String {
    format!(
        "Weather in {} ({}): Max {}\u{00b0}C, Min {}\u{00b0}C, Rain chance: {}%.",
        summary.city, summary.country, summary.temp_max, summary.temp_min, summary.precip_prob
    )
}

/// Formats a failed lookup for an agent
pub fn format_lookup_failure(city: &str) -> String {
    format!("Could not find weather for {}.", city)
}

/// Translates the advice markup subset into HTML.
///
/// Mirrors `formatMarkdown` in the page script line for line: `### ` headings,
/// `* `/`- ` bullets, `**` pairs (even split index opens, odd closes) and blank
/// line paragraph breaks. Text is escaped before markup is applied.
pub fn render_advice(text: &str) -> String {
    let mut html = String::new();
    if text.is_empty() {
        return html;
    }

    for raw in text.split('\n') {
        let line = escape_html(raw);
        let trimmed = line.trim();

        if let Some(heading) = line.strip_prefix("### ") {
            html.push_str(&format!("<h3>{}</h3>", heading));
        } else if let Some(item) = trimmed
            .strip_prefix("* ")
            .or_else(|| trimmed.strip_prefix("- "))
        {
            html.push_str(&format!("<li>{}</li>", item));
        } else if line.contains("**") {
            let parts: Vec<&str> = line.split("**").collect();
            for (i, part) in parts.iter().enumerate() {
                html.push_str(part);
                if i < parts.len() - 1 {
                    html.push_str(if i % 2 == 0 { "<strong>" } else { "</strong>" });
                }
            }
            html.push_str("<br>");
        } else if trimmed.is_empty() {
            html.push_str("<p></p>");
        } else {
            html.push_str(&line);
            html.push_str("<br>");
        }
    }
    html
}

/// Renders the weather header and advice block shown in the result area
pub fn render_result(result: &AdviceResult) -> String {
    let w = &result.weather;
    format!(
        "<div class=\"weather-badge\">\u{1f4cd} {}, {}</div>\n\
         <div class=\"weather-summary\">\
         <div class=\"weather-item\"><span class=\"weather-label\">Max</span><span class=\"weather-value\">{}\u{00b0}C</span></div>\
         <div class=\"weather-item\"><span class=\"weather-label\">Min</span><span class=\"weather-value\">{}\u{00b0}C</span></div>\
         <div class=\"weather-item\"><span class=\"weather-label\">Rain</span><span class=\"weather-value\">{}%</span></div>\
         </div>\
         <div style=\"margin-top:20px\">{}</div>",
        escape_html(&w.city),
        escape_html(&w.country),
        w.temp_max,
        w.temp_min,
        w.precip_prob,
        render_advice(&result.advice)
    )
}

pub fn render_error(detail: &str) -> String {
    format!("Error: {}", escape_html(detail))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
