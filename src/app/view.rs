use crate::domain::model::PortfolioRecord;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f4f6fb; color: #1f2933; }
header { background: #1f3b73; color: #fff; padding: 2rem; }
main { max-width: 960px; margin: 0 auto; padding: 1.5rem; }
section { background: #fff; border-radius: 8px; padding: 1.25rem; margin-bottom: 1.25rem; }
.bar { background: #e4e7eb; border-radius: 4px; height: 8px; }
.bar span { display: block; background: #3e7bfa; height: 8px; border-radius: 4px; }
.tag { display: inline-block; background: #e8f0fe; border-radius: 4px; padding: 0 .4rem; margin: .1rem; font-size: .85rem; }
"#;

const COUNTER_SCRIPT: &str = r#"
fetch('/api/visitor-count')
  .then(function (r) { return r.json(); })
  .then(function (d) { document.getElementById('visitor-count').textContent = d.count; })
  .catch(function () {});
"#;

/// Render the dashboard page. All interpolated text is escaped.
pub fn render_dashboard(portfolio: &PortfolioRecord) -> String {
    let info = &portfolio.personal_info;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>{} - Portfolio</title>\n<style>{}</style>\n</head>\n<body>\n",
        escape_html(&info.name),
        STYLE
    ));

    html.push_str(&format!(
        "<header>\n<h1>{}</h1>\n<p>{}</p>\n<p>{} &middot; <a style=\"color:#fff\" href=\"mailto:{}\">{}</a></p>\n\
         <p>Visitors: <span id=\"visitor-count\">&hellip;</span></p>\n</header>\n<main>\n",
        escape_html(&info.name),
        escape_html(&info.title),
        escape_html(&info.location),
        escape_html(&info.email),
        escape_html(&info.email),
    ));

    html.push_str(&format!(
        "<section id=\"about\">\n<h2>About</h2>\n<p>{}</p>\n</section>\n",
        escape_html(&info.bio)
    ));

    html.push_str("<section id=\"skills\">\n<h2>Skills</h2>\n");
    for skill in &portfolio.skills {
        let level = skill.level.min(100);
        html.push_str(&format!(
            "<div class=\"skill\"><p>{} <small>{}%</small></p><div class=\"bar\"><span style=\"width:{}%\"></span></div></div>\n",
            escape_html(&skill.name),
            level,
            level
        ));
    }
    html.push_str("</section>\n");

    html.push_str("<section id=\"projects\">\n<h2>Projects</h2>\n");
    for project in &portfolio.projects {
        let tags: String = project
            .technologies
            .iter()
            .map(|t| format!("<span class=\"tag\">{}</span>", escape_html(t)))
            .collect();
        let live = project
            .live_url
            .as_deref()
            .map(|url| format!(" &middot; <a href=\"{}\">Live</a>", escape_html(url)))
            .unwrap_or_default();

        html.push_str(&format!(
            "<article>\n<h3>{} <small>({})</small></h3>\n<p>{}</p>\n<p>{}</p>\n<p><a href=\"{}\">GitHub</a>{}</p>\n</article>\n",
            escape_html(&project.name),
            escape_html(&project.status),
            escape_html(&project.description),
            tags,
            escape_html(&project.github_url),
            live
        ));
    }
    html.push_str("</section>\n");

    html.push_str("<section id=\"experience\">\n<h2>Experience</h2>\n");
    for job in &portfolio.experience {
        html.push_str(&format!(
            "<article>\n<h3>{} &middot; {}</h3>\n<p><small>{}</small></p>\n<p>{}</p>\n</article>\n",
            escape_html(&job.position),
            escape_html(&job.company),
            escape_html(&job.duration),
            escape_html(&job.description)
        ));
    }
    html.push_str("</section>\n</main>\n");

    html.push_str(&format!("<script>{}</script>\n</body>\n</html>\n", COUNTER_SCRIPT));
    html
}
