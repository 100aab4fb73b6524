use std::fmt::Write;
use crate::utils::text::escape_html;
use super::style::severity_css;
use super::view::{PageModel, ResultView, ViewState};

const BASE_CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; color: #1f2937;
       background: linear-gradient(135deg, #eff6ff, #e0e7ff); min-height: 100vh; padding: 24px; }
.container { max-width: 64rem; margin: 0 auto; }
header { text-align: center; margin-bottom: 2rem; }
header h1 { font-size: 2.25rem; margin: 0 0 0.5rem; }
header p { color: #4b5563; font-size: 1.125rem; margin: 0; }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); }
.card { background: #fff; border-radius: 0.5rem; box-shadow: 0 10px 15px rgba(0,0,0,0.1); padding: 1.5rem; }
.card h2 { margin-top: 0; }
label { display: block; font-size: 0.875rem; font-weight: 500; color: #374151; margin: 1rem 0 0.5rem; }
input, textarea { width: 100%; padding: 0.5rem 1rem; border: 1px solid #d1d5db; border-radius: 0.5rem; font: inherit; }
textarea { resize: none; }
.samples { display: flex; gap: 0.5rem; margin-top: 1rem; }
.samples button { flex: 1; padding: 0.5rem 1rem; border: 0; border-radius: 0.5rem; font-weight: 500; cursor: pointer; }
.sample-phishing { background: #fee2e2; color: #b91c1c; }
.sample-safe { background: #dcfce7; color: #15803d; }
.analyze { width: 100%; margin-top: 1rem; padding: 0.75rem 1.5rem; border: 0; border-radius: 0.5rem;
           background: #4f46e5; color: #fff; font-weight: 600; cursor: pointer; }
.analyze:disabled { background: #9ca3af; cursor: not-allowed; }
.notice { margin-top: 1rem; padding: 0.75rem 1rem; border-radius: 0.5rem; background: #fef3c7; color: #92400e; }
.placeholder { display: flex; flex-direction: column; align-items: center; justify-content: center;
               height: 16rem; color: #9ca3af; text-align: center; }
.placeholder .glyph { font-size: 4rem; margin-bottom: 1rem; }
.spinner { width: 4rem; height: 4rem; border: 6px solid #e0e7ff; border-top-color: #4f46e5; border-radius: 50%;
           animation: spin 1s linear infinite; margin-bottom: 1rem; }
@keyframes spin { to { transform: rotate(360deg); } }
.badge { border: 2px solid; border-radius: 0.5rem; padding: 1rem; display: flex; gap: 0.75rem; align-items: center; }
.badge .glyph { font-size: 1.5rem; }
.badge h3 { margin: 0; font-size: 1.25rem; }
.badge p { margin: 0; font-size: 0.875rem; }
.block { border-radius: 0.5rem; padding: 1rem; margin-top: 1rem; }
.block h4 { margin: 0 0 0.5rem; }
.block p { margin: 0; }
.analysis { background: #f9fafb; }
.threats { background: #fef2f2; border: 1px solid #fecaca; color: #b91c1c; }
.recommendation { background: #eff6ff; border: 1px solid #bfdbfe; color: #1d4ed8; }
.features { margin-top: 2rem; }
.features .grid { grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); }
.features h4 { margin: 0 0 0.25rem; }
.features p { margin: 0; font-size: 0.875rem; color: #4b5563; }
"#;

/// Swaps in the analyzing panel and locks the submit button while the post is
/// in flight. Sample buttons submit the same form but skip the swap. A
/// disabled submitter drops out of the form data, so the server treats a
/// missing action as analyze.
const SUBMIT_SCRIPT: &str = r#"
document.getElementById("analyze-form").addEventListener("submit", function (event) {
  var action = event.submitter ? event.submitter.value : "analyze";
  if (action !== "analyze") { return; }
  var button = document.getElementById("analyze-button");
  button.disabled = true;
  button.textContent = "Analyzing Email...";
  var template = document.getElementById("analyzing-panel");
  document.getElementById("results").innerHTML = template.innerHTML;
});
"#;

const FEATURES: &[(&str, &str, &str)] = &[
    ("\u{2709}", "Content Analysis", "Analyzes sender, subject, and body for suspicious patterns"),
    ("\u{1F6E1}", "AI-Powered Detection", "Uses PhishGuard AI to identify phishing tactics and threats"),
    ("\u{2714}", "Instant Results", "Get classification and explanations in seconds"),
];

/// Render the whole page for one request.
pub fn render_page(page: &PageModel) -> String {
    let mut html = String::with_capacity(16 * 1024);
    let analyzing = page.view.is_analyzing();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>PhishGuard AI</title>\n<style>");
    html.push_str(BASE_CSS);
    html.push_str(&severity_css());
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

    html.push_str(
        "<header>\n<h1>\u{1F6E1} PhishGuard AI</h1>\n\
         <p>Real-Time Email Phishing Detection powered by PhishGuard AI</p>\n</header>\n",
    );

    html.push_str("<div class=\"grid\">\n");
    render_form(&mut html, page, analyzing);
    html.push_str("<section class=\"card\">\n<h2>Detection Results</h2>\n<div id=\"results\">\n");
    html.push_str(&render_results_panel(&page.view));
    html.push_str("</div>\n</section>\n</div>\n");

    render_features(&mut html);

    html.push_str("<template id=\"analyzing-panel\">");
    html.push_str(&render_results_panel(&ViewState::Analyzing));
    html.push_str("</template>\n<script>");
    html.push_str(SUBMIT_SCRIPT);
    html.push_str("</script>\n</div>\n</body>\n</html>\n");
    html
}

fn render_form(html: &mut String, page: &PageModel, analyzing: bool) {
    let form = &page.form;
    let _ = write!(
        html,
        "<section class=\"card\">\n<h2>\u{2709} Email to Analyze</h2>\n\
         <form id=\"analyze-form\" method=\"post\" action=\"/\" novalidate>\n\
         <label for=\"sender_email\">Sender Email Address</label>\n\
         <input id=\"sender_email\" name=\"sender_email\" type=\"email\" placeholder=\"sender@example.com\" value=\"{}\">\n\
         <label for=\"subject\">Subject Line (Optional)</label>\n\
         <input id=\"subject\" name=\"subject\" type=\"text\" placeholder=\"Email subject\" value=\"{}\">\n\
         <label for=\"email_content\">Email Content</label>\n\
         <textarea id=\"email_content\" name=\"email_content\" rows=\"10\" placeholder=\"Paste the email content here...\">\n{}</textarea>\n",
        escape_html(&form.sender_email),
        escape_html(&form.subject),
        escape_html(&form.email_content),
    );

    html.push_str(
        "<div class=\"samples\">\n\
         <button type=\"submit\" name=\"action\" value=\"sample_phishing\" class=\"sample-phishing\">Load Phishing Sample</button>\n\
         <button type=\"submit\" name=\"action\" value=\"sample_safe\" class=\"sample-safe\">Load Safe Sample</button>\n\
         </div>\n",
    );

    let (disabled, label) = if analyzing {
        (" disabled", "Analyzing Email...")
    } else {
        ("", "\u{1F6E1} Analyze for Phishing")
    };
    let _ = write!(
        html,
        "<button id=\"analyze-button\" type=\"submit\" name=\"action\" value=\"analyze\" class=\"analyze\"{}>{}</button>\n",
        disabled, label
    );

    if let Some(notice) = &page.notice {
        let _ = writeln!(html, "<div class=\"notice\" role=\"alert\">{}</div>", escape_html(notice));
    }
    html.push_str("</form>\n</section>\n");
}

/// Inner markup of the results panel for one view state.
pub fn render_results_panel(view: &ViewState) -> String {
    match view {
        ViewState::Idle => "<div class=\"placeholder\"><div class=\"glyph\">\u{1F6E1}</div>\
             <p>Enter email details and click \"Analyze\" to detect phishing attempts</p></div>\n"
            .to_string(),
        ViewState::Analyzing => "<div class=\"placeholder\"><div class=\"spinner\"></div>\
             <p>Analyzing email with AI...</p></div>\n"
            .to_string(),
        ViewState::Done(result) => render_result(result),
    }
}

fn render_result(result: &ResultView) -> String {
    let style = result.style();
    let mut html = String::new();

    let _ = write!(
        html,
        "<div class=\"badge {}\" data-classification=\"{}\">\n\
         <span class=\"glyph\">{}</span>\n<div><h3>{}</h3><p>Confidence: {}%</p></div>\n</div>\n",
        style.css_class,
        escape_html(&result.classification),
        style.icon,
        escape_html(&result.classification),
        escape_html(&result.confidence),
    );

    let _ = write!(
        html,
        "<div class=\"block analysis\"><h4>Analysis</h4><p>{}</p></div>\n",
        escape_html(&result.explanation)
    );

    if !result.threats.is_empty() {
        html.push_str("<div class=\"block threats\"><h4>\u{26A0} Threats Detected</h4><ul>\n");
        for threat in &result.threats {
            let _ = writeln!(html, "<li>{}</li>", escape_html(threat));
        }
        html.push_str("</ul></div>\n");
    }

    let _ = write!(
        html,
        "<div class=\"block recommendation\"><h4>Recommendation</h4><p>{}</p></div>\n",
        escape_html(&result.recommendation)
    );
    html
}

fn render_features(html: &mut String) {
    html.push_str("<section class=\"card features\">\n<h3>How It Works</h3>\n<div class=\"grid\">\n");
    for (icon, title, text) in FEATURES {
        let _ = writeln!(html, "<div><h4>{} {}</h4><p>{}</p></div>", icon, title, text);
    }
    html.push_str("</div>\n</section>\n");
}
