//! Built-in stylesheet served at `/static/style.css`.

/// Stylesheet linked from every page.
pub const STYLESHEET: &str = r#"
body {
    font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    max-width: 800px;
    margin: 0 auto;
    padding: 2rem;
    color: #333;
}
h1 { border-bottom: 1px solid #eee; padding-bottom: 0.5rem; }
h2 { margin: 0 0 0.25rem; font-size: 1.2em; }
a { color: #0066cc; text-decoration: none; }
a:hover { text-decoration: underline; }
.flash { padding: 0.5rem 1rem; border-radius: 4px; }
.flash.success { background: #e6f4ea; color: #1e6b34; }
.flash.error { background: #fdecea; color: #a12622; }
form.task-form { display: grid; gap: 0.5rem; margin-bottom: 2rem; }
input[type=text], textarea {
    font: inherit;
    padding: 0.4rem;
    border: 1px solid #ddd;
    border-radius: 3px;
}
button {
    font: inherit;
    padding: 0.3rem 0.8rem;
    border: 1px solid #ccc;
    border-radius: 3px;
    background: #f5f5f5;
    cursor: pointer;
}
ul.tasks { list-style: none; padding: 0; }
.task { border: 1px solid #eee; border-radius: 4px; padding: 1rem; margin-bottom: 1rem; }
.description { white-space: pre-wrap; color: #555; }
.actions { display: flex; gap: 0.75rem; align-items: center; }
.actions form { display: inline; }
.empty { color: #666; font-style: italic; }
"#;
