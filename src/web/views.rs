//! HTML views: task list, task detail, and the edit form.

use minijinja::{Environment, context};

use crate::domain::Task;
use crate::web::flash::Flash;

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{% block title %}Tasks{% endblock %} · Task Manager</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    {% if flash.success %}<p class="flash success">{{ flash.success }}</p>{% endif %}
    {% if flash.error %}<p class="flash error">{{ flash.error }}</p>{% endif %}
    <main>{% block content %}{% endblock %}</main>
</body>
</html>"##;

const LIST_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<h1>Tasks</h1>
<form class="task-form" method="post" action="/create-task">
    <input type="text" name="title" placeholder="Title" required>
    <textarea name="description" rows="3" placeholder="Description"></textarea>
    <button type="submit">Add task</button>
</form>
{% if tasks %}
<ul class="tasks">
    {% for task in tasks %}
    <li class="task">
        <h2><a href="/task/{{ task.id|path_segment }}">{{ task.title }}</a></h2>
        <p class="description">{{ task.description }}</p>
        <div class="actions">
            <a href="/edit-task/{{ task.id|path_segment }}">Edit</a>
            <form method="post" action="/delete-task/{{ task.id|path_segment }}">
                <button type="submit">Delete</button>
            </form>
        </div>
    </li>
    {% endfor %}
</ul>
{% else %}
<p class="empty">No tasks yet.</p>
{% endif %}
{% endblock %}"##;

const DETAIL_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block title %}{{ task.title }}{% endblock %}
{% block content %}
<article class="task">
    <h1>{{ task.title }}</h1>
    <p class="description">{{ task.description }}</p>
    <div class="actions">
        <a href="/edit-task/{{ task.id|path_segment }}">Edit</a>
        <form method="post" action="/delete-task/{{ task.id|path_segment }}">
            <button type="submit">Delete</button>
        </form>
        <a href="/">Back to tasks</a>
    </div>
</article>
{% endblock %}"##;

const EDIT_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block title %}Edit {{ task.title }}{% endblock %}
{% block content %}
<h1>Edit task</h1>
<form class="task-form" method="post" action="/update-task/{{ task.id|path_segment }}">
    <input type="text" name="title" value="{{ task.title }}" required>
    <textarea name="description" rows="6">{{ task.description }}</textarea>
    <div class="actions">
        <button type="submit">Save</button>
        <a href="/task/{{ task.id|path_segment }}">Cancel</a>
    </div>
</form>
{% endblock %}"##;

const LIST_VIEW: &str = "index.html";
const DETAIL_VIEW: &str = "task-detail.html";
const EDIT_VIEW: &str = "edit-task.html";

/// Compiled page templates.
///
/// Template names end in `.html`, so every interpolated value is HTML-escaped.
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    /// Compiles the embedded templates.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_filter("path_segment", |value: String| {
            urlencoding::encode(&value).into_owned()
        });
        env.add_template("base.html", BASE_TEMPLATE)?;
        env.add_template(LIST_VIEW, LIST_TEMPLATE)?;
        env.add_template(DETAIL_VIEW, DETAIL_TEMPLATE)?;
        env.add_template(EDIT_VIEW, EDIT_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders the list of all tasks with the create form.
    pub fn render_list(&self, tasks: &[Task], flash: &Flash) -> Result<String, minijinja::Error> {
        self.env
            .get_template(LIST_VIEW)?
            .render(context! { tasks => tasks, flash => flash })
    }

    /// Renders a single task.
    pub fn render_detail(&self, task: &Task, flash: &Flash) -> Result<String, minijinja::Error> {
        self.env
            .get_template(DETAIL_VIEW)?
            .render(context! { task => task, flash => flash })
    }

    /// Renders the edit form pre-filled with the task's values.
    pub fn render_edit(&self, task: &Task, flash: &Flash) -> Result<String, minijinja::Error> {
        self.env
            .get_template(EDIT_VIEW)?
            .render(context! { task => task, flash => flash })
    }
}
