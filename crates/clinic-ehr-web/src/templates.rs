//! Inline HTML templates.
//!
//! The four pages are registered as raw tera templates at startup; names
//! end in `.html` so tera's autoescaping applies to every interpolated
//! value. Markup leans on pico.css from a CDN, so there are no static
//! assets to serve.

use tera::Tera;

const BASE_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Clinic EHR</title>
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <link href="https://cdn.jsdelivr.net/npm/@picocss/pico@2.0.6/css/pico.min.css" rel="stylesheet">
    <style>
      main { max-width: 980px; margin: 2rem auto; }
      .actions { display: flex; gap: .5rem; flex-wrap: wrap; }
      table { width: 100%; }
      td, th { vertical-align: top; }
      .muted { color: #666; }
      form.inline { display: inline; }
      .grid-2 { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
    </style>
  </head>
  <body>
    <main>
      <nav>
        <ul>
          <li><strong>Clinic EHR</strong></li>
        </ul>
        <ul>
          <li><a href="/">Patients</a></li>
          <li><a href="/patients/new">New Patient</a></li>
        </ul>
      </nav>
      {% if notice %}
        <article>
          <p>{{ notice }}</p>
        </article>
      {% endif %}
      {% block content %}{% endblock content %}
      <footer class="muted" style="margin-top:2rem">Demo only. No auth. Do not use in production.</footer>
    </main>
  </body>
</html>
"#;

const INDEX_HTML: &str = r#"{% extends "base.html" %}
{% block content %}
  <h2>Patients</h2>
  {% if patients %}
    <table>
      <thead>
        <tr><th>Name</th><th>DOB</th><th>Sex</th><th>Phone</th><th></th></tr>
      </thead>
      <tbody>
        {% for p in patients %}
          <tr>
            <td><a href="/patients/{{ p.id }}">{{ p.first_name }} {{ p.last_name }}</a></td>
            <td>{% if p.date_of_birth %}{{ p.date_of_birth }}{% else %}&mdash;{% endif %}</td>
            <td>{% if p.sex %}{{ p.sex }}{% else %}&mdash;{% endif %}</td>
            <td>{% if p.phone %}{{ p.phone }}{% else %}&mdash;{% endif %}</td>
            <td class="actions">
              <a role="button" href="/patients/{{ p.id }}/edit">Edit</a>
              <form class="inline" method="post" action="/patients/{{ p.id }}/delete">
                <button class="secondary" onclick="return confirm('Delete this patient?')">Delete</button>
              </form>
            </td>
          </tr>
        {% endfor %}
      </tbody>
    </table>
  {% else %}
    <p class="muted">No patients yet.</p>
  {% endif %}
  <p><a role="button" href="/patients/new">Add Patient</a></p>
{% endblock content %}
"#;

const PATIENT_FORM_HTML: &str = r#"{% extends "base.html" %}
{% block content %}
  <h2>{% if patient %}Edit{% else %}New{% endif %} Patient</h2>
  <form method="post">
    <div class="grid-2">
      <label>First name
        <input name="first_name" required value="{% if patient %}{{ patient.first_name }}{% endif %}" />
      </label>
      <label>Last name
        <input name="last_name" required value="{% if patient %}{{ patient.last_name }}{% endif %}" />
      </label>
      <label>Date of birth
        <input type="date" name="date_of_birth" value="{% if patient and patient.date_of_birth %}{{ patient.date_of_birth }}{% endif %}" />
      </label>
      <label>Sex
        <input name="sex" value="{% if patient and patient.sex %}{{ patient.sex }}{% endif %}" />
      </label>
      <label>Phone
        <input name="phone" value="{% if patient and patient.phone %}{{ patient.phone }}{% endif %}" />
      </label>
    </div>
    <div class="actions" style="margin-top:1rem">
      <button type="submit">Save</button>
      <a role="button" class="secondary" href="/">Cancel</a>
    </div>
  </form>
{% endblock content %}
"#;

const PATIENT_DETAIL_HTML: &str = r#"{% extends "base.html" %}
{% block content %}
  <h2>{{ patient.first_name }} {{ patient.last_name }}</h2>
  <p class="muted">
    DOB: {% if patient.date_of_birth %}{{ patient.date_of_birth }}{% else %}&mdash;{% endif %}
    &middot; Sex: {% if patient.sex %}{{ patient.sex }}{% else %}&mdash;{% endif %}
    &middot; Phone: {% if patient.phone %}{{ patient.phone }}{% else %}&mdash;{% endif %}
  </p>
  <p class="actions">
    <a role="button" href="/patients/{{ patient.id }}/edit">Edit Patient</a>
    <a role="button" class="secondary" href="/">Back</a>
  </p>

  <h3>Visits</h3>
  <details open>
    <summary>Add visit</summary>
    <form method="post" action="/patients/{{ patient.id }}/visits/new">
      <div class="grid-2">
        <label>Date
          <input type="date" name="visit_date" />
        </label>
        <label>Reason
          <input name="reason" />
        </label>
      </div>
      <label>Notes
        <textarea name="notes" rows="3"></textarea>
      </label>
      <button type="submit">Add Visit</button>
    </form>
  </details>
  {% if visits %}
    <table>
      <thead><tr><th>Date</th><th>Reason</th><th>Notes</th><th></th></tr></thead>
      <tbody>
        {% for v in visits %}
          <tr>
            <td>{% if v.visit_date %}{{ v.visit_date }}{% else %}&mdash;{% endif %}</td>
            <td>{% if v.reason %}{{ v.reason }}{% else %}&mdash;{% endif %}</td>
            <td>{% if v.notes %}{{ v.notes }}{% else %}&mdash;{% endif %}</td>
            <td>
              <form class="inline" method="post" action="/patients/{{ patient.id }}/visits/{{ v.id }}/delete">
                <button class="secondary">Delete</button>
              </form>
            </td>
          </tr>
        {% endfor %}
      </tbody>
    </table>
  {% else %}
    <p class="muted">No visits.</p>
  {% endif %}

  <h3>Medications</h3>
  <details open>
    <summary>Add medication</summary>
    <form method="post" action="/patients/{{ patient.id }}/medications/new">
      <div class="grid-2">
        <label>Name
          <input name="name" required />
        </label>
        <label>Dosage
          <input name="dosage" />
        </label>
        <label>Frequency
          <input name="frequency" />
        </label>
      </div>
      <button type="submit">Add Medication</button>
    </form>
  </details>
  {% if medications %}
    <table>
      <thead><tr><th>Name</th><th>Dosage</th><th>Frequency</th><th></th></tr></thead>
      <tbody>
        {% for m in medications %}
          <tr>
            <td>{{ m.name }}</td>
            <td>{% if m.dosage %}{{ m.dosage }}{% else %}&mdash;{% endif %}</td>
            <td>{% if m.frequency %}{{ m.frequency }}{% else %}&mdash;{% endif %}</td>
            <td>
              <form class="inline" method="post" action="/patients/{{ patient.id }}/medications/{{ m.id }}/delete">
                <button class="secondary">Delete</button>
              </form>
            </td>
          </tr>
        {% endfor %}
      </tbody>
    </table>
  {% else %}
    <p class="muted">No medications.</p>
  {% endif %}

  <h3>Allergies</h3>
  <details open>
    <summary>Add allergy</summary>
    <form method="post" action="/patients/{{ patient.id }}/allergies/new">
      <div class="grid-2">
        <label>Allergen
          <input name="allergen" required />
        </label>
        <label>Reaction
          <input name="reaction" />
        </label>
        <label>Severity
          <input name="severity" />
        </label>
      </div>
      <button type="submit">Add Allergy</button>
    </form>
  </details>
  {% if allergies %}
    <table>
      <thead><tr><th>Allergen</th><th>Reaction</th><th>Severity</th><th></th></tr></thead>
      <tbody>
        {% for a in allergies %}
          <tr>
            <td>{{ a.allergen }}</td>
            <td>{% if a.reaction %}{{ a.reaction }}{% else %}&mdash;{% endif %}</td>
            <td>{% if a.severity %}{{ a.severity }}{% else %}&mdash;{% endif %}</td>
            <td>
              <form class="inline" method="post" action="/patients/{{ patient.id }}/allergies/{{ a.id }}/delete">
                <button class="secondary">Delete</button>
              </form>
            </td>
          </tr>
        {% endfor %}
      </tbody>
    </table>
  {% else %}
    <p class="muted">No allergies.</p>
  {% endif %}
{% endblock content %}
"#;

/// Register all page templates.
pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", BASE_HTML),
        ("index.html", INDEX_HTML),
        ("patient_form.html", PATIENT_FORM_HTML),
        ("patient_detail.html", PATIENT_DETAIL_HTML),
    ])?;
    Ok(tera)
}
