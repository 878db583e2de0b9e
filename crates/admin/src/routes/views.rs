//! Text screens rendered with Askama.
//!
//! Every screen shares the `base.txt` layout: title, navigation bar and the
//! active notification.

use askama::Template;

use author_desk_core::Author;

use crate::components::authors_table_config;
use crate::filters;
use crate::models::{AuthorForm, FormField};

use super::NavItem;

/// Layout data shared by every screen.
#[derive(Debug, Clone, Default)]
pub struct Chrome {
    pub nav: Vec<NavItem>,
    pub notification: Option<String>,
}

/// Browse screen template.
#[derive(Template)]
#[template(path = "browse.txt")]
struct BrowseTemplate<'a> {
    nav: &'a [NavItem],
    notification: Option<&'a str>,
    search: &'a str,
    authors: &'a [&'a Author],
}

/// Login screen template.
#[derive(Template)]
#[template(path = "login.txt")]
struct LoginTemplate<'a> {
    nav: &'a [NavItem],
    notification: Option<&'a str>,
}

/// Access denied screen template.
#[derive(Template)]
#[template(path = "access_denied.txt")]
struct AccessDeniedTemplate<'a> {
    nav: &'a [NavItem],
    notification: Option<&'a str>,
}

/// One labelled form value.
struct FieldView {
    label: &'static str,
    value: String,
}

/// Open author form.
struct FormView {
    title: &'static str,
    fields: Vec<FieldView>,
}

impl From<&AuthorForm> for FormView {
    fn from(form: &AuthorForm) -> Self {
        Self {
            title: if form.editing().is_some() {
                "Edit Author"
            } else {
                "Add New Author"
            },
            fields: FormField::ALL
                .into_iter()
                .map(|field| FieldView {
                    label: field.label(),
                    value: form.value(field).to_string(),
                })
                .collect(),
        }
    }
}

/// Admin panel template.
#[derive(Template)]
#[template(path = "admin_panel.txt")]
struct AdminPanelTemplate<'a> {
    nav: &'a [NavItem],
    notification: Option<&'a str>,
    form: Option<FormView>,
    header: String,
    rule: String,
    rows: Vec<String>,
    empty_title: &'a str,
}

/// Render the browse screen for an already filtered author list.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn browse(chrome: &Chrome, search: &str, authors: &[&Author]) -> askama::Result<String> {
    BrowseTemplate {
        nav: &chrome.nav,
        notification: chrome.notification.as_deref(),
        search,
        authors,
    }
    .render()
}

/// Render the login prompt.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn login(chrome: &Chrome) -> askama::Result<String> {
    LoginTemplate {
        nav: &chrome.nav,
        notification: chrome.notification.as_deref(),
    }
    .render()
}

/// Render the access denied message shown for the admin panel to non-admins.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn access_denied(chrome: &Chrome) -> askama::Result<String> {
    AccessDeniedTemplate {
        nav: &chrome.nav,
        notification: chrome.notification.as_deref(),
    }
    .render()
}

/// Render the admin panel: the author table, or the form when one is open.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn admin_panel(
    chrome: &Chrome,
    authors: &[Author],
    form: Option<&AuthorForm>,
) -> askama::Result<String> {
    let table = authors_table_config();
    let rows = authors
        .iter()
        .map(|a| {
            let id = a.id.to_string();
            table.row(&[&id, &a.first_name, &a.last_name, &a.bio])
        })
        .collect();

    AdminPanelTemplate {
        nav: &chrome.nav,
        notification: chrome.notification.as_deref(),
        form: form.map(FormView::from),
        header: table.header(),
        rule: table.rule(),
        rows,
        empty_title: &table.empty_title,
    }
    .render()
}
