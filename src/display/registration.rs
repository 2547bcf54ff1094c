//! Registration display formatting

use crate::form::{convert_date, ValidationErrors};
use crate::models::RegistrationData;
use crate::notification::{Notification, NotificationKind};

/// Label/value rows of the summary shown before submitting
///
/// Selected codes are shown as stored, the birth date as `DD/MM/YYYY`.
pub fn summary_rows(data: &RegistrationData) -> Vec<(&'static str, String)> {
    vec![
        ("Nome", data.full_name.clone()),
        ("Data de Nascimento", convert_date(&data.birth_date)),
        ("Sexo", data.gender.clone()),
        ("Estado Civil", data.marital_status.clone()),
        ("Endereço", data.address.summary_line()),
    ]
}

/// Format the registration summary, one row per line
pub fn format_summary(data: &RegistrationData) -> String {
    let rows = summary_rows(data);
    let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);

    let mut output = String::from("Resumo da Inscrição\n");
    for (label, value) in rows {
        let pad = width - label.chars().count();
        output.push_str(&format!("  {}:{} {}\n", label, " ".repeat(pad), value));
    }

    output
}

/// Format validation errors as `key: message` lines
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("  {}: {}\n", field, message))
        .collect()
}

/// Format a notification for a plain terminal
pub fn format_notification(notification: &Notification) -> String {
    let marker = match notification.kind {
        NotificationKind::Success => "+",
        NotificationKind::Error => "x",
    };
    format!(
        "[{}] {}\n    {}",
        marker, notification.title, notification.description
    )
}
